//! Common error infrastructure for planner-core.
//!
//! This module provides the shared severity classification and the
//! [`PlannerError`] trait implemented by every error enum in the crate.
//! Domain-specific errors (e.g. [`GearError`], [`RequestError`]) live here as
//! well because they are few and cross module boundaries freely.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Fail Fast**: Programmer errors (bad slot, bad field name) surface at the
//!   call that introduced them, never later
//! - **No Retry**: Nothing in this crate recovers from its own errors; callers
//!   decide how to present or log them

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can fix its input and try again
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected inconsistency that indicates a bug
/// - **Fatal**: The configuration object can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Gear Errors
// ============================================================================

/// Errors raised while addressing equipment slots or gem sockets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GearError {
    /// Slot ordinal outside the fixed slot enumeration.
    #[error("invalid slot reference: ordinal {index} is outside the slot enumeration")]
    InvalidSlotReference { index: usize },

    /// Slot name that does not name any equipment slot.
    #[error("invalid slot reference: unknown slot name '{0}'")]
    UnknownSlotName(String),

    /// Gem socket index beyond the per-item maximum.
    #[error("gem socket {socket} exceeds the per-item maximum")]
    InvalidSocket { socket: usize },

    /// Enchant or gems given without an item to carry them.
    #[error("item spec has an enchant or gems but no item id")]
    MissingItemId,
}

impl PlannerError for GearError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSlotReference { .. } | Self::InvalidSocket { .. } => {
                ErrorSeverity::Internal
            }
            Self::UnknownSlotName(_) | Self::MissingItemId => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSlotReference { .. } => "GEAR_INVALID_SLOT_REFERENCE",
            Self::UnknownSlotName(_) => "GEAR_UNKNOWN_SLOT_NAME",
            Self::InvalidSocket { .. } => "GEAR_INVALID_SOCKET",
            Self::MissingItemId => "GEAR_MISSING_ITEM_ID",
        }
    }
}

// ============================================================================
// Binding Errors
// ============================================================================

/// Errors raised while wiring an input to a field of its owning object.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The binding names a field the owning object does not have.
    #[error("binding misconfiguration: '{object}' has no field '{field}'")]
    BindingMisconfiguration {
        object: &'static str,
        field: String,
    },

    /// An icon row was addressed past its last icon.
    #[error("icon index {index} is out of range for a row of {count}")]
    UnknownIcon { index: usize, count: usize },
}

impl PlannerError for BindingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BindingMisconfiguration { .. } => "BINDING_MISCONFIGURATION",
            Self::UnknownIcon { .. } => "BINDING_UNKNOWN_ICON",
        }
    }
}

/// Failure of an icon row edit: a bad index, or listeners failing on the write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl PlannerError for PickerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Binding(e) => e.severity(),
            Self::Emit(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Binding(e) => e.error_code(),
            Self::Emit(e) => e.error_code(),
        }
    }
}

// ============================================================================
// Emission Errors
// ============================================================================

/// Error returned by a single listener.
pub type ListenerError = Box<dyn std::error::Error + 'static>;

/// Result type returned by fallible listeners.
pub type ListenerResult = Result<(), ListenerError>;

/// One or more listeners failed during a single emission.
///
/// Every listener still ran; `failures` holds the rendered error of each one
/// that failed, in invocation order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("{} listener(s) failed: {}", .failures.len(), .failures.join("; "))]
    ListenerFailure { failures: Vec<String> },
}

impl EmitError {
    /// Merges two emission results, keeping every failure from both.
    pub fn merge(first: Result<(), Self>, second: Result<(), Self>) -> Result<(), Self> {
        match (first, second) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (
                Err(Self::ListenerFailure { mut failures }),
                Err(Self::ListenerFailure { failures: more }),
            ) => {
                failures.extend(more);
                Err(Self::ListenerFailure { failures })
            }
        }
    }
}

impl PlannerError for EmitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "EMIT_LISTENER_FAILURE"
    }
}

// ============================================================================
// Request Errors
// ============================================================================

/// Errors raised while building a simulation request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// No capability class accepts the supplied agent/talents/options.
    ///
    /// `options` is a JSON dump of the options value that was being built.
    #[error("unrecognized talents with options: {options}")]
    UnrecognizedConfiguration { options: String },

    /// The opaque agent value fits more than one capability class.
    #[error("ambiguous configuration: value matches {}", .classes.join(", "))]
    AmbiguousConfiguration { classes: Vec<&'static str> },
}

impl PlannerError for RequestError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedConfiguration { .. } => "REQUEST_UNRECOGNIZED_CONFIGURATION",
            Self::AmbiguousConfiguration { .. } => "REQUEST_AMBIGUOUS_CONFIGURATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_failures_from_both_sides() {
        let first = Err(EmitError::ListenerFailure {
            failures: vec!["a".into()],
        });
        let second = Err(EmitError::ListenerFailure {
            failures: vec!["b".into(), "c".into()],
        });

        let merged = EmitError::merge(first, second);
        assert_eq!(
            merged,
            Err(EmitError::ListenerFailure {
                failures: vec!["a".into(), "b".into(), "c".into()],
            })
        );
        assert_eq!(EmitError::merge(Ok(()), Ok(())), Ok(()));
    }

    #[test]
    fn severities_follow_who_must_act() {
        assert!(GearError::InvalidSlotReference { index: 40 }
            .severity()
            .is_internal());
        assert!(!RequestError::UnrecognizedConfiguration {
            options: "{}".into()
        }
        .severity()
        .is_internal());
        assert_eq!(
            BindingError::BindingMisconfiguration {
                object: "Buffs",
                field: "nope".into()
            }
            .error_code(),
            "BINDING_MISCONFIGURATION"
        );
    }
}
