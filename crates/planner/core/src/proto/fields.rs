//! Field-addressable settings structs.
//!
//! Buffs and consumables are toggled by icon inputs that name their target
//! field at runtime. [`state_fields!`] declares such a struct together with a
//! field enum parsed from snake_case names and uniform `i32` state access.

use super::common::{Potions, TristateEffect};

/// Conversion between a settings field and its integer icon state.
pub trait StateValue: Sized {
    fn to_state(&self) -> i32;
    fn from_state(state: i32) -> Self;
}

impl StateValue for bool {
    fn to_state(&self) -> i32 {
        i32::from(*self)
    }

    fn from_state(state: i32) -> Self {
        state > 0
    }
}

impl StateValue for i32 {
    fn to_state(&self) -> i32 {
        *self
    }

    fn from_state(state: i32) -> Self {
        state
    }
}

impl StateValue for TristateEffect {
    fn to_state(&self) -> i32 {
        *self as i32
    }

    fn from_state(state: i32) -> Self {
        match state {
            i32::MIN..=0 => Self::Missing,
            1 => Self::Regular,
            _ => Self::Improved,
        }
    }
}

impl StateValue for Potions {
    fn to_state(&self) -> i32 {
        *self as i32
    }

    fn from_state(state: i32) -> Self {
        match state {
            1 => Self::SuperManaPotion,
            2 => Self::DestructionPotion,
            _ => Self::UnknownPotion,
        }
    }
}

/// Declares a settings struct plus its field enum.
///
/// The field enum's variants serialize as snake_case, so each one parses from
/// the matching struct field name.
macro_rules! state_fields {
    (
        $(#[$meta:meta])*
        pub struct $name:ident, fields = $fields:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $variant:ident,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Addressable fields of [`", stringify!($name), "`].")]
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            strum::Display,
            strum::EnumString,
            strum::AsRefStr,
            strum::IntoStaticStr,
            strum::EnumIter,
        )]
        #[strum(serialize_all = "snake_case")]
        pub enum $fields {
            $( $variant, )*
        }

        impl $fields {
            /// Resolves a field by its snake_case name.
            pub fn from_name(name: &str) -> Result<Self, $crate::error::BindingError> {
                name.parse().map_err(|_| $crate::error::BindingError::BindingMisconfiguration {
                    object: stringify!($name),
                    field: name.to_owned(),
                })
            }
        }

        impl $name {
            /// Reads a field as an icon state.
            pub fn state(&self, field: $fields) -> i32 {
                match field {
                    $( $fields::$variant => $crate::proto::fields::StateValue::to_state(&self.$field), )*
                }
            }

            /// Writes a field from an icon state.
            pub fn set_state(&mut self, field: $fields, state: i32) {
                match field {
                    $( $fields::$variant => {
                        self.$field = $crate::proto::fields::StateValue::from_state(state);
                    } )*
                }
            }
        }
    };
}

pub(crate) use state_fields;
