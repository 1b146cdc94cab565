//! Capability classes and their class-specific inputs.
//!
//! Agent, talent and option values arrive from outside (build files, UI
//! state) in an untyped form. They are classified once, here, into closed
//! enums; everything downstream matches exhaustively on those enums.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::proto::{
    BalanceDruidAgent, BalanceDruidOptions, DruidTalents, ElementalShamanAgent,
    ElementalShamanOptions, ShamanTalents,
};

/// The closed set of supported capability classes.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum CapabilityClass {
    BalanceDruid,
    ElementalShaman,
}

impl CapabilityClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BalanceDruid => "balance_druid",
            Self::ElementalShaman => "elemental_shaman",
        }
    }
}

/// Rotation agent of one capability class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassAgent {
    BalanceDruid(BalanceDruidAgent),
    ElementalShaman(ElementalShamanAgent),
}

impl ClassAgent {
    pub const fn class(&self) -> CapabilityClass {
        match self {
            Self::BalanceDruid(_) => CapabilityClass::BalanceDruid,
            Self::ElementalShaman(_) => CapabilityClass::ElementalShaman,
        }
    }

    /// Tests an opaque agent value against every class's agent shape.
    ///
    /// Exactly one shape must accept it.
    pub fn classify(raw: &Value) -> Result<Self, RequestError> {
        let mut matches = Vec::new();
        if let Ok(agent) = BalanceDruidAgent::deserialize(raw) {
            matches.push(Self::BalanceDruid(agent));
        }
        if let Ok(agent) = ElementalShamanAgent::deserialize(raw) {
            matches.push(Self::ElementalShaman(agent));
        }

        if matches.len() > 1 {
            return Err(RequestError::AmbiguousConfiguration {
                classes: matches.iter().map(|agent| agent.class().name()).collect(),
            });
        }
        let agent = matches
            .pop()
            .ok_or_else(|| RequestError::UnrecognizedConfiguration {
                options: raw.to_string(),
            })?;

        tracing::debug!(class = %agent.class(), "classified agent");
        Ok(agent)
    }
}

/// Talent tree of one class family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Talents {
    Druid(DruidTalents),
    Shaman(ShamanTalents),
}

impl Talents {
    /// Decodes raw talents as the talent tree of `class`.
    pub fn for_class(class: CapabilityClass, raw: &Value) -> Result<Self, RequestError> {
        let decoded = match class {
            CapabilityClass::BalanceDruid => DruidTalents::deserialize(raw).map(Self::Druid),
            CapabilityClass::ElementalShaman => ShamanTalents::deserialize(raw).map(Self::Shaman),
        };
        decoded.map_err(|error| RequestError::UnrecognizedConfiguration {
            options: format!("{raw} ({class} talents: {error})"),
        })
    }

    /// True if these talents belong to `class`.
    pub const fn fits(&self, class: CapabilityClass) -> bool {
        matches!(
            (self, class),
            (Self::Druid(_), CapabilityClass::BalanceDruid)
                | (Self::Shaman(_), CapabilityClass::ElementalShaman)
        )
    }
}

/// Class-specific options of one capability class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassOptions {
    BalanceDruid(BalanceDruidOptions),
    ElementalShaman(ElementalShamanOptions),
}

impl ClassOptions {
    pub const fn class(&self) -> CapabilityClass {
        match self {
            Self::BalanceDruid(_) => CapabilityClass::BalanceDruid,
            Self::ElementalShaman(_) => CapabilityClass::ElementalShaman,
        }
    }

    /// Decodes raw options as the options of `class`.
    pub fn for_class(class: CapabilityClass, raw: &Value) -> Result<Self, RequestError> {
        let decoded = match class {
            CapabilityClass::BalanceDruid => {
                BalanceDruidOptions::deserialize(raw).map(Self::BalanceDruid)
            }
            CapabilityClass::ElementalShaman => {
                ElementalShamanOptions::deserialize(raw).map(Self::ElementalShaman)
            }
        };
        decoded.map_err(|error| RequestError::UnrecognizedConfiguration {
            options: format!("{raw} ({class} options: {error})"),
        })
    }
}

/// Agent, talents and options of one capability class, classified together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSpec {
    pub agent: ClassAgent,
    pub talents: Talents,
    pub options: ClassOptions,
}

impl ClassSpec {
    /// Classifies the agent, then decodes talents and options for its class.
    pub fn from_raw(agent: &Value, talents: &Value, options: &Value) -> Result<Self, RequestError> {
        let agent = ClassAgent::classify(agent)?;
        let class = agent.class();
        Ok(Self {
            talents: Talents::for_class(class, talents)?,
            options: ClassOptions::for_class(class, options)?,
            agent,
        })
    }

    pub const fn class(&self) -> CapabilityClass {
        self.agent.class()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::proto::{AgentType, PrimarySpell};

    #[test]
    fn druid_agent_shape_classifies_as_balance_druid() {
        let agent =
            ClassAgent::classify(&json!({ "primary_spell": "adaptive", "faerie_fire": true }))
                .unwrap();

        assert_eq!(
            agent,
            ClassAgent::BalanceDruid(BalanceDruidAgent {
                primary_spell: PrimarySpell::Adaptive,
                faerie_fire: true,
            })
        );
    }

    #[test]
    fn shaman_agent_shape_classifies_as_elemental_shaman() {
        let agent = ClassAgent::classify(&json!({ "type": "fixed_lbcl" })).unwrap();

        assert_eq!(agent.class(), CapabilityClass::ElementalShaman);
        assert_eq!(
            agent,
            ClassAgent::ElementalShaman(ElementalShamanAgent {
                kind: AgentType::FixedLbcl
            })
        );
    }

    #[test]
    fn unknown_shape_is_unrecognized() {
        let raw = json!({ "type": "adaptive", "faerie_fire": true });
        let error = ClassAgent::classify(&raw).unwrap_err();

        assert!(matches!(
            error,
            RequestError::UnrecognizedConfiguration { options } if options.contains("faerie_fire")
        ));
        assert!(ClassAgent::classify(&json!(7)).is_err());
    }

    #[test]
    fn talents_must_fit_the_agent_class() {
        let error = ClassSpec::from_raw(
            &json!({ "type": "adaptive" }),
            &json!({ "moonkin_form": true }),
            &json!({}),
        )
        .unwrap_err();
        assert!(matches!(error, RequestError::UnrecognizedConfiguration { .. }));

        let spec = ClassSpec::from_raw(
            &json!({ "type": "adaptive" }),
            &json!({ "lightning_overload": 5, "elemental_mastery": true }),
            &json!({ "water_shield": true }),
        )
        .unwrap();
        assert_eq!(spec.class(), CapabilityClass::ElementalShaman);
        assert!(spec.talents.fits(CapabilityClass::ElementalShaman));
        assert!(!spec.talents.fits(CapabilityClass::BalanceDruid));
        assert_eq!(spec.options.class(), CapabilityClass::ElementalShaman);
    }
}
