//! Assembly of simulation requests from planner state.

use super::class::{ClassAgent, ClassOptions, Talents};
use crate::config::PlannerConfig;
use crate::error::RequestError;
use crate::gear::Gear;
use crate::proto::{
    BalanceDruid, Buffs, ComputeStatsRequest, Consumes, ElementalShaman, Encounter,
    IndividualSimRequest, Player, PlayerOptions, PlayerSpec, Race, Stats,
};

/// Attaches the class payload selected by `agent` to a copy of `player_options`.
///
/// The input is never modified. When talents or options belong to another
/// class than the agent, nothing is attached and the error carries a JSON
/// dump of the options being built.
pub fn with_spec_proto(
    player_options: &PlayerOptions,
    agent: &ClassAgent,
    talents: &Talents,
    class_options: &ClassOptions,
) -> Result<PlayerOptions, RequestError> {
    let spec = match (agent, talents, class_options) {
        (
            ClassAgent::BalanceDruid(agent),
            Talents::Druid(talents),
            ClassOptions::BalanceDruid(options),
        ) => PlayerSpec::BalanceDruid(BalanceDruid {
            agent: agent.clone(),
            talents: talents.clone(),
            options: options.clone(),
        }),
        (
            ClassAgent::ElementalShaman(agent),
            Talents::Shaman(talents),
            ClassOptions::ElementalShaman(options),
        ) => PlayerSpec::ElementalShaman(ElementalShaman {
            agent: agent.clone(),
            talents: talents.clone(),
            options: options.clone(),
        }),
        _ => return Err(unrecognized(player_options)),
    };

    tracing::debug!(class = spec.class_name(), "attached class payload");
    Ok(PlayerOptions {
        spec: Some(spec),
        ..player_options.clone()
    })
}

fn unrecognized(player_options: &PlayerOptions) -> RequestError {
    let options = serde_json::to_string(player_options)
        .unwrap_or_else(|error| format!("{player_options:?} (not serializable: {error})"));
    RequestError::UnrecognizedConfiguration { options }
}

/// Borrowed snapshot of everything a request is built from.
///
/// Building is pure: the same inputs always produce equal requests.
#[derive(Clone, Copy, Debug)]
pub struct RequestBuilder<'a> {
    pub buffs: &'a Buffs,
    pub consumes: &'a Consumes,
    pub custom_stats: &'a Stats,
    pub encounter: &'a Encounter,
    pub gear: &'a Gear,
    pub race: Race,
    pub agent: &'a ClassAgent,
    pub talents: &'a Talents,
    pub class_options: &'a ClassOptions,
}

impl RequestBuilder<'_> {
    /// Builds a character-sheet stats request.
    pub fn compute_stats_request(&self) -> Result<ComputeStatsRequest, RequestError> {
        Ok(ComputeStatsRequest {
            player: self.player()?,
            buffs: self.buffs.clone(),
        })
    }

    /// Builds a single-player simulation request.
    ///
    /// The minimum global cooldown is always [`PlannerConfig::GCD_MIN_SECONDS`].
    pub fn individual_sim_request(
        &self,
        iterations: i32,
        debug: bool,
    ) -> Result<IndividualSimRequest, RequestError> {
        let request = IndividualSimRequest {
            player: self.player()?,
            buffs: self.buffs.clone(),
            encounter: self.encounter.clone(),
            iterations,
            gcd_min: PlannerConfig::GCD_MIN_SECONDS,
            debug,
        };
        let debug_log = debug;
        tracing::debug!(iterations, debug_log, "built individual sim request");
        Ok(request)
    }

    fn player(&self) -> Result<Player, RequestError> {
        let generic = PlayerOptions {
            race: self.race,
            consumes: self.consumes.clone(),
            spec: None,
        };
        Ok(Player {
            custom_stats: self.custom_stats.as_array(),
            equipment: self.gear.as_spec(),
            options: with_spec_proto(&generic, self.agent, self.talents, self.class_options)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;
    use crate::gear::{EquippedItem, ItemId};
    use crate::proto::{
        AgentType, BalanceDruidAgent, BalanceDruidOptions, DruidTalents, ElementalShamanAgent,
        ElementalShamanOptions, ItemSlot, PrimarySpell, ShamanTalents, Stat,
    };

    fn druid_agent() -> ClassAgent {
        ClassAgent::BalanceDruid(BalanceDruidAgent {
            primary_spell: PrimarySpell::Starfire,
            faerie_fire: true,
        })
    }

    fn shaman() -> (ClassAgent, Talents, ClassOptions) {
        (
            ClassAgent::ElementalShaman(ElementalShamanAgent {
                kind: AgentType::Adaptive,
            }),
            Talents::Shaman(ShamanTalents::default()),
            ClassOptions::ElementalShaman(ElementalShamanOptions { water_shield: true }),
        )
    }

    #[test]
    fn tags_the_payload_and_leaves_the_input_alone() {
        let generic = PlayerOptions {
            race: Race::Troll10,
            ..PlayerOptions::default()
        };
        let (agent, talents, options) = shaman();

        let tagged = with_spec_proto(&generic, &agent, &talents, &options).unwrap();

        assert_eq!(generic.spec, None);
        assert_eq!(tagged.race, Race::Troll10);
        match tagged.spec {
            Some(PlayerSpec::ElementalShaman(spec)) => {
                assert_eq!(spec.agent.kind, AgentType::Adaptive);
                assert!(spec.options.water_shield);
            }
            other => panic!("expected elemental shaman payload, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_class_inputs_are_unrecognized() {
        let generic = PlayerOptions::default();
        let (_, talents, options) = shaman();

        let error = with_spec_proto(&generic, &druid_agent(), &talents, &options).unwrap_err();

        match error {
            RequestError::UnrecognizedConfiguration { options } => {
                let dumped: PlayerOptions = serde_json::from_str(&options).unwrap();
                assert_eq!(dumped, generic);
            }
            other => panic!("unexpected error {other:?}"),
        }

        let druid_options = ClassOptions::BalanceDruid(BalanceDruidOptions::default());
        assert!(with_spec_proto(&generic, &druid_agent(), &talents, &druid_options).is_err());
        assert!(
            with_spec_proto(
                &generic,
                &druid_agent(),
                &Talents::Druid(DruidTalents::default()),
                &druid_options
            )
            .is_ok()
        );
    }

    #[test]
    fn individual_sim_request_uses_the_fixed_gcd() {
        let (agent, talents, options) = shaman();
        let gear = Gear::new([(ItemSlot::MainHand, EquippedItem::new(ItemId(12345)))]);
        let stats = Stats::zero().with_stat(Stat::SpellPower, 10.0);
        let builder = RequestBuilder {
            buffs: &Buffs::default(),
            consumes: &Consumes::default(),
            custom_stats: &stats,
            encounter: &Encounter::default(),
            gear: &gear,
            race: Race::Orc,
            agent: &agent,
            talents: &talents,
            class_options: &options,
        };

        let request = builder.individual_sim_request(250, true).unwrap();

        assert_eq!(request.gcd_min, 0.75);
        assert_eq!(request.iterations, 250);
        assert!(request.debug);
        assert_eq!(request.player.equipment.items.len(), ItemSlot::COUNT);
        assert_eq!(request.player.equipment.items[14].id, 12345);
        assert_eq!(request.player.custom_stats.len(), Stat::COUNT);
        assert_eq!(request, builder.individual_sim_request(250, true).unwrap());
    }
}
