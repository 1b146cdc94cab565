//! Build file loader.
//!
//! A build is everything a request is made from, written as TOML:
//!
//! ```toml
//! race = "night_elf"
//! gear_file = "t5.ron"          # optional, relative to this file
//!
//! [buffs]
//! arcane_brilliance = true
//! moonkin_aura = "improved"
//!
//! [custom_stats]
//! spell_power = 1.0
//!
//! [[gear]]
//! slot = "main_hand"
//! id = 12345
//!
//! [class]
//! agent = { primary_spell = "starfire", faerie_fire = true }
//! talents = { moonkin_form = true }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use planner_core::proto::{Buffs, Consumes, Encounter, Race};
use planner_core::{ClassSpec, Gear, Session, Stat, Stats};
use serde::Deserialize;
use serde_json::Value;

use crate::loaders::{GearEntry, GearLoader, LoadResult, read_file};

/// Raw class inputs; classified into a [`ClassSpec`] on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassSection {
    agent: Value,
    #[serde(default = "empty_object")]
    talents: Value,
    #[serde(default = "empty_object")]
    options: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Build file structure for TOML files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildFile {
    #[serde(default)]
    race: Race,
    #[serde(default)]
    buffs: Buffs,
    #[serde(default)]
    consumes: Consumes,
    #[serde(default)]
    custom_stats: BTreeMap<String, f64>,
    #[serde(default)]
    encounter: Encounter,
    gear_file: Option<PathBuf>,
    #[serde(default)]
    gear: Vec<GearEntry>,
    class: ClassSection,
}

/// A fully validated build.
#[derive(Debug, Clone, PartialEq)]
pub struct Build {
    pub race: Race,
    pub buffs: Buffs,
    pub consumes: Consumes,
    pub custom_stats: Stats,
    pub encounter: Encounter,
    pub gear: Gear,
    pub class: ClassSpec,
}

impl Build {
    /// Creates a session holding this build.
    pub fn into_session(self) -> LoadResult<Session> {
        let session = Session::new(self.class);
        session.set_race(self.race)?;
        session.set_buffs(self.buffs)?;
        session.set_consumes(self.consumes)?;
        session.set_custom_stats(self.custom_stats)?;
        session.set_encounter(self.encounter)?;
        session.set_gear(self.gear)?;
        Ok(session)
    }
}

/// Loader for builds from TOML files.
pub struct BuildLoader;

impl BuildLoader {
    /// Load a build from a TOML file.
    ///
    /// A `gear_file` entry is resolved relative to the build file.
    pub fn load(path: &Path) -> LoadResult<Build> {
        let content = read_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let build = Self::parse_in(&content, base_dir)?;
        tracing::debug!(
            path = %path.display(),
            class = %build.class.class(),
            equipped = build.gear.equipped_count(),
            "loaded build"
        );
        Ok(build)
    }

    /// Parse a build whose `gear_file`, if any, lives in `base_dir`.
    pub fn parse_in(content: &str, base_dir: &Path) -> LoadResult<Build> {
        let file: BuildFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build TOML: {}", e))?;

        let gear = match (file.gear_file, file.gear.is_empty()) {
            (Some(_), false) => {
                anyhow::bail!("Build lists both gear_file and inline [[gear]] entries")
            }
            (Some(gear_file), true) => GearLoader::load(&base_dir.join(gear_file))?,
            (None, _) => GearEntry::into_gear(file.gear)?,
        };

        let custom_stats = file
            .custom_stats
            .into_iter()
            .map(|(name, value)| -> LoadResult<(Stat, f64)> {
                let stat = name
                    .parse::<Stat>()
                    .map_err(|_| anyhow::anyhow!("Unknown stat '{}' in [custom_stats]", name))?;
                Ok((stat, value))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let class = ClassSpec::from_raw(
            &file.class.agent,
            &file.class.talents,
            &file.class.options,
        )
        .map_err(|e| anyhow::anyhow!("Invalid [class] section: {}", e))?;

        Ok(Build {
            race: file.race,
            buffs: file.buffs,
            consumes: file.consumes,
            custom_stats: Stats::from_entries(custom_stats),
            encounter: file.encounter,
            gear,
            class,
        })
    }
}
