//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PlannerConfig> {
        let config: PlannerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let iterations = config.iterations;
        Ok(config.with_iterations(iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = ConfigLoader::parse("debug = true").unwrap();
        assert!(config.debug);
        assert_eq!(config.iterations, PlannerConfig::DEFAULT_ITERATIONS);
    }

    #[test]
    fn iterations_are_clamped() {
        let config = ConfigLoader::parse("iterations = -5").unwrap();
        assert_eq!(config.iterations, 1);
    }
}
