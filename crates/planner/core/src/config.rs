//! Planner configuration constants and tunable parameters.

use std::env;

/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Iterations requested for individual simulations.
    pub iterations: i32,
    /// Ask the simulation engine for a combat log.
    pub debug: bool,
}

impl PlannerConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of gem sockets on a single item.
    pub const MAX_GEM_SOCKETS: usize = 3;

    // ===== fixed simulation parameters =====
    /// Minimum global cooldown, in seconds. Fixed for every individual sim
    /// request this crate builds; not user-configurable.
    pub const GCD_MIN_SECONDS: f64 = 0.75;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ITERATIONS: i32 = 1000;

    pub fn new() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            debug: false,
        }
    }

    pub fn with_iterations(mut self, iterations: i32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_ITERATIONS` - Iterations per individual sim (default: 1000)
    /// - `PLANNER_DEBUG` - Request a combat log (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(iterations) = read_env::<i32>("PLANNER_ITERATIONS") {
            config.iterations = iterations.max(1);
        }
        if let Some(debug) = read_env_bool("PLANNER_DEBUG") {
            config.debug = debug;
        }

        config
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
