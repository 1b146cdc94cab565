//! Data-driven planner content and loaders.
//!
//! This crate reads planner inputs from RON/TOML data files:
//! - Gear sets (data-driven via RON)
//! - Complete builds: race, buffs, consumables, encounter, gear and class
//!   inputs (data-driven via TOML)
//! - Planner configuration (data-driven via TOML)
//!
//! Loaded content is turned into planner-core values; class inputs are
//! classified on load, so a build that loads is a build that can be requested.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{Build, BuildLoader, ConfigLoader, GearEntry, GearLoader, LoadResult};
