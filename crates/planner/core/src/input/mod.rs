//! Bidirectional binding between controls and session values.
//!
//! An [`InputConfig`] says how to reach one value of an owning object and
//! which event announces its changes. An [`Input`] pairs a config with a
//! concrete [`InputWidget`] and keeps the two in sync.

mod binding;
mod config;
mod icon;

pub use binding::{Input, InputWidget};
pub use config::{EventSelector, Getter, InputConfig, Predicate, Setter};
pub use icon::{
    ExclusivityTag, IconId, IconInput, IconPicker, IconTarget, buff_icons, consume_icons,
};
