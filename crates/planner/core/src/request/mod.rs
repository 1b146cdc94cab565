//! Variant dispatch and request assembly.
//!
//! [`class`] classifies opaque per-class inputs into closed enums;
//! [`builder`] turns planner state plus those enums into engine requests.

mod builder;
mod class;

pub use builder::{RequestBuilder, with_spec_proto};
pub use class::{CapabilityClass, ClassAgent, ClassOptions, ClassSpec, Talents};
