//! Command implementations for the planner CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod gear;
mod request;

pub use gear::Gear;
pub use request::Request;
