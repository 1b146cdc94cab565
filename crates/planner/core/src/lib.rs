//! Configuration model and request assembly for a combat-simulation planner.
//!
//! `planner-core` holds everything between the user's choices and the
//! simulation engine: gear sets ([`gear`]), observable state ([`Session`])
//! with synchronous change events ([`event`]), controls bound to that state
//! ([`input`]), and the construction of engine requests from it
//! ([`request`]). Nothing here performs I/O.
pub mod config;
pub mod error;
pub mod event;
pub mod gear;
pub mod input;
pub mod proto;
pub mod request;
pub mod session;
#[cfg(feature = "wire")]
pub mod wire;

pub use config::PlannerConfig;
pub use error::{
    BindingError, EmitError, ErrorSeverity, GearError, ListenerError, ListenerResult,
    PickerError, PlannerError, RequestError,
};
pub use event::{ChangeEvent, SubscriptionId};
pub use gear::{EnchantId, EquippedItem, Gear, GemId, ItemId};
pub use input::{
    ExclusivityTag, IconId, IconInput, IconPicker, IconTarget, Input, InputConfig, InputWidget,
};
pub use proto::{ComputeStatsRequest, IndividualSimRequest, ItemSlot, Stat, Stats};
pub use request::{
    CapabilityClass, ClassAgent, ClassOptions, ClassSpec, RequestBuilder, Talents,
    with_spec_proto,
};
pub use session::Session;
