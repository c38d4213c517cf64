//! Game session state machine.
//!
//! ## Lifecycle
//!
//! - NotStarted -> Active (`initialize`)
//! - Active -> Completed (found count reaches the required total)
//! - Active -> Ended (`teardown`)
//! - Completed | Ended -> Active (`initialize` starts a new session)
//!
//! A tick is split in two: `begin_tick` captures the target context,
//! `resolve_tick` applies the classification against that context.

mod controller;
mod events;
mod state;

pub use controller::GameSession;
pub use events::{GameEvent, TargetChangeReason};
pub use state::*;
