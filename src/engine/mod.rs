//! Match state engine
//!
//! All scoring logic lives here. This module is pure:
//! - Each delivery maps the current state to a new one
//! - Undo history is held beside the state, never inside it
//! - No presentation or platform dependencies

pub mod scorer;
pub mod state;
pub mod transition;
pub mod validate;

pub use scorer::MatchEngine;
pub use state::{BallEvent, BallKind, MatchState};
pub use transition::advance;
