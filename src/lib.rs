//! CricScore - live cricket score tracker
//!
//! Core modules:
//! - `engine`: Match state machine (deliveries, undo, reset)
//! - `command`: Scorer command words mapped onto engine operations
//! - `scoreboard`: Read-only view for presentation layers
//! - `feed`: Seeded delivery generator for demos
//! - `settings`: Team, target and validation settings

pub mod command;
pub mod engine;
pub mod error;
pub mod feed;
pub mod scoreboard;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use command::{Command, Outcome};
pub use engine::{BallEvent, BallKind, MatchEngine, MatchState};
pub use error::{Result, ScoreError};
pub use scoreboard::{BallStyle, RecentBall, Scoreboard};
pub use settings::{Settings, ValidationMode};

/// Scoring constants
pub mod consts {
    /// Legal deliveries in an over
    pub const BALLS_PER_OVER: u32 = 6;
    /// Deliveries kept in the recent-balls window
    pub const RECENT_BALLS_CAP: usize = 12;
    /// Dismissals that end an innings
    pub const MAX_WICKETS: u32 = 10;
    /// Penalty run carried by a wide or no-ball
    pub const EXTRA_PENALTY_RUNS: u32 = 1;
}
