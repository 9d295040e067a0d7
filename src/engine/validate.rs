//! Strict-mode event checks
//!
//! Only consulted when the engine runs with `ValidationMode::Strict`.

use super::state::{BallEvent, BallKind, MatchState};
use crate::consts::*;
use crate::error::{Result, ScoreError};

/// Largest run value accepted off a single legal delivery (0-6 inclusive)
pub const MAX_RUNS_PER_BALL: u32 = 6;

/// Check that `event` is a well-formed delivery for `state`
pub fn check_event(state: &MatchState, event: &BallEvent) -> Result<()> {
    if state.is_all_out() {
        return Err(ScoreError::InningsComplete {
            wickets: state.wickets,
        });
    }

    let reason = match event.kind {
        BallKind::Run if event.value > MAX_RUNS_PER_BALL => Some("more than six runs off one ball"),
        BallKind::Wicket if event.value != 0 => Some("a dismissal carries no runs"),
        BallKind::Wide | BallKind::NoBall if event.value < EXTRA_PENALTY_RUNS => {
            Some("extras include the one-run penalty")
        }
        _ => None,
    };

    match reason {
        Some(reason) => Err(ScoreError::InvalidEvent {
            kind: event.kind,
            value: event.value,
            reason,
        }),
        None => Ok(()),
    }
}
