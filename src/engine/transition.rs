//! Ball-by-ball state transition
//!
//! Pure function from (state, event) to the next state. No validation is
//! performed here; the engine applies strict checks before calling in.

use super::state::{BallEvent, BallKind, MatchState};
use crate::consts::*;

/// Compute the state after one delivery
pub fn advance(state: &MatchState, event: &BallEvent) -> MatchState {
    let mut next = state.clone();

    // Every kind adds its value; extras already carry their penalty run
    next.runs = next.runs.saturating_add(event.value);

    match event.kind {
        BallKind::Wicket => {
            next.wickets += 1;
            next.current_over_balls += 1;
        }
        BallKind::Run => {
            next.current_over_balls += 1;
        }
        BallKind::Wide | BallKind::NoBall => {}
    }

    // At most one legal ball per call, so equality is enough
    if next.current_over_balls == BALLS_PER_OVER {
        next.completed_overs += 1;
        next.current_over_balls = 0;
    }

    next.recent_balls.push_back(event.clone());
    while next.recent_balls.len() > RECENT_BALLS_CAP {
        next.recent_balls.pop_front();
    }

    next
}
