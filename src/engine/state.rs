//! Match state and ball event types
//!
//! `MatchState` is a plain value: it carries no undo history of its own.
//! Snapshots for undo are owned by the engine alongside it.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Outcome category of a single delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallKind {
    /// Legal delivery, batters scored `value` runs (0 = dot ball)
    Run,
    /// Dismissal; consumes a legal delivery
    Wicket,
    /// Wide; extra, not a legal delivery
    Wide,
    /// No-ball; extra, not a legal delivery
    NoBall,
}

impl BallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallKind::Run => "run",
            BallKind::Wicket => "wicket",
            BallKind::Wide => "wide",
            BallKind::NoBall => "noball",
        }
    }

    /// Whether this kind counts toward the six balls of an over
    pub fn is_legal_delivery(&self) -> bool {
        matches!(self, BallKind::Run | BallKind::Wicket)
    }
}

impl fmt::Display for BallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One delivery outcome
///
/// Events are not validated on construction: `BallEvent::new` accepts any
/// kind/value pairing. Use the named constructors for the conventional ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallEvent {
    pub kind: BallKind,
    /// Runs added to the total by this event
    pub value: u32,
    /// Short display label ("4", "Wd", "NB", "W")
    #[serde(default)]
    pub label: String,
}

impl BallEvent {
    pub fn new(kind: BallKind, value: u32, label: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            label: label.into(),
        }
    }

    /// Runs off the bat on a legal delivery
    pub fn run(runs: u32) -> Self {
        Self::new(BallKind::Run, runs, runs.to_string())
    }

    pub fn wicket() -> Self {
        Self::new(BallKind::Wicket, 0, "W")
    }

    /// Wide carrying the one-run penalty
    pub fn wide() -> Self {
        Self::new(BallKind::Wide, EXTRA_PENALTY_RUNS, "Wd")
    }

    /// No-ball carrying the one-run penalty
    pub fn no_ball() -> Self {
        Self::new(BallKind::NoBall, EXTRA_PENALTY_RUNS, "NB")
    }

    pub fn is_legal_delivery(&self) -> bool {
        self.kind.is_legal_delivery()
    }

    pub fn is_extra(&self) -> bool {
        !self.kind.is_legal_delivery()
    }

    /// Four or six off the bat
    pub fn is_boundary(&self) -> bool {
        self.kind == BallKind::Run && (self.value == 4 || self.value == 6)
    }
}

/// Aggregate score of the innings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Cumulative total, extras included
    pub runs: u32,
    /// Dismissals so far
    pub wickets: u32,
    /// Full six-ball overs bowled
    pub completed_overs: u32,
    /// Legal balls in the over in progress (0..=5)
    pub current_over_balls: u32,
    /// Most recent deliveries, oldest first, at most `RECENT_BALLS_CAP`
    pub recent_balls: VecDeque<BallEvent>,
}

impl MatchState {
    /// Fresh innings: everything zero, no balls bowled
    pub fn new() -> Self {
        Self::default()
    }

    /// Overs in cricket notation, e.g. "4.3"
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.completed_overs, self.current_over_balls)
    }

    /// Legal deliveries bowled in the innings
    pub fn legal_balls(&self) -> u32 {
        self.completed_overs * BALLS_PER_OVER + self.current_over_balls
    }

    /// Current run rate rounded to two decimal places
    ///
    /// Defined as 0.0 before the first legal delivery.
    pub fn current_run_rate(&self) -> f64 {
        if self.completed_overs == 0 && self.current_over_balls == 0 {
            return 0.0;
        }
        let overs =
            self.completed_overs as f64 + self.current_over_balls as f64 / BALLS_PER_OVER as f64;
        let rate = self.runs as f64 / overs;
        (rate * 100.0).round() / 100.0
    }

    /// Run rate formatted with two decimals, e.g. "7.50"
    pub fn run_rate_display(&self) -> String {
        format!("{:.2}", self.current_run_rate())
    }

    /// Score in "runs/wickets" form
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= MAX_WICKETS
    }
}
