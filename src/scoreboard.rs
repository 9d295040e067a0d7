//! Read-only scoreboard view
//!
//! Everything a presentation layer needs to draw the score card, captured
//! from the engine in one serializable value.

use std::fmt;

use serde::Serialize;

use crate::consts::*;
use crate::engine::{BallEvent, BallKind, MatchEngine};

/// Innings label; only one innings is modeled
pub const INNINGS_LABEL: &str = "1st INN";

/// Display category of a recent delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BallStyle {
    Wicket,
    Four,
    Six,
    Extra,
    Dot,
    Runs,
}

impl BallStyle {
    pub fn of(event: &BallEvent) -> Self {
        if event.kind == BallKind::Wicket {
            BallStyle::Wicket
        } else if event.is_boundary() {
            if event.value == 6 { BallStyle::Six } else { BallStyle::Four }
        } else if event.is_extra() {
            BallStyle::Extra
        } else if event.value == 0 {
            BallStyle::Dot
        } else {
            BallStyle::Runs
        }
    }
}

/// One chip of the recent-balls strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentBall {
    pub label: String,
    pub kind: BallKind,
    pub value: u32,
    pub style: BallStyle,
}

impl From<&BallEvent> for RecentBall {
    fn from(event: &BallEvent) -> Self {
        Self {
            label: event.label.clone(),
            kind: event.kind,
            value: event.value,
            style: BallStyle::of(event),
        }
    }
}

/// Snapshot of the score card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scoreboard {
    pub team_name: String,
    pub innings: &'static str,
    /// "runs/wickets"
    pub score: String,
    pub runs: u32,
    pub wickets: u32,
    /// "overs.balls"
    pub overs: String,
    /// Current run rate, two decimals
    pub run_rate: String,
    /// Recent deliveries, oldest first
    pub recent: Vec<RecentBall>,
    /// Legal balls of the current over, e.g. "3/6"
    pub this_over: String,
    pub target: Option<u32>,
    pub runs_needed: Option<u32>,
    pub target_reached: bool,
    pub can_undo: bool,
}

impl Scoreboard {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        let state = engine.state();
        let settings = engine.settings();
        let target = settings.target;

        Self {
            team_name: settings.team_name.trim().to_string(),
            innings: INNINGS_LABEL,
            score: state.score_line(),
            runs: state.runs,
            wickets: state.wickets,
            overs: state.overs_display(),
            run_rate: state.run_rate_display(),
            recent: state.recent_balls.iter().map(RecentBall::from).collect(),
            this_over: format!("{}/{}", state.current_over_balls, BALLS_PER_OVER),
            target,
            runs_needed: target.map(|t| t.saturating_sub(state.runs)),
            target_reached: target.is_some_and(|t| state.runs >= t),
            can_undo: engine.can_undo(),
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.team_name.to_uppercase(), self.innings)?;
        writeln!(f, "  {}   Overs {}   CRR {}", self.score, self.overs, self.run_rate)?;
        match (self.target, self.runs_needed) {
            (Some(target), _) if self.target_reached => {
                writeln!(f, "  Target {target}: reached")?;
            }
            (Some(target), Some(needed)) => {
                writeln!(f, "  Target {target}: {needed} needed")?;
            }
            _ => {}
        }
        write!(f, "  Recent ({}): ", self.this_over)?;
        if self.recent.is_empty() {
            write!(f, "No balls bowled yet")
        } else {
            let labels: Vec<&str> = self.recent.iter().map(|b| b.label.as_str()).collect();
            write!(f, "{}", labels.join(" "))
        }
    }
}
