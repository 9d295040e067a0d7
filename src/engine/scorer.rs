//! Match engine: current state plus undo history

use std::collections::VecDeque;

use super::state::{BallEvent, MatchState};
use super::transition::advance;
use super::validate::check_event;
use crate::command::{Command, Outcome};
use crate::error::Result;
use crate::settings::{Settings, check_team_name};

/// Owns the innings state and the snapshots needed to undo it
///
/// All operations take `&mut self` and run to completion; callers sharing
/// an engine across threads must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    state: MatchState,
    /// Pre-transition snapshots, oldest first
    history: VecDeque<MatchState>,
    settings: Settings,
}

impl MatchEngine {
    /// Engine with default (permissive, unbounded history) settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            state: MatchState::new(),
            history: VecDeque::new(),
            settings,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Rename the batting side; the current name stays on error
    pub fn set_team_name(&mut self, name: &str) -> Result<()> {
        check_team_name(name)?;
        self.settings.team_name = name.trim().to_string();
        log::info!("Team renamed to {}", self.settings.team_name);
        Ok(())
    }

    /// Set or clear the runs to chase
    pub fn set_target(&mut self, target: Option<u32>) {
        self.settings.target = target;
    }

    /// Record a delivery without validation
    pub fn apply_ball(&mut self, event: BallEvent) -> &MatchState {
        let next = advance(&self.state, &event);
        let prev = std::mem::replace(&mut self.state, next);
        self.history.push_back(prev);

        if let Some(limit) = self.settings.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }

        log::debug!(
            "{} {} -> {} ({} ov)",
            event.kind,
            event.value,
            self.state.score_line(),
            self.state.overs_display()
        );
        &self.state
    }

    /// Record a delivery, checking it first when strict validation is on
    ///
    /// A rejected event leaves state and history untouched.
    pub fn try_apply_ball(&mut self, event: BallEvent) -> Result<&MatchState> {
        if self.settings.is_strict() {
            if let Err(err) = check_event(&self.state, &event) {
                log::warn!("Rejected delivery: {err}");
                return Err(err);
            }
        }
        Ok(self.apply_ball(event))
    }

    /// Revert the last delivery; a no-op when there is nothing to undo
    pub fn undo_last(&mut self) -> &MatchState {
        if let Some(prev) = self.history.pop_back() {
            self.state = prev;
            log::debug!(
                "Undo -> {} ({} ov)",
                self.state.score_line(),
                self.state.overs_display()
            );
        }
        &self.state
    }

    /// Start the innings over and forget all history
    pub fn reset(&mut self) -> &MatchState {
        self.state = MatchState::new();
        self.history.clear();
        log::info!("Match reset");
        &self.state
    }

    /// Run a scorer command against the engine
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Ball(event) => {
                self.try_apply_ball(event)?;
                Outcome::Updated
            }
            Command::Undo if self.can_undo() => {
                self.undo_last();
                Outcome::Updated
            }
            Command::Undo => Outcome::Unchanged,
            Command::Reset => {
                self.reset();
                Outcome::Updated
            }
            Command::Show => Outcome::Unchanged,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::engine::BallKind;
    use crate::error::ScoreError;
    use crate::settings::ValidationMode;
    use proptest::prelude::*;

    fn strict() -> MatchEngine {
        MatchEngine::with_settings(Settings {
            validation: ValidationMode::Strict,
            ..Default::default()
        })
    }

    #[test]
    fn test_scenario_mixed_over() {
        let mut engine = MatchEngine::new();
        for event in [
            BallEvent::run(4),
            BallEvent::run(1),
            BallEvent::wicket(),
            BallEvent::wide(),
            BallEvent::run(6),
        ] {
            engine.apply_ball(event);
        }
        let state = engine.state();
        assert_eq!(state.runs, 12);
        assert_eq!(state.wickets, 1);
        assert_eq!(state.completed_overs, 0);
        assert_eq!(state.current_over_balls, 4);
        assert_eq!(engine.history_len(), 5);
    }

    #[test]
    fn test_scenario_over_then_undo() {
        let mut engine = MatchEngine::new();
        for _ in 0..6 {
            engine.apply_ball(BallEvent::run(1));
        }
        assert_eq!(engine.state().completed_overs, 1);
        assert_eq!(engine.state().current_over_balls, 0);
        assert_eq!(engine.state().runs, 6);

        let state = engine.undo_last();
        assert_eq!(state.completed_overs, 0);
        assert_eq!(state.current_over_balls, 5);
        assert_eq!(state.runs, 5);
    }

    #[test]
    fn test_scenario_recent_window() {
        let mut engine = MatchEngine::new();
        let events: Vec<BallEvent> = (0..13).map(|i| BallEvent::run(i % 2)).collect();
        for event in events.iter().cloned() {
            engine.apply_ball(event);
        }
        let recent = &engine.state().recent_balls;
        assert_eq!(recent.len(), RECENT_BALLS_CAP);
        assert_eq!(recent[0], events[1]);
    }

    #[test]
    fn test_undo_restores_evicted_window() {
        let mut engine = MatchEngine::new();
        for runs in 0..12 {
            engine.apply_ball(BallEvent::run(runs % 7));
        }
        let before = engine.state().clone();
        engine.apply_ball(BallEvent::wide());
        assert_eq!(engine.state().recent_balls.front(), before.recent_balls.get(1));

        assert_eq!(engine.undo_last(), &before);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut engine = MatchEngine::new();
        assert!(!engine.can_undo());
        assert_eq!(engine.undo_last(), &MatchState::new());

        engine.apply_ball(BallEvent::run(2));
        engine.undo_last();
        // Everything undone: further undo changes nothing
        assert_eq!(engine.undo_last(), &MatchState::new());
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = MatchEngine::new();
        for _ in 0..20 {
            engine.apply_ball(BallEvent::run(4));
        }
        engine.apply_ball(BallEvent::wicket());
        assert_eq!(engine.reset(), &MatchState::new());
        assert!(!engine.can_undo());
        assert_eq!(engine.undo_last(), &MatchState::new());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut engine = MatchEngine::with_settings(Settings {
            history_limit: Some(3),
            ..Default::default()
        });
        for _ in 0..5 {
            engine.apply_ball(BallEvent::run(1));
        }
        assert_eq!(engine.history_len(), 3);
        engine.undo_last();
        engine.undo_last();
        engine.undo_last();
        // Oldest two snapshots were discarded
        assert_eq!(engine.state().runs, 2);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_permissive_accepts_odd_events() {
        let mut engine = MatchEngine::new();
        let state = engine
            .try_apply_ball(BallEvent::new(BallKind::Wicket, 6, "W"))
            .unwrap();
        assert_eq!(state.runs, 6);
        assert_eq!(state.wickets, 1);
    }

    #[test]
    fn test_strict_rejection_leaves_state() {
        let mut engine = strict();
        engine.try_apply_ball(BallEvent::run(4)).unwrap();
        let err = engine
            .try_apply_ball(BallEvent::new(BallKind::Run, 9, "9"))
            .unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(engine.state().runs, 4);
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_strict_stops_at_all_out() {
        let mut engine = strict();
        for _ in 0..MAX_WICKETS {
            engine.try_apply_ball(BallEvent::wicket()).unwrap();
        }
        assert!(engine.state().is_all_out());
        assert!(matches!(
            engine.try_apply_ball(BallEvent::run(1)),
            Err(ScoreError::InningsComplete { wickets: 10 })
        ));
        // Undo reopens the innings
        engine.undo_last();
        assert!(engine.try_apply_ball(BallEvent::run(1)).is_ok());
    }

    #[test]
    fn test_execute_commands() {
        let mut engine = MatchEngine::new();
        assert_eq!(engine.execute(Command::Undo).unwrap(), Outcome::Unchanged);
        assert_eq!(
            engine.execute(Command::Ball(BallEvent::run(6))).unwrap(),
            Outcome::Updated
        );
        assert_eq!(engine.execute(Command::Show).unwrap(), Outcome::Unchanged);
        assert_eq!(engine.execute(Command::Undo).unwrap(), Outcome::Updated);
        assert_eq!(engine.state().runs, 0);
        engine.execute(Command::Ball(BallEvent::wide())).unwrap();
        assert_eq!(engine.execute(Command::Reset).unwrap(), Outcome::Updated);
        assert!(!engine.can_undo());
        assert_eq!(engine.execute(Command::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_rename_mid_innings() {
        let mut engine = MatchEngine::new();
        engine.apply_ball(BallEvent::run(4));
        engine.set_team_name("  Tigers ").unwrap();
        assert_eq!(engine.settings().team_name, "Tigers");
        // Renaming touches neither score nor history
        assert_eq!(engine.state().runs, 4);
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_rename_rejects_blank_name() {
        let mut engine = MatchEngine::new();
        assert!(matches!(engine.set_team_name("   "), Err(ScoreError::Settings(_))));
        assert!(engine.set_team_name(&"x".repeat(33)).is_err());
        assert_eq!(engine.settings().team_name, "Home Team");
    }

    #[test]
    fn test_set_and_clear_target() {
        let mut engine = MatchEngine::new();
        engine.set_target(Some(120));
        assert_eq!(engine.settings().target, Some(120));
        engine.set_target(None);
        assert_eq!(engine.settings().target, None);
    }

    fn any_event() -> impl Strategy<Value = BallEvent> {
        prop_oneof![
            (0u32..=6).prop_map(BallEvent::run),
            Just(BallEvent::wicket()),
            Just(BallEvent::wide()),
            Just(BallEvent::no_ball()),
        ]
    }

    proptest! {
        #[test]
        fn prop_undo_is_left_inverse(
            prefix in prop::collection::vec(any_event(), 0..40),
            event in any_event(),
        ) {
            let mut engine = MatchEngine::new();
            for e in prefix {
                engine.apply_ball(e);
            }
            let before = engine.state().clone();
            let depth = engine.history_len();
            engine.apply_ball(event);
            prop_assert_eq!(engine.undo_last(), &before);
            prop_assert_eq!(engine.history_len(), depth);
        }

        #[test]
        fn prop_undo_all_returns_to_start(events in prop::collection::vec(any_event(), 0..40)) {
            let mut engine = MatchEngine::new();
            for e in &events {
                engine.apply_ball(e.clone());
            }
            for _ in 0..events.len() + 2 {
                engine.undo_last();
            }
            prop_assert_eq!(engine.state(), &MatchState::new());
        }

        #[test]
        fn prop_reset_is_absolute(events in prop::collection::vec(any_event(), 0..40)) {
            let mut engine = MatchEngine::new();
            for e in events {
                engine.apply_ball(e);
            }
            engine.reset();
            prop_assert_eq!(engine.state(), &MatchState::new());
            prop_assert_eq!(engine.history_len(), 0);
        }
    }
}
