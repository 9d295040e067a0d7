//! Scorer commands
//!
//! Text input from a keypad, terminal or browser host, mapped onto engine
//! operations.

use crate::engine::BallEvent;
use crate::error::{Result, ScoreError};

/// A single scorer action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a delivery
    Ball(BallEvent),
    /// Revert the last delivery
    Undo,
    /// Start the innings over
    Reset,
    /// Redisplay the scoreboard
    Show,
    /// Leave the scorer
    Quit,
}

/// What a command did to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Unchanged,
    Quit,
}

impl Command {
    /// Parse a command word (case-insensitive, surrounding space ignored)
    pub fn parse(input: &str) -> Result<Self> {
        let word = input.trim().to_lowercase();
        let command = match word.as_str() {
            "0" | "." => Command::Ball(BallEvent::run(0)),
            "1" => Command::Ball(BallEvent::run(1)),
            "2" => Command::Ball(BallEvent::run(2)),
            "3" => Command::Ball(BallEvent::run(3)),
            "4" => Command::Ball(BallEvent::run(4)),
            "5" => Command::Ball(BallEvent::run(5)),
            "6" => Command::Ball(BallEvent::run(6)),
            "wd" | "wide" => Command::Ball(BallEvent::wide()),
            "nb" | "noball" | "no-ball" => Command::Ball(BallEvent::no_ball()),
            "w" | "wkt" | "wicket" | "out" => Command::Ball(BallEvent::wicket()),
            "u" | "undo" => Command::Undo,
            "reset" => Command::Reset,
            "s" | "show" => Command::Show,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ScoreError::UnknownCommand(input.trim().to_string())),
        };
        Ok(command)
    }
}

impl std::str::FromStr for Command {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}
