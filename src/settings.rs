//! Scorer settings
//!
//! Loaded from a JSON file on native builds, or passed as a JSON string by
//! the browser host. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Longest team name the scoreboard will carry
pub const MAX_TEAM_NAME_LEN: usize = 32;

/// Team names must be non-blank and at most `MAX_TEAM_NAME_LEN` characters
pub fn check_team_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::Settings("team name is empty".into()));
    }
    if name.chars().count() > MAX_TEAM_NAME_LEN {
        return Err(ScoreError::Settings(format!(
            "team name longer than {MAX_TEAM_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// How the engine treats malformed ball events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept every event and apply it arithmetically
    #[default]
    Permissive,
    /// Reject impossible run values and deliveries after all out
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Permissive => "permissive",
            ValidationMode::Strict => "strict",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "permissive" | "lenient" => Some(ValidationMode::Permissive),
            "strict" => Some(ValidationMode::Strict),
            _ => None,
        }
    }
}

/// Match settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Batting side shown on the scoreboard
    pub team_name: String,
    /// Runs to chase, if any
    pub target: Option<u32>,
    /// Event validation policy
    pub validation: ValidationMode,
    /// Cap on undo snapshots (None = unbounded until reset)
    pub history_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            team_name: "Home Team".to_string(),
            target: None,
            validation: ValidationMode::Permissive,
            history_limit: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        check_team_name(&self.team_name)?;
        if self.history_limit == Some(0) {
            return Err(ScoreError::Settings("history limit must be at least 1".into()));
        }
        Ok(())
    }

    pub fn is_strict(&self) -> bool {
        self.validation == ValidationMode::Strict
    }
}
