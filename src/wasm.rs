//! Browser bindings
//!
//! The page owns all presentation; it forwards button presses as command
//! words and renders the scoreboard JSON it gets back.

use wasm_bindgen::prelude::*;

use crate::command::Command;
use crate::engine::MatchEngine;
use crate::error::ScoreError;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;

fn to_js(err: ScoreError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("CricScore core loaded");
}

/// One scorer per match
#[wasm_bindgen]
pub struct WasmScorer {
    engine: MatchEngine,
}

#[wasm_bindgen]
impl WasmScorer {
    /// Create a scorer from settings JSON ("" for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WasmScorer, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(to_js)?
        };
        Ok(Self {
            engine: MatchEngine::with_settings(settings),
        })
    }

    /// Run a command word and return the resulting scoreboard JSON
    pub fn command(&mut self, input: &str) -> Result<String, JsValue> {
        let command = Command::parse(input).map_err(to_js)?;
        self.engine.execute(command).map_err(to_js)?;
        self.scoreboard()
    }

    /// Current scoreboard as JSON
    pub fn scoreboard(&self) -> Result<String, JsValue> {
        serde_json::to_string(&Scoreboard::from_engine(&self.engine))
            .map_err(|e| to_js(e.into()))
    }

    /// Rename the batting side and return the scoreboard JSON
    pub fn set_team_name(&mut self, name: &str) -> Result<String, JsValue> {
        self.engine.set_team_name(name).map_err(to_js)?;
        self.scoreboard()
    }

    /// Set the target (`undefined` clears it) and return the scoreboard JSON
    pub fn set_target(&mut self, target: Option<u32>) -> Result<String, JsValue> {
        self.engine.set_target(target);
        self.scoreboard()
    }

    /// Drives the enabled state of the undo control
    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }
}
