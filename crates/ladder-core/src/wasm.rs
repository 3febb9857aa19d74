//! WebAssembly bindings for the Ular Tangga rules engine.
//!
//! This module exposes the game engine to a JavaScript UI through
//! wasm-bindgen. Values cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameState;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game from a JSON array of player names
    #[wasm_bindgen(constructor)]
    pub fn new(player_names_json: &str) -> Result<WasmGame, JsValue> {
        let player_names: Vec<String> = serde_json::from_str(player_names_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid player names: {}", e)))?;

        let state = GameState::new(GameConfig::new(player_names))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmGame { state })
    }

    /// Roll for the current player. Returns the outcome JSON, or throws if
    /// the roll is not allowed.
    #[wasm_bindgen(js_name = rollAndAdvance)]
    pub fn roll_and_advance(&mut self) -> Result<String, JsValue> {
        match self.state.roll_and_advance() {
            Ok(outcome) => {
                Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Roll rejected: {}", e))),
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Get the current game snapshot as JSON
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get every snake and ladder as JSON (for the info panels)
    #[wasm_bindgen(js_name = topologyEntries)]
    pub fn topology_entries(&self) -> String {
        serde_json::to_string(&self.state.topology_entries()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the players (names, positions) as JSON
    #[wasm_bindgen(js_name = getPlayers)]
    pub fn get_players(&self) -> String {
        serde_json::to_string(self.state.players()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get valid actions as a JSON array
    #[wasm_bindgen(js_name = validActions)]
    pub fn valid_actions(&self) -> String {
        serde_json::to_string(&self.state.valid_actions()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the current player ID
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.state.current_player()
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner (if game is finished)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.state.get_winner()
    }
}
