use go_rules::{Engine, Event, GameConfig, GoError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JSON body returned for a rejected action: `{ "error": "...", "message": "..." }`.
#[derive(Serialize)]
struct Rejection {
    error: &'static str,
    message: String,
}

impl From<GoError> for Rejection {
    fn from(e: GoError) -> Self {
        let error = match e {
            GoError::OutOfBounds => "out_of_bounds",
            GoError::OccupiedCell => "occupied_cell",
            GoError::KoViolation => "ko_violation",
            GoError::SuicideMove => "suicide_move",
            GoError::EmptyHistory => "empty_history",
        };
        Rejection {
            error,
            message: e.to_string(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#))
}

fn event_json<T: Into<Event>>(result: Result<T, GoError>) -> String {
    match result {
        Ok(event) => {
            let event: Event = event.into();
            to_json(&event)
        }
        Err(e) => to_json(&Rejection::from(e)),
    }
}

/// Browser-facing wrapper. Every action returns a JSON event the page redraws
/// from; the page never edits the board itself.
#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        Self {
            inner: Engine::new(size),
        }
    }

    /// Build from a JSON `GameConfig`, falling back to the default 19×19 when
    /// the config is malformed or names an empty board.
    pub fn from_config(config_json: &str) -> Self {
        let config = serde_json::from_str::<GameConfig>(config_json)
            .ok()
            .filter(|c| c.size > 0)
            .unwrap_or_default();
        Self {
            inner: Engine::with_config(config),
        }
    }

    // -- Game actions --

    /// Returns a `placed` event or a rejection.
    pub fn try_play(&mut self, row: u8, col: u8) -> String {
        event_json(self.inner.attempt_move((row, col)))
    }

    /// Returns an `undone` event or a rejection.
    pub fn undo(&mut self) -> String {
        event_json(self.inner.undo())
    }

    pub fn reset(&mut self) -> String {
        self.inner.reset();
        to_json(&Event::Reset)
    }

    // -- Queries --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board())
    }

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    /// 1 for Black, -1 for White, 0 off the board or empty.
    pub fn color_at(&self, row: u8, col: u8) -> i8 {
        match self.inner.color_at((row, col)) {
            Ok(Some(stone)) => stone.to_int(),
            _ => 0,
        }
    }

    pub fn current_player(&self) -> i8 {
        self.inner.current_player().to_int()
    }

    pub fn black_count(&self) -> u32 {
        self.inner.stone_counts().0
    }

    pub fn white_count(&self) -> u32 {
        self.inner.stone_counts().1
    }

    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        self.inner.is_legal((row, col))
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_row(&self) -> i16 {
        self.inner
            .ko_forbidden_point()
            .map_or(-1, |(row, _)| row as i16)
    }

    pub fn ko_col(&self) -> i16 {
        self.inner
            .ko_forbidden_point()
            .map_or(-1, |(_, col)| col as i16)
    }

    pub fn move_count(&self) -> usize {
        self.inner.move_count()
    }

    /// Full state for a redraw.
    pub fn snapshot_json(&self) -> String {
        to_json(&self.inner.snapshot())
    }

    pub fn history_json(&self) -> String {
        to_json(&self.inner.history())
    }
}
