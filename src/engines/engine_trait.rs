//! Engine abstraction layer used by the command-line front end.
//!
//! Defines common input parameters and output payloads so different engine
//! configurations can be driven through a single trait interface.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this call only.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

impl Default for EngineOutput {
    fn default() -> Self {
        Self {
            best_move: Move::NULL,
            best_score: 0,
            nodes: 0,
            info_lines: Vec::new(),
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            reason: "unsupported option".to_owned(),
        })
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput>;
}
