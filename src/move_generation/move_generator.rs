use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Legal move source used by search, perft and game-status queries.
///
/// Implementations may mutate the position while probing moves but must hand
/// it back unchanged.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> ChessResult<Vec<Move>>;
}
