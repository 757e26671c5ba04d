//! Perft node counting for move-generator validation and benchmarking.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Count leaf nodes (and move categories at the last ply) `depth` plies deep.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    total: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    for mv in moves {
        game_state.apply_move(mv)?;

        let result = if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.is_capture());
            total.en_passant += u64::from(mv.is_en_passant());
            total.castles += u64::from(mv.is_castling());
            total.promotions += u64::from(mv.is_promotion());
            if is_king_in_check(game_state, game_state.side_to_move) {
                total.checks += 1;
                generator
                    .generate_legal_moves(game_state)
                    .map(|replies| total.checkmates += u64::from(replies.is_empty()))
            } else {
                Ok(())
            }
        } else {
            perft_recurse(generator, game_state, depth - 1, total)
        };

        game_state.undo_move();
        result?;
    }

    Ok(())
}
