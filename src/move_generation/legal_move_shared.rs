use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::moves::sliding_rays::ray;

/// Quiet move onto an empty square, capture onto an enemy piece, nothing onto
/// an own piece.
#[inline]
pub fn push_step_move(game_state: &GameState, from: Square, to: Square, out: &mut Vec<Move>) {
    let own = game_state.piece_at(from).color;
    let target = game_state.piece_at(to);
    if target.is_none() {
        out.push(Move::quiet(from, to));
    } else if target.color != own {
        out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
    }
}

/// Ray-cast along each direction until the edge, an own piece (excluded) or an
/// enemy piece (captured, then stop).
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let own = game_state.piece_at(from).color;
    for &direction in directions {
        for to in ray(from, direction) {
            let target = game_state.piece_at(to);
            if target.is_none() {
                out.push(Move::quiet(from, to));
                continue;
            }
            if target.color != own {
                out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
            }
            break;
        }
    }
}
