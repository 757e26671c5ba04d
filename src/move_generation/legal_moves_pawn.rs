use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.piece_at(from).color;
    let forward = side.forward();
    let last_rank = promotion_rank(side);

    if let Some(to) = from.offset(forward, 0) {
        if game_state.piece_at(to).is_none() {
            if to.rank == last_rank {
                push_promotions(from, to, MoveFlags::NONE, out);
            } else {
                out.push(Move::quiet(from, to));
            }

            if from.rank == pawn_start_rank(side) {
                if let Some(two_step) = to.offset(forward, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(Move::with_flags(from, two_step, MoveFlags::PAWN_TWO_FORWARD));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_capture_targets(side, from) {
        let target = game_state.piece_at(to);
        if !target.is_none() && target.color != side {
            if to.rank == last_rank {
                push_promotions(from, to, MoveFlags::CAPTURE, out);
            } else {
                out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
            }
        } else if target.is_none() && game_state.en_passant_square == Some(to) {
            out.push(Move::with_flags(
                from,
                to,
                MoveFlags::EN_PASSANT | MoveFlags::CAPTURE,
            ));
        }
    }
}

fn push_promotions(from: Square, to: Square, extra: MoveFlags, out: &mut Vec<Move>) {
    for kind in PROMOTION_KINDS {
        out.push(Move::promotion(from, to, extra, kind));
    }
}
