use crate::game_state::chess_rules::{king_home, KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveFlags};

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        push_step_move(game_state, from, to, out);
    }

    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let king = game_state.piece_at(king_from);
    let side = king.color;
    let enemy = side.opposite();

    if king.has_moved || king_from != king_home(side) {
        return;
    }
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let rank = king_from.rank;

    if game_state.castling_rights & kingside_right(side) != 0
        && castling_rook_ready(game_state, Square::new(rank, KINGSIDE_ROOK_FILE), side)
    {
        let pass = Square::new(rank, king_from.file + 1);
        let dest = Square::new(rank, king_from.file + 2);
        if game_state.piece_at(pass).is_none()
            && game_state.piece_at(dest).is_none()
            && !is_square_attacked(game_state, pass, enemy)
            && !is_square_attacked(game_state, dest, enemy)
        {
            out.push(Move::with_flags(king_from, dest, MoveFlags::CASTLE_KING_SIDE));
        }
    }

    if game_state.castling_rights & queenside_right(side) != 0
        && castling_rook_ready(game_state, Square::new(rank, QUEENSIDE_ROOK_FILE), side)
    {
        let pass = Square::new(rank, king_from.file - 1);
        let dest = Square::new(rank, king_from.file - 2);
        // The b-file square only has to be empty; the king never crosses it.
        let rook_side = Square::new(rank, king_from.file - 3);
        if game_state.piece_at(pass).is_none()
            && game_state.piece_at(dest).is_none()
            && game_state.piece_at(rook_side).is_none()
            && !is_square_attacked(game_state, pass, enemy)
            && !is_square_attacked(game_state, dest, enemy)
        {
            out.push(Move::with_flags(king_from, dest, MoveFlags::CASTLE_QUEEN_SIDE));
        }
    }
}

fn castling_rook_ready(game_state: &GameState, square: Square, side: Color) -> bool {
    let rook = game_state.piece_at(square);
    rook.is(PieceKind::Rook, side) && !rook.has_moved
}
