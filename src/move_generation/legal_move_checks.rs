//! Attack detection and check / game-end classification.
//!
//! `is_square_attacked` re-derives attacks straight from the board and never
//! consults generated move lists, so move generation can call it freely.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_rays::ray;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.find_king_square(color)
}

/// `false` when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    if pawn_attack_origins(attacker_color, square)
        .any(|from| game_state.piece_at(from).is(PieceKind::Pawn, attacker_color))
    {
        return true;
    }

    if knight_targets(square).any(|from| game_state.piece_at(from).is(PieceKind::Knight, attacker_color)) {
        return true;
    }

    if slider_attacks(game_state, square, attacker_color, &ROOK_DIRECTIONS, PieceKind::Rook)
        || slider_attacks(game_state, square, attacker_color, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    {
        return true;
    }

    king_targets(square).any(|from| game_state.piece_at(from).is(PieceKind::King, attacker_color))
}

/// Walks each ray from `square` to its first occupant and checks whether it is
/// an attacker's `line_piece` or queen.
fn slider_attacks(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    line_piece: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(square, direction)
            .map(|sq| game_state.piece_at(sq))
            .find(|piece| !piece.is_none())
            .is_some_and(|piece| {
                piece.color == attacker_color
                    && (piece.kind == line_piece || piece.kind == PieceKind::Queen)
            })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Classify the position for the side to move: no legal moves while in check
/// is mate, without check it is stalemate.
pub fn game_status<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
) -> ChessResult<GameStatus> {
    if !generator.generate_legal_moves(game_state)?.is_empty() {
        return Ok(GameStatus::Ongoing);
    }

    let side = game_state.side_to_move;
    if is_king_in_check(game_state, side) {
        Ok(GameStatus::Checkmate {
            winner: side.opposite(),
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}
