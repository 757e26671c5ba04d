//! Full legal move generation pipeline.
//!
//! Walks the board in square order, collects pseudo-legal moves per piece,
//! then keeps only the moves that do not leave the mover's king attacked,
//! verified by applying and undoing each candidate.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> ChessResult<Vec<Move>> {
        let side = game_state.side_to_move;
        let pseudo = generate_pseudo_legal_moves(game_state);

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            game_state.apply_move(mv)?;
            // Illegal if own king is attacked after the move.
            let exposes_king = is_king_in_check(game_state, side);
            game_state.undo_move();

            if !exposes_king {
                legal.push(mv);
            }
        }

        Ok(legal)
    }
}

/// Moves obeying piece movement rules for the side to move, in a1..h8 order.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut pseudo = Vec::<Move>::with_capacity(64);

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut pseudo),
            PieceKind::King => generate_king_moves(game_state, from, &mut pseudo),
            PieceKind::None => {}
        }
    }

    pseudo
}
