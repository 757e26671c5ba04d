use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Stores only what the move changed: the pieces it touched (with their
/// `has_moved` flags) and the scalar state it overwrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Piece,
    /// Differs from `mv.to` only for en-passant captures.
    pub captured_square: Square,
    /// `(rook_from, rook_to, rook_before_move)` for castling moves.
    pub castling_rook: Option<(Square, Square, Piece)>,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
