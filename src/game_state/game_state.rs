//! Core mutable board state representation.
//!
//! `GameState` is the central model for the engine: a 64-square mailbox of
//! pieces, turn and castling flags, the en-passant target, clocks, and the
//! undo stack used by apply/undo style workflows in move generation and search.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // Indexed by `Square::index()`; empty squares hold `Piece::NONE`.
    pub board: [Piece; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [Piece::NONE; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Copy of the position with an empty undo history, suitable for handing
    /// to a search that must not see (or unwind past) the caller's history.
    pub fn snapshot(&self) -> Self {
        Self {
            undo_stack: Vec::new(),
            ..self.clone()
        }
    }

    /// Piece on `square`, or `Piece::NONE` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        if square.is_valid() {
            self.board[square.index()]
        } else {
            Piece::NONE
        }
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.index()] = piece;
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.board[square.index()] = Piece::NONE;
    }

    pub fn find_king_square(&self, color: Color) -> Option<Square> {
        self.board
            .iter()
            .position(|piece| piece.is(PieceKind::King, color))
            .map(Square::from_index)
    }

    /// Occupied squares with their pieces, in board order (a1..h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_none())
            .map(|(index, piece)| (Square::from_index(index), *piece))
    }

    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        apply_move(self, mv)
    }

    #[inline]
    pub fn undo_move(&mut self) {
        undo_move(self)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn new_game_has_kings_on_home_squares() {
        let game = GameState::new_game();
        assert_eq!(game.find_king_square(Color::White), Some(Square::new(0, 4)));
        assert_eq!(game.find_king_square(Color::Black), Some(Square::new(7, 4)));
        assert_eq!(game.pieces().count(), 32);
        assert_eq!(game.side_to_move, Color::White);
    }

    #[test]
    fn missing_king_is_reported_not_panicked() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(game.find_king_square(Color::Black), None);
    }

    #[test]
    fn piece_at_returns_sentinel_for_empty_and_off_board() {
        let game = GameState::new_game();
        assert_eq!(game.piece_at(Square::new(4, 4)), Piece::NONE);
        assert_eq!(game.piece_at(Square::new(8, 0)), Piece::NONE);
        assert!(game.piece_at(Square::new(0, 0)).is(PieceKind::Rook, Color::White));
    }

    #[test]
    fn snapshot_drops_history_only() {
        let mut game = GameState::new_game();
        let mv = crate::utils::long_algebraic::long_algebraic_to_move("e2e4", &game)
            .expect("e2e4 should parse");
        game.apply_move(mv).expect("e2e4 should apply");

        let snap = game.snapshot();
        assert_eq!(snap.history_len(), 0);
        assert_eq!(snap.board, game.board);
        assert_eq!(snap.get_fen(), game.get_fen());
    }
}
