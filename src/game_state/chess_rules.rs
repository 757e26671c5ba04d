//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the home squares
//! of the castling pieces.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: i8 = 4;
pub const KINGSIDE_ROOK_FILE: i8 = 7;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;

/// Half-moves without a pawn move or capture after which a draw may be claimed.
pub const FIFTY_MOVE_RULE_PLIES: u16 = 100;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.home_rank(), KING_HOME_FILE)
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::Black => 6,
        _ => 1,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Black => 0,
        _ => 7,
    }
}
