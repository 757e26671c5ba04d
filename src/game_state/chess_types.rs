//! Core value types of the position model: colors, piece kinds, pieces,
//! squares and castling-rights flags.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move / owner of a piece. `None` only appears on the empty-square
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    None,
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Rank delta of a pawn push for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
            Color::None => 0,
        }
    }

    /// Rank the king and rooks start on.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::Black => 7,
            _ => 0,
        }
    }
}

/// Piece kind. `None` is the canonical empty-square marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    None,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub const NONE: Piece = Piece {
        kind: PieceKind::None,
        color: Color::None,
        has_moved: false,
    };

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self.kind, PieceKind::None)
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}

/// Board coordinate. Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    /// Board array index (`a1 == 0`, `h8 == 63`). Only meaningful for valid squares.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank * 8 + self.file) as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            rank: (index / 8) as i8,
            file: (index % 8) as i8,
        }
    }

    /// Square shifted by `(d_rank, d_file)`, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let next = Square::new(self.rank + d_rank, self.file + d_file);
        next.is_valid().then_some(next)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        let file = char::from(b'a' + self.file as u8);
        write!(f, "{}{}", file, self.rank + 1)
    }
}

/// Castling rights bitmask, one bit per side and wing.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
        Color::None => 0,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
        Color::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offset_stays_on_board() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn square_index_round_trips() {
        for index in 0..64 {
            assert_eq!(Square::from_index(index).index(), index);
        }
        assert_eq!(Square::new(3, 4).to_string(), "e4");
    }

    #[test]
    fn sentinel_piece_is_empty() {
        assert!(Piece::NONE.is_none());
        assert_eq!(Piece::default(), Piece::NONE);
        assert_eq!(Color::None.opposite(), Color::None);
        assert!(!Piece::new(PieceKind::Pawn, Color::White).is_none());
    }
}
