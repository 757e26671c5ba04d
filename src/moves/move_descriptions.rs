//! Move value type and its flag bitset.
//!
//! A `Move` is an immutable description of one ply: origin, destination,
//! special-move flags and an optional promotion piece. Moves compare and hash
//! by every field, so a generated move and the same move parsed from text are
//! equal as long as the flags were inferred the same way.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const PAWN_TWO_FORWARD: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 3);
    pub const CASTLE_KING_SIDE: MoveFlags = MoveFlags(1 << 4);
    pub const CASTLE_QUEEN_SIDE: MoveFlags = MoveFlags(1 << 5);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn union(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for MoveFlags {
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        *self = self.union(rhs);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flags: MoveFlags,
    pub promotion: PieceKind,
}

impl Move {
    /// "No move found" sentinel.
    pub const NULL: Move = Move {
        from: Square::new(-1, -1),
        to: Square::new(-1, -1),
        flags: MoveFlags::NONE,
        promotion: PieceKind::None,
    };

    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::with_flags(from, to, MoveFlags::NONE)
    }

    #[inline]
    pub const fn with_flags(from: Square, to: Square, flags: MoveFlags) -> Self {
        Self {
            from,
            to,
            flags,
            promotion: PieceKind::None,
        }
    }

    /// Promotion move; `extra` carries `CAPTURE` for capturing promotions.
    #[inline]
    pub const fn promotion(from: Square, to: Square, extra: MoveFlags, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            flags: extra.union(MoveFlags::PROMOTION),
            promotion: kind,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        *self == Move::NULL
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub const fn is_pawn_two_forward(&self) -> bool {
        self.flags.contains(MoveFlags::PAWN_TWO_FORWARD)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    #[inline]
    pub const fn is_castle_king_side(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_KING_SIDE)
    }

    #[inline]
    pub const fn is_castle_queen_side(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_QUEEN_SIDE)
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.is_castle_king_side() || self.is_castle_queen_side()
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Display for Move {
    /// Long algebraic form (`e2e4`, `e7e8q`); the null move prints as `0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion() {
            let suffix = match self.promotion {
                PieceKind::Queen => "q",
                PieceKind::Rook => "r",
                PieceKind::Bishop => "b",
                PieceKind::Knight => "n",
                _ => "",
            };
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}
