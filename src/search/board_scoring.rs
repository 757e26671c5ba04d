//! Style-weighted static evaluation.
//!
//! Search delegates static scoring to the `BoardScorer` trait. `StyleScorer`
//! combines material, piece-square tables and a king pawn-shield term, each
//! scaled by the active `StyleProfile`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_targets;
use crate::search::style_profile::StyleProfile;

pub const MATE_SCORE: i32 = 30000;

/// Charged to a side whose king is absent from the board.
pub const MISSING_KING_PENALTY: i32 = -10000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Default)]
pub struct StyleScorer {
    pub profile: StyleProfile,
}

impl StyleScorer {
    pub fn new(profile: StyleProfile) -> Self {
        Self { profile }
    }
}

impl BoardScorer for StyleScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate(game_state, game_state.side_to_move, &self.profile)
    }
}

// Tables are laid out as seen from White: first row is rank 8, last row is
// rank 1. Black reads them vertically mirrored.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
    50, 50,  50,  50,  50,  50, 50, 50,
    10, 10,  20,  30,  30,  20, 10, 10,
     5,  5,  10,  25,  25,  10,  5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5, -5, -10,   0,   0, -10, -5,  5,
     5, 10,  10, -20, -20,  10, 10,  5,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20,
    -10,   0,   0,  0,  0,   0,   0, -10,
    -10,   0,   5,  5,  5,   5,   0, -10,
     -5,   0,   5,  5,  5,   5,   0,  -5,
      0,   0,   5,  5,  5,   5,   0,  -5,
    -10,   5,   5,  5,  5,   5,   0, -10,
    -10,   0,   5,  0,  0,   0,   0, -10,
    -20, -10, -10, -5, -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDGAME_PST: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_ENDGAME_PST: [i32; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Zero-sum static score of `game_state` for `perspective`:
/// `evaluate(p, White) == -evaluate(p, Black)`.
pub fn evaluate(game_state: &GameState, perspective: Color, profile: &StyleProfile) -> i32 {
    let endgame = is_endgame(game_state);
    let own = side_score(game_state, perspective, endgame, profile);
    let other = side_score(game_state, perspective.opposite(), endgame, profile);
    (own - other).round() as i32
}

/// No queens left, or both queens with at most two minor pieces in total.
pub fn is_endgame(game_state: &GameState) -> bool {
    let mut queens = 0;
    let mut minors = 0;
    for (_, piece) in game_state.pieces() {
        if piece.kind == PieceKind::Queen {
            queens += 1;
        }
        if piece.kind.is_minor() {
            minors += 1;
        }
    }
    queens == 0 || (queens == 2 && minors <= 2)
}

fn side_score(game_state: &GameState, color: Color, endgame: bool, profile: &StyleProfile) -> f32 {
    let mut material = 0.0f32;
    let mut positional = 0i32;

    for (square, piece) in game_state.pieces().filter(|(_, piece)| piece.color == color) {
        material += profile.piece_value(piece.kind);
        positional += piece_square_value(piece, square, endgame);
    }

    let king_safety = match game_state.find_king_square(color) {
        Some(king_square) => {
            profile.king_safety_weight
                * profile.king_pawn_shield_bonus
                * king_shield_pawns(game_state, king_square, color) as f32
        }
        None => MISSING_KING_PENALTY as f32,
    };

    profile.material_weight * material + profile.positional_factor * positional as f32 + king_safety
}

#[inline]
fn piece_square_value(piece: Piece, square: Square, endgame: bool) -> i32 {
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King if endgame => &KING_ENDGAME_PST,
        PieceKind::King => &KING_MIDGAME_PST,
        PieceKind::None => return 0,
    };
    table[pst_index(piece.color, square)]
}

/// Tables are written rank 8 first, so White reads them mirrored and Black
/// reads them as laid out. This is the reverse of mirroring Black over
/// tables written rank 1 first; both give the same per-color values.
#[inline]
fn pst_index(color: Color, square: Square) -> usize {
    let row = match color {
        Color::Black => square.rank,
        _ => 7 - square.rank,
    };
    (row * 8 + square.file) as usize
}

/// Own pawns on the (up to eight) squares around the king.
pub fn king_shield_pawns(game_state: &GameState, king_square: Square, color: Color) -> usize {
    king_targets(king_square)
        .filter(|&square| game_state.piece_at(square).is(PieceKind::Pawn, color))
        .count()
}
