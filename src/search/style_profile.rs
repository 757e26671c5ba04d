//! Playing-style weight profiles.
//!
//! A `StyleProfile` is a flat record of evaluation weights. Every preset
//! starts from the neutral defaults and overrides a handful of fields, so
//! switching styles never leaks weights from the previously selected one.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerStyle {
    #[default]
    Default,
    /// Positional, prophylactic play.
    Karpov,
    /// Sacrificial attacking play.
    Tal,
    /// Dynamic, initiative-driven play.
    Kasparov,
}

impl PlayerStyle {
    pub const ALL: [PlayerStyle; 4] = [
        PlayerStyle::Default,
        PlayerStyle::Karpov,
        PlayerStyle::Tal,
        PlayerStyle::Kasparov,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PlayerStyle::Default => "Default",
            PlayerStyle::Karpov => "Karpov",
            PlayerStyle::Tal => "Tal",
            PlayerStyle::Kasparov => "Kasparov",
        }
    }
}

impl fmt::Display for PlayerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerStyle {
    type Err = ChessError;

    /// Case-insensitive; also accepts the descriptive names `positional`,
    /// `attacking` and `dynamic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "balanced" => Ok(PlayerStyle::Default),
            "karpov" | "positional" => Ok(PlayerStyle::Karpov),
            "tal" | "attacking" => Ok(PlayerStyle::Tal),
            "kasparov" | "dynamic" => Ok(PlayerStyle::Kasparov),
            _ => Err(ChessError::InvalidOption {
                name: "Style".to_owned(),
                reason: format!("unknown style {s:?}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub style: PlayerStyle,

    pub material_weight: f32,
    pub pawn_value: f32,
    pub knight_value: f32,
    pub bishop_value: f32,
    pub rook_value: f32,
    pub queen_value: f32,

    pub pst_weight: f32,

    pub mobility_weight: f32,

    pub king_safety_weight: f32,
    pub king_pawn_shield_bonus: f32,
    pub king_open_file_penalty: f32,
    pub king_attacked_by_piece_penalty: f32,

    pub pawn_structure_weight: f32,
    pub passed_pawn_bonus: f32,
    pub doubled_pawn_penalty: f32,
    pub isolated_pawn_penalty: f32,

    pub center_control_weight: f32,
    pub center_pawn_bonus: f32,
    pub center_minor_piece_bonus: f32,

    pub attack_weight: f32,
    pub hanging_piece_penalty: f32,
    pub attacking_king_bonus: f32,

    pub initiative_weight: f32,
    pub developed_piece_bonus: f32,
    pub castling_bonus: f32,

    pub aggression_factor: f32,
    pub positional_factor: f32,
    pub risk_tolerance: f32,
}

impl StyleProfile {
    /// Neutral weights shared by every preset before its overrides.
    pub const NEUTRAL: StyleProfile = StyleProfile {
        style: PlayerStyle::Default,

        material_weight: 1.0,
        pawn_value: 100.0,
        knight_value: 320.0,
        bishop_value: 330.0,
        rook_value: 500.0,
        queen_value: 900.0,

        pst_weight: 0.1,

        mobility_weight: 0.1,

        king_safety_weight: 2.0,
        king_pawn_shield_bonus: 5.0,
        king_open_file_penalty: -10.0,
        king_attacked_by_piece_penalty: -15.0,

        pawn_structure_weight: 0.5,
        passed_pawn_bonus: 20.0,
        doubled_pawn_penalty: -10.0,
        isolated_pawn_penalty: -10.0,

        center_control_weight: 0.2,
        center_pawn_bonus: 10.0,
        center_minor_piece_bonus: 5.0,

        attack_weight: 0.3,
        hanging_piece_penalty: -50.0,
        attacking_king_bonus: 25.0,

        initiative_weight: 0.2,
        developed_piece_bonus: 5.0,
        castling_bonus: 25.0,

        aggression_factor: 1.0,
        positional_factor: 1.0,
        risk_tolerance: 0.0,
    };

    pub fn new(style: PlayerStyle) -> Self {
        let mut profile = Self::NEUTRAL;
        profile.select(style);
        profile
    }

    /// Reset every weight to neutral, then apply the preset for `style`.
    pub fn select(&mut self, style: PlayerStyle) {
        *self = Self::NEUTRAL;
        self.style = style;

        match style {
            PlayerStyle::Default => {}
            PlayerStyle::Karpov => {
                self.positional_factor = 1.5;
                self.king_safety_weight = 2.5;
                self.pawn_structure_weight = 0.7;
                self.isolated_pawn_penalty = -15.0;
                self.doubled_pawn_penalty = -12.0;
                self.mobility_weight = 0.05;
                self.attack_weight = 0.15;
                self.aggression_factor = 0.7;
                self.risk_tolerance = -0.2;
            }
            PlayerStyle::Tal => {
                self.aggression_factor = 1.8;
                self.attack_weight = 0.6;
                self.attacking_king_bonus = 50.0;
                self.initiative_weight = 0.5;
                self.mobility_weight = 0.2;
                self.material_weight = 0.8;
                self.risk_tolerance = 0.5;
                self.king_safety_weight = 1.0;
                self.positional_factor = 0.5;
            }
            PlayerStyle::Kasparov => {
                self.initiative_weight = 0.4;
                self.center_control_weight = 0.4;
                self.mobility_weight = 0.15;
                self.attack_weight = 0.4;
                self.aggression_factor = 1.3;
                self.positional_factor = 1.1;
                self.king_safety_weight = 1.8;
                self.pawn_structure_weight = 0.6;
            }
        }
    }

    #[inline]
    pub fn piece_value(&self, kind: PieceKind) -> f32 {
        match kind {
            PieceKind::Pawn => self.pawn_value,
            PieceKind::Knight => self.knight_value,
            PieceKind::Bishop => self.bishop_value,
            PieceKind::Rook => self.rook_value,
            PieceKind::Queen => self.queen_value,
            PieceKind::King | PieceKind::None => 0.0,
        }
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<PlayerStyle> for StyleProfile {
    fn from(style: PlayerStyle) -> Self {
        Self::new(style)
    }
}
