use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` standing on `square` attacks (left file first).
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| square.offset(forward, d_file))
}

/// Squares from which a pawn of `attacker` would attack `target`.
#[inline]
pub fn pawn_attack_origins(attacker: Color, target: Square) -> impl Iterator<Item = Square> {
    let backward = -attacker.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| target.offset(backward, d_file))
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_origins, pawn_capture_targets};
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_and_black_pawns_attack_in_opposite_directions() {
        let e4 = Square::new(3, 4);
        let white: Vec<Square> = pawn_capture_targets(Color::White, e4).collect();
        let black: Vec<Square> = pawn_capture_targets(Color::Black, e4).collect();
        assert_eq!(white, vec![Square::new(4, 3), Square::new(4, 5)]);
        assert_eq!(black, vec![Square::new(2, 3), Square::new(2, 5)]);
    }

    #[test]
    fn attack_origins_mirror_capture_targets() {
        let d5 = Square::new(4, 3);
        let origins: Vec<Square> = pawn_attack_origins(Color::White, d5).collect();
        assert_eq!(origins, vec![Square::new(3, 2), Square::new(3, 4)]);
    }

    #[test]
    fn edge_pawn_has_single_capture() {
        assert_eq!(pawn_capture_targets(Color::White, Square::new(1, 0)).count(), 1);
    }
}
