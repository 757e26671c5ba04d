use crate::game_state::chess_types::Square;

/// The eight neighbouring squares as `(d_rank, d_file)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_target_counts_by_region() {
        assert_eq!(king_targets(Square::new(0, 0)).count(), 3);
        assert_eq!(king_targets(Square::new(0, 4)).count(), 5);
        assert_eq!(king_targets(Square::new(4, 4)).count(), 8);
    }
}
