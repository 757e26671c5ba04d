//! Ray walking for sliding pieces.
//!
//! A ray yields every square from (but excluding) the origin towards the board
//! edge. Callers stop at the first occupied square themselves, which keeps the
//! same walker usable for move generation and attack detection.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    current: Square,
    d_rank: i8,
    d_file: i8,
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = self.current.offset(self.d_rank, self.d_file)?;
        self.current = next;
        Some(next)
    }
}

#[inline]
pub fn ray(origin: Square, (d_rank, d_file): (i8, i8)) -> Ray {
    Ray {
        current: origin,
        d_rank,
        d_file,
    }
}
