/// Orthogonal ray directions as `(d_rank, d_file)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
