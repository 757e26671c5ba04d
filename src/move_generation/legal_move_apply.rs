use log::error;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Apply `mv` in place, pushing an undo record first.
///
/// The move is trusted to be pseudo-legal for the side to move; only an empty
/// origin square is rejected.
pub fn apply_move(game_state: &mut GameState, mv: Move) -> ChessResult<()> {
    let moved_piece = game_state.piece_at(mv.from);
    if moved_piece.is_none() {
        return Err(ChessError::EmptySquare(mv.from));
    }
    let moving_color = moved_piece.color;

    let captured_square = if mv.is_en_passant() {
        Square::new(mv.from.rank, mv.to.file)
    } else {
        mv.to
    };
    let captured_piece = game_state.piece_at(captured_square);

    let castling_rook = castling_rook_squares(mv, moving_color)
        .map(|(rook_from, rook_to)| (rook_from, rook_to, game_state.piece_at(rook_from)));

    game_state.undo_stack.push(UndoState {
        mv,
        moved_piece,
        captured_piece,
        captured_square,
        castling_rook,
        prev_side_to_move: game_state.side_to_move,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    // Relocate (and possibly promote) the moving piece.
    game_state.clear_square(captured_square);
    game_state.clear_square(mv.from);
    let placed = if mv.is_promotion() {
        Piece {
            kind: mv.promotion,
            color: moving_color,
            has_moved: true,
        }
    } else {
        Piece {
            has_moved: true,
            ..moved_piece
        }
    };
    game_state.set_piece(mv.to, placed);

    if let Some((rook_from, rook_to, rook)) = castling_rook {
        game_state.clear_square(rook_from);
        game_state.set_piece(
            rook_to,
            Piece {
                has_moved: true,
                ..rook
            },
        );
    }

    update_castling_rights(game_state, moved_piece, mv.from, mv.to);

    game_state.en_passant_square = if mv.is_pawn_two_forward() {
        Some(Square::new((mv.from.rank + mv.to.rank) / 2, mv.from.file))
    } else {
        None
    };

    if moved_piece.kind == PieceKind::Pawn || !captured_piece.is_none() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if game_state.side_to_move == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();

    Ok(())
}

/// Restore the position saved by the most recent `apply_move`.
///
/// Calling this with an empty history is a pairing bug in the caller.
pub fn undo_move(game_state: &mut GameState) {
    debug_assert!(
        !game_state.undo_stack.is_empty(),
        "undo_move called with empty history"
    );
    let Some(undo) = game_state.undo_stack.pop() else {
        error!("undo_move called with empty history; position left unchanged");
        return;
    };

    if let Some((rook_from, rook_to, rook)) = undo.castling_rook {
        game_state.clear_square(rook_to);
        game_state.set_piece(rook_from, rook);
    }

    game_state.clear_square(undo.mv.to);
    game_state.set_piece(undo.captured_square, undo.captured_piece);
    game_state.set_piece(undo.mv.from, undo.moved_piece);

    game_state.side_to_move = undo.prev_side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

fn castling_rook_squares(mv: Move, color: Color) -> Option<(Square, Square)> {
    let rank = color.home_rank();
    if mv.is_castle_king_side() {
        Some((
            Square::new(rank, KINGSIDE_ROOK_FILE),
            Square::new(rank, KING_HOME_FILE + 1),
        ))
    } else if mv.is_castle_queen_side() {
        Some((
            Square::new(rank, QUEENSIDE_ROOK_FILE),
            Square::new(rank, KING_HOME_FILE - 1),
        ))
    } else {
        None
    }
}

fn update_castling_rights(game_state: &mut GameState, moved_piece: Piece, from: Square, to: Square) {
    if moved_piece.kind == PieceKind::King {
        game_state.castling_rights &=
            !(kingside_right(moved_piece.color) | queenside_right(moved_piece.color));
    }

    // A rook leaving its corner, or anything landing on a corner (capturing
    // the rook there), forfeits that wing.
    for square in [from, to] {
        game_state.castling_rights &= !corner_right(square);
    }
}

fn corner_right(square: Square) -> CastlingRights {
    match (square.rank, square.file) {
        (0, QUEENSIDE_ROOK_FILE) => CASTLE_WHITE_QUEENSIDE,
        (0, KINGSIDE_ROOK_FILE) => CASTLE_WHITE_KINGSIDE,
        (7, QUEENSIDE_ROOK_FILE) => CASTLE_BLACK_QUEENSIDE,
        (7, KINGSIDE_ROOK_FILE) => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game: &mut GameState, lan: &str) {
        let mv = long_algebraic_to_move(lan, game).expect("move should parse");
        game.apply_move(mv).expect("move should apply");
    }

    #[test]
    fn apply_then_undo_is_identity_for_every_legal_move() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        ];
        let generator = LegalMoveGenerator;

        for fen in fens {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let before = game.clone();
            let moves = generator
                .generate_legal_moves(&mut game)
                .expect("move generation should succeed");
            assert!(!moves.is_empty());

            for mv in moves {
                game.apply_move(mv).expect("legal move should apply");
                game.undo_move();
                assert_eq!(game, before, "apply/undo of {mv} changed {fen}");
            }
        }
    }

    #[test]
    fn random_walk_unwinds_to_start() {
        let generator = LegalMoveGenerator;
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..8 {
            let mut game = GameState::new_game();
            let start = game.clone();
            let mut played = 0;

            for _ in 0..60 {
                let moves = generator
                    .generate_legal_moves(&mut game)
                    .expect("move generation should succeed");
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                game.apply_move(*mv).expect("legal move should apply");
                played += 1;
            }

            assert_eq!(game.history_len(), played);
            for _ in 0..played {
                game.undo_move();
            }
            assert_eq!(game, start);
        }
    }

    #[test]
    fn double_push_sets_en_passant_target_for_one_ply() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        assert_eq!(game.en_passant_square, Some(Square::new(2, 4)));
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);

        play(&mut game, "g8f6");
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.halfmove_clock, 1);
        assert_eq!(game.fullmove_number, 2);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse");
        play(&mut game, "e5d6");

        assert!(game.piece_at(Square::new(5, 3)).is(PieceKind::Pawn, Color::White));
        assert!(game.piece_at(Square::new(4, 3)).is_none());
        assert!(game.piece_at(Square::new(4, 4)).is_none());
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        play(&mut game, "e1g1");

        assert!(game.piece_at(Square::new(0, 6)).is(PieceKind::King, Color::White));
        assert!(game.piece_at(Square::new(0, 5)).is(PieceKind::Rook, Color::White));
        assert!(game.piece_at(Square::new(0, 7)).is_none());
        assert_eq!(
            game.castling_rights,
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert_eq!(game.halfmove_clock, 4);

        play(&mut game, "e8c8");
        assert!(game.piece_at(Square::new(7, 3)).is(PieceKind::Rook, Color::Black));
        assert_eq!(game.castling_rights, 0);
        assert_eq!(game.fullmove_number, 11);
    }

    #[test]
    fn capturing_an_unmoved_rook_forfeits_its_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2B w KQkq - 0 1").expect("FEN should parse");
        play(&mut game, "h1a8");
        assert_eq!(
            game.castling_rights & CASTLE_BLACK_QUEENSIDE,
            0,
            "capture on a8 must remove black queenside right"
        );
        assert_ne!(game.castling_rights & CASTLE_BLACK_KINGSIDE, 0);
    }

    #[test]
    fn promotion_replaces_pawn_with_chosen_piece() {
        let mut game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        play(&mut game, "a7b8n");
        let promoted = game.piece_at(Square::new(7, 1));
        assert!(promoted.is(PieceKind::Knight, Color::White));

        game.undo_move();
        assert!(game.piece_at(Square::new(6, 0)).is(PieceKind::Pawn, Color::White));
        assert!(game.piece_at(Square::new(7, 1)).is(PieceKind::Rook, Color::Black));
    }

    #[test]
    fn applying_from_empty_square_is_rejected() {
        let mut game = GameState::new_game();
        let mv = crate::moves::move_descriptions::Move::quiet(Square::new(3, 3), Square::new(4, 3));
        assert!(game.apply_move(mv).is_err());
        assert_eq!(game.history_len(), 0);
    }
}
