//! Depth-limited negamax search with alpha-beta pruning.
//!
//! Scores are always relative to the side to move at the node. The search
//! walks one `GameState` in place with paired apply/undo calls and can be
//! stopped early through a shared flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

/// Bound wider than any reachable score, mate included.
pub const INFINITY: i32 = MATE_SCORE + 1000;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub depth: u8,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            stop_flag: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// `Move::NULL` when no root move completed.
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
    pub cancelled: bool,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            best_move: Move::NULL,
            best_score: -INFINITY,
            nodes: 0,
            cancelled: false,
        }
    }
}

pub fn alpha_beta_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
) -> ChessResult<SearchResult> {
    let stop_flag = config.stop_flag.as_deref();
    let mut result = SearchResult::default();

    if config.depth == 0 {
        result.best_score = scorer.score(game_state);
        result.nodes = 1;
        return Ok(result);
    }

    let moves = generator.generate_legal_moves(game_state)?;
    result.nodes = 1;
    if moves.is_empty() {
        result.best_score = terminal_score(game_state, 0);
        return Ok(result);
    }

    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for mv in moves {
        game_state.apply_move(mv)?;
        let child = negamax(
            game_state,
            generator,
            scorer,
            config.depth - 1,
            -beta,
            -alpha,
            1,
            stop_flag,
            &mut result.nodes,
        );
        game_state.undo_move();
        let score = -child?;

        if should_stop(stop_flag) {
            result.cancelled = true;
            break;
        }

        // Strictly better only: the earliest of equal moves is kept.
        if score > result.best_score {
            result.best_score = score;
            result.best_move = mv;
        }
        alpha = alpha.max(score);
    }

    debug!(
        "alpha-beta depth {} best {} score {} nodes {}{}",
        config.depth,
        result.best_move,
        result.best_score,
        result.nodes,
        if result.cancelled { " (cancelled)" } else { "" }
    );

    Ok(result)
}

#[allow(clippy::too_many_arguments)]
fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    stop_flag: Option<&AtomicBool>,
    nodes: &mut u64,
) -> ChessResult<i32> {
    if should_stop(stop_flag) {
        return Ok(0);
    }
    *nodes += 1;

    if depth == 0 {
        return Ok(scorer.score(game_state));
    }

    let moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return Ok(terminal_score(game_state, ply));
    }

    let mut best = -INFINITY;

    for mv in moves {
        game_state.apply_move(mv)?;
        let child = negamax(
            game_state,
            generator,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            ply + 1,
            stop_flag,
            nodes,
        );
        game_state.undo_move();
        let score = -child?;

        if should_stop(stop_flag) {
            break;
        }

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}

/// Mated side scores `-(MATE_SCORE - ply)`, so nearer mates are more extreme.
/// Stalemate is a draw.
fn terminal_score(game_state: &GameState, ply: i32) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move) {
        -(MATE_SCORE - ply)
    } else {
        0
    }
}

#[inline]
fn should_stop(stop_flag: Option<&AtomicBool>) -> bool {
    stop_flag.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    use super::{alpha_beta_search, terminal_score, SearchConfig, INFINITY};
    use crate::errors::ChessResult;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::Move;
    use crate::search::board_scoring::{BoardScorer, StyleScorer, MATE_SCORE};
    use crate::search::style_profile::{PlayerStyle, StyleProfile};

    fn search(fen: &str, depth: u8) -> (GameState, super::SearchResult) {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let result = alpha_beta_search(
            &mut game,
            &LegalMoveGenerator,
            &StyleScorer::default(),
            &SearchConfig {
                depth,
                stop_flag: None,
            },
        )
        .expect("search should run");
        (game, result)
    }

    /// Plain negamax without pruning, used as the reference value.
    fn minimax<S: BoardScorer>(
        game: &mut GameState,
        scorer: &S,
        depth: u8,
        ply: i32,
        nodes: &mut u64,
    ) -> ChessResult<i32> {
        *nodes += 1;
        if depth == 0 {
            return Ok(scorer.score(game));
        }
        let moves = LegalMoveGenerator.generate_legal_moves(game)?;
        if moves.is_empty() {
            return Ok(terminal_score(game, ply));
        }
        let mut best = -INFINITY;
        for mv in moves {
            game.apply_move(mv)?;
            let score = -minimax(game, scorer, depth - 1, ply + 1, nodes)?;
            game.undo_move();
            best = best.max(score);
        }
        Ok(best)
    }

    /// Root of the reference search: first strictly better move wins ties.
    fn minimax_root<S: BoardScorer>(
        game: &mut GameState,
        scorer: &S,
        depth: u8,
        nodes: &mut u64,
    ) -> ChessResult<(Move, i32)> {
        *nodes += 1;
        let mut best_move = Move::NULL;
        let mut best = -INFINITY;
        for mv in LegalMoveGenerator.generate_legal_moves(game)? {
            game.apply_move(mv)?;
            let score = -minimax(game, scorer, depth - 1, 1, nodes)?;
            game.undo_move();
            if score > best {
                best = score;
                best_move = mv;
            }
        }
        Ok((best_move, best))
    }

    #[test]
    fn pruning_matches_unpruned_minimax() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1",
            "r3k3/8/8/3p4/4P3/8/8/4K2R w K - 0 1",
            "6k1/5ppp/8/8/8/8/1q3PPP/R5K1 w - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];
        for style in PlayerStyle::ALL {
            let scorer = StyleScorer::new(StyleProfile::new(style));
            for fen in fens {
                for depth in 1..=3 {
                    let mut game = GameState::from_fen(fen).expect("FEN should parse");
                    let mut reference_nodes = 0;
                    let (expected_move, expected) =
                        minimax_root(&mut game, &scorer, depth, &mut reference_nodes)
                            .expect("minimax should run");

                    let result = alpha_beta_search(
                        &mut game,
                        &LegalMoveGenerator,
                        &scorer,
                        &SearchConfig {
                            depth,
                            stop_flag: None,
                        },
                    )
                    .expect("search should run");

                    assert_eq!(result.best_score, expected, "{style} depth {depth} on {fen}");
                    assert_eq!(
                        result.best_move, expected_move,
                        "{style} depth {depth} on {fen}"
                    );
                    assert!(result.nodes <= reference_nodes);
                    assert_eq!(game.get_fen(), fen);
                    assert_eq!(game.history_len(), 0);
                }
            }
        }
    }

    #[test]
    fn prefers_winning_capture() {
        let (_, result) = search("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1", 1);
        assert_eq!(result.best_move.to_string(), "f1e2");
    }

    #[test]
    fn finds_mate_in_one_at_depth_two() {
        let (mut game, result) = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);

        assert_eq!(result.best_move.to_string(), "a1a8");

        assert_eq!(result.best_score, MATE_SCORE - 1);
        game.apply_move(result.best_move).expect("best move should apply");
        let replies = LegalMoveGenerator
            .generate_legal_moves(&mut game)
            .expect("move generation should succeed");
        assert!(replies.is_empty(), "best move should deliver checkmate");
        assert!(is_king_in_check(&game, game.side_to_move));
    }

    #[test]
    fn prefers_the_nearer_mate() {
        // Ra8 mates at once; slower mates must score lower.
        let (_, result) = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 4);
        assert_eq!(result.best_move.to_string(), "a1a8");
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn checkmated_and_stalemated_roots_return_null_move() {
        let (_, mated) = search("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3", 3);
        assert!(mated.best_move.is_null());
        assert_eq!(mated.best_score, -MATE_SCORE);

        let (_, stale) = search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 3);
        assert!(stale.best_move.is_null());
        assert_eq!(stale.best_score, 0);
    }

    #[test]
    fn raised_stop_flag_cancels_and_restores_position() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let stop = Arc::new(AtomicBool::new(true));

        let result = alpha_beta_search(
            &mut game,
            &LegalMoveGenerator,
            &StyleScorer::default(),
            &SearchConfig {
                depth: 6,
                stop_flag: Some(stop),
            },
        )
        .expect("search should run");

        assert!(result.cancelled);
        assert!(result.best_move.is_null());
        assert_eq!(game.get_fen(), fen);
        assert_eq!(game.history_len(), 0);
    }
}
