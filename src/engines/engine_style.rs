//! Style-biased alpha-beta engine.
//!
//! `StyleEngine` owns its own copy of the position, the active style profile
//! and the search depth. Synchronous and background searches share one
//! search routine; the background variant only wraps it in a thread that
//! works on a private clone of the position.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{info, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig, SearchResult};
use crate::search::board_scoring::StyleScorer;
use crate::search::style_profile::{PlayerStyle, StyleProfile};

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;
pub const MAX_SEARCH_DEPTH: u8 = 32;

pub struct StyleEngine {
    position: GameState,
    profile: StyleProfile,
    depth: u8,
    stop: Arc<AtomicBool>,
}

impl StyleEngine {
    /// Accepts a preset (`PlayerStyle`) or a hand-built `StyleProfile`.
    pub fn new(position: &GameState, profile: impl Into<StyleProfile>, depth: u8) -> Self {
        Self {
            position: position.snapshot(),
            profile: profile.into(),
            depth: depth.clamp(1, MAX_SEARCH_DEPTH),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[inline]
    pub fn style(&self) -> PlayerStyle {
        self.profile.style
    }

    #[inline]
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.depth
    }

    /// The engine's private copy of the last position it was asked about.
    #[inline]
    pub fn position(&self) -> &GameState {
        &self.position
    }

    /// Replaces the whole profile; a preset is rebuilt from neutral weights.
    pub fn set_style(&mut self, profile: impl Into<StyleProfile>) {
        self.profile = profile.into();
    }

    /// Depths below one are raised to one.
    pub fn set_search_depth(&mut self, depth: i32) {
        self.depth = depth.clamp(1, i32::from(MAX_SEARCH_DEPTH)) as u8;
    }

    pub fn find_best_move_sync(&mut self, position: &GameState) -> ChessResult<Move> {
        self.search_sync(position, self.depth)
            .map(|result| result.best_move)
    }

    /// Blocking search at `depth` under a fresh stop flag. Earlier
    /// cancellation requests, and flags held by running background searches,
    /// are left alone.
    pub fn search_sync(&mut self, position: &GameState, depth: u8) -> ChessResult<SearchResult> {
        self.position = position.snapshot();
        self.stop = Arc::new(AtomicBool::new(false));
        run_search(
            &mut self.position,
            &self.profile,
            depth.max(1),
            Arc::clone(&self.stop),
        )
    }

    /// Start the search on a background thread. The returned handle and
    /// `request_cancellation` share a fresh stop flag.
    pub fn find_best_move_async(&mut self, position: &GameState) -> ChessResult<SearchHandle> {
        self.position = position.snapshot();
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Arc::clone(&stop);

        let mut worker_position = self.position.clone();
        let profile = self.profile.clone();
        let depth = self.depth;
        let worker_stop = Arc::clone(&stop);

        let worker = thread::Builder::new()
            .name("style-search".to_owned())
            .spawn(move || run_search(&mut worker_position, &profile, depth, worker_stop))
            .map_err(|e| ChessError::SearchWorker(e.to_string()))?;

        Ok(SearchHandle { stop, worker })
    }

    pub fn request_cancellation(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Flag another thread can raise to cancel the current search.
    pub fn cancellation_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }
}

pub struct SearchHandle {
    stop: Arc<AtomicBool>,
    worker: JoinHandle<ChessResult<SearchResult>>,
}

impl SearchHandle {
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    pub fn join(self) -> ChessResult<Move> {
        self.join_result().map(|result| result.best_move)
    }

    pub fn join_result(self) -> ChessResult<SearchResult> {
        self.worker.join().map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "search thread panicked".to_owned());
            ChessError::SearchWorker(reason)
        })?
    }
}

fn run_search(
    position: &mut GameState,
    profile: &StyleProfile,
    depth: u8,
    stop: Arc<AtomicBool>,
) -> ChessResult<SearchResult> {
    let generator = LegalMoveGenerator;
    let scorer = StyleScorer::new(profile.clone());
    let config = SearchConfig {
        depth,
        stop_flag: Some(stop),
    };

    let mut result = alpha_beta_search(position, &generator, &scorer, &config)?;

    if result.best_move.is_null() {
        if let Some(&first) = generator.generate_legal_moves(position)?.first() {
            warn!(
                "search ended without a best move{}; playing first legal move {first}",
                if result.cancelled { " (cancelled)" } else { "" }
            );
            result.best_move = first;
        }
    }

    info!(
        "style {} depth {} bestmove {} score {} nodes {}",
        profile.style, depth, result.best_move, result.best_score, result.nodes
    );

    Ok(result)
}

impl Engine for StyleEngine {
    fn name(&self) -> &str {
        "StyleChess"
    }

    fn new_game(&mut self) {
        self.position = GameState::new_game();
        self.stop = Arc::new(AtomicBool::new(false));
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("Style") {
            self.set_style(value.parse::<PlayerStyle>()?);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<i32>()
                .map_err(|_| ChessError::InvalidOption {
                    name: name.to_owned(),
                    reason: format!("invalid Depth value '{value}'"),
                })?;
            self.set_search_depth(parsed);
            return Ok(());
        }

        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            reason: "unknown option".to_owned(),
        })
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.depth).clamp(1, MAX_SEARCH_DEPTH);
        let result = self.search_sync(game_state, depth)?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            best_score: result.best_score,
            nodes: result.nodes,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.best_score, result.nodes
        ));
        out.info_lines
            .push(format!("info string style {}", self.profile.style));
        if result.cancelled {
            out.info_lines.push("info string search cancelled".to_owned());
        }

        Ok(out)
    }
}
