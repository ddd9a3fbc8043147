//! Move-selecting players
//!
//! Every player implements [`Agent`]: given a board and the color it plays,
//! propose a move or `None` to pass. The game loop that alternates turns
//! lives outside this crate and only talks to players through this trait.
//!
//! Variants:
//! - [`SearchAgent`]: alpha-beta search ([`crate::search`])
//! - [`GreedyAgent`]: the move that leaves it the most discs
//! - [`RandomAgent`]: a uniform pick from an injected random source
//!
//! # Example
//!
//! ```
//! use reversi::{Agent, Board, Color, SearchAgent, SearchConfig};
//!
//! let mut agent = SearchAgent::new(SearchConfig::default().with_depth(2));
//! let mut board = Board::new();
//!
//! if let Some(mov) = agent.propose_move(&board, Color::Black) {
//!     board.apply_move(mov, Color::Black).unwrap();
//!     println!("Black plays {mov}");
//! }
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Color, Coord};
use crate::search::{SearchConfig, SearchResult, Searcher};

/// A player that can be asked for a move.
pub trait Agent {
    /// Short label for logs and reports
    fn name(&self) -> &'static str;

    /// Propose a move for `color`, or `None` to pass.
    ///
    /// A returned move should be legal; callers treat an illegal one as a
    /// reportable error rather than advancing the turn.
    fn propose_move(&mut self, board: &Board, color: Color) -> Option<Coord>;
}

/// Result of the last search with timing, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub search: SearchResult,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Player driven by alpha-beta search.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    searcher: Searcher,
    depth: u8,
    last_result: Option<MoveResult>,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::with_weights(config.weights),
            depth: config.depth,
            last_result: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Statistics of the most recent `propose_move` call
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for SearchAgent {
    fn name(&self) -> &'static str {
        "alpha_beta"
    }

    fn propose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let start = Instant::now();
        let search = self.searcher.search(board, color, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            agent = self.name(),
            %color,
            best_move = ?search.best_move.map(|m| m.to_string()),
            score = search.score,
            nodes = search.nodes,
            time_ms,
            "move proposed"
        );

        let best_move = search.best_move;
        self.last_result = Some(MoveResult { search, time_ms });
        best_move
    }
}

/// Player that maximizes its own disc count after the move.
///
/// Ties keep the first move in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn propose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let mut best: Option<(Coord, u32)> = None;
        for mov in board.valid_moves(color) {
            // Own count after the move: current + placed disc + flipped discs
            let discs = board.count(color) + 1 + board.captured_discs(mov, color).count();
            if best.map_or(true, |(_, most)| discs > most) {
                best = Some((mov, discs));
            }
        }

        if best.is_none() {
            debug!(agent = self.name(), %color, "no legal move, passing");
        }
        best.map(|(mov, _)| mov)
    }
}

/// Player that picks uniformly among legal moves.
///
/// The random source is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomAgent<R> {
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomAgent<StdRng> {
    /// Reproducible agent seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn propose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let moves = board.valid_moves(color);
        moves.choose(&mut self.rng).copied()
    }
}
