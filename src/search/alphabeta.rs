//! Alpha-Beta search with move ordering
//!
//! This module implements the core search algorithm for the Reversi AI:
//! minimax with alpha-beta pruning over board copies.
//!
//! # Features
//!
//! - The searching color always maximizes, its opponent minimizes
//! - Move ordering by one-ply static evaluation at every node
//! - Passes: a side with no legal move spends its ply without moving
//! - Deterministic: no randomness, stable ordering among equal scores
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Color};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Color, Coord};
use crate::eval::{evaluate_with, EvalWeights, WIN_SCORE};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total cutoffs (`beta <= alpha`)
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Interior nodes where the side to move had to pass
    pub passes: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the color must pass
    pub best_move: Option<Coord>,
    /// Score of the best move from the searching color's perspective
    pub score: i32,
    /// Plies searched below each root move
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds the evaluation weights plus per-search counters; reusable across
/// searches.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    weights: EvalWeights,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with the default evaluation weights.
    #[must_use]
    pub fn new() -> Self {
        Self::with_weights(EvalWeights::default())
    }

    #[must_use]
    pub fn with_weights(weights: EvalWeights) -> Self {
        Self {
            weights,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Pick the best move for `color`, or `None` when it has to pass.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, color: Color, depth: u8) -> Option<Coord> {
        self.search(board, color, depth).best_move
    }

    /// Search every legal move for `color`, each explored `depth` further plies.
    ///
    /// At depth 0 every candidate is scored by the static evaluation of the
    /// position it leads to, i.e. a greedy one-ply choice.
    ///
    /// Ties keep the earliest move in ordered position: a later move must be
    /// strictly better to replace the current best.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let moves = self.generate_moves_ordered(board, color);
        if moves.is_empty() {
            debug!(%color, "no legal move, passing");
            return SearchResult {
                best_move: None,
                score: evaluate_with(board, color, &self.weights),
                depth,
                nodes: 0,
                stats: SearchStats::default(),
            };
        }

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for (mov, child) in &moves {
            // Root alpha only narrows windows for later siblings; a move that
            // fails low can never be strictly better than the current best.
            let score = self.alpha_beta(child, color, depth, alpha, INF, false);
            trace!(%color, mov = %mov, score, "root move");

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(*mov);
            }
            alpha = alpha.max(score);
        }

        debug!(
            %color,
            depth,
            best_move = ?best_move.map(|m| m.to_string()),
            score = best_score,
            nodes = self.nodes,
            cutoffs = self.stats.cutoffs,
            first_move_rate = self.stats.first_move_rate(),
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `color` is the searching side; `maximizing` says whether it is to move
    /// at this node. Scores are always from `color`'s perspective.
    fn alpha_beta(
        &mut self,
        board: &Board,
        color: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return evaluate_with(board, color, &self.weights);
        }

        let mover = if maximizing { color } else { color.opponent() };
        let moves = self.generate_moves_ordered(board, mover);

        if moves.is_empty() {
            // Not terminal, so the other side can move: this ply is a pass
            self.stats.passes += 1;
            return self.alpha_beta(board, color, depth - 1, alpha, beta, !maximizing);
        }

        if maximizing {
            let mut max_eval = -INF;
            for (i, (_, child)) in moves.iter().enumerate() {
                let eval = self.alpha_beta(child, color, depth - 1, alpha, beta, false);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INF;
            for (i, (_, child)) in moves.iter().enumerate() {
                let eval = self.alpha_beta(child, color, depth - 1, alpha, beta, true);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            min_eval
        }
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }

    /// Legal moves for `mover` with the positions they lead to, strongest
    /// first.
    ///
    /// Each child is scored by the static evaluation from the mover's own
    /// perspective and sorted descending. The sort is stable, so equal
    /// scores keep row-major scan order.
    fn generate_moves_ordered(&self, board: &Board, mover: Color) -> Vec<(Coord, Board)> {
        let mut scored: Vec<(Coord, Board, i32)> = board
            .valid_moves(mover)
            .into_iter()
            .map(|mov| {
                let child = play(board, mov, mover);
                let score = evaluate_with(&child, mover, &self.weights);
                (mov, child, score)
            })
            .collect();

        scored.sort_by(|a, b| b.2.cmp(&a.2));
        scored
            .into_iter()
            .map(|(mov, child, _)| (mov, child))
            .collect()
    }
}

/// Copy `board` and play a move drawn from `valid_moves` on the copy.
///
/// # Panics
/// If the move is illegal. Search only expands generated moves, so an
/// illegal one here is a bug in move generation.
fn play(board: &Board, mov: Coord, color: Color) -> Board {
    let mut child = *board;
    if let Err(err) = child.apply_move(mov, color) {
        panic!("search expanded a move outside valid_moves: {err}");
    }
    child
}

/// Best move for `color` searching `depth` plies below each candidate.
///
/// Convenience wrapper over a fresh [`Searcher`] with default weights.
#[must_use]
pub fn choose_move(board: &Board, color: Color, depth: u8) -> Option<Coord> {
    Searcher::new().choose_move(board, color, depth)
}
