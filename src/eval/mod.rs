//! Evaluation module for Reversi positions
//!
//! This module provides the static evaluation used by the search.
//! The evaluation considers:
//! - Disc-count difference
//! - Positional weights per square
//! - Mobility (number of legal moves), weighted by game phase
//! - Terminal positions (win/loss/draw)

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_with};
pub use weights::{EvalWeights, POSITION_WEIGHTS, WIN_SCORE};
