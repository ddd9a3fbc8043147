//! Heuristic evaluation function for Reversi board positions
//!
//! This module provides the static evaluation used at the leaves of the
//! alpha-beta search and for move ordering. It blends:
//! - Win/loss detection
//! - Disc-count difference
//! - Positional weights (corners, edges, squares next to corners)
//! - Mobility difference, scaled by game phase

use crate::board::{Board, Color};
use crate::rules::count_valid_moves;

use super::weights::{EvalWeights, POSITION_WEIGHTS, WIN_SCORE};

/// Evaluate the board from the perspective of the given color with the
/// default weights.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
/// - `WIN_SCORE` / `-WIN_SCORE` mark a finished game won / lost by `color`
/// - `0` marks a finished, drawn game
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    evaluate_with(board, color, &EvalWeights::default())
}

/// Evaluate with explicit weights.
#[must_use]
pub fn evaluate_with(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let opponent = color.opponent();

    // Mobility doubles as the game-over test: a full board or two stuck
    // sides ends the game.
    let my_moves = count_valid_moves(board, color) as i32;
    let opp_moves = count_valid_moves(board, opponent) as i32;

    if board.is_full() || (my_moves == 0 && opp_moves == 0) {
        return terminal_score(board, color);
    }

    let piece_diff = board.count(color) as i32 - board.count(opponent) as i32;
    let position_score = positional_score(board, color) - positional_score(board, opponent);
    let mobility_diff = my_moves - opp_moves;

    weights.piece * piece_diff
        + weights.mobility_weight(board.disc_count()) * mobility_diff
        + position_score
}

/// Score of a finished game for `color`: win, loss or draw.
fn terminal_score(board: &Board, color: Color) -> i32 {
    let mine = board.count(color);
    let theirs = board.count(color.opponent());
    match mine.cmp(&theirs) {
        std::cmp::Ordering::Greater => WIN_SCORE,
        std::cmp::Ordering::Less => -WIN_SCORE,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Sum of position weights over `color`'s discs.
fn positional_score(board: &Board, color: Color) -> i32 {
    board
        .discs(color)
        .iter_ones()
        .map(|pos| POSITION_WEIGHTS[pos.y() as usize][pos.x() as usize])
        .sum()
}
