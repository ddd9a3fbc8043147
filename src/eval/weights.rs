//! Scoring weights for Reversi evaluation

use crate::board::BOARD_SIZE;

/// Score of a won game. Every heuristic score is far below this,
/// so a forced win always outranks any positional advantage.
pub const WIN_SCORE: i32 = 1_000_000;

/// Per-square value of holding a disc.
///
/// Corners are stable and worth the most. The squares touching a corner hand
/// it to the opponent and are strongly negative. Edges are mildly positive;
/// the interior is close to neutral.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Tunable weights for the static evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Multiplier on the disc-count difference
    pub piece: i32,
    /// Mobility multiplier while fewer than `midgame_from` discs are down
    pub opening_mobility: i32,
    /// Mobility multiplier from `midgame_from` up to `endgame_from`
    pub midgame_mobility: i32,
    /// Mobility multiplier once `endgame_from` discs are down
    pub endgame_mobility: i32,
    pub midgame_from: u32,
    pub endgame_from: u32,
}

impl EvalWeights {
    /// Mobility multiplier for a position with `discs` on the board.
    ///
    /// The bands are exclusive: opening, midgame and endgame each get their
    /// own weight. Being left without moves late in the game is costly, so
    /// the weight grows with the phase.
    #[inline]
    pub fn mobility_weight(&self, discs: u32) -> i32 {
        if discs < self.midgame_from {
            self.opening_mobility
        } else if discs < self.endgame_from {
            self.midgame_mobility
        } else {
            self.endgame_mobility
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece: 10,
            opening_mobility: 1,
            midgame_mobility: 2,
            endgame_mobility: 4,
            midgame_from: 12,
            endgame_from: 56,
        }
    }
}
