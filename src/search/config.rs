//! Search configuration

use crate::eval::EvalWeights;

/// Default plies searched below each root move
pub const DEFAULT_DEPTH: u8 = 3;

/// Knobs for a search-driven player.
///
/// # Example
///
/// ```
/// use reversi::search::SearchConfig;
///
/// let config = SearchConfig::default().with_depth(4);
/// assert_eq!(config.depth, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies explored below each candidate move; 0 is a greedy one-ply pick
    pub depth: u8,
    /// Evaluation weights used at the leaves and for move ordering
    pub weights: EvalWeights,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: EvalWeights::default(),
        }
    }
}
