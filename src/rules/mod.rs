//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Capture rules (directional flipping, legality)
//! - End-of-game detection and winner

pub mod capture;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{
    apply_move, captured_discs, capturing_line, count_valid_moves, has_valid_move, is_legal_move,
    valid_moves,
};
pub use outcome::{is_game_over, majority, winner};
