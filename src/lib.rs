//! Reversi (Othello) rules engine and alpha-beta AI
//!
//! An 8x8 Reversi engine:
//! - Two colors, Black and White; the opening has four discs in the centre
//! - A move must bracket at least one straight run of opponent discs
//! - Every bracketed run, in all eight directions, is flipped
//! - A side without a legal move passes; the game ends when the board is
//!   full or neither side can move, and the side with more discs wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards, coordinates and colors
//! - [`rules`]: Game rules (legality, capture, game over, winner)
//! - [`eval`]: Static position evaluation
//! - [`search`]: Alpha-beta search with move ordering
//! - [`agent`]: Players behind a common [`Agent`] trait
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Board, Color, Coord, Searcher};
//!
//! let mut board = Board::new();
//!
//! // Black opens at e3, capturing e4
//! let e3: Coord = "e3".parse().unwrap();
//! board.apply_move(e3, Color::Black).unwrap();
//!
//! // AI responds as White
//! let mut searcher = Searcher::new();
//! if let Some(pos) = searcher.choose_move(&board, Color::White, 2) {
//!     board.apply_move(pos, Color::White).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! println!("{board}");
//! ```

pub mod agent;
pub mod board;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use agent::{Agent, GreedyAgent, MoveResult, RandomAgent, SearchAgent};
pub use board::{Board, Cell, Color, Coord, BOARD_SIZE};
pub use error::BoardError;
pub use search::{choose_move, SearchConfig, SearchResult, Searcher};
