//! Search module for the Reversi AI
//!
//! Contains:
//! - Alpha-Beta search with move ordering
//! - Search configuration

pub mod alphabeta;
pub mod config;

pub use alphabeta::{choose_move, SearchResult, SearchStats, Searcher, INF};
pub use config::SearchConfig;
