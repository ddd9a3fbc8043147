//! Error types for board operations

use thiserror::Error;

use crate::board::{Color, Coord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate arithmetic walked off the 8x8 grid
    #[error("({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },
    /// Requested move fails the legality rules
    #[error("invalid move: {color} cannot play {coord}")]
    InvalidMove { coord: Coord, color: Color },
    #[error("cannot parse {0:?} as a coordinate, expected a-h followed by 1-8")]
    ParseCoord(String),
    #[error("cannot parse board: {0}")]
    ParseBoard(String),
}
