//! Board representation for Reversi

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Disc colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-character glyph used in board rendering
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Color of the disc on this square, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

/// Unit step between neighbouring squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

/// The eight compass directions scanned for captures
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 0),   // →
    Direction::new(0, 1),   // ↓
    Direction::new(-1, 0),  // ←
    Direction::new(0, -1),  // ↑
    Direction::new(1, 1),   // ↘
    Direction::new(-1, 1),  // ↙
    Direction::new(1, -1),  // ↗
    Direction::new(-1, -1), // ↖
];

/// Square on the board: column `x` (file `a`..`h`) and row `y` (rank `1`..`8`).
///
/// A `Coord` is always on the board; construction from raw numbers goes
/// through [`Coord::new`], which rejects anything outside `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        if Self::is_valid(x, y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major index: a1 = 0, h1 = 7, a2 = 8, ..., h8 = 63
    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    /// Step one square in `dir`, failing with `OutOfBounds` at the edge.
    #[inline]
    pub fn offset(self, dir: Direction) -> Result<Self, BoardError> {
        Self::new(
            i32::from(self.x) + i32::from(dir.dx),
            i32::from(self.y) + i32::from(dir.dy),
        )
    }

    /// Iterate every square in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..TOTAL_CELLS).map(Coord::from_index)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.x), self.y + 1)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    /// Parse `[a-h][1-8]`, e.g. `"d4"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Coord::new(i32::from(file - b'a'), i32::from(rank - b'1'))
            }
            _ => Err(BoardError::ParseCoord(text.to_owned())),
        }
    }
}
