//! Board structure: one bitboard per color

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Color, Coord, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;
use crate::rules;

/// 8x8 Reversi board.
///
/// A board is a plain value: cloning it yields an independent position, which
/// is how the search explores hypothetical futures. Game moves go through
/// [`Board::apply_move`]; [`Board::place_disc`] only exists to set up
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    white: Bitboard,
    black: Bitboard,
}

impl Board {
    /// Standard opening position: d4 and e5 black, d5 and e4 white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_disc(Coord::from_index(3 * BOARD_SIZE + 3), Color::Black); // d4
        board.place_disc(Coord::from_index(4 * BOARD_SIZE + 3), Color::White); // d5
        board.place_disc(Coord::from_index(3 * BOARD_SIZE + 4), Color::White); // e4
        board.place_disc(Coord::from_index(4 * BOARD_SIZE + 4), Color::Black); // e5
        board
    }

    /// Board with no discs at all
    pub const fn empty() -> Self {
        Self {
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Get the contents of a square
    #[inline]
    pub fn get(&self, pos: Coord) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Checked access by raw column/row numbers.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        Coord::new(x, y).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Coord) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a disc on a square without any capture processing,
    /// replacing whatever was there. Use `apply_move` for game moves.
    #[inline]
    pub fn place_disc(&mut self, pos: Coord, color: Color) {
        match color {
            Color::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Color::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
        }
    }

    /// Turn every disc in `mask` to `color`.
    #[inline]
    pub(crate) fn flip(&mut self, mask: Bitboard, color: Color) {
        match color {
            Color::White => {
                self.black = self.black & !mask;
                self.white |= mask;
            }
            Color::Black => {
                self.white = self.white & !mask;
                self.black |= mask;
            }
        }
    }

    /// Bitboard of one color's discs
    #[inline]
    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count()
    }

    /// Disc totals as `(white, black)`
    #[inline]
    pub fn piece_counts(&self) -> (u32, u32) {
        (self.white.count(), self.black.count())
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.white.count() + self.black.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }
}

// Rule queries. The logic lives in `crate::rules`; these are the
// board-facing entry points.
impl Board {
    #[inline]
    pub fn is_legal_move(&self, pos: Coord, color: Color) -> bool {
        rules::is_legal_move(self, pos, color)
    }

    /// Play `color` at `pos`, flipping every captured disc.
    ///
    /// Returns the number of flipped discs, or `InvalidMove` (leaving the
    /// board untouched) when the move captures nothing or the square is taken.
    pub fn apply_move(&mut self, pos: Coord, color: Color) -> Result<u32, BoardError> {
        rules::apply_move(self, pos, color)
    }

    #[inline]
    pub fn captured_discs(&self, pos: Coord, color: Color) -> Bitboard {
        rules::captured_discs(self, pos, color)
    }

    pub fn valid_moves(&self, color: Color) -> Vec<Coord> {
        rules::valid_moves(self, color)
    }

    #[inline]
    pub fn has_valid_move(&self, color: Color) -> bool {
        rules::has_valid_move(self, color)
    }

    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(self)
    }

    pub fn winner(&self) -> Option<Color> {
        rules::winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Column letters across the top, row numbers down the left,
    /// one `W`/`B`/blank per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE as u8 {
            write!(f, "{} ", char::from(b'a' + x))?;
        }
        writeln!(f)?;

        for y in 0..BOARD_SIZE {
            write!(f, "{}", y + 1)?;
            for x in 0..BOARD_SIZE {
                match self.get(Coord::from_index(y * BOARD_SIZE + x)).color() {
                    Some(color) => write!(f, " {}", color.glyph())?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a bare 8x8 grid, row 1 first, `a` to `h` within a row.
    /// `W`/`B` (any case) are discs, `.` or `-` is empty; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != TOTAL_CELLS {
            return Err(BoardError::ParseBoard(format!(
                "expected {TOTAL_CELLS} squares, found {}",
                cells.len()
            )));
        }

        let mut board = Board::empty();
        for (idx, ch) in cells.into_iter().enumerate() {
            let pos = Coord::from_index(idx);
            match ch {
                'W' | 'w' => board.place_disc(pos, Color::White),
                'B' | 'b' => board.place_disc(pos, Color::Black),
                '.' | '-' => {}
                other => {
                    return Err(BoardError::ParseBoard(format!(
                        "unexpected {other:?} at {pos}"
                    )))
                }
            }
        }
        Ok(board)
    }
}
