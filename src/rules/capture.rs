//! Capture rules for Reversi (directional flipping)
//!
//! Capture pattern along any of the eight compass directions:
//! X-O-...-O-X where X is the mover's disc (the first X is the square being
//! played) and the O run is one or more opponent discs. Every bracketed run
//! is flipped, and each direction is judged independently.

use crate::board::{Bitboard, Board, Cell, Color, Coord, Direction, DIRECTIONS};
use crate::error::BoardError;

/// Opponent discs `color` would capture along `dir` by playing at `origin`.
///
/// Walks from `origin` in `dir` and stops at the first square that does not
/// hold an opponent disc. The walk captures only if it stopped on a `color`
/// disc at least two steps out; an empty square or the board edge ends it
/// with nothing captured.
///
/// # Returns
/// The run of opponent discs between `origin` and the bracketing disc,
/// or an empty bitboard when this direction is not a capturing line.
pub fn capturing_line(board: &Board, origin: Coord, dir: Direction, color: Color) -> Bitboard {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());

    let mut line = Bitboard::new();
    let mut pos = origin;
    loop {
        pos = match pos.offset(dir) {
            Ok(next) => next,
            // Ran off the board before finding a bracketing disc
            Err(_) => return Bitboard::new(),
        };

        let cell = board.get(pos);
        if cell == opponent {
            line.set(pos);
        } else if cell == own {
            // Adjacent own disc leaves `line` empty: zero-length lines never capture
            return line;
        } else {
            return Bitboard::new();
        }
    }
}

/// All discs captured by playing `color` at `pos`, across every direction.
///
/// Empty when the square is occupied or no direction captures.
pub fn captured_discs(board: &Board, pos: Coord, color: Color) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }

    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &dir| acc | capturing_line(board, pos, dir, color))
}

/// Check if `color` may legally play at `pos`.
///
/// Legal iff the square is empty and at least one direction is a capturing
/// line. Stops at the first capturing direction.
#[inline]
pub fn is_legal_move(board: &Board, pos: Coord, color: Color) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| !capturing_line(board, pos, dir, color).is_empty())
}

/// Place a disc and flip every captured run.
///
/// # Returns
/// Number of flipped discs, or `InvalidMove` with the board unchanged.
pub fn apply_move(board: &mut Board, pos: Coord, color: Color) -> Result<u32, BoardError> {
    let captured = captured_discs(board, pos, color);
    if captured.is_empty() {
        return Err(BoardError::InvalidMove { coord: pos, color });
    }

    board.place_disc(pos, color);
    board.flip(captured, color);

    Ok(captured.count())
}

/// Every legal move for `color`, in row-major scan order.
pub fn valid_moves(board: &Board, color: Color) -> Vec<Coord> {
    Coord::all()
        .filter(|&pos| is_legal_move(board, pos, color))
        .collect()
}

#[inline]
pub fn has_valid_move(board: &Board, color: Color) -> bool {
    Coord::all().any(|pos| is_legal_move(board, pos, color))
}

/// Number of legal moves for `color` (mobility).
#[inline]
pub fn count_valid_moves(board: &Board, color: Color) -> usize {
    Coord::all()
        .filter(|&pos| is_legal_move(board, pos, color))
        .count()
}
