//! End-of-game detection and scoring

use crate::board::{Board, Color};

use super::capture::has_valid_move;

/// Check whether the game has ended.
///
/// The game ends when all 64 squares are filled or neither color has a legal
/// move. A position where only one side can move is NOT over: the other side
/// passes and play continues.
pub fn is_game_over(board: &Board) -> bool {
    if board.is_full() {
        return true;
    }
    !has_valid_move(board, Color::White) && !has_valid_move(board, Color::Black)
}

/// Winner of a finished game.
///
/// # Returns
/// - `Some(color)` for the side with strictly more discs
/// - `None` on a tie, or while the game is still in progress
pub fn winner(board: &Board) -> Option<Color> {
    if !is_game_over(board) {
        return None;
    }
    majority(board)
}

/// Color holding strictly more discs, ignoring whether the game is over.
pub fn majority(board: &Board) -> Option<Color> {
    let (white, black) = board.piece_counts();
    match white.cmp(&black) {
        std::cmp::Ordering::Greater => Some(Color::White),
        std::cmp::Ordering::Less => Some(Color::Black),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    fn filled(color: Color) -> Board {
        let mut board = Board::empty();
        for pos in Coord::all() {
            board.place_disc(pos, color);
        }
        board
    }

    #[test]
    fn test_opening_is_not_over() {
        let board = Board::new();
        assert!(!is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_one_color() {
        let board = filled(Color::White);
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), Some(Color::White));

        let board = filled(Color::Black);
        assert_eq!(winner(&board), Some(Color::Black));
    }

    #[test]
    fn test_empty_board_is_over() {
        // Nobody can move, regardless of how few discs are down
        let board = Board::empty();
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_even_split_is_tie() {
        let mut board = Board::empty();
        for pos in Coord::all() {
            let color = if pos.y() < 4 { Color::White } else { Color::Black };
            board.place_disc(pos, color);
        }
        assert_eq!(board.piece_counts(), (32, 32));
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_blocked_position_not_full() {
        // One disc each, nothing bracketable: over with empties left
        let board: Board = "
            B......W
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_one_side_stuck_is_not_over() {
        // White has no move, Black can still play c1 to capture b1
        let board: Board = "
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!has_valid_move(&board, Color::White));
        assert!(has_valid_move(&board, Color::Black));
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_majority_in_progress() {
        let mut board = Board::new();
        board.apply_move("e3".parse().unwrap(), Color::Black).unwrap();
        assert_eq!(majority(&board), Some(Color::Black));
        assert_eq!(winner(&board), None);
    }
}
