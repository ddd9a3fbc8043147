use super::*;
use crate::error::BoardError;

fn at(s: &str) -> Coord {
    s.parse().unwrap()
}

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_cell_color() {
    assert_eq!(Cell::Empty.color(), None);
    assert_eq!(Cell::from(Color::White).color(), Some(Color::White));
    assert_eq!(Cell::from(Color::Black), Cell::Black);
}

#[test]
fn test_coord_new() {
    let pos = Coord::new(3, 4).unwrap();
    assert_eq!(pos.x(), 3);
    assert_eq!(pos.y(), 4);

    assert_eq!(Coord::new(8, 0), Err(BoardError::OutOfBounds { x: 8, y: 0 }));
    assert_eq!(Coord::new(0, -1), Err(BoardError::OutOfBounds { x: 0, y: -1 }));
}

#[test]
fn test_coord_validity() {
    assert!(Coord::is_valid(0, 0));
    assert!(Coord::is_valid(7, 7));
    assert!(!Coord::is_valid(-1, 0));
    assert!(!Coord::is_valid(0, 8));
}

#[test]
fn test_coord_from_string() {
    assert_eq!(at("a1"), Coord::new(0, 0).unwrap());
    assert_eq!(at("a2"), Coord::new(0, 1).unwrap());
    assert_eq!(at("h8"), Coord::new(7, 7).unwrap());
    assert_eq!(at("c3"), Coord::new(2, 2).unwrap());
    assert_eq!(at("f6"), Coord::new(5, 5).unwrap());
    assert_eq!(at("d4"), Coord::new(3, 3).unwrap());
    // Trailing newline from line-based input
    assert_eq!(at("e5\n"), Coord::new(4, 4).unwrap());
}

#[test]
fn test_coord_to_string() {
    assert_eq!(Coord::new(0, 0).unwrap().to_string(), "a1");
    assert_eq!(Coord::new(0, 1).unwrap().to_string(), "a2");
    assert_eq!(Coord::new(7, 7).unwrap().to_string(), "h8");
    assert_eq!(Coord::new(2, 2).unwrap().to_string(), "c3");
    assert_eq!(Coord::new(5, 5).unwrap().to_string(), "f6");
    assert_eq!(Coord::new(3, 3).unwrap().to_string(), "d4");
}

#[test]
fn test_coord_round_trip() {
    for file in 'a'..='h' {
        for rank in '1'..='8' {
            let text = format!("{file}{rank}");
            assert_eq!(at(&text).to_string(), text);
        }
    }
}

#[test]
fn test_coord_parse_errors() {
    for bad in ["", "a", "i1", "a0", "a9", "A1", "d44", "4d"] {
        assert_eq!(
            bad.parse::<Coord>(),
            Err(BoardError::ParseCoord(bad.to_owned())),
            "{bad:?}"
        );
    }
}

#[test]
fn test_coord_offset() {
    let d4 = at("d4");
    assert_eq!(d4.offset(Direction::new(1, 0)), Ok(at("e4")));
    assert_eq!(d4.offset(Direction::new(-1, -1)), Ok(at("c3")));
    assert_eq!(
        at("a1").offset(Direction::new(-1, 0)),
        Err(BoardError::OutOfBounds { x: -1, y: 0 })
    );
}

#[test]
fn test_coord_index() {
    assert_eq!(at("a1").to_index(), 0);
    assert_eq!(at("h1").to_index(), 7);
    assert_eq!(at("a2").to_index(), 8);
    assert_eq!(at("h8").to_index(), 63);
    for idx in 0..TOTAL_CELLS {
        assert_eq!(Coord::from_index(idx).to_index(), idx);
    }
    assert_eq!(Coord::all().count(), TOTAL_CELLS);
}

#[test]
fn test_coord_ordering() {
    assert!(at("a1") < at("b1"));
    assert!(at("h1") < at("a2"));
    assert!(at("a1") < at("h8"));
}

#[test]
fn test_directions_are_distinct_units() {
    for (i, a) in DIRECTIONS.iter().enumerate() {
        assert!(a.dx.abs() <= 1 && a.dy.abs() <= 1);
        assert!((a.dx, a.dy) != (0, 0));
        for b in &DIRECTIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_bitboard_basics() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    bb.set(at("a1"));
    bb.set(at("h8"));
    assert!(bb.get(at("a1")));
    assert!(!bb.get(at("b1")));
    assert_eq!(bb.count(), 2);
    assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![at("a1"), at("h8")]);

    bb.clear(at("a1"));
    assert_eq!(bb.count(), 1);
    assert!(Bitboard::from_bits(u64::MAX).is_full());
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.get(at("d4")), Cell::Black);
    assert_eq!(board.get(at("d5")), Cell::White);
    assert_eq!(board.get(at("e4")), Cell::White);
    assert_eq!(board.get(at("e5")), Cell::Black);
    assert_eq!(board.piece_counts(), (2, 2));
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board, Board::default());
}

#[test]
fn test_cell_at_bounds() {
    let board = Board::new();
    assert_eq!(board.cell_at(3, 3), Ok(Cell::Black));
    assert_eq!(board.cell_at(0, 0), Ok(Cell::Empty));
    assert_eq!(board.cell_at(8, 3), Err(BoardError::OutOfBounds { x: 8, y: 3 }));
    assert_eq!(board.cell_at(-1, -1), Err(BoardError::OutOfBounds { x: -1, y: -1 }));
}

#[test]
fn test_copy_is_independent() {
    let board = Board::new();
    let mut copy = board;
    copy.apply_move(at("e3"), Color::Black).unwrap();

    assert_eq!(board.get(at("e4")), Cell::White);
    assert_eq!(copy.get(at("e4")), Cell::Black);
}

#[test]
fn test_place_disc_replaces() {
    let mut board = Board::new();
    board.place_disc(at("d4"), Color::White);
    assert_eq!(board.get(at("d4")), Cell::White);
    assert_eq!(board.piece_counts(), (3, 1));
}

#[test]
fn test_display() {
    let expected = "  a b c d e f g h \n\
                    1                \n\
                    2                \n\
                    3                \n\
                    4       B W      \n\
                    5       W B      \n\
                    6                \n\
                    7                \n\
                    8                \n";
    assert_eq!(Board::new().to_string(), expected);
}

#[test]
fn test_parse_board() {
    let board: Board = "
        ........
        ........
        ........
        ...BW...
        ...WB...
        ........
        ........
        ........"
        .parse()
        .unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_parse_board_errors() {
    assert!(matches!("W".parse::<Board>(), Err(BoardError::ParseBoard(_))));

    let bad = format!("X{}", ".".repeat(63));
    assert!(matches!(bad.parse::<Board>(), Err(BoardError::ParseBoard(_))));
}
