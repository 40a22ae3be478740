//! Board tests - occupancy and line clearing

use blockfall::core::Board;
use blockfall::types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS};

fn fill_row(board: &mut Board, row: i16, color: Color) {
    for col in 0..board.columns() as i16 {
        assert!(board.occupy(row, col, color));
    }
}

/// Mark each row with a single cell so shifts can be traced.
fn tag_rows(board: &mut Board, rows: std::ops::Range<i16>) {
    for row in rows {
        board.occupy(row, row % board.columns() as i16, Color::Blue);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.columns(), BOARD_COLUMNS);

    for row in 0..BOARD_ROWS as i16 {
        for col in 0..BOARD_COLUMNS as i16 {
            assert!(board.is_clear(row, col), "cell ({row}, {col}) should be clear");
            assert_eq!(board.get(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_out_of_bounds_is_never_clear() {
    let board = Board::default();
    assert!(!board.is_clear(-1, 0));
    assert!(!board.is_clear(0, -1));
    assert!(!board.is_clear(BOARD_ROWS as i16, 0));
    assert!(!board.is_clear(0, BOARD_COLUMNS as i16));
    assert_eq!(board.get(-1, 0), None);
}

#[test]
fn test_occupy() {
    let mut board = Board::default();
    assert!(board.occupy(10, 5, Color::Purple));
    assert!(!board.is_clear(10, 5));
    assert_eq!(board.get(10, 5), Some(Cell::Occupied(Color::Purple)));

    // Out of bounds is ignored
    assert!(!board.occupy(20, 0, Color::Purple));
    assert!(!board.occupy(0, -1, Color::Purple));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_empty_board_clears_nothing() {
    let mut board = Board::default();
    assert_eq!(board.clear_completed_rows(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_almost_full_row_stays() {
    let mut board = Board::default();
    for col in 0..9 {
        board.occupy(19, col, Color::Red);
    }
    assert!(!board.is_row_full(19));
    assert_eq!(board.clear_completed_rows(), 0);
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::default();
    tag_rows(&mut board, 0..5);
    fill_row(&mut board, 5, Color::Green);

    assert_eq!(board.clear_completed_rows(), 1);

    // Row 0 is new and empty
    assert!(board.row(0).unwrap().iter().all(Cell::is_empty));
    // Rows 0..5 moved to 1..6
    for old_row in 0..5i16 {
        let col = old_row % 10;
        assert_eq!(
            board.get(old_row + 1, col),
            Some(Cell::Occupied(Color::Blue)),
            "row {old_row} should now be at {}",
            old_row + 1
        );
    }
    assert_eq!(board.occupied_count(), 5);
}

#[test]
fn test_clear_two_separate_rows() {
    let mut board = Board::default();
    board.occupy(0, 0, Color::Orange);
    board.occupy(4, 9, Color::Cyan);
    fill_row(&mut board, 3, Color::Red);
    fill_row(&mut board, 5, Color::Red);

    assert_eq!(board.clear_completed_rows(), 2);

    // Two fresh rows at the top
    assert!(board.row(0).unwrap().iter().all(Cell::is_empty));
    assert!(board.row(1).unwrap().iter().all(Cell::is_empty));
    // Row 4 sat between the cleared rows: one row dropped below it
    assert_eq!(board.get(5, 9), Some(Cell::Occupied(Color::Cyan)));
    // Row 0 had both cleared rows below it
    assert_eq!(board.get(2, 0), Some(Cell::Occupied(Color::Orange)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_adjacent_rows() {
    let mut board = Board::default();
    board.occupy(16, 2, Color::Yellow);
    for row in 17..20 {
        fill_row(&mut board, row, Color::Blue);
    }

    assert_eq!(board.clear_completed_rows(), 3);
    assert_eq!(board.get(19, 2), Some(Cell::Occupied(Color::Yellow)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_full_board_clears_everything() {
    let mut board = Board::default();
    for row in 0..BOARD_ROWS as i16 {
        fill_row(&mut board, row, Color::Green);
    }

    assert_eq!(board.clear_completed_rows(), BOARD_ROWS as usize);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_custom_dimensions() {
    let mut board = Board::new(6, 12);
    assert_eq!((board.rows(), board.columns()), (6, 12));
    fill_row(&mut board, 5, Color::Red);
    assert!(board.is_row_full(5));
    assert_eq!(board.clear_completed_rows(), 1);
    assert_eq!(board.occupied_count(), 0);
}
