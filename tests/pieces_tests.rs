//! Piece tests - spawn layout and pivot rotation

use blockfall::core::pieces::{rotated, spawn_cells, PIVOT_INDEX};
use blockfall::core::{Board, GameEngine, Piece, ShapeSequence};
use blockfall::types::{Color, Shape, BOARD_COLUMNS, BOARD_ROWS};

#[test]
fn test_spawn_table() {
    let expected = [
        (Shape::I, Color::Cyan, [(0, 4), (0, 5), (0, 6), (0, 7)]),
        (Shape::O, Color::Yellow, [(0, 4), (0, 5), (1, 4), (1, 5)]),
        (Shape::T, Color::Purple, [(0, 4), (1, 3), (1, 4), (1, 5)]),
        (Shape::S, Color::Green, [(0, 5), (0, 6), (1, 4), (1, 5)]),
        (Shape::Z, Color::Red, [(0, 4), (0, 5), (1, 5), (1, 6)]),
        (Shape::J, Color::Blue, [(0, 4), (1, 4), (1, 5), (1, 6)]),
        (Shape::L, Color::Orange, [(0, 6), (1, 4), (1, 5), (1, 6)]),
    ];

    for (shape, color, cells) in expected {
        let piece = Piece::new(shape);
        assert_eq!(piece.shape(), shape);
        assert_eq!(piece.color(), color, "{shape:?} color");
        assert_eq!(*piece.cells(), cells, "{shape:?} cells");
    }
}

#[test]
fn test_spawned_pieces_are_in_bounds() {
    for shape in Shape::ALL {
        let engine = GameEngine::with_board(Board::default(), ShapeSequence::repeat(shape));
        let piece = engine.current_piece().expect("piece spawned");
        assert_eq!(piece.cells().len(), 4);
        for &(row, col) in piece.cells() {
            assert!((0..BOARD_ROWS as i16).contains(&row));
            assert!((0..BOARD_COLUMNS as i16).contains(&col));
        }
        assert_eq!(piece.color(), shape.color());
    }
}

#[test]
fn test_spawn_centered_on_wider_board() {
    assert_eq!(spawn_cells(Shape::I, 14), [(0, 6), (0, 7), (0, 8), (0, 9)]);
    assert_eq!(spawn_cells(Shape::T, 8), [(0, 3), (1, 2), (1, 3), (1, 4)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for shape in Shape::ALL {
        let start = Piece::new(shape);
        let twice = rotated(&start.rotated());
        let four_times = rotated(&rotated(&twice));
        assert_eq!(four_times, *start.cells(), "{shape:?}");
    }
}

#[test]
fn test_four_rotations_in_play_are_identity() {
    for shape in Shape::ALL {
        let mut engine = GameEngine::with_board(Board::default(), ShapeSequence::repeat(shape));
        for _ in 0..3 {
            engine.move_down();
        }
        let before = *engine.current_piece().unwrap().cells();

        for turn in 0..4 {
            assert!(engine.rotate(), "{shape:?} rotation {turn} should fit");
        }
        assert_eq!(*engine.current_piece().unwrap().cells(), before, "{shape:?}");
    }
}

#[test]
fn test_rotation_uses_second_cell_as_pivot() {
    // I does not flip between horizontal and vertical around its centre:
    // it swings around (0,5).
    let i = Piece::new(Shape::I);
    assert_eq!(i.pivot(), (0, 5));
    assert_eq!(i.rotated(), [(1, 5), (0, 5), (-1, 5), (-2, 5)]);

    // O is not rotation-invariant.
    let o = Piece::new(Shape::O);
    assert_eq!(o.rotated(), [(1, 5), (0, 5), (1, 6), (0, 6)]);

    for shape in Shape::ALL {
        let piece = Piece::new(shape);
        assert_eq!(piece.rotated()[PIVOT_INDEX], piece.cells()[PIVOT_INDEX]);
    }
}

#[test]
fn test_two_rotations_point_reflect() {
    // 180° around the pivot mirrors every offset.
    let piece = Piece::new(Shape::L);
    let (pr, pc) = piece.pivot();
    let half_turn = rotated(&piece.rotated());
    for (before, after) in piece.cells().iter().zip(half_turn.iter()) {
        assert_eq!(after.0 - pr, -(before.0 - pr));
        assert_eq!(after.1 - pc, -(before.1 - pc));
    }
}
