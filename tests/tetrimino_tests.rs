//! Tetrimino tests - shape table and rotation geometry

use std::collections::HashSet;

use tui_tetrimino::core::{get_shape, spawn_cells, Field, Game, Tetrimino};
use tui_tetrimino::types::{
    Direction, PieceCells, PieceChoice, PieceKind, FIELD_HEIGHT, FIELD_WIDTH,
};

fn sorted(mut cells: PieceCells) -> PieceCells {
    cells.sort_unstable();
    cells
}

fn spawned(kind: PieceKind) -> (Field, Tetrimino) {
    let mut field = Field::new();
    let piece = field.spawn(kind).unwrap();
    (field, piece)
}

// ============== Shape table ==============

#[test]
fn test_every_kind_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let unique: HashSet<_> = get_shape(kind).into_iter().collect();
        assert_eq!(unique.len(), 4, "{kind}");
    }
}

#[test]
fn test_shape_table() {
    assert_eq!(get_shape(PieceKind::I), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(get_shape(PieceKind::O), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(get_shape(PieceKind::S), [(0, 1), (0, 2), (1, 0), (1, 1)]);
    assert_eq!(get_shape(PieceKind::Z), [(0, 0), (0, 1), (1, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::J), [(0, 0), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::L), [(0, 0), (0, 1), (0, 2), (1, 0)]);
    assert_eq!(get_shape(PieceKind::T), [(0, 0), (0, 1), (0, 2), (1, 1)]);
}

#[test]
fn test_spawn_cells_are_fresh_values() {
    let mut a = spawn_cells(PieceKind::J);
    a[0] = (9, 9);
    assert_ne!(a, spawn_cells(PieceKind::J));
    assert_eq!(spawn_cells(PieceKind::J), [(0, 3), (1, 3), (1, 4), (1, 5)]);
}

// ============== Rotation geometry ==============

#[test]
fn test_rotate_o_twice_returns_to_same_cells() {
    let (_, mut piece) = spawned(PieceKind::O);
    let before = sorted(*piece.cells());
    piece.commit_rotate();
    piece.commit_rotate();
    assert_eq!(sorted(*piece.cells()), before);
}

#[test]
fn test_rotate_s_z_j_l() {
    // S: (0,4)(0,5)(1,3)(1,4) -> rows 0-(c-3), cols 3+r, rebased onto row 0.
    let (_, s) = spawned(PieceKind::S);
    assert_eq!(sorted(s.candidate_rotate()), [(0, 3), (1, 3), (1, 4), (2, 4)]);

    let (_, z) = spawned(PieceKind::Z);
    assert_eq!(sorted(z.candidate_rotate()), [(0, 4), (1, 3), (1, 4), (2, 3)]);

    let (_, j) = spawned(PieceKind::J);
    assert_eq!(sorted(j.candidate_rotate()), [(0, 4), (1, 4), (2, 3), (2, 4)]);

    let (_, l) = spawned(PieceKind::L);
    assert_eq!(sorted(l.candidate_rotate()), [(0, 3), (1, 3), (2, 3), (2, 4)]);
}

#[test]
fn test_four_rotations_restore_shape_up_to_translation() {
    for kind in PieceKind::ALL {
        let (_, mut piece) = spawned(kind);
        let start = sorted(*piece.cells());
        for _ in 0..4 {
            piece.commit_rotate();
        }
        let end = sorted(*piece.cells());
        let (dr, dc) = (end[0].0 - start[0].0, end[0].1 - start[0].1);
        let moved = sorted(start.map(|(r, c)| (r + dr, c + dc)));
        assert_eq!(end, moved, "{kind}");
    }
}

// ============== Rotation legality ==============

#[test]
fn test_rotate_against_right_wall_is_rejected() {
    let mut game = Game::new(1);
    game.spawn_next(PieceChoice::Kind(PieceKind::I)).unwrap();
    assert!(game.rotate());
    // Vertical I in the last column.
    while game.shift(Direction::Right) {}
    let col = game.active().unwrap().cells()[0].1;
    assert_eq!(col, FIELD_WIDTH as i8 - 1);

    let before = game.field().clone();
    assert!(!game.rotate());
    assert_eq!(*game.field(), before);
}

#[test]
fn test_rotate_into_stack_is_rejected() {
    let mut rows = [[false; FIELD_WIDTH]; FIELD_HEIGHT];
    // The rotated T needs (2, 3).
    rows[2][3] = true;
    let mut game = Game::from_field(Field::from_rows(rows), Default::default());
    game.spawn_next(PieceChoice::Kind(PieceKind::T)).unwrap();

    let cells = *game.active().unwrap().cells();
    let before = game.field().clone();
    assert!(!game.rotate());
    assert_eq!(*game.active().unwrap().cells(), cells);
    assert_eq!(*game.field(), before);
}

#[test]
fn test_rotation_cannot_climb_out_of_a_well() {
    // Rows 10-19 full except column 0.
    let mut rows = [[false; FIELD_WIDTH]; FIELD_HEIGHT];
    for row in rows.iter_mut().skip(10) {
        *row = [true; FIELD_WIDTH];
        row[0] = false;
    }
    let mut game = Game::from_field(Field::from_rows(rows), Default::default());
    game.spawn_next(PieceChoice::Kind(PieceKind::I)).unwrap();
    assert!(game.rotate());
    while game.shift(Direction::Left) {}
    while game.shift(Direction::Down) {}
    assert_eq!(
        sorted(*game.active().unwrap().cells()),
        [(16, 0), (17, 0), (18, 0), (19, 0)]
    );

    // Turning flat would need the rest of row 16, which is full.
    let dest = game.active().unwrap().candidate_rotate();
    assert!(dest.iter().all(|&(r, _)| r == 16));
    assert!(!game.rotate());
}
