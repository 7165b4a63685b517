//! Integration tests for the spawn / move / land / clear loop

use tui_tetrimino::core::{Field, Game, PieceSource, StepOutcome};
use tui_tetrimino::types::{
    Direction, GameAction, PieceChoice, PieceKind, FIELD_HEIGHT, FIELD_WIDTH,
};

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(12345);
    assert!(game.active().is_none());
    assert!(!game.is_game_over());

    game.start().unwrap();
    assert!(game.active().is_some());
    assert_eq!(game.pieces_spawned(), 1);
    assert!(!game.is_game_over());
}

#[test]
fn test_i_piece_shifts_left_to_the_wall() {
    let mut game = Game::new(1);
    game.spawn_next(PieceChoice::Kind(PieceKind::I)).unwrap();
    assert_eq!(*game.active().unwrap().cells(), [(0, 3), (0, 4), (0, 5), (0, 6)]);

    for _ in 0..3 {
        assert!(game.shift(Direction::Left));
    }
    assert_eq!(*game.active().unwrap().cells(), [(0, 0), (0, 1), (0, 2), (0, 3)]);

    // The fourth attempt would reach column -1.
    let field_before = game.field().clone();
    assert!(!game.shift(Direction::Left));
    assert_eq!(*game.active().unwrap().cells(), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(*game.field(), field_before);
    assert_eq!(game.apply(GameAction::MoveLeft), Ok(StepOutcome::Blocked));
}

#[test]
fn test_drop_to_floor_keeps_cells_in_bounds() {
    for kind in PieceKind::ALL {
        let mut game = Game::new(5);
        game.spawn_next(PieceChoice::Kind(kind)).unwrap();

        while !game.landed() {
            assert!(game.shift(Direction::Down));
        }
        for &(row, col) in game.active().unwrap().cells() {
            assert!((0..FIELD_HEIGHT as i8).contains(&row), "{kind}");
            assert!((0..FIELD_WIDTH as i8).contains(&col), "{kind}");
        }
        let bottom = game.active().unwrap().cells().iter().map(|&(r, _)| r).max();
        assert_eq!(bottom, Some(FIELD_HEIGHT as i8 - 1), "{kind}");
    }
}

#[test]
fn test_input_down_and_tick_land_the_same_way() {
    let mut by_input = Game::new(77);
    let mut by_tick = Game::new(77);
    by_input.spawn_next(PieceChoice::Kind(PieceKind::Z)).unwrap();
    by_tick.spawn_next(PieceChoice::Kind(PieceKind::Z)).unwrap();

    loop {
        let a = by_input.apply(GameAction::MoveDown).unwrap();
        let b = by_tick.tick().unwrap();
        assert_eq!(a, b);
        if matches!(a, StepOutcome::Landed { .. }) {
            break;
        }
    }
    assert_eq!(by_input.field(), by_tick.field());
    assert_eq!(by_input.active(), by_tick.active());
}

#[test]
fn test_same_seed_replays_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveRight,
    ];

    let play = |seed: u64| {
        let mut game = Game::with_source(PieceSource::new(seed));
        game.start().unwrap();
        for step in 0..400 {
            let action = script[step % script.len()];
            if game.apply(action).is_err() || game.tick().is_err() {
                break;
            }
        }
        (game.snapshot(), game.pieces_spawned())
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_filling_a_row_through_play_clears_it() {
    // Bottom row full except columns 0 and 1; an O dropped there completes it.
    let mut rows = [[false; FIELD_WIDTH]; FIELD_HEIGHT];
    for col in 2..FIELD_WIDTH {
        rows[FIELD_HEIGHT - 1][col] = true;
    }
    let mut game = Game::from_field(Field::from_rows(rows), PieceSource::new(8));
    game.spawn_next(PieceChoice::Kind(PieceKind::O)).unwrap();
    while game.shift(Direction::Left) {}

    let cleared = loop {
        match game.tick().unwrap() {
            StepOutcome::Moved => {}
            StepOutcome::Landed { cleared } => break cleared,
            other => panic!("unexpected {:?}", other),
        }
    };
    assert_eq!(cleared.as_slice(), &[FIELD_HEIGHT - 1]);

    // The O's upper half dropped into the bottom row.
    assert!(game.field().is_occupied(19, 0));
    assert!(game.field().is_occupied(19, 1));
    assert!(!game.field().is_occupied(18, 0));
}

#[test]
fn test_stacking_until_game_over() {
    let mut game = Game::new(3);
    game.start().unwrap();

    let mut landings = 0;
    let over = loop {
        match game.tick() {
            Ok(StepOutcome::Landed { .. }) => landings += 1,
            Ok(_) => {}
            Err(over) => break over,
        }
        assert!(landings < 200, "stack never reached the top");
    };

    assert!(game.is_game_over());
    assert!(game.snapshot().game_over);
    assert_eq!(game.tick(), Ok(StepOutcome::Finished));
    assert_eq!(game.apply(GameAction::Rotate), Ok(StepOutcome::Finished));
    assert!(PieceKind::ALL.contains(&over.kind));
}

#[test]
fn test_snapshot_rows_are_row_major() {
    let mut game = Game::new(1);
    game.spawn_next(PieceChoice::Kind(PieceKind::L)).unwrap();
    let snap = game.snapshot();

    assert_eq!(snap.rows.len(), FIELD_HEIGHT);
    assert!(snap.rows.iter().all(|r| r.len() == FIELD_WIDTH));
    // L: (0,3)(0,4)(0,5)(1,3)
    assert!(snap.rows[0][3] && snap.rows[0][4] && snap.rows[0][5]);
    assert!(snap.rows[1][3]);
    assert!(!snap.rows[1][4]);
    assert_eq!(snap.rows, game.field().rows());
}
