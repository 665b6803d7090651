//! Game controller integration tests.
//!
//! These tests drive whole games through `GameController` and check
//! scoring, spawning, game-over detection and listener notification.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use rust_2048::{
    Board, Direction, FnPolicy, GameConfig, GameController, GameStatus, NumericPolicy, TilePool,
};

fn preset(rows: Vec<Vec<u64>>, spawn: bool) -> GameController<u64, NumericPolicy> {
    let config = GameConfig::new(rows.len(), rows[0].len())
        .with_seed(5)
        .with_initial_tiles(0)
        .with_spawn_after_move(spawn);
    let board = Board::from_rows(rows).unwrap();
    GameController::from_board(config, board, NumericPolicy::new(), TilePool::classic()).unwrap()
}

#[test]
fn test_initial_tiles() {
    let config = GameConfig::new(5, 3).with_seed(8).with_initial_tiles(4);
    let game = GameController::new(config, NumericPolicy::new(), TilePool::classic()).unwrap();
    assert_eq!(game.board().count_occupied(game.policy()), 4);
    assert_eq!(game.board().height(), 5);
    assert_eq!(game.board().width(), 3);
}

#[test]
fn test_too_many_initial_tiles_rejected() {
    let config = GameConfig::new(2, 2).with_initial_tiles(5);
    assert!(GameController::new(config, NumericPolicy::new(), TilePool::classic()).is_err());
}

#[test]
fn test_alternating_board_is_game_over() {
    let game = preset(
        vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ],
        true,
    );
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Over);
}

#[test]
fn test_board_with_gap_is_alive() {
    let game = preset(
        vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 0, 4],
            vec![4, 2, 4, 2],
        ],
        true,
    );
    assert!(!game.is_game_over());
    assert_eq!(game.legal_moves().len(), 4);
}

#[test]
fn test_add_new_tile_until_full() {
    let mut game = preset(vec![vec![0, 0], vec![0, 0]], false);
    for _ in 0..4 {
        assert!(game.add_new_tile().unwrap().is_some());
    }
    assert_eq!(game.add_new_tile().unwrap(), None);
    assert!(game.board().is_full(game.policy()));
}

#[test]
fn test_score_accumulates_across_moves() {
    let mut game = preset(vec![vec![2, 2, 4, 4]], false);

    let first = game.make_move(Direction::Left).unwrap();
    assert_eq!(first.score_gained, 12);
    assert_eq!(game.board().rows(), vec![vec![4, 8, 0, 0]]);

    let second = game.make_move(Direction::Right).unwrap();
    assert_eq!(second.score_gained, 0);
    assert_eq!(game.board().rows(), vec![vec![0, 0, 4, 8]]);

    assert_eq!(game.score(), 12);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_effective_move_spawns_exactly_one_tile() {
    let mut game = preset(vec![vec![2, 0, 0], vec![0, 0, 0], vec![0, 0, 0]], true);
    let report = game.make_move(Direction::Down).unwrap();

    let spawned = report.spawned.expect("effective move spawns");
    assert_eq!(*game.board().get(2, 0).unwrap(), 2);
    assert_eq!(*game.board().get(spawned.row, spawned.column).unwrap(), spawned.value);
    assert_eq!(game.board().count_occupied(game.policy()), 2);
}

#[test]
fn test_ineffective_move_does_not_spawn() {
    let mut game = preset(vec![vec![2, 0, 0]], true);
    let report = game.make_move(Direction::Left).unwrap();
    assert!(!report.is_effective());
    assert_eq!(report.spawned, None);
    assert_eq!(game.board().count_occupied(game.policy()), 1);
}

#[test]
fn test_last_spawn_can_end_the_game() {
    // Left fills [4, 2] and the spawn has to take the last cell.
    let pool = TilePool::new().with(8u64, 1);
    let config = GameConfig::new(1, 3).with_seed(0).with_initial_tiles(0);
    let board = Board::from_rows(vec![vec![2u64, 2, 2]]).unwrap();
    let mut game = GameController::from_board(config, board, NumericPolicy::new(), pool).unwrap();

    let report = game.make_move(Direction::Left).unwrap();
    assert_eq!(game.board().rows(), vec![vec![4, 2, 8]]);
    assert_eq!(report.status, GameStatus::Over);
    assert!(game.is_game_over());

    let after = game.make_move(Direction::Right).unwrap();
    assert!(!after.is_effective());
    assert_eq!(game.board().rows(), vec![vec![4, 2, 8]]);
}

#[test]
fn test_listener_sees_updated_game() {
    let mut game = preset(vec![vec![0, 2, 0, 2]], false);
    let observed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);

    game.add_listener(move |game, report| {
        sink.borrow_mut()
            .push((report.direction, game.score(), game.board().rows()));
    });

    game.make_move(Direction::Right).unwrap();
    assert_eq!(
        *observed.borrow(),
        vec![(Direction::Right, 4, vec![vec![0, 0, 0, 4]])]
    );
}

#[test]
fn test_listener_may_unregister_itself() {
    let mut game = preset(vec![vec![2, 0, 0, 0], vec![0, 0, 0, 0]], false);
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let own_id = Rc::new(RefCell::new(None));
    let id_slot = Rc::clone(&own_id);

    let id = game.add_listener(move |game, _| {
        *counter.borrow_mut() += 1;
        if let Some(id) = *id_slot.borrow() {
            game.remove_listener(id);
        }
    });
    *own_id.borrow_mut() = Some(id);

    game.make_move(Direction::Right).unwrap();
    game.make_move(Direction::Down).unwrap();
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(game.listener_count(), 0);
}

#[test]
fn test_generic_tiles_through_controller() {
    let policy = FnPolicy::<String>::builder()
        .base_value(String::new())
        .is_mergeable(|dest, src| !dest.is_empty() && dest == src && dest.len() < 8)
        .merge(|dest, src| format!("{}{}", dest, src))
        .score(|merged| merged.len() as u64)
        .build()
        .unwrap();
    let pool = TilePool::new().with("x".to_string(), 1);
    let config = GameConfig::new(1, 4).with_seed(1).with_initial_tiles(0);
    let board = Board::from_rows(vec![vec![
        String::new(),
        "x".to_string(),
        String::new(),
        "x".to_string(),
    ]])
    .unwrap();

    let mut game = GameController::from_board(config, board, policy, pool).unwrap();
    let report = game.make_move(Direction::Left).unwrap();

    assert_eq!(*game.board().get(0, 0).unwrap(), "xx");
    assert_eq!(report.score_gained, 2);
    assert_eq!(game.board().count_occupied(game.policy()), 2);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Left,
        Direction::Down,
    ];
    let play = |seed| {
        let mut game = GameController::classic(seed).unwrap();
        for direction in script {
            game.make_move(direction).unwrap();
        }
        (game.board().clone(), game.score(), game.move_count())
    };
    assert_eq!(play(31), play(31));
}

#[test]
fn test_config_from_json() {
    let config: GameConfig = serde_json::from_str(r#"{"height": 3, "seed": 4}"#).unwrap();
    assert_eq!(config.height, 3);
    assert_eq!(config.width, 4);
    assert_eq!(config.seed, Some(4));
    assert_eq!(config.initial_tiles, 1);

    let game = GameController::new(config, NumericPolicy::new(), TilePool::classic()).unwrap();
    assert_eq!(game.board().height(), 3);
}

fn small_board() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (1usize..5, 1usize..5).prop_flat_map(|(height, width)| {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(0u64), Just(2u64), Just(4u64), Just(8u64)], width),
            height,
        )
    })
}

proptest! {
    #[test]
    fn game_over_iff_no_direction_is_effective(rows in small_board()) {
        let game = preset(rows, false);
        prop_assert_eq!(game.is_game_over(), game.legal_moves().is_empty());
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 1..40),
    ) {
        let mut game = GameController::classic(seed).unwrap();
        for direction in moves {
            let before = game.board().count_occupied(game.policy());
            let report = game.make_move(direction).unwrap();

            prop_assert_eq!(game.board().height(), 4);
            prop_assert_eq!(game.board().width(), 4);
            if report.is_effective() {
                let spawned = usize::from(report.spawned.is_some());
                prop_assert_eq!(
                    game.board().count_occupied(game.policy()),
                    before - report.merge_count() + spawned
                );
            }
            prop_assert_eq!(report.status == GameStatus::Over, game.is_game_over());
        }
    }
}
