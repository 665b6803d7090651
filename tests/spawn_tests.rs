//! Spawn integration tests.
//!
//! These tests verify that generated tiles land on empty cells and that
//! values follow the pool's weights.

use proptest::prelude::*;
use rust_2048::{Board, GameRng, NumericPolicy, TileGenerator, TilePool};

#[test]
fn test_spawn_fills_every_empty_cell_eventually() {
    let policy = NumericPolicy::new();
    let mut board = Board::new(3, 3, 0u64).unwrap();
    let mut generator = TileGenerator::seeded(TilePool::classic(), 2024).unwrap();

    for expected in 1..=9 {
        let cell = generator
            .spawn(&board, &policy)
            .unwrap()
            .expect("board still has room");
        assert_eq!(*board.get(cell.row, cell.column).unwrap(), 0);
        board.place(&cell).unwrap();
        assert_eq!(board.count_occupied(&policy), expected);
    }

    assert!(board.is_full(&policy));
    assert_eq!(generator.spawn(&board, &policy).unwrap(), None);
}

#[test]
fn test_classic_weights_roughly_hold() {
    let policy = NumericPolicy::new();
    let board = Board::new(4, 4, 0u64).unwrap();
    let mut generator = TileGenerator::seeded(TilePool::classic(), 7).unwrap();

    let draws = 10_000;
    let fours = (0..draws)
        .filter(|_| generator.spawn(&board, &policy).unwrap().unwrap().value == 4)
        .count();

    // 5% expected
    assert!(
        (300..=700).contains(&fours),
        "expected about 500 fours in {} draws, got {}",
        draws,
        fours
    );
}

#[test]
fn test_cell_choice_is_spread_out() {
    let policy = NumericPolicy::new();
    let board = Board::new(2, 2, 0u64).unwrap();
    let mut generator = TileGenerator::new(TilePool::classic(), GameRng::new(1)).unwrap();

    let mut hits = [0usize; 4];
    for _ in 0..4_000 {
        let cell = generator.spawn(&board, &policy).unwrap().unwrap();
        hits[cell.row * 2 + cell.column] += 1;
    }
    for (index, count) in hits.iter().enumerate() {
        assert!(*count > 800, "cell {} chosen only {} times", index, count);
    }
}

#[test]
fn test_pool_buckets_follow_insertion_order() {
    let pool = TilePool::new().with(2u64, 3).with(4, 1).with(8, 6);
    assert_eq!(pool.total_weight(), 10);

    let picks: Vec<_> = (1..=10).map(|roll| *pool.pick(roll).unwrap()).collect();
    assert_eq!(picks, vec![2, 2, 2, 4, 8, 8, 8, 8, 8, 8]);
    assert_eq!(pool.pick(0), None);
    assert_eq!(pool.pick(11), None);
}

#[test]
fn test_zero_weight_entry_is_never_drawn() {
    let policy = NumericPolicy::new();
    let board = Board::new(4, 4, 0u64).unwrap();
    let pool = TilePool::new().with(2u64, 0).with(4, 1);
    let mut generator = TileGenerator::seeded(pool, 3).unwrap();

    for _ in 0..200 {
        assert_eq!(generator.spawn(&board, &policy).unwrap().unwrap().value, 4);
    }
}

#[test]
fn test_average_weight_insertion() {
    let mut pool = TilePool::new().with(2u64, 90).with(4, 10);
    pool.add_with_average_weight(8);
    assert_eq!(pool.weight_of(&8), Some(50));

    let mut empty = TilePool::new();
    empty.add_with_average_weight(2u64);
    assert_eq!(empty.weight_of(&2), Some(1));
}

#[test]
fn test_pool_serde() {
    let pool = TilePool::classic();
    let json = serde_json::to_string(&pool).unwrap();
    let restored: TilePool<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, pool);
}

proptest! {
    #[test]
    fn spawn_only_targets_empty_cells(
        rows in prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(0u64), Just(2u64), Just(4u64)], 4),
            4,
        ),
        seed in any::<u64>(),
    ) {
        let policy = NumericPolicy::new();
        let board = Board::from_rows(rows).unwrap();
        let mut generator = TileGenerator::seeded(TilePool::classic(), seed).unwrap();

        match generator.spawn(&board, &policy).unwrap() {
            Some(cell) => {
                prop_assert_eq!(*board.get(cell.row, cell.column).unwrap(), 0);
                prop_assert!(cell.value == 2 || cell.value == 4);
            }
            None => prop_assert!(board.is_full(&policy)),
        }
    }
}
