use broadside::{Board, RandomTargeting, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn random_fleet(rng: &mut SmallRng) -> Board {
    let mut board = Board::new();
    for def in FLEET.iter() {
        let p = board.random_placement(rng, def.id(), def.length()).unwrap();
        board
            .place_ship(def.id(), def.length(), p.row, p.col, p.orientation)
            .unwrap();
    }
    board
}

#[test]
fn test_no_target_on_exhausted_board() {
    let mut board = Board::new();
    for r in 0..N {
        for c in 0..N {
            board.attack(r, c).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(RandomTargeting::new().choose_target(&board, &mut rng), None);
}

#[test]
fn test_last_legal_cell_is_found() {
    let mut board = Board::new();
    for r in 0..N {
        for c in 0..N {
            if (r, c) != (7, 3) {
                board.attack(r, c).unwrap();
            }
        }
    }
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(
            RandomTargeting::new().choose_target(&board, &mut rng),
            Some((7, 3))
        );
    }
}

#[test]
fn test_same_seed_same_target() {
    let board = Board::new();
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let strategy = RandomTargeting::new();
    for _ in 0..10 {
        assert_eq!(
            strategy.choose_target(&board, &mut rng1),
            strategy.choose_target(&board, &mut rng2)
        );
    }
}

#[test]
fn test_every_cell_eventually_targeted() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = random_fleet(&mut rng);
    let strategy = RandomTargeting::new();
    for _ in 0..N * N {
        let (r, c) = strategy.choose_target(&board, &mut rng).unwrap();
        board.attack(r, c).unwrap();
    }
    assert_eq!(board.legal_targets().count(), 0);
    assert!(board.all_ships_sunk());
    assert_eq!(strategy.choose_target(&board, &mut rng), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn target_is_always_legal(seed in any::<u64>(), shots in 0usize..100) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_fleet(&mut rng);
        let strategy = RandomTargeting::new();
        for _ in 0..shots {
            let (r, c) = strategy.choose_target(&board, &mut rng).unwrap();
            prop_assert!(board.is_legal_target(r, c));
            board.attack(r, c).unwrap();
        }
        let target = strategy.choose_target(&board, &mut rng);
        prop_assert!(target.is_some());
        let (r, c) = target.unwrap();
        prop_assert!(board.is_legal_target(r, c));
    }
}
