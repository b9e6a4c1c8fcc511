use broadside::{AttackResult, Board, Cell, Orientation, ShipId, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = BOARD_SIZE as usize;
const IDS: [ShipId; 5] = [
    ShipId::Carrier,
    ShipId::Battleship,
    ShipId::Cruiser,
    ShipId::Submarine,
    ShipId::Destroyer,
];

fn random_fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for def in FLEET.iter() {
        let p = board
            .random_placement(&mut rng, def.id(), def.length())
            .unwrap();
        board
            .place_ship(def.id(), def.length(), p.row, p.col, p.orientation)
            .unwrap();
    }
    board
}

fn count_cells(board: &Board, pred: impl Fn(Cell) -> bool) -> usize {
    (0..N)
        .flat_map(|r| (0..N).map(move |c| (r, c)))
        .filter(|&(r, c)| pred(board.cell(r, c).unwrap()))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placements_never_overlap(
        attempts in prop::collection::vec(
            (0usize..5, 1usize..=6, 0usize..12, 0usize..12, any::<bool>()),
            0..40,
        )
    ) {
        let mut board = Board::new();
        for (i, len, r, c, horizontal) in attempts {
            let before = board.clone();
            if board.place_ship(IDS[i], len, r, c, Orientation::from(horizontal)).is_err() {
                prop_assert_eq!(&board, &before);
            }
            let total: usize = board.ships().map(|s| s.length()).sum();
            prop_assert_eq!(count_cells(&board, |cell| cell != Cell::Empty), total);
            for ship in board.ships() {
                let id = ship.id();
                prop_assert_eq!(
                    count_cells(&board, |cell| cell == Cell::Occupied(id)),
                    ship.length()
                );
            }
        }
    }

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let mut board = random_fleet(seed);
        let first = board.attack(row, col).unwrap();
        prop_assert_ne!(first, AttackResult::AlreadyAttacked);
        let after = board.clone();
        for _ in 0..3 {
            prop_assert_eq!(board.attack(row, col).unwrap(), AttackResult::AlreadyAttacked);
        }
        prop_assert_eq!(board, after);
    }

    #[test]
    fn hits_bounded_and_sunk_consistent(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..N, 0..N), 0..300),
    ) {
        let mut board = random_fleet(seed);
        for (r, c) in shots {
            board.attack(r, c).unwrap();
            for ship in board.ships() {
                let id = ship.id();
                prop_assert!(ship.hits() <= ship.length());
                prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.length());
                prop_assert_eq!(ship.hits(), count_cells(&board, |cell| cell == Cell::Hit(id)));
            }
            prop_assert_eq!(board.all_ships_sunk(), board.ships().all(|s| s.is_sunk()));
        }
    }
}
