use broadside::{ship_type, Orientation, Ship, ShipId, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_record_hit_until_sunk() {
    let mut ship = Ship::new(ShipId::Cruiser, 3);
    assert!(!ship.is_sunk());
    ship.record_hit();
    ship.record_hit();
    assert_eq!(ship.hits(), 2);
    assert!(!ship.is_sunk());
    ship.record_hit();
    assert_eq!(ship.hits(), 3);
    assert!(ship.is_sunk());
}

#[test]
fn test_record_hit_saturates_at_length() {
    let mut ship = Ship::new(ShipId::Destroyer, 2);
    for _ in 0..5 {
        ship.record_hit();
    }
    assert_eq!(ship.hits(), 2);
    assert!(ship.is_sunk());
}

#[test]
fn test_fleet_table() {
    let lengths: Vec<usize> = FLEET.iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    for (i, def) in FLEET.iter().enumerate() {
        assert_eq!(def.id().index(), i);
        assert_eq!(ship_type(def.id()), *def);
    }
    assert_eq!(ShipId::Submarine.name(), "Submarine");
    assert_eq!(Ship::new(ShipId::Carrier, 5).name(), "Carrier");
}

#[test]
fn test_orientation_from_bool_and_step() {
    assert_eq!(Orientation::from(true), Orientation::Horizontal);
    assert_eq!(Orientation::from(false), Orientation::Vertical);
    assert_eq!(Orientation::Horizontal.step(2, 3, 2), (2, 5));
    assert_eq!(Orientation::Vertical.step(2, 3, 2), (4, 3));
}
