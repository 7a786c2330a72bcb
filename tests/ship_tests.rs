use broadside::{OverHitError, Ship};

#[test]
fn new_ship_is_unplaced_and_afloat() {
    let ship = Ship::new(4);
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.hits(), 0);
    assert!(ship.positions().is_empty());
    assert!(!ship.is_sunk());
}

#[test]
fn ship_sinks_exactly_at_length() {
    let mut ship = Ship::new(3);
    for _ in 0..2 {
        ship.hit().unwrap();
        assert!(!ship.is_sunk());
    }
    ship.hit().unwrap();
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), ship.length());
}

#[test]
fn hit_on_sunk_ship_is_an_error() {
    let mut ship = Ship::new(2);
    ship.hit().unwrap();
    ship.hit().unwrap();
    assert!(ship.is_sunk());

    assert_eq!(ship.hit(), Err(OverHitError));
    // The hit counter never exceeds the length.
    assert_eq!(ship.hits(), 2);
}

#[test]
#[should_panic]
fn zero_length_ship_is_rejected() {
    Ship::new(0);
}
