use proptest::prelude::*;

use broadside::{
    AttackOutcome, Board, CannotPlaceReason, Cell, Coordinate, Orientation, Ship, BOARD_SIZE,
    FLEET,
};

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(row, col)| Coordinate::new(row, col))
}

/// Snapshot the full grid for before/after comparisons.
fn snapshot(board: &Board) -> Vec<Cell> {
    board.iter_rows().flatten().collect()
}

/// Board with the standard fleet placed on consecutive rows.
fn fleet_board() -> Board {
    let mut board = Board::new();
    for (row, &len) in FLEET.iter().enumerate() {
        board
            .place_ship(Ship::new(len), Coordinate::new(row, 0), Orientation::Horizontal)
            .unwrap();
    }
    board
}

proptest! {
    /// A successful placement fills exactly `length` cells in a contiguous axis-aligned
    /// run from the origin; a rejected out-of-bounds placement leaves the board empty.
    #[test]
    fn placement_postconditions(
        origin in arb_coordinate(),
        length in 1..=5usize,
        orientation in arb_orientation(),
    ) {
        let mut board = Board::new();
        match board.place_ship(Ship::new(length), origin, orientation) {
            Ok(id) => {
                let ship = board.ship(id);
                prop_assert_eq!(ship.positions().len(), length);
                for (i, &pos) in ship.positions().iter().enumerate() {
                    let expected = match orientation {
                        Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
                        Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
                    };
                    prop_assert_eq!(pos, expected);
                    prop_assert!(pos.in_bounds());
                    prop_assert_eq!(board.cell(pos), Some(Cell::Occupied(id)));
                }
                let occupied = snapshot(&board).iter().filter(|c| **c != Cell::Empty).count();
                prop_assert_eq!(occupied, length);
            }
            Err(err) => {
                prop_assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
                prop_assert!(snapshot(&board).iter().all(|c| *c == Cell::Empty));
            }
        }
    }

    /// A placement rejected for overlap never leaves partial writes behind.
    #[test]
    fn rejected_overlap_is_atomic(
        origin in arb_coordinate(),
        length in 1..=5usize,
        orientation in arb_orientation(),
    ) {
        let mut board = fleet_board();
        let before = snapshot(&board);
        if board.place_ship(Ship::new(length), origin, orientation).is_err() {
            prop_assert_eq!(snapshot(&board), before);
        }
    }

    /// Repeat attacks on any cell are idempotent: the second resolution reports
    /// `AlreadyResolved` and changes nothing.
    #[test]
    fn repeat_attack_is_idempotent(coord in arb_coordinate()) {
        let mut board = fleet_board();
        let first = board.receive_attack(coord).unwrap();
        prop_assert!(!first.already_resolved());

        let hits_after_first: Vec<usize> =
            board.iter_ships().map(|(_, ship)| ship.hits()).collect();
        let misses_after_first = board.missed_shots().len();

        let second = board.receive_attack(coord).unwrap();
        prop_assert_eq!(second, AttackOutcome::AlreadyResolved);
        let hits_after_second: Vec<usize> =
            board.iter_ships().map(|(_, ship)| ship.hits()).collect();
        prop_assert_eq!(hits_after_second, hits_after_first);
        prop_assert_eq!(board.missed_shots().len(), misses_after_first);
    }

    /// For any ordering of attacks across the whole grid, each ship sinks exactly when
    /// its last cell is hit, and the board reports defeat exactly when the last ship
    /// sinks.
    #[test]
    fn sunk_exactly_at_full_damage_in_any_order(
        order in Just((0..BOARD_SIZE * BOARD_SIZE).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut board = fleet_board();
        let total_ship_cells: usize = FLEET.iter().sum();
        let mut hits_seen = 0;

        for idx in order {
            let coord = Coordinate::new(idx / BOARD_SIZE, idx % BOARD_SIZE);
            let outcome = board.receive_attack(coord).unwrap();
            if outcome.was_hit() {
                hits_seen += 1;
                let ship = board.ship(outcome.ship().unwrap());
                // Sunk is reported exactly when the hit counter reaches the length.
                prop_assert_eq!(
                    matches!(outcome, AttackOutcome::Sunk(_)),
                    ship.is_sunk()
                );
                prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.length());
            }
            prop_assert_eq!(board.all_ships_sunk(), hits_seen == total_ship_cells);
        }
        prop_assert_eq!(hits_seen, total_ship_cells);
        prop_assert!(board.all_ships_sunk());
    }
}
