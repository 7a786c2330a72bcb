//! Types that make up the game board.

use log::{debug, trace};

use crate::ship::{Orientation, Ship};
#[cfg(feature = "rng_gen")]
use crate::BOARD_SIZE;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, OutOfRangeError, PlaceError},
    grid::{Cell, ShipId},
};

mod coordinate;
mod errors;
mod grid;

/// Result of an attack on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The targeted cell had already been attacked. Nothing changed; repeat attacks
    /// are an idempotent no-op, not an error.
    AlreadyResolved,
    /// The attack did not hit anything.
    Miss,
    /// The attack hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The attack hit the ship with the given ID and sank it.
    Sunk(ShipId),
}

impl AttackOutcome {
    /// Whether the attack struck a ship.
    pub fn was_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit(_) | AttackOutcome::Sunk(_))
    }

    /// Get the id of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            AttackOutcome::Hit(id) | AttackOutcome::Sunk(id) => Some(*id),
            AttackOutcome::Miss | AttackOutcome::AlreadyResolved => None,
        }
    }

    /// Whether the targeted cell had already been attacked before this call.
    pub fn already_resolved(&self) -> bool {
        matches!(self, AttackOutcome::AlreadyResolved)
    }
}

/// Represents a single player's side of the ocean: a 10x10 grid of cells, the ships
/// placed on it, and the history of shots that missed.
#[derive(Debug)]
pub struct Board {
    /// Grid of cell states.
    grid: Grid,

    /// Ships placed on this board, indexed by [`ShipId`].
    ships: Vec<Ship>,

    /// Ordered history of attacks that missed, for display and replay.
    missed_shots: Vec<Coordinate>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
            missed_shots: Vec::new(),
        }
    }

    /// Attempt to place `ship` with its origin at `origin`, extending along
    /// `orientation`.
    ///
    /// Every cell the ship would occupy is validated in ship order (origin first); the
    /// first invalid cell aborts the whole placement with no cells written. On success
    /// all cells become occupied, the ship's positions are recorded in placement order,
    /// and the ship's handle on this board is returned.
    ///
    /// On failure the ship is returned inside the [`PlaceError`] so the caller can
    /// retry with new input; the board is guaranteed unchanged.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlaceError> {
        let length = ship.length();
        for i in 0..length {
            let coord = orientation.offset(origin, i);
            match self.grid.get(coord) {
                None => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::OutOfBounds,
                        ship,
                        origin,
                        orientation,
                    ));
                }
                Some(cell) if cell.ship().is_some() => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied,
                        ship,
                        origin,
                        orientation,
                    ));
                }
                Some(_) => {}
            }
        }
        // Already ensured that every position is in bounds and empty.
        let id = ShipId(self.ships.len());
        let positions: Vec<Coordinate> = (0..length).map(|i| orientation.offset(origin, i)).collect();
        for &coord in &positions {
            self.grid[coord] = Cell::Occupied(id);
            trace!("cell {:?} now occupied by {:?}", coord, id);
        }
        let mut ship = ship;
        ship.set_positions(positions);
        self.ships.push(ship);
        debug!(
            "placed ship {:?} of length {} at {:?} {:?}",
            id, length, origin, orientation
        );
        Ok(id)
    }

    /// Resolve an attack at `coord`.
    ///
    /// A cell that was already hit or missed is left untouched and reported as
    /// [`AttackOutcome::AlreadyResolved`]. An occupied cell transitions to hit and the
    /// ship takes exactly one hit, reported as [`AttackOutcome::Hit`] or
    /// [`AttackOutcome::Sunk`]. An empty cell transitions to miss and the coordinate is
    /// appended to the missed-shot history.
    ///
    /// # Errors
    /// Fails with [`OutOfRangeError`] if `coord` falls outside the grid; the board is
    /// unchanged.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, OutOfRangeError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(OutOfRangeError::new(coord)),
            Some(cell) => cell,
        };
        let outcome = match *cell {
            Cell::Hit(_) | Cell::Miss => AttackOutcome::AlreadyResolved,
            Cell::Occupied(id) => {
                *cell = Cell::Hit(id);
                trace!("cell {:?} transitions to hit", coord);
                let ship = &mut self.ships[id.0];
                // Each cell transitions to hit at most once, so the ship cannot be
                // over-hit here.
                ship.hit().unwrap();
                if ship.is_sunk() {
                    AttackOutcome::Sunk(id)
                } else {
                    AttackOutcome::Hit(id)
                }
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                trace!("cell {:?} transitions to miss", coord);
                self.missed_shots.push(coord);
                AttackOutcome::Miss
            }
        };
        debug!("attack at {:?}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Returns true if every ship on this board has been sunk. Recomputed on each call;
    /// vacuously true while no ships have been placed.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_sunk())
    }

    /// The state of the cell at the given coordinate. Returns `None` if the coordinate
    /// is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Get an iterator over the grid row by row, for rendering. The iterator's item is
    /// another iterator that iterates over a single row.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        let grid = &self.grid;
        (0..crate::BOARD_SIZE).map(move |row| {
            (0..crate::BOARD_SIZE).map(move |col| grid[Coordinate::new(row, col)])
        })
    }

    /// Get the ship with the given handle. Panics if the handle did not come from this
    /// board.
    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }

    /// Get an iterator over all ships on this board with their handles.
    pub fn iter_ships<'a>(&'a self) -> impl 'a + Iterator<Item = (ShipId, &'a Ship)> {
        self.ships.iter().enumerate().map(|(i, ship)| (ShipId(i), ship))
    }

    /// Ordered history of attacks on this board that missed.
    pub fn missed_shots(&self) -> &[Coordinate] {
        &self.missed_shots
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rng_gen")]
impl Board {
    /// Propose a random in-bounds, non-overlapping placement for a ship of `length`.
    ///
    /// Uses bounded rejection sampling; returns `None` if no clear position was found
    /// within the attempt budget, or if `length` cannot fit on the board at all.
    pub fn random_placement<R: rand::Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(Coordinate, Orientation)> {
        if length == 0 || length > BOARD_SIZE {
            return None;
        }
        for _ in 0..100 {
            let orientation: Orientation = rng.gen();
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
                Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
            };
            let origin = Coordinate::new(rng.gen_range(0, max_row + 1), rng.gen_range(0, max_col + 1));
            let clear = (0..length)
                .all(|i| self.cell(orientation.offset(origin, i)) == Some(Cell::Empty));
            if clear {
                return Some((origin, orientation));
            }
        }
        None
    }
}
