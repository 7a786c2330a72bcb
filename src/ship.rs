//! Types used for defining ships and tracking their damage.

use thiserror::Error;

use crate::board::Coordinate;

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along a row, incrementing the column from its origin.
    Horizontal,
    /// The ship extends along a column, incrementing the row from its origin.
    Vertical,
}

impl Orientation {
    /// Step `i` cells along this orientation from `origin`.
    pub(crate) fn offset(self, origin: Coordinate, i: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
            Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Error returned when [`Ship::hit`] is called on a ship that is already sunk.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship is already sunk")]
pub struct OverHitError;

/// A single vessel of fixed length.
///
/// A ship is created unplaced, with an empty position list. Placing it on a [`Board`]
/// fills in its positions; after that it is only ever mutated through [`Ship::hit`],
/// exactly once per successful attack on one of its cells.
///
/// [`Board`]: crate::board::Board
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    length: usize,
    hits: usize,
    positions: Vec<Coordinate>,
}

impl Ship {
    /// Construct a ship with the specified length. Panics if `length` is 0.
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "ship length must be nonzero");
        Ship {
            length,
            hits: 0,
            positions: Vec::new(),
        }
    }

    /// The number of cells this ship occupies once placed.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The number of hits this ship has taken. Never exceeds [`Ship::length`].
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// The coordinates this ship occupies, in placement order (origin first). Empty
    /// until the ship has been placed on a board.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// True once every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    /// Record one hit on this ship. Invoked by the board exactly once per cell of the
    /// ship that is attacked. Fails if the ship is already sunk.
    pub fn hit(&mut self) -> Result<(), OverHitError> {
        if self.is_sunk() {
            return Err(OverHitError);
        }
        self.hits += 1;
        Ok(())
    }

    /// Record where this ship was placed. Only the owning board assigns positions.
    pub(crate) fn set_positions(&mut self, positions: Vec<Coordinate>) {
        debug_assert_eq!(positions.len(), self.length);
        self.positions = positions;
    }
}
