//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;
use crate::ship::{Orientation, Ship};

/// Reason why a ship could not be placed at the requested position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would fall outside the grid.
    #[error("part of the ship falls outside the grid")]
    OutOfBounds,
    /// One or more of the requested cells is already occupied by another ship.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position. The board is
/// guaranteed unchanged, and the unplaced ship is carried inside the error so the
/// caller can retry with new input.
#[derive(Error)]
#[error("could not place ship at {origin:?} {orientation:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlaceError {
    /// Construct a placement error from a reason and the attempted placement.
    pub(super) fn new(
        reason: CannotPlaceReason,
        ship: Ship,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Self {
        Self {
            reason,
            ship,
            origin,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the origin where placement was attempted.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Get the orientation of the attempted placement.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the unplaced ship from this error for a retry.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when an attack targets a coordinate outside the 10x10 grid. The
/// board is unchanged.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord:?} is out of bounds")]
pub struct OutOfRangeError {
    /// The coordinate that was out of range.
    coord: Coordinate,
}

impl OutOfRangeError {
    /// Construct an [`OutOfRangeError`] for the given coordinate.
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// Get the coordinate that was out of range.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
