//! Defines the cell grid and the tagged cell states shared by the board's placement
//! and attack paths.

use std::ops::{Index, IndexMut};

use crate::board::Coordinate;
use crate::BOARD_SIZE;

/// Stable handle to a ship owned by a [`Board`][crate::board::Board]. Handles are only
/// meaningful on the board that issued them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipId(pub(super) usize);

/// The state of a single cell in a player's grid.
///
/// Legal transitions are `Empty -> Occupied -> Hit` and `Empty -> Miss`. Once a cell is
/// `Hit` or `Miss` it never changes again for the rest of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// No ship, never attacked.
    Empty,
    /// Part of the given ship, not yet hit at this cell.
    Occupied(ShipId),
    /// Part of the given ship, hit here.
    Hit(ShipId),
    /// Attacked, nothing there.
    Miss,
}

impl Cell {
    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(*id),
            Cell::Empty | Cell::Miss => None,
        }
    }

    /// Whether an attack has already been resolved on this cell.
    pub fn resolved(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }
}

/// The 10x10 grid of cell states backing a board.
#[derive(Debug)]
pub(super) struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE).map(|_| Cell::Empty).collect();
        Self { cells }
    }

    /// Convert a coordinate to a linear index. Returns `None` if the coordinate is out
    /// of bounds.
    fn try_linearize(coord: Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.row * BOARD_SIZE + coord.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&Cell> {
        Self::try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        Self::try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
