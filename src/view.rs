//! The boundary between the rules engine and its host.
//!
//! The engine stays synchronous and knows nothing about rendering or input capture.
//! While [`Match::run`][crate::game::Match::run] drives a match, it produces prompts
//! through the two `request_*` methods and blocks until the view supplies an answer;
//! a view backed by user interaction simply does not return until the user has acted.
//! The remaining methods are one-way notifications fired after each state change so
//! the view can render. All notifications default to no-ops.

use crate::board::{AttackOutcome, Coordinate, PlaceError};
use crate::player::PlayerId;
use crate::ship::Orientation;

/// Supplies inputs to, and receives state-change notifications from, a running match.
pub trait View {
    /// Ask where the given player wants to place their next fleet ship of
    /// `ship_length` cells. Blocks until the view supplies an origin and orientation.
    /// Called again with the same length if the placement is rejected.
    fn request_placement(&mut self, player: PlayerId, ship_length: usize)
        -> (Coordinate, Orientation);

    /// Ask which cell of the opponent's board the given player attacks next. Blocks
    /// until the view supplies a coordinate. Called again if the selection is out of
    /// range or targets an already-resolved cell.
    fn request_target(&mut self, player: PlayerId) -> Coordinate;

    /// The last requested placement was committed. `positions` are the cells the ship
    /// occupies, origin first.
    fn placement_accepted(&mut self, _player: PlayerId, _positions: &[Coordinate]) {}

    /// The last requested placement was rejected; the same ship will be re-prompted.
    fn placement_rejected(&mut self, _player: PlayerId, _error: &PlaceError) {}

    /// An attack by `attacker` was resolved on the opponent's board.
    fn attack_resolved(&mut self, _attacker: PlayerId, _coord: Coordinate, _outcome: AttackOutcome) {
    }

    /// The acting player changed, during placement or after a miss.
    fn turn_advanced(&mut self, _player: PlayerId) {}

    /// The match is over.
    fn match_finished(&mut self, _winner: PlayerId) {}
}
