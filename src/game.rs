//! The match state machine: fleet placement, combat turn resolution, and win
//! detection.

use log::{debug, info};

use crate::board::{AttackOutcome, Coordinate, OutOfRangeError, PlaceError, ShipId};
use crate::player::{Player, PlayerId};
use crate::ship::{Orientation, Ship};
use crate::view::View;

/// Lengths of the ships each player places, in placement order.
pub const FLEET: [usize; 5] = [2, 3, 3, 4, 5];

/// Phase of a match.
///
/// A match moves `Placement(P1) -> Placement(P2) -> Combat -> Finished`. `Finished` is
/// terminal and irreversible; once reached, no further turn changes occur.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The given player is placing their fleet.
    Placement(PlayerId),
    /// The given player is selecting a target on the opponent's board.
    Combat(PlayerId),
    /// The match is over and the given player has won.
    Finished(PlayerId),
}

/// Orchestrates two players through placement, alternating combat turns, and the win
/// condition.
///
/// The match can be driven two ways: directly through [`Match::place_ship`] and
/// [`Match::fire`] by a host with its own event loop, or to completion through
/// [`Match::run`] with a [`View`] supplying inputs.
#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    /// Number of fleet ships each player has placed.
    placed: [usize; 2],
    phase: Phase,
}

impl Match {
    /// Create a match with two empty boards, starting in `Placement(P1)`.
    pub fn new() -> Self {
        Self {
            players: [Player::new(PlayerId::P1), Player::new(PlayerId::P2)],
            placed: [0, 0],
            phase: Phase::Placement(PlayerId::P1),
        }
    }

    /// The current phase of the match.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player currently acting: the placing player, the attacker, or the winner
    /// once the match is finished.
    pub fn current_player(&self) -> PlayerId {
        match self.phase {
            Phase::Placement(p) | Phase::Combat(p) | Phase::Finished(p) => p,
        }
    }

    /// The winner, if the match has finished.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished(p) => Some(p),
            _ => None,
        }
    }

    /// Get the player with the specified ID.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Number of fleet ships the given player has placed so far.
    pub fn placed_count(&self, player: PlayerId) -> usize {
        self.placed[player.index()]
    }

    /// Lengths of the fleet ships the given player has yet to place, in placement
    /// order.
    pub fn pending_lengths(&self, player: PlayerId) -> &'static [usize] {
        &FLEET[self.placed[player.index()]..]
    }

    /// Length of the ship the placing player must place next. `None` outside the
    /// placement phase.
    pub fn pending_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Placement(p) => FLEET.get(self.placed[p.index()]).copied(),
            _ => None,
        }
    }

    /// Place the next fleet ship for the player currently placing.
    ///
    /// Fleet ships are placed in increasing fleet order. Once the player's fifth ship
    /// is placed the phase advances: to the other player's placement, or to combat
    /// with `P1` to act once both fleets are down.
    ///
    /// # Errors
    /// Fails with [`PlaceError`] if the placement is out of bounds or overlaps another
    /// ship. The board is unchanged and the same ship length is re-prompted; placement
    /// failures are never fatal.
    ///
    /// # Panics
    /// Panics if the match is not in the placement phase.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlaceError> {
        let player = match self.phase {
            Phase::Placement(p) => p,
            phase => panic!("place_ship called outside the placement phase: {:?}", phase),
        };
        let idx = player.index();
        let ship = Ship::new(FLEET[self.placed[idx]]);
        let id = self.players[idx].board_mut().place_ship(ship, origin, orientation)?;
        self.placed[idx] += 1;
        debug!(
            "{:?} placed fleet ship {} of {}",
            player,
            self.placed[idx],
            FLEET.len()
        );
        if self.placed[idx] == FLEET.len() {
            self.phase = match player {
                PlayerId::P1 => Phase::Placement(PlayerId::P2),
                PlayerId::P2 => Phase::Combat(PlayerId::P1),
            };
            info!("{:?} fleet complete, phase is now {:?}", player, self.phase);
        }
        Ok(id)
    }

    /// Resolve an attack by the current player at `coord` on the opponent's board.
    ///
    /// An already-resolved cell is a no-op retry: nothing changes and the turn does
    /// not advance. A hit retains the turn whether or not it sinks the ship; a miss
    /// passes the turn to the opponent. After the attack resolves, if every opponent
    /// ship is sunk the match finishes with the attacker as winner, overriding any
    /// pending turn change.
    ///
    /// # Errors
    /// Fails with [`OutOfRangeError`] if `coord` falls outside the grid; board state
    /// and turn are unchanged.
    ///
    /// # Panics
    /// Panics if the match is not in the combat phase.
    pub fn fire(&mut self, coord: Coordinate) -> Result<AttackOutcome, OutOfRangeError> {
        let attacker = match self.phase {
            Phase::Combat(p) => p,
            phase => panic!("fire called outside the combat phase: {:?}", phase),
        };
        let defender = attacker.opponent();
        let outcome = self.players[defender.index()].board_mut().receive_attack(coord)?;
        match outcome {
            AttackOutcome::Miss => self.phase = Phase::Combat(defender),
            AttackOutcome::AlreadyResolved | AttackOutcome::Hit(_) | AttackOutcome::Sunk(_) => {}
        }
        // The win check runs last and overrides any pending turn change.
        if self.players[defender.index()].board().all_ships_sunk() {
            self.phase = Phase::Finished(attacker);
            info!("{:?} wins", attacker);
        }
        Ok(outcome)
    }

    /// Drive the match to completion through the given view, returning the winner.
    ///
    /// Placement prompts are repeated until each placement succeeds; target prompts
    /// are repeated while selections are out of range or already resolved. Blocks in
    /// the view's request methods whenever the match is waiting for input.
    pub fn run(&mut self, view: &mut impl View) -> PlayerId {
        loop {
            match self.phase {
                Phase::Placement(player) => {
                    let length = FLEET[self.placed[player.index()]];
                    let (origin, orientation) = view.request_placement(player, length);
                    match self.place_ship(origin, orientation) {
                        Ok(id) => {
                            view.placement_accepted(
                                player,
                                self.player(player).board().ship(id).positions(),
                            );
                            let next = self.current_player();
                            if next != player {
                                view.turn_advanced(next);
                            }
                        }
                        Err(err) => view.placement_rejected(player, &err),
                    }
                }
                Phase::Combat(player) => {
                    let coord = view.request_target(player);
                    match self.fire(coord) {
                        Ok(outcome) => {
                            view.attack_resolved(player, coord, outcome);
                            match self.phase {
                                Phase::Finished(winner) => view.match_finished(winner),
                                Phase::Combat(next) if next != player => {
                                    view.turn_advanced(next)
                                }
                                _ => {}
                            }
                        }
                        Err(err) => {
                            // An out-of-range selection costs nothing; re-prompt.
                            debug!("rejected target from {:?}: {}", player, err);
                        }
                    }
                }
                Phase::Finished(winner) => return winner,
            }
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
