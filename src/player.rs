//! Player identity and the player aggregate.

use crate::board::Board;

/// Identity of one of the two players. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Index of this player in per-match storage.
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<PlayerId> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> PlayerId {
        if rng.gen() {
            PlayerId::P1
        } else {
            PlayerId::P2
        }
    }
}

/// Pairs a player's identity with the board, and through it the ships, that player
/// owns. A pure aggregate with no behavior of its own; the match and the view query
/// its parts.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    board: Board,
}

impl Player {
    /// Create a player with the given identity and an empty board.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            board: Board::new(),
        }
    }

    /// This player's identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// This player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for the match that owns this player.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
