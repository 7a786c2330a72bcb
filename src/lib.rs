//! Rules engine for the classic two-player naval combat game.
//!
//! This crate implements the game-state model only: ship placement validation, attack
//! resolution, and win detection. Everything a player sees or clicks is the host's
//! problem; the engine produces prompts and structured outcomes and the host renders
//! them however it likes.
//!
//! The pieces, leaves first:
//!
//! - [`Ship`]: a sunk-tracking counter for one vessel of fixed length.
//! - [`Board`]: a 10x10 grid owning placed ships and recording attack outcomes.
//! - [`Player`]: pairs an identity with the board (and ships) it owns.
//! - [`Match`]: orchestrates two players, turn order, and the win condition.
//!
//! A host can drive the [`Match`] state machine directly through [`Match::place_ship`]
//! and [`Match::fire`], or implement [`View`] and let [`Match::run`] drive a whole
//! match to completion. The engine is synchronous throughout: `run` blocks on the
//! view's request methods until input arrives.

pub use crate::{
    board::{
        AttackOutcome, Board, CannotPlaceReason, Cell, Coordinate, OutOfRangeError, PlaceError,
        ShipId,
    },
    game::{Match, Phase, FLEET},
    player::{Player, PlayerId},
    ship::{Orientation, OverHitError, Ship},
    view::View,
};

pub mod board;
pub mod game;
pub mod player;
pub mod ship;
pub mod view;

/// Width and height of every board. All coordinates are in range `[0, BOARD_SIZE)` on
/// both axes.
pub const BOARD_SIZE: usize = 10;
