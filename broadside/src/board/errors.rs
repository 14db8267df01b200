// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors used by the [`GameBoard`][crate::GameBoard].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ship::Orientation};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would lie outside the board.
    #[error("the ship does not fit on the board at that position")]
    OutOfBounds,
    /// One or more of the cells is occupied by another ship.
    #[error("the requested position overlaps another ship")]
    AlreadyOccupied,
    /// The ship to move is not on this board.
    #[error("the ship is not on this board")]
    NotOnBoard,
}

/// Error caused when attempting to place a ship in an invalid position.
///
/// `S` is whatever the caller handed over: the [`Ship`][crate::Ship] itself for a fresh
/// placement, so it can be recovered with [`into_ship`][PlaceError::into_ship], or its
/// [`ShipId`][crate::ShipId] when moving a ship already on the board.
#[derive(Error)]
#[error("could not place ship at {at} {orientation}: {reason}")]
pub struct PlaceError<S> {
    #[source]
    reason: CannotPlaceReason,
    at: Coordinate,
    orientation: Orientation,
    ship: S,
}

impl<S> Debug for PlaceError<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<S> PlaceError<S> {
    /// Construct a placement error from a reason, the attempted anchor and orientation,
    /// and the ship.
    pub(crate) fn new(
        reason: CannotPlaceReason,
        at: Coordinate,
        orientation: Orientation,
        ship: S,
    ) -> Self {
        Self {
            reason,
            at,
            orientation,
            ship,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the anchor where placement was attempted.
    pub fn at(&self) -> Coordinate {
        self.at
    }

    /// Get the orientation that was attempted.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &S {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> S {
        self.ship
    }

    /// Swap the carried ship for another value, keeping the rest of the error.
    pub fn map_ship<T, F: FnOnce(S) -> T>(self, f: F) -> PlaceError<T> {
        PlaceError {
            reason: self.reason,
            at: self.at,
            orientation: self.orientation,
            ship: f(self.ship),
        }
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAttackReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target is out of bounds")]
    OutOfBounds,

    /// An attack has already landed on that cell.
    #[error("the target was already attacked")]
    AlreadyAttacked,

    /// The attacker has no opponent, or the target is not its opponent.
    #[error("there is no opponent to attack")]
    NoOpponent,

    /// Every cell of the opponent's board has already been attacked.
    #[error("no cells are left to attack")]
    NoTargetsLeft,
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot attack {at}: {reason}")]
pub struct AttackError {
    /// Reason why the cell could not be attacked.
    reason: CannotAttackReason,

    /// The coordinates of the cell.
    at: Coordinate,
}

impl AttackError {
    /// Construct an attack error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotAttackReason, at: Coordinate) -> Self {
        Self { reason, at }
    }

    /// Get the reason the attack failed.
    pub fn reason(&self) -> CannotAttackReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn at(&self) -> Coordinate {
        self.at
    }
}
