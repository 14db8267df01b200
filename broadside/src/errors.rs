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
//! Errors that cross module boundaries.
//!
//! Board and ship operations return their own error types ([`PlaceError`],
//! [`AttackError`], [`RotateError`]). Player and match operations can fail in several of
//! those ways at once and return [`GameError`].

use thiserror::Error;

use crate::{
    board::{AttackError, PlaceError},
    game::FlowError,
    ship::{RotateError, ShipId},
};

/// Error returned when a player is asked to handle a ship it does not own.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship {ship} does not belong to this player")]
pub struct OwnershipError {
    ship: ShipId,
}

impl OwnershipError {
    pub(crate) fn new(ship: ShipId) -> Self {
        Self { ship }
    }

    /// The ship that was not recognized.
    pub fn ship(&self) -> ShipId {
        self.ship
    }
}

/// Reason a [`PlayerConfig`][crate::PlayerConfig] was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// A board side is 0 or too large to address.
    #[error("invalid board size {width}x{height}")]
    InvalidBoardSize { width: usize, height: usize },

    /// A ship length was 0 or too large to address.
    #[error("invalid ship length {length}")]
    InvalidShipLength { length: usize },

    /// A ship is longer than both sides of the board.
    #[error("a ship of length {length} does not fit on a {width}x{height} board")]
    ShipDoesNotFit {
        length: usize,
        width: usize,
        height: usize,
    },
}

/// Any failure of a player or match operation.
#[derive(Debug, Error)]
pub enum GameError {
    /// The placement is out of bounds or overlaps another ship.
    #[error(transparent)]
    IllegalPlacement(#[from] PlaceError<ShipId>),

    /// The target cell cannot be attacked.
    #[error(transparent)]
    IllegalAttack(#[from] AttackError),

    /// The ship belongs to someone else.
    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    /// The ship cannot be rotated while placed.
    #[error(transparent)]
    InvalidOperation(#[from] RotateError),

    /// A placement strategy found no legal position left for a ship.
    #[error("no legal position remains for ship {0}")]
    PlacementExhausted(ShipId),

    /// The request does not fit the current phase of the match.
    #[error(transparent)]
    Flow(#[from] FlowError),
}
