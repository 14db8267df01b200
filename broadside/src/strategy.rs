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
//! Pluggable decision making for computer players.
//!
//! A [`PlacementAi`] puts every ship still in a player's roster onto its board, and an
//! [`AttackAi`] picks a cell on the opponent's board and fires at it. Both drive the
//! player through its public placement and attack operations, so they can only make
//! legal moves.

use crate::{
    board::{AttackError, AttackOutcome, Coordinate},
    errors::GameError,
    player::Player,
    ship::Orientation,
};

#[cfg(feature = "rng_gen")]
pub use self::random::{RandomAttackAi, RandomPlacementAi};

#[cfg(feature = "rng_gen")]
mod random;

/// Strategy for placing a player's ships.
pub trait PlacementAi {
    /// Place every ship in `player`'s roster.
    fn place_all_ships(&mut self, player: &mut Player) -> Result<(), GameError>;
}

/// Strategy for choosing where to attack.
pub trait AttackAi {
    /// Attack an unattacked cell of `opponent`'s board on behalf of `player`.
    fn attack_as(
        &mut self,
        player: &mut Player,
        opponent: &mut Player,
    ) -> Result<AttackOutcome, AttackError>;
}

impl<T: PlacementAi + ?Sized> PlacementAi for Box<T> {
    fn place_all_ships(&mut self, player: &mut Player) -> Result<(), GameError> {
        (**self).place_all_ships(player)
    }
}

impl<T: AttackAi + ?Sized> AttackAi for Box<T> {
    fn attack_as(
        &mut self,
        player: &mut Player,
        opponent: &mut Player,
    ) -> Result<AttackOutcome, AttackError> {
        (**self).attack_as(player, opponent)
    }
}

/// Fixed layout for the standard fleet, applied to the roster longest first.
const PREDETERMINED: [(i32, i32, Orientation); 5] = [
    (2, 3, Orientation::Vertical),
    (5, 5, Orientation::Horizontal),
    (1, 1, Orientation::Horizontal),
    (4, 8, Orientation::Horizontal),
    (4, 2, Orientation::Vertical),
];

/// Places up to five ships in a fixed, non-overlapping layout. Requires a board of at
/// least 10x10 and ships no longer than the standard fleet.
#[derive(Debug, Default, Copy, Clone)]
pub struct PredeterminedPlacementAi;

impl PredeterminedPlacementAi {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementAi for PredeterminedPlacementAi {
    fn place_all_ships(&mut self, player: &mut Player) -> Result<(), GameError> {
        let ships = player.ship_ids_to_place();
        if let Some(&extra) = ships.get(PREDETERMINED.len()) {
            return Err(GameError::PlacementExhausted(extra));
        }
        for (id, &(x, y, orientation)) in ships.into_iter().zip(PREDETERMINED.iter()) {
            player.place(id, Coordinate::new(x, y), Some(orientation))?;
        }
        Ok(())
    }
}
