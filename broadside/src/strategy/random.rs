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
//! Strategies driven by an injected random number generator.

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{AttackError, AttackOutcome, CannotAttackReason, Coordinate, Dimensions},
    errors::GameError,
    player::Player,
    ship::{Orientation, ShipId},
    strategy::{AttackAi, PlacementAi},
};

/// Random rolls to try before enumerating every legal choice.
const RANDOM_TRIES: usize = 100;

static ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

/// Places each ship at a uniformly random legal anchor and orientation.
#[derive(Debug, Clone)]
pub struct RandomPlacementAi<R> {
    rng: R,
}

impl<R: Rng> RandomPlacementAi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Roll an orientation and an anchor that keeps a ship of `length` in bounds. Returns
    /// `None` if the ship cannot fit on the board in the rolled orientation.
    fn roll(&mut self, dim: &Dimensions, length: usize) -> Option<(Coordinate, Orientation)> {
        let orientation = if self.rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (width, height) = match orientation {
            Orientation::Horizontal => (length, 1),
            Orientation::Vertical => (1, length),
        };
        if width > dim.width() || height > dim.height() {
            return None;
        }
        let x = self.rng.gen_range(0, dim.width() - width + 1);
        let y = self.rng.gen_range(0, dim.height() - height + 1);
        // Board sides fit an i32.
        Some((Coordinate::new(x as i32, y as i32), orientation))
    }

    fn place_one(&mut self, player: &mut Player, id: ShipId) -> Result<(), GameError> {
        let length = match player.ship(id) {
            Some(ship) => ship.length(),
            None => return Err(GameError::PlacementExhausted(id)),
        };
        let dim = *player.board().dimensions();
        for _ in 0..RANDOM_TRIES {
            if let Some((at, orientation)) = self.roll(&dim, length) {
                if player.can_place(id, at, orientation) {
                    return player.place(id, at, Some(orientation));
                }
            }
        }
        trace!("falling back to enumerated placements for ship {}", id);
        let candidates: Vec<(Coordinate, Orientation)> = dim
            .iter_coordinates()
            .flatten()
            .flat_map(|at| ORIENTATIONS.iter().map(move |&orientation| (at, orientation)))
            .filter(|&(at, orientation)| player.can_place(id, at, orientation))
            .collect();
        match candidates.choose(&mut self.rng) {
            Some(&(at, orientation)) => player.place(id, at, Some(orientation)),
            None => Err(GameError::PlacementExhausted(id)),
        }
    }
}

impl<R: Rng + Default> Default for RandomPlacementAi<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Rng> PlacementAi for RandomPlacementAi<R> {
    fn place_all_ships(&mut self, player: &mut Player) -> Result<(), GameError> {
        for id in player.ship_ids_to_place() {
            self.place_one(player, id)?;
        }
        Ok(())
    }
}

/// Attacks a uniformly random cell that has not been attacked yet.
#[derive(Debug, Clone)]
pub struct RandomAttackAi<R> {
    rng: R,
}

impl<R: Rng> RandomAttackAi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Default> Default for RandomAttackAi<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Rng> AttackAi for RandomAttackAi<R> {
    fn attack_as(
        &mut self,
        player: &mut Player,
        opponent: &mut Player,
    ) -> Result<AttackOutcome, AttackError> {
        let nowhere = Coordinate::new(-1, -1);
        if !player.is_paired_with(opponent) {
            return Err(AttackError::new(CannotAttackReason::NoOpponent, nowhere));
        }
        let dim = *opponent.board().dimensions();
        for _ in 0..RANDOM_TRIES {
            let x = self.rng.gen_range(0, dim.width());
            let y = self.rng.gen_range(0, dim.height());
            let at = Coordinate::new(x as i32, y as i32);
            if player.can_attack(opponent, at) {
                return player.attack(opponent, at);
            }
        }
        trace!("falling back to enumerated targets");
        let candidates: Vec<Coordinate> = dim
            .iter_coordinates()
            .flatten()
            .filter(|&at| opponent.board().can_be_attacked(at))
            .collect();
        match candidates.choose(&mut self.rng) {
            Some(&at) => player.attack(opponent, at),
            None => Err(AttackError::new(CannotAttackReason::NoTargetsLeft, nowhere)),
        }
    }
}
