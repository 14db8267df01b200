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
use log::info;

use crate::{
    board::{AttackOutcome, Coordinate},
    config::PlayerConfig,
    errors::{ConfigError, GameError},
    game::flow::{transition, FlowError, Phase, Step},
    player::{Player, PlayerId},
};

/// A match between two players. Owns both players, keeps them paired, and enforces turn
/// order.
#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    phase: Phase,
}

impl Match {
    /// Build both players and make them each other's opponent.
    pub fn new(first: PlayerConfig, second: PlayerConfig) -> Result<Self, ConfigError> {
        let mut first = Player::try_new(first)?;
        let mut second = Player::try_new(second)?;
        Player::pair(&mut first, &mut second);
        Ok(Self {
            players: [first, second],
            phase: Phase::Setup,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Both players, in the order they were configured.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Mutable access to a player, for placing ships and changing its name.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    pub fn opponent_of(&self, id: PlayerId) -> Option<&Player> {
        let idx = self.index_of(id).ok()?;
        Some(&self.players[1 - idx])
    }

    /// Run every player's placement strategy. Players without one are left alone.
    pub fn auto_place(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(FlowError::NotInSetup.into());
        }
        for player in self.players.iter_mut() {
            player.auto_place_ships()?;
        }
        Ok(())
    }

    /// Returns true if both players have placed all their ships.
    pub fn is_ready(&self) -> bool {
        self.players.iter().all(Player::are_all_ships_placed)
    }

    /// End setup and hand the first turn to `first`.
    pub fn begin_battle(&mut self, first: PlayerId) -> Result<(), GameError> {
        self.index_of(first)?;
        let next = transition(self.phase, Step::BeginBattle { first })?;
        if !self.is_ready() {
            return Err(FlowError::NotReady.into());
        }
        info!("battle begins, {} attacks first", first);
        self.phase = next;
        Ok(())
    }

    /// Returns true if it is `attacker`'s turn and `at` can be attacked on the opponent's
    /// board.
    pub fn can_attack(&self, attacker: PlayerId, at: Coordinate) -> bool {
        if self.phase.current() != Some(attacker) {
            return false;
        }
        match self.index_of(attacker) {
            Ok(idx) => self.players[idx].can_attack(&self.players[1 - idx], at),
            Err(_) => false,
        }
    }

    /// Attack `at` on behalf of `attacker` and pass the turn.
    pub fn attack(&mut self, attacker: PlayerId, at: Coordinate) -> Result<AttackOutcome, GameError> {
        let (player, opponent) = self.check_turn(attacker)?;
        let outcome = player.attack(opponent, at)?;
        self.finish_turn(attacker)?;
        Ok(outcome)
    }

    /// Let `attacker`'s strategy take its turn. Returns `Ok(None)` without passing the
    /// turn if the player has no attack strategy.
    pub fn auto_attack(&mut self, attacker: PlayerId) -> Result<Option<AttackOutcome>, GameError> {
        let (player, opponent) = self.check_turn(attacker)?;
        let outcome = match player.auto_attack(opponent)? {
            Some(outcome) => outcome,
            None => return Ok(None),
        };
        self.finish_turn(attacker)?;
        Ok(Some(outcome))
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.phase.winner()
    }

    /// Returns true if the match is over and `id` won it.
    pub fn wins(&self, id: PlayerId) -> bool {
        self.winner() == Some(id)
    }

    fn index_of(&self, id: PlayerId) -> Result<usize, FlowError> {
        self.players
            .iter()
            .position(|player| player.id() == id)
            .ok_or(FlowError::UnknownPlayer(id))
    }

    /// Split the players into `id` and its opponent.
    fn pair_mut(&mut self, id: PlayerId) -> Result<(&mut Player, &mut Player), FlowError> {
        let idx = self.index_of(id)?;
        let [first, second] = &mut self.players;
        Ok(if idx == 0 {
            (first, second)
        } else {
            (second, first)
        })
    }

    /// Check that `attacker` may attack now, without changing the phase.
    fn check_turn(&mut self, attacker: PlayerId) -> Result<(&mut Player, &mut Player), GameError> {
        let phase = self.phase;
        let (player, opponent) = self.pair_mut(attacker)?;
        transition(
            phase,
            Step::Attacked {
                attacker,
                defender: opponent.id(),
                defender_defeated: false,
            },
        )?;
        Ok((player, opponent))
    }

    fn finish_turn(&mut self, attacker: PlayerId) -> Result<(), GameError> {
        let (player, opponent) = self.pair_mut(attacker)?;
        let step = Step::Attacked {
            attacker,
            defender: opponent.id(),
            defender_defeated: player.wins(opponent),
        };
        self.phase = transition(self.phase, step)?;
        if let Phase::GameOver { winner } = self.phase {
            info!("{} wins", winner);
        }
        Ok(())
    }
}
