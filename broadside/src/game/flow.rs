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
use thiserror::Error;

use crate::player::PlayerId;

/// State of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Players are placing ships.
    Setup,
    /// Ships are placed and `current` is due to attack.
    Attack { current: PlayerId },
    /// Every ship of the loser is sunk.
    GameOver { winner: PlayerId },
}

impl Phase {
    /// The player whose turn it is, during the battle.
    pub fn current(&self) -> Option<PlayerId> {
        match *self {
            Phase::Attack { current } => Some(current),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match *self {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Setup
    }
}

/// Something that happened in a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Step {
    /// Setup finished and `first` attacks first.
    BeginBattle { first: PlayerId },
    /// `attacker` fired at `defender`. `defender_defeated` is true if that sank the
    /// defender's last ship.
    Attacked {
        attacker: PlayerId,
        defender: PlayerId,
        defender_defeated: bool,
    },
}

/// Reason a step is not allowed in the current phase.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FlowError {
    #[error("the battle has already begun")]
    NotInSetup,
    #[error("the battle has not begun")]
    NotInBattle,
    #[error("not every ship has been placed")]
    NotReady,
    #[error("it is not {0}'s turn")]
    OutOfTurn(PlayerId),
    #[error("the match is over")]
    GameOver,
    #[error("{0} is not part of this match")]
    UnknownPlayer(PlayerId),
}

/// Compute the phase that follows `phase` once `step` has happened.
///
/// Turns alternate after every attack, hit or miss.
pub fn transition(phase: Phase, step: Step) -> Result<Phase, FlowError> {
    match (phase, step) {
        (Phase::GameOver { .. }, _) => Err(FlowError::GameOver),
        (Phase::Setup, Step::BeginBattle { first }) => Ok(Phase::Attack { current: first }),
        (Phase::Setup, Step::Attacked { .. }) => Err(FlowError::NotInBattle),
        (Phase::Attack { .. }, Step::BeginBattle { .. }) => Err(FlowError::NotInSetup),
        (Phase::Attack { current }, Step::Attacked { attacker, .. }) if attacker != current => {
            Err(FlowError::OutOfTurn(attacker))
        }
        (
            Phase::Attack { .. },
            Step::Attacked {
                attacker,
                defender,
                defender_defeated,
            },
        ) => Ok(if defender_defeated {
            Phase::GameOver { winner: attacker }
        } else {
            Phase::Attack { current: defender }
        }),
    }
}
