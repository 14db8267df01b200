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
//! Change events raised by a [`Player`][crate::Player].

use crate::{
    board::{AttackResult, BoardEvent, Coordinate},
    player::PlayerId,
    ship::ShipId,
};

/// Kind of change an event describes, independent of its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// A ship now occupies a cell.
    Place,
    /// A ship no longer occupies a cell.
    Remove,
    /// The sender attacked its opponent.
    Attack,
    /// The sender's board was attacked.
    ReceiveAttack,
    /// The sender's name changed.
    Name,
    /// The sender's opponent changed.
    Opponent,
}

/// A change observed at the player level. Every variant carries the `sender`, the player
/// that raised it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlayerEvent {
    /// An event from the sender's own board, re-broadcast with attribution.
    Board { sender: PlayerId, event: BoardEvent },
    /// The sender attacked its opponent's board.
    Attack {
        sender: PlayerId,
        at: Coordinate,
        ship: Option<ShipId>,
        result: AttackResult,
    },
    NameChanged { sender: PlayerId, name: String },
    OpponentChanged {
        sender: PlayerId,
        opponent: Option<PlayerId>,
    },
}

impl PlayerEvent {
    pub fn sender(&self) -> PlayerId {
        match *self {
            PlayerEvent::Board { sender, .. }
            | PlayerEvent::Attack { sender, .. }
            | PlayerEvent::NameChanged { sender, .. }
            | PlayerEvent::OpponentChanged { sender, .. } => sender,
        }
    }

    pub fn action(&self) -> Action {
        match self {
            PlayerEvent::Board { event, .. } => match event {
                BoardEvent::Placed { .. } => Action::Place,
                BoardEvent::Removed { .. } => Action::Remove,
                BoardEvent::ReceivedAttack { .. } => Action::ReceiveAttack,
            },
            PlayerEvent::Attack { .. } => Action::Attack,
            PlayerEvent::NameChanged { .. } => Action::Name,
            PlayerEvent::OpponentChanged { .. } => Action::Opponent,
        }
    }

    /// The cell concerned, for placement and attack events.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            PlayerEvent::Board { event, .. } => Some(event.coordinate()),
            PlayerEvent::Attack { at, .. } => Some(*at),
            _ => None,
        }
    }

    /// The ship involved, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            PlayerEvent::Board { event, .. } => event.ship(),
            PlayerEvent::Attack { ship, .. } => *ship,
            _ => None,
        }
    }

    /// Hit or miss, for attack events.
    pub fn result(&self) -> Option<AttackResult> {
        match self {
            PlayerEvent::Board { event, .. } => event.result(),
            PlayerEvent::Attack { result, .. } => Some(*result),
            _ => None,
        }
    }
}
