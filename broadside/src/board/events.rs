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
//! Change events raised by a [`GameBoard`][crate::GameBoard].

use std::fmt;

use crate::{board::Coordinate, ship::ShipId};

/// Whether an attack struck a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackResult {
    Hit,
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        self == AttackResult::Hit
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            AttackResult::Hit => "hit",
            AttackResult::Miss => "miss",
        })
    }
}

/// Outcome of a successful attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttackOutcome {
    /// The attacked cell.
    pub at: Coordinate,
    pub result: AttackResult,
    /// The ship that was hit, if any.
    pub ship: Option<ShipId>,
    /// True if this attack sank `ship`.
    pub sunk: bool,
}

/// A single change to a board. Multi-cell changes raise one event per cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoardEvent {
    /// `ship` now occupies `at`.
    Placed { at: Coordinate, ship: ShipId },
    /// `ship` no longer occupies `at`.
    Removed { at: Coordinate, ship: ShipId },
    /// `at` was attacked.
    ReceivedAttack {
        at: Coordinate,
        ship: Option<ShipId>,
        result: AttackResult,
    },
}

impl BoardEvent {
    /// The cell this event concerns.
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            BoardEvent::Placed { at, .. }
            | BoardEvent::Removed { at, .. }
            | BoardEvent::ReceivedAttack { at, .. } => at,
        }
    }

    /// The ship involved, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            BoardEvent::Placed { ship, .. } | BoardEvent::Removed { ship, .. } => Some(ship),
            BoardEvent::ReceivedAttack { ship, .. } => ship,
        }
    }

    /// The attack result, for attack events.
    pub fn result(&self) -> Option<AttackResult> {
        match *self {
            BoardEvent::ReceivedAttack { result, .. } => Some(result),
            _ => None,
        }
    }
}
