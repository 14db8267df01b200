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
//! Rules engine for two-player Battleship.
//!
//! The crate is organised leaf to root:
//!
//! - [`observable`] is the synchronous publish/subscribe channel every stateful type uses
//!   to announce changes.
//! - [`ship`] holds a single ship: its length, hits, orientation and anchor cell.
//! - [`board`] provides [`GameBoard`], which owns placed ships and the attack history and
//!   enforces placement and attack legality.
//! - [`player`] wraps a board with a roster of ships still to place, an opponent link and
//!   optional strategies, and re-broadcasts board events with attribution.
//! - [`strategy`] defines the [`PlacementAi`] and [`AttackAi`] capabilities and a few
//!   implementations.
//! - [`game`] owns both players of a match and sequences turns through a pure
//!   transition function.

pub mod board;
pub mod config;
pub mod errors;
pub mod game;
pub mod observable;
pub mod player;
pub mod ship;
pub mod strategy;

pub use crate::{
    board::{
        AttackError, AttackOutcome, AttackResult, BoardEvent, CannotAttackReason,
        CannotPlaceReason, Coordinate, Dimensions, GameBoard, PlaceError,
    },
    config::{PlayerConfig, STANDARD_BOARD_HEIGHT, STANDARD_BOARD_WIDTH, STANDARD_SHIP_LENGTHS},
    errors::{ConfigError, GameError, OwnershipError},
    game::{transition, FlowError, Match, Phase, Step},
    observable::{Observable, Subscription},
    player::{Action, Player, PlayerEvent, PlayerId},
    ship::{Orientation, ParseOrientationError, RotateError, Ship, ShipId},
    strategy::{AttackAi, PlacementAi, PredeterminedPlacementAi},
};

#[cfg(feature = "rng_gen")]
pub use crate::strategy::{RandomAttackAi, RandomPlacementAi};
