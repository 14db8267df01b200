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
//! Construction parameters for a [`Player`][crate::Player].

use std::{convert::TryFrom, fmt};

use crate::{
    board::Dimensions,
    errors::ConfigError,
    strategy::{AttackAi, PlacementAi},
};

pub const STANDARD_BOARD_WIDTH: usize = 10;
pub const STANDARD_BOARD_HEIGHT: usize = 10;
/// Carrier, battleship, cruiser, submarine, destroyer.
pub const STANDARD_SHIP_LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];

/// Everything needed to build a [`Player`][crate::Player]. The opponent is not part of
/// the configuration; [`Match`][crate::Match] pairs the two players it builds.
pub struct PlayerConfig {
    pub name: String,
    pub placement_ai: Option<Box<dyn PlacementAi>>,
    pub attack_ai: Option<Box<dyn AttackAi>>,
    pub board_width: usize,
    pub board_height: usize,
    /// Lengths of the ships to place. Order breaks ties between equal lengths.
    pub ship_lengths: Vec<usize>,
}

impl PlayerConfig {
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_ship_lengths<I: IntoIterator<Item = usize>>(mut self, lengths: I) -> Self {
        self.ship_lengths = lengths.into_iter().collect();
        self
    }

    pub fn with_placement_ai<A: PlacementAi + 'static>(mut self, ai: A) -> Self {
        self.placement_ai = Some(Box::new(ai));
        self
    }

    pub fn with_attack_ai<A: AttackAi + 'static>(mut self, ai: A) -> Self {
        self.attack_ai = Some(Box::new(ai));
        self
    }

    /// Check the board size and ship lengths, returning the board dimensions.
    pub(crate) fn validate(&self) -> Result<Dimensions, ConfigError> {
        let dim = Dimensions::try_new(self.board_width, self.board_height).ok_or(
            ConfigError::InvalidBoardSize {
                width: self.board_width,
                height: self.board_height,
            },
        )?;
        for &length in &self.ship_lengths {
            if length == 0 || i32::try_from(length).is_err() {
                return Err(ConfigError::InvalidShipLength { length });
            }
            if length > dim.width() && length > dim.height() {
                return Err(ConfigError::ShipDoesNotFit {
                    length,
                    width: dim.width(),
                    height: dim.height(),
                });
            }
        }
        Ok(dim)
    }
}

impl Default for PlayerConfig {
    /// A human player named "Player" with the standard 10x10 board and five ships.
    fn default() -> Self {
        Self {
            name: "Player".to_owned(),
            placement_ai: None,
            attack_ai: None,
            board_width: STANDARD_BOARD_WIDTH,
            board_height: STANDARD_BOARD_HEIGHT,
            ship_lengths: STANDARD_SHIP_LENGTHS.to_vec(),
        }
    }
}

impl fmt::Debug for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PlayerConfig")
            .field("name", &self.name)
            .field("placement_ai", &self.placement_ai.is_some())
            .field("attack_ai", &self.attack_ai.is_some())
            .field("board_width", &self.board_width)
            .field("board_height", &self.board_height)
            .field("ship_lengths", &self.ship_lengths)
            .finish()
    }
}
