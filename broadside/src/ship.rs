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
//! A single ship: its length, damage, orientation and anchor cell.

use std::{
    convert::TryFrom,
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use thiserror::Error;

use crate::board::Coordinate;

/// Source of process-unique ship ids.
static NEXT_SHIP_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Ship`]. Every ship constructed gets a fresh id, so an id names exactly
/// one ship across every board and player in the process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(u64);

impl ShipId {
    fn next() -> Self {
        ShipId(NEXT_SHIP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends along `+x`.
    Horizontal,
    /// Extends along `+y`.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// Error returned when text does not name an [`Orientation`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unrecognized orientation {0:?}, expected \"horizontal\" or \"vertical\"")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parses the common spellings, ignoring case: `h`, `horz`, `horizontal`, `v`,
    /// `vert`, `vertical`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horz" | "horiz" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vert" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

/// Error returned when changing the orientation of a ship that is placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship {ship} cannot change orientation while it is placed")]
pub struct RotateError {
    ship: ShipId,
}

impl RotateError {
    pub(crate) fn new(ship: ShipId) -> Self {
        Self { ship }
    }

    /// The ship that refused to rotate.
    pub fn ship(&self) -> ShipId {
        self.ship
    }
}

/// A linear ship of fixed length.
///
/// Ships are deliberately not `Clone`: a [`ShipId`] always refers to one value, which is
/// moved between a player's roster and the board it is placed on.
#[derive(Debug, Eq, PartialEq)]
pub struct Ship {
    id: ShipId,
    length: usize,
    hit_count: usize,
    orientation: Orientation,
    /// Anchor cell, or `None` while the ship is not placed.
    position: Option<Coordinate>,
}

impl Ship {
    /// Construct an unplaced, horizontal ship of the given length.
    /// Panics if `length` is 0 or does not fit a [`Coordinate`] offset.
    pub fn new(length: usize) -> Self {
        match Self::try_new(length) {
            Some(ship) => ship,
            None => panic!("invalid ship length {}", length),
        }
    }

    /// Construct an unplaced, horizontal ship of the given length.
    /// Returns `None` if `length` is 0 or does not fit a [`Coordinate`] offset.
    pub fn try_new(length: usize) -> Option<Self> {
        if length == 0 || i32::try_from(length).is_err() {
            return None;
        }
        Some(Self {
            id: ShipId::next(),
            length,
            hit_count: 0,
            orientation: Orientation::default(),
            position: None,
        })
    }

    /// Get the id of this ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Get the length of this ship.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of hits taken so far. Never exceeds [`length`][Ship::length].
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Number of columns the ship spans in its current orientation.
    pub fn width(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.length,
            Orientation::Vertical => 1,
        }
    }

    /// Number of rows the ship spans in its current orientation.
    pub fn height(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => 1,
            Orientation::Vertical => self.length,
        }
    }

    /// Anchor cell of the ship, if placed.
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Record a hit. Hits past the ship's length are ignored.
    pub fn hit(&mut self) {
        if self.hit_count < self.length {
            self.hit_count += 1;
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }

    /// Toggle the orientation. Fails if the ship is placed.
    pub fn rotate(&mut self) -> Result<(), RotateError> {
        self.set_orientation(self.orientation.rotated())
    }

    /// Change the orientation. Fails if the ship is placed and the orientation would
    /// change.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), RotateError> {
        if orientation == self.orientation {
            Ok(())
        } else if self.is_placed() {
            Err(RotateError::new(self.id))
        } else {
            self.orientation = orientation;
            Ok(())
        }
    }

    /// Anchor the ship at `at`, replacing any previous placement. If `orientation` is
    /// given it replaces the current orientation, otherwise the current one is kept.
    ///
    /// This only updates the ship itself; use [`GameBoard::place`][crate::GameBoard::place]
    /// to put a ship on a board.
    pub fn place(&mut self, at: Coordinate, orientation: Option<Orientation>) {
        self.position = None;
        if let Some(orientation) = orientation {
            self.orientation = orientation;
        }
        self.position = Some(at);
    }

    /// Clear the placement, returning the previous anchor if there was one. The
    /// orientation is retained.
    pub fn remove(&mut self) -> Option<Coordinate> {
        self.position.take()
    }

    /// The cells the ship occupies, starting at the anchor. Empty if not placed.
    pub fn placed_coordinates(&self) -> Vec<Coordinate> {
        match self.position {
            Some(at) => self.placed_coordinates_from(at, None),
            None => Vec::new(),
        }
    }

    /// The cells the ship would occupy if anchored at `at`. Uses the current orientation
    /// unless one is given.
    pub fn placed_coordinates_from(
        &self,
        at: Coordinate,
        orientation: Option<Orientation>,
    ) -> Vec<Coordinate> {
        let orientation = orientation.unwrap_or(self.orientation);
        // Length fits an i32, checked on construction.
        (0..self.length as i32)
            .map(|offset| match orientation {
                Orientation::Horizontal => at.right(offset),
                Orientation::Vertical => at.down(offset),
            })
            .collect()
    }
}
