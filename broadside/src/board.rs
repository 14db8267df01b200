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
//! The game board: ship placement and attacks.

use log::{debug, info};

use crate::{
    observable::{Observable, Subscription},
    ship::{Orientation, Ship, ShipId},
};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{AttackError, CannotAttackReason, CannotPlaceReason, PlaceError},
    events::{AttackOutcome, AttackResult, BoardEvent},
};

mod coordinate;
mod dimensions;
mod errors;
mod events;
mod grid;

/// A single player's side of the ocean: a fixed-size grid, the ships placed on it and the
/// record of attacks it has received.
///
/// The board owns every ship placed on it. [`place`][GameBoard::place] takes the ship by
/// value and [`remove`][GameBoard::remove] hands it back, so a ship is on at most one board
/// at a time.
pub struct GameBoard {
    /// Occupancy and attack state per cell.
    grid: Grid,

    /// Placed ships, in the order they were added.
    ships: Vec<Ship>,

    /// Listeners for per-cell changes.
    events: Observable<BoardEvent>,
}

impl GameBoard {
    /// Construct an empty board. Panics if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_dimensions(Dimensions::new(width, height))
    }

    /// Construct an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            events: Observable::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`GameBoard`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    pub fn width(&self) -> usize {
        self.grid.dim.width()
    }

    pub fn height(&self) -> usize {
        self.grid.dim.height()
    }

    /// Ships currently placed, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the placed ship with the given id.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id() == id)
    }

    pub fn sunk_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| ship.is_sunk())
    }

    pub fn surviving_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.is_sunk())
    }

    /// Returns true if at least one ship is placed and every placed ship is sunk.
    pub fn are_all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn is_in_bounds(&self, at: Coordinate) -> bool {
        self.grid.dim.contains(&at)
    }

    /// Get the ship occupying `at`. Out-of-bounds cells have no ship.
    pub fn ship_at(&self, at: Coordinate) -> Option<&Ship> {
        self.grid
            .get(at)
            .and_then(|cell| cell.ship)
            .and_then(|id| self.ship(id))
    }

    pub fn has_ship_at(&self, at: Coordinate) -> bool {
        self.grid.get(at).map_or(false, |cell| cell.ship.is_some())
    }

    /// Returns true if `ship` could be anchored at `at` with the given orientation: the
    /// whole footprint is on the board and every cell is empty or already occupied by this
    /// same ship.
    pub fn can_place(&self, ship: &Ship, at: Coordinate, orientation: Orientation) -> bool {
        let footprint = ship.placed_coordinates_from(at, Some(orientation));
        self.check_placement(ship.id(), &footprint).is_ok()
    }

    pub fn can_place_horizontal(&self, ship: &Ship, at: Coordinate) -> bool {
        self.can_place(ship, at, Orientation::Horizontal)
    }

    pub fn can_place_vertical(&self, ship: &Ship, at: Coordinate) -> bool {
        self.can_place(ship, at, Orientation::Vertical)
    }

    /// Put a ship onto the board. On failure the ship is returned inside the error.
    ///
    /// Raises one [`BoardEvent::Placed`] per occupied cell.
    pub fn place(
        &mut self,
        mut ship: Ship,
        at: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, PlaceError<Ship>> {
        let id = ship.id();
        let footprint = ship.placed_coordinates_from(at, Some(orientation));
        if let Err(reason) = self.check_placement(id, &footprint) {
            return Err(PlaceError::new(reason, at, orientation, ship));
        }
        ship.place(at, Some(orientation));
        self.occupy(id, &footprint);
        self.ships.push(ship);
        debug!("placed ship {} at {} {}", id, at, orientation);
        for &cell in &footprint {
            self.events
                .notify_changed(&BoardEvent::Placed { at: cell, ship: id });
        }
        Ok(id)
    }

    /// Move a ship that is already on this board. The new footprint may overlap the ship's
    /// current cells. On failure the ship stays where it was.
    ///
    /// Raises [`BoardEvent::Removed`] for every vacated cell followed by
    /// [`BoardEvent::Placed`] for every newly occupied cell.
    pub fn move_ship(
        &mut self,
        id: ShipId,
        at: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError<ShipId>> {
        let idx = match self.index_of(id) {
            Some(idx) => idx,
            None => {
                return Err(PlaceError::new(
                    CannotPlaceReason::NotOnBoard,
                    at,
                    orientation,
                    id,
                ))
            }
        };
        let footprint = self.ships[idx].placed_coordinates_from(at, Some(orientation));
        if let Err(reason) = self.check_placement(id, &footprint) {
            return Err(PlaceError::new(reason, at, orientation, id));
        }
        let vacated = self.vacate(idx);
        self.occupy(id, &footprint);
        self.ships[idx].place(at, Some(orientation));
        debug!("moved ship {} to {} {}", id, at, orientation);
        for cell in vacated {
            self.events
                .notify_changed(&BoardEvent::Removed { at: cell, ship: id });
        }
        for &cell in &footprint {
            self.events
                .notify_changed(&BoardEvent::Placed { at: cell, ship: id });
        }
        Ok(())
    }

    /// Take a ship off the board, returning it unplaced. Returns `None` if the ship was not
    /// on this board.
    ///
    /// Raises one [`BoardEvent::Removed`] per vacated cell.
    pub fn remove(&mut self, id: ShipId) -> Option<Ship> {
        let idx = self.index_of(id)?;
        let vacated = self.vacate(idx);
        let mut ship = self.ships.remove(idx);
        ship.remove();
        debug!("removed ship {}", id);
        for cell in vacated {
            self.events
                .notify_changed(&BoardEvent::Removed { at: cell, ship: id });
        }
        Some(ship)
    }

    /// Returns true if `at` is on the board and has not been attacked yet.
    pub fn can_be_attacked(&self, at: Coordinate) -> bool {
        self.grid.get(at).map_or(false, |cell| !cell.attacked)
    }

    /// Returns true if `at` has been attacked. Out-of-bounds cells never have been.
    pub fn has_been_attacked(&self, at: Coordinate) -> bool {
        self.grid.get(at).map_or(false, |cell| cell.attacked)
    }

    /// Fire at `at`, hitting whatever ship occupies it.
    ///
    /// Raises one [`BoardEvent::ReceivedAttack`].
    pub fn receive_attack(&mut self, at: Coordinate) -> Result<AttackOutcome, AttackError> {
        let target = match self.grid.get_mut(at) {
            None => return Err(AttackError::new(CannotAttackReason::OutOfBounds, at)),
            Some(cell) if cell.attacked => {
                return Err(AttackError::new(CannotAttackReason::AlreadyAttacked, at))
            }
            Some(cell) => {
                cell.attacked = true;
                cell.ship
            }
        };
        let mut sunk = false;
        if let Some(id) = target {
            if let Some(ship) = self.ships.iter_mut().find(|ship| ship.id() == id) {
                let was_sunk = ship.is_sunk();
                ship.hit();
                sunk = !was_sunk && ship.is_sunk();
            }
        }
        let result = if target.is_some() {
            AttackResult::Hit
        } else {
            AttackResult::Miss
        };
        debug!("attack at {}: {}", at, result);
        if sunk {
            if let Some(id) = target {
                info!("ship {} sunk", id);
            }
            if self.are_all_ships_sunk() {
                info!("every ship on the board is sunk");
            }
        }
        self.events.notify_changed(&BoardEvent::ReceivedAttack {
            at,
            ship: target,
            result,
        });
        Ok(AttackOutcome {
            at,
            result,
            ship: target,
            sunk,
        })
    }

    /// Register a handler for changes to this board.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&BoardEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Remove a handler registered with [`subscribe`][GameBoard::subscribe].
    pub fn unsubscribe(&self, sub: Subscription) -> bool {
        self.events.unsubscribe(sub)
    }

    fn index_of(&self, id: ShipId) -> Option<usize> {
        self.ships.iter().position(|ship| ship.id() == id)
    }

    /// Check a prospective footprint for ship `id`. Bounds are checked for the whole
    /// footprint before occupancy.
    fn check_placement(&self, id: ShipId, footprint: &[Coordinate]) -> Result<(), CannotPlaceReason> {
        if !footprint.iter().all(|coord| self.grid.dim.contains(coord)) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
        let blocked = footprint
            .iter()
            .any(|coord| matches!(self.grid[coord].ship, Some(other) if other != id));
        if blocked {
            Err(CannotPlaceReason::AlreadyOccupied)
        } else {
            Ok(())
        }
    }

    /// Mark every cell in `footprint` as occupied by `id`. Cells must be in bounds.
    fn occupy(&mut self, id: ShipId, footprint: &[Coordinate]) {
        for coord in footprint {
            self.grid[coord].ship = Some(id);
        }
    }

    /// Clear the grid cells of the ship at `idx`, returning them.
    fn vacate(&mut self, idx: usize) -> Vec<Coordinate> {
        let id = self.ships[idx].id();
        let cells = self.ships[idx].placed_coordinates();
        for coord in &cells {
            if let Some(cell) = self.grid.get_mut(coord) {
                if cell.ship == Some(id) {
                    cell.ship = None;
                }
            }
        }
        cells
    }
}

impl std::fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("GameBoard")
            .field("dimensions", &self.grid.dim)
            .field("ships", &self.ships)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn record(board: &GameBoard) -> Rc<RefCell<Vec<BoardEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        board.subscribe(move |ev| sink.borrow_mut().push(*ev));
        seen
    }

    #[test]
    fn place_emits_one_event_per_cell() {
        let mut board = GameBoard::new(10, 10);
        let seen = record(&board);
        let id = board
            .place(Ship::new(3), c(6, 2), Orientation::Vertical)
            .unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![
                BoardEvent::Placed { at: c(6, 2), ship: id },
                BoardEvent::Placed { at: c(6, 3), ship: id },
                BoardEvent::Placed { at: c(6, 4), ship: id },
            ]
        );
    }

    #[test]
    fn remove_emits_one_event_per_cell() {
        let mut board = GameBoard::new(10, 10);
        let id = board
            .place(Ship::new(3), c(6, 2), Orientation::Vertical)
            .unwrap();
        let seen = record(&board);
        let ship = board.remove(id).unwrap();
        assert!(!ship.is_placed());
        assert_eq!(seen.borrow().len(), 3);
        assert!(seen
            .borrow()
            .iter()
            .all(|ev| matches!(ev, BoardEvent::Removed { at, .. } if at.x == 6)));
        assert!(board.remove(id).is_none());
    }

    #[test]
    fn rejected_placement_returns_the_ship() {
        let mut board = GameBoard::new(4, 4);
        let ship = Ship::new(5);
        let id = ship.id();
        let err = board.place(ship, c(0, 0), Orientation::Horizontal).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        let ship = err.into_ship();
        assert_eq!(ship.id(), id);
        assert!(!ship.is_placed());
        assert!(board.ships().is_empty());
    }

    #[test]
    fn failed_move_keeps_previous_position() {
        let mut board = GameBoard::new(10, 10);
        let a = board
            .place(Ship::new(2), c(0, 0), Orientation::Horizontal)
            .unwrap();
        board
            .place(Ship::new(2), c(0, 1), Orientation::Horizontal)
            .unwrap();
        let err = board.move_ship(a, c(0, 1), Orientation::Vertical).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(*err.ship(), a);
        assert_eq!(board.ship_at(c(1, 0)).map(Ship::id), Some(a));
        assert_eq!(board.ship(a).and_then(Ship::position), Some(c(0, 0)));
    }

    #[test]
    fn move_may_overlap_own_cells() {
        let mut board = GameBoard::new(10, 10);
        let a = board
            .place(Ship::new(3), c(0, 0), Orientation::Horizontal)
            .unwrap();
        board.move_ship(a, c(1, 0), Orientation::Horizontal).unwrap();
        assert!(!board.has_ship_at(c(0, 0)));
        assert!(board.has_ship_at(c(3, 0)));
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn attack_reports_sinking_once() {
        let mut board = GameBoard::new(5, 5);
        let id = board
            .place(Ship::new(2), c(1, 1), Orientation::Horizontal)
            .unwrap();
        let first = board.receive_attack(c(1, 1)).unwrap();
        assert_eq!(first.result, AttackResult::Hit);
        assert_eq!(first.ship, Some(id));
        assert!(!first.sunk);
        let second = board.receive_attack(c(2, 1)).unwrap();
        assert!(second.sunk);
        assert!(board.are_all_ships_sunk());
        let miss = board.receive_attack(c(4, 4)).unwrap();
        assert_eq!(miss.result, AttackResult::Miss);
        assert_eq!(miss.ship, None);
        assert!(!miss.sunk);
    }

    #[test]
    fn empty_board_is_not_defeated() {
        let board = GameBoard::new(3, 3);
        assert!(!board.are_all_ships_sunk());
    }
}
