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
//! A participant in a match: a board, the ships still to place, an opponent link and
//! optional strategies.

use std::{
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use log::debug;

use crate::{
    board::{AttackError, AttackOutcome, CannotAttackReason, Coordinate, GameBoard},
    config::PlayerConfig,
    errors::{ConfigError, GameError, OwnershipError},
    observable::{Observable, Subscription},
    ship::{Orientation, RotateError, Ship, ShipId},
    strategy::{AttackAi, PlacementAi},
};

pub use self::events::{Action, PlayerEvent};

mod events;

/// Source of process-unique player ids.
static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Player`], used for the opponent link and event attribution.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A player and everything it owns.
///
/// Each ship the player was configured with is always in exactly one of two places: the
/// roster of ships still to place, or the player's board. Operations that need the
/// opponent take it explicitly and check it is the paired opponent; see
/// [`Match`][crate::Match] for a wrapper that owns both players.
pub struct Player {
    id: PlayerId,
    name: String,
    /// Non-owning link to the opponent, kept mutual by [`Player::pair`].
    opponent: Option<PlayerId>,
    board: GameBoard,
    /// Ships not yet placed.
    to_place: Vec<Ship>,
    placement_ai: Option<Box<dyn PlacementAi>>,
    attack_ai: Option<Box<dyn AttackAi>>,
    /// Shared with the board relay, which holds only a weak reference.
    events: Rc<Observable<PlayerEvent>>,
}

impl Player {
    /// Construct a player from `config`. Panics if the configuration is invalid.
    pub fn new(config: PlayerConfig) -> Self {
        match Self::try_new(config) {
            Ok(player) => player,
            Err(err) => panic!("invalid player configuration: {}", err),
        }
    }

    /// Construct a player from `config`, returning an error if the board size or a ship
    /// length is invalid.
    pub fn try_new(config: PlayerConfig) -> Result<Self, ConfigError> {
        let dim = config.validate()?;
        let to_place = config
            .ship_lengths
            .iter()
            .map(|&length| Ship::try_new(length).ok_or(ConfigError::InvalidShipLength { length }))
            .collect::<Result<Vec<_>, _>>()?;

        let id = PlayerId::next();
        let events = Rc::new(Observable::new());
        let board = GameBoard::with_dimensions(dim);
        let relay = Rc::downgrade(&events);
        board.subscribe(move |event| {
            if let Some(events) = relay.upgrade() {
                events.notify_changed(&PlayerEvent::Board {
                    sender: id,
                    event: *event,
                });
            }
        });

        Ok(Self {
            id,
            name: config.name,
            opponent: None,
            board,
            to_place,
            placement_ai: config.placement_ai,
            attack_ai: config.attack_ai,
            events,
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
        self.events.notify_changed(&PlayerEvent::NameChanged {
            sender: self.id,
            name: self.name.clone(),
        });
    }

    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }

    /// Make `a` and `b` each other's opponent.
    ///
    /// A previous opponent of either player keeps its own link, but it is no longer
    /// mutual, so [`is_paired_with`][Player::is_paired_with] and every opponent operation
    /// reject it.
    pub fn pair(a: &mut Player, b: &mut Player) {
        a.opponent = Some(b.id);
        b.opponent = Some(a.id);
        debug!("paired {} ({}) with {} ({})", a.name, a.id, b.name, b.id);
        for player in [a, b].iter() {
            player.events.notify_changed(&PlayerEvent::OpponentChanged {
                sender: player.id,
                opponent: player.opponent,
            });
        }
    }

    /// Returns true if `self` and `other` are each other's opponent.
    pub fn is_paired_with(&self, other: &Player) -> bool {
        self.opponent == Some(other.id) && other.opponent == Some(self.id)
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Ships not yet placed, longest first. Ships of equal length keep their
    /// configuration order, even after being removed from the board.
    pub fn ships_to_place(&self) -> Vec<&Ship> {
        let mut ships: Vec<&Ship> = self.to_place.iter().collect();
        // Ids are allocated in configuration order.
        ships.sort_by(|a, b| b.length().cmp(&a.length()).then(a.id().cmp(&b.id())));
        ships
    }

    /// Ids of [`ships_to_place`][Player::ships_to_place], in the same order.
    pub fn ship_ids_to_place(&self) -> Vec<ShipId> {
        self.ships_to_place().into_iter().map(Ship::id).collect()
    }

    pub fn placed_ships(&self) -> &[Ship] {
        self.board.ships()
    }

    pub fn are_all_ships_placed(&self) -> bool {
        self.to_place.is_empty()
    }

    /// Get one of this player's ships, placed or not.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.to_place
            .iter()
            .find(|ship| ship.id() == id)
            .or_else(|| self.board.ship(id))
    }

    /// Returns true if the player has an attack strategy.
    pub fn is_computer(&self) -> bool {
        self.attack_ai.is_some()
    }

    pub fn is_human(&self) -> bool {
        !self.is_computer()
    }

    /// Returns true if the player's ship `id` could be anchored at `at`. False for ships
    /// the player does not own.
    pub fn can_place(&self, id: ShipId, at: Coordinate, orientation: Orientation) -> bool {
        self.ship(id)
            .map_or(false, |ship| self.board.can_place(ship, at, orientation))
    }

    pub fn can_place_horizontal(&self, id: ShipId, at: Coordinate) -> bool {
        self.can_place(id, at, Orientation::Horizontal)
    }

    pub fn can_place_vertical(&self, id: ShipId, at: Coordinate) -> bool {
        self.can_place(id, at, Orientation::Vertical)
    }

    /// Place or move one of this player's ships. Without an orientation the ship's current
    /// one is used.
    pub fn place(
        &mut self,
        id: ShipId,
        at: Coordinate,
        orientation: Option<Orientation>,
    ) -> Result<(), GameError> {
        if let Some(idx) = self.to_place.iter().position(|ship| ship.id() == id) {
            let ship = self.to_place.remove(idx);
            let orientation = orientation.unwrap_or_else(|| ship.orientation());
            let to_place = &mut self.to_place;
            self.board.place(ship, at, orientation).map(|_| ()).map_err(|err| {
                err.map_ship(|ship| {
                    to_place.insert(idx, ship);
                    id
                })
                .into()
            })
        } else if let Some(ship) = self.board.ship(id) {
            let orientation = orientation.unwrap_or_else(|| ship.orientation());
            Ok(self.board.move_ship(id, at, orientation)?)
        } else {
            Err(OwnershipError::new(id).into())
        }
    }

    pub fn place_horizontal(&mut self, id: ShipId, at: Coordinate) -> Result<(), GameError> {
        self.place(id, at, Some(Orientation::Horizontal))
    }

    pub fn place_vertical(&mut self, id: ShipId, at: Coordinate) -> Result<(), GameError> {
        self.place(id, at, Some(Orientation::Vertical))
    }

    /// Take a ship off the board and back into the roster. Returns false if it was not
    /// placed.
    pub fn remove(&mut self, id: ShipId) -> Result<bool, GameError> {
        if self.to_place.iter().any(|ship| ship.id() == id) {
            return Ok(false);
        }
        match self.board.remove(id) {
            Some(ship) => {
                self.to_place.push(ship);
                Ok(true)
            }
            None => Err(OwnershipError::new(id).into()),
        }
    }

    /// Return every placed ship to the roster.
    pub fn remove_all_ships(&mut self) {
        let placed: Vec<ShipId> = self.board.ships().iter().map(Ship::id).collect();
        for id in placed {
            if let Some(ship) = self.board.remove(id) {
                self.to_place.push(ship);
            }
        }
    }

    /// Toggle the orientation of an unplaced ship.
    pub fn rotate(&mut self, id: ShipId) -> Result<(), GameError> {
        if let Some(ship) = self.to_place.iter_mut().find(|ship| ship.id() == id) {
            Ok(ship.rotate()?)
        } else if self.board.ship(id).is_some() {
            Err(RotateError::new(id).into())
        } else {
            Err(OwnershipError::new(id).into())
        }
    }

    /// Run the placement strategy, if any. Returns `Ok(false)` without doing anything if
    /// the player has none.
    pub fn auto_place_ships(&mut self) -> Result<bool, GameError> {
        let mut ai = match self.placement_ai.take() {
            Some(ai) => ai,
            None => return Ok(false),
        };
        let result = ai.place_all_ships(self);
        self.placement_ai = Some(ai);
        result.map(|()| true)
    }

    /// Returns true if `target` is paired with this player and `at` can be attacked on its
    /// board.
    pub fn can_attack(&self, target: &Player, at: Coordinate) -> bool {
        self.is_paired_with(target) && target.board.can_be_attacked(at)
    }

    /// Attack `at` on the opponent's board.
    ///
    /// The defender raises a [`Action::ReceiveAttack`] event for its board, then the
    /// attacker raises an [`Action::Attack`] event, so each side observes the attack from
    /// its own perspective.
    pub fn attack(&mut self, target: &mut Player, at: Coordinate) -> Result<AttackOutcome, AttackError> {
        if !self.is_paired_with(target) {
            return Err(AttackError::new(CannotAttackReason::NoOpponent, at));
        }
        let outcome = target.board.receive_attack(at)?;
        debug!(
            "{} attacked {} at {}: {}",
            self.name, target.name, at, outcome.result
        );
        self.events.notify_changed(&PlayerEvent::Attack {
            sender: self.id,
            at,
            ship: outcome.ship,
            result: outcome.result,
        });
        Ok(outcome)
    }

    /// Run the attack strategy, if any. Returns `Ok(None)` without attacking if the
    /// player has none.
    pub fn auto_attack(&mut self, target: &mut Player) -> Result<Option<AttackOutcome>, AttackError> {
        let mut ai = match self.attack_ai.take() {
            Some(ai) => ai,
            None => return Ok(None),
        };
        let result = ai.attack_as(self, target);
        self.attack_ai = Some(ai);
        result.map(Some)
    }

    /// Returns true if `opponent` is this player's opponent and has lost.
    pub fn wins(&self, opponent: &Player) -> bool {
        self.is_paired_with(opponent) && opponent.loses()
    }

    /// Returns true if every ship on this player's board is sunk.
    pub fn loses(&self) -> bool {
        self.board.are_all_ships_sunk()
    }

    /// Register a handler for this player's events, including re-broadcast board events.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&PlayerEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Remove a handler registered with [`subscribe`][Player::subscribe].
    pub fn unsubscribe(&self, sub: Subscription) -> bool {
        self.events.unsubscribe(sub)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("opponent", &self.opponent)
            .field("board", &self.board)
            .field("to_place", &self.to_place)
            .finish()
    }
}
