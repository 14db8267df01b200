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
//! Terminal rendering of boards, driven entirely by player events.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use broadside::{AttackResult, BoardEvent, Coordinate, Dimensions, Player, PlayerEvent, ShipId};

/// A cell of the player's own board.
#[derive(Debug, Copy, Clone)]
pub enum FleetCell {
    Empty,
    Ship(char),
    Hit(char),
    Miss,
}

impl fmt::Display for FleetCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FleetCell::Empty => f.pad("~~"),
            FleetCell::Ship(label) => f.pad(&label.to_string()),
            FleetCell::Hit(label) => f.pad(&format!("x{}", label)),
            FleetCell::Miss => f.pad("x"),
        }
    }
}

/// A cell of the opponent's board as seen by the attacker.
#[derive(Debug, Copy, Clone)]
pub enum ShotCell {
    Unknown,
    Hit,
    Miss,
}

impl fmt::Display for ShotCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotCell::Unknown => f.pad("~~"),
            ShotCell::Hit => f.pad("X"),
            ShotCell::Miss => f.pad("x"),
        }
    }
}

/// Grid of display cells shared with the event handler that keeps it current.
#[derive(Clone)]
pub struct View<C> {
    dim: Dimensions,
    cells: Rc<RefCell<Vec<C>>>,
}

impl<C: Copy + fmt::Display> View<C> {
    fn new(dim: Dimensions, fill: C) -> Self {
        Self {
            dim,
            cells: Rc::new(RefCell::new(vec![fill; dim.total_size()])),
        }
    }

    fn set(&self, at: Coordinate, cell: C) {
        if let Some(idx) = self.dim.try_linearize(&at) {
            self.cells.borrow_mut()[idx] = cell;
        }
    }

    /// Print the grid with column and row numbers.
    pub fn show(&self) {
        let cells = self.cells.borrow();
        print!("   ");
        for i in 0..self.dim.width() {
            print!("{:^4}", i);
        }
        println!();
        for (i, row) in cells.chunks(self.dim.width()).enumerate() {
            print!("{:>2} ", i);
            for cell in row {
                print!("{:^4}", cell);
            }
            println!();
        }
    }
}

/// Track `player`'s own board: placements, removals and incoming attacks.
pub fn watch_fleet(player: &Player, labels: HashMap<ShipId, char>) -> View<FleetCell> {
    let view = View::new(*player.board().dimensions(), FleetCell::Empty);
    let cells = view.clone();
    let label = move |ship: ShipId| labels.get(&ship).copied().unwrap_or('?');
    player.subscribe(move |event| {
        if let PlayerEvent::Board { event, .. } = event {
            match *event {
                BoardEvent::Placed { at, ship } => cells.set(at, FleetCell::Ship(label(ship))),
                BoardEvent::Removed { at, .. } => cells.set(at, FleetCell::Empty),
                BoardEvent::ReceivedAttack {
                    at, ship: Some(ship), ..
                } => cells.set(at, FleetCell::Hit(label(ship))),
                BoardEvent::ReceivedAttack { at, ship: None, .. } => {
                    cells.set(at, FleetCell::Miss)
                }
            }
        }
    });
    view
}

/// Track the results of `player`'s attacks on a board of `dim`.
pub fn watch_shots(player: &Player, dim: Dimensions) -> View<ShotCell> {
    let view = View::new(dim, ShotCell::Unknown);
    let cells = view.clone();
    player.subscribe(move |event| {
        if let PlayerEvent::Attack { at, result, .. } = *event {
            let cell = match result {
                AttackResult::Hit => ShotCell::Hit,
                AttackResult::Miss => ShotCell::Miss,
            };
            cells.set(at, cell);
        }
    });
    view
}
