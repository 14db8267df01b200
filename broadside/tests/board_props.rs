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
use std::collections::HashSet;

use broadside::{CannotAttackReason, Coordinate, GameBoard, Orientation, Ship};
use proptest::prelude::*;

const SIZE: i32 = 10;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn every_cell() -> impl Iterator<Item = Coordinate> {
    (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coordinate::new(x, y)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn footprint_matches_occupancy(
        length in 1usize..=5,
        x in 0..SIZE,
        y in 0..SIZE,
        orientation in orientation(),
    ) {
        let mut board = GameBoard::new(SIZE as usize, SIZE as usize);
        let ship = Ship::new(length);
        let fits = board.can_place(&ship, Coordinate::new(x, y), orientation);
        match board.place(ship, Coordinate::new(x, y), orientation) {
            Ok(id) => {
                prop_assert!(fits);
                let cells: HashSet<Coordinate> =
                    board.ship(id).unwrap().placed_coordinates().into_iter().collect();
                prop_assert_eq!(cells.len(), length);
                for at in every_cell() {
                    prop_assert_eq!(board.has_ship_at(at), cells.contains(&at));
                }
            }
            Err(err) => {
                prop_assert!(!fits);
                prop_assert_eq!(err.into_ship().length(), length);
                prop_assert!(every_cell().all(|at| !board.has_ship_at(at)));
            }
        }
    }

    #[test]
    fn second_attack_is_illegal(x in -2..SIZE + 2, y in -2..SIZE + 2) {
        let mut board = GameBoard::new(SIZE as usize, SIZE as usize);
        let at = Coordinate::new(x, y);
        if board.is_in_bounds(at) {
            board.receive_attack(at).unwrap();
            prop_assert!(board.has_been_attacked(at));
            let err = board.receive_attack(at).unwrap_err();
            prop_assert_eq!(err.reason(), CannotAttackReason::AlreadyAttacked);
            prop_assert!(board.has_been_attacked(at));
        } else {
            let err = board.receive_attack(at).unwrap_err();
            prop_assert_eq!(err.reason(), CannotAttackReason::OutOfBounds);
            prop_assert!(!board.has_been_attacked(at));
        }
    }

    #[test]
    fn sinks_after_exactly_length_hits(length in 1usize..=8, extra in 0usize..3) {
        let mut ship = Ship::new(length);
        for _ in 0..length - 1 {
            ship.hit();
        }
        prop_assert!(!ship.is_sunk());
        ship.hit();
        prop_assert!(ship.is_sunk());
        for _ in 0..extra {
            ship.hit();
        }
        prop_assert_eq!(ship.hit_count(), length);
    }

    #[test]
    fn remove_then_replace_leaves_no_residue(
        length in 1usize..=5,
        from in (0..SIZE - 5, 0..SIZE - 5),
        to in (0..SIZE - 5, 0..SIZE - 5),
        first in orientation(),
        second in orientation(),
    ) {
        let mut board = GameBoard::new(SIZE as usize, SIZE as usize);
        let id = board
            .place(Ship::new(length), Coordinate::new(from.0, from.1), first)
            .unwrap();
        let old: Vec<Coordinate> = board.ship(id).unwrap().placed_coordinates();
        let ship = board.remove(id).unwrap();
        let id = board
            .place(ship, Coordinate::new(to.0, to.1), second)
            .unwrap();
        let new: HashSet<Coordinate> =
            board.ship(id).unwrap().placed_coordinates().into_iter().collect();
        for at in old {
            prop_assert_eq!(board.has_ship_at(at), new.contains(&at));
        }
        for at in every_cell() {
            prop_assert_eq!(board.has_ship_at(at), new.contains(&at));
        }
    }
}
