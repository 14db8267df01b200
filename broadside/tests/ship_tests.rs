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
use broadside::{Coordinate, Orientation, Ship};

#[test]
fn sinks_exactly_at_length() {
    let mut ship = Ship::new(3);
    for _ in 0..2 {
        ship.hit();
    }
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    ship.hit();
    assert_eq!(ship.hit_count(), 3);
}

#[test]
fn footprint_extends_right_or_down() {
    let mut ship = Ship::new(3);
    assert!(ship.placed_coordinates().is_empty());
    ship.place(Coordinate::new(1, 2), None);
    assert_eq!(
        ship.placed_coordinates(),
        vec![Coordinate::new(1, 2), Coordinate::new(2, 2), Coordinate::new(3, 2)]
    );
    assert_eq!(
        ship.placed_coordinates_from(Coordinate::new(0, 0), Some(Orientation::Vertical)),
        vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
    );
    assert_eq!((ship.width(), ship.height()), (3, 1));
}

#[test]
fn placed_ship_cannot_rotate() {
    let mut ship = Ship::new(2);
    ship.rotate().unwrap();
    assert!(ship.is_vertical());
    ship.place(Coordinate::new(0, 0), None);
    let err = ship.rotate().unwrap_err();
    assert_eq!(err.ship(), ship.id());
    assert!(ship.set_orientation(Orientation::Vertical).is_ok());

    assert_eq!(ship.remove(), Some(Coordinate::new(0, 0)));
    assert!(ship.is_vertical());
    assert!(ship.rotate().is_ok());
}

#[test]
fn replacing_moves_the_anchor() {
    let mut ship = Ship::new(2);
    ship.place(Coordinate::new(0, 0), None);
    ship.place(Coordinate::new(5, 5), Some(Orientation::Vertical));
    assert_eq!(ship.position(), Some(Coordinate::new(5, 5)));
    assert_eq!((ship.width(), ship.height()), (1, 2));
}

#[test]
fn orientation_parses_loosely() {
    assert_eq!(" Horz ".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    assert_eq!("V".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert!("diagonal".parse::<Orientation>().is_err());
}

#[test]
fn every_ship_has_its_own_id() {
    let a = Ship::new(2);
    let b = Ship::new(2);
    assert_ne!(a.id(), b.id());
    assert!(Ship::try_new(0).is_none());
}
