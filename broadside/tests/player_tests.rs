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
use std::{cell::RefCell, rc::Rc};

use broadside::{Action, Coordinate, GameError, Player, PlayerConfig, PlayerEvent};

fn fleet(lengths: &[usize]) -> Player {
    Player::new(PlayerConfig::default().with_ship_lengths(lengths.iter().copied()))
}

fn place_row(player: &mut Player, y: i32) {
    let mut x = 0;
    for id in player.ship_ids_to_place() {
        let length = player.ship(id).unwrap().length() as i32;
        player.place_horizontal(id, Coordinate::new(x, y)).unwrap();
        x += length;
    }
}

#[test]
fn two_destroyers_lose_after_four_hits() {
    let mut a = fleet(&[2, 2]);
    let mut b = fleet(&[2, 2]);
    Player::pair(&mut a, &mut b);
    place_row(&mut a, 0);
    assert!(a.are_all_ships_placed());

    let targets = [(0, 0), (1, 0), (2, 0), (3, 0)];
    for &(x, y) in &targets[..3] {
        b.attack(&mut a, Coordinate::new(x, y)).unwrap();
    }
    assert!(!a.loses());
    assert!(!b.wins(&a));
    b.attack(&mut a, Coordinate::new(3, 0)).unwrap();
    assert!(a.loses());
    assert!(b.wins(&a));
}

#[test]
fn repeated_attack_is_illegal() {
    let mut a = fleet(&[2]);
    let mut b = fleet(&[2]);
    Player::pair(&mut a, &mut b);
    b.attack(&mut a, Coordinate::new(4, 4)).unwrap();
    assert!(!b.can_attack(&a, Coordinate::new(4, 4)));
    assert!(a.board().has_been_attacked(Coordinate::new(4, 4)));
    let err = b.attack(&mut a, Coordinate::new(4, 4)).unwrap_err();
    assert_eq!(err.at(), Coordinate::new(4, 4));
}

#[test]
fn attacking_a_stranger_is_illegal() {
    let mut a = fleet(&[2]);
    let mut b = fleet(&[2]);
    let mut c = fleet(&[2]);
    Player::pair(&mut a, &mut b);
    assert!(!c.can_attack(&a, Coordinate::new(0, 0)));
    assert!(c.attack(&mut a, Coordinate::new(0, 0)).is_err());
    assert!(!a.board().has_been_attacked(Coordinate::new(0, 0)));
    assert!(b.can_attack(&a, Coordinate::new(0, 0)));
    assert!(c.opponent().is_none());
}

#[test]
fn equal_lengths_keep_their_order_after_removal() {
    let mut p = fleet(&[3, 3, 2]);
    let ids = p.ship_ids_to_place();
    place_row(&mut p, 0);
    p.remove(ids[0]).unwrap();
    p.remove(ids[2]).unwrap();
    p.remove(ids[1]).unwrap();
    assert_eq!(p.ship_ids_to_place(), ids);
}

#[test]
fn ships_from_another_player_are_refused() {
    let mut a = fleet(&[2]);
    let mut b = fleet(&[2]);
    place_row(&mut b, 0);
    let foreign = b.placed_ships()[0].id();
    assert!(!a.can_place_horizontal(foreign, Coordinate::new(0, 5)));
    match a.place_horizontal(foreign, Coordinate::new(0, 5)) {
        Err(GameError::Ownership(err)) => assert_eq!(err.ship(), foreign),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(b.board().has_ship_at(Coordinate::new(0, 0)));
}

#[test]
fn observers_see_attribution_and_can_leave() {
    let mut a = fleet(&[2]);
    let mut b = fleet(&[2]);
    Player::pair(&mut a, &mut b);
    place_row(&mut a, 0);

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let sub = a.subscribe(move |event: &PlayerEvent| {
        sink.borrow_mut().push((event.sender(), event.action(), event.result()))
    });
    b.attack(&mut a, Coordinate::new(0, 0)).unwrap();
    a.set_name("Grace");
    assert!(a.unsubscribe(sub));
    b.attack(&mut a, Coordinate::new(1, 0)).unwrap();

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, a.id());
    assert_eq!(log[0].1, Action::ReceiveAttack);
    assert!(log[0].2.unwrap().is_hit());
    assert_eq!(log[1].1, Action::Name);
}

#[test]
fn clearing_the_board_restores_the_roster() {
    let mut p = fleet(&[5, 4, 3, 3, 2]);
    for (y, id) in p.ship_ids_to_place().into_iter().enumerate() {
        p.place_horizontal(id, Coordinate::new(0, y as i32)).unwrap();
    }
    assert!(p.are_all_ships_placed());
    assert_eq!(p.board().ships().len(), 5);

    p.remove_all_ships();
    assert_eq!(p.ships_to_place().len(), 5);
    assert!(p.placed_ships().is_empty());
    assert!(!p.board().has_ship_at(Coordinate::new(0, 0)));
    assert!(p.ships_to_place().iter().all(|ship| !ship.is_placed()));
}
