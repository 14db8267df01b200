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

use broadside::{
    AttackAi, CannotAttackReason, Coordinate, PlacementAi, Player, PlayerConfig,
    PredeterminedPlacementAi, RandomAttackAi, RandomPlacementAi,
};
use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

fn paired(config: impl Fn() -> PlayerConfig) -> (Player, Player) {
    let mut a = Player::new(config());
    let mut b = Player::new(config());
    Player::pair(&mut a, &mut b);
    (a, b)
}

#[test]
fn random_placement_terminates_for_many_seeds() {
    for seed in 0..50 {
        let mut player = Player::new(PlayerConfig::default());
        RandomPlacementAi::new(StdRng::seed_from_u64(seed))
            .place_all_ships(&mut player)
            .unwrap();
        assert!(player.are_all_ships_placed(), "seed {}", seed);
        let occupied: usize = player.placed_ships().iter().map(|ship| ship.length()).sum();
        let cells = player
            .placed_ships()
            .iter()
            .flat_map(|ship| ship.placed_coordinates())
            .collect::<HashSet<_>>();
        assert_eq!(cells.len(), occupied);
        assert!(cells.iter().all(|&at| player.board().is_in_bounds(at)));
    }
}

#[test]
fn random_placement_with_degenerate_rng() {
    for &(initial, increment) in &[(0, 0), (0, 1), (1, 3)] {
        let mut player = Player::new(PlayerConfig::default());
        RandomPlacementAi::new(StepRng::new(initial, increment))
            .place_all_ships(&mut player)
            .unwrap();
        assert!(player.are_all_ships_placed());
    }
}

#[test]
fn random_attacks_cover_the_board_once() {
    let (mut a, mut b) = paired(|| {
        PlayerConfig::default()
            .with_board_size(4, 4)
            .with_ship_lengths(vec![2])
    });
    let mut ai = RandomAttackAi::new(StdRng::seed_from_u64(99));
    let mut seen = HashSet::new();
    for _ in 0..16 {
        let outcome = ai.attack_as(&mut a, &mut b).unwrap();
        assert!(b.board().is_in_bounds(outcome.at));
        assert!(seen.insert(outcome.at), "{} attacked twice", outcome.at);
    }
    let err = ai.attack_as(&mut a, &mut b).unwrap_err();
    assert_eq!(err.reason(), CannotAttackReason::NoTargetsLeft);
}

#[test]
fn computer_players_play_a_full_game() {
    let config = || {
        PlayerConfig::default()
            .with_placement_ai(RandomPlacementAi::new(StdRng::seed_from_u64(3)))
            .with_attack_ai(RandomAttackAi::new(StdRng::seed_from_u64(4)))
    };
    let (mut a, mut b) = paired(config);
    assert!(a.is_computer());
    assert!(a.auto_place_ships().unwrap());
    assert!(b.auto_place_ships().unwrap());

    let mut turns = 0;
    loop {
        a.auto_attack(&mut b).unwrap().unwrap();
        turns += 1;
        if a.wins(&b) {
            break;
        }
        b.auto_attack(&mut a).unwrap().unwrap();
        if b.wins(&a) {
            break;
        }
    }
    assert!(turns <= 100);
    assert!(a.wins(&b) != b.wins(&a));
}

#[test]
fn predetermined_layout_survives_a_player_round_trip() {
    let mut player =
        Player::new(PlayerConfig::default().with_placement_ai(PredeterminedPlacementAi::new()));
    player.auto_place_ships().unwrap();
    assert_eq!(player.placed_ships().len(), 5);
    assert!(player.board().has_ship_at(Coordinate::new(2, 7)));
    assert!(player.board().has_ship_at(Coordinate::new(8, 5)));
    assert!(player.board().has_ship_at(Coordinate::new(3, 1)));
    assert!(player.board().has_ship_at(Coordinate::new(6, 8)));
    assert!(player.board().has_ship_at(Coordinate::new(4, 3)));
}
