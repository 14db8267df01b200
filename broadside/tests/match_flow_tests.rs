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
use broadside::{
    Coordinate, FlowError, GameError, Match, Phase, PlayerConfig, PredeterminedPlacementAi,
    RandomAttackAi, RandomPlacementAi,
};
use rand::{rngs::StdRng, SeedableRng};

fn human() -> PlayerConfig {
    PlayerConfig::default()
        .with_name("human")
        .with_placement_ai(PredeterminedPlacementAi::new())
}

fn computer(seed: u64) -> PlayerConfig {
    PlayerConfig::default()
        .with_name("computer")
        .with_placement_ai(RandomPlacementAi::new(StdRng::seed_from_u64(seed)))
        .with_attack_ai(RandomAttackAi::new(StdRng::seed_from_u64(seed + 1)))
}

#[test]
fn setup_then_alternating_turns() {
    let mut game = Match::new(human(), computer(11)).unwrap();
    let human = game.players()[0].id();
    let bot = game.players()[1].id();
    assert_eq!(game.phase(), Phase::Setup);
    assert!(!game.is_ready());

    game.auto_place().unwrap();
    assert!(game.is_ready());
    game.begin_battle(human).unwrap();
    assert!(matches!(game.auto_place(), Err(GameError::Flow(FlowError::NotInSetup))));
    assert!(matches!(
        game.begin_battle(bot),
        Err(GameError::Flow(FlowError::NotInSetup))
    ));

    // The human has no attack strategy, so its turn is not taken for it.
    assert_eq!(game.auto_attack(human).unwrap(), None);
    game.attack(human, Coordinate::new(0, 0)).unwrap();
    assert_eq!(game.phase(), Phase::Attack { current: bot });
    let outcome = game.auto_attack(bot).unwrap().unwrap();
    assert!(game.player(human).unwrap().board().has_been_attacked(outcome.at));
    assert_eq!(game.phase().current(), Some(human));
}

#[test]
fn computer_versus_computer_reaches_game_over() {
    let mut game = Match::new(computer(1), computer(5)).unwrap();
    let first = game.players()[0].id();
    game.auto_place().unwrap();
    game.begin_battle(first).unwrap();

    let mut attacks = 0;
    while let Some(current) = game.phase().current() {
        game.auto_attack(current).unwrap().unwrap();
        attacks += 1;
        assert!(attacks <= 200);
    }
    let winner = game.winner().unwrap();
    assert!(game.wins(winner));
    let loser = game.opponent_of(winner).unwrap();
    assert!(loser.loses());
    assert!(game.player(winner).unwrap().wins(loser));
}

#[test]
fn strangers_are_rejected() {
    let mut game = Match::new(human(), computer(2)).unwrap();
    let outsider = Match::new(human(), human()).unwrap().players()[0].id();
    assert!(game.player(outsider).is_none());
    assert!(matches!(
        game.begin_battle(outsider),
        Err(GameError::Flow(FlowError::UnknownPlayer(_)))
    ));
    assert!(!game.can_attack(outsider, Coordinate::new(0, 0)));
}

#[test]
fn invalid_configuration_is_reported() {
    let err = Match::new(PlayerConfig::default().with_board_size(3, 3), human()).unwrap_err();
    assert!(err.to_string().contains("does not fit"));
}
