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
use std::{
    collections::HashMap,
    error::Error,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use broadside::{
    AttackOutcome, CannotAttackReason, CannotPlaceReason, Coordinate, GameError, Match,
    Orientation, Player, PlayerConfig, PlayerId, RandomAttackAi, RandomPlacementAi, ShipId,
    STANDARD_BOARD_HEIGHT, STANDARD_BOARD_WIDTH, STANDARD_SHIP_LENGTHS,
};

mod logging;
mod view;

use crate::view::{FleetCell, ShotCell, View};

/// Labels for the human's ships, in roster order.
const LABELS: &str = "123456789abcdefghijklmnopqrstuvwxyz";

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Simple command line battleship game.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("WIDTH")
                .help("width of both boards")
                .takes_value(true)
                .validator(|v| parse_size(&v).map(drop)),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("HEIGHT")
                .help("height of both boards")
                .takes_value(true)
                .validator(|v| parse_size(&v).map(drop)),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("LENGTHS")
                .help("comma separated ship lengths, e.g. 5,4,3,3,2")
                .takes_value(true)
                .validator(|v| parse_lengths(&v).map(drop)),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the computer player for a reproducible game")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(drop).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("auto_place")
                .short("a")
                .long("auto_place")
                .help("place the human player's ships randomly and skip setup"),
        )
        .get_matches();

    logging::init_logging();

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };
    let width = match matches.value_of("width") {
        Some(width) => parse_size(width)?,
        None => STANDARD_BOARD_WIDTH,
    };
    let height = match matches.value_of("height") {
        Some(height) => parse_size(height)?,
        None => STANDARD_BOARD_HEIGHT,
    };
    let ships = match matches.value_of("ships") {
        Some(ships) => parse_lengths(ships)?,
        None => STANDARD_SHIP_LENGTHS.to_vec(),
    };

    let human_config = PlayerConfig::default()
        .with_name("You")
        .with_board_size(width, height)
        .with_ship_lengths(ships.iter().copied())
        .with_placement_ai(RandomPlacementAi::new(StdRng::seed_from_u64(rng.gen())));
    let bot_config = PlayerConfig::default()
        .with_name("Computer")
        .with_board_size(width, height)
        .with_ship_lengths(ships)
        .with_placement_ai(RandomPlacementAi::new(StdRng::seed_from_u64(rng.gen())))
        .with_attack_ai(RandomAttackAi::new(StdRng::seed_from_u64(rng.gen())));
    let mut game = Match::new(human_config, bot_config)?;
    let human = game.players()[0].id();
    let bot = game.players()[1].id();

    let roster = game.players()[0].ship_ids_to_place();
    let labels: HashMap<ShipId, char> = roster.iter().copied().zip(LABELS.chars()).collect();
    let fleet = view::watch_fleet(&game.players()[0], labels);
    let shots = view::watch_shots(&game.players()[0], *game.players()[1].board().dimensions());

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let first = choose_first(&matches, &mut rng, &mut input, human, bot)?;

    if let Some(player) = game.player_mut(bot) {
        player.auto_place_ships()?;
    }
    if matches.is_present("auto_place") {
        if let Some(player) = game.player_mut(human) {
            player.auto_place_ships()?;
        }
    } else {
        choose_placements(&mut game, human, &roster, &fleet, &mut input)?;
    }

    game.begin_battle(first)?;
    play(&mut game, human, bot, &fleet, &shots, &mut input)?;
    Ok(())
}

fn parse_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("board size must be at least 1".to_owned()),
        Ok(size) => Ok(size),
        Err(err) => Err(format!("invalid board size {:?}: {}", value, err)),
    }
}

fn parse_lengths(value: &str) -> Result<Vec<usize>, String> {
    let lengths = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid ship length {:?}: {}", part, err))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if lengths.is_empty() || lengths.len() > LABELS.len() {
        return Err(format!("between 1 and {} ships are supported", LABELS.len()));
    }
    Ok(lengths)
}

/// Choose which player attacks first based on either args or cli input.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut impl Rng,
    input: &mut InputReader<B>,
    human: PlayerId,
    bot: PlayerId,
) -> io::Result<PlayerId> {
    let mut random = || if rng.gen_bool(0.5) { human } else { bot };
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => human,
            "computer" | "bot" => bot,
            _ => random(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n/random)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(human),
            "no" | "n" | "second" | "2" | "2nd" => Some(bot),
            "random" | "rand" => Some(random()),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Let the human place their fleet interactively.
fn choose_placements<B: BufRead>(
    game: &mut Match,
    human: PlayerId,
    roster: &[ShipId],
    fleet: &View<FleetCell>,
    input: &mut InputReader<B>,
) -> Result<(), Box<dyn Error>> {
    enum Command {
        Done,
        Place(ShipId, Coordinate, Option<Orientation>),
        Remove(ShipId),
        Rotate(ShipId),
        Clear,
        RandomizeRest,
        Help,
    }
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
    (?P<ship>\w+)\s+
    (?:(?:at|on|to|->|=>)\s+)?
    (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)
    (?:\s+(?P<dir>\w+))?$",
        )
        .unwrap()
    });
    static SHIP_COMMAND: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<cmd>un-?place|remove|rotate)\s+(?P<ship>\w+)$").unwrap()
    });

    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        let player = game.player(human).ok_or("human player missing")?;
        println!();
        if player.are_all_ships_placed() {
            println!("All ships placed, type done to start the game");
        } else {
            let pending: Vec<String> = player
                .ships_to_place()
                .iter()
                .map(|ship| {
                    format!(
                        "{} (length {}, {})",
                        label_of(roster, ship.id()),
                        ship.length(),
                        ship.orientation()
                    )
                })
                .collect();
            println!("Remaining ships to place: {}", pending.join(", "));
        }
        println!("Your current board setup:");
        fleet.show();
        println!();

        let ship_named = |name: &str| {
            let found = LABELS
                .chars()
                .position(|label| name.len() == 1 && name.starts_with(label))
                .and_then(|idx| roster.get(idx).copied());
            if found.is_none() {
                println!("invalid ship: {}, use the label shown on the board", name);
            }
            found
        };
        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            "done" | "start" => Some(Command::Done),
            "clear" | "remove all" => Some(Command::Clear),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let ship = ship_named(&captures["ship"])?;
                    let x = parse_coord(&captures["x"])?;
                    let y = parse_coord(&captures["y"])?;
                    let dir = match captures.name("dir") {
                        Some(dir) => match dir.as_str().parse::<Orientation>() {
                            Ok(dir) => Some(dir),
                            Err(err) => {
                                println!("{}, choose \"horizontal\" or \"vertical\"", err);
                                return None;
                            }
                        },
                        None => None,
                    };
                    Some(Command::Place(ship, Coordinate::new(x, y), dir))
                } else if let Some(captures) = SHIP_COMMAND.captures(other) {
                    let ship = ship_named(&captures["ship"])?;
                    Some(if &captures["cmd"] == "rotate" {
                        Command::Rotate(ship)
                    } else {
                        Command::Remove(ship)
                    })
                } else {
                    println!("Invalid ship-placement command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        let player = game.player_mut(human).ok_or("human player missing")?;
        match cmd {
            Command::Done if player.are_all_ships_placed() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(ship, at, dir) => match player.place(ship, at, dir) {
                Ok(()) => {}
                Err(GameError::IllegalPlacement(err)) => match err.reason() {
                    CannotPlaceReason::AlreadyOccupied => {
                        println!("Invalid placement: overlaps existing ship.")
                    }
                    CannotPlaceReason::OutOfBounds | CannotPlaceReason::NotOnBoard => {
                        println!("Invalid placement: not enough space on the board.")
                    }
                },
                Err(err) => return Err(err.into()),
            },
            Command::Remove(ship) => {
                player.remove(ship)?;
            }
            Command::Rotate(ship) => match player.rotate(ship) {
                Ok(()) => {}
                Err(GameError::InvalidOperation(_)) => {
                    println!("Remove the ship or place it with a direction to turn it.")
                }
                Err(err) => return Err(err.into()),
            },
            Command::Clear => player.remove_all_ships(),
            Command::RandomizeRest => randomize_rest(player, roster)?,
            Command::Help => {
                println!(
                    "Available Commands:
    done                          if all ships are placed, start the game.
    place <ship> <x>,<y> [<dir>]  place the ship with its top left at the given coordinate.
        Possible directions are \"horizontal\" (\"h\") and \"vertical\" (\"v\"). Without a
        direction the ship keeps its current one.
    remove <ship>                 take the ship off the board.
    rotate <ship>                 turn a ship that is not on the board.
    clear                         clears all ship placements.
    randomize                     randomize the placements of the remaining ships.

Ships are named by the label shown in the list of remaining ships.",
                );
            }
        }
    }
    Ok(())
}

/// Alternate turns until one fleet is sunk.
fn play<B: BufRead>(
    game: &mut Match,
    human: PlayerId,
    bot: PlayerId,
    fleet: &View<FleetCell>,
    shots: &View<ShotCell>,
    input: &mut InputReader<B>,
) -> Result<(), Box<dyn Error>> {
    static TARGET: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:(?:attack|fire|shoot)\s+)?(?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$")
            .unwrap()
    });

    while let Some(current) = game.phase().current() {
        if current == bot {
            let outcome = game
                .auto_attack(bot)?
                .ok_or("computer player has no attack strategy")?;
            debug!("computer fired at {}", outcome.at);
            report("The computer", &outcome);
            continue;
        }
        println!();
        println!("Your fleet:");
        fleet.show();
        println!();
        println!("Your shots:");
        shots.show();
        println!();
        let at = input.read_input_lower("Fire at x,y:", |input| match TARGET.captures(input) {
            Some(captures) => Some(Coordinate::new(
                parse_coord(&captures["x"])?,
                parse_coord(&captures["y"])?,
            )),
            None => {
                println!("Enter a target as x,y.");
                None
            }
        })?;
        match game.attack(human, at) {
            Ok(outcome) => report("You", &outcome),
            Err(GameError::IllegalAttack(err)) => match err.reason() {
                CannotAttackReason::AlreadyAttacked => println!("You already fired at {}.", at),
                _ => println!("{} is not on the board.", at),
            },
            Err(err) => return Err(err.into()),
        }
    }

    println!();
    println!("Final boards:");
    fleet.show();
    println!();
    shots.show();
    if game.wins(human) {
        println!("You sank the whole enemy fleet. You win!");
    } else {
        println!("Your fleet is sunk. The computer wins.");
    }
    Ok(())
}

/// Randomly place the ships still in the roster. Running out of room is reported and
/// leaves the remaining ships to place by hand.
fn randomize_rest(player: &mut Player, roster: &[ShipId]) -> Result<(), GameError> {
    match player.auto_place_ships() {
        Ok(_) => Ok(()),
        Err(GameError::PlacementExhausted(ship)) => {
            println!(
                "No room left for ship {}; clear or move ships and try again.",
                label_of(roster, ship)
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn report(who: &str, outcome: &AttackOutcome) {
    if outcome.sunk {
        println!("{} fired at {}: hit and sunk!", who, outcome.at);
    } else {
        println!("{} fired at {}: {}", who, outcome.at, outcome.result);
    }
}

fn parse_coord(value: &str) -> Option<i32> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("invalid coordinate: {}", value);
            None
        }
    }
}

fn label_of(roster: &[ShipId], ship: ShipId) -> char {
    roster
        .iter()
        .position(|&id| id == ship)
        .and_then(|idx| LABELS.chars().nth(idx))
        .unwrap_or('?')
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crowded() -> Player {
        Player::new(
            PlayerConfig::default()
                .with_board_size(3, 3)
                .with_ship_lengths(vec![3, 2, 2, 2])
                .with_placement_ai(RandomPlacementAi::new(StdRng::seed_from_u64(5))),
        )
    }

    #[test]
    fn randomize_without_room_keeps_setup_going() {
        let mut player = crowded();
        let roster = player.ship_ids_to_place();
        player.place_horizontal(roster[0], Coordinate::new(0, 1)).unwrap();

        randomize_rest(&mut player, &roster).unwrap();
        assert!(!player.are_all_ships_placed());
        assert!(player.board().has_ship_at(Coordinate::new(1, 1)));

        player.remove_all_ships();
        randomize_rest(&mut player, &roster).unwrap();
        assert_eq!(player.placed_ships().len() + player.ships_to_place().len(), 4);
    }

    #[test]
    fn labels_follow_the_roster() {
        let player = crowded();
        let roster = player.ship_ids_to_place();
        assert_eq!(label_of(&roster, roster[0]), '1');
        assert_eq!(label_of(&roster, roster[3]), '4');
    }
}
