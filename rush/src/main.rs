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
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rushhour::{
    board::{BoardDimensions, Coordinate},
    game::{GameSession, VehicleView},
    generate::GeneratorConfig,
    vehicles::{Direction, VehicleId},
};

/// Largest vehicle count accepted on the command line. Random placement on the classic
/// board rarely gets past this many vehicles.
const MAX_VEHICLES: usize = 8;

fn main() -> io::Result<()> {
    let matches = App::new("Rush")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sliding-car puzzle. Get the X car out through the exit.")
        .arg(
            Arg::with_name("vehicles")
                .short("n")
                .long("vehicles")
                .value_name("COUNT")
                .help("number of vehicles besides the goal car")
                .takes_value(true)
                .default_value("6")
                .validator(|v| validate_count(&v, 1, MAX_VEHICLES)),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for board generation, for repeatable games")
                .takes_value(true)
                .validator(|v| {
                    v.parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| format!("invalid seed {:?}: {}", v, err))
                }),
        )
        .arg(
            Arg::with_name("scramble_moves")
                .long("scramble-moves")
                .value_name("MOVES")
                .help("random moves applied to each new board")
                .takes_value(true)
                .validator(|v| validate_count(&v, 0, usize::max_value())),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("ATTEMPTS")
                .help("boards tried before falling back to a fixed layout")
                .takes_value(true)
                .validator(|v| validate_count(&v, 0, usize::max_value())),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log more; repeat for more detail. RUST_LOG overrides this"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let config = build_config(&matches);
    let rng = match matches.value_of("seed") {
        // Validated by clap.
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap_or_default()),
        None => StdRng::from_entropy(),
    };
    let mut game = match GameSession::new(config, rng) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            std::process::exit(2);
        }
    };

    note_fallback(&game);

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut game, &mut input)
}

/// Tell the player when the dealt board is the fixed layout used after random
/// placement gave up.
fn note_fallback(game: &GameSession<StdRng>) {
    if game.board().len() < game.vehicle_count() + 1 {
        println!(
            "Couldn't fit {} vehicles, dealing a simple board instead.",
            game.vehicle_count()
        );
    }
}

/// Install a tracing subscriber writing to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Clap validator for unsigned integers in `[min, max]`.
fn validate_count(value: &str, min: usize, max: usize) -> Result<(), String> {
    match value.parse::<usize>() {
        Err(err) => Err(format!("invalid number {:?}: {}", value, err)),
        Ok(n) if n < min || n > max => {
            Err(format!("must be in range [{},{}], got {}", min, max, n))
        }
        Ok(_) => Ok(()),
    }
}

/// Build the generator config from validated args.
fn build_config(matches: &ArgMatches) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    let number = |name| matches.value_of(name).and_then(|v| v.parse::<usize>().ok());
    if let Some(count) = number("vehicles") {
        config.vehicle_count = count;
    }
    if let Some(moves) = number("scramble_moves") {
        config.scramble_moves = moves;
    }
    if let Some(attempts) = number("max_attempts") {
        config.max_attempts = attempts;
    }
    config
}

/// Run the game loop until the player quits or input ends.
fn play<B: BufRead>(game: &mut GameSession<StdRng>, input: &mut InputReader<B>) -> io::Result<()> {
    enum Command {
        Select(Coordinate),
        Move(Direction),
        Deselect,
        New(Option<usize>),
        Help,
        Quit,
    }
    /// Matcher for commands with args.
    static SELECT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:select|pick|s)\s+
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
        )
        .unwrap()
    });
    static NEW: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?x)(?:new|reset)(?:\s+(?P<count>[0-9]+))?$").unwrap()
    });

    println!("Get the X car out through the exit on the right. Type help or ? for commands.");
    loop {
        println!();
        show_board(game);
        match game.selected() {
            Some(id) => println!(
                "Selected {} (can move: {})",
                VehicleName(id),
                MoveList(legal_moves(game, id))
            ),
            None => println!("No vehicle selected."),
        }

        let dim = *game.board().dimensions();
        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            "deselect" | "none" => Some(Command::Deselect),
            "up" | "u" | "north" => Some(Command::Move(Direction::Up)),
            "down" | "d" | "south" => Some(Command::Move(Direction::Down)),
            "left" | "l" | "west" => Some(Command::Move(Direction::Left)),
            "right" | "r" | "east" => Some(Command::Move(Direction::Right)),
            other => {
                if let Some(captures) = SELECT.captures(other) {
                    parse_coordinate(&dim, &captures["x"], &captures["y"]).map(Command::Select)
                } else if let Some(captures) = NEW.captures(other) {
                    match captures.name("count").map(|c| c.as_str().parse::<usize>()) {
                        None => Some(Command::New(None)),
                        Some(Ok(n)) if n >= 1 && n <= MAX_VEHICLES => Some(Command::New(Some(n))),
                        Some(_) => {
                            println!("vehicle count must be in range [1,{}]", MAX_VEHICLES);
                            None
                        }
                    }
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Select(coord) => {
                if game.try_select(coord).is_none() {
                    println!("No vehicle at {}.", coord);
                }
            }
            Command::Move(dir) => {
                if game.selected().is_none() {
                    println!("Select a vehicle first.");
                } else if !game.move_selected(dir) {
                    println!("Can't move {}.", dir);
                } else if game.check_win() {
                    show_board(game);
                    println!("You win! The X car made it out.");
                    info!(vehicles = game.vehicle_count(), "puzzle solved");
                    game.restart();
                    note_fallback(game);
                }
            }
            Command::Deselect => game.deselect(),
            Command::New(count) => {
                let count = count.unwrap_or_else(|| game.vehicle_count());
                debug!(count, "new game requested");
                game.new_game(count);
                note_fallback(game);
            }
            Command::Help => {
                println!(
                    "Available Commands:
    select <x>,<y>    select the vehicle covering the given cell (also \"s\" or \"pick\").
    up, down, left, right
                      move the selected vehicle one cell (also \"u\", \"d\", \"l\", \"r\").
                      Vehicles only move along their own axis: up and left move
                      backward, down and right move forward.
    deselect          clear the selection.
    new [count]       deal a new board, optionally with a different vehicle count.
    quit              leave the game."
                );
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Directions the given vehicle can move in right now.
fn legal_moves(game: &GameSession<StdRng>, id: VehicleId) -> Vec<Direction> {
    let moves = game.board().legal_moves(id);
    Direction::ALL
        .iter()
        .copied()
        .filter(|&dir| moves.contains(dir))
        .collect()
}

/// Parse a cell position typed by the player, checking it lies on the board.
fn parse_coordinate(dim: &BoardDimensions, x: &str, y: &str) -> Option<Coordinate> {
    let x = match x.parse() {
        Ok(x) if x < dim.width() => x,
        _ => {
            println!("x must be in range [0,{}], got {}", dim.width() - 1, x);
            return None;
        }
    };
    let y = match y.parse() {
        Ok(y) if y < dim.height() => y,
        _ => {
            println!("y must be in range [0,{}], got {}", dim.height() - 1, y);
            return None;
        }
    };
    Some(Coordinate::new(x, y))
}

/// Print the board. The goal car is X, other vehicles get letters by id, the selected
/// vehicle is bracketed and the exit is marked on the right edge.
fn show_board(game: &GameSession<StdRng>) {
    enum Cell {
        Empty,
        Vehicle(VehicleView),
    }
    impl fmt::Display for Cell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Cell::Empty => f.pad("."),
                Cell::Vehicle(view) if view.selected => {
                    f.pad(&format!("[{}]", VehicleName(view.id)))
                }
                Cell::Vehicle(view) => fmt::Display::fmt(&VehicleName(view.id), f),
            }
        }
    }

    let board = game.board();
    let views = game.snapshot();
    let dim = board.dimensions();
    print!("   ");
    for i in 0..dim.width() {
        print!("{:^4}", i);
    }
    println!();
    for (y, row) in board.iter_board().enumerate() {
        print!("{:>2} ", y);
        for cell in row {
            let cell = match cell {
                Some(id) => Cell::Vehicle(views[id.index()]),
                None => Cell::Empty,
            };
            print!("{:^4}", cell);
        }
        if y == dim.exit_row() {
            print!(" <- exit");
        }
        println!();
    }
}

/// Display helper that prints the single-letter name of a vehicle.
struct VehicleName(VehicleId);

impl fmt::Display for VehicleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWYZ";
        match self.0 {
            VehicleId::GOAL => f.pad("X"),
            VehicleId(n) => {
                let letter = LETTERS[(n - 1) % LETTERS.len()];
                f.pad(&(letter as char).to_string())
            }
        }
    }
}

/// Display helper for a list of directions.
struct MoveList(Vec<Direction>);

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        for (i, dir) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(dir, f)?;
        }
        Ok(())
    }
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
