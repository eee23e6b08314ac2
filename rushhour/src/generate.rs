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

//! Random generation of starting boards.
//!
//! A new board is built in three stages. The goal vehicle is parked on the exit row and
//! the requested number of vehicles are dropped at random spots; any overlap throws the
//! whole attempt away. The survivors are then scrambled with thousands of random legal
//! moves. Finally the board is only kept if the goal vehicle ended up against the left
//! edge and the [`Difficulty`] check finds it blocked.
//!
//! Every attempt counts against [`GeneratorConfig::max_attempts`]. Once they run out,
//! [`Generator::generate`] hands out a small fixed layout instead.
use rand::{distributions::Distribution, Rng};
use tracing::{debug, trace, warn};

use crate::{
    board::{Board, BoardSetup, Coordinate, PlaceError},
    vehicles::{Orientation, Step, Vehicle, VehicleId, VehicleKind},
};

pub use self::{
    config::GeneratorConfig,
    difficulty::Difficulty,
    distributions::OrientationBias,
    errors::{ConfigError, GenerateError},
};

mod config;
mod difficulty;
mod distributions;
mod errors;

/// Builds scrambled boards according to a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    orientation: OrientationBias,
    difficulty: Difficulty,
}

impl Generator {
    /// Construct a generator, validating the config.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let orientation = OrientationBias::new(config.vertical_probability)
            .map_err(|_| ConfigError::VerticalProbability(config.vertical_probability))?;
        let difficulty = Difficulty::new(config.min_blockers);
        Ok(Self {
            config,
            orientation,
            difficulty,
        })
    }

    /// Get the config this generator was built from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Get the difficulty check applied to generated boards.
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// Generate a board with `vehicle_count` vehicles besides the goal. Never fails:
    /// when every attempt is rejected, the [fallback layout][Generator::fallback] is
    /// returned instead.
    pub fn generate<R: Rng>(&self, vehicle_count: usize, rng: &mut R) -> Board {
        match self.try_generate(vehicle_count, rng) {
            Ok(board) => board,
            Err(err) => {
                warn!(vehicle_count, %err, "using fallback layout");
                self.fallback()
            }
        }
    }

    /// Generate a board with `vehicle_count` vehicles besides the goal, giving up after
    /// the configured number of attempts.
    pub fn try_generate<R: Rng>(
        &self,
        vehicle_count: usize,
        rng: &mut R,
    ) -> Result<Board, GenerateError> {
        for attempt in 1..=self.config.max_attempts {
            let mut board = match self.place(vehicle_count, rng) {
                Ok(board) => board,
                Err(err) => {
                    trace!(attempt, reason = %err.reason(), "placement rejected");
                    continue;
                }
            };
            self.scramble(&mut board, rng);
            let column = board.goal().position().x;
            if column != 0 {
                trace!(attempt, column, "goal vehicle did not reach the left edge");
                continue;
            }
            if self.difficulty.is_too_easy(&board) {
                trace!(attempt, "board too easy");
                continue;
            }
            debug!(attempt, vehicles = board.len(), "generated board");
            return Ok(board);
        }
        Err(GenerateError::RetryLimit {
            attempts: self.config.max_attempts,
        })
    }

    /// Park the goal vehicle at its start cell and drop `vehicle_count` random vehicles
    /// around it. Fails on the first vehicle that overlaps another.
    fn place<R: Rng>(
        &self,
        vehicle_count: usize,
        rng: &mut R,
    ) -> Result<Board, PlaceError<Vehicle>> {
        let dim = self.config.dimensions;
        let mut setup = BoardSetup::new(dim);
        setup.place_goal(Vehicle::new(
            Coordinate::new(self.config.goal_start_column, dim.exit_row()),
            self.config.goal_kind,
            Orientation::Horizontal,
        ))?;
        for _ in 0..vehicle_count {
            setup.add_vehicle(self.random_vehicle(rng))?;
        }
        match setup.start() {
            Ok(board) => Ok(board),
            Err(_) => unreachable!("goal vehicle was placed"),
        }
    }

    /// Pick a random vehicle that fits on the board. Horizontal vehicles stay off the
    /// exit row.
    fn random_vehicle<R: Rng>(&self, rng: &mut R) -> Vehicle {
        let dim = &self.config.dimensions;
        let kind: VehicleKind = rng.gen();
        let orientation = self.orientation.sample(rng);
        let position = match orientation {
            Orientation::Horizontal => {
                let mut y = rng.gen_range(0, dim.height() - 1);
                if y >= dim.exit_row() {
                    y += 1;
                }
                Coordinate::new(rng.gen_range(0, dim.width() - kind.len() + 1), y)
            }
            Orientation::Vertical => Coordinate::new(
                rng.gen_range(0, dim.width()),
                rng.gen_range(0, dim.height() - kind.len() + 1),
            ),
        };
        Vehicle::new(position, kind, orientation)
    }

    /// Try the configured number of random single-cell moves on random vehicles,
    /// applying the legal ones. The goal vehicle stays put once it reaches column 0.
    pub fn scramble<R: Rng>(&self, board: &mut Board, rng: &mut R) {
        for _ in 0..self.config.scramble_moves {
            let id = VehicleId(rng.gen_range(0, board.len()));
            if id == VehicleId::GOAL && board.goal().position().x == 0 {
                continue;
            }
            let step: Step = rng.gen();
            if board.can_move(id, step) {
                board.move_vehicle(id, step);
            }
        }
    }

    /// The layout used when generation gives up: the goal vehicle against the left edge
    /// with upright cars standing on the exit lane right in front of it, one per
    /// required blocker.
    pub fn fallback(&self) -> Board {
        match self.build_fallback() {
            Ok(board) => board,
            // validate() guarantees the lane and rows needed here.
            Err(err) => unreachable!("fallback layout rejected: {}", err),
        }
    }

    fn build_fallback(&self) -> Result<Board, PlaceError<Vehicle>> {
        let dim = self.config.dimensions;
        let goal_len = self.config.goal_kind.len();
        let blocker_len = VehicleKind::Car.len();
        let row = if dim.exit_row() + blocker_len <= dim.height() {
            dim.exit_row()
        } else {
            dim.exit_row() + 1 - blocker_len
        };

        let mut setup = BoardSetup::new(dim);
        setup.place_goal(Vehicle::new(
            Coordinate::new(0, dim.exit_row()),
            self.config.goal_kind,
            Orientation::Horizontal,
        ))?;
        for i in 0..self.config.min_blockers.max(1) {
            setup.add_vehicle(Vehicle::new(
                Coordinate::new(goal_len + i, row),
                VehicleKind::Car,
                Orientation::Vertical,
            ))?;
        }
        match setup.start() {
            Ok(board) => Ok(board),
            Err(_) => unreachable!("goal vehicle was placed"),
        }
    }
}
