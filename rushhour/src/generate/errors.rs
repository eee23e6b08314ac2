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

//! Errors reported by the board generator.
use thiserror::Error;

/// Rejected [`GeneratorConfig`][crate::generate::GeneratorConfig].
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum ConfigError {
    /// One side of the board cannot hold a truck.
    #[error("board of {width}x{height} is too small, both sides need at least 3 cells")]
    BoardTooSmall { width: usize, height: usize },

    /// The goal vehicle does not fit on its row at its start column, or fills the whole
    /// row.
    #[error("goal vehicle of length {length} at column {column} does not fit a board {width} wide")]
    GoalDoesNotFit {
        column: usize,
        length: usize,
        width: usize,
    },

    /// The orientation bias is not a probability.
    #[error("vertical probability must be in [0, 1], got {0}")]
    VerticalProbability(f64),

    /// A game needs at least one vehicle next to the goal.
    #[error("at least one vehicle is required")]
    NoVehicles,

    /// The difficulty check can never be met with this few vehicles.
    #[error("{min_blockers} blockers requested but only {vehicle_count} vehicles")]
    MoreBlockersThanVehicles {
        min_blockers: usize,
        vehicle_count: usize,
    },

    /// More blockers than there are cells between the goal and the exit.
    #[error("{min_blockers} blockers requested but the exit lane is only {lane} cells long")]
    MoreBlockersThanLane { min_blockers: usize, lane: usize },
}

/// Failure to produce an acceptable board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GenerateError {
    /// Every allowed attempt was rejected.
    #[error("no acceptable board after {attempts} attempts")]
    RetryLimit { attempts: usize },
}
