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

//! Board model for a Rush Hour style sliding-car puzzle.
//!
//! Cars and trucks are parked on a small grid. Each one can only roll forward or
//! backward along its own axis, one cell at a time, and may neither leave the board nor
//! run into another vehicle. The player wins by getting the goal vehicle out through the
//! exit on the right edge of its row.
//!
//! [`board`] holds the geometry, move validation and win detection. With the `rng_gen`
//! feature (on by default), [`generate`] deals scrambled starting boards and [`game`]
//! wraps everything into a [`GameSession`][game::GameSession] for front ends.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use rushhour::{
//!     game::GameSession,
//!     generate::GeneratorConfig,
//!     vehicles::{Direction, VehicleId},
//! };
//!
//! let mut game = GameSession::new(GeneratorConfig::default(), StdRng::seed_from_u64(1))?;
//! assert_eq!(game.board().goal().position().x, 0);
//! assert!(!game.try_move(VehicleId::GOAL, Direction::Left));
//! assert!(!game.check_win());
//! # Ok::<(), rushhour::generate::ConfigError>(())
//! ```

pub mod board;
#[cfg(feature = "rng_gen")]
pub mod game;
#[cfg(feature = "rng_gen")]
pub mod generate;
pub mod vehicles;
