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

//! Configuration of the board generator.
use crate::{board::BoardDimensions, generate::ConfigError, vehicles::VehicleKind};

/// Settings for [`Generator`][crate::generate::Generator]. Start from
/// [`GeneratorConfig::default`] and override fields as needed; the generator validates
/// the result when it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Size of generated boards and position of the exit.
    pub dimensions: BoardDimensions,

    /// Number of vehicles placed next to the goal vehicle in a new game.
    pub vehicle_count: usize,

    /// Kind of the goal vehicle.
    pub goal_kind: VehicleKind,

    /// Column the goal vehicle is parked at before scrambling.
    pub goal_start_column: usize,

    /// Chance that a placed vehicle stands upright.
    pub vertical_probability: f64,

    /// Number of random single-cell moves tried after placement.
    pub scramble_moves: usize,

    /// Placement attempts allowed before giving up and using the fallback layout.
    pub max_attempts: usize,

    /// Minimum number of vehicles between the goal vehicle and the exit.
    pub min_blockers: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimensions: BoardDimensions::default(),
            vehicle_count: 6,
            goal_kind: VehicleKind::Car,
            goal_start_column: 4,
            vertical_probability: 0.7,
            scramble_moves: 10_000,
            max_attempts: 1_000,
            min_blockers: 1,
        }
    }
}

impl GeneratorConfig {
    /// Smallest board side that fits a truck in either orientation.
    pub const MIN_SIDE: usize = 3;

    /// Check that the generator can work with these settings, including building its
    /// fallback layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dim = &self.dimensions;
        if dim.width() < Self::MIN_SIDE || dim.height() < Self::MIN_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: dim.width(),
                height: dim.height(),
            });
        }
        let goal_len = self.goal_kind.len();
        if goal_len >= dim.width() || self.goal_start_column + goal_len > dim.width() {
            return Err(ConfigError::GoalDoesNotFit {
                column: self.goal_start_column,
                length: goal_len,
                width: dim.width(),
            });
        }
        if !(0.0..=1.0).contains(&self.vertical_probability) {
            return Err(ConfigError::VerticalProbability(self.vertical_probability));
        }
        if self.vehicle_count == 0 {
            return Err(ConfigError::NoVehicles);
        }
        if self.min_blockers > self.vehicle_count {
            return Err(ConfigError::MoreBlockersThanVehicles {
                min_blockers: self.min_blockers,
                vehicle_count: self.vehicle_count,
            });
        }
        let lane = dim.width() - goal_len;
        if self.min_blockers > lane {
            return Err(ConfigError::MoreBlockersThanLane {
                min_blockers: self.min_blockers,
                lane,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_each_bad_field() {
        let base = GeneratorConfig::default();

        let config = GeneratorConfig {
            dimensions: BoardDimensions::new(2, 6, 0),
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooSmall {
                width: 2,
                height: 6
            })
        );

        let config = GeneratorConfig {
            goal_start_column: 5,
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GoalDoesNotFit { column: 5, .. })
        ));

        let config = GeneratorConfig {
            vertical_probability: 1.5,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::VerticalProbability(1.5)));

        let config = GeneratorConfig {
            vehicle_count: 0,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoVehicles));

        let config = GeneratorConfig {
            vehicle_count: 2,
            min_blockers: 3,
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MoreBlockersThanVehicles { .. })
        ));

        let config = GeneratorConfig {
            vehicle_count: 8,
            min_blockers: 5,
            ..base
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MoreBlockersThanLane {
                min_blockers: 5,
                lane: 4
            })
        );
    }
}
