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

//! Implements the setup phase of the board.
use crate::{
    board::{Board, BoardDimensions, CannotPlaceReason, PlaceError},
    vehicles::{Orientation, Vehicle, VehicleId},
};

/// Setup phase for a [`Board`]. Collects vehicles, rejecting any that do not fit or
/// that overlap a vehicle already placed.
///
/// The goal vehicle always gets id 0. Other vehicles get ids from 1 upwards in the
/// order they are added, whether or not the goal has been placed yet.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Dimensions of the board being set up.
    dim: BoardDimensions,

    /// The vehicle that has to reach the exit, once placed.
    goal: Option<Vehicle>,

    /// All other vehicles, in id order starting from 1.
    others: Vec<Vehicle>,
}

impl BoardSetup {
    /// Begin setup of an empty board with the given [`BoardDimensions`].
    pub fn new(dim: BoardDimensions) -> Self {
        Self {
            dim,
            goal: None,
            others: Vec::new(),
        }
    }

    /// Get the [`BoardDimensions`] of the board being set up.
    pub fn dimensions(&self) -> &BoardDimensions {
        &self.dim
    }

    /// Returns true once the goal vehicle has been placed.
    pub fn ready(&self) -> bool {
        self.goal.is_some()
    }

    /// Number of vehicles placed so far, including the goal.
    pub fn len(&self) -> usize {
        self.others.len() + self.goal.iter().count()
    }

    /// Returns true if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the placed vehicles along with the ids they will have on the board.
    pub fn iter_vehicles(&self) -> impl Iterator<Item = (VehicleId, &Vehicle)> {
        self.goal
            .iter()
            .map(|goal| (VehicleId::GOAL, goal))
            .chain(
                self.others
                    .iter()
                    .enumerate()
                    .map(|(i, vehicle)| (VehicleId(i + 1), vehicle)),
            )
    }

    /// Check if the given vehicle could be placed, without placing it.
    pub fn check_placement(&self, vehicle: &Vehicle) -> Result<(), CannotPlaceReason> {
        let footprint = vehicle.footprint();
        if !self.dim.within_bounds(&footprint) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
        match self
            .iter_vehicles()
            .find(|(_, other)| other.footprint().overlaps(&footprint))
        {
            Some((id, _)) => Err(CannotPlaceReason::AlreadyOccupied(id)),
            None => Ok(()),
        }
    }

    /// Place the goal vehicle. It has to be horizontal and on the exit row.
    pub fn place_goal(&mut self, mut vehicle: Vehicle) -> Result<VehicleId, PlaceError<Vehicle>> {
        let checked = if self.goal.is_some() {
            Err(CannotPlaceReason::GoalAlreadyPlaced)
        } else if vehicle.orientation() != Orientation::Horizontal {
            Err(CannotPlaceReason::GoalNotHorizontal)
        } else if vehicle.position().y != self.dim.exit_row() {
            Err(CannotPlaceReason::GoalOffExitRow)
        } else {
            self.check_placement(&vehicle)
        };
        match checked {
            Err(reason) => Err(PlaceError::new(reason, vehicle)),
            Ok(()) => {
                vehicle.goal = true;
                self.goal = Some(vehicle);
                Ok(VehicleId::GOAL)
            }
        }
    }

    /// Place a regular vehicle, returning the id it was given.
    pub fn add_vehicle(&mut self, mut vehicle: Vehicle) -> Result<VehicleId, PlaceError<Vehicle>> {
        match self.check_placement(&vehicle) {
            Err(reason) => Err(PlaceError::new(reason, vehicle)),
            Ok(()) => {
                vehicle.goal = false;
                self.others.push(vehicle);
                Ok(VehicleId(self.others.len()))
            }
        }
    }

    /// Tries to finish setup. If the goal vehicle has been placed, returns a [`Board`]
    /// with the current placements. Otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        match self.goal {
            None => Err(self),
            Some(goal) => {
                let mut vehicles = Vec::with_capacity(self.others.len() + 1);
                vehicles.push(goal);
                vehicles.extend(self.others);
                Ok(Board {
                    dim: self.dim,
                    vehicles,
                })
            }
        }
    }
}
