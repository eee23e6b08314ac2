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

//! Types that make up the game board.

use enumflags2::BitFlags;

use crate::vehicles::{Direction, Step, Vehicle, VehicleId};

pub use self::{
    coordinate::Coordinate,
    dimensions::BoardDimensions,
    errors::{CannotMoveReason, CannotPlaceReason, MoveError, PlaceError},
    rect::Rect,
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod rect;
pub mod setup;

/// A settled board: vehicles fit on the board, none overlap, and the goal vehicle is
/// id 0, horizontal, on the exit row. Built through [`BoardSetup`]. Moving vehicles
/// through [`Board::check_move`] and [`Board::move_vehicle`] keeps it settled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Size of the board and position of the exit.
    dim: BoardDimensions,

    /// Vehicles indexed by [`VehicleId`]. Index 0 is the goal vehicle.
    vehicles: Vec<Vehicle>,
}

impl Board {
    /// Get the [`BoardDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &BoardDimensions {
        &self.dim
    }

    /// Number of vehicles on the board, including the goal.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// A settled board always has its goal vehicle, so it is never empty.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// All vehicles in id order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Get an iterator over all vehicles on this board along with their ids.
    pub fn iter_vehicles(&self) -> impl Iterator<Item = (VehicleId, &Vehicle)> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(i, vehicle)| (VehicleId(i), vehicle))
    }

    /// Get the vehicle with the given id if it exists.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    /// The vehicle that has to reach the exit.
    pub fn goal(&self) -> &Vehicle {
        // Setup never produces a board without a goal.
        &self.vehicles[VehicleId::GOAL.index()]
    }

    /// Check whether `id` could take `step`. On success, returns the position the
    /// vehicle would end up at. Never modifies the board.
    pub fn check_move(&self, id: VehicleId, step: Step) -> Result<Coordinate, MoveError> {
        let vehicle = self
            .vehicle(id)
            .ok_or_else(|| MoveError::new(CannotMoveReason::UnknownVehicle, id, step))?;
        let position = vehicle
            .shifted(step)
            .ok_or_else(|| MoveError::new(CannotMoveReason::OutOfBounds, id, step))?;
        let footprint = vehicle.footprint_at(position);
        if !self.dim.within_bounds(&footprint) {
            return Err(MoveError::new(CannotMoveReason::OutOfBounds, id, step));
        }
        match self
            .iter_vehicles()
            .find(|&(other, vehicle)| other != id && vehicle.footprint().overlaps(&footprint))
        {
            Some((other, _)) => Err(MoveError::new(
                CannotMoveReason::Collision(other),
                id,
                step,
            )),
            None => Ok(position),
        }
    }

    /// Returns true if `id` can take `step` without leaving the board or hitting
    /// another vehicle.
    pub fn can_move(&self, id: VehicleId, step: Step) -> bool {
        self.check_move(id, step).is_ok()
    }

    /// Move `id` one cell along its axis without checking anything. Callers are
    /// expected to have checked the step with [`Board::can_move`] first.
    ///
    /// Panics if `id` is not on the board or the step would leave the coordinate space.
    pub fn move_vehicle(&mut self, id: VehicleId, step: Step) {
        let vehicle = match self.vehicles.get_mut(id.index()) {
            Some(vehicle) => vehicle,
            None => panic!("{} is not on this board", id),
        };
        match vehicle.shifted(step) {
            Some(position) => vehicle.set_position(position),
            None => panic!("{} cannot step {:?} past the origin", id, step),
        }
    }

    /// The directions `id` can currently move in. Empty for unknown ids.
    pub fn legal_moves(&self, id: VehicleId) -> BitFlags<Direction> {
        let mut moves = BitFlags::empty();
        if let Some(vehicle) = self.vehicle(id) {
            for &step in Step::ALL {
                if self.can_move(id, step) {
                    moves.insert(vehicle.orientation().direction(step));
                }
            }
        }
        moves
    }

    /// Find the first vehicle, in id order, that covers the given cell.
    pub fn vehicle_at(&self, coord: Coordinate) -> Option<VehicleId> {
        self.iter_vehicles()
            .find(|(_, vehicle)| vehicle.contains(coord))
            .map(|(id, _)| id)
    }

    /// The cells of the exit row between the goal vehicle and the exit.
    pub fn exit_lane(&self) -> Rect {
        let goal = self.goal();
        self.dim.exit_lane(goal.position().x + goal.len())
    }

    /// Ids of the vehicles standing between the goal vehicle and the exit.
    pub fn blockers(&self) -> impl Iterator<Item = VehicleId> + '_ {
        let lane = self.exit_lane();
        self.iter_vehicles()
            .skip(1)
            .filter(move |(_, vehicle)| vehicle.footprint().overlaps(&lane))
            .map(|(id, _)| id)
    }

    /// Returns true once the goal vehicle has reached the right edge of the board.
    pub fn is_won(&self) -> bool {
        let goal = self.goal();
        goal.position().x + goal.len() >= self.dim.width()
    }

    /// Find a pair of vehicles whose footprints overlap, if there is one.
    pub fn overlapping_pair(&self) -> Option<(VehicleId, VehicleId)> {
        self.iter_vehicles().find_map(|(a, first)| {
            self.iter_vehicles()
                .skip(a.index() + 1)
                .find(|(_, second)| first.footprint().overlaps(&second.footprint()))
                .map(|(b, _)| (a, b))
        })
    }

    /// Get an iterator over rows of this board. Each row iterates the id of the vehicle
    /// covering each cell, if any.
    pub fn iter_board(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Option<VehicleId>>> {
        self.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self.vehicle_at(coord)))
    }
}
