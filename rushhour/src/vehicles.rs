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

//! Types describing the vehicles parked on the board.
use std::fmt;

use crate::board::{Coordinate, Rect};

pub use self::{
    direction::Direction,
    palette::{VisualKey, GOAL_COLOR, PALETTE},
};

mod direction;
mod palette;

/// Index of a vehicle within its board. The goal vehicle is always id 0. Ids are
/// assigned in the order vehicles are added during setup and never change afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VehicleId(pub usize);

impl VehicleId {
    /// Id of the goal vehicle.
    pub const GOAL: VehicleId = VehicleId(0);

    /// Position of this vehicle in the board's collection.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kinds of vehicle. Kind only determines length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VehicleKind {
    /// Car: length 2.
    Car,
    /// Truck: length 3.
    Truck,
}

impl VehicleKind {
    /// All vehicle kinds.
    pub const ALL: &'static [VehicleKind] = &[VehicleKind::Car, VehicleKind::Truck];

    /// Get the length of this vehicle kind in cells.
    pub fn len(self) -> usize {
        match self {
            VehicleKind::Car => 2,
            VehicleKind::Truck => 3,
        }
    }
}

/// Axis a vehicle is parked along. Vehicles only ever move along their own axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell offset `(dx, dy)` of a single step in this orientation.
    pub fn delta(self, step: Step) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (step.offset(), 0),
            Orientation::Vertical => (0, step.offset()),
        }
    }

    /// The screen direction a step points to in this orientation.
    pub fn direction(self, step: Step) -> Direction {
        match (self, step) {
            (Orientation::Horizontal, Step::Backward) => Direction::Left,
            (Orientation::Horizontal, Step::Forward) => Direction::Right,
            (Orientation::Vertical, Step::Backward) => Direction::Up,
            (Orientation::Vertical, Step::Forward) => Direction::Down,
        }
    }
}

/// A single-cell move along a vehicle's axis. Backward is towards smaller
/// coordinates (left or up), forward towards larger ones (right or down).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Step {
    Backward,
    Forward,
}

impl Step {
    /// Both steps.
    pub const ALL: &'static [Step] = &[Step::Backward, Step::Forward];

    /// Signed cell offset of the step.
    pub fn offset(self) -> isize {
        match self {
            Step::Backward => -1,
            Step::Forward => 1,
        }
    }
}

/// A vehicle on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Vehicle {
    /// Top-left cell covered by the vehicle.
    position: Coordinate,
    kind: VehicleKind,
    orientation: Orientation,
    /// Set by the board setup on the single vehicle that has to reach the exit.
    pub(crate) goal: bool,
}

impl Vehicle {
    /// Construct a vehicle of the given kind and orientation with its top-left cell at
    /// `position`.
    pub fn new(position: Coordinate, kind: VehicleKind, orientation: Orientation) -> Self {
        Self {
            position,
            kind,
            orientation,
            goal: false,
        }
    }

    /// Top-left cell of the vehicle.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Length of the vehicle in cells.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether this is the vehicle that has to reach the exit.
    pub fn is_goal(&self) -> bool {
        self.goal
    }

    /// The cells this vehicle covers at its current position.
    pub fn footprint(&self) -> Rect {
        self.footprint_at(self.position)
    }

    /// The cells this vehicle would cover if its top-left cell was at `position`.
    pub fn footprint_at(&self, position: Coordinate) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::new(position, self.len(), 1),
            Orientation::Vertical => Rect::new(position, 1, self.len()),
        }
    }

    /// Check whether the vehicle covers the given cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.footprint().contains(coord)
    }

    /// Position the vehicle would have after taking `step`, or `None` if that would
    /// leave the coordinate space.
    pub fn shifted(&self, step: Step) -> Option<Coordinate> {
        let (dx, dy) = self.orientation.delta(step);
        self.position.offset(dx, dy)
    }

    /// Overwrite the position. Only the board moves vehicles.
    pub(crate) fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_follows_orientation() {
        let car = Vehicle::new(
            Coordinate::new(0, 2),
            VehicleKind::Car,
            Orientation::Horizontal,
        );
        assert_eq!(car.footprint(), Rect::new(Coordinate::new(0, 2), 2, 1));
        assert_eq!(car.footprint(), car.footprint());

        let truck = Vehicle::new(
            Coordinate::new(3, 1),
            VehicleKind::Truck,
            Orientation::Vertical,
        );
        assert_eq!(truck.footprint(), Rect::new(Coordinate::new(3, 1), 1, 3));
        assert!(truck.contains(Coordinate::new(3, 3)));
        assert!(!truck.contains(Coordinate::new(3, 4)));
    }

    #[test]
    fn shift_moves_along_own_axis() {
        let truck = Vehicle::new(
            Coordinate::new(3, 0),
            VehicleKind::Truck,
            Orientation::Vertical,
        );
        assert_eq!(truck.shifted(Step::Forward), Some(Coordinate::new(3, 1)));
        assert_eq!(truck.shifted(Step::Backward), None);
    }

    #[test]
    fn steps_point_along_the_axis() {
        assert_eq!(
            Orientation::Horizontal.direction(Step::Backward),
            Direction::Left
        );
        assert_eq!(Orientation::Vertical.direction(Step::Forward), Direction::Down);
        assert_eq!(Orientation::Vertical.delta(Step::Backward), (0, -1));
    }
}
