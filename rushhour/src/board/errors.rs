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

//! Errors used by the `Board` and `BoardSetup`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::vehicles::{Step, VehicleId};

/// Reason why a vehicle could not be placed during setup.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the vehicle would stick out of the board.
    #[error("the vehicle does not fit on the board at that position")]
    OutOfBounds,
    /// One or more of the cells was already covered by the given vehicle.
    #[error("the requested position overlaps vehicle {0}")]
    AlreadyOccupied(VehicleId),
    /// A goal vehicle was already placed on this board.
    #[error("the goal vehicle was already placed")]
    GoalAlreadyPlaced,
    /// The goal vehicle has to drive towards the exit on the right edge.
    #[error("the goal vehicle must be horizontal")]
    GoalNotHorizontal,
    /// The goal vehicle has to sit on the exit row.
    #[error("the goal vehicle must be on the exit row")]
    GoalOffExitRow,
}

/// Error caused when attempting to place a vehicle in an invalid position.
#[derive(Error)]
#[error("could not place vehicle: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    placement: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason and the rejected placement.
    pub(super) fn new(reason: CannotPlaceReason, placement: P) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the vehicle whose placement was attempted.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Extract the rejected placement from this error.
    pub fn into_placement(self) -> P {
        self.placement
    }
}

/// Reason why a vehicle could not take a step.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// No vehicle with that id is on the board.
    #[error("no such vehicle")]
    UnknownVehicle,
    /// The vehicle would leave the board.
    #[error("the vehicle would leave the board")]
    OutOfBounds,
    /// The vehicle would run into another vehicle.
    #[error("the vehicle would hit vehicle {0}")]
    Collision(VehicleId),
}

/// Error returned when checking a step that is not allowed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("vehicle {id} cannot step {step:?}: {reason}")]
pub struct MoveError {
    /// Reason why the step was rejected.
    reason: CannotMoveReason,

    /// The vehicle that was asked to move.
    id: VehicleId,

    /// The rejected step.
    step: Step,
}

impl MoveError {
    /// Construct a move error with the given reason for the given vehicle and step.
    pub(super) fn new(reason: CannotMoveReason, id: VehicleId, step: Step) -> Self {
        Self { reason, id, step }
    }

    /// Get the reason the step was rejected.
    pub fn reason(&self) -> CannotMoveReason {
        self.reason
    }

    /// Get the id of the vehicle that was asked to move.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Get the step that was rejected.
    pub fn step(&self) -> Step {
        self.step
    }
}
