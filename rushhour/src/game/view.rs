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

use crate::{
    board::Coordinate,
    vehicles::{Orientation, Vehicle, VehicleId, VisualKey},
};

/// What a renderer needs to draw one vehicle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VehicleView {
    pub id: VehicleId,
    /// Top-left cell.
    pub position: Coordinate,
    /// Length in cells.
    pub length: usize,
    pub orientation: Orientation,
    /// Whether this is the vehicle that has to reach the exit.
    pub goal: bool,
    /// Whether the player has this vehicle selected.
    pub selected: bool,
    /// Stable decorative identity, for picking colors or sprites.
    pub visual_key: VisualKey,
}

impl VehicleView {
    pub(super) fn new(id: VehicleId, vehicle: &Vehicle, selected: bool) -> Self {
        Self {
            id,
            position: vehicle.position(),
            length: vehicle.len(),
            orientation: vehicle.orientation(),
            goal: vehicle.is_goal(),
            selected,
            visual_key: VisualKey::of(id),
        }
    }
}
