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

//! Decorative identity of vehicles, for renderers.
use crate::vehicles::VehicleId;

/// Colors handed out to non-goal vehicles, in order of their ids.
pub const PALETTE: [&str; 19] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#FFFF33", "#33FFF3", "#FF8C33", "#33FFA5",
    "#8C33FF", "#FFB533", "#33D4FF", "#7FFF33", "#FF33F6", "#33FFCC", "#FF6633", "#FF33FF",
    "#33FF66", "#3366FF", "#FF3385",
];

/// Color of the goal vehicle.
pub const GOAL_COLOR: &str = "#FF0000";

/// Opaque key a renderer can use to pick a color or sprite for a vehicle. Fixed for the
/// lifetime of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VisualKey(usize);

impl VisualKey {
    /// Key of the vehicle with the given id.
    pub fn of(id: VehicleId) -> Self {
        VisualKey(id.index())
    }

    /// Raw key value. 0 is the goal vehicle.
    pub fn get(self) -> usize {
        self.0
    }

    /// Hex color for this key. Keys past the end of the palette wrap around.
    pub fn color(self) -> &'static str {
        match self.0 {
            0 => GOAL_COLOR,
            n => PALETTE[(n - 1) % PALETTE.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_red_and_others_cycle() {
        assert_eq!(VisualKey::of(VehicleId::GOAL).color(), GOAL_COLOR);
        assert_eq!(VisualKey::of(VehicleId(1)).color(), PALETTE[0]);
        assert_eq!(VisualKey::of(VehicleId(20)).color(), PALETTE[0]);
    }
}
