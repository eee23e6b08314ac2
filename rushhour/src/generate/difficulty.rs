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

//! Cheap structural stand-in for a difficulty rating.
use crate::board::Board;

/// Rejects boards the goal vehicle could drive straight out of. A board is too easy when
/// fewer than `min_blockers` vehicles stand on the exit lane, the part of the exit row
/// between the goal vehicle and the exit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Difficulty {
    pub min_blockers: usize,
}

impl Difficulty {
    pub fn new(min_blockers: usize) -> Self {
        Self { min_blockers }
    }

    /// Returns true if the board does not have enough vehicles in the goal's way.
    pub fn is_too_easy(&self, board: &Board) -> bool {
        board.blockers().take(self.min_blockers).count() < self.min_blockers
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new(1)
    }
}
