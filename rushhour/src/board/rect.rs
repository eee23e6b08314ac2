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

//! Axis-aligned rectangles measured in grid cells.
use crate::board::Coordinate;

/// A rectangle of cells. Covers the half-open ranges `[x, x + width)` and
/// `[y, y + height)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: usize,
    /// Top edge.
    pub y: usize,
    /// Number of columns covered.
    pub width: usize,
    /// Number of rows covered.
    pub height: usize,
}

impl Rect {
    /// Construct a rectangle with its top-left corner at `origin`.
    pub const fn new(origin: Coordinate, width: usize, height: usize) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// One past the last covered column. Saturates at `usize::MAX`.
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// One past the last covered row. Saturates at `usize::MAX`.
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// True if the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether the given cell lies inside this rectangle.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.x..self.right()).contains(&coord.x) && (self.y..self.bottom()).contains(&coord.y)
    }

    /// Returns true if the two rectangles share at least one cell. Rectangles that
    /// only touch along an edge do not overlap, and empty rectangles overlap nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: usize, y: usize, width: usize, height: usize) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect(0, 2, 2, 1);
        assert!(!a.overlaps(&rect(2, 0, 1, 3)));
        assert!(!a.overlaps(&rect(0, 3, 2, 1)));
        assert!(a.overlaps(&rect(1, 1, 1, 2)));
    }

    #[test]
    fn empty_rect_overlaps_nothing() {
        let lane = rect(3, 2, 0, 1);
        assert!(!lane.overlaps(&rect(0, 0, 6, 6)));
        assert!(!rect(0, 0, 6, 6).overlaps(&lane));
    }

    #[test]
    fn edges_saturate_at_the_end_of_the_coordinate_space() {
        let far = rect(usize::MAX, usize::MAX - 1, 2, 3);
        assert_eq!(far.right(), usize::MAX);
        assert_eq!(far.bottom(), usize::MAX);
        assert!(!far.overlaps(&rect(0, 0, 6, 6)));
        assert!(!far.contains(Coordinate::new(0, 0)));
    }

    #[test]
    fn contains_is_half_open() {
        let r = rect(1, 1, 1, 2);
        assert!(r.contains(Coordinate::new(1, 1)));
        assert!(r.contains(Coordinate::new(1, 2)));
        assert!(!r.contains(Coordinate::new(1, 3)));
        assert!(!r.contains(Coordinate::new(2, 1)));
    }
}
