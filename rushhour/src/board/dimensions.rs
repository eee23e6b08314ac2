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

//! Size of the board and the position of its exit.
use crate::board::{Coordinate, Rect};

/// Dimensions of a rectangular board with a single exit on the right edge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardDimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
    /// Row whose right edge is open. The goal vehicle drives along this row.
    exit_row: usize,
}

impl BoardDimensions {
    /// Create new [`BoardDimensions`] with the specified width, height, and exit row.
    /// Panics if `width` or `height` is 0, `width * height` exceeds `usize::max_value()`,
    /// or `exit_row` is not a row of the board.
    pub fn new(width: usize, height: usize, exit_row: usize) -> Self {
        match Self::try_new(width, height, exit_row) {
            Some(dim) => dim,
            None => panic!(
                "invalid board dimensions: {}x{} with exit on row {}",
                width, height, exit_row
            ),
        }
    }

    /// Create new [`BoardDimensions`] with the specified width, height, and exit row.
    /// Returns `None` if `width` or `height` is 0, `width * height` exceeds
    /// `usize::max_value()`, or `exit_row` is not a row of the board.
    pub fn try_new(width: usize, height: usize, exit_row: usize) -> Option<Self> {
        if width == 0 || height == 0 || exit_row >= height {
            None
        } else {
            width.checked_mul(height).map(|_| Self {
                width,
                height,
                exit_row,
            })
        }
    }

    /// Get the width of these [`BoardDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`BoardDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the row that leads to the exit.
    pub fn exit_row(&self) -> usize {
        self.exit_row
    }

    /// Check whether `rect` lies entirely on the board.
    pub fn within_bounds(&self, rect: &Rect) -> bool {
        rect.x <= self.width
            && rect.width <= self.width - rect.x
            && rect.y <= self.height
            && rect.height <= self.height - rect.y
    }

    /// Check if the given [`Coordinate`] is on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// The strip of the exit row from `column` up to the right edge. Empty if `column`
    /// is at or past the edge.
    pub fn exit_lane(&self, column: usize) -> Rect {
        let x = column.min(self.width);
        Rect::new(Coordinate::new(x, self.exit_row), self.width - x, 1)
    }

    /// Map a point in pixels to the cell under it, given the side length of a cell in
    /// pixels. Returns `None` for points outside the board.
    pub fn cell_at_pixel(&self, px: f64, py: f64, cell_size: f64) -> Option<Coordinate> {
        if !(cell_size > 0.0) || !(px >= 0.0) || !(py >= 0.0) {
            return None;
        }
        let coord = Coordinate::new((px / cell_size) as usize, (py / cell_size) as usize);
        if self.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }
}

impl Default for BoardDimensions {
    /// The classic board: 6x6 with the exit on the third row.
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            exit_row: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_boards() {
        assert!(BoardDimensions::try_new(0, 6, 0).is_none());
        assert!(BoardDimensions::try_new(6, 0, 0).is_none());
        assert!(BoardDimensions::try_new(6, 6, 6).is_none());
        assert!(BoardDimensions::try_new(usize::max_value(), 2, 0).is_none());
        assert_eq!(
            BoardDimensions::try_new(6, 6, 2),
            Some(BoardDimensions::default())
        );
    }

    #[test]
    fn bounds_check_covers_far_edges() {
        let dim = BoardDimensions::default();
        assert!(dim.within_bounds(&Rect::new(Coordinate::new(4, 2), 2, 1)));
        assert!(!dim.within_bounds(&Rect::new(Coordinate::new(5, 2), 2, 1)));
        assert!(!dim.within_bounds(&Rect::new(Coordinate::new(0, 4), 1, 3)));
    }

    #[test]
    fn bounds_check_rejects_rects_at_the_end_of_the_coordinate_space() {
        let dim = BoardDimensions::default();
        assert!(!dim.within_bounds(&Rect::new(Coordinate::new(usize::MAX, 0), 2, 1)));
        assert!(!dim.within_bounds(&Rect::new(Coordinate::new(0, usize::MAX), 1, 3)));
        assert!(!dim.within_bounds(&Rect::new(Coordinate::new(1, 0), usize::MAX, 1)));
    }

    #[test]
    fn exit_lane_runs_to_the_edge() {
        let dim = BoardDimensions::default();
        assert_eq!(dim.exit_lane(2), Rect::new(Coordinate::new(2, 2), 4, 1));
        assert!(dim.exit_lane(6).is_empty());
        assert!(dim.exit_lane(9).is_empty());
    }

    #[test]
    fn pixels_map_to_cells() {
        let dim = BoardDimensions::default();
        assert_eq!(
            dim.cell_at_pixel(150.0, 299.0, 100.0),
            Some(Coordinate::new(1, 2))
        );
        assert_eq!(dim.cell_at_pixel(600.0, 10.0, 100.0), None);
        assert_eq!(dim.cell_at_pixel(-1.0, 10.0, 100.0), None);
        assert_eq!(dim.cell_at_pixel(10.0, 10.0, 0.0), None);
    }
}
