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

//! A single player's game: the current board, the selected vehicle, and the generator
//! that deals new boards.
//!
//! [`GameSession`] is what a front end holds on to. Input handlers select vehicles and
//! ask for moves through it, renderers read [`GameSession::snapshot`], and nothing else
//! touches the board.
use rand::Rng;
use tracing::debug;

use crate::{
    board::{Board, Coordinate},
    generate::{ConfigError, Generator, GeneratorConfig},
    vehicles::{Direction, VehicleId},
};

pub use self::view::VehicleView;

mod view;

/// Owns the state of one game.
#[derive(Debug)]
pub struct GameSession<R> {
    /// Deals boards for new games.
    generator: Generator,

    /// Randomness used by the generator.
    rng: R,

    /// The board being played.
    board: Board,

    /// Vehicle currently picked by the player, if any. Always a vehicle of `board`.
    selected: Option<VehicleId>,

    /// Vehicle count of the current game, reused by [`GameSession::restart`].
    vehicle_count: usize,
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a first game of `config.vehicle_count` vehicles.
    pub fn new(config: GeneratorConfig, mut rng: R) -> Result<Self, ConfigError> {
        let vehicle_count = config.vehicle_count;
        let generator = Generator::new(config)?;
        let board = generator.generate(vehicle_count, &mut rng);
        Ok(Self {
            generator,
            rng,
            board,
            selected: None,
            vehicle_count,
        })
    }

    /// Replace the board with a freshly generated one holding `vehicle_count` vehicles
    /// besides the goal. Clears the selection.
    pub fn new_game(&mut self, vehicle_count: usize) {
        debug!(vehicle_count, "dealing new board");
        self.board = self.generator.generate(vehicle_count, &mut self.rng);
        self.selected = None;
        self.vehicle_count = vehicle_count;
    }

    /// Deal a new board with the same vehicle count as the current one.
    pub fn restart(&mut self) {
        self.new_game(self.vehicle_count);
    }
}

impl<R> GameSession<R> {
    /// Swap in a board built elsewhere. Clears the selection.
    pub fn replace_board(&mut self, board: Board) {
        self.vehicle_count = board.len() - 1;
        self.board = board;
        self.selected = None;
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Vehicle count of the current game, not counting the goal.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// The currently selected vehicle.
    pub fn selected(&self) -> Option<VehicleId> {
        self.selected
    }

    /// Select the first vehicle covering `coord`. A hit replaces any previous
    /// selection; a miss leaves the selection as it was and returns `None`.
    pub fn try_select(&mut self, coord: Coordinate) -> Option<VehicleId> {
        let hit = self.board.vehicle_at(coord);
        if hit.is_some() {
            self.selected = hit;
        }
        hit
    }

    /// Like [`GameSession::try_select`] for a point in pixels on a board drawn with
    /// square cells of `cell_size` pixels.
    pub fn try_select_pixel(&mut self, px: f64, py: f64, cell_size: f64) -> Option<VehicleId> {
        self.board
            .dimensions()
            .cell_at_pixel(px, py, cell_size)
            .and_then(|coord| self.try_select(coord))
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Move `id` one cell along its own axis. Up and left move it backward, down and
    /// right forward. Returns whether the move was made.
    pub fn try_move(&mut self, id: VehicleId, direction: Direction) -> bool {
        let step = direction.step();
        if self.board.can_move(id, step) {
            self.board.move_vehicle(id, step);
            true
        } else {
            false
        }
    }

    /// Move the selected vehicle. Returns false if nothing is selected or the move is
    /// blocked.
    pub fn move_selected(&mut self, direction: Direction) -> bool {
        match self.selected {
            Some(id) => self.try_move(id, direction),
            None => false,
        }
    }

    /// Returns true once the goal vehicle has reached the exit. The session does not
    /// deal a new board by itself.
    pub fn check_win(&self) -> bool {
        self.board.is_won()
    }

    /// Read-only view of every vehicle for rendering, in id order.
    pub fn snapshot(&self) -> Vec<VehicleView> {
        self.board
            .iter_vehicles()
            .map(|(id, vehicle)| VehicleView::new(id, vehicle, self.selected == Some(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{BoardDimensions, BoardSetup},
        vehicles::{Orientation, Vehicle, VehicleKind},
    };

    fn session() -> GameSession<StdRng> {
        let config = GeneratorConfig {
            scramble_moves: 500,
            vehicle_count: 3,
            ..GeneratorConfig::default()
        };
        GameSession::new(config, StdRng::seed_from_u64(17)).unwrap()
    }

    /// Goal at (0, 2), upright car at (2, 1) blocking it, truck along the bottom.
    fn blocked_board() -> Board {
        let mut setup = BoardSetup::new(BoardDimensions::default());
        setup
            .place_goal(Vehicle::new(
                Coordinate::new(0, 2),
                VehicleKind::Car,
                Orientation::Horizontal,
            ))
            .unwrap();
        setup
            .add_vehicle(Vehicle::new(
                Coordinate::new(2, 1),
                VehicleKind::Car,
                Orientation::Vertical,
            ))
            .unwrap();
        setup
            .add_vehicle(Vehicle::new(
                Coordinate::new(0, 5),
                VehicleKind::Truck,
                Orientation::Horizontal,
            ))
            .unwrap();
        setup.start().unwrap()
    }

    #[test]
    fn rejects_bad_config() {
        let config = GeneratorConfig {
            vehicle_count: 0,
            ..GeneratorConfig::default()
        };
        assert!(GameSession::new(config, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn single_selection() {
        let mut game = session();
        game.replace_board(blocked_board());
        assert_eq!(game.selected(), None);

        assert_eq!(game.try_select(Coordinate::new(2, 2)), Some(VehicleId(1)));
        assert_eq!(game.try_select(Coordinate::new(1, 5)), Some(VehicleId(2)));
        let selected: Vec<_> = game.snapshot().into_iter().filter(|v| v.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, VehicleId(2));

        // Empty cell keeps the selection.
        assert_eq!(game.try_select(Coordinate::new(4, 0)), None);
        assert_eq!(game.selected(), Some(VehicleId(2)));

        assert_eq!(game.try_select_pixel(50.0, 250.0, 100.0), Some(VehicleId::GOAL));
        game.deselect();
        assert_eq!(game.selected(), None);
        assert!(!game.move_selected(Direction::Right));
    }

    #[test]
    fn moves_follow_the_vehicle_axis() {
        let mut game = session();
        game.replace_board(blocked_board());
        assert!(!game.try_move(VehicleId::GOAL, Direction::Right));

        game.try_select(Coordinate::new(2, 1));
        // Left on an upright car means up.
        assert!(game.move_selected(Direction::Left));
        assert_eq!(
            game.board().vehicle(VehicleId(1)).unwrap().position(),
            Coordinate::new(2, 0)
        );
        assert!(!game.move_selected(Direction::Up));

        for _ in 0..4 {
            assert!(!game.check_win());
            assert!(game.try_move(VehicleId::GOAL, Direction::Right));
        }
        assert!(game.check_win());
        assert!(!game.try_move(VehicleId::GOAL, Direction::Right));
    }

    #[test]
    fn new_game_replaces_board_and_selection() {
        let mut game = session();
        game.replace_board(blocked_board());
        game.try_select(Coordinate::new(0, 2));
        game.new_game(4);
        assert_eq!(game.selected(), None);
        assert_eq!(game.vehicle_count(), 4);
        assert_eq!(game.board().goal().position().x, 0);
        assert!(!game.check_win());
        assert!(!game
            .generator()
            .difficulty()
            .is_too_easy(game.board()));
    }

    #[test]
    fn crowded_new_game_deals_the_fallback_board() {
        let config = GeneratorConfig {
            max_attempts: 50,
            ..GeneratorConfig::default()
        };
        let mut game = GameSession::new(config, StdRng::seed_from_u64(29)).unwrap();
        game.new_game(10);
        assert_eq!(game.vehicle_count(), 10);
        assert_eq!(game.board(), &game.generator().fallback());
        assert!(game.board().len() < game.vehicle_count() + 1);
    }

    #[test]
    fn snapshot_mirrors_board() {
        let game = session();
        let views = game.snapshot();
        assert_eq!(views.len(), game.board().len());
        assert!(views[0].goal);
        assert!(views.iter().skip(1).all(|v| !v.goal));
        for (view, vehicle) in views.iter().zip(game.board().vehicles()) {
            assert_eq!(view.position, vehicle.position());
            assert_eq!(view.length, vehicle.len());
            assert_eq!(view.orientation, vehicle.orientation());
            assert!(!view.selected);
        }
        assert_eq!(views[1].visual_key.get(), 1);
    }
}
