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

//! Properties every dealt board must have, checked across many seeds.
use rand::{rngs::StdRng, SeedableRng};

use rushhour::{
    board::{Board, BoardDimensions},
    generate::{Generator, GeneratorConfig},
    vehicles::{Orientation, Step, VehicleId},
};

fn generator(config: GeneratorConfig) -> Generator {
    Generator::new(GeneratorConfig {
        scramble_moves: 1_500,
        ..config
    })
    .unwrap()
}

fn boards(generator: &Generator, vehicle_count: usize, seeds: u64) -> Vec<Board> {
    (0..seeds)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate(vehicle_count, &mut rng)
        })
        .collect()
}

fn check_board(generator: &Generator, board: &Board) {
    let dim = board.dimensions();

    for (i, a) in board.vehicles().iter().enumerate() {
        assert!(dim.within_bounds(&a.footprint()), "out of bounds: {:?}", a);
        for b in &board.vehicles()[i + 1..] {
            assert!(
                !a.footprint().overlaps(&b.footprint()),
                "{:?} overlaps {:?}",
                a,
                b
            );
        }
    }

    let goal = board.goal();
    assert!(goal.is_goal());
    assert_eq!(goal.orientation(), Orientation::Horizontal);
    assert_eq!(goal.position().y, dim.exit_row());
    assert_eq!(goal.position().x, 0);
    assert_eq!(board.vehicles().iter().filter(|v| v.is_goal()).count(), 1);

    assert!(!generator.difficulty().is_too_easy(board));
    assert!(board.blockers().count() >= 1);
    assert!(!board.is_won());
}

#[test]
fn default_boards_hold_invariants() {
    let generator = generator(GeneratorConfig::default());
    for board in boards(&generator, 5, 16) {
        check_board(&generator, &board);
    }
}

#[test]
fn reachable_counts_deal_every_vehicle() {
    let generator = Generator::new(GeneratorConfig::default()).unwrap();
    for &vehicle_count in &[1, 3, 6] {
        for seed in 0..6 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = match generator.try_generate(vehicle_count, &mut rng) {
                Ok(board) => board,
                Err(err) => panic!("{} vehicles, seed {}: {}", vehicle_count, seed, err),
            };
            assert_eq!(board.len(), vehicle_count + 1);
            check_board(&generator, &board);
        }
    }
}

#[test]
fn unreachable_counts_fall_back() {
    let generator = Generator::new(GeneratorConfig {
        max_attempts: 200,
        ..GeneratorConfig::default()
    })
    .unwrap();
    for seed in 0..6 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(generator.try_generate(10, &mut rng).is_err());
        let mut rng = StdRng::seed_from_u64(seed);
        let board = generator.generate(10, &mut rng);
        assert_eq!(board, generator.fallback());
        check_board(&generator, &board);
    }
}

#[test]
fn larger_board_with_two_blockers() {
    let generator = generator(GeneratorConfig {
        dimensions: BoardDimensions::new(8, 7, 3),
        goal_start_column: 6,
        min_blockers: 2,
        ..GeneratorConfig::default()
    });
    for board in boards(&generator, 6, 8) {
        check_board(&generator, &board);
        assert!(board.blockers().count() >= 2);
    }
}

#[test]
fn same_seed_same_board() {
    let generator = generator(GeneratorConfig::default());
    let first = boards(&generator, 5, 3);
    let second = boards(&generator, 5, 3);
    assert_eq!(first, second);
}

#[test]
fn legal_moves_stay_settled() {
    let generator = generator(GeneratorConfig::default());
    let mut board = boards(&generator, 6, 1).remove(0);
    let before = board.clone();
    let ids: Vec<VehicleId> = board.iter_vehicles().map(|(id, _)| id).collect();

    for &id in &ids {
        for &step in Step::ALL {
            let allowed = board.can_move(id, step);
            assert_eq!(allowed, board.can_move(id, step));
        }
    }
    assert_eq!(board, before);

    for &id in &ids {
        for &step in Step::ALL {
            if board.can_move(id, step) {
                board.move_vehicle(id, step);
                assert_eq!(board.overlapping_pair(), None);
                assert!(board
                    .dimensions()
                    .within_bounds(&board.vehicle(id).unwrap().footprint()));
            }
        }
    }
}
