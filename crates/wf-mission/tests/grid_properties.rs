//! Property tests for mission grid generation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wf_mechanics::EncounterKind;
use wf_mission::grid::{SPARSE_KINDS, UNIFORM_KINDS};
use wf_mission::{Cell, Grid, GridStrategy, MissionType, ObjectivePlacement, Position};

fn strategy() -> impl Strategy<Value = GridStrategy> {
    prop_oneof![
        Just(GridStrategy::Uniform),
        (0.0f64..=1.0).prop_map(|density| GridStrategy::Sparse { density }),
    ]
}

fn placement() -> impl Strategy<Value = ObjectivePlacement> {
    prop_oneof![
        Just(ObjectivePlacement::FarCorner),
        Just(ObjectivePlacement::Random),
    ]
}

proptest! {
    #[test]
    fn start_and_corner_are_fixed(
        width in 2usize..10,
        height in 1usize..10,
        seed in any::<u64>(),
        strategy in strategy(),
        placement in placement(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(width, height, MissionType::Rescue, strategy, placement, &mut rng)
            .unwrap();
        let corner = Position::new(width - 1, height - 1);

        prop_assert_eq!(grid.get(Position::ORIGIN), Some(Cell::Start));
        prop_assert_eq!(grid.count(|c| c == Cell::Start), 1);
        prop_assert_eq!(grid.count(|c| c == Cell::Objective), 1);
        prop_assert_eq!(grid.get(grid.objective()), Some(Cell::Objective));
        prop_assert!(grid.objective() != Position::ORIGIN);

        let corner_cell = grid.get(corner);
        match placement {
            ObjectivePlacement::FarCorner => {
                prop_assert_eq!(corner_cell, Some(Cell::Objective));
            }
            ObjectivePlacement::Random => {
                prop_assert!(
                    corner_cell == Some(Cell::Exit) || corner_cell == Some(Cell::Objective)
                );
            }
        }
    }

    #[test]
    fn rooms_come_from_the_strategy_kinds(
        width in 2usize..10,
        height in 2usize..10,
        seed in any::<u64>(),
        strategy in strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(
            width,
            height,
            MissionType::Exploration,
            strategy,
            ObjectivePlacement::FarCorner,
            &mut rng,
        )
        .unwrap();

        for (_, cell) in grid.cells() {
            if let Cell::Room(kind) = cell {
                let allowed = match strategy {
                    GridStrategy::Uniform => UNIFORM_KINDS.contains(&kind),
                    GridStrategy::Sparse { .. } => {
                        kind == EncounterKind::Empty || SPARSE_KINDS.contains(&kind)
                    }
                };
                prop_assert!(allowed, "unexpected {kind} for {strategy:?}");
            }
        }
    }

    #[test]
    fn same_seed_same_grid(seed in any::<u64>()) {
        let make = || {
            let mut rng = StdRng::seed_from_u64(seed);
            Grid::generate(
                5,
                5,
                MissionType::Stealth,
                GridStrategy::default(),
                ObjectivePlacement::Random,
                &mut rng,
            )
            .unwrap()
        };
        prop_assert_eq!(make(), make());
    }
}

#[test]
fn zero_density_grid_is_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = Grid::generate(
        6,
        6,
        MissionType::Rescue,
        GridStrategy::Sparse { density: 0.0 },
        ObjectivePlacement::FarCorner,
        &mut rng,
    )
    .unwrap();
    assert_eq!(grid.count(|c| c == Cell::Room(EncounterKind::Empty)), 34);
}
