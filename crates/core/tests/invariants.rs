use dungeon_core::mapgen::{
    DungeonRng, build_corridors, consolidate, corridor_walk, fill_dead_ends, is_pairwise_disjoint,
    neighbors4, neighbors8, place_rooms,
};
use dungeon_core::{
    Cell, CellSet, Direction, GenerationConfig, GenerationError, SizeRange, generate,
};
use proptest::prelude::*;

#[test]
fn corridor_width_contract_holds_for_a_two_wide_eastward_run() {
    let cells: CellSet =
        corridor_walk(Cell::ORIGIN, 3, 2, Direction::RIGHT, None).into_iter().collect();
    let expected: CellSet = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)]
        .into_iter()
        .map(|(x, y)| Cell::new(x, y))
        .collect();
    assert_eq!(cells, expected);
}

#[test]
fn neighbor_queries_list_cardinals_then_diagonals() {
    assert_eq!(
        neighbors4(Cell::ORIGIN),
        [Cell::new(0, 1), Cell::new(0, -1), Cell::new(-1, 0), Cell::new(1, 0)]
    );
    let around = neighbors8(Cell::ORIGIN);
    assert_eq!(around[..4], neighbors4(Cell::ORIGIN));
    let diagonals: CellSet = around[4..].iter().copied().collect();
    assert_eq!(
        diagonals,
        CellSet::from([Cell::new(1, 1), Cell::new(1, -1), Cell::new(-1, 1), Cell::new(-1, -1)])
    );
}

#[test]
fn zero_corridor_config_is_degenerate_but_well_formed() {
    let config = GenerationConfig { corridor_count: 0, random_seed: Some(3), ..Default::default() };
    let result = generate(config, Cell::new(5, 5)).expect("valid config");
    assert!(result.floor.contains(&Cell::new(5, 5)));
    assert_eq!(result.rooms.len(), 1);
    assert!(result.rooms.keys().all(|key| *key == Cell::new(5, 5)));
}

#[test]
fn inverted_ranges_fail_fast() {
    let config = GenerationConfig { corridor_width: SizeRange::new(3, 2), ..Default::default() };
    assert!(generate(config, Cell::ORIGIN).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn final_floor_contains_start_and_rooms_are_disjoint(
        seed in any::<u64>(),
        corridor_count in 0_u32..20,
        length_min in 0_u32..6,
        length_span in 0_u32..10,
        width_min in 1_u32..3,
        width_span in 0_u32..3,
        room_walk_steps in 0_u32..50,
        room_fraction in 0.01_f64..=1.0,
        start_x in -1_000_i32..1_000,
        start_y in -1_000_i32..1_000,
    ) {
        let config = GenerationConfig {
            corridor_count,
            corridor_length: SizeRange::new(length_min, length_min + length_span),
            corridor_width: SizeRange::new(width_min, width_min + width_span),
            room_walk_steps,
            room_fraction,
            random_seed: Some(seed),
        };
        let start = Cell::new(start_x, start_y);
        let result = generate(config, start).expect("valid config");

        prop_assert!(!result.floor.is_empty());
        prop_assert!(result.floor.contains(&start));
        prop_assert!(is_pairwise_disjoint(&result.rooms));
        for dead_end in &result.dead_ends {
            prop_assert!(result.room_of(*dead_end).is_some());
        }

        let mut again = result.rooms.clone();
        prop_assert_eq!(consolidate(&mut again), 0);
        prop_assert_eq!(&again, &result.rooms);
    }

    #[test]
    fn any_start_on_the_grid_either_generates_or_reports_out_of_bounds(
        seed in any::<u64>(),
        start_x in prop_oneof![any::<i32>(), i32::MAX - 64..=i32::MAX, i32::MIN..i32::MIN + 64],
        start_y in prop_oneof![any::<i32>(), i32::MAX - 64..=i32::MAX, i32::MIN..i32::MIN + 64],
        room_walk_steps in 0_u32..40,
    ) {
        let config = GenerationConfig {
            corridor_count: 3,
            room_walk_steps,
            random_seed: Some(seed),
            ..Default::default()
        };
        let start = Cell::new(start_x, start_y);
        match generate(config, start) {
            Ok(result) => prop_assert!(result.floor.contains(&start)),
            Err(error) => prop_assert!(
                matches!(error, GenerationError::OutOfBounds { .. }),
                "unexpected error: {}",
                error
            ),
        }
    }

    #[test]
    fn dead_end_fill_covers_every_candidate(seed in any::<u64>(), corridor_count in 0_u32..15) {
        let config = GenerationConfig { corridor_count, ..Default::default() };
        let mut rng = DungeonRng::from_seed(seed);
        let network = build_corridors(&mut rng, &config, Cell::ORIGIN);
        let mut placement = place_rooms(&mut rng, &config, &network.endpoints);
        fill_dead_ends(&mut rng, &config, &network.dead_ends, &mut placement);
        for dead_end in &network.dead_ends {
            prop_assert!(placement.rooms.values().any(|cells| cells.contains(dead_end)));
        }
    }
}
