use std::io;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::mapgen::{consolidate, is_pairwise_disjoint};
use dungeon_core::{Cell, DungeonGenerator, GenerationConfig, GenerationResult, SizeRange};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{Level, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to generate
    #[arg(short, long, default_value_t = 1000)]
    runs: u64,
    /// Randomise corridor shape parameters per run instead of using defaults
    #[arg(long)]
    vary: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn varied_config(rng: &mut ChaCha8Rng, seed: u64) -> GenerationConfig {
    let length_min = choose(rng, &[0_u32, 2, 5, 10]);
    let width_min = choose(rng, &[1_u32, 1, 2, 3]);
    GenerationConfig {
        corridor_count: choose(rng, &[0_u32, 1, 3, 5, 12, 25]),
        corridor_length: SizeRange::new(length_min, length_min + choose(rng, &[0_u32, 1, 6])),
        corridor_width: SizeRange::new(width_min, width_min + choose(rng, &[0_u32, 1, 2])),
        room_walk_steps: choose(rng, &[0_u32, 10, 40, 120]),
        room_fraction: choose(rng, &[0.1, 0.5, 0.8, 1.0]),
        random_seed: Some(seed),
    }
}

fn check_invariants(result: &GenerationResult, generator: &DungeonGenerator) -> Result<()> {
    if !result.floor.contains(&result.start) {
        bail!("floor is missing the start cell");
    }
    if !is_pairwise_disjoint(&result.rooms) {
        bail!("consolidated rooms overlap");
    }
    if let Some(dead_end) = result.dead_ends.iter().find(|cell| result.room_of(**cell).is_none()) {
        bail!("dead end {dead_end:?} has no room");
    }
    if result.rooms.values().any(|cells| !cells.is_subset(&result.floor)) {
        bail!("room cells escape the floor");
    }
    let mut again = result.rooms.clone();
    if consolidate(&mut again) != 0 || again != result.rooms {
        bail!("consolidation is not at a fixed point");
    }
    let replay = generator.generate_with_seed(result.seed, result.start)?;
    if replay.fingerprint() != result.fingerprint() {
        bail!("replaying the seed changed the layout");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    println!("Sweeping {} seeds starting at {}...", args.runs, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut largest_floor = 0_usize;

    for seed in args.seed..args.seed.saturating_add(args.runs) {
        let config = if args.vary {
            varied_config(&mut rng, seed)
        } else {
            GenerationConfig { random_seed: Some(seed), ..Default::default() }
        };
        let generator = DungeonGenerator::new(config)?;
        let result = generator.generate(Cell::ORIGIN)?;
        if let Err(error) = check_invariants(&result, &generator) {
            bail!("Invariant failed for seed {seed} with {:?}: {error}", generator.config());
        }
        info!(seed, floor = result.floor.len(), rooms = result.rooms.len(), "seed ok");
        largest_floor = largest_floor.max(result.floor.len());
    }

    println!("Sweep completed successfully. Largest floor: {largest_floor} cells.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varied_configs_are_valid_and_pass_every_check() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for seed in 0..40 {
            let generator = DungeonGenerator::new(varied_config(&mut rng, seed))
                .expect("varied configs stay valid");
            assert_eq!(generator.config().random_seed, Some(seed));
            let result = generator.generate(Cell::ORIGIN).expect("origin is in bounds");
            check_invariants(&result, &generator).expect("invariants hold");
        }
    }

    #[test]
    fn overlapping_rooms_fail_the_check() {
        let generator = DungeonGenerator::new(GenerationConfig {
            random_seed: Some(3),
            ..Default::default()
        })
        .expect("valid config");
        let mut result = generator.generate(Cell::ORIGIN).expect("origin is in bounds");
        let start = result.start;
        result.rooms.entry(Cell::new(start.x + 1_000, start.y)).or_default().insert(start);
        let error = check_invariants(&result, &generator).expect_err("overlap must be caught");
        assert!(error.to_string().contains("overlap"));
    }
}
