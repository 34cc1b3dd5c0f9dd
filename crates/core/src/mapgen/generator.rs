//! Corridor-first generation pipeline: corridors, rooms, dead-end fill, consolidation, assembly.

use std::error::Error;
use std::fmt;

use tracing::info;

use crate::config::{ConfigError, GenerationConfig};
use crate::types::Cell;

use super::consolidate::consolidate;
use super::corridors::build_corridors;
use super::model::{GenerationResult, assemble};
use super::rooms::{fill_dead_ends, place_rooms};
use super::seed::{DungeonRng, resolve_seed};

#[derive(Debug)]
pub enum GenerationError {
    InvalidConfig(ConfigError),
    /// Some cell the walks could reach from `start` lies outside the `i32` grid.
    OutOfBounds { start: Cell, reach: u64 },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "cannot generate dungeon: {e}"),
            Self::OutOfBounds { start, reach } => write!(
                f,
                "cannot generate dungeon: walks may reach {reach} cells from ({}, {}), \
                 past the edge of the grid",
                start.x, start.y
            ),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

/// Upper bound on how far any generated cell can sit from the start along either axis.
///
/// Each segment advances at most `corridor_length.max` and its start correction adds at
/// most `corridor_width.max - 1`; the last band spreads `corridor_width.max - 1` across
/// and a room walk strays `room_walk_steps` from its seed.
pub fn max_reach(config: &GenerationConfig) -> u64 {
    let length = u64::from(config.corridor_length.max);
    let width = u64::from(config.corridor_width.max);
    u64::from(config.corridor_count)
        .saturating_mul(length.saturating_add(width))
        .saturating_add(width)
        .saturating_add(u64::from(config.room_walk_steps))
}

fn axis_fits(coordinate: i32, reach: u64) -> bool {
    let Ok(reach) = i64::try_from(reach) else {
        return false;
    };
    let coordinate = i64::from(coordinate);
    coordinate.checked_sub(reach).is_some_and(|low| low >= i64::from(i32::MIN))
        && coordinate.checked_add(reach).is_some_and(|high| high <= i64::from(i32::MAX))
}

/// Validated configuration ready to produce layouts. Each call to
/// [`DungeonGenerator::generate`] starts from empty sets, so regenerating never
/// carries cells over from an earlier run.
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    config: GenerationConfig,
}

impl DungeonGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the pipeline with the configured seed, or a fresh runtime seed when unset.
    pub fn generate(&self, start: Cell) -> Result<GenerationResult, GenerationError> {
        self.generate_with_seed(resolve_seed(self.config.random_seed), start)
    }

    pub fn generate_with_seed(
        &self,
        seed: u64,
        start: Cell,
    ) -> Result<GenerationResult, GenerationError> {
        let reach = max_reach(&self.config);
        if !axis_fits(start.x, reach) || !axis_fits(start.y, reach) {
            return Err(GenerationError::OutOfBounds { start, reach });
        }

        let mut rng = DungeonRng::from_seed(seed);

        let network = build_corridors(&mut rng, &self.config, start);
        let mut placement = place_rooms(&mut rng, &self.config, &network.endpoints);
        fill_dead_ends(&mut rng, &self.config, &network.dead_ends, &mut placement);
        let merges = consolidate(&mut placement.rooms);
        let (floor, rooms) = assemble(network.floor, &placement.room_cells, placement.rooms);

        info!(
            seed,
            floor = floor.len(),
            rooms = rooms.len(),
            dead_ends = network.dead_ends.len(),
            merges,
            "generated dungeon"
        );

        Ok(GenerationResult { seed, start, floor, rooms, dead_ends: network.dead_ends })
    }
}
