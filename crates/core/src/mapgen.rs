//! Corridor-first dungeon generation split into coherent submodules.

pub mod consolidate;
pub mod corridors;
pub mod grid;
pub mod model;
pub mod rooms;
pub mod walk;

mod generator;
mod seed;

pub use consolidate::{consolidate, is_pairwise_disjoint};
pub use corridors::{CorridorNetwork, build_corridors};
pub use generator::{DungeonGenerator, GenerationError, max_reach};
pub use grid::{
    CARDINAL_DIRECTIONS, EIGHT_DIRECTIONS, cardinal_directions, eight_directions, neighbors4,
    neighbors8, random_cardinal,
};
pub use model::{GenerationResult, assemble};
pub use rooms::{RoomPlacement, fill_dead_ends, place_rooms, room_seed_count};
pub use seed::{DungeonRng, generate_runtime_seed};
pub use walk::{PreviousSegment, corridor_walk, simple_random_walk};

use crate::config::GenerationConfig;
use crate::types::Cell;

pub fn generate(
    config: GenerationConfig,
    start: Cell,
) -> Result<GenerationResult, GenerationError> {
    DungeonGenerator::new(config)?.generate(start)
}
