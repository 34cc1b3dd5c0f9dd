//! Room seeding at corridor endpoints and the dead-end backfill pass.

use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::types::{Cell, CellSet, RoomMap};

use super::seed::DungeonRng;
use super::walk::simple_random_walk;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomPlacement {
    pub rooms: RoomMap,
    /// Union of every room's cells.
    pub room_cells: CellSet,
}

impl RoomPlacement {
    fn grow_room(&mut self, rng: &mut DungeonRng, seed_cell: Cell, steps: u32) {
        let room = simple_random_walk(rng, seed_cell, steps);
        debug!(seed = ?seed_cell, cells = room.len(), "grew room");
        self.room_cells.extend(room.iter().copied());
        self.rooms.insert(seed_cell, room);
    }
}

/// Number of ordinary rooms for `candidates` endpoints. Halves round to even.
pub fn room_seed_count(candidates: usize, room_fraction: f64) -> usize {
    (candidates as f64 * room_fraction).round_ties_even() as usize
}

/// Grow a room at a random `room_fraction` share of the candidate endpoints.
pub fn place_rooms(
    rng: &mut DungeonRng,
    config: &GenerationConfig,
    potential_room_positions: &CellSet,
) -> RoomPlacement {
    let candidates: Vec<Cell> = potential_room_positions.iter().copied().collect();
    let count = room_seed_count(candidates.len(), config.room_fraction);
    if count == 0 && !candidates.is_empty() {
        warn!(
            candidates = candidates.len(),
            room_fraction = config.room_fraction,
            "room fraction rounds to zero ordinary rooms"
        );
    }

    let mut placement = RoomPlacement::default();
    for seed_cell in rng.sample_without_replacement(&candidates, count) {
        placement.grow_room(rng, seed_cell, config.room_walk_steps);
    }
    placement
}

/// Grow a room at every dead end that no room covers yet.
pub fn fill_dead_ends(
    rng: &mut DungeonRng,
    config: &GenerationConfig,
    dead_ends: &[Cell],
    placement: &mut RoomPlacement,
) {
    for &dead_end in dead_ends {
        if !placement.room_cells.contains(&dead_end) {
            placement.grow_room(rng, dead_end, config.room_walk_steps);
        }
    }
}
