//! Corridor-first layout: chained corridor segments plus endpoint and dead-end bookkeeping.

use tracing::debug;

use crate::config::GenerationConfig;
use crate::types::{Cell, CellSet};

use super::grid::random_cardinal;
use super::seed::DungeonRng;
use super::walk::{PreviousSegment, corridor_walk};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorridorNetwork {
    pub floor: CellSet,
    /// Start cell plus the end of every segment; candidate room seeds.
    pub endpoints: CellSet,
    /// Places that must end up inside a room, in discovery order without repeats.
    pub dead_ends: Vec<Cell>,
}

impl CorridorNetwork {
    fn mark_dead_end(&mut self, cell: Cell) {
        if !self.dead_ends.contains(&cell) {
            self.dead_ends.push(cell);
        }
    }
}

/// Lay `config.corridor_count` segments end to end starting at `start`.
///
/// The start is always a dead end. So is the end of any segment that doubles back
/// on the previous heading, and the end of the final segment.
pub fn build_corridors(
    rng: &mut DungeonRng,
    config: &GenerationConfig,
    start: Cell,
) -> CorridorNetwork {
    let mut network = CorridorNetwork::default();
    network.floor.insert(start);
    network.endpoints.insert(start);
    network.mark_dead_end(start);

    let mut position = start;
    let mut previous: Option<PreviousSegment> = None;
    for index in 0..config.corridor_count {
        let length = rng.in_range(config.corridor_length);
        let width = rng.in_range(config.corridor_width);
        let direction = random_cardinal(rng);

        let corridor = corridor_walk(position, length, width, direction, previous);
        if let Some(&last) = corridor.last() {
            position = last;
        }
        network.endpoints.insert(position);
        network.floor.extend(corridor);

        let reversed = previous.is_some_and(|segment| direction == segment.direction.reversed());
        let is_last = index + 1 == config.corridor_count;
        debug!(index, ?direction, length, width, end = ?position, reversed, "laid corridor");
        if reversed || is_last {
            network.mark_dead_end(position);
        }
        previous = Some(PreviousSegment { direction, width });
    }
    network
}
