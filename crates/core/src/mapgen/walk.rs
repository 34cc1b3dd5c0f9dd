//! Random walks: irregular room blobs and straight, width-expanded corridor runs.

use crate::types::{Cell, CellSet, Direction};

use super::grid::random_cardinal;
use super::seed::DungeonRng;

/// Heading and width of the corridor segment laid just before the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviousSegment {
    pub direction: Direction,
    pub width: u32,
}

/// Grow a blob from `start` by taking `steps` random cardinal steps.
pub fn simple_random_walk(rng: &mut DungeonRng, start: Cell, steps: u32) -> CellSet {
    let mut path = CellSet::from([start]);
    let mut position = start;
    for _ in 0..steps {
        position += random_cardinal(rng);
        path.insert(position);
    }
    path
}

/// Lay `length` steps in `direction`, widening each row to `width` cells along the
/// perpendicular axis. Cells come out row by row; overlapping bands may repeat cells.
///
/// When turning left out of a vertical segment, or down out of a horizontal one, the
/// start is pushed across by `previous.width - 1` so the new run lines up with the
/// far edge of the previous band instead of its origin corner. Without a previous
/// segment no correction applies.
///
/// Coordinates are not range-checked here; [`DungeonGenerator`] refuses starts whose
/// walks could leave the `i32` grid.
///
/// [`DungeonGenerator`]: crate::mapgen::DungeonGenerator
pub fn corridor_walk(
    start: Cell,
    length: u32,
    width: u32,
    direction: Direction,
    previous: Option<PreviousSegment>,
) -> Vec<Cell> {
    let extra_width = direction.perpendicular_axis();
    let mut position = start;
    if let Some(previous) = previous {
        let shift = previous.width.saturating_sub(1) as i32;
        if previous.direction.is_vertical() && direction.dx == -1 {
            position.x += shift;
        }
        if !previous.direction.is_vertical() && direction.dy == -1 {
            position.y += shift;
        }
    }

    let mut corridor = Vec::new();
    push_row(&mut corridor, position, extra_width, width);
    for _ in 0..length {
        position += direction;
        push_row(&mut corridor, position, extra_width, width);
    }
    corridor
}

fn push_row(corridor: &mut Vec<Cell>, primary: Cell, extra_width: Direction, width: u32) {
    corridor.push(primary);
    for offset in 1..width as i32 {
        corridor.push(Cell::new(
            primary.x + extra_width.dx * offset,
            primary.y + extra_width.dy * offset,
        ));
    }
}
