//! Direction tables and neighbor queries on the unbounded integer grid.

use crate::types::{Cell, Direction};

use super::seed::DungeonRng;

pub const CARDINAL_DIRECTIONS: [Direction; 4] =
    [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT];

/// Cardinals first, then the diagonals.
pub const EIGHT_DIRECTIONS: [Direction; 8] = [
    Direction::UP,
    Direction::DOWN,
    Direction::LEFT,
    Direction::RIGHT,
    Direction::UP_LEFT,
    Direction::UP_RIGHT,
    Direction::DOWN_LEFT,
    Direction::DOWN_RIGHT,
];

pub fn cardinal_directions() -> &'static [Direction; 4] {
    &CARDINAL_DIRECTIONS
}

pub fn eight_directions() -> &'static [Direction; 8] {
    &EIGHT_DIRECTIONS
}

pub fn random_cardinal(rng: &mut DungeonRng) -> Direction {
    CARDINAL_DIRECTIONS[rng.below(CARDINAL_DIRECTIONS.len())]
}

pub fn neighbors4(cell: Cell) -> [Cell; 4] {
    CARDINAL_DIRECTIONS.map(|direction| cell + direction)
}

pub fn neighbors8(cell: Cell) -> [Cell; 8] {
    EIGHT_DIRECTIONS.map(|direction| cell + direction)
}
