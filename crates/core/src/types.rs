use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Integer grid address. `+y` is up, matching the direction constants.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, direction: Direction) -> Self {
        Self { x: self.x + direction.dx, y: self.y + direction.dy }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, direction: Direction) -> Cell {
        self.offset(direction)
    }
}

impl AddAssign<Direction> for Cell {
    fn add_assign(&mut self, direction: Direction) {
        *self = self.offset(direction);
    }
}

/// Unit offset on the grid. Cardinal values have exactly one non-zero component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const UP: Self = Self { dx: 0, dy: 1 };
    pub const DOWN: Self = Self { dx: 0, dy: -1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };
    pub const UP_LEFT: Self = Self { dx: -1, dy: 1 };
    pub const UP_RIGHT: Self = Self { dx: 1, dy: 1 };
    pub const DOWN_LEFT: Self = Self { dx: -1, dy: -1 };
    pub const DOWN_RIGHT: Self = Self { dx: 1, dy: -1 };

    pub const fn is_vertical(self) -> bool {
        self.dy != 0
    }

    pub const fn reversed(self) -> Self {
        Self { dx: -self.dx, dy: -self.dy }
    }

    /// Unit step across the direction of travel, used to widen corridors.
    pub const fn perpendicular_axis(self) -> Self {
        if self.is_vertical() { Self::RIGHT } else { Self::UP }
    }
}

/// Unordered set of unique cells. Ordered storage keeps seeded runs byte-stable.
pub type CellSet = BTreeSet<Cell>;

/// Room seed cell mapped to the floor cells grown from it.
pub type RoomMap = BTreeMap<Cell, CellSet>;
