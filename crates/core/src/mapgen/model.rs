//! Public output model handed to renderers, wall derivation, and room colouring.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, CellSet, RoomMap};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    /// Seed that drove the run; feed it back through the config to replay it.
    pub seed: u64,
    pub start: Cell,
    pub floor: CellSet,
    /// Consolidated rooms, pairwise disjoint.
    pub rooms: RoomMap,
    pub dead_ends: Vec<Cell>,
}

/// Union corridor and room floor; the consolidated room map passes through untouched.
pub fn assemble(
    corridor_floor: CellSet,
    room_cells: &CellSet,
    rooms: RoomMap,
) -> (CellSet, RoomMap) {
    let mut floor = corridor_floor;
    floor.extend(room_cells.iter().copied());
    (floor, rooms)
}

impl GenerationResult {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        push_cell(&mut bytes, self.start);

        bytes.extend((self.floor.len() as u32).to_le_bytes());
        for &cell in &self.floor {
            push_cell(&mut bytes, cell);
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for (&key, cells) in &self.rooms {
            push_cell(&mut bytes, key);
            bytes.extend((cells.len() as u32).to_le_bytes());
            for &cell in cells {
                push_cell(&mut bytes, cell);
            }
        }

        bytes.extend((self.dead_ends.len() as u32).to_le_bytes());
        for &cell in &self.dead_ends {
            push_cell(&mut bytes, cell);
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Key of the room containing `cell`, if any.
    pub fn room_of(&self, cell: Cell) -> Option<Cell> {
        self.rooms.iter().find(|(_, cells)| cells.contains(&cell)).map(|(&key, _)| key)
    }

    pub fn corridor_only_cells(&self) -> CellSet {
        self.floor
            .iter()
            .copied()
            .filter(|cell| !self.rooms.values().any(|room| room.contains(cell)))
            .collect()
    }

    /// Inclusive `(min, max)` corners of the floor.
    pub fn bounds(&self) -> (Cell, Cell) {
        let mut min = self.start;
        let mut max = self.start;
        for cell in &self.floor {
            min.x = min.x.min(cell.x);
            min.y = min.y.min(cell.y);
            max.x = max.x.max(cell.x);
            max.y = max.y.max(cell.y);
        }
        (min, max)
    }
}

fn push_cell(bytes: &mut Vec<u8>, cell: Cell) {
    bytes.extend(cell.x.to_le_bytes());
    bytes.extend(cell.y.to_le_bytes());
}
