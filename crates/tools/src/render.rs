//! Consumers of a finished layout: wall derivation, room glyphs, ASCII and JSON output.

use std::collections::BTreeMap;

use dungeon_core::mapgen::neighbors8;
use dungeon_core::{Cell, CellSet, GenerationResult};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;

const ROOM_GLYPHS: [char; 7] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

/// Every non-floor cell that touches the floor, diagonals included.
pub fn derive_walls(floor: &CellSet) -> CellSet {
    floor
        .iter()
        .flat_map(|&cell| neighbors8(cell))
        .filter(|cell| !floor.contains(cell))
        .collect()
}

/// Draws glyphs from a fixed palette without replacement, refilling it once exhausted.
pub struct GlyphPicker {
    rng: ChaCha8Rng,
    remaining: Vec<char>,
}

impl GlyphPicker {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), remaining: Vec::new() }
    }

    pub fn next_glyph(&mut self) -> char {
        if self.remaining.is_empty() {
            self.remaining = ROOM_GLYPHS.to_vec();
        }
        let index = self.rng.next_u64() as usize % self.remaining.len();
        self.remaining.swap_remove(index)
    }
}

pub fn room_glyphs(result: &GenerationResult, picker: &mut GlyphPicker) -> BTreeMap<Cell, char> {
    result.rooms.keys().map(|&key| (key, picker.next_glyph())).collect()
}

/// Text preview with +y pointing up. `@` marks the start and `x` the other dead ends.
pub fn render_ascii(result: &GenerationResult, glyphs: &BTreeMap<Cell, char>) -> String {
    let walls = derive_walls(&result.floor);
    let mut cell_glyph: BTreeMap<Cell, char> = BTreeMap::new();
    for (key, cells) in &result.rooms {
        let glyph = glyphs.get(key).copied().unwrap_or('r');
        for &cell in cells {
            cell_glyph.insert(cell, glyph);
        }
    }
    for &dead_end in &result.dead_ends {
        cell_glyph.insert(dead_end, 'x');
    }
    cell_glyph.insert(result.start, '@');

    let (min, max) = result.bounds();
    let mut out = String::new();
    for y in (min.y - 1..=max.y + 1).rev() {
        for x in min.x - 1..=max.x + 1 {
            let cell = Cell::new(x, y);
            let glyph = if let Some(&glyph) = cell_glyph.get(&cell) {
                glyph
            } else if result.floor.contains(&cell) {
                '.'
            } else if walls.contains(&cell) {
                '#'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Serialize)]
pub struct RoomSummary {
    pub key: Cell,
    pub cells: Vec<Cell>,
}

/// Output-only handoff for external renderers.
#[derive(Debug, Serialize)]
pub struct LayoutSummary {
    pub seed: u64,
    pub fingerprint: u64,
    pub start: Cell,
    pub floor: Vec<Cell>,
    pub walls: Vec<Cell>,
    pub rooms: Vec<RoomSummary>,
    pub dead_ends: Vec<Cell>,
}

impl LayoutSummary {
    pub fn from_result(result: &GenerationResult) -> Self {
        Self {
            seed: result.seed,
            fingerprint: result.fingerprint(),
            start: result.start,
            floor: result.floor.iter().copied().collect(),
            walls: derive_walls(&result.floor).into_iter().collect(),
            rooms: result
                .rooms
                .iter()
                .map(|(&key, cells)| RoomSummary { key, cells: cells.iter().copied().collect() })
                .collect(),
            dead_ends: result.dead_ends.clone(),
        }
    }
}
