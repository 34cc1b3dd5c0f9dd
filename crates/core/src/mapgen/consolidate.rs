//! Merges overlapping room regions until every remaining pair is disjoint.

use std::collections::BTreeMap;
use std::mem;

use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::types::{Cell, CellSet, RoomMap};

/// Merge every pair of rooms that share a cell, transitively, and return how many
/// room keys were absorbed. Each merged cluster is keyed by its smallest seed cell.
/// Running it again on its own output merges nothing.
pub fn consolidate(rooms: &mut RoomMap) -> usize {
    let regions: Vec<(Cell, CellSet)> = mem::take(rooms).into_iter().collect();
    let mut clusters = UnionFind::<usize>::new(regions.len());
    let mut owner: BTreeMap<Cell, usize> = BTreeMap::new();
    let mut merges = 0;

    for (index, (key, cells)) in regions.iter().enumerate() {
        for &cell in cells {
            let Some(other) = owner.get(&cell).copied() else {
                owner.insert(cell, index);
                continue;
            };
            if clusters.union(index, other) {
                debug!(room = ?key, joined = ?regions[other].0, via = ?cell, "merged rooms");
                merges += 1;
            }
        }
    }

    // Regions arrive in key order, so the first one seen per root holds the smallest key.
    let mut cluster_keys: BTreeMap<usize, Cell> = BTreeMap::new();
    for (index, (key, cells)) in regions.into_iter().enumerate() {
        let root = clusters.find_mut(index);
        let cluster_key = *cluster_keys.entry(root).or_insert(key);
        rooms.entry(cluster_key).or_default().extend(cells);
    }
    merges
}

/// True when no cell belongs to two different rooms.
pub fn is_pairwise_disjoint(rooms: &RoomMap) -> bool {
    let mut seen = CellSet::new();
    rooms.values().flatten().all(|&cell| seen.insert(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn overlapping_pair_merges_under_the_smaller_key() {
        let mut rooms = RoomMap::from([
            (Cell::new(5, 0), room(&[(5, 0), (6, 0)])),
            (Cell::new(0, 0), room(&[(0, 0), (1, 0), (5, 0)])),
        ]);
        assert_eq!(consolidate(&mut rooms), 1);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[&Cell::new(0, 0)], room(&[(0, 0), (1, 0), (5, 0), (6, 0)]));
    }

    #[test]
    fn chain_of_overlaps_collapses_transitively() {
        // a-b overlap, b-c overlap, a-c do not: all three still end up together.
        let mut rooms = RoomMap::from([
            (Cell::new(0, 0), room(&[(0, 0), (1, 0)])),
            (Cell::new(2, 0), room(&[(1, 0), (2, 0), (3, 0)])),
            (Cell::new(4, 0), room(&[(3, 0), (4, 0)])),
            (Cell::new(9, 9), room(&[(9, 9)])),
        ]);
        assert_eq!(consolidate(&mut rooms), 2);
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[&Cell::new(0, 0)], room(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
        assert_eq!(rooms[&Cell::new(9, 9)], room(&[(9, 9)]));
    }

    #[test]
    fn late_bridge_joins_two_earlier_clusters() {
        let mut rooms = RoomMap::from([
            (Cell::new(0, 0), room(&[(0, 0)])),
            (Cell::new(8, 0), room(&[(8, 0)])),
            (Cell::new(4, 0), room(&[(0, 0), (4, 0), (8, 0)])),
        ]);
        assert_eq!(consolidate(&mut rooms), 2);
        assert_eq!(rooms.keys().copied().collect::<Vec<_>>(), vec![Cell::new(0, 0)]);
        assert_eq!(rooms[&Cell::new(0, 0)], room(&[(0, 0), (4, 0), (8, 0)]));
    }

    #[test]
    fn many_rooms_bridged_from_the_far_end_keep_the_smallest_key() {
        // Each room overlaps only the last one, so union order never favours index 0.
        let hub: Vec<(i32, i32)> = (0..6).map(|x| (x * 10, 0)).collect();
        let mut rooms: RoomMap =
            (0..5).map(|x| (Cell::new(x * 10, 0), room(&[(x * 10, 0)]))).collect();
        rooms.insert(Cell::new(50, 0), room(&hub));
        assert_eq!(consolidate(&mut rooms), 5);
        assert_eq!(rooms.keys().copied().collect::<Vec<_>>(), vec![Cell::ORIGIN]);
        assert_eq!(rooms[&Cell::ORIGIN], room(&hub));
    }

    #[test]
    fn consolidation_is_idempotent() {
        let mut rooms = RoomMap::from([
            (Cell::new(0, 0), room(&[(0, 0), (0, 1)])),
            (Cell::new(0, 2), room(&[(0, 1), (0, 2)])),
            (Cell::new(7, 7), room(&[(7, 7), (7, 8)])),
        ]);
        consolidate(&mut rooms);
        let settled = rooms.clone();
        assert_eq!(consolidate(&mut rooms), 0);
        assert_eq!(rooms, settled);
        assert!(is_pairwise_disjoint(&rooms));
    }

    #[test]
    fn touching_but_disjoint_rooms_stay_apart() {
        let mut rooms = RoomMap::from([
            (Cell::new(0, 0), room(&[(0, 0)])),
            (Cell::new(1, 0), room(&[(1, 0)])),
        ]);
        assert_eq!(consolidate(&mut rooms), 0);
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn empty_map_is_already_consolidated() {
        let mut rooms = RoomMap::new();
        assert_eq!(consolidate(&mut rooms), 0);
        assert!(rooms.is_empty());
        assert!(is_pairwise_disjoint(&rooms));
    }
}
