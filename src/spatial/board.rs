//! Board state and edge-matched placement
//!
//! The board owns the generated tile sequence, its neighbor table and
//! rings, the junction map, and the mutable placement state. Tiles and
//! junctions are built once per radius and never change; placements do.

use crate::combo::{ColorIndex, Combo, SideColors};
use crate::io::configuration::EDGE_COUNT;
use crate::spatial::hex::{Axial, build_neighbor_table, generate_axial_grid, rings_by_distance};
use crate::spatial::junction::{Junction, JunctionKey, JunctionMap};

/// A committed tile placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The combo, with the rotation step it was placed at
    pub combo: Combo,
    /// Edge colors under that rotation, cached for neighbor checks
    pub side_colors: SideColors,
}

/// Hexagonal board with placement state
#[derive(Debug, Clone)]
pub struct Board {
    radius: i32,
    tiles: Vec<Axial>,
    neighbors: Vec<[Option<usize>; EDGE_COUNT]>,
    rings: Vec<Vec<usize>>,
    junctions: JunctionMap,
    placements: Vec<Option<Placement>>,
    placed_count: usize,
}

impl Board {
    /// Build an empty board of the given radius and hex size
    ///
    /// The hex size only affects junction positions; placement logic is
    /// purely topological.
    #[must_use]
    pub fn new(radius: i32, hex_size: f64) -> Self {
        let tiles = generate_axial_grid(radius);
        let neighbors = build_neighbor_table(&tiles);
        let rings = rings_by_distance(&tiles);
        let junctions = JunctionMap::compute(&tiles, hex_size);
        let placements = vec![None; tiles.len()];
        Self {
            radius,
            tiles,
            neighbors,
            rings,
            junctions,
            placements,
            placed_count: 0,
        }
    }

    /// Board radius in hexes
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Total number of tiles
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The ordered tile coordinates
    #[must_use]
    pub fn tiles(&self) -> &[Axial] {
        &self.tiles
    }

    /// Tile indices grouped by ring, center outward
    #[must_use]
    pub fn rings(&self) -> &[Vec<usize>] {
        &self.rings
    }

    /// The board's junction map
    #[must_use]
    pub const fn junctions(&self) -> &JunctionMap {
        &self.junctions
    }

    /// Number of placed tiles
    #[must_use]
    pub const fn placed_count(&self) -> usize {
        self.placed_count
    }

    /// Number of still-empty tiles
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.tile_count() - self.placed_count
    }

    /// The placement at a tile index, if any
    #[must_use]
    pub fn placement(&self, tile_idx: usize) -> Option<&Placement> {
        self.placements.get(tile_idx).and_then(Option::as_ref)
    }

    /// Whether a tile index is unoccupied
    #[must_use]
    pub fn is_empty_at(&self, tile_idx: usize) -> bool {
        self.placement(tile_idx).is_none()
    }

    /// Neighbor tile indices in direction order
    #[must_use]
    pub fn neighbor_indices(&self, tile_idx: usize) -> [Option<usize>; EDGE_COUNT] {
        self.neighbors
            .get(tile_idx)
            .copied()
            .unwrap_or([None; EDGE_COUNT])
    }

    /// Count placed neighbors around a tile
    #[must_use]
    pub fn neighbor_placement_count(&self, tile_idx: usize) -> usize {
        self.neighbors
            .get(tile_idx)
            .map_or(0, |row| {
                row.iter()
                    .filter(|n| n.is_some_and(|idx| self.placement(idx).is_some()))
                    .count()
            })
    }

    /// Check whether oriented edge colors may be placed at a tile index
    ///
    /// Valid when the cell is empty and every placed neighbor shows the
    /// same color on the shared edge (neighbor side `(dir + 3) % 6` against
    /// candidate side `dir`). With no placed neighbor at all, only the very
    /// first placement on an empty board is accepted; an isolated island
    /// would trivially pass the color checks without joining the board.
    #[must_use]
    pub fn can_place(&self, tile_idx: usize, oriented: &SideColors) -> bool {
        if self.placement(tile_idx).is_some() {
            return false;
        }
        let Some(neighbor_row) = self.neighbors.get(tile_idx) else {
            return false;
        };
        let mut has_neighbor = false;
        for (dir, neighbor_idx) in neighbor_row.iter().enumerate() {
            let Some(placement) = neighbor_idx.and_then(|idx| self.placement(idx)) else {
                continue;
            };
            has_neighbor = true;
            let opposite = (dir + 3) % EDGE_COUNT;
            let neighbor_color = placement.side_colors.get(opposite);
            if neighbor_color != oriented.get(dir) {
                return false;
            }
        }
        has_neighbor || self.placed_count == 0
    }

    /// Place a combo at the given rotation step if edge matching allows it
    ///
    /// Returns `true` and commits on success; `false` leaves the board
    /// untouched. The step is normalized for the combo's pattern first.
    pub fn try_place(&mut self, tile_idx: usize, combo: Combo, step: usize) -> bool {
        let normalized = combo.normalize_rotation_step(step);
        let oriented = combo.oriented_side_colors(normalized);
        if !self.can_place(tile_idx, &oriented) {
            return false;
        }
        self.commit(tile_idx, combo, normalized, oriented);
        true
    }

    /// Place a combo without adjacency checks (bulk pre-assignment)
    ///
    /// Still refuses occupied cells. Used when an entire board is assigned
    /// at once from quota output, where adjacency is not a constraint.
    pub fn force_place(&mut self, tile_idx: usize, combo: Combo) -> bool {
        if self.placement(tile_idx).is_some() {
            return false;
        }
        let normalized = combo.normalize_rotation_step(combo.rotation_step);
        let oriented = combo.oriented_side_colors(normalized);
        self.commit(tile_idx, combo, normalized, oriented);
        true
    }

    fn commit(&mut self, tile_idx: usize, combo: Combo, step: usize, oriented: SideColors) {
        let placed = Combo {
            pattern: combo.pattern,
            rotation_step: step,
        };
        if let Some(slot) = self.placements.get_mut(tile_idx) {
            *slot = Some(Placement {
                combo: placed,
                side_colors: oriented,
            });
            self.placed_count += 1;
        }
    }

    /// Remove a placement, returning its combo
    pub fn remove_placement(&mut self, tile_idx: usize) -> Option<Combo> {
        let removed = self.placements.get_mut(tile_idx).and_then(Option::take);
        if removed.is_some() {
            self.placed_count -= 1;
        }
        removed.map(|placement| placement.combo)
    }

    /// Clear all placements
    pub fn clear(&mut self) {
        for slot in &mut self.placements {
            *slot = None;
        }
        self.placed_count = 0;
    }

    /// Whether all three tiles around a junction are placed
    #[must_use]
    pub fn is_junction_ready(&self, junction: &Junction) -> bool {
        junction.is_ready(|idx| self.placement(idx).is_some())
    }

    /// Dominant primary color around a junction, if any tile is placed
    #[must_use]
    pub fn junction_dominant_color(&self, junction: &Junction) -> Option<ColorIndex> {
        junction.dominant_color(|idx| self.placement(idx).map(|p| p.combo.pattern.primary_color()))
    }

    /// Keys of all junctions whose three tiles are placed
    #[must_use]
    pub fn ready_junctions(&self) -> Vec<JunctionKey> {
        let mut keys: Vec<JunctionKey> = self
            .junctions
            .iter()
            .filter(|(_, junction)| self.is_junction_ready(junction))
            .map(|(key, _)| *key)
            .collect();
        keys.sort_unstable();
        keys
    }
}
