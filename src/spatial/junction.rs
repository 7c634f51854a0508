//! Junction topology
//!
//! A junction is a point where three hexagon corners meet. Junctions are
//! derived once from tile vertex positions for a given board size and never
//! change with placements; only their readiness does.

use std::collections::HashMap;

use crate::combo::ColorIndex;
use crate::io::configuration::{COLOR_COUNT, JUNCTION_KEY_SCALE};
use crate::spatial::hex::Axial;

// Only the even corners are junction-eligible. Corner parity agrees
// across neighboring tiles, so the odd family never registers anywhere.
const JUNCTION_VERTICES: [usize; 3] = [0, 2, 4];

/// Quantized junction position used as a map key
///
/// Coordinates are scaled by [`JUNCTION_KEY_SCALE`] and rounded to
/// integers, so corners that differ only by float noise collapse to the
/// same junction instead of silently splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JunctionKey {
    /// Quantized x coordinate
    pub x: i64,
    /// Quantized y coordinate
    pub y: i64,
}

impl JunctionKey {
    /// Quantize a pixel-space position
    #[must_use]
    pub fn from_position(x: f64, y: f64) -> Self {
        Self {
            x: (x * JUNCTION_KEY_SCALE).round() as i64,
            y: (y * JUNCTION_KEY_SCALE).round() as i64,
        }
    }
}

/// A three-tile junction
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    /// Pixel-space position of the shared corner
    pub position: (f64, f64),
    /// The exactly-three contributing tile indices
    pub tiles: [usize; 3],
}

/// All junctions of a board, keyed by quantized position
///
/// Recomputed when the board size changes, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct JunctionMap {
    junctions: HashMap<JunctionKey, Junction>,
}

impl JunctionMap {
    /// Detect all three-corner junctions for the given tiles and hex size
    #[must_use]
    pub fn compute(tiles: &[Axial], size: f64) -> Self {
        let mut accumulator: HashMap<JunctionKey, ((f64, f64), Vec<usize>)> = HashMap::new();
        for (idx, tile) in tiles.iter().enumerate() {
            let verts = tile.vertex_positions(size);
            for vi in JUNCTION_VERTICES {
                let Some(&(vx, vy)) = verts.get(vi) else {
                    continue;
                };
                let key = JunctionKey::from_position(vx, vy);
                let entry = accumulator.entry(key).or_insert(((vx, vy), Vec::new()));
                if !entry.1.contains(&idx) {
                    entry.1.push(idx);
                }
            }
        }
        let junctions = accumulator
            .into_iter()
            .filter_map(|(key, (position, contributors))| {
                // Interior corners gather exactly three tiles; border corners fewer
                match contributors.as_slice() {
                    &[a, b, c, ..] => Some((
                        key,
                        Junction {
                            position,
                            tiles: [a, b, c],
                        },
                    )),
                    _ => None,
                }
            })
            .collect();
        Self { junctions }
    }

    /// Number of junctions on the board
    #[must_use]
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    /// Whether the board has no junctions (radius-0 boards)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// Look up a junction by key
    #[must_use]
    pub fn get(&self, key: &JunctionKey) -> Option<&Junction> {
        self.junctions.get(key)
    }

    /// Iterate all junctions with their keys
    pub fn iter(&self) -> impl Iterator<Item = (&JunctionKey, &Junction)> {
        self.junctions.iter()
    }

    /// Junctions touching the given tile
    pub fn around_tile(&self, tile_idx: usize) -> impl Iterator<Item = (&JunctionKey, &Junction)> {
        self.junctions
            .iter()
            .filter(move |(_, junction)| junction.tiles.contains(&tile_idx))
    }
}

impl Junction {
    /// A junction is ready once all three contributing tiles are placed
    #[must_use]
    pub fn is_ready(&self, placed: impl Fn(usize) -> bool) -> bool {
        self.tiles.iter().all(|&idx| placed(idx))
    }

    /// Most frequent primary combo color among placed contributing tiles
    ///
    /// Ties keep the first color encountered in tile order. Returns `None`
    /// when no contributing tile is placed.
    #[must_use]
    pub fn dominant_color(
        &self,
        primary_color_of: impl Fn(usize) -> Option<ColorIndex>,
    ) -> Option<ColorIndex> {
        let mut counts = [0usize; COLOR_COUNT];
        let mut seen_order: Vec<ColorIndex> = Vec::with_capacity(3);
        for &tile_idx in &self.tiles {
            let Some(color) = primary_color_of(tile_idx) else {
                continue;
            };
            if let Some(slot) = counts.get_mut(color) {
                *slot += 1;
                if !seen_order.contains(&color) {
                    seen_order.push(color);
                }
            }
        }
        let mut best: Option<(ColorIndex, usize)> = None;
        for color in seen_order {
            let count = counts.get(color).copied().unwrap_or(0);
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((color, count));
            }
        }
        best.map(|(color, _)| color)
    }
}
