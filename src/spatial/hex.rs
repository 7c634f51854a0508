//! Axial hex coordinates and grid generation
//!
//! Pointy-top hexagons in axial coordinates `(q, r)` with the derived cube
//! coordinate `s = -q - r`. The board is the filled hexagon of a given
//! radius, tiles ordered column-major the way the grid generator emits them.

use crate::io::configuration::EDGE_COUNT;

/// Neighbor offsets in direction order
///
/// Direction `d` here and direction `(d + 3) % 6` on the neighbor denote
/// the same shared edge, which is what edge matching relies on.
pub const NEIGHBOR_DIRS: [(i32, i32); EDGE_COUNT] =
    [(-1, 1), (-1, 0), (0, -1), (1, -1), (1, 0), (0, 1)];

/// Axial grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axial {
    /// Column axis
    pub q: i32,
    /// Diagonal row axis
    pub r: i32,
}

impl Axial {
    /// Create a coordinate from its two free axes
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived third cube coordinate; `q + r + s == 0` always holds
    #[must_use]
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance from the origin (ring index)
    #[must_use]
    pub const fn distance_from_origin(&self) -> i32 {
        let q = self.q.abs();
        let r = self.r.abs();
        let s = self.s().abs();
        let m = if q > r { q } else { r };
        if m > s { m } else { s }
    }

    /// Hex distance to another coordinate
    #[must_use]
    pub const fn distance_to(&self, other: &Self) -> i32 {
        let diff = Self::new(self.q - other.q, self.r - other.r);
        diff.distance_from_origin()
    }

    /// Neighbor coordinate in the given direction
    #[must_use]
    pub fn neighbor(&self, direction: usize) -> Self {
        let (dq, dr) = NEIGHBOR_DIRS
            .get(direction % EDGE_COUNT)
            .copied()
            .unwrap_or((0, 0));
        Self::new(self.q + dq, self.r + dr)
    }

    /// Pixel-space center for a pointy-top layout of the given hex size
    #[must_use]
    pub fn to_pixel(&self, size: f64) -> (f64, f64) {
        let x = size * 3.0_f64.sqrt() * (f64::from(self.q) + f64::from(self.r) / 2.0);
        let y = size * 1.5 * f64::from(self.r);
        (x, y)
    }

    /// Polar angle of the tile center, used to order tiles within a ring
    #[must_use]
    pub fn angle(&self) -> f64 {
        let (x, y) = self.to_pixel(1.0);
        y.atan2(x)
    }

    /// The six vertex positions for this tile at the given hex size
    ///
    /// Vertex `i` sits at angle `60i - 30` degrees from the center; even
    /// vertices are the "junction" corners shared by three tiles.
    #[must_use]
    pub fn vertex_positions(&self, size: f64) -> [(f64, f64); EDGE_COUNT] {
        let (cx, cy) = self.to_pixel(size);
        let mut verts = [(0.0, 0.0); EDGE_COUNT];
        for (i, vert) in verts.iter_mut().enumerate() {
            let angle = (f64::from(60 * i as i32 - 30)).to_radians();
            *vert = (
                size.mul_add(angle.cos(), cx),
                size.mul_add(angle.sin(), cy),
            );
        }
        verts
    }
}

/// Number of tiles in a filled hexagon of the given radius
#[must_use]
pub const fn tile_count_for_radius(radius: i32) -> usize {
    (3 * radius * (radius + 1) + 1) as usize
}

/// Generate all tiles of a filled hexagonal board, column by column
#[must_use]
pub fn generate_axial_grid(radius: i32) -> Vec<Axial> {
    let mut tiles = Vec::with_capacity(tile_count_for_radius(radius));
    for q in -radius..=radius {
        let r_lo = (-radius).max(-q - radius);
        let r_hi = radius.min(-q + radius);
        for r in r_lo..=r_hi {
            tiles.push(Axial::new(q, r));
        }
    }
    tiles
}

/// Per-tile neighbor indices in direction order; `None` past the board edge
#[must_use]
pub fn build_neighbor_table(tiles: &[Axial]) -> Vec<[Option<usize>; EDGE_COUNT]> {
    let index_map: std::collections::HashMap<Axial, usize> = tiles
        .iter()
        .enumerate()
        .map(|(idx, tile)| (*tile, idx))
        .collect();
    tiles
        .iter()
        .map(|tile| {
            let mut row = [None; EDGE_COUNT];
            for (dir, slot) in row.iter_mut().enumerate() {
                *slot = index_map.get(&tile.neighbor(dir)).copied();
            }
            row
        })
        .collect()
}

/// Tile indices grouped by ring distance, each ring sorted by polar angle
///
/// Ring 0 is the center tile; the auto-fill walks rings outward so the
/// board grows from the middle.
#[must_use]
pub fn rings_by_distance(tiles: &[Axial]) -> Vec<Vec<usize>> {
    let mut rings: Vec<Vec<usize>> = Vec::new();
    for (idx, tile) in tiles.iter().enumerate() {
        let dist = tile.distance_from_origin() as usize;
        if rings.len() <= dist {
            rings.resize_with(dist + 1, Vec::new);
        }
        if let Some(ring) = rings.get_mut(dist) {
            ring.push(idx);
        }
    }
    for ring in &mut rings {
        ring.sort_by(|&a, &b| {
            let angle_a = tiles.get(a).map_or(0.0, Axial::angle);
            let angle_b = tiles.get(b).map_or(0.0, Axial::angle);
            angle_a.total_cmp(&angle_b)
        });
    }
    rings
}
