//! Hex coordinate system and the fixed 19-tile board grid.
//!
//! We use axial coordinates `(q, r)` with the implicit third component
//! `s = -q - r`. The standard board is the radius-2 hexagon: all coordinates
//! with `max(|q|, |r|, |s|) <= 2`, which yields exactly 19 tiles.

use serde::{Deserialize, Serialize};

/// Pixel radius of a hex tile, matching the SVG front end.
pub const HEX_SIZE: f64 = 50.0;

/// Board radius in tiles (center plus two rings).
pub const BOARD_RADIUS: i32 = 2;

/// Number of tiles on the standard board.
pub const TILE_COUNT: usize = 19;

/// The six axial direction vectors, clockwise starting from East.
pub const HEX_DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Axial coordinate for the hex grid.
///
/// `q` increases going east, `r` increases going southeast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r).
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Whether this coordinate lies on the standard radius-2 board.
    pub fn on_standard_board(&self) -> bool {
        self.q.abs().max(self.r.abs()).max(self.s().abs()) <= BOARD_RADIUS
    }

    /// The six neighboring coordinates, in [`HEX_DIRECTIONS`] order.
    pub fn neighbors(&self) -> [HexCoord; 6] {
        HEX_DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q + dq, self.r + dr))
    }

    /// Convert to pixel coordinates (center of hex), pointy-top orientation.
    pub fn to_pixel(&self, hex_size: f64) -> (f64, f64) {
        let x = hex_size * 3.0_f64.sqrt() * (self.q as f64 + self.r as f64 / 2.0);
        let y = hex_size * 1.5 * self.r as f64;
        (x, y)
    }
}

/// The static tile grid of the standard board.
///
/// Tile indices are positions in the canonical coordinate ordering
/// (`r` ascending, then `q` ascending). That ordering is the only index
/// contract consumers may rely on.
#[derive(Debug, Clone)]
pub struct HexGrid {
    coords: Vec<HexCoord>,
    /// Neighbor tile indices per tile, precomputed at construction.
    neighbors: Vec<Vec<usize>>,
}

impl HexGrid {
    /// Build the standard 19-tile radius-2 grid.
    pub fn standard() -> Self {
        let mut coords = Vec::with_capacity(TILE_COUNT);
        for q in -BOARD_RADIUS..=BOARD_RADIUS {
            for r in -BOARD_RADIUS..=BOARD_RADIUS {
                let c = HexCoord::new(q, r);
                if c.on_standard_board() {
                    coords.push(c);
                }
            }
        }
        coords.sort_by_key(|c| (c.r, c.q));

        let index_of = |c: &HexCoord| coords.iter().position(|x| x == c);
        let neighbors = coords
            .iter()
            .map(|c| c.neighbors().iter().filter_map(index_of).collect())
            .collect();

        Self { coords, neighbors }
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates in canonical order.
    pub fn coords(&self) -> &[HexCoord] {
        &self.coords
    }

    pub fn coord(&self, tile: usize) -> HexCoord {
        self.coords[tile]
    }

    /// Indices of the tiles adjacent to `tile` (3 to 6 of them).
    pub fn neighbors(&self, tile: usize) -> &[usize] {
        &self.neighbors[tile]
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_grid_has_19_tiles() {
        let grid = HexGrid::standard();
        assert_eq!(grid.len(), TILE_COUNT);

        let unique: HashSet<_> = grid.coords().iter().collect();
        assert_eq!(unique.len(), TILE_COUNT);
    }

    #[test]
    fn canonical_ordering_is_r_then_q() {
        let grid = HexGrid::standard();
        let mut sorted = grid.coords().to_vec();
        sorted.sort_by_key(|c| (c.r, c.q));
        assert_eq!(grid.coords(), &sorted[..]);

        // First row of the standard board is r = -2, q in 0..=2
        assert_eq!(grid.coord(0), HexCoord::new(0, -2));
        assert_eq!(grid.coord(1), HexCoord::new(1, -2));
        assert_eq!(grid.coord(2), HexCoord::new(2, -2));
    }

    #[test]
    fn neighbor_symmetry() {
        let grid = HexGrid::standard();
        for i in 0..grid.len() {
            for &j in grid.neighbors(i) {
                assert!(
                    grid.neighbors(j).contains(&i),
                    "neighbor relation must be symmetric ({i} vs {j})"
                );
            }
        }
    }

    #[test]
    fn neighbor_counts() {
        let grid = HexGrid::standard();
        for i in 0..grid.len() {
            let n = grid.neighbors(i).len();
            // Corner tiles have 3 neighbors, edge tiles 4, inner tiles 6.
            assert!((3..=6).contains(&n), "tile {i} has {n} neighbors");
        }
        // The center tile touches all six directions.
        let center = grid
            .coords()
            .iter()
            .position(|c| *c == HexCoord::new(0, 0))
            .unwrap();
        assert_eq!(grid.neighbors(center).len(), 6);
    }

    #[test]
    fn pixel_projection() {
        let (x, y) = HexCoord::new(0, 0).to_pixel(HEX_SIZE);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = HexCoord::new(0, 1).to_pixel(HEX_SIZE);
        assert!((x - HEX_SIZE * 3.0_f64.sqrt() / 2.0).abs() < 1e-9);
        assert!((y - HEX_SIZE * 1.5).abs() < 1e-9);
    }
}
