//! Settlement-vertex graph derived from tile corner geometry.
//!
//! Each tile contributes six polygon corners; corners shared by up to three
//! tiles must collapse into a single vertex. We get there by quantizing
//! corner coordinates onto an integer lattice before keying, which absorbs
//! floating-point round-off. The standard 19-tile board always produces 54
//! vertices and 72 undirected edges.
//!
//! The graph is built once and never changes afterwards; only the terrain
//! and number assignment on tiles is mutable.

use crate::hex::{HexGrid, HEX_SIZE};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Integer id of a vertex; ids are assigned in construction order
/// (tile order = canonical coordinate order, corner order 0..6), which
/// makes vertex enumeration deterministic.
pub type VertexId = u8;

/// Vertices on the standard board.
pub const VERTEX_COUNT: usize = 54;

/// Undirected vertex-adjacency edges on the standard board.
pub const EDGE_COUNT: usize = 72;

/// Quantization step for merging near-identical corner coordinates.
///
/// Must be larger than floating-point round-off and smaller than any true
/// distance between distinct corners (the shortest is `HEX_SIZE`, so 1e-4
/// leaves nine orders of magnitude of headroom).
pub const QUANTIZE_EPSILON: f64 = 1e-4;

/// A settlement spot: a point where two or three tiles meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Pixel position of the corner.
    pub x: f64,
    pub y: f64,
    /// Indices of the tiles touching this vertex (1-3 entries).
    pub tiles: SmallVec<[u8; 3]>,
    /// Ids of the vertices one edge away (2-3 entries).
    pub neighbors: SmallVec<[VertexId; 3]>,
}

/// The static vertex/edge topology of the board.
#[derive(Debug, Clone)]
pub struct VertexGraph {
    vertices: Vec<Vertex>,
}

impl VertexGraph {
    /// Derive the vertex graph from the tile grid. One-shot and
    /// deterministic.
    pub fn build(grid: &HexGrid) -> Self {
        let mut vertices: Vec<Vertex> = Vec::with_capacity(VERTEX_COUNT);
        // Transient quantized-corner lookup; only the arena survives.
        let mut by_key: HashMap<(i64, i64), VertexId> = HashMap::with_capacity(VERTEX_COUNT);

        for (tile, coord) in grid.coords().iter().enumerate() {
            let (cx, cy) = coord.to_pixel(HEX_SIZE);
            let corner_ids: [VertexId; 6] = std::array::from_fn(|i| {
                let (x, y) = corner(cx, cy, i);
                let key = quantize(x, y);
                let id = *by_key.entry(key).or_insert_with(|| {
                    vertices.push(Vertex {
                        x,
                        y,
                        tiles: SmallVec::new(),
                        neighbors: SmallVec::new(),
                    });
                    (vertices.len() - 1) as VertexId
                });
                vertices[id as usize].tiles.push(tile as u8);
                id
            });

            // Consecutive corners of the same tile are adjacent vertices.
            for i in 0..6 {
                link(&mut vertices, corner_ids[i], corner_ids[(i + 1) % 6]);
            }
        }

        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id as usize]
    }

    /// Iterate over all vertex ids in canonical order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(|i| i as VertexId)
    }

    /// Indices of the tiles touching `id`.
    pub fn adjacent_tiles(&self, id: VertexId) -> &[u8] {
        &self.vertices[id as usize].tiles
    }

    /// Ids of the vertices one edge away from `id`.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id as usize].neighbors
    }

    /// Whether two vertices are joined by an edge.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices[a as usize].neighbors.contains(&b)
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum::<usize>() / 2
    }
}

/// Pixel position of corner `i` of a hex centered at `(cx, cy)`.
/// Pointy-top corners sit at angles `60°·i - 30°`.
fn corner(cx: f64, cy: f64, i: usize) -> (f64, f64) {
    let angle = (60.0 * i as f64 - 30.0).to_radians();
    (cx + HEX_SIZE * angle.cos(), cy + HEX_SIZE * angle.sin())
}

/// Quantize a corner position onto the integer lattice used for dedup keys.
fn quantize(x: f64, y: f64) -> (i64, i64) {
    (
        (x / QUANTIZE_EPSILON).round() as i64,
        (y / QUANTIZE_EPSILON).round() as i64,
    )
}

/// Record an undirected edge between `a` and `b`, ignoring duplicates
/// (shared edges are visited once per adjoining tile).
fn link(vertices: &mut [Vertex], a: VertexId, b: VertexId) {
    if !vertices[a as usize].neighbors.contains(&b) {
        vertices[a as usize].neighbors.push(b);
    }
    if !vertices[b as usize].neighbors.contains(&a) {
        vertices[b as usize].neighbors.push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn standard_graph() -> VertexGraph {
        VertexGraph::build(&HexGrid::standard())
    }

    #[test]
    fn standard_board_has_54_vertices() {
        assert_eq!(standard_graph().len(), VERTEX_COUNT);
    }

    #[test]
    fn standard_board_has_72_edges() {
        assert_eq!(standard_graph().edge_count(), EDGE_COUNT);
    }

    #[test]
    fn vertex_degree_bounds() {
        let graph = standard_graph();
        for id in graph.ids() {
            let v = graph.vertex(id);
            assert!(
                (1..=3).contains(&v.tiles.len()),
                "vertex {id} touches {} tiles",
                v.tiles.len()
            );
            assert!(
                (2..=3).contains(&v.neighbors.len()),
                "vertex {id} has {} neighbors",
                v.neighbors.len()
            );
        }
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let graph = standard_graph();
        for id in graph.ids() {
            assert!(!graph.are_adjacent(id, id));
            for &n in graph.neighbors(id) {
                assert!(graph.are_adjacent(n, id));
            }
        }
    }

    #[test]
    fn interior_tile_corners_touch_three_tiles() {
        let graph = standard_graph();
        // All six corners of the center tile are interior vertices.
        let center = 9u8; // index of (0, 0) in canonical order
        let corner_vertices: Vec<_> = graph
            .ids()
            .filter(|&id| graph.adjacent_tiles(id).contains(&center))
            .collect();
        assert_eq!(corner_vertices.len(), 6);
        for id in corner_vertices {
            assert_eq!(graph.adjacent_tiles(id).len(), 3);
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let a = standard_graph();
        let b = standard_graph();
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(va.tiles, vb.tiles);
            assert_eq!(va.neighbors, vb.neighbors);
            assert_eq!((va.x, va.y), (vb.x, vb.y));
        }
    }
}
