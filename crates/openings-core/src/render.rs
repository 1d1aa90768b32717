//! Serializable render model for the external front end.
//!
//! The renderer itself (SVG, DOM, CSS) lives outside this crate; it
//! consumes this snapshot: board bounds, per-tile polygon geometry and
//! colors, number tokens with pip-dot counts, the per-vertex pip-sum
//! overlay, and optional settlement markers for a highlighted pair.

use crate::board::{is_red_number, BoardState, Terrain};
use crate::graph::{VertexGraph, VertexId};
use crate::hex::{HexGrid, HEX_SIZE};
use crate::scoring::pip_count;
use serde::Serialize;

/// View box of the board with a margin around the outer tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// One tile's drawing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub index: usize,
    pub q: i32,
    pub r: i32,
    pub center: (f64, f64),
    /// The six polygon corners, in drawing order.
    pub corners: Vec<(f64, f64)>,
    pub terrain: Terrain,
    pub color: &'static str,
    pub number: Option<u8>,
    /// Render the token text in the warning color.
    pub red: bool,
    /// Pip dots to draw under the token.
    pub pips: u32,
}

/// One settlement spot with its pip-sum overlay value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VertexView {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    /// Sum of pips over the adjacent tiles; the overlay skips zeros.
    pub pip_sum: u32,
}

/// Marker for one settlement of a highlighted opening ("1" or "2").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub vertex: VertexId,
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub bounds: Bounds,
    pub tiles: Vec<TileView>,
    pub vertices: Vec<VertexView>,
    pub markers: Vec<MarkerView>,
}

/// Compute the view bounds from the tile centers, padded so the outer
/// hexes fit.
pub fn board_bounds(grid: &HexGrid) -> Bounds {
    let centers: Vec<(f64, f64)> = grid.coords().iter().map(|c| c.to_pixel(HEX_SIZE)).collect();
    let pad = HEX_SIZE * 1.2;
    let min_x = centers.iter().map(|p| p.0).fold(f64::INFINITY, f64::min) - pad;
    let max_x = centers.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max) + pad;
    let min_y = centers.iter().map(|p| p.1).fold(f64::INFINITY, f64::min) - pad;
    let max_y = centers.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max) + pad;
    Bounds {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Build the render model, optionally marking a highlighted vertex pair.
pub fn render_model(
    grid: &HexGrid,
    graph: &VertexGraph,
    board: &BoardState,
    highlight: Option<(VertexId, VertexId)>,
) -> RenderModel {
    let tiles = grid
        .coords()
        .iter()
        .enumerate()
        .map(|(index, coord)| {
            let center = coord.to_pixel(HEX_SIZE);
            let corners = (0..6)
                .map(|i| {
                    let angle = (60.0 * i as f64 - 30.0).to_radians();
                    (
                        center.0 + HEX_SIZE * angle.cos(),
                        center.1 + HEX_SIZE * angle.sin(),
                    )
                })
                .collect();
            let tile = board.tile(index);
            TileView {
                index,
                q: coord.q,
                r: coord.r,
                center,
                corners,
                terrain: tile.terrain,
                color: tile.terrain.color(),
                number: tile.number,
                red: tile.number.is_some_and(is_red_number),
                pips: tile.number.map(pip_count).unwrap_or(0),
            }
        })
        .collect();

    let vertices = graph
        .ids()
        .map(|id| {
            let v = graph.vertex(id);
            let pip_sum = graph
                .adjacent_tiles(id)
                .iter()
                .filter_map(|&t| board.tile(t as usize).number)
                .map(pip_count)
                .sum();
            VertexView {
                id,
                x: v.x,
                y: v.y,
                pip_sum,
            }
        })
        .collect();

    let markers = match highlight {
        None => Vec::new(),
        Some((a, b)) => [(a, "1"), (b, "2")]
            .into_iter()
            .map(|(id, label)| {
                let v = graph.vertex(id);
                MarkerView {
                    vertex: id,
                    x: v.x,
                    y: v.y,
                    label,
                }
            })
            .collect(),
    };

    RenderModel {
        bounds: board_bounds(grid),
        tiles,
        vertices,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup() -> (HexGrid, VertexGraph, BoardState) {
        let grid = HexGrid::standard();
        let graph = VertexGraph::build(&grid);
        (grid, graph, BoardState::new())
    }

    #[test]
    fn model_covers_the_whole_board() {
        let (grid, graph, board) = setup();
        let model = render_model(&grid, &graph, &board, None);
        assert_eq!(model.tiles.len(), 19);
        assert_eq!(model.vertices.len(), 54);
        assert!(model.markers.is_empty());

        for tile in &model.tiles {
            assert_eq!(tile.corners.len(), 6);
            assert_eq!(tile.color, "#d7b98e"); // all desert
            assert_eq!(tile.pips, 0);
        }
    }

    #[test]
    fn bounds_contain_every_corner() {
        let (grid, graph, board) = setup();
        let model = render_model(&grid, &graph, &board, None);
        let b = model.bounds;
        for tile in &model.tiles {
            for &(x, y) in &tile.corners {
                assert!(x >= b.min_x && x <= b.min_x + b.width);
                assert!(y >= b.min_y && y <= b.min_y + b.height);
            }
        }
    }

    #[test]
    fn red_tokens_and_pips() {
        let (grid, graph, mut board) = setup();
        board.set_terrain(9, Terrain::Ore);
        board.set_number(9, Some(8));
        board.set_terrain(0, Terrain::Wood);
        board.set_number(0, Some(11));

        let model = render_model(&grid, &graph, &board, None);
        assert!(model.tiles[9].red);
        assert_eq!(model.tiles[9].pips, 5);
        assert!(!model.tiles[0].red);
        assert_eq!(model.tiles[0].pips, 2);

        // Vertex overlay sums pips of the adjacent tiles.
        let max_sum = model.vertices.iter().map(|v| v.pip_sum).max().unwrap();
        assert!(max_sum >= 5);
    }

    #[test]
    fn highlight_markers() {
        let (grid, graph, board) = setup();
        let model = render_model(&grid, &graph, &board, Some((0, 20)));
        assert_eq!(model.markers.len(), 2);
        assert_eq!(model.markers[0].label, "1");
        assert_eq!(model.markers[0].vertex, 0);
        assert_eq!(model.markers[1].label, "2");
        assert_eq!(model.markers[1].vertex, 20);
    }
}
