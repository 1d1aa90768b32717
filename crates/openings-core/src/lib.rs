//! Opening explorer core for the standard 19-tile Catan board.
//!
//! This crate models the fixed hexagonal board, lets an editor front end
//! assign terrains and number tokens to tiles, and ranks pairs of starting
//! settlement placements by expected resource production.
//!
//! # Architecture
//!
//! The topology is static: [`hex::HexGrid`] generates the 19 axial tile
//! coordinates and [`graph::VertexGraph`] derives the 54 settlement spots
//! and 72 edges from tile corner geometry, built once at startup. Only
//! [`board::BoardState`] is mutable, and scoring is a pure read over it.
//!
//! The crate is platform-agnostic: native for tests and tooling, or
//! WebAssembly (feature `wasm`) for the interactive SVG front end.
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and the fixed tile grid
//! - [`graph`]: Settlement-vertex graph derived from corner geometry
//! - [`board`]: Terrain and number-token state per tile
//! - [`generator`]: Random standard-map generation
//! - [`scoring`]: Pip statistics and the composite pair score
//! - [`ranking`]: Enumeration and ranking of opening pairs
//! - [`editor`]: Command surface consumed by the front end
//! - [`render`]: Serializable snapshot for the renderer

pub mod board;
pub mod editor;
pub mod generator;
pub mod graph;
pub mod hex;
pub mod ranking;
pub mod render;
pub mod scoring;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{BoardState, Resource, Terrain, Tile, NUMBER_CYCLE};
pub use editor::{AlwaysConfirm, CycleDirection, Editor, EditorError, UserPrompt};
pub use generator::{generate_standard_map, GenerationExhausted, MAX_ATTEMPTS};
pub use graph::{Vertex, VertexGraph, VertexId, EDGE_COUNT, QUANTIZE_EPSILON, VERTEX_COUNT};
pub use hex::{HexCoord, HexGrid, HEX_SIZE, TILE_COUNT};
pub use ranking::{rank_openings, Opening};
pub use render::{render_model, Bounds, RenderModel};
pub use scoring::{
    board_pip_totals, dice_probability, pair_details, pip_count, score_pair, PairDetails,
    PairScore,
};
