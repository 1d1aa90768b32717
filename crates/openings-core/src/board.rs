//! Board state: terrain and number-token assignment per tile.
//!
//! The topology (which tiles exist, which vertices they share) is static and
//! lives in [`crate::hex::HexGrid`] and [`crate::graph::VertexGraph`]. This
//! module owns the mutable part: what terrain each tile shows and which dice
//! number sits on it.

use crate::hex::TILE_COUNT;
use serde::{Deserialize, Serialize};

/// Resource types produced by tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
}

impl Resource {
    /// All resource types, in display order.
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Ore,
    ];

    /// Stable index into per-resource arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name ("wool" for sheep tiles, Catan convention).
    pub fn pretty_name(&self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Sheep => "wool",
            Resource::Wheat => "wheat",
            Resource::Ore => "ore",
        }
    }
}

/// Terrain of a tile. Desert produces nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terrain {
    #[default]
    Desert,
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
}

impl Terrain {
    /// The editor's terrain cycle, in click order.
    pub const CYCLE: [Terrain; 6] = [
        Terrain::Desert,
        Terrain::Wood,
        Terrain::Brick,
        Terrain::Sheep,
        Terrain::Wheat,
        Terrain::Ore,
    ];

    /// The resource this terrain produces, if any.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Desert => None,
            Terrain::Wood => Some(Resource::Wood),
            Terrain::Brick => Some(Resource::Brick),
            Terrain::Sheep => Some(Resource::Sheep),
            Terrain::Wheat => Some(Resource::Wheat),
            Terrain::Ore => Some(Resource::Ore),
        }
    }

    /// Board color used by the front end.
    pub fn color(&self) -> &'static str {
        match self {
            Terrain::Desert => "#d7b98e",
            Terrain::Wood => "#2e7d32",
            Terrain::Brick => "#c62828",
            Terrain::Sheep => "#7cb342",
            Terrain::Wheat => "#f9a825",
            Terrain::Ore => "#546e7a",
        }
    }
}

/// The editor's number-token cycle: blank, then every token value (7 never
/// appears on a token).
pub const NUMBER_CYCLE: [Option<u8>; 11] = [
    None,
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(8),
    Some(9),
    Some(10),
    Some(11),
    Some(12),
];

/// Whether `n` is a valid number-token value.
pub fn is_valid_number(n: u8) -> bool {
    (2..=12).contains(&n) && n != 7
}

/// The high-probability tokens (6 and 8); two of these may never sit on
/// adjacent tiles in a generated map.
pub fn is_red_number(n: u8) -> bool {
    n == 6 || n == 8
}

/// A single tile's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tile {
    pub terrain: Terrain,
    /// Dice number token (2-12 except 7), None for blank.
    pub number: Option<u8>,
}

/// Mutable assignment of terrain and number tokens to the 19 tiles.
///
/// All operations are total and synchronous; no derived statistics are
/// cached, so every mutation is immediately visible to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    tiles: Vec<Tile>,
}

impl BoardState {
    /// An all-desert, all-blank board.
    pub fn new() -> Self {
        Self {
            tiles: vec![Tile::default(); TILE_COUNT],
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    pub fn set_terrain(&mut self, index: usize, terrain: Terrain) {
        self.tiles[index].terrain = terrain;
    }

    pub fn set_number(&mut self, index: usize, number: Option<u8>) {
        self.tiles[index].number = number;
    }

    /// Replace the whole layout at once (used by the map generator commit).
    pub fn set_tiles(&mut self, tiles: Vec<Tile>) {
        debug_assert_eq!(tiles.len(), self.tiles.len());
        self.tiles = tiles;
    }

    /// Set every tile back to desert with no number.
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            *tile = Tile::default();
        }
    }

    /// True iff every tile is desert with no number (the untouched board).
    pub fn is_default(&self) -> bool {
        self.tiles.iter().all(|t| *t == Tile::default())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
