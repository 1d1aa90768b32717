//! Random standard-map generation.
//!
//! Shuffles the standard terrain and number-token multisets independently
//! and rejects any layout where two red-numbered (6/8) tiles end up
//! adjacent. Attempts run in a scratch buffer; the caller commits the
//! result to a [`BoardState`] only on success, so a failed run leaves the
//! board untouched.

use crate::board::{is_red_number, Terrain, Tile};
use crate::hex::{HexGrid, TILE_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound on reshuffle attempts before giving up.
pub const MAX_ATTEMPTS: usize = 5000;

/// The red-number constraint could not be satisfied within the attempt
/// bound. Vanishingly rare on the standard board, but the caller must
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not place number tokens without adjacent 6/8 within {attempts} attempts")]
pub struct GenerationExhausted {
    pub attempts: usize,
}

/// The standard terrain multiset: wood x4, brick x3, sheep x4, wheat x4,
/// ore x3, desert x1.
fn standard_terrains() -> Vec<Terrain> {
    let mut terrains = Vec::with_capacity(TILE_COUNT);
    terrains.extend(std::iter::repeat(Terrain::Wood).take(4));
    terrains.extend(std::iter::repeat(Terrain::Brick).take(3));
    terrains.extend(std::iter::repeat(Terrain::Sheep).take(4));
    terrains.extend(std::iter::repeat(Terrain::Wheat).take(4));
    terrains.extend(std::iter::repeat(Terrain::Ore).take(3));
    terrains.push(Terrain::Desert);
    terrains
}

/// The standard number-token multiset (18 tokens, desert gets none):
/// 2 and 12 once each, 3-6 and 8-11 twice each.
fn standard_numbers() -> Vec<u8> {
    vec![2, 12, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11]
}

/// Generate a random standard layout with the thread-local RNG.
pub fn generate_standard_map(grid: &HexGrid) -> Result<Vec<Tile>, GenerationExhausted> {
    let mut rng = rand::thread_rng();
    generate_standard_map_with_rng(grid, &mut rng)
}

/// Generate a random standard layout with a provided RNG, for deterministic
/// generation in tests.
pub fn generate_standard_map_with_rng<R: Rng>(
    grid: &HexGrid,
    rng: &mut R,
) -> Result<Vec<Tile>, GenerationExhausted> {
    let terrains = standard_terrains();
    let numbers = standard_numbers();

    for attempt in 0..MAX_ATTEMPTS {
        let mut shuffled_terrains = terrains.clone();
        let mut shuffled_numbers = numbers.clone();
        shuffled_terrains.shuffle(rng);
        shuffled_numbers.shuffle(rng);

        let layout = assemble(&shuffled_terrains, &shuffled_numbers);
        if no_adjacent_red_numbers(grid, &layout) {
            debug!(attempt, "generated standard map");
            return Ok(layout);
        }
    }

    warn!(attempts = MAX_ATTEMPTS, "map generation exhausted");
    Err(GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Pair the shuffled terrains with the shuffled numbers; the desert tile
/// takes no number.
fn assemble(terrains: &[Terrain], numbers: &[u8]) -> Vec<Tile> {
    let mut next_number = numbers.iter().copied();
    terrains
        .iter()
        .map(|&terrain| Tile {
            terrain,
            number: match terrain {
                Terrain::Desert => None,
                _ => next_number.next(),
            },
        })
        .collect()
}

/// Validate the red-number constraint: no two tiles bearing 6 or 8 may be
/// grid-adjacent.
fn no_adjacent_red_numbers(grid: &HexGrid, layout: &[Tile]) -> bool {
    for (i, tile) in layout.iter().enumerate() {
        let Some(n) = tile.number else { continue };
        if !is_red_number(n) {
            continue;
        }
        for &j in grid.neighbors(i) {
            if layout[j].number.is_some_and(is_red_number) {
                return false;
            }
        }
    }
    true
}
