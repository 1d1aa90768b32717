//! Opening evaluation: pip statistics and the composite pair score.
//!
//! A settlement produces from every adjacent numbered tile, so a pair of
//! settlements is scored over the tiles each one touches. A tile adjacent
//! to both vertices is deliberately counted once per settlement (twice in
//! total): two settlements on the same tile each collect from it
//! independently.
//!
//! Number tokens are read permissively: any tile with a token contributes
//! pips even if the editor left its terrain as desert. Resource coverage,
//! on the other hand, requires a producing terrain.

use crate::board::{BoardState, Resource};
use crate::graph::{VertexGraph, VertexId};
use serde::{Deserialize, Serialize};

/// Pip count for a number token: the number of 2d6 combinations rolling it,
/// matching the dots printed on physical tokens.
pub fn pip_count(n: u8) -> u32 {
    match n {
        2 | 12 => 1,
        3 | 11 => 2,
        4 | 10 => 3,
        5 | 9 => 4,
        6 | 8 => 5,
        _ => 0,
    }
}

/// Probability of rolling a token value with two dice.
pub fn dice_probability(n: u8) -> f64 {
    pip_count(n) as f64 / 36.0
}

/// Per-resource multiplier applied once per adjacent producing tile.
/// Wheat and ore compound a bonus, sheep a malus, wood and brick neither.
fn resource_bonus(resource: Resource) -> f64 {
    match resource {
        Resource::Wheat | Resource::Ore => 1.1,
        Resource::Wood | Resource::Brick => 1.0,
        Resource::Sheep => 0.9,
    }
}

/// Penalty factor per dice number shared between the two settlements.
const REPEAT_PENALTY: f64 = 0.95;

/// Summary statistics for a scored vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Composite ranking score; 0 when the pair touches no production.
    pub score: f64,
    /// Pips over all adjacent numbered tiles, shared tiles counted twice.
    pub total_pips: u32,
    /// Distinct resource types among adjacent producing tiles.
    pub resources_covered: usize,
    /// Distinct dice numbers appearing next to both settlements.
    pub repeated_numbers: usize,
}

/// Per-resource production breakdown for display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceBreakdown {
    /// Summed per-roll probability over matching tiles.
    pub prob: f64,
    /// Summed pips over matching tiles.
    pub pips: u32,
}

/// Detailed statistics for one opening, computed on demand for the ranked
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDetails {
    /// The dice numbers adjacent to both settlements, ascending.
    pub repeated_values: Vec<u8>,
    /// Pips over all adjacent numbered tiles, shared tiles counted twice.
    pub total_pips: u32,
    /// Breakdown per resource, in [`Resource::ALL`] order.
    pub per_resource: [ResourceBreakdown; 5],
}

/// Bitmask of the dice numbers on tiles adjacent to `v` (bit `n` set for
/// token value `n`).
fn number_set(board: &BoardState, graph: &VertexGraph, v: VertexId) -> u16 {
    let mut mask = 0u16;
    for &tile in graph.adjacent_tiles(v) {
        if let Some(n) = board.tile(tile as usize).number {
            mask |= 1 << n;
        }
    }
    mask
}

/// Score a pair of settlement spots under the multiplicative policy:
///
/// ```text
/// score = total_pips
///       x resources_covered
///       x 1.1 ^ (wheat tiles + ore tiles)
///       x 0.9 ^ (sheep tiles)
///       x 0.95 ^ (repeated dice numbers)
/// ```
///
/// Monotonic in pips and resource breadth; the exponential terms favor
/// wheat/ore-heavy spots and discourage token repetition without a hard
/// cutoff.
pub fn score_pair(board: &BoardState, graph: &VertexGraph, a: VertexId, b: VertexId) -> PairScore {
    let mut total_pips = 0u32;
    let mut present = [false; 5];
    let mut tile_counts = [0u32; 5];

    for v in [a, b] {
        for &tile in graph.adjacent_tiles(v) {
            let tile = board.tile(tile as usize);
            let Some(n) = tile.number else { continue };
            total_pips += pip_count(n);
            if let Some(resource) = tile.terrain.resource() {
                present[resource.index()] = true;
                tile_counts[resource.index()] += 1;
            }
        }
    }

    let repeated_numbers =
        (number_set(board, graph, a) & number_set(board, graph, b)).count_ones() as usize;
    let resources_covered = present.iter().filter(|p| **p).count();

    let mut score = total_pips as f64 * resources_covered as f64;
    for resource in Resource::ALL {
        score *= resource_bonus(resource).powi(tile_counts[resource.index()] as i32);
    }
    score *= REPEAT_PENALTY.powi(repeated_numbers as i32);

    PairScore {
        score,
        total_pips,
        resources_covered,
        repeated_numbers,
    }
}

/// Detailed breakdown for a pair, under the same shared-tile
/// double-counting rule as [`score_pair`].
pub fn pair_details(
    board: &BoardState,
    graph: &VertexGraph,
    a: VertexId,
    b: VertexId,
) -> PairDetails {
    let mut total_pips = 0u32;
    let mut per_resource = [ResourceBreakdown::default(); 5];

    for v in [a, b] {
        for &tile in graph.adjacent_tiles(v) {
            let tile = board.tile(tile as usize);
            let Some(n) = tile.number else { continue };
            total_pips += pip_count(n);
            if let Some(resource) = tile.terrain.resource() {
                per_resource[resource.index()].prob += dice_probability(n);
                per_resource[resource.index()].pips += pip_count(n);
            }
        }
    }

    let shared = number_set(board, graph, a) & number_set(board, graph, b);
    let repeated_values = (2..=12u8).filter(|n| shared & (1 << n) != 0).collect();

    PairDetails {
        repeated_values,
        total_pips,
        per_resource,
    }
}

/// Pips per resource over the whole board, ignoring vertex adjacency.
/// The denominator for coverage percentages: what fraction of the board's
/// production of each resource an opening captures.
pub fn board_pip_totals(board: &BoardState) -> [u32; 5] {
    let mut totals = [0u32; 5];
    for tile in board.tiles() {
        let (Some(resource), Some(n)) = (tile.terrain.resource(), tile.number) else {
            continue;
        };
        totals[resource.index()] += pip_count(n);
    }
    totals
}
