//! Enumerates and ranks candidate opening pairs.
//!
//! Every unordered pair of vertices is a candidate unless the two are
//! directly adjacent (the distance rule, reduced to immediate neighbors).
//! On the standard board that is C(54,2) - 72 = 1359 pairs. Scoring a pair
//! touches at most six tiles, so the whole ranking is a single cheap
//! synchronous pass.

use crate::board::BoardState;
use crate::graph::{VertexGraph, VertexId};
use crate::scoring::{board_pip_totals, pair_details, score_pair, PairDetails};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A ranked opening: a pair of non-adjacent settlement spots with its
/// statistics. Ephemeral; recomputed on every ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub a: VertexId,
    pub b: VertexId,
    pub score: f64,
    pub total_pips: u32,
    pub resources_covered: usize,
    pub repeated_numbers: usize,
    /// Per-resource breakdown and repeated token values, for display.
    pub details: PairDetails,
    /// Fraction of the board's total pips per resource this opening
    /// captures, in [`crate::board::Resource::ALL`] order. Zero for
    /// resources absent from the board.
    pub coverage: [f64; 5],
}

/// Score every legal pair and return the best `top_k`, sorted by
/// non-increasing score.
///
/// Pairs are enumerated in ascending `(a, b)` id order and the sort is
/// stable, so ties keep their discovery order; the output is fully
/// deterministic for a given board.
pub fn rank_openings(board: &BoardState, graph: &VertexGraph, top_k: usize) -> Vec<Opening> {
    let mut scored = Vec::with_capacity(graph.len() * (graph.len() - 1) / 2);
    for a in graph.ids() {
        for b in (a + 1)..graph.len() as VertexId {
            if graph.are_adjacent(a, b) {
                continue;
            }
            scored.push((a, b, score_pair(board, graph, a, b)));
        }
    }

    scored.sort_by(|x, y| y.2.score.total_cmp(&x.2.score));
    scored.truncate(top_k);

    debug!(
        candidates = graph.len() * (graph.len() - 1) / 2 - graph.edge_count(),
        returned = scored.len(),
        best = scored.first().map(|(_, _, s)| s.score),
        "ranked openings"
    );

    let board_totals = board_pip_totals(board);
    scored
        .into_iter()
        .map(|(a, b, score)| {
            let details = pair_details(board, graph, a, b);
            let coverage = std::array::from_fn(|i| {
                if board_totals[i] == 0 {
                    0.0
                } else {
                    details.per_resource[i].pips as f64 / board_totals[i] as f64
                }
            });
            Opening {
                a,
                b,
                score: score.score,
                total_pips: score.total_pips,
                resources_covered: score.resources_covered,
                repeated_numbers: score.repeated_numbers,
                details,
                coverage,
            }
        })
        .collect()
}
