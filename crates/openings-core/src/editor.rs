//! Board-editing command surface consumed by the interactive front end.
//!
//! The [`Editor`] owns the static topology (grid + vertex graph, built once
//! at startup) and the mutable [`BoardState`]. Destructive commands
//! (randomize, reset) go through a [`UserPrompt`] confirmation gate whenever
//! the board has been edited; declining leaves the board untouched.

use crate::board::{is_valid_number, BoardState, Terrain, NUMBER_CYCLE};
use crate::generator::{generate_standard_map_with_rng, GenerationExhausted};
use crate::graph::{VertexGraph, VertexId};
use crate::hex::HexGrid;
use crate::ranking::{rank_openings, Opening};
use crate::render::{render_model, RenderModel};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Which way a cycling command steps through its enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleDirection {
    /// Left-click in the front end.
    Forward,
    /// Right-click in the front end.
    Backward,
}

/// Errors from editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("tile index {0} is out of range")]
    InvalidTile(usize),
    #[error("{0} is not a valid number token")]
    InvalidNumber(u8),
    #[error(transparent)]
    Generation(#[from] GenerationExhausted),
}

/// Yes/no confirmation capability supplied by the front end (a browser
/// `confirm` dialog, a TUI prompt, ...).
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that always answers yes; for front ends that gate confirmation
/// themselves, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl UserPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// The board editor: static topology plus the current board, with the
/// commands the front end invokes.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: HexGrid,
    graph: VertexGraph,
    board: BoardState,
}

impl Editor {
    /// Build the standard topology and an untouched board.
    pub fn new() -> Self {
        let grid = HexGrid::standard();
        let graph = VertexGraph::build(&grid);
        Self {
            grid,
            graph,
            board: BoardState::new(),
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn graph(&self) -> &VertexGraph {
        &self.graph
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    fn check_tile(&self, index: usize) -> Result<(), EditorError> {
        if index < self.grid.len() {
            Ok(())
        } else {
            Err(EditorError::InvalidTile(index))
        }
    }

    /// Set a tile's terrain directly.
    pub fn set_terrain(&mut self, index: usize, terrain: Terrain) -> Result<(), EditorError> {
        self.check_tile(index)?;
        self.board.set_terrain(index, terrain);
        Ok(())
    }

    /// Set a tile's number token directly. Rejects 7 and out-of-range
    /// values at the command boundary; scoring never sees them.
    pub fn set_number(&mut self, index: usize, number: Option<u8>) -> Result<(), EditorError> {
        self.check_tile(index)?;
        if let Some(n) = number {
            if !is_valid_number(n) {
                return Err(EditorError::InvalidNumber(n));
            }
        }
        self.board.set_number(index, number);
        Ok(())
    }

    /// Step a tile's terrain through the editor cycle, wrapping in either
    /// direction. Returns the new terrain.
    pub fn cycle_terrain(
        &mut self,
        index: usize,
        direction: CycleDirection,
    ) -> Result<Terrain, EditorError> {
        self.check_tile(index)?;
        let cycle = &Terrain::CYCLE;
        let current = self.board.tile(index).terrain;
        let pos = cycle.iter().position(|t| *t == current).unwrap_or(0);
        let next = cycle[step(pos, cycle.len(), direction)];
        self.board.set_terrain(index, next);
        Ok(next)
    }

    /// Step a tile's number token through the editor cycle (blank, then
    /// 2-12 skipping 7), wrapping in either direction. Returns the new
    /// token.
    pub fn cycle_number(
        &mut self,
        index: usize,
        direction: CycleDirection,
    ) -> Result<Option<u8>, EditorError> {
        self.check_tile(index)?;
        let current = self.board.tile(index).number;
        let pos = NUMBER_CYCLE.iter().position(|n| *n == current).unwrap_or(0);
        let next = NUMBER_CYCLE[step(pos, NUMBER_CYCLE.len(), direction)];
        self.board.set_number(index, next);
        Ok(next)
    }

    /// Replace the board with a random standard map, asking for
    /// confirmation first if the board has been edited.
    ///
    /// Returns `Ok(false)` when the user declined (board unchanged).
    pub fn randomize_standard_map(&mut self, prompt: &dyn UserPrompt) -> Result<bool, EditorError> {
        let mut rng = rand::thread_rng();
        self.randomize_standard_map_with_rng(prompt, &mut rng)
    }

    /// [`Self::randomize_standard_map`] with a provided RNG, for
    /// deterministic tests.
    pub fn randomize_standard_map_with_rng<R: Rng>(
        &mut self,
        prompt: &dyn UserPrompt,
        rng: &mut R,
    ) -> Result<bool, EditorError> {
        if !self.board.is_default()
            && !prompt.confirm("This action will erase the current board. Proceed?")
        {
            debug!("randomize declined");
            return Ok(false);
        }

        // Generation runs in a scratch buffer; the board only changes on
        // success.
        let layout = generate_standard_map_with_rng(&self.grid, rng)?;
        self.board.set_tiles(layout);
        Ok(true)
    }

    /// Reset every tile to desert/blank, asking for confirmation first if
    /// the board has been edited. Returns false when the user declined.
    pub fn reset(&mut self, prompt: &dyn UserPrompt) -> bool {
        if !self.board.is_default()
            && !prompt.confirm("Are you sure you want to reset the board?")
        {
            debug!("reset declined");
            return false;
        }
        self.board.reset();
        true
    }

    /// Rank all legal openings on the current board; see
    /// [`crate::ranking::rank_openings`].
    pub fn rank_openings(&self, top_k: usize) -> Vec<Opening> {
        rank_openings(&self.board, &self.graph, top_k)
    }

    /// Snapshot for the renderer, optionally highlighting an opening.
    pub fn render_model(&self, highlight: Option<(VertexId, VertexId)>) -> RenderModel {
        render_model(&self.grid, &self.graph, &self.board, highlight)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a cycle position one step in either direction.
fn step(pos: usize, len: usize, direction: CycleDirection) -> usize {
    match direction {
        CycleDirection::Forward => (pos + 1) % len,
        CycleDirection::Backward => (pos + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    /// Prompt that answers with a fixed response and records being asked.
    struct FixedPrompt {
        answer: bool,
        asked: Cell<bool>,
    }

    impl FixedPrompt {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(false),
            }
        }
    }

    impl UserPrompt for FixedPrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(true);
            self.answer
        }
    }

    #[test]
    fn terrain_cycle_wraps_both_ways() {
        let mut editor = Editor::new();
        assert_eq!(editor.cycle_terrain(0, CycleDirection::Forward).unwrap(), Terrain::Wood);
        assert_eq!(
            editor.cycle_terrain(0, CycleDirection::Backward).unwrap(),
            Terrain::Desert
        );
        // Backward from desert wraps to the end of the cycle.
        assert_eq!(
            editor.cycle_terrain(0, CycleDirection::Backward).unwrap(),
            Terrain::Ore
        );
    }

    #[test]
    fn number_cycle_wraps_and_skips_seven() {
        let mut editor = Editor::new();
        let mut seen = Vec::new();
        for _ in 0..NUMBER_CYCLE.len() {
            seen.push(editor.cycle_number(0, CycleDirection::Forward).unwrap());
        }
        assert_eq!(seen.len(), 11);
        assert!(!seen.contains(&Some(7)));
        // Full cycle lands back on blank.
        assert_eq!(seen.last(), Some(&None));
    }

    #[test]
    fn set_number_validates_at_the_boundary() {
        let mut editor = Editor::new();
        assert_eq!(editor.set_number(0, Some(7)), Err(EditorError::InvalidNumber(7)));
        assert_eq!(editor.set_number(0, Some(13)), Err(EditorError::InvalidNumber(13)));
        assert_eq!(editor.board().tile(0).number, None);
        editor.set_number(0, Some(8)).unwrap();
        assert_eq!(editor.board().tile(0).number, Some(8));
    }

    #[test]
    fn tile_index_validated() {
        let mut editor = Editor::new();
        assert_eq!(
            editor.set_terrain(19, Terrain::Wood),
            Err(EditorError::InvalidTile(19))
        );
    }

    #[test]
    fn randomize_on_default_board_skips_the_prompt() {
        let mut editor = Editor::new();
        let prompt = FixedPrompt::new(false);
        let mut rng = StdRng::seed_from_u64(1);
        let committed = editor
            .randomize_standard_map_with_rng(&prompt, &mut rng)
            .unwrap();
        assert!(committed);
        assert!(!prompt.asked.get(), "default board must not prompt");
        assert!(!editor.board().is_default());
    }

    #[test]
    fn declined_randomize_leaves_board_unmodified() {
        let mut editor = Editor::new();
        editor.set_terrain(3, Terrain::Brick).unwrap();
        let before = editor.board().clone();

        let prompt = FixedPrompt::new(false);
        let mut rng = StdRng::seed_from_u64(1);
        let committed = editor
            .randomize_standard_map_with_rng(&prompt, &mut rng)
            .unwrap();
        assert!(!committed);
        assert!(prompt.asked.get());
        assert_eq!(editor.board(), &before);
    }

    #[test]
    fn declined_reset_leaves_board_unmodified() {
        let mut editor = Editor::new();
        editor.set_number(5, Some(9)).unwrap();
        let before = editor.board().clone();

        assert!(!editor.reset(&FixedPrompt::new(false)));
        assert_eq!(editor.board(), &before);

        assert!(editor.reset(&FixedPrompt::new(true)));
        assert!(editor.board().is_default());
    }
}
