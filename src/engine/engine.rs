//! The grid transition engine.
//!
//! Owns the grid, the score, and the terminal flags, and implements the
//! per-move state machine: compact → merge → (if the grid changed) spawn →
//! terminal evaluation. A move that changes nothing consumes no randomness
//! and never flips `game_over`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grid::GRID_SIZE;
use crate::core::{Direction, GameRng, Grid};
use super::row::merge_row;

/// Tile value whose first appearance latches the `won` flag.
pub const WIN_TILE: u32 = 2048;

/// Tiles placed on construction and on reset.
const INITIAL_SPAWNS: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise a 4).
const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A tile that merged during the most recent move, in true grid coordinates.
///
/// Produced fresh each move and consumed once by the cosmetic layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEvent {
    pub row: usize,
    pub col: usize,
    /// The doubled value the pair collapsed into.
    pub value: u32,
}

/// The tile spawned after a grid-changing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Outcome of one full move evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether the move changed the grid. When false, nothing else happened.
    pub changed: bool,
    /// The spawn that followed a changed move.
    pub spawned: Option<SpawnedTile>,
}

/// Engine errors. All of these indicate programmer error, not user-facing
/// failure: the per-move state machine never spawns on a full grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Spawn requested while no cell is empty.
    #[error("no available cells to spawn a tile")]
    NoAvailableCells,
}

/// The 4×4 grid engine: slide, merge, spawn, terminal detection.
///
/// All four directions share one merge routine: the grid is mapped into the
/// left frame (reflected and/or transposed), merged row by row, and mapped
/// back. Merge events are translated out of the working frame so their
/// coordinates are always true grid coordinates.
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    score: u64,
    won: bool,
    game_over: bool,
    rng: GameRng,
    merge_events: Vec<MergeEvent>,
}

impl GridEngine {
    /// Create an engine with two random starting tiles.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut engine = Self {
            grid: Grid::empty(),
            score: 0,
            won: false,
            game_over: false,
            rng,
            merge_events: Vec::new(),
        };
        engine.initial_spawns();
        engine
    }

    /// Clear grid, score, and flags, then place two fresh tiles.
    pub fn reset(&mut self) {
        self.grid = Grid::empty();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.merge_events.clear();
        self.initial_spawns();
    }

    fn initial_spawns(&mut self) {
        for _ in 0..INITIAL_SPAWNS {
            if let Err(err) = self.spawn_random_tile() {
                // Unreachable: the grid was just cleared.
                log::warn!("initial spawn failed: {err}");
            }
        }
    }

    /// Slide and merge in `direction` without spawning.
    ///
    /// Updates score and the win latch, records merge events, and returns
    /// whether any cell changed. Most callers want [`GridEngine::apply_move`],
    /// which runs the full move pipeline.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        self.merge_events.clear();
        self.to_left_frame(direction);

        let mut changed = false;
        for row_idx in 0..GRID_SIZE {
            let before = self.grid.row(row_idx);
            let result = merge_row(before);

            if result.cells != before {
                *self.grid.row_mut(row_idx) = result.cells;
                changed = true;
            }
            self.score += result.score_delta;

            for &(col, value) in &result.merges {
                if value == WIN_TILE {
                    self.won = true;
                }
                let (row, col) = direction.from_left_frame(row_idx, col);
                self.merge_events.push(MergeEvent { row, col, value });
            }
        }

        self.from_left_frame(direction);
        changed
    }

    /// Run one full move: compact, merge, spawn on change, evaluate terminal.
    ///
    /// Terminal state is evaluated on the POST-spawn grid, since the spawn may
    /// itself close off the last move.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if !self.move_tiles(direction) {
            return MoveReport {
                changed: false,
                spawned: None,
            };
        }

        let spawned = match self.spawn_random_tile() {
            Ok(tile) => Some(tile),
            Err(err) => {
                // Unreachable: a changed move always frees or keeps a cell.
                log::warn!("post-move spawn failed: {err}");
                None
            }
        };

        if !self.has_available_moves() {
            self.game_over = true;
        }

        MoveReport {
            changed: true,
            spawned,
        }
    }

    /// Place a 2 (probability 0.9) or a 4 on a uniformly chosen empty cell.
    ///
    /// Errors with [`EngineError::NoAvailableCells`] on a full grid; the move
    /// pipeline never calls it in that state.
    pub fn spawn_random_tile(&mut self) -> Result<SpawnedTile, EngineError> {
        let empty = self.grid.empty_cells();
        let &(row, col) = self
            .rng
            .choose(&empty)
            .ok_or(EngineError::NoAvailableCells)?;
        let value = if self.rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };

        self.grid.set(row, col, value);
        Ok(SpawnedTile { row, col, value })
    }

    /// True iff an empty cell exists or two adjacent cells hold equal nonzero
    /// values.
    #[must_use]
    pub fn has_available_moves(&self) -> bool {
        self.grid.has_empty_cells() || self.grid.has_adjacent_matches()
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Whether a 2048 tile has ever been merged this session.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether no move can change the grid.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Merge events from the most recent move.
    #[must_use]
    pub fn merge_events(&self) -> &[MergeEvent] {
        &self.merge_events
    }

    /// Drain the merge events from the most recent move.
    pub fn take_merge_events(&mut self) -> Vec<MergeEvent> {
        std::mem::take(&mut self.merge_events)
    }

    /// Mutable access to the spawn RNG, for forking in tests and simulations.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    fn to_left_frame(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {}
            Direction::Right => self.grid.reverse_rows(),
            Direction::Up => self.grid.transpose(),
            Direction::Down => {
                self.grid.transpose();
                self.grid.reverse_rows();
            }
        }
    }

    fn from_left_frame(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {}
            Direction::Right => self.grid.reverse_rows(),
            Direction::Up => self.grid.transpose(),
            Direction::Down => {
                self.grid.reverse_rows();
                self.grid.transpose();
            }
        }
    }

    /// Replace the grid wholesale. Test and replay hook; clears pending
    /// merge events but leaves score and flags alone.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.merge_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(rows: [[u32; 4]; 4]) -> GridEngine {
        let mut engine = GridEngine::new(GameRng::new(42));
        engine.set_grid(Grid::from_rows(rows));
        engine
    }

    #[test]
    fn test_new_engine_has_two_tiles() {
        let engine = GridEngine::new(GameRng::new(7));
        assert_eq!(engine.grid().tile_count(), 2);
        assert_eq!(engine.score(), 0);
        assert!(!engine.won());
        assert!(!engine.game_over());
    }

    #[test]
    fn test_move_left_compacts_and_merges() {
        let mut engine = engine_with([
            [2, 2, 2, 0],
            [0, 4, 0, 4],
            [2, 4, 2, 4],
            [0, 0, 0, 0],
        ]);

        assert!(engine.move_tiles(Direction::Left));
        assert_eq!(engine.grid().row(0), [4, 2, 0, 0]);
        assert_eq!(engine.grid().row(1), [8, 0, 0, 0]);
        assert_eq!(engine.grid().row(2), [2, 4, 2, 4]);
        assert_eq!(engine.grid().row(3), [0, 0, 0, 0]);
        assert_eq!(engine.score(), 12);
    }

    #[test]
    fn test_move_right_mirrors_left() {
        let mut engine = engine_with([
            [2, 2, 2, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert!(engine.move_tiles(Direction::Right));
        // Rightward move merges the rightmost pair of the triple.
        assert_eq!(engine.grid().row(0), [0, 0, 2, 4]);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn test_move_up_matches_left_on_transpose() {
        let mut engine = engine_with([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert!(engine.move_tiles(Direction::Up));
        assert_eq!(engine.grid().get(0, 0), 4);
        assert_eq!(engine.grid().get(1, 0), 0);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn test_move_down() {
        let mut engine = engine_with([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert!(engine.move_tiles(Direction::Down));
        assert_eq!(engine.grid().get(3, 0), 4);
        assert_eq!(engine.grid().get(2, 0), 4);
        assert_eq!(engine.grid().get(1, 0), 0);
        assert_eq!(engine.grid().get(0, 0), 0);
    }

    #[test]
    fn test_no_op_move_returns_false() {
        let mut engine = engine_with([
            [2, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert!(!engine.move_tiles(Direction::Left));
        assert_eq!(engine.grid().row(0), [2, 4, 0, 0]);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_no_op_apply_move_spawns_nothing() {
        let mut engine = engine_with([
            [2, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        let report = engine.apply_move(Direction::Left);
        assert!(!report.changed);
        assert!(report.spawned.is_none());
        assert_eq!(engine.grid().tile_count(), 2);
        assert!(!engine.game_over());
    }

    #[test]
    fn test_apply_move_spawns_exactly_one_tile() {
        let mut engine = engine_with([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        let report = engine.apply_move(Direction::Left);
        assert!(report.changed);
        let spawned = report.spawned.expect("changed move must spawn");
        assert!(spawned.value == 2 || spawned.value == 4);
        // One merged tile plus one spawned tile.
        assert_eq!(engine.grid().tile_count(), 2);
        assert_eq!(engine.grid().get(spawned.row, spawned.col), spawned.value);
    }

    #[test]
    fn test_merge_events_true_coordinates_for_down() {
        let mut engine = engine_with([
            [0, 2, 0, 0],
            [0, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        engine.move_tiles(Direction::Down);
        // Pair lands at the bottom of column 1.
        assert_eq!(
            engine.merge_events(),
            &[MergeEvent { row: 3, col: 1, value: 4 }]
        );
        assert_eq!(engine.grid().get(3, 1), 4);
    }

    #[test]
    fn test_merge_events_true_coordinates_for_right() {
        let mut engine = engine_with([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 4, 0],
            [0, 0, 0, 0],
        ]);

        engine.move_tiles(Direction::Right);
        assert_eq!(
            engine.merge_events(),
            &[MergeEvent { row: 2, col: 3, value: 8 }]
        );
    }

    #[test]
    fn test_win_latch() {
        let mut engine = engine_with([
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        engine.move_tiles(Direction::Left);
        assert!(engine.won());
        assert_eq!(engine.grid().get(0, 0), 2048);

        // The latch survives later non-2048 moves.
        engine.set_grid(Grid::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]));
        engine.move_tiles(Direction::Left);
        assert!(engine.won());
    }

    #[test]
    fn test_merges_beyond_win_tile() {
        // Play continues past 2048: a 4096 merge is legal.
        let mut engine = engine_with([
            [2048, 2048, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        engine.move_tiles(Direction::Left);
        assert_eq!(engine.grid().get(0, 0), 4096);
        // 4096 is not the win value, but the latch is independent of it.
        assert!(!engine.won());
    }

    #[test]
    fn test_spawn_on_full_grid_errors() {
        let mut engine = engine_with([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);

        assert_eq!(
            engine.spawn_random_tile(),
            Err(EngineError::NoAvailableCells)
        );
    }

    #[test]
    fn test_has_available_moves_checkerboard() {
        let engine = engine_with([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!engine.has_available_moves());
    }

    #[test]
    fn test_has_available_moves_with_match() {
        let engine = engine_with([
            [2, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        assert!(engine.has_available_moves());
    }

    #[test]
    fn test_reset() {
        let mut engine = engine_with([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        engine.apply_move(Direction::Left);
        assert!(engine.score() > 0);

        engine.reset();
        assert_eq!(engine.score(), 0);
        assert!(!engine.won());
        assert!(!engine.game_over());
        assert_eq!(engine.grid().tile_count(), 2);
        assert!(engine.merge_events().is_empty());
    }

    #[test]
    fn test_take_merge_events_drains() {
        let mut engine = engine_with([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        engine.move_tiles(Direction::Left);

        let events = engine.take_merge_events();
        assert_eq!(events.len(), 1);
        assert!(engine.merge_events().is_empty());
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = GridEngine::new(GameRng::new(99));
        let mut b = GridEngine::new(GameRng::new(99));
        assert_eq!(a.grid(), b.grid());

        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            a.apply_move(direction);
            b.apply_move(direction);
            assert_eq!(a.grid(), b.grid());
            assert_eq!(a.score(), b.score());
        }
    }
}
