//! Game session: lifecycle and input gating around the grid engine.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameRng, Grid};
use crate::engine::{GridEngine, MergeEvent};

/// A game intent produced by the host's input layer.
///
/// Quit/escape handling stays in the host loop; nothing else affects core
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Slide in a direction.
    Move(Direction),
    /// Start the session over. Always permitted.
    Restart,
    /// Acknowledge the win overlay and keep playing past 2048.
    KeepPlaying,
}

/// Outcome of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The grid changed; a tile was spawned and terminal state re-evaluated.
    Moved,
    /// The move would not change the grid. Nothing happened.
    Unchanged,
    /// Input is frozen: the game is over, or a win awaits acknowledgement.
    Frozen,
}

/// Read-only state for the renderer, refreshed once per processed input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u64,
    pub game_over: bool,
    pub won: bool,
    pub keep_playing: bool,
    /// Valid only for the frame immediately following the move that produced
    /// them.
    pub merge_events: Vec<MergeEvent>,
}

/// A single-player session over one exclusively-owned [`GridEngine`].
///
/// The session gates input: moves are rejected while `game_over` is set, or
/// while a win awaits the player's keep-playing decision. `restart` is always
/// permitted.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: GridEngine,
    keep_playing: bool,
}

impl GameSession {
    /// Start a session with the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            engine: GridEngine::new(rng),
            keep_playing: false,
        }
    }

    /// Start a session from a seed. Same seed, same game.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Start a session seeded from host entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Dispatch an intent from the input layer.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Move(direction) => {
                self.apply_move(direction);
            }
            Intent::Restart => self.restart(),
            Intent::KeepPlaying => self.acknowledge_win(),
        }
    }

    /// Request a move. Rejected without touching any state while frozen.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_frozen() {
            return MoveOutcome::Frozen;
        }

        if self.engine.apply_move(direction).changed {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Unchanged
        }
    }

    /// Reinitialize the session: fresh grid, zero score, flags cleared.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.keep_playing = false;
    }

    /// Acknowledge the win and unfreeze input.
    ///
    /// Only meaningful once `won` is set; ignored before that, since the
    /// acknowledgement can only come from the win overlay.
    pub fn acknowledge_win(&mut self) {
        if self.engine.won() {
            self.keep_playing = true;
        }
    }

    /// True while move input is rejected.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.engine.game_over() || (self.engine.won() && !self.keep_playing)
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.engine.score()
    }

    /// Whether a 2048 tile has been reached this session.
    #[must_use]
    pub fn won(&self) -> bool {
        self.engine.won()
    }

    /// Whether no move can change the grid.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.engine.game_over()
    }

    /// Whether the player chose to continue past the win.
    #[must_use]
    pub fn keep_playing(&self) -> bool {
        self.keep_playing
    }

    /// Merge events from the most recent move.
    #[must_use]
    pub fn merge_events(&self) -> &[MergeEvent] {
        self.engine.merge_events()
    }

    /// Drain the merge events for the cosmetic layer. Consume-once: a second
    /// call before the next move returns nothing.
    pub fn take_merge_events(&mut self) -> Vec<MergeEvent> {
        self.engine.take_merge_events()
    }

    /// Capture the observable state for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: *self.engine.grid(),
            score: self.engine.score(),
            game_over: self.engine.game_over(),
            won: self.engine.won(),
            keep_playing: self.keep_playing,
            merge_events: self.engine.merge_events().to_vec(),
        }
    }

    /// The wrapped engine. Replay tooling and tests only.
    #[must_use]
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Mutable engine access. Replay tooling and tests only.
    pub fn engine_mut(&mut self) -> &mut GridEngine {
        &mut self.engine
    }
}
