use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Terminal,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game session: the board, the score and the spawn policy.
///
/// All mutation goes through [`apply_move`](Self::apply_move) and
/// [`spawn_tile`](Self::spawn_tile); [`play`](Self::play) runs the whole move cycle.
#[derive(Clone, Debug)]
pub struct PlayEngine<S = RandomTileSpawner> {
    config: GameConfig,
    board: Board,
    score: Saturating<Score>,
    state: EngineState,
    move_count: u32,
    spawner: S,
}

impl PlayEngine {
    /// A new game using the classic spawn policy seeded with `seed`.
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomTileSpawner::from_seed(seed))
    }
}

impl<S: TileSpawner> PlayEngine<S> {
    /// A new game: empty board, zero score and two spawned tiles.
    pub fn new(config: GameConfig, spawner: S) -> Self {
        let mut engine = Self {
            config,
            board: Board::new(config.size),
            score: Saturating(0),
            state: Default::default(),
            move_count: 0,
            spawner,
        };
        engine.populate();
        engine
    }

    /// Continues from an existing board with a zero score, without spawning anything.
    pub fn from_board(board: Board, spawner: S) -> Self {
        let mut engine = Self {
            config: GameConfig::new(board.size()),
            board,
            score: Saturating(0),
            state: Default::default(),
            move_count: 0,
            spawner,
        };
        engine.end_if_terminal();
        engine
    }

    /// Starts over on an empty board of the same size, keeping the spawner.
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.size);
        self.score = Saturating(0);
        self.state = EngineState::Playing;
        self.move_count = 0;
        self.populate();
        log::debug!("Game restarted on a {0}x{0} board", self.config.size);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Number of moves that changed the board.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            score: self.score.0,
            state: self.state,
        }
    }

    /// Slides every tile towards `direction`, merging equal pairs and adding the merged values to
    /// the score.
    ///
    /// Returns whether any cell changed. Does nothing once the game is finished.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.state.is_finished() {
            return false;
        }

        let before = self.board.clone();
        let gained = self.board.shift_in_place(direction);
        self.score += gained;

        let changed = self.board != before;
        if changed {
            self.move_count += 1;
            log::trace!("Move {direction} gained {gained}, score is now {}", self.score.0);
        } else {
            log::debug!("Move {direction} left the board unchanged");
        }
        changed
    }

    /// Places a 2 or a 4 on a random empty cell and returns where it went.
    ///
    /// Ends the game when the new tile leaves no possible move. Does nothing on a full board or
    /// once the game is finished.
    pub fn spawn_tile(&mut self) -> Option<Coord2> {
        if self.state.is_finished() {
            return None;
        }

        let empty_cells = self.board.empty_count();
        if empty_cells == 0 {
            return None;
        }

        let index = self.spawner.pick_cell(empty_cells);
        let value = self.spawner.pick_value();
        let Some(coords) = self.board.empty_cells().nth(index.into()) else {
            log::warn!(
                "Spawner picked empty cell {} but only {} are free, skipped",
                index,
                empty_cells
            );
            return None;
        };

        self.board.place(coords, value);
        log::debug!("Spawned {value} at {coords:?}");
        self.end_if_terminal();
        Some(coords)
    }

    /// Whether no move can change the board anymore. Pure query, see [`Board::is_terminal`].
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// One full turn: move, spawn when the board changed, then check for the end of the game.
    pub fn play(&mut self, direction: Direction) -> MoveOutcome {
        if !self.apply_move(direction) {
            return MoveOutcome::NoChange;
        }

        self.spawn_tile();
        if self.state.is_finished() {
            MoveOutcome::GameOver
        } else {
            MoveOutcome::Moved
        }
    }

    fn populate(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    fn end_if_terminal(&mut self) {
        if !self.state.is_finished() && self.board.is_terminal() {
            self.state = EngineState::Terminal;
            log::debug!(
                "No moves left, final score {} after {} moves",
                self.score.0,
                self.move_count
            );
        }
    }
}
