//! Game controller: owns the board and composes the engine pieces.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::compaction::{CompactionEngine, Transition};
use crate::core::{Cell, Direction, EngineError, EngineResult, GameConfig, GameRng, TileValue};
use crate::policy::{NumericPolicy, ValuePolicy};
use crate::spawn::{TileGenerator, TilePool};

use super::listeners::{ListenerId, ListenerRegistry};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one direction can still change the board.
    #[default]
    Playing,
    /// No direction changes the board. Terminal.
    Over,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Playing => f.write_str("playing"),
            GameStatus::Over => f.write_str("over"),
        }
    }
}

/// Outcome of one `make_move` call, also handed to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport<T> {
    /// Requested direction.
    pub direction: Direction,
    /// Applied transitions in sweep order. Empty if nothing changed.
    pub transitions: Vec<Transition<T>>,
    /// Tile spawned after the move, if any.
    pub spawned: Option<Cell<T>>,
    /// Points gained by merges in this move.
    pub score_gained: u64,
    /// Status after the move (and respawn).
    pub status: GameStatus,
}

impl<T> MoveReport<T> {
    fn unchanged(direction: Direction, status: GameStatus) -> Self {
        Self {
            direction,
            transitions: Vec::new(),
            spawned: None,
            score_gained: 0,
            status,
        }
    }

    /// Did the move change the board?
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Number of merges in this move.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_merge()).count()
    }
}

/// Owns a board, its value policy and tile generator, and runs the game.
///
/// ## Listeners
///
/// Listeners registered with `add_listener` run synchronously, in
/// registration order, after every effective move. They receive the
/// controller itself, so a listener may call `make_move` again; the nested
/// move runs to completion (notifying the same listeners) before the outer
/// notification continues.
///
/// The controller is single-threaded: listeners are reference-counted, so
/// it is neither `Send` nor `Sync`.
pub struct GameController<T: TileValue, P> {
    config: GameConfig,
    board: Board<T>,
    policy: P,
    generator: TileGenerator<T>,
    listeners: ListenerRegistry<GameController<T, P>, MoveReport<T>>,
    score: u64,
    move_count: u32,
    status: GameStatus,
}

impl GameController<u64, NumericPolicy> {
    /// Classic 4x4 numeric game with the 95/5 spawn pool.
    pub fn classic(seed: u64) -> EngineResult<Self> {
        Self::new(
            GameConfig::default().with_seed(seed),
            NumericPolicy::new(),
            TilePool::classic(),
        )
    }
}

impl<T: TileValue, P: ValuePolicy<T>> GameController<T, P> {
    /// Create a game on an empty board and spawn `config.initial_tiles`.
    #[instrument(skip(policy, pool))]
    pub fn new(config: GameConfig, policy: P, pool: TilePool<T>) -> EngineResult<Self> {
        config.validate()?;
        let board = Board::new(config.height, config.width, policy.base_value())?;

        let mut game = Self::assemble(config, board, policy, pool)?;
        for _ in 0..game.config.initial_tiles {
            game.add_new_tile()?;
        }
        game.refresh_status();

        debug!(status = %game.status, "game created");
        Ok(game)
    }

    /// Resume from an existing board. No initial tiles are spawned.
    ///
    /// `config.height`/`config.width` must match the board.
    #[instrument(skip(board, policy, pool))]
    pub fn from_board(
        config: GameConfig,
        board: Board<T>,
        policy: P,
        pool: TilePool<T>,
    ) -> EngineResult<Self> {
        config.validate()?;
        if (config.height, config.width) != (board.height(), board.width()) {
            return Err(EngineError::invalid_config(format!(
                "config is {}x{} but board is {}x{}",
                config.height,
                config.width,
                board.height(),
                board.width()
            )));
        }

        let mut game = Self::assemble(config, board, policy, pool)?;
        game.refresh_status();
        Ok(game)
    }

    fn assemble(
        config: GameConfig,
        board: Board<T>,
        policy: P,
        pool: TilePool<T>,
    ) -> EngineResult<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let generator = TileGenerator::new(pool, rng)?;

        Ok(Self {
            config,
            board,
            policy,
            generator,
            listeners: ListenerRegistry::new(),
            score: 0,
            move_count: 0,
            status: GameStatus::Playing,
        })
    }

    // === Accessors ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// The value policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The configuration the game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Total points from merges so far.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of effective moves made.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Status as of the last mutation.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Visit every `(value, row, column)` in row-major order.
    pub fn render(&self, visitor: impl FnMut(&T, usize, usize)) {
        self.board.for_each(visitor);
    }

    // === Play ===

    /// Spawn one tile onto the board.
    ///
    /// Returns the placed cell, or `None` if the board was full.
    #[instrument(skip(self))]
    pub fn add_new_tile(&mut self) -> EngineResult<Option<Cell<T>>> {
        let spawned = self.spawn_tile()?;
        self.refresh_status();
        Ok(spawned)
    }

    fn spawn_tile(&mut self) -> EngineResult<Option<Cell<T>>> {
        let Some(cell) = self.generator.spawn(&self.board, &self.policy)? else {
            return Ok(None);
        };
        self.board.place(&cell)?;
        Ok(Some(cell))
    }

    /// Slide and merge every tile toward `direction`.
    ///
    /// On an effective move the transitions are applied, the score updated,
    /// a tile spawned (if configured) and listeners notified. A move that
    /// changes nothing, or any move once the game is over, leaves the game
    /// untouched and returns a non-effective report.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, direction: Direction) -> EngineResult<MoveReport<T>> {
        if self.status == GameStatus::Over {
            warn!(%direction, "move attempted after game over");
            return Ok(MoveReport::unchanged(direction, self.status));
        }

        let pass = CompactionEngine::new(&self.policy).plan(&self.board, direction);
        if !pass.is_effective() {
            debug!(%direction, "move changed nothing");
            return Ok(MoveReport::unchanged(direction, self.status));
        }

        pass.apply_to(&mut self.board, &self.policy.base_value())?;
        self.score = self.score.saturating_add(pass.score());
        self.move_count += 1;

        let spawned = if self.config.spawn_after_move {
            self.spawn_tile()?
        } else {
            None
        };
        self.refresh_status();

        let report = MoveReport {
            direction,
            score_gained: pass.score(),
            transitions: pass.into_transitions(),
            spawned,
            status: self.status,
        };
        debug!(
            %direction,
            transitions = report.transitions.len(),
            merges = report.merge_count(),
            score = self.score,
            status = %self.status,
            "move applied"
        );

        self.notify(&report);
        Ok(report)
    }

    /// Apply an optional input. `None` (unmapped input) does nothing.
    pub fn apply_input(&mut self, input: Option<Direction>) -> EngineResult<Option<MoveReport<T>>> {
        input.map(|direction| self.make_move(direction)).transpose()
    }

    // === Game Over ===

    /// Can no direction change the board?
    ///
    /// Recomputed from the current board on every call by simulating all
    /// four directions on throwaway copies.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let engine = CompactionEngine::new(&self.policy);
        !Direction::ALL
            .into_iter()
            .any(|direction| engine.can_move(&self.board, direction))
    }

    /// Directions that would change the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        CompactionEngine::new(&self.policy).legal_directions(&self.board)
    }

    fn refresh_status(&mut self) {
        if self.status == GameStatus::Playing && self.is_game_over() {
            self.status = GameStatus::Over;
            debug!(score = self.score, moves = self.move_count, "game over");
        }
    }

    // === Listeners ===

    /// Register a change listener; returns its handle.
    pub fn add_listener(
        &mut self,
        listener: impl Fn(&mut Self, &MoveReport<T>) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, report: &MoveReport<T>) {
        if self.listeners.is_empty() {
            return;
        }
        let listeners = self.listeners.snapshot();
        ListenerRegistry::dispatch(&listeners, self, report);
    }
}

impl<T: TileValue, P: std::fmt::Debug> std::fmt::Debug for GameController<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("policy", &self.policy)
            .field("score", &self.score)
            .field("move_count", &self.move_count)
            .field("status", &self.status)
            .field("listeners", &self.listeners)
            .finish()
    }
}
