use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::food::spawn_position;
use crate::grid::{Cell, Grid};
use crate::input::Heading;
use crate::pathfinder;
use crate::snake::{Advance, DeathReason, Snake};

/// Food position on a fresh board.
pub const INITIAL_FOOD: Cell = Cell::new(5, 5);

/// Column the player's snake starts in.
const USER_START_COLUMN: i32 = 3;

/// Current high-level round state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// The two competitors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Side {
    User,
    Ai,
}

/// Complete board state for one round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub user: Snake,
    pub ai: Snake,
    pub food: Cell,
    pub score_user: u32,
    pub score_ai: u32,
    pub status: GameStatus,
    pub user_death: Option<DeathReason>,
    pub ai_death: Option<DeathReason>,
    pub tick_count: u64,
}

impl GameState {
    /// Creates the fresh board: player on the left heading right, opponent on
    /// the right heading left, food at [`INITIAL_FOOD`].
    #[must_use]
    pub fn fresh(grid: Grid) -> Self {
        let size = i32::from(grid.size());
        let row = size / 2;

        Self {
            user: Snake::new(Cell::new(USER_START_COLUMN, row), Heading::Right),
            ai: Snake::new(Cell::new(size - 1 - USER_START_COLUMN, row), Heading::Left),
            food: INITIAL_FOOD,
            score_user: 0,
            score_ai: 0,
            status: GameStatus::Running,
            user_death: None,
            ai_death: None,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.score_user,
            Side::Ai => self.score_ai,
        }
    }

    #[must_use]
    pub fn death(&self, side: Side) -> Option<DeathReason> {
        match side {
            Side::User => self.user_death,
            Side::Ai => self.ai_death,
        }
    }

    /// Returns every cell covered by either snake.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.user
            .segments()
            .chain(self.ai.segments())
            .copied()
            .collect()
    }

    /// Shortest-path length from the opponent's head to the food, as the
    /// opponent would plan it right now.
    #[must_use]
    pub fn ai_distance_to_food(&self, grid: Grid) -> Option<usize> {
        pathfinder::shortest_distance(self.ai.head(), self.food, &self.occupied_cells(), grid)
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub user: Advance,
    pub ai: Advance,
    /// First step of the opponent's shortest path, if one existed.
    pub ai_plan: Option<Heading>,
}

/// Owns the round state and sequences every tick.
#[derive(Debug, Clone)]
pub struct Round {
    state: GameState,
    grid: Grid,
    rng: StdRng,
    queued_heading: Option<Heading>,
}

impl Round {
    /// Creates a round whose food placement is seeded from system entropy.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, GameState::fresh(grid), StdRng::from_entropy())
    }

    /// Creates a deterministic round for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::from_state(grid, GameState::fresh(grid), seed)
    }

    /// Creates a round from an arbitrary board, e.g. a mid-game scenario.
    #[must_use]
    pub fn from_state(grid: Grid, state: GameState, seed: u64) -> Self {
        Self::with_rng(grid, state, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, state: GameState, rng: StdRng) -> Self {
        Self {
            state,
            grid,
            rng,
            queued_heading: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the heading request waiting for the next tick.
    #[must_use]
    pub fn queued_heading(&self) -> Option<Heading> {
        self.queued_heading
    }

    /// Buffers the player's heading request; the last request before a tick
    /// wins. Ignored once the round is over.
    pub fn queue_heading(&mut self, heading: Heading) {
        if self.state.is_over() {
            return;
        }
        self.queued_heading = Some(heading);
    }

    /// Discards the current board and starts a fresh one.
    pub fn reset(&mut self) {
        self.state = GameState::fresh(self.grid);
        self.queued_heading = None;
        info!(grid = self.grid.size(), "round reset");
    }

    /// Advances the round by one step.
    ///
    /// The player moves first against the opponent's pre-tick body, then the
    /// opponent plans and moves against the player's updated body. Both moves
    /// happen even when the first one is fatal; the round ends afterwards.
    /// Returns `None` without touching anything once the round is over.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.state.is_over() {
            return None;
        }

        self.state.tick_count += 1;
        let grid = self.grid;

        if let Some(heading) = self.queued_heading.take() {
            self.state.user.set_heading(heading);
        }

        let user = self.state.user.advance(&self.state.ai, grid, self.state.food);
        if user.ate_food() {
            self.state.score_user += 1;
            self.relocate_food();
        }

        let ai_plan = pathfinder::next_heading(
            self.state.ai.head(),
            self.state.food,
            &self.state.occupied_cells(),
            grid,
        );
        if let Some(heading) = ai_plan {
            self.state.ai.set_heading(heading);
        }

        let ai = self.state.ai.advance(&self.state.user, grid, self.state.food);
        if ai.ate_food() {
            self.state.score_ai += 1;
            self.relocate_food();
        }

        debug!(
            tick = self.state.tick_count,
            ?user,
            ?ai,
            ?ai_plan,
            "tick resolved"
        );

        self.state.user_death = user.death_reason();
        self.state.ai_death = ai.death_reason();
        if user.is_dead() || ai.is_dead() {
            self.state.status = GameStatus::Over;
            info!(
                tick = self.state.tick_count,
                score_user = self.state.score_user,
                score_ai = self.state.score_ai,
                user_death = ?self.state.user_death,
                ai_death = ?self.state.ai_death,
                "round over"
            );
        }

        Some(TickReport { user, ai, ai_plan })
    }

    fn relocate_food(&mut self) {
        self.state.food = spawn_position(
            &mut self.rng,
            self.grid,
            &[&self.state.user, &self.state.ai],
        );
        trace!(food = ?self.state.food, "food relocated");
    }
}
