//! Session state and the read-only snapshot handed to the host
//!
//! The session exclusively owns every entity. Entities never hold
//! references to each other; the collision pass borrows several at once.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::{Food, GoldenFood, Item};
use super::grid::{Grid, Position};
use super::snake::Snake;
use crate::Millis;
use crate::consts::{GOLDEN_SPAWN_MAX, GOLDEN_SPAWN_MIN};
use crate::settings::SimConfig;

/// Prompt shown before the first run
pub const START_PROMPT: &str = "Press SPACE to start";

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; a start command begins a fresh run
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The snake caught the food
    EatenBySnake,
    /// The snake ran out of time with a single cell left
    Starved,
    /// The golden food ate the snake
    ConsumedByFood,
}

impl Outcome {
    pub fn title(&self) -> &'static str {
        match self {
            Outcome::EatenBySnake => "Eaten by the snake",
            Outcome::Starved => "Starved to death",
            Outcome::ConsumedByFood => "Consumed by the food",
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Bumped on every start so each run gets its own sequence
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        rng.advance(self.stream.wrapping_mul(0x9E37_79B9));
        rng
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    pub grid: Grid,
    pub rng_state: RngState,
    pub phase: GamePhase,
    /// Time the current run started
    pub start_time: Millis,
    /// Time the current run ended (equals `start_time` while running)
    pub end_time: Millis,
    /// Prompt or outcome text
    pub title: String,
    pub outcome: Option<Outcome>,
    /// Completed runs, including the current one once it ends
    pub runs: u32,
    pub snake: Snake,
    pub food: Food,
    pub golden: GoldenFood,
    pub item: Item,
}

impl GameState {
    /// Create an idle session. Entities are placed but nothing moves until
    /// [`GameState::start`].
    pub fn new(seed: u64, config: SimConfig) -> Self {
        let rng_state = RngState::new(seed);
        let golden = Self::spawn_golden(&rng_state, &config);
        Self {
            grid: Grid::default(),
            rng_state,
            phase: GamePhase::NotStarted,
            start_time: 0,
            end_time: 0,
            title: String::new(),
            outcome: None,
            runs: 0,
            snake: Snake::new(0),
            food: Food::new(config.movement_threshold),
            golden,
            item: Item::default(),
            config,
        }
    }

    fn spawn_golden(rng_state: &RngState, config: &SimConfig) -> GoldenFood {
        let mut rng = rng_state.to_rng();
        let pos = IVec2::new(
            rng.random_range(GOLDEN_SPAWN_MIN.x..=GOLDEN_SPAWN_MAX.x),
            rng.random_range(GOLDEN_SPAWN_MIN.y..=GOLDEN_SPAWN_MAX.y),
        );
        GoldenFood::new(pos, config.golden_food_enabled)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a run, reinitialising every entity.
    ///
    /// Ignored while a run is in progress.
    pub fn start(&mut self, now: Millis) {
        if self.is_running() {
            return;
        }
        if self.phase == GamePhase::Ended {
            self.rng_state.stream += 1;
        }

        self.phase = GamePhase::Running;
        self.start_time = now;
        self.end_time = now;
        self.title = START_PROMPT.to_string();
        self.outcome = None;
        self.snake = Snake::new(now);
        self.food = Food::new(self.config.movement_threshold);
        self.golden = Self::spawn_golden(&self.rng_state, &self.config);
        self.item = Item::default();

        log::info!(
            "Run started (seed {}, stream {}), golden food at ({}, {})",
            self.rng_state.seed,
            self.rng_state.stream,
            self.golden.position.x,
            self.golden.position.y
        );
    }

    /// End the run. Only the first call while running takes effect.
    pub fn finish(&mut self, outcome: Outcome, now: Millis) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::Ended;
        self.end_time = now;
        self.outcome = Some(outcome);
        self.title = outcome.title().to_string();
        self.runs += 1;

        log::info!(
            "Run ended: {} after {:.1}s, snake length {}",
            outcome.title(),
            now.saturating_sub(self.start_time) as f64 / 1000.0,
            self.snake.len()
        );
    }

    /// Milliseconds survived in the current (or last) run
    pub fn elapsed(&self, now: Millis) -> Millis {
        match self.phase {
            GamePhase::Running => now.saturating_sub(self.start_time),
            _ => self.end_time.saturating_sub(self.start_time),
        }
    }

    /// Milliseconds spent hungry within the current starvation interval
    pub fn starve_progress(&self, now: Millis) -> Millis {
        let remaining = self.snake.starve_deadline.saturating_sub(now);
        self.snake.starve_interval.saturating_sub(remaining)
    }

    /// Capture what the host needs to draw this frame
    pub fn snapshot(&self, now: Millis) -> Snapshot {
        Snapshot {
            phase: self.phase,
            segments: self.snake.segments.iter().copied().collect(),
            food_position: self.food.position,
            food_golden: self.food.is_golden,
            food_immune: self.food.is_immune(now),
            golden_position: self.golden.position,
            golden_visible: self.golden.visible,
            item_used: self.item.used,
            elapsed: self.elapsed(now),
            starve_progress: self.starve_progress(now),
            starve_interval: self.snake.starve_interval,
            title: self.title.clone(),
        }
    }
}

/// Read-only view for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Body cells, head first
    pub segments: Vec<Position>,
    pub food_position: Position,
    pub food_golden: bool,
    pub food_immune: bool,
    pub golden_position: Position,
    pub golden_visible: bool,
    pub item_used: bool,
    pub elapsed: Millis,
    pub starve_progress: Millis,
    pub starve_interval: Millis,
    pub title: String,
}
