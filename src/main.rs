//! Reversnake headless host
//!
//! Drives the simulation with a virtual 60 Hz clock and a simple autopilot
//! on both sides, then prints the final snapshot as JSON.
//!
//! Usage: `reversnake [variant] [seed] [frames]`

use std::process::ExitCode;

use reversnake::Millis;
use reversnake::settings::SimConfig;
use reversnake::sim::{Direction, GamePhase, GameState, InputSymbol, Position, TickInput, tick};

/// Virtual frame length (~60 Hz)
const FRAME_MS: Millis = 16;
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Per-frame host state: what the autopilot held last frame
#[derive(Default)]
struct Autopilot {
    held_food: Option<Direction>,
}

impl Autopilot {
    /// Build this frame's input from the current state
    fn input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        if !state.is_running() {
            input.pressed.push(InputSymbol::Start);
            self.held_food = None;
            return input;
        }

        let Some(head) = state.snake.head() else {
            return input;
        };

        // Snake hunts along the larger gap; the food runs the same way
        let chase = toward(head, state.food.position);
        input.pressed.push(InputSymbol::Snake(chase));

        let flee = chase;
        if self.held_food != Some(flee) {
            if let Some(prev) = self.held_food {
                input.released.push(InputSymbol::Food(prev));
            }
            input.pressed.push(InputSymbol::Food(flee));
            self.held_food = Some(flee);
        }
        input.held.push(InputSymbol::Food(flee));

        if !state.item.used && state.snake.segments.iter().any(|&p| adjacent(p, state.food.position)) {
            input.pressed.push(InputSymbol::UseItem);
        }
        input
    }
}

/// Direction that best moves `from` toward `to`
fn toward(from: Position, to: Position) -> Direction {
    let d = to - from;
    if d.x.abs() >= d.y.abs() {
        if d.x < 0 { Direction::Left } else { Direction::Right }
    } else if d.y < 0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

fn adjacent(a: Position, b: Position) -> bool {
    let d = (a - b).abs();
    d.x + d.y <= 1
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Reversnake (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first() {
        Some(name) => match SimConfig::from_variant_name(name) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => 0x5EED,
    };
    let frames = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    log::info!("Config: {:?}, seed {}, {} frames", config, seed, frames);

    let mut state = GameState::new(seed, config);
    let mut pilot = Autopilot::default();
    let mut now: Millis = 0;

    for _ in 0..frames {
        let input = pilot.input(&state);
        tick(&mut state, &input, now);
        now += FRAME_MS;
    }

    log::info!(
        "Finished after {} runs, phase {:?}",
        state.runs,
        state.phase
    );
    if state.phase == GamePhase::Running {
        log::info!("Run still in progress: {:.1}s", state.elapsed(now) as f64 / 1000.0);
    }

    match serde_json::to_string_pretty(&state.snapshot(now)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
