//! Frame-driven simulation tick
//!
//! One call per host frame. Snake and food each keep a frame counter and
//! move once it reaches the configured threshold, so both cadences are
//! derived from the same frame signal but never share a counter.

use super::collision::resolve_collisions;
use super::grid::Direction;
use super::input::{InputSymbol, TickInput, resolve_food, resolve_snake};
use super::snake::MoveResult;
use super::state::{GameState, Outcome};
use crate::Millis;

/// Advance the session by one frame.
///
/// `now` is sampled once by the host and reused for every comparison
/// in this frame.
pub fn tick(state: &mut GameState, input: &TickInput, now: Millis) {
    if !state.is_running() {
        if input.is_pressed(InputSymbol::Start) {
            state.start(now);
        }
        return;
    }

    apply_input(state, input, now);

    state.snake.frame_count += 1;
    if state.snake.frame_count >= state.config.movement_threshold {
        state.snake.frame_count = 0;
        if let Some(outcome) = snake_pass(state, now) {
            state.finish(outcome, now);
            return;
        }
    }

    state.food.frame_count += 1;
    if state.food.frame_count >= state.config.movement_threshold
        && state.food.direction != Direction::None
    {
        state.food.frame_count = 0;
        if let Some(outcome) = food_pass(state, now) {
            state.finish(outcome, now);
        }
    }
}

fn apply_input(state: &mut GameState, input: &TickInput, now: Millis) {
    resolve_snake(&mut state.snake, input);
    resolve_food(&mut state.food, input);

    if state.config.item_enabled
        && input.is_pressed(InputSymbol::UseItem)
        && state.item.activate(&mut state.food, now)
    {
        log::debug!("Item used, food immune until {}", state.food.immune_until);
    }
}

/// Move the snake and run collisions
fn snake_pass(state: &mut GameState, now: Millis) -> Option<Outcome> {
    match state
        .snake
        .advance(&state.grid, now, state.config.starvation_enabled)
    {
        MoveResult::Empty => return Some(Outcome::ConsumedByFood),
        MoveResult::Starved => return Some(Outcome::Starved),
        MoveResult::Shrunk => log::debug!(
            "Snake starving: length {}, next deadline in {}ms",
            state.snake.len(),
            state.snake.starve_interval
        ),
        MoveResult::Moved => {}
    }
    resolve_collisions(state, now)
}

/// Move the food, check the golden pickup, run collisions
fn food_pass(state: &mut GameState, now: Millis) -> Option<Outcome> {
    state.food.advance(&state.grid, state.config.food_movement);
    if state.golden.try_pickup(&mut state.food, now) {
        log::debug!("Golden food picked up, immune until {}", state.food.immune_until);
    }
    resolve_collisions(state, now)
}
