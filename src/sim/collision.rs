//! Collision and scoring between snake, food and golden food
//!
//! Runs after every movement pass. Terminal results are reported back to
//! the scheduler, which owns the session transition.

use super::snake::BiteResult;
use super::state::{GameState, Outcome};
use crate::Millis;

/// Run the post-move checks for one pass.
///
/// Returns the terminal outcome if the pass ended the run.
pub fn resolve_collisions(state: &mut GameState, now: Millis) -> Option<Outcome> {
    if !state.food.is_immune(now) && state.snake.occupies(state.food.position) {
        return Some(Outcome::EatenBySnake);
    }

    if state.food.is_golden {
        if !state.food.is_immune(now) {
            state.food.is_golden = false;
            log::debug!("Golden effect expired");
        } else {
            return golden_bite(state);
        }
    }

    None
}

/// Golden food takes a bite out of the snake.
///
/// Only the first segment on the food's cell counts, so a body that shrinks
/// mid-scan is never cut twice in the same pass.
pub fn golden_bite(state: &mut GameState) -> Option<Outcome> {
    if state.snake.is_empty() {
        return Some(Outcome::ConsumedByFood);
    }

    match state.snake.bite(state.food.position) {
        BiteResult::Miss => None,
        BiteResult::Consumed => Some(Outcome::ConsumedByFood),
        BiteResult::HeadSide { kept } => {
            log::debug!("Golden bite: kept head side, {} segments", kept);
            None
        }
        BiteResult::TailSide { kept } => {
            log::debug!("Golden bite: kept tail side reversed, {} segments", kept);
            None
        }
    }
}
