//! Directional intent resolution
//!
//! The host maps its key codes to [`InputSymbol`]s and reports which ones
//! were pressed, released and held this frame.

use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::Direction;
use super::snake::Snake;

/// Logical input symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSymbol {
    /// Snake steering (WASD in the desktop build)
    Snake(Direction),
    /// Food steering (arrow keys)
    Food(Direction),
    /// Spend the immunity item
    UseItem,
    /// Start or restart a run
    Start,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Symbols that went down this frame
    pub pressed: Vec<InputSymbol>,
    /// Symbols that went up this frame
    pub released: Vec<InputSymbol>,
    /// Symbols currently down
    pub held: Vec<InputSymbol>,
}

impl TickInput {
    /// Convenience: a frame where the given symbols were just pressed (and are held)
    pub fn press(symbols: &[InputSymbol]) -> Self {
        Self {
            pressed: symbols.to_vec(),
            released: Vec::new(),
            held: symbols.to_vec(),
        }
    }

    pub fn is_pressed(&self, symbol: InputSymbol) -> bool {
        self.pressed.contains(&symbol)
    }

    pub fn is_released(&self, symbol: InputSymbol) -> bool {
        self.released.contains(&symbol)
    }

    pub fn is_held(&self, symbol: InputSymbol) -> bool {
        self.held.contains(&symbol)
    }
}

/// Apply the first legal snake turn pressed this frame (priority order).
///
/// Returns the accepted direction, if any.
pub fn resolve_snake(snake: &mut Snake, input: &TickInput) -> Option<Direction> {
    let dir = Direction::PRIORITY
        .into_iter()
        .find(|&d| input.is_pressed(InputSymbol::Snake(d)) && snake.can_turn(d))?;
    snake.direction = dir;
    Some(dir)
}

/// Update the food's latched direction.
///
/// A press latches the direction. Releasing the latched key falls back to
/// the first still-held food key, or stops the food.
pub fn resolve_food(food: &mut Food, input: &TickInput) {
    if let Some(dir) = Direction::PRIORITY
        .into_iter()
        .find(|&d| input.is_pressed(InputSymbol::Food(d)))
    {
        food.direction = dir;
    }

    if food.direction != Direction::None && input.is_released(InputSymbol::Food(food.direction)) {
        food.direction = Direction::PRIORITY
            .into_iter()
            .find(|&d| input.is_held(InputSymbol::Food(d)))
            .unwrap_or(Direction::None);
    }
}
