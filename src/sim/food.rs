//! Food, golden food and the immunity item

use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Position};
use crate::Millis;
use crate::consts::{FOOD_START, GOLDEN_EFFECT_DURATION, ITEM_EFFECT_DURATION};
use crate::settings::FoodMovement;

/// The player-steered food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    /// Latched movement direction (`None` = standing still)
    pub direction: Direction,
    /// Frames since the last movement pass
    pub frame_count: u32,
    /// Snake collisions are ignored until this time
    pub immune_until: Millis,
    /// Golden effect active
    pub is_golden: bool,
}

impl Food {
    /// Spawn at the starting cell. The frame counter starts full so the
    /// first key press moves the food on the same frame.
    pub fn new(movement_threshold: u32) -> Self {
        Self {
            position: FOOD_START,
            direction: Direction::None,
            frame_count: movement_threshold,
            immune_until: 0,
            is_golden: false,
        }
    }

    /// Immunity window still open at `now`
    #[inline]
    pub fn is_immune(&self, now: Millis) -> bool {
        self.immune_until >= now
    }

    /// Move one cell in the latched direction
    pub fn advance(&mut self, grid: &Grid, movement: FoodMovement) {
        self.position = match movement {
            FoodMovement::WallStop => grid
                .step(self.position, self.direction)
                .unwrap_or(self.position),
            FoodMovement::Wrap => grid.step_wrapping(self.position, self.direction),
        };
    }

    /// Open an immunity window ending `duration` ms after `now`
    pub fn grant_immunity(&mut self, now: Millis, duration: Millis) {
        self.immune_until = now + duration;
    }
}

/// One-shot golden pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenFood {
    pub position: Position,
    pub visible: bool,
    /// Immunity granted to the food on pickup
    pub effect_duration: Millis,
}

impl GoldenFood {
    pub fn new(position: Position, visible: bool) -> Self {
        Self {
            position,
            visible,
            effect_duration: GOLDEN_EFFECT_DURATION,
        }
    }

    /// Consume the pickup if the food stands on it.
    ///
    /// Returns true when the pickup happened. Once consumed the golden food
    /// stays hidden, so repeated calls are no-ops.
    pub fn try_pickup(&mut self, food: &mut Food, now: Millis) -> bool {
        if !self.visible || food.position != self.position {
            return false;
        }
        self.visible = false;
        food.grant_immunity(now, self.effect_duration);
        food.is_golden = true;
        true
    }
}

/// Single-use immunity ability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub used: bool,
    pub effect_duration: Millis,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            used: false,
            effect_duration: ITEM_EFFECT_DURATION,
        }
    }
}

impl Item {
    /// Spend the item on the food. Returns false if it was already used.
    pub fn activate(&mut self, food: &mut Food, now: Millis) -> bool {
        if self.used {
            return false;
        }
        food.grant_immunity(now, self.effect_duration);
        self.used = true;
        true
    }
}
