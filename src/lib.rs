//! Reversnake - Snake where you also steer the food
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `settings`: Variant presets and feature flags
//!
//! Rendering and key mapping belong to the host. The host feeds a
//! [`sim::TickInput`] and a millisecond clock value into [`sim::tick`] once
//! per frame and reads a [`sim::Snapshot`] back.

pub mod settings;
pub mod sim;

pub use settings::{FoodMovement, SettingsError, SimConfig, Variant};

/// Milliseconds on the host's monotonic clock
pub type Millis = u64;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Playable grid bounds (inclusive). Derived from a 1080x720 window of
    /// 40px cells with a one-cell border and a three-row HUD strip.
    pub const GRID_MIN: IVec2 = IVec2::new(1, 1);
    pub const GRID_MAX: IVec2 = IVec2::new(25, 14);

    /// Frames between movement passes
    pub const VARIANT_A_MOVEMENT_THRESHOLD: u32 = 4;
    pub const VARIANT_B_MOVEMENT_THRESHOLD: u32 = 6;

    /// Starvation timer (ms)
    pub const INITIAL_STARVE_INTERVAL: u64 = 5000;
    pub const STARVE_INTERVAL_INCREMENT: u64 = 1000;

    /// Immunity granted by the golden food (ms)
    pub const GOLDEN_EFFECT_DURATION: u64 = 5000;
    /// Immunity granted by the item (ms)
    pub const ITEM_EFFECT_DURATION: u64 = 3000;

    /// Initial snake: head at (11, 2), ten cells trailing left
    pub const SNAKE_START_HEAD: IVec2 = IVec2::new(11, 2);
    pub const SNAKE_START_LENGTH: i32 = 10;

    pub const FOOD_START: IVec2 = IVec2::new(24, 13);

    /// Golden food spawn area (inclusive)
    pub const GOLDEN_SPAWN_MIN: IVec2 = IVec2::new(3, 3);
    pub const GOLDEN_SPAWN_MAX: IVec2 = IVec2::new(22, 11);
}
