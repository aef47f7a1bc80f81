//! Simulation settings
//!
//! The two game modes share one engine and differ only in the flags below.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{VARIANT_A_MOVEMENT_THRESHOLD, VARIANT_B_MOVEMENT_THRESHOLD};

/// Game mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Fast cadence, food stops at walls, single-use immunity item
    #[default]
    A,
    /// Slower cadence, food wraps around the grid, no item
    B,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::A => "A",
            Variant::B => "B",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" | "classic" => Some(Variant::A),
            "b" | "wrap" => Some(Variant::B),
            _ => None,
        }
    }
}

/// How the food behaves at the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FoodMovement {
    /// Blocked at the boundary, stays in place
    #[default]
    WallStop,
    /// Leaves one edge and re-enters on the opposite one
    Wrap,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Frames per snake/food movement pass
    pub movement_threshold: u32,
    pub food_movement: FoodMovement,
    /// Snake shrinks (and eventually dies) when its starvation deadline passes
    pub starvation_enabled: bool,
    /// Spawn a golden food at session start
    pub golden_food_enabled: bool,
    /// Single-use immunity item
    pub item_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_variant(Variant::A)
    }
}

impl SimConfig {
    /// Create a config from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        match variant {
            Variant::A => Self {
                movement_threshold: VARIANT_A_MOVEMENT_THRESHOLD,
                food_movement: FoodMovement::WallStop,
                starvation_enabled: true,
                golden_food_enabled: true,
                item_enabled: true,
            },
            Variant::B => Self {
                movement_threshold: VARIANT_B_MOVEMENT_THRESHOLD,
                food_movement: FoodMovement::Wrap,
                starvation_enabled: true,
                golden_food_enabled: true,
                item_enabled: false,
            },
        }
    }

    /// Parse a config from JSON. A zero threshold is clamped to one frame.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut config: SimConfig = serde_json::from_str(json)?;
        config.movement_threshold = config.movement_threshold.max(1);
        Ok(config)
    }

    /// Parse a preset name such as `"a"` or `"wrap"`
    pub fn from_variant_name(name: &str) -> Result<Self, SettingsError> {
        Variant::from_str(name)
            .map(Self::from_variant)
            .ok_or_else(|| SettingsError::UnknownVariant(name.to_string()))
    }
}

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    Json(serde_json::Error),
    UnknownVariant(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Json(e) => write!(f, "invalid settings JSON: {}", e),
            SettingsError::UnknownVariant(name) => write!(f, "unknown variant '{}'", name),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Json(e) => Some(e),
            SettingsError::UnknownVariant(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}
