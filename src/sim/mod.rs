//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `now` passed to [`tick`]
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod food;
pub mod grid;
pub mod input;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::{golden_bite, resolve_collisions};
pub use food::{Food, GoldenFood, Item};
pub use grid::{Direction, Grid, Position};
pub use input::{InputSymbol, TickInput, resolve_food, resolve_snake};
pub use snake::{BiteResult, MoveResult, Snake};
pub use state::{GamePhase, GameState, Outcome, RngState, START_PROMPT, Snapshot};
pub use tick::tick;
