//! Grid geometry
//!
//! The playable area is an inclusive rectangle of cells. Moves either stop
//! at the boundary (snake, wall-stop food) or wrap to the opposite edge.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_MAX, GRID_MIN};

/// A grid cell
pub type Position = IVec2;

/// Movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// No active movement
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Scan order used whenever several directional keys compete
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step (screen coordinates, y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
        }
    }
}

/// Playable bounds (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub min: IVec2,
    pub max: IVec2,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            min: GRID_MIN,
            max: GRID_MAX,
        }
    }
}

impl Grid {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Step one cell, refusing to leave the grid.
    ///
    /// Returns `None` when the boundary blocks the move. `Direction::None`
    /// always succeeds and returns `pos` unchanged.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = pos + dir.delta();
        self.contains(next).then_some(next)
    }

    /// Step one cell, re-entering from the opposite edge when leaving the grid
    pub fn step_wrapping(&self, pos: Position, dir: Direction) -> Position {
        let size = self.max - self.min + IVec2::ONE;
        let offset = pos + dir.delta() - self.min;
        self.min + offset.rem_euclid(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::None.opposite(), Direction::None);
        for dir in Direction::PRIORITY {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_step_blocked_at_edges() {
        let grid = Grid::default();
        assert_eq!(grid.step(IVec2::new(1, 5), Direction::Left), None);
        assert_eq!(grid.step(IVec2::new(25, 5), Direction::Right), None);
        assert_eq!(grid.step(IVec2::new(5, 1), Direction::Up), None);
        assert_eq!(grid.step(IVec2::new(5, 14), Direction::Down), None);
        assert_eq!(
            grid.step(IVec2::new(24, 5), Direction::Right),
            Some(IVec2::new(25, 5))
        );
        assert_eq!(
            grid.step(IVec2::new(3, 3), Direction::None),
            Some(IVec2::new(3, 3))
        );
    }

    #[test]
    fn test_step_wrapping() {
        let grid = Grid::default();
        assert_eq!(
            grid.step_wrapping(IVec2::new(1, 5), Direction::Left),
            IVec2::new(25, 5)
        );
        assert_eq!(
            grid.step_wrapping(IVec2::new(25, 5), Direction::Right),
            IVec2::new(1, 5)
        );
        assert_eq!(
            grid.step_wrapping(IVec2::new(5, 1), Direction::Up),
            IVec2::new(5, 14)
        );
        assert_eq!(
            grid.step_wrapping(IVec2::new(5, 14), Direction::Down),
            IVec2::new(5, 1)
        );
        assert_eq!(
            grid.step_wrapping(IVec2::new(5, 5), Direction::Down),
            IVec2::new(5, 6)
        );
    }
}
