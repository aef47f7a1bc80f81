//! Snake entity
//!
//! The body is a deque with the head at the front. Movement pushes a new
//! head and pops tail cells; starvation pops one extra.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Position};
use crate::Millis;
use crate::consts::{
    INITIAL_STARVE_INTERVAL, SNAKE_START_HEAD, SNAKE_START_LENGTH, STARVE_INTERVAL_INCREMENT,
};

/// Result of one snake movement pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Moved (or bumped a wall) with the body length unchanged
    Moved,
    /// Starvation deadline passed; body shrank by one
    Shrunk,
    /// Starvation deadline passed with a single cell left
    Starved,
    /// Nothing left to move
    Empty,
}

/// Result of a golden-food bite on the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiteResult {
    /// No segment at the bitten cell
    Miss,
    /// Kept the head side through the bite point
    HeadSide { kept: usize },
    /// Kept the tail side, reversed so the bite point leads
    TailSide { kept: usize },
    /// The head was bitten; nothing remains
    Consumed,
}

/// The snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Body cells, head first
    pub segments: VecDeque<Position>,
    /// Direction for the next move
    pub direction: Direction,
    /// Direction attempted by the previous move (even if blocked)
    pub last_direction: Direction,
    /// The previous move was blocked by the boundary
    pub hit_wall: bool,
    /// Time at which the snake starves
    pub starve_deadline: Millis,
    /// Current allowance between starvation events
    pub starve_interval: Millis,
    /// Frames since the last movement pass
    pub frame_count: u32,
}

impl Snake {
    /// Spawn the standard starting snake heading right
    pub fn new(now: Millis) -> Self {
        let segments = (0..SNAKE_START_LENGTH)
            .map(|i| SNAKE_START_HEAD - IVec2::new(i, 0))
            .collect();
        Self::with_segments(segments, Direction::Right, now)
    }

    /// Spawn a snake with an explicit body (head first)
    pub fn with_segments(segments: VecDeque<Position>, direction: Direction, now: Millis) -> Self {
        Self {
            segments,
            direction,
            last_direction: direction,
            hit_wall: false,
            starve_deadline: now + INITIAL_STARVE_INTERVAL,
            starve_interval: INITIAL_STARVE_INTERVAL,
            frame_count: 0,
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any body cell sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Whether turning to `dir` is allowed.
    ///
    /// Reversing onto the neck is refused, unless the last move bumped a
    /// wall and the snake never actually travelled in `last_direction`.
    pub fn can_turn(&self, dir: Direction) -> bool {
        dir != self.last_direction.opposite() || self.hit_wall
    }

    /// Advance one cell, applying starvation if `now` has reached the deadline
    pub fn advance(&mut self, grid: &Grid, now: Millis, starvation_enabled: bool) -> MoveResult {
        let Some(head) = self.head() else {
            return MoveResult::Empty;
        };

        let new_head = match grid.step(head, self.direction) {
            Some(next) => {
                self.hit_wall = false;
                next
            }
            None => {
                self.hit_wall = true;
                head
            }
        };
        self.last_direction = self.direction;

        if starvation_enabled && now >= self.starve_deadline {
            if self.segments.len() == 1 {
                return MoveResult::Starved;
            }
            self.starve_interval += STARVE_INTERVAL_INCREMENT;
            self.starve_deadline = now + self.starve_interval;
            self.segments.pop_back();
            self.segments.pop_back();
            self.segments.push_front(new_head);
            MoveResult::Shrunk
        } else {
            self.segments.pop_back();
            self.segments.push_front(new_head);
            MoveResult::Moved
        }
    }

    /// Cut the body where the golden food bites it.
    ///
    /// Only the first segment on `pos` (scanning head to tail) is used.
    pub fn bite(&mut self, pos: Position) -> BiteResult {
        let Some(i) = self.segments.iter().position(|&p| p == pos) else {
            return BiteResult::Miss;
        };

        if i == 0 {
            self.segments.clear();
            BiteResult::Consumed
        } else if i <= self.segments.len() / 2 {
            self.segments.truncate(i + 1);
            BiteResult::HeadSide {
                kept: self.segments.len(),
            }
        } else {
            self.segments.drain(..i);
            self.segments.make_contiguous().reverse();
            BiteResult::TailSide {
                kept: self.segments.len(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(len: i32, head: IVec2) -> VecDeque<Position> {
        (0..len).map(|i| head - IVec2::new(i, 0)).collect()
    }

    #[test]
    fn test_initial_snake() {
        let snake = Snake::new(1000);
        assert_eq!(snake.len(), 10);
        assert_eq!(snake.head(), Some(IVec2::new(11, 2)));
        assert_eq!(snake.segments.back(), Some(&IVec2::new(2, 2)));
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.starve_deadline, 6000);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(0);
        let result = snake.advance(&Grid::default(), 100, true);
        assert_eq!(result, MoveResult::Moved);
        assert_eq!(snake.len(), 10);
        assert_eq!(snake.head(), Some(IVec2::new(12, 2)));
        assert!(!snake.hit_wall);
    }

    #[test]
    fn test_wall_duplicates_head() {
        let mut snake = Snake::with_segments(line(3, IVec2::new(25, 5)), Direction::Right, 0);
        snake.advance(&Grid::default(), 10, true);
        assert!(snake.hit_wall);
        assert_eq!(snake.last_direction, Direction::Right);
        assert_eq!(
            Vec::from(snake.segments.clone()),
            vec![IVec2::new(25, 5), IVec2::new(25, 5), IVec2::new(24, 5)]
        );
    }

    #[test]
    fn test_turn_rules() {
        let mut snake = Snake::with_segments(line(3, IVec2::new(10, 5)), Direction::Right, 0);
        assert!(!snake.can_turn(Direction::Left));
        assert!(snake.can_turn(Direction::Up));
        assert!(snake.can_turn(Direction::Right));

        snake.hit_wall = true;
        assert!(snake.can_turn(Direction::Left));
    }

    #[test]
    fn test_starvation_shrinks_by_one() {
        let mut snake = Snake::with_segments(line(5, IVec2::new(10, 5)), Direction::Right, 0);
        let old_deadline = snake.starve_deadline;

        let result = snake.advance(&Grid::default(), old_deadline, true);
        assert_eq!(result, MoveResult::Shrunk);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Some(IVec2::new(11, 5)));
        assert_eq!(snake.starve_interval, 6000);
        assert_eq!(snake.starve_deadline, old_deadline + 6000);
        assert!(snake.starve_deadline > old_deadline);
    }

    #[test]
    fn test_starvation_disabled() {
        let mut snake = Snake::with_segments(line(5, IVec2::new(10, 5)), Direction::Right, 0);
        let result = snake.advance(&Grid::default(), 1_000_000, false);
        assert_eq!(result, MoveResult::Moved);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_starved_single_cell_untouched() {
        let mut snake = Snake::with_segments(line(1, IVec2::new(10, 5)), Direction::Right, 0);
        let result = snake.advance(&Grid::default(), 5000, true);
        assert_eq!(result, MoveResult::Starved);
        assert_eq!(Vec::from(snake.segments.clone()), vec![IVec2::new(10, 5)]);
    }

    #[test]
    fn test_empty_snake_short_circuits() {
        let mut snake = Snake::with_segments(VecDeque::new(), Direction::Right, 0);
        assert_eq!(snake.advance(&Grid::default(), 0, true), MoveResult::Empty);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_bite_head_side() {
        let body = line(5, IVec2::new(10, 5));
        let mut snake = Snake::with_segments(body.clone(), Direction::Right, 0);
        assert_eq!(snake.bite(body[1]), BiteResult::HeadSide { kept: 2 });
        assert_eq!(Vec::from(snake.segments.clone()), vec![body[0], body[1]]);
    }

    #[test]
    fn test_bite_tail_side_reverses() {
        let body = line(5, IVec2::new(10, 5));
        let mut snake = Snake::with_segments(body.clone(), Direction::Right, 0);
        assert_eq!(snake.bite(body[3]), BiteResult::TailSide { kept: 2 });
        assert_eq!(Vec::from(snake.segments.clone()), vec![body[4], body[3]]);
    }

    #[test]
    fn test_bite_head_consumes() {
        let body = line(5, IVec2::new(10, 5));
        let mut snake = Snake::with_segments(body.clone(), Direction::Right, 0);
        assert_eq!(snake.bite(body[0]), BiteResult::Consumed);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_bite_first_match_only() {
        // (6, 5) appears at indices 1 and 3
        let body: VecDeque<_> = [(5, 5), (6, 5), (7, 5), (6, 5), (5, 6), (4, 6)]
            .into_iter()
            .map(|(x, y)| IVec2::new(x, y))
            .collect();
        let mut snake = Snake::with_segments(body, Direction::Right, 0);
        assert_eq!(snake.bite(IVec2::new(6, 5)), BiteResult::HeadSide { kept: 2 });
        assert_eq!(snake.bite(IVec2::new(0, 0)), BiteResult::Miss);
    }
}
