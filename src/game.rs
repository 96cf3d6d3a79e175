use crate::consts::{GRID_SIZE, INITIAL_APPLE, INITIAL_DIRECTION, INITIAL_SNAKE, TICK_INTERVAL};
use crate::direction::Direction;
use crate::grid::Grid;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

/// Row-major index into the grid
pub type CellIndex = usize;

/// Where new apples come from. Must return an index in `0..cell_count`.
pub trait CellSource {
    fn pick(&mut self, cell_count: usize) -> CellIndex;
}

/// Uniform picks from macroquad's global generator
#[derive(Copy, Clone, Debug, Default)]
pub struct MacroquadRng;

impl CellSource for MacroquadRng {
    fn pick(&mut self, cell_count: usize) -> CellIndex {
        macroquad::rand::gen_range(0, cell_count)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced, tail followed
    Moved,
    /// Head landed on the apple; the snake kept its tail and a new apple was placed
    Grew { apple: CellIndex },
    /// Head would have entered the body. Nothing moved.
    Collided,
    /// The snake covers every cell, so no apple can be placed
    BoardFull,
    /// The game was already over
    Halted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("snake has no cells")]
    EmptySnake,
    #[error("cell {0} is outside the grid")]
    OutOfBounds(CellIndex),
    #[error("snake occupies cell {0} twice")]
    DuplicateCell(CellIndex),
    #[error("apple at {0} overlaps the snake")]
    AppleOnSnake(CellIndex),
}

/// Serializable view of the game, used for logging
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub snake: Vec<CellIndex>,
    pub apple: CellIndex,
    pub direction: Direction,
    pub speed_ms: u64,
    pub game_over: bool,
}

#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    snake: VecDeque<CellIndex>,
    apple: CellIndex,
    // Latest accepted request, applied on the next tick
    direction: Direction,
    speed: Duration,
    game_over: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(GRID_SIZE),
            snake: INITIAL_SNAKE.iter().copied().collect(),
            apple: INITIAL_APPLE,
            direction: INITIAL_DIRECTION,
            speed: TICK_INTERVAL,
            game_over: false,
        }
    }

    /// Builds a running game from an arbitrary position, checking that the
    /// snake is non-empty, inside the grid, free of repeats and off the apple.
    pub fn from_parts(
        grid: Grid,
        snake: &[CellIndex],
        apple: CellIndex,
        direction: Direction,
    ) -> Result<Self, GameError> {
        if snake.is_empty() {
            return Err(GameError::EmptySnake);
        }
        let mut body = VecDeque::with_capacity(snake.len());
        for &cell in snake {
            if !grid.contains(cell) {
                return Err(GameError::OutOfBounds(cell));
            }
            if body.contains(&cell) {
                return Err(GameError::DuplicateCell(cell));
            }
            body.push_back(cell);
        }
        if !grid.contains(apple) {
            return Err(GameError::OutOfBounds(apple));
        }
        if body.contains(&apple) {
            return Err(GameError::AppleOnSnake(apple));
        }
        Ok(Self {
            grid,
            snake: body,
            apple,
            direction,
            speed: TICK_INTERVAL,
            game_over: false,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Head first
    pub fn snake(&self) -> &VecDeque<CellIndex> {
        &self.snake
    }

    pub fn head(&self) -> Option<CellIndex> {
        self.snake.front().copied()
    }

    pub fn apple(&self) -> CellIndex {
        self.apple
    }

    /// The direction the next tick will move in
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn occupies(&self, cell: CellIndex) -> bool {
        self.snake.contains(&cell)
    }

    /// Accepts a new direction unless it is the exact opposite of the
    /// current one. Later requests overwrite earlier ones until the next tick.
    pub fn request_direction(&mut self, next: Direction) -> bool {
        if self.game_over || next.is_opposite(self.direction) {
            return false;
        }
        self.direction = next;
        true
    }

    /// Advances the snake by one cell.
    pub fn step(&mut self, source: &mut impl CellSource) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Halted;
        }
        let Some(head) = self.head() else {
            return StepOutcome::Halted;
        };

        let next = self.grid.neighbor(head, self.direction);

        // The tail still counts: it has not moved out of the way yet.
        if self.occupies(next) {
            self.game_over = true;
            return StepOutcome::Collided;
        }

        self.snake.push_front(next);

        if next != self.apple {
            self.snake.pop_back();
            return StepOutcome::Moved;
        }

        let cell_count = self.grid.cell_count();
        if self.snake.len() >= cell_count {
            self.game_over = true;
            return StepOutcome::BoardFull;
        }
        self.apple = loop {
            let candidate = source.pick(cell_count);
            if candidate < cell_count && !self.occupies(candidate) {
                break candidate;
            }
        };
        StepOutcome::Grew { apple: self.apple }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            apple: self.apple,
            direction: self.direction,
            speed_ms: self.speed.as_millis() as u64,
            game_over: self.game_over,
        }
    }
}
