use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::POINTS_PER_SEGMENT;
use crate::food::Food;
use crate::grid::Cell;
use crate::input::{Direction, GameInput};
use crate::snake::Body;
use crate::surface::Surface;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    Ended,
}

/// Complete mutable game state for one board.
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub food: Food,
    pub status: GameStatus,
    pub tick_count: u64,
    direction: Direction,
    last_direction_input: Option<Direction>,
    width: i32,
    height: i32,
    rng: StdRng,
}

impl GameState {
    /// Creates a running session with entropy-seeded food placement.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(width: i32, height: i32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: i32, height: i32, mut rng: StdRng) -> Self {
        let body = Body::new(Cell::at(width / 2, height / 2));
        let food = Food::new(&mut rng, width, height);
        info!(
            "session started on {width}x{height}, food at ({}, {})",
            food.cell().x(),
            food.cell().y()
        );

        Self {
            body,
            food,
            status: GameStatus::Running,
            tick_count: 0,
            direction: Direction::Right,
            last_direction_input: None,
            width,
            height,
            rng,
        }
    }

    /// Advances the session by one tick: move, eat, then the bounds check.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.body.move_in(self.direction);

        if self.body.try_eat(&mut self.food, &mut self.rng) {
            info!(
                "food eaten at tick {}, length {}, next food at ({}, {})",
                self.tick_count,
                self.body.length(),
                self.food.cell().x(),
                self.food.cell().y()
            );
        }

        if !self.body.is_in_bounds(self.width, self.height) {
            self.status = GameStatus::Ended;
            info!(
                "game over at tick {} with score {}",
                self.tick_count,
                self.current_score()
            );
        }
    }

    /// Records a direction for the next tick. Only accepted while running and
    /// when it differs from the previously accepted direction input.
    pub fn on_direction_input(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            debug!("direction {direction:?} ignored while {:?}", self.status);
            return false;
        }

        if self.last_direction_input == Some(direction) {
            return false;
        }

        self.last_direction_input = Some(direction);
        self.direction = direction;
        true
    }

    /// Toggles between running and paused. No effect once the game ended.
    pub fn on_pause_toggle(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Ended => return,
        };
        info!("status changed to {:?}", self.status);
    }

    /// Starts a fresh session on the same board. Only valid after the game ended.
    pub fn on_reset(&mut self) {
        if self.status != GameStatus::Ended {
            return;
        }

        let rng = self.rng.clone();
        *self = Self::with_rng(self.width, self.height, rng);
    }

    /// Applies one external input event. `Quit` is left to the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.on_direction_input(direction);
            }
            GameInput::Pause => self.on_pause_toggle(),
            GameInput::Reset => self.on_reset(),
            GameInput::Quit => {}
        }
    }

    /// Ten points per segment beyond the starting two.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        let grown = self.body.length().saturating_sub(2);
        u32::try_from(grown)
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_SEGMENT)
    }

    /// Paints the body, then the food.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.body.draw(surface);
        self.food.draw(surface);
    }

    /// Board size as `(width, height)` in board units.
    #[must_use]
    pub fn bounds(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Direction the next tick will request.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
