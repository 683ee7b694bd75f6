use rand::Rng;

use crate::grid::{Cell, GRID_UNIT};
use crate::snake::Body;
use crate::surface::{Paint, Surface};

/// Food on a `width x height` board, relocated in place whenever it is eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    cell: Cell,
    width: i32,
    height: i32,
}

impl Food {
    /// Places food on a random cell, avoiding the two cells a fresh session's
    /// body starts on (the board center and the cell left of it).
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32) -> Self {
        let start_head = Cell::at(width / 2, height / 2);
        let start_tail = Cell::at(start_head.x() - GRID_UNIT, start_head.y());

        let cell = loop {
            let candidate = random_cell(rng, width, height);
            if candidate != start_head && candidate != start_tail {
                break candidate;
            }
        };

        Self {
            cell,
            width,
            height,
        }
    }

    /// Places food on a fixed cell.
    #[must_use]
    pub fn at(cell: Cell, width: i32, height: i32) -> Self {
        Self {
            cell,
            width,
            height,
        }
    }

    /// Moves the food to a random cell the body does not occupy.
    ///
    /// Rejection sampling without a retry limit: this never returns if the
    /// body covers the whole board.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, body: &Body) {
        loop {
            let candidate = random_cell(rng, self.width, self.height);
            if !body.occupied(candidate) {
                self.cell = candidate;
                return;
            }
        }
    }

    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.cell.draw(surface, Paint::Food);
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32) -> Cell {
    let columns = (width / GRID_UNIT).max(1);
    let rows = (height / GRID_UNIT).max(1);

    Cell::at(
        rng.gen_range(0..columns) * GRID_UNIT,
        rng.gen_range(0..rows) * GRID_UNIT,
    )
}
