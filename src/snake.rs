use log::debug;
use rand::Rng;
use serde_json::Value;

use crate::food::Food;
use crate::grid::{Cell, GRID_UNIT};
use crate::input::Direction;
use crate::surface::{Paint, Surface};

/// Whether the body is still able to move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyStatus {
    Alive,
    /// A head-on reversal was requested. Sticky for the rest of the session.
    Crashed,
}

/// Snake body: ordered cells, head first, with one-tick-delayed growth.
#[derive(Debug, Clone)]
pub struct Body {
    cells: Vec<Cell>,
    pending_growth: Option<Cell>,
    heading: Direction,
    status: BodyStatus,
}

impl Body {
    /// Creates a two-segment body with its tail directly left of `head`,
    /// heading right.
    #[must_use]
    pub fn new(head: Cell) -> Self {
        let tail = Cell::at(head.x() - GRID_UNIT, head.y());
        Self::from_cells(vec![head, tail], Direction::Right)
    }

    /// Creates a body from explicit segments (first is head).
    ///
    /// # Panics
    ///
    /// Panics when fewer than two segments are given.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, heading: Direction) -> Self {
        assert!(
            cells.len() >= 2,
            "snake body needs at least two segments, got {}",
            cells.len()
        );

        Self {
            cells,
            pending_growth: None,
            heading,
            status: BodyStatus::Alive,
        }
    }

    /// Applies one movement tick towards `requested`.
    ///
    /// Requesting the flip of the current heading crashes the body without
    /// moving it. A crashed body no longer moves.
    pub fn move_in(&mut self, requested: Direction) {
        if self.status == BodyStatus::Crashed {
            return;
        }

        if requested == self.heading.flip() {
            debug!("reversal {:?} -> {:?} rejected", self.heading, requested);
            self.status = BodyStatus::Crashed;
            return;
        }
        self.heading = requested;

        for i in (1..self.cells.len()).rev() {
            self.cells[i] = self.cells[i - 1];
        }
        self.cells[0] = self.cells[0].stepped(self.heading);

        // Appended after the shift so it lands where the tail was before it.
        if let Some(grown) = self.pending_growth.take() {
            self.cells.push(grown);
        }
    }

    /// Returns false when the body crashed, the head left the board, or the
    /// head overlaps any other segment or the pending growth cell.
    #[must_use]
    pub fn is_in_bounds(&self, width: i32, height: i32) -> bool {
        if self.status == BodyStatus::Crashed {
            return false;
        }

        let head = self.head();
        let inside = (0..=width - GRID_UNIT).contains(&head.x())
            && (0..=height - GRID_UNIT).contains(&head.y());
        if !inside {
            return false;
        }

        if head.equals(self.pending_growth.as_ref()) || head == self.tail() {
            return false;
        }

        !self.cells[1..].contains(&head)
    }

    /// Eats `food` when the head is on it: relocates the food away from this
    /// body and schedules growth at the current tail. Returns whether it ate.
    pub fn try_eat<R: Rng + ?Sized>(&mut self, food: &mut Food, rng: &mut R) -> bool {
        if self.head() != food.cell() {
            return false;
        }

        food.relocate(rng, self);
        self.pending_growth = Some(self.tail().copy());
        true
    }

    /// Returns true when any segment or the pending growth cell is `cell`.
    #[must_use]
    pub fn occupied(&self, cell: Cell) -> bool {
        self.head() == cell
            || self.tail() == cell
            || self.pending_growth == Some(cell)
            || self.cells[1..].contains(&cell)
    }

    /// Loose variant of [`Body::occupied`]. Malformed points are never occupied.
    #[must_use]
    pub fn occupied_point(&self, point: &Value) -> bool {
        Cell::from_point(point).is_some_and(|cell| self.occupied(cell))
    }

    /// Segment count, counting pending growth as one segment.
    #[must_use]
    pub fn length(&self) -> usize {
        self.cells.len() + usize::from(self.pending_growth.is_some())
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn status(&self) -> BodyStatus {
        self.status
    }

    #[must_use]
    pub fn pending_growth(&self) -> Option<Cell> {
        self.pending_growth
    }

    /// Iterates over physical segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Paints every physical segment.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cell in &self.cells {
            cell.draw(surface, Paint::Snake);
        }
    }
}
