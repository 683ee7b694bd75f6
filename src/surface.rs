/// What a requested square depicts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Paint {
    Snake,
    Food,
}

/// Drawing target for game entities.
///
/// Coordinates and sizes are in board pixel units. Entities request one
/// filled square per occupied cell, inset by one unit inside the cell.
pub trait Surface {
    fn fill_square(&mut self, x: i32, y: i32, size: i32, paint: Paint);
}

/// One square request captured by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Square {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub paint: Paint,
}

/// Surface that keeps every request in draw order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    squares: Vec<Square>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded squares in draw order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn clear(&mut self) {
        self.squares.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_square(&mut self, x: i32, y: i32, size: i32, paint: Paint) {
        self.squares.push(Square { x, y, size, paint });
    }
}
