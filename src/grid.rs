use serde::Deserialize;
use serde_json::Value;

use crate::error::GridError;
use crate::input::Direction;
use crate::surface::{Paint, Surface};

/// Edge length of one grid cell in board units.
pub const GRID_UNIT: i32 = 20;

/// Edge length of the square painted inside a cell.
pub const DRAW_SIZE: i32 = GRID_UNIT - 2;

/// Floors `coord` and drops its remainder modulo [`GRID_UNIT`].
///
/// The remainder is truncating, so anything in `(-GRID_UNIT, 0)` snaps to `0`
/// while larger negative values keep their sign (`-25.0` snaps to `-20`).
/// Non-finite input snaps to `0`.
#[must_use]
pub fn snap(coord: f64) -> i32 {
    if !coord.is_finite() {
        return 0;
    }

    // `as` saturates for out-of-range floats.
    snap_int(coord.floor() as i64)
}

fn snap_int(coord: i64) -> i32 {
    let snapped = coord - coord % i64::from(GRID_UNIT);
    i32::try_from(snapped).unwrap_or(if snapped < 0 { i32::MIN } else { i32::MAX })
}

/// Loose `{x, y}` shape accepted from untyped collaborators.
#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

/// One grid-aligned cell in board units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    x: i32,
    y: i32,
}

/// Destination accepted by [`Cell::move_to`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveTarget {
    Cell(Cell),
    Coords(f64, f64),
}

impl From<Cell> for MoveTarget {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl From<(f64, f64)> for MoveTarget {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Coords(x, y)
    }
}

impl From<(i32, i32)> for MoveTarget {
    fn from((x, y): (i32, i32)) -> Self {
        Self::Coords(f64::from(x), f64::from(y))
    }
}

impl Cell {
    /// Creates a cell with both coordinates snapped to the grid.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: snap(x),
            y: snap(y),
        }
    }

    /// Creates a cell from integer board coordinates, snapped to the grid.
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x: snap_int(i64::from(x)),
            y: snap_int(i64::from(y)),
        }
    }

    /// Parses a loose `{x, y}` object. Returns `None` when either coordinate
    /// is missing or not a number.
    #[must_use]
    pub fn from_point(point: &Value) -> Option<Self> {
        Point::deserialize(point)
            .ok()
            .map(|point| Self::new(point.x, point.y))
    }

    #[must_use]
    pub fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> i32 {
        self.y
    }

    /// Sets the x coordinate. NaN and negative values are ignored.
    pub fn set_x(&mut self, value: f64) {
        if let Some(x) = accepted_coordinate(value) {
            self.x = x;
        }
    }

    /// Sets the y coordinate. NaN and negative values are ignored.
    pub fn set_y(&mut self, value: f64) {
        if let Some(y) = accepted_coordinate(value) {
            self.y = y;
        }
    }

    /// Relocates this cell in place.
    pub fn move_to(&mut self, target: impl Into<MoveTarget>) {
        *self = match target.into() {
            MoveTarget::Cell(cell) => cell,
            MoveTarget::Coords(x, y) => Self::new(x, y),
        };
    }

    /// Relocates this cell from untyped arguments: either one `{x, y}` object
    /// or two numbers. Anything else is rejected and the cell is left as is.
    pub fn move_to_args(&mut self, args: &[Value]) -> Result<(), GridError> {
        let target = match args {
            [point] => Self::from_point(point).map(MoveTarget::Cell).ok_or_else(|| {
                GridError::InvalidArgument(format!("invalid coordinate object: {point}"))
            })?,
            [x, y] => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => MoveTarget::Coords(x, y),
                _ => {
                    return Err(GridError::InvalidArgument(format!(
                        "coordinates must be numbers: [{x}, {y}]"
                    )));
                }
            },
            _ => {
                return Err(GridError::InvalidArgument(format!(
                    "move_to expects 1 or 2 arguments, got {}",
                    args.len()
                )));
            }
        };

        self.move_to(target);
        Ok(())
    }

    /// Returns an independent copy of this cell.
    #[must_use]
    pub fn copy(&self) -> Self {
        *self
    }

    /// Returns true when `other` is present and has the same coordinates.
    #[must_use]
    pub fn equals(&self, other: Option<&Cell>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Returns the neighbouring cell one grid unit towards `direction`.
    ///
    /// The result may lie outside the board, including negative coordinates.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * GRID_UNIT,
            y: self.y + dy * GRID_UNIT,
        }
    }

    /// Paints this cell as a square inset by one unit.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, paint: Paint) {
        surface.fill_square(self.x + 1, self.y + 1, DRAW_SIZE, paint);
    }
}

fn accepted_coordinate(value: f64) -> Option<i32> {
    if value.is_nan() || value < 0.0 {
        return None;
    }

    Some(snap(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::GridError;
    use crate::input::Direction;
    use crate::surface::{Paint, RecordingSurface, Square};

    use super::{snap, Cell, DRAW_SIZE, GRID_UNIT};

    #[test]
    fn snap_floors_to_grid_multiples() {
        assert_eq!(snap(0.0), 0);
        assert_eq!(snap(19.9), 0);
        assert_eq!(snap(20.0), 20);
        assert_eq!(snap(59.5), 40);
        assert_eq!(snap(300.0), 300);
    }

    #[test]
    fn snap_truncates_small_negatives_to_zero() {
        assert_eq!(snap(-5.0), 0);
        assert_eq!(snap(-20.0), -20);
        assert_eq!(snap(-25.0), -20);
        assert_eq!(snap(-41.0), -40);
    }

    #[test]
    fn snap_treats_non_finite_as_zero() {
        assert_eq!(snap(f64::NAN), 0);
        assert_eq!(snap(f64::INFINITY), 0);
    }

    #[test]
    fn new_cell_is_grid_aligned() {
        let cell = Cell::new(107.0, 93.5);

        assert_eq!((cell.x(), cell.y()), (100, 80));
        assert_eq!(Cell::at(107, 93), cell);
    }

    #[test]
    fn setter_ignores_nan_and_negative_values() {
        let mut cell = Cell::at(40, 60);

        cell.set_x(f64::NAN);
        cell.set_y(-20.0);
        assert_eq!(cell, Cell::at(40, 60));

        cell.set_x(85.0);
        cell.set_y(0.0);
        assert_eq!(cell, Cell::at(80, 0));
    }

    #[test]
    fn move_to_accepts_cells_and_coordinate_pairs() {
        let mut cell = Cell::at(0, 0);

        cell.move_to(Cell::at(40, 20));
        assert_eq!(cell, Cell::at(40, 20));

        cell.move_to((100_i32, 120_i32));
        assert_eq!(cell, Cell::at(100, 120));
    }

    #[test]
    fn move_to_args_accepts_object_or_two_numbers() {
        let mut cell = Cell::at(0, 0);

        cell.move_to_args(&[json!({ "x": 60, "y": 80 })])
            .expect("object argument should be accepted");
        assert_eq!(cell, Cell::at(60, 80));

        cell.move_to_args(&[json!(20), json!(40.0)])
            .expect("two numbers should be accepted");
        assert_eq!(cell, Cell::at(20, 40));
    }

    #[test]
    fn move_to_args_rejects_wrong_arity_and_shape() {
        let mut cell = Cell::at(20, 20);

        assert!(matches!(
            cell.move_to_args(&[]),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(matches!(
            cell.move_to_args(&[json!(1), json!(2), json!(3)]),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(matches!(
            cell.move_to_args(&[json!({ "x": 1 })]),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(matches!(
            cell.move_to_args(&[json!("a"), json!(2)]),
            Err(GridError::InvalidArgument(_))
        ));

        assert_eq!(cell, Cell::at(20, 20));
    }

    #[test]
    fn copy_is_independent() {
        let original = Cell::at(20, 40);
        let mut copy = original.copy();

        copy.set_x(60.0);

        assert_eq!(original, Cell::at(20, 40));
        assert_eq!(copy, Cell::at(60, 40));
    }

    #[test]
    fn equals_is_false_for_absent_other() {
        let cell = Cell::at(20, 40);

        assert!(cell.equals(Some(&Cell::at(20, 40))));
        assert!(!cell.equals(Some(&Cell::at(40, 20))));
        assert!(!cell.equals(None));
    }

    #[test]
    fn from_point_rejects_missing_coordinates() {
        assert_eq!(
            Cell::from_point(&json!({ "x": 40, "y": 0 })),
            Some(Cell::at(40, 0))
        );
        assert_eq!(Cell::from_point(&json!({ "y": 0 })), None);
        assert_eq!(Cell::from_point(&json!(null)), None);
    }

    #[test]
    fn stepping_moves_one_grid_unit_and_may_go_negative() {
        let origin = Cell::at(0, 0);

        assert_eq!(origin.stepped(Direction::Right), Cell::at(GRID_UNIT, 0));
        assert_eq!(origin.stepped(Direction::Down), Cell::at(0, GRID_UNIT));

        let left = origin.stepped(Direction::Left);
        assert_eq!((left.x(), left.y()), (-GRID_UNIT, 0));
    }

    #[test]
    fn draw_requests_inset_square() {
        let mut surface = RecordingSurface::new();

        Cell::at(40, 60).draw(&mut surface, Paint::Food);

        assert_eq!(
            surface.squares(),
            &[Square {
                x: 41,
                y: 61,
                size: DRAW_SIZE,
                paint: Paint::Food,
            }]
        );
    }
}
