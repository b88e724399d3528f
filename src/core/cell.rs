//! Board coordinates and ray headings.

use core::fmt;

use crate::core::config::{BOARD_SIZE, FIRST_INTERIOR, LAST_INDEX, LAST_INTERIOR};

/// A `(row, col)` position. Values outside the board are representable so
/// that neighbour arithmetic never has to clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Both coordinates lie in `[0, BOARD_SIZE)`.
    pub fn on_board(self) -> bool {
        let range = 0..BOARD_SIZE as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// Both coordinates lie in `[1, 8]`.
    pub fn is_interior(self) -> bool {
        let range = FIRST_INTERIOR..=LAST_INTERIOR;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// On the board with at least one coordinate equal to 0 or 9.
    pub fn is_border(self) -> bool {
        self.on_board() && !self.is_interior()
    }

    pub fn is_corner(self) -> bool {
        let edge = |v: i8| v == 0 || v == LAST_INDEX;
        edge(self.row) && edge(self.col)
    }

    /// The adjacent cell one step in `direction`. Wraps at the `i8` limits,
    /// which are far off the board either way.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row.wrapping_add(dr), self.col.wrapping_add(dc))
    }
}

impl From<(i8, i8)> for Cell {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i8, i8) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Heading of a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

    /// `(row, col)` offset of a single step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }

    /// Dense index in `0..4`, handy for per-direction tables.
    pub fn index(self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Left => 3,
        }
    }
}
