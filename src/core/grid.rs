//! Atom layout and the occupancy queries the ray tracer relies on.

use core::fmt;
use rand::Rng;

use crate::core::bitboard::BitBoard;
use crate::core::cell::{Cell, Direction};
use crate::core::common::LayoutError;
use crate::core::config::{BOARD_SIZE, FIRST_INTERIOR, INTERIOR_CELLS, LAST_INTERIOR};

/// Set of cells on the standard board.
pub type CellMask = BitBoard<u128, { BOARD_SIZE as usize }>;

const _: () = assert!((BOARD_SIZE as usize) * (BOARD_SIZE as usize) <= u128::BITS as usize);

/// The four axis-adjacent cells of some cell. Members may be off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub top: Cell,
    pub left: Cell,
    pub right: Cell,
    pub bottom: Cell,
}

impl Neighbors {
    /// The two neighbours beside a ray travelling in `direction`, each paired
    /// with the heading that turns away from it: left/right for vertical
    /// motion, top/bottom for horizontal motion.
    pub fn beside(&self, direction: Direction) -> [(Cell, Direction); 2] {
        if direction.is_vertical() {
            [(self.left, Direction::Right), (self.right, Direction::Left)]
        } else {
            [(self.top, Direction::Down), (self.bottom, Direction::Up)]
        }
    }
}

/// Fixed atom layout of one game.
///
/// Atoms are expected on interior cells; that is the layout generator's job
/// and is not checked here.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    atoms: CellMask,
}

impl Grid {
    /// Build a grid from distinct on-board cells. An empty layout is allowed
    /// here; sessions reject it.
    pub fn new<I>(atoms: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut mask = CellMask::new();
        for cell in atoms {
            if !mask.insert(cell)? {
                return Err(LayoutError::Duplicate(cell));
            }
        }
        Ok(Self { atoms: mask })
    }

    pub fn from_mask(atoms: CellMask) -> Self {
        Self { atoms }
    }

    /// The atom cells.
    pub fn atoms(&self) -> CellMask {
        self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn has_atom(&self, cell: Cell) -> bool {
        self.atoms.contains(cell)
    }

    /// Whether a ray may keep travelling through `cell`. Rows and columns 0
    /// and 9 end traversal.
    pub fn is_interior_open(&self, cell: Cell) -> bool {
        cell.is_interior()
    }

    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors {
            top: cell.step(Direction::Up),
            left: cell.step(Direction::Left),
            right: cell.step(Direction::Right),
            bottom: cell.step(Direction::Down),
        }
    }
}

/// Draw `count` distinct interior cells uniformly at random.
pub fn random_layout<R: Rng>(rng: &mut R, count: usize) -> Result<Grid, LayoutError> {
    if count == 0 {
        return Err(LayoutError::Empty);
    }
    if count > INTERIOR_CELLS {
        return Err(LayoutError::TooMany(count));
    }
    let mut atoms = CellMask::new();
    let mut attempts = 0;
    while atoms.len() < count {
        attempts += 1;
        if attempts > 100 * INTERIOR_CELLS {
            return Err(LayoutError::UnableToPlace);
        }
        let row = rng.random_range(FIRST_INTERIOR..=LAST_INTERIOR);
        let col = rng.random_range(FIRST_INTERIOR..=LAST_INTERIOR);
        atoms.insert(Cell::new(row, col))?;
    }
    Ok(Grid::from_mask(atoms))
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid").field("atoms", &self.atoms).finish()
    }
}

/// Full board with atoms revealed: `x` atom, `b` border, `.` empty interior.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE as i8 {
            write!(f, "{:2}", r)?;
            for c in 0..BOARD_SIZE as i8 {
                let cell = Cell::new(r, c);
                let ch = if self.has_atom(cell) {
                    'x'
                } else if cell.is_border() {
                    'b'
                } else {
                    '.'
                };
                write!(f, " {}", ch)?;
            }
            if r + 1 < BOARD_SIZE as i8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
