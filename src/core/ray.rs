//! Single-ray path simulation.
//!
//! A ray enters from a border cell heading inward and moves one cell at a
//! time. Before each move it looks at the two cells beside its next cell:
//!
//! - neither holds an atom: it moves, and is absorbed if the new cell does;
//! - one holds an atom: it turns 90° away from it without moving;
//! - both hold atoms: it goes straight back out (double deflection).
//!
//! Traversal ends when the next cell is no longer interior. If that happens
//! on the very first look, the ray never got in and leaves through its entry.
//! A ray trapped turning between atoms forever is also sent back out.

use log::trace as log_trace;

use crate::core::cell::{Cell, Direction};
use crate::core::common::ShotError;
use crate::core::config::LAST_INDEX;
use crate::core::grid::{CellMask, Grid};

/// What a ray did.
///
/// Reflection and double deflection look the same from outside, so both are
/// reported as `Reflected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RayOutcome {
    /// Hit an atom; there is no exit cell.
    Absorbed,
    /// Left through its own entry cell.
    Reflected,
    /// Left through the given border cell, different from the entry.
    Exited(Cell),
}

impl RayOutcome {
    /// The border cell the ray left through, if any.
    pub fn exit(self, entry: Cell) -> Option<Cell> {
        match self {
            RayOutcome::Absorbed => None,
            RayOutcome::Reflected => Some(entry),
            RayOutcome::Exited(cell) => Some(cell),
        }
    }
}

/// Inward heading for a shot fired from `entry`.
pub fn entry_direction(entry: Cell) -> Result<Direction, ShotError> {
    if !entry.on_board() {
        return Err(ShotError::OutOfBounds(entry));
    }
    if entry.is_corner() {
        return Err(ShotError::Corner(entry));
    }
    if entry.row == 0 {
        Ok(Direction::Down)
    } else if entry.row == LAST_INDEX {
        Ok(Direction::Up)
    } else if entry.col == 0 {
        Ok(Direction::Right)
    } else if entry.col == LAST_INDEX {
        Ok(Direction::Left)
    } else {
        Err(ShotError::NotBorder(entry))
    }
}

/// Fire a ray into `grid` from `entry` and follow it to the end.
pub fn trace(grid: &Grid, entry: Cell) -> Result<RayOutcome, ShotError> {
    let mut direction = entry_direction(entry)?;
    let mut position = entry;
    let mut candidate = position.step(direction);
    let mut looks = 0usize;
    // (position, heading) pairs already seen; a repeat means the ray is
    // trapped between atoms and would turn forever.
    let mut seen = [CellMask::new(); 4];

    while grid.is_interior_open(candidate) {
        looks += 1;
        let visited = &mut seen[direction.index()];
        if visited.contains(position) {
            log_trace!("ray from {} trapped at {}", entry, position);
            return Ok(RayOutcome::Reflected);
        }
        let _ = visited.insert(position);

        let [(first, away_first), (second, away_second)] =
            grid.neighbors(candidate).beside(direction);
        match (grid.has_atom(first), grid.has_atom(second)) {
            (true, true) => return Ok(RayOutcome::Reflected),
            (true, false) => direction = away_first,
            (false, true) => direction = away_second,
            (false, false) => {
                position = candidate;
                if grid.has_atom(position) {
                    return Ok(RayOutcome::Absorbed);
                }
            }
        }
        candidate = position.step(direction);
    }

    // A ray can also wander back to its own entry the long way round.
    if looks <= 1 || candidate == entry {
        Ok(RayOutcome::Reflected)
    } else {
        Ok(RayOutcome::Exited(candidate))
    }
}
