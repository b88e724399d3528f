//! Error types shared by the grid, the ray tracer and the session.

use core::fmt;

use crate::core::bitboard::MaskError;
use crate::core::cell::Cell;

/// A shot origin that cannot fire a ray. Callers treat every variant the
/// same way: the shot is declined and nothing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotError {
    /// Origin lies outside the 10×10 board.
    OutOfBounds(Cell),
    /// Origin is one of the four corners.
    Corner(Cell),
    /// Origin is an interior cell.
    NotBorder(Cell),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds(c) => write!(f, "shot origin {} is off the board", c),
            ShotError::Corner(c) => write!(f, "shot origin {} is a corner", c),
            ShotError::NotBorder(c) => write!(f, "shot origin {} is not on the border", c),
        }
    }
}

/// A guess that cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessError {
    OutOfBounds(Cell),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::OutOfBounds(c) => write!(f, "guess {} is off the board", c),
        }
    }
}

/// Errors building an atom layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    /// A session needs at least one atom.
    Empty,
    /// Atom listed twice.
    Duplicate(Cell),
    /// More atoms requested than interior cells exist.
    TooMany(usize),
    /// Random placement gave up before finding enough free cells.
    UnableToPlace,
    /// Underlying mask error (an atom off the board).
    Mask(MaskError),
}

impl From<MaskError> for LayoutError {
    fn from(err: MaskError) -> Self {
        LayoutError::Mask(err)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no atoms"),
            LayoutError::Duplicate(c) => write!(f, "atom {} listed more than once", c),
            LayoutError::TooMany(n) => write!(f, "{} atoms do not fit in the interior", n),
            LayoutError::UnableToPlace => write!(f, "unable to place atoms"),
            LayoutError::Mask(e) => write!(f, "mask error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
#[cfg(feature = "std")]
impl std::error::Error for MaskError {}
