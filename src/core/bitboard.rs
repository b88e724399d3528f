//! Cell sets packed into a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N`
//! board maps row-major onto the low `N*N` bits of `T`; cells outside the
//! board are never members.

use core::ops::{BitAnd, BitXor, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::core::cell::Cell;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskError {
    /// Cell lies outside `[0, N)²`.
    OutOfBounds(Cell),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::OutOfBounds(cell) => write!(f, "cell {} is off the board", cell),
        }
    }
}

/// A set of cells on an `N×N` board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn board_mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Empty set. `N*N` must not exceed the bit width of `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Builds a set from cells, rejecting any that fall off the board.
    pub fn from_cells<I>(cells: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut board = Self::new();
        for cell in cells {
            board.insert(cell)?;
        }
        Ok(board)
    }

    #[inline]
    fn bit(cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        if row < N && col < N {
            Some(row * N + col)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; off-board cells are never members.
    pub fn contains(&self, cell: Cell) -> bool {
        match Self::bit(cell) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `cell`, returning `true` when it was not already present.
    pub fn insert(&mut self, cell: Cell) -> Result<bool, MaskError> {
        let idx = Self::bit(cell).ok_or(MaskError::OutOfBounds(cell))?;
        let fresh = !self.contains(cell);
        self.bits = self.bits | (T::one() << idx);
        Ok(fresh)
    }

    /// Cells of the set in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { board: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard<{}, {}>", any::type_name::<T>(), N)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Cell::new((idx / N) as i8, (idx % N) as i8));
            }
        }
        None
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Cell;
    type IntoIter = Cells<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Intersection.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits & rhs.bits }
    }
}

/// Symmetric difference.
impl<T, const N: usize> BitXor for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits ^ rhs.bits }
    }
}

/// Complement within the board.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard { bits: !self.bits & Self::board_mask() }
    }
}
