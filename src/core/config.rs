//! Fixed rules of the game: board geometry and scoring.

/// Width and height of the square board, border ring included.
pub const BOARD_SIZE: u8 = 10;

/// Lowest row/column index of the interior where atoms may sit.
pub const FIRST_INTERIOR: i8 = 1;

/// Highest row/column index of the interior.
pub const LAST_INTERIOR: i8 = BOARD_SIZE as i8 - 2;

/// Index of the last row/column (the far border).
pub const LAST_INDEX: i8 = BOARD_SIZE as i8 - 1;

/// Number of interior cells available for atom placement.
pub const INTERIOR_CELLS: usize = (BOARD_SIZE as usize - 2) * (BOARD_SIZE as usize - 2);

/// Atoms hidden by a standard game.
pub const DEFAULT_ATOM_COUNT: usize = 4;

/// Score at the start of every session.
pub const STARTING_SCORE: u32 = 100;

/// Charged the first time a border cell serves as a ray entry or exit.
pub const RAY_ENDPOINT_COST: u32 = 1;

/// Charged for guessing a cell that holds no atom.
pub const WRONG_GUESS_PENALTY: u32 = 5;
