//! Game session: scoring, shot/guess history and win/lose status.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, info};

use crate::core::cell::Cell;
use crate::core::common::{GuessError, LayoutError, ShotError};
use crate::core::config::{RAY_ENDPOINT_COST, STARTING_SCORE, WRONG_GUESS_PENALTY};
use crate::core::grid::{CellMask, Grid};
use crate::core::ray::{self, RayOutcome};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A completed shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub entry: Cell,
    pub outcome: RayOutcome,
}

impl Shot {
    /// Exit border cell; the entry itself on reflection, `None` on absorption.
    pub fn exit(&self) -> Option<Cell> {
        self.outcome.exit(self.entry)
    }
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub atoms: Vec<Cell>,
    pub score: u32,
    pub atoms_left: usize,
    pub used_border: Vec<Cell>,
    pub hits: Vec<Cell>,
    pub reflections: Vec<Cell>,
    pub deflections: Vec<(Cell, Cell)>,
    pub guesses: Vec<Cell>,
    pub status: GameStatus,
}

/// One game against a fixed atom layout.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    score: u32,
    atoms_left: usize,
    used_mask: CellMask,
    used_border: Vec<Cell>,
    hits: Vec<Cell>,
    reflections: Vec<Cell>,
    deflections: Vec<(Cell, Cell)>,
    guessed_mask: CellMask,
    guesses: Vec<Cell>,
    status: GameStatus,
}

impl GameSession {
    /// Start a session over the given atoms. The caller picks the layout;
    /// only emptiness, duplicates and off-board cells are rejected.
    pub fn new<I>(atoms: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Cell>,
    {
        Self::with_grid(Grid::new(atoms)?)
    }

    /// Start a session over an existing grid.
    pub fn with_grid(grid: Grid) -> Result<Self, LayoutError> {
        if grid.atom_count() == 0 {
            return Err(LayoutError::Empty);
        }
        Ok(Self {
            grid,
            score: STARTING_SCORE,
            atoms_left: grid.atom_count(),
            used_mask: CellMask::new(),
            used_border: Vec::new(),
            hits: Vec::new(),
            reflections: Vec::new(),
            deflections: Vec::new(),
            guessed_mask: CellMask::new(),
            guesses: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Fire a ray from `(row, col)`. Declined shots change nothing.
    pub fn shoot(&mut self, row: i8, col: i8) -> Result<Shot, ShotError> {
        let entry = Cell::new(row, col);
        let outcome = ray::trace(&self.grid, entry)?;
        let shot = Shot { entry, outcome };

        let mut cost = 0;
        if self.mark_used(entry) {
            cost += RAY_ENDPOINT_COST;
        }
        if let Some(exit) = shot.exit() {
            if self.mark_used(exit) {
                cost += RAY_ENDPOINT_COST;
            }
        }
        self.deduct(cost);

        match outcome {
            RayOutcome::Absorbed => push_unique(&mut self.hits, entry),
            RayOutcome::Reflected => push_unique(&mut self.reflections, entry),
            RayOutcome::Exited(exit) => push_unique(&mut self.deflections, (entry, exit)),
        }
        debug!("shot {} -> {:?}, cost {}, score {}", entry, outcome, cost, self.score);

        self.update_status();
        Ok(shot)
    }

    /// Guess that `(row, col)` holds an atom. Returns whether it does.
    /// Repeating a guess re-checks it without charging or counting again.
    pub fn guess(&mut self, row: i8, col: i8) -> Result<bool, GuessError> {
        let cell = Cell::new(row, col);
        if !cell.on_board() {
            return Err(GuessError::OutOfBounds(cell));
        }
        let is_atom = self.grid.has_atom(cell);
        if self.guessed_mask.insert(cell).unwrap_or(false) {
            self.guesses.push(cell);
            if is_atom {
                self.atoms_left = self.atoms_left.saturating_sub(1);
            } else {
                self.deduct(WRONG_GUESS_PENALTY);
            }
            debug!("guess {} -> {}, score {}", cell, is_atom, self.score);
        }
        self.update_status();
        Ok(is_atom)
    }

    /// Record `cell` as a used ray endpoint; `true` on first use.
    fn mark_used(&mut self, cell: Cell) -> bool {
        let fresh = self.used_mask.insert(cell).unwrap_or(false);
        if fresh {
            self.used_border.push(cell);
        }
        fresh
    }

    /// Lower the score, stopping at zero.
    fn deduct(&mut self, amount: u32) {
        self.score = self.score.saturating_sub(amount);
    }

    fn update_status(&mut self) {
        if self.status.is_terminal() || self.guesses.len() < self.grid.atom_count() {
            return;
        }
        self.status = verdict(self.guessed_mask, self.grid.atoms());
        info!("game over: {:?} with score {}", self.status, self.score);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Atoms not yet correctly guessed.
    pub fn atoms_left(&self) -> usize {
        self.atoms_left
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn atoms(&self) -> CellMask {
        self.grid.atoms()
    }

    /// Distinct guesses in the order they were made.
    pub fn guesses(&self) -> &[Cell] {
        &self.guesses
    }

    /// Entry cells of absorbed shots.
    pub fn hits(&self) -> &[Cell] {
        &self.hits
    }

    /// Entry cells of reflected shots.
    pub fn reflections(&self) -> &[Cell] {
        &self.reflections
    }

    /// `(entry, exit)` pairs of shots that left through another cell.
    pub fn deflections(&self) -> &[(Cell, Cell)] {
        &self.deflections
    }

    /// Every border cell ever used as an entry or exit, in first-use order.
    pub fn used_border(&self) -> &[Cell] {
        &self.used_border
    }

    /// Snapshot of the whole session.
    pub fn state(&self) -> SessionState {
        SessionState {
            atoms: self.grid.atoms().iter().collect(),
            score: self.score,
            atoms_left: self.atoms_left,
            used_border: self.used_border.clone(),
            hits: self.hits.clone(),
            reflections: self.reflections.clone(),
            deflections: self.deflections.clone(),
            guesses: self.guesses.clone(),
            status: self.status,
        }
    }

    /// Restore a session from a snapshot.
    ///
    /// Only the layout, score and histories are taken as given. Repeated
    /// endpoints and guesses are dropped, and the remaining-atom count and
    /// status are derived again from the guesses.
    pub fn from_state(state: SessionState) -> Result<Self, LayoutError> {
        let grid = Grid::new(state.atoms)?;
        if grid.atom_count() == 0 {
            return Err(LayoutError::Empty);
        }

        let mut used_mask = CellMask::new();
        let mut used_border = Vec::new();
        for cell in state.used_border {
            if used_mask.insert(cell)? {
                used_border.push(cell);
            }
        }

        let mut guessed_mask = CellMask::new();
        let mut deciding = CellMask::new();
        let mut guesses = Vec::new();
        for cell in state.guesses {
            if guessed_mask.insert(cell)? {
                if guesses.len() < grid.atom_count() {
                    deciding.insert(cell)?;
                }
                guesses.push(cell);
            }
        }
        // status was fixed by the first atom-count guesses
        let status = if guesses.len() < grid.atom_count() {
            GameStatus::InProgress
        } else {
            verdict(deciding, grid.atoms())
        };

        let mut session = Self {
            grid,
            score: state.score.min(STARTING_SCORE),
            atoms_left: (grid.atoms() & !guessed_mask).len(),
            used_mask,
            used_border,
            hits: Vec::new(),
            reflections: Vec::new(),
            deflections: Vec::new(),
            guessed_mask,
            guesses,
            status,
        };
        for cell in state.hits {
            push_unique(&mut session.hits, cell);
        }
        for cell in state.reflections {
            push_unique(&mut session.reflections, cell);
        }
        for pair in state.deflections {
            push_unique(&mut session.deflections, pair);
        }
        if session.status != state.status {
            debug!("snapshot status {:?} replaced by {:?}", state.status, session.status);
        }
        Ok(session)
    }
}

/// Won exactly when the guessed cells are the atom cells.
fn verdict(guessed: CellMask, atoms: CellMask) -> GameStatus {
    if (guessed ^ atoms).is_empty() {
        GameStatus::Won
    } else {
        GameStatus::Lost
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}
