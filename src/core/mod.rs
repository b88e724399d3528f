//! Core Black Box engine (no_std compatible)
//!
//! This module contains the pure game logic: the atom grid, the ray tracer
//! and the scoring session. It needs only `alloc`, `num-traits`, `rand` and
//! `log`, so it can run in embedded systems or compile to WebAssembly.

pub mod bitboard;
pub mod cell;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod ray;

// Re-export commonly used types
pub use bitboard::{BitBoard, MaskError};
pub use cell::{Cell, Direction};
pub use common::{GuessError, LayoutError, ShotError};
pub use config::*;
pub use game::{GameSession, GameStatus, SessionState, Shot};
pub use grid::{random_layout, CellMask, Grid, Neighbors};
pub use ray::{entry_direction, trace, RayOutcome};
