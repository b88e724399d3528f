//! Commonly used types and utilities for ease of import.

pub use crate::{random_layout, Cell, GameSession, GameStatus, Grid, RayOutcome, Shot};

pub use crate::{GameApi, SharedSession, Skeleton, Stub};

pub use crate::transport::{in_memory::InMemoryTransport, Transport};
