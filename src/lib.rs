#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
mod shared;
#[cfg(feature = "std")]
mod skeleton;
#[cfg(feature = "std")]
mod stub;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_layout, render_player_view, run_terminal, Command};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::{decode_frame, encode_frame, GameApi, GuessResult, Message, ShotResult, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use shared::SharedSession;
#[cfg(feature = "std")]
pub use skeleton::Skeleton;
#[cfg(feature = "std")]
pub use stub::Stub;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, Transport};
