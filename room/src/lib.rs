//! Liar Game: one hidden liar, three rounds of hints and guesses, then a vote.
//!
//! Human and AI seats play side by side. [`game::Game`] holds a match,
//! [`orchestrator::play_round`] and [`tally::cast_votes`] move it forward, and
//! [`session::Session`] hosts it for a websocket console.

pub mod completion;
pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod logger;
pub mod orchestrator;
pub mod session;
pub mod tally;
pub mod types;

mod console;

pub use error::{ConfigError, ErrorKind, RoomResult};
