//! Core types: configuration, errors, RNG.
//!
//! Everything here is independent of which cards are being played.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_OPEN};
pub use error::TableError;
pub use rng::{GameRng, GameRngState};
