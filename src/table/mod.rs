//! The table: deck, open-card slots, and the operations on them.
//!
//! ## Key Types
//!
//! - `Table`: deck + slots + triple finder, the public game surface
//! - `OpenSlots`: the fixed-capacity slot arena and its fill/compact
//!   algorithms

pub mod board;
pub mod slots;

pub use board::Table;
pub use slots::{OpenSlots, SlotIndices};
