//! Solitaire Set: play a table until no triple can be found.
//!
//! - Find a triple among the open cards and take it off the table
//! - If fewer than 12 cards remain open, open three more into the gaps
//! - Pull cards from beyond the primary window into its gaps
//! - With no triple showing, open three more cards
//! - The game ends when no triple shows and three cards can't be opened
//!
//! Uses nothing but the table's public operations, so it also serves as an
//! end-to-end check of the table.

mod game;

pub use game::{MatchRecord, PlayReport, Solitaire, Step};
