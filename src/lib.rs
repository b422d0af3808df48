//! # set-table
//!
//! The card table for the game of Set: a shuffled deck, a window of open
//! cards, and the operations a game needs on them.
//!
//! ## Design Principles
//!
//! 1. **Stable Slots**: Open cards live in a fixed-capacity array of
//!    `Option<Card>`. An index names a position on the table; removing a
//!    card leaves a gap and moves nothing else.
//!
//! 2. **Hard Capacity**: The table never grows past its capacity (21 by
//!    default, one more than the largest triple-free hand). Dealing into a
//!    full table is an error, not a reallocation.
//!
//! 3. **Pluggable Collaborators**: The deck and the triple finder are
//!    traits. The table only moves cards between them and its slots.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Card attributes, cards, decks
//! - `rules`: Triple finders
//! - `table`: Slot arena and the `Table` itself
//! - `games`: Drivers that play a table (solitaire)

pub mod core;
pub mod cards;
pub mod rules;
pub mod table;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, TableConfig, TableError, DEFAULT_CAPACITY, DEFAULT_OPEN};

pub use crate::cards::{is_set, Card, Color, Deck, Number, SetDeck, Shading, Shape, Ternary, CARD_COUNT};

pub use crate::rules::{RuleFinder, SetFinder, Triple, TripleFinder};

pub use crate::table::{OpenSlots, SlotIndices, Table};

pub use crate::games::solitaire::{MatchRecord, PlayReport, Solitaire, Step};
