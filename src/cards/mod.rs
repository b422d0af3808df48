//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Number`, `Color`, `Shading`, `Shape`: the four three-valued attributes
//! - `Card`: one combination of attribute values (81 in total)
//! - `Deck`: trait for the reserve a table deals from
//! - `SetDeck`: the standard 81-card deck

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Color, Number, Shading, Shape, Ternary};
pub use card::{is_set, Card, CARD_COUNT};
pub use deck::{Deck, SetDeck};
