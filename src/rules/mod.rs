//! Matching rules.
//!
//! The table never interprets cards itself. It hands its slots to a
//! `TripleFinder` and acts on the indices that come back.

pub mod finder;

pub use finder::{RuleFinder, SetFinder, Triple, TripleFinder};
