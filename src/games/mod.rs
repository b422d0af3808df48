//! Games played on a table.

pub mod solitaire;
