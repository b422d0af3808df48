//! Errors raised by table operations.
//!
//! Reading past the end of the table and asking for cards from a short deck
//! are ordinary outcomes and are not represented here.

use thiserror::Error;

/// Failure of a table operation. The table is left unchanged when one is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("slot {index} is outside the table (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("slot {index} was named more than once")]
    DuplicateSlot { index: usize },

    #[error("slot {index} holds no card")]
    InvalidSlotState { index: usize },

    #[error("only {gaps} free slots left, table capacity is {capacity}")]
    CapacityExceeded { capacity: usize, gaps: usize },

    #[error("deck ran out of cards while dealing")]
    DeckExhausted,

    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TableError::InvalidSlotState { index: 4 };
        assert_eq!(err.to_string(), "slot 4 holds no card");

        let err = TableError::CapacityExceeded { capacity: 21, gaps: 1 };
        assert_eq!(err.to_string(), "only 1 free slots left, table capacity is 21");
    }
}
