//! Table configuration.
//!
//! The table's shape is two numbers: how many slots exist in total
//! (`capacity`) and how many of them form the primary window that
//! compaction keeps full (`default_open`). The standard game uses 21 and 12:
//! at most 20 cards can be on the table without a set among them, so 21
//! slots always hold one.

use serde::{Deserialize, Serialize};

use super::error::TableError;

/// Total slots on a standard table.
pub const DEFAULT_CAPACITY: usize = 21;

/// Slots in the primary window on a standard table.
pub const DEFAULT_OPEN: usize = 12;

/// Shape of the open-card area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Total number of slots. Slot storage never grows past this.
    pub capacity: usize,

    /// Size of the primary window `0..default_open`.
    pub default_open: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_open: DEFAULT_OPEN,
        }
    }
}

impl TableConfig {
    /// Create a configuration with the standard shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total slot count.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the primary window size.
    #[must_use]
    pub fn with_default_open(mut self, default_open: usize) -> Self {
        self.default_open = default_open;
        self
    }

    /// Check the shape is usable.
    ///
    /// Configurations can come from deserialized input, so this reports
    /// instead of panicking.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidConfig("capacity must be positive".into()));
        }
        if self.default_open > self.capacity {
            return Err(TableError::InvalidConfig(format!(
                "default_open ({}) exceeds capacity ({})",
                self.default_open, self.capacity
            )));
        }
        Ok(())
    }
}
