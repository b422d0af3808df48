//! Fixed-capacity open-card slots.
//!
//! `OpenSlots` is an arena of `Option<C>` whose length never changes. An
//! index names a position on the table, not a card: clearing a slot leaves
//! every other slot where it was. Only `compact` moves cards between slots.

use smallvec::SmallVec;

use crate::cards::Deck;
use crate::core::error::TableError;

/// Slot indices touched by one operation. Three in the common case.
pub type SlotIndices = SmallVec<[usize; 3]>;

/// Open-card slots with gaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSlots<C> {
    slots: Vec<Option<C>>,
}

impl<C> OpenSlots<C> {
    /// Create `capacity` empty slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Card at `index`, or `None` for a gap or any index off the table,
    /// negative ones included.
    #[must_use]
    pub fn get(&self, index: isize) -> Option<&C> {
        let index = usize::try_from(index).ok()?;
        self.slots.get(index)?.as_ref()
    }

    /// All slots, gaps included.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<C>] {
        &self.slots
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Indices of empty slots, ascending.
    pub fn gaps(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    /// Deal up to `count` cards from the top of `deck` into slots
    /// `0..count`, stopping early if the deck runs out.
    ///
    /// Used once, on an empty table. Returns the number of cards dealt.
    pub fn deal_prefix<D>(&mut self, count: usize, deck: &mut D) -> usize
    where
        D: Deck<Card = C> + ?Sized,
    {
        let mut dealt = 0;
        for slot in self.slots.iter_mut().take(count) {
            match deck.take_top() {
                Some(card) => *slot = Some(card),
                None => break,
            }
            dealt += 1;
        }
        dealt
    }

    /// Deal `count` cards from the top of `deck` into the lowest empty
    /// slots.
    ///
    /// Fails with `CapacityExceeded` before touching anything if fewer than
    /// `count` gaps exist. If the deck runs dry part way, the cards already
    /// placed stay and `DeckExhausted` is returned.
    pub fn deal_into_gaps<D>(&mut self, count: usize, deck: &mut D) -> Result<SlotIndices, TableError>
    where
        D: Deck<Card = C> + ?Sized,
    {
        let targets: SlotIndices = self.gaps().take(count).collect();
        if targets.len() < count {
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity(),
                gaps: targets.len(),
            });
        }

        for &index in &targets {
            let card = deck.take_top().ok_or(TableError::DeckExhausted)?;
            self.slots[index] = Some(card);
        }
        Ok(targets)
    }

    /// Empty three distinct occupied slots and hand back their cards in the
    /// order the indices were given.
    ///
    /// All three indices are checked before any slot is cleared.
    pub fn clear_three(&mut self, indices: [usize; 3]) -> Result<[C; 3], TableError> {
        for (n, &index) in indices.iter().enumerate() {
            match self.slots.get(index) {
                None => {
                    return Err(TableError::SlotOutOfRange {
                        index,
                        capacity: self.capacity(),
                    })
                }
                Some(None) => return Err(TableError::InvalidSlotState { index }),
                Some(Some(_)) => {}
            }
            if indices[..n].contains(&index) {
                return Err(TableError::DuplicateSlot { index });
            }
        }

        match indices.map(|index| self.slots[index].take()) {
            [Some(a), Some(b), Some(c)] => Ok([a, b, c]),
            _ => unreachable!("slots were checked as occupied and distinct"),
        }
    }

    /// Fill gaps in `0..window` with cards from `window..`, working inward
    /// from both ends.
    ///
    /// The left cursor stops on gaps inside the window, the right cursor on
    /// cards outside it; each stop pair moves one card. Runs in one pass and
    /// returns the number of cards moved. Remaining gaps in the window mean
    /// nothing was left outside it to fill them.
    pub fn compact(&mut self, window: usize) -> usize {
        let Some(mut right) = self.capacity().checked_sub(1) else {
            return 0;
        };
        let mut left = 0;
        let mut moved = 0;

        while left < window && right >= window {
            if self.slots[left].is_some() {
                left += 1;
            } else if self.slots[right].is_none() {
                right -= 1;
            } else {
                self.slots[left] = self.slots[right].take();
                moved += 1;
                left += 1;
                right -= 1;
            }
        }
        moved
    }
}

/// Take an existing layout as-is. Its length becomes the capacity.
impl<C> From<Vec<Option<C>>> for OpenSlots<C> {
    fn from(slots: Vec<Option<C>>) -> Self {
        Self { slots }
    }
}
