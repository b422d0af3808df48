//! The card table: a deck plus a window of open cards.
//!
//! ## Slot Layout
//!
//! The table has `capacity` slots (21 by default). The first `default_open`
//! (12) form the primary window, which `compact_open_cards` keeps as full
//! as the cards allow. Any slot can be a gap after a triple is removed.
//!
//! ## Usage
//!
//! ```
//! use set_table::Table;
//!
//! let mut table = Table::with_seed(42);
//! assert_eq!(table.open_count(), 12);
//! assert_eq!(table.cards_in_deck(), 69);
//!
//! if let Some(triple) = table.find_triple() {
//!     table.remove_three_cards(triple.indices()).unwrap();
//!     table.open_three_cards().unwrap();
//! } else {
//!     table.open_three_cards().unwrap();
//! }
//! table.compact_open_cards();
//! ```
//!
//! ## Threading
//!
//! `Table` has no interior mutability. Hosts that read it from one thread
//! while mutating from another must guard every operation with the same
//! lock.

use log::debug;

use crate::cards::{Deck, SetDeck};
use crate::core::config::TableConfig;
use crate::core::error::TableError;
use crate::core::rng::GameRng;
use crate::rules::{SetFinder, Triple, TripleFinder};

use super::slots::OpenSlots;

/// Cards dealt by `open_three_cards`.
const DEAL_SIZE: usize = 3;

/// A Set table: the deck, the open cards, and the rule that finds triples.
pub struct Table<D: Deck = SetDeck, F = SetFinder> {
    config: TableConfig,
    deck: D,
    finder: F,
    slots: OpenSlots<D::Card>,
    seed: u64,
}

impl Table {
    /// Standard table with a freshly shuffled 81-card deck and 12 cards
    /// open. The shuffle is seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::standard(GameRng::from_entropy())
    }

    /// Standard table whose shuffle is derived from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::standard(GameRng::new(seed))
    }

    fn standard(mut rng: GameRng) -> Self {
        Self::deal(TableConfig::default(), SetDeck::full(), SetFinder, &mut rng)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Deck, F> Table<D, F> {
    /// Build a table from its parts.
    ///
    /// The deck is shuffled with `rng`, then slots `0..default_open` are
    /// filled from its top. A deck smaller than the window fills as many
    /// slots as it can.
    pub fn from_parts(config: TableConfig, deck: D, finder: F, rng: &mut GameRng) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::deal(config, deck, finder, rng))
    }

    fn deal(config: TableConfig, mut deck: D, finder: F, rng: &mut GameRng) -> Self {
        deck.shuffle(rng);
        let mut slots = OpenSlots::new(config.capacity);
        let dealt = slots.deal_prefix(config.default_open, &mut deck);
        debug!(
            "new table: seed {}, {} cards open, {} in deck",
            rng.seed(),
            dealt,
            deck.remaining()
        );

        Self {
            config,
            deck,
            finder,
            slots,
            seed: rng.seed(),
        }
    }

    /// Table shape.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Seed of the RNG that shuffled the deck.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The undealt cards.
    #[must_use]
    pub fn deck(&self) -> &D {
        &self.deck
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn cards_in_deck(&self) -> usize {
        self.deck.remaining()
    }

    /// Card in slot `index`.
    ///
    /// Any index is accepted: gaps, negative indices and indices past the
    /// last slot all give `None`.
    #[must_use]
    pub fn open_card(&self, index: isize) -> Option<&D::Card> {
        self.slots.get(index)
    }

    /// All slots in order, gaps included.
    #[must_use]
    pub fn open_cards(&self) -> &[Option<D::Card>] {
        self.slots.as_slice()
    }

    /// Number of slots currently holding a card.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.slots.occupied_count()
    }

    /// Whether the table has at least `default_open` slots.
    ///
    /// This compares slot capacity, not occupancy, so it holds for every
    /// validly configured table. Use [`Table::open_count`] to ask how many
    /// cards are actually showing.
    #[must_use]
    pub fn enough_open(&self) -> bool {
        self.slots.capacity() >= self.config.default_open
    }

    /// Open three more cards, filling the lowest gaps first.
    ///
    /// Returns `Ok(false)` and changes nothing if the deck holds fewer than
    /// three cards. Slots never grow past capacity: with fewer than three
    /// gaps the call fails with `CapacityExceeded` and changes nothing.
    pub fn open_three_cards(&mut self) -> Result<bool, TableError> {
        if self.deck.remaining() < DEAL_SIZE {
            debug!("not opening cards: {} left in deck", self.deck.remaining());
            return Ok(false);
        }

        let placed = self.slots.deal_into_gaps(DEAL_SIZE, &mut self.deck)?;
        debug!("opened cards into slots {:?}, {} left in deck", placed, self.deck.remaining());
        Ok(true)
    }

    /// Take the cards in three slots off the table.
    ///
    /// Each slot must be in range, distinct from the others and occupied;
    /// otherwise nothing is removed. Other slots are not touched and no
    /// compaction happens. The removed cards are returned in the order the
    /// indices were given.
    pub fn remove_three_cards(&mut self, indices: [usize; 3]) -> Result<[D::Card; 3], TableError> {
        match self.slots.clear_three(indices) {
            Ok(cards) => {
                debug!("removed cards from slots {:?}", indices);
                Ok(cards)
            }
            Err(err) => {
                debug!("rejected removal of slots {:?}: {}", indices, err);
                Err(err)
            }
        }
    }

    /// Move cards from beyond the primary window into gaps inside it.
    ///
    /// Returns the number of cards moved. Calling it again right away moves
    /// nothing.
    pub fn compact_open_cards(&mut self) -> usize {
        let moved = self.slots.compact(self.config.default_open);
        if moved > 0 {
            debug!("compacted {} cards into the primary window", moved);
        }
        moved
    }
}

impl<D, F> Table<D, F>
where
    D: Deck,
    F: TripleFinder<D::Card>,
{
    /// Ask the finder for a matching triple among the open cards.
    ///
    /// The finder sees every slot, gaps included.
    #[must_use]
    pub fn find_triple(&self) -> Option<Triple> {
        self.finder.find(self.slots.as_slice())
    }
}

impl<D, F> std::fmt::Debug for Table<D, F>
where
    D: Deck + std::fmt::Debug,
    D::Card: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("slots", &self.slots)
            .field("deck", &self.deck)
            .finish_non_exhaustive()
    }
}

/// One line per slot (`empty` for gaps), then the number of cards left in
/// the deck.
impl<D, F> std::fmt::Display for Table<D, F>
where
    D: Deck,
    D::Card: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in self.slots.as_slice() {
            match slot {
                Some(card) => writeln!(f, "{}", card)?,
                None => writeln!(f, "empty")?,
            }
        }
        write!(f, "{}", self.deck.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn card(index: usize) -> Card {
        Card::from_index(index).unwrap()
    }

    fn table() -> Table {
        Table::with_seed(7)
    }

    #[test]
    fn test_fresh_table() {
        let table = table();
        assert_eq!(table.open_count(), 12);
        assert_eq!(table.cards_in_deck(), 69);
        assert_eq!(table.seed(), 7);
        for i in 0..12 {
            assert!(table.open_card(i).is_some());
        }
        for i in 12..21 {
            assert!(table.open_card(i).is_none());
        }
    }

    #[test]
    fn test_open_card_out_of_range() {
        let table = table();
        assert_eq!(table.open_card(-1), None);
        assert_eq!(table.open_card(21), None);
        assert_eq!(table.open_card(1000), None);
    }

    #[test]
    fn test_enough_open_ignores_occupancy() {
        let mut table = table();
        assert!(table.enough_open());

        table.remove_three_cards([0, 1, 2]).unwrap();
        table.remove_three_cards([3, 4, 5]).unwrap();
        assert_eq!(table.open_count(), 6);
        assert!(table.enough_open());
    }

    #[test]
    fn test_open_three_fills_gaps_first() {
        let mut table = table();
        table.remove_three_cards([1, 6, 10]).unwrap();

        assert_eq!(table.open_three_cards(), Ok(true));
        assert_eq!(table.open_count(), 12);
        assert_eq!(table.cards_in_deck(), 66);
        assert!(table.open_card(12).is_none());
    }

    #[test]
    fn test_open_three_extends_past_window() {
        let mut table = table();
        assert_eq!(table.open_three_cards(), Ok(true));

        assert_eq!(table.open_count(), 15);
        for i in 12..15 {
            assert!(table.open_card(i).is_some());
        }
        assert!(table.open_card(15).is_none());
    }

    #[test]
    fn test_open_three_uses_deck_top() {
        let mut table = table();
        let expected: Vec<Card> = table.deck().iter_from_top().take(3).copied().collect();

        table.open_three_cards().unwrap();

        let opened: Vec<Card> = (12..15).filter_map(|i| table.open_card(i).copied()).collect();
        assert_eq!(opened, expected);
    }

    #[test]
    fn test_open_three_capacity_ceiling() {
        let mut table = table();
        assert_eq!(table.open_three_cards(), Ok(true));
        assert_eq!(table.open_three_cards(), Ok(true));
        assert_eq!(table.open_three_cards(), Ok(true));
        assert_eq!(table.open_count(), 21);

        let before = table.to_string();
        assert_eq!(
            table.open_three_cards(),
            Err(TableError::CapacityExceeded { capacity: 21, gaps: 0 })
        );
        assert_eq!(table.to_string(), before);
    }

    #[test]
    fn test_open_three_short_deck() {
        let config = TableConfig::new();
        let deck = SetDeck::from_top((0..14).map(card));
        let mut table = Table::from_parts(config, deck, SetFinder, &mut GameRng::new(1)).unwrap();
        assert_eq!(table.cards_in_deck(), 2);

        let before = table.to_string();
        assert_eq!(table.open_three_cards(), Ok(false));
        assert_eq!(table.to_string(), before);
    }

    #[test]
    fn test_remove_rejects_gap() {
        let mut table = table();
        table.remove_three_cards([0, 1, 2]).unwrap();

        let before = table.to_string();
        assert_eq!(
            table.remove_three_cards([2, 3, 4]),
            Err(TableError::InvalidSlotState { index: 2 })
        );
        assert_eq!(table.to_string(), before);
    }

    #[test]
    fn test_remove_found_triple() {
        let mut table = table();
        let triple = Triple::new(0, 4, 8).unwrap();
        let expected = [
            *table.open_card(0).unwrap(),
            *table.open_card(4).unwrap(),
            *table.open_card(8).unwrap(),
        ];

        assert_eq!(table.remove_three_cards(triple.indices()), Ok(expected));
    }

    #[test]
    fn test_compact_open_cards() {
        let mut table = table();
        table.open_three_cards().unwrap();
        let outside: Vec<Card> = (12..15).filter_map(|i| table.open_card(i).copied()).collect();

        table.remove_three_cards([0, 5, 9]).unwrap();
        assert_eq!(table.compact_open_cards(), 3);

        assert_eq!(table.open_card(0), Some(&outside[2]));
        assert_eq!(table.open_card(5), Some(&outside[1]));
        assert_eq!(table.open_card(9), Some(&outside[0]));
        assert_eq!(table.open_count(), 12);
        assert_eq!(table.compact_open_cards(), 0);
    }

    #[test]
    fn test_find_triple_is_valid() {
        let table = table();
        if let Some(triple) = table.find_triple() {
            let [i, j, k] = triple.indices();
            let slots = table.open_cards();
            assert!(crate::cards::is_set(
                slots[i].as_ref().unwrap(),
                slots[j].as_ref().unwrap(),
                slots[k].as_ref().unwrap()
            ));
        }
    }

    #[test]
    fn test_display() {
        let config = TableConfig::new().with_capacity(4).with_default_open(2);
        let deck = SetDeck::from_top([card(0)]);
        let table = Table::from_parts(config, deck, SetFinder, &mut GameRng::new(1)).unwrap();

        assert_eq!(
            table.to_string(),
            "1 red solid diamond\nempty\nempty\nempty\n0"
        );
    }

    #[test]
    fn test_from_parts_invalid_config() {
        let config = TableConfig::new().with_capacity(9);
        let result = Table::from_parts(config, SetDeck::full(), SetFinder, &mut GameRng::new(1));
        assert!(matches!(result, Err(TableError::InvalidConfig(_))));
    }
}
