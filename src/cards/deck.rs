//! Decks: the ordered reserve of undealt cards.
//!
//! The table only needs three things from a deck: shuffle it once, take
//! cards off the top, and report how many are left. `Deck` captures that,
//! so tables can run on other card types or fixed card orders in tests.

use serde::{Deserialize, Serialize};

use super::card::{Card, CARD_COUNT};
use crate::core::rng::GameRng;

/// Source of cards for a table.
pub trait Deck {
    /// Card type this deck holds.
    type Card;

    /// Randomize the order of the remaining cards.
    fn shuffle(&mut self, rng: &mut GameRng);

    /// Remove and return the top card, or `None` if the deck is empty.
    fn take_top(&mut self) -> Option<Self::Card>;

    /// Number of cards left.
    fn remaining(&self) -> usize;

    /// Whether no cards are left.
    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// The standard 81-card Set deck.
///
/// Cards are stored bottom to top, so the top card is the last element and
/// taking it is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDeck {
    cards: Vec<Card>,
}

impl SetDeck {
    /// Full unshuffled deck. Card 0 is on top.
    #[must_use]
    pub fn full() -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.reverse();
        debug_assert_eq!(cards.len(), CARD_COUNT);
        Self { cards }
    }

    /// Deck holding `cards`, first element on top.
    ///
    /// Duplicates are not checked here; callers building decks by hand own
    /// that invariant.
    #[must_use]
    pub fn from_top(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// The next card to be dealt, without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Remaining cards from top to bottom.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }
}

impl Default for SetDeck {
    fn default() -> Self {
        Self::full()
    }
}

impl Deck for SetDeck {
    type Card = Card;

    fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck() {
        let deck = SetDeck::full();
        assert_eq!(deck.remaining(), CARD_COUNT);
        assert_eq!(deck.peek_top(), Card::from_index(0).as_ref());
    }

    #[test]
    fn test_take_top_order() {
        let mut deck = SetDeck::full();
        for index in 0..CARD_COUNT {
            assert_eq!(deck.take_top(), Card::from_index(index));
        }
        assert_eq!(deck.take_top(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_from_top() {
        let cards: Vec<_> = [5, 9, 2].iter().filter_map(|&i| Card::from_index(i)).collect();
        let mut deck = SetDeck::from_top(cards.clone());

        let listed: Vec<_> = deck.iter_from_top().copied().collect();
        assert_eq!(listed, cards);

        assert_eq!(deck.take_top(), Some(cards[0]));
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = SetDeck::full();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.remaining(), CARD_COUNT);
        assert_ne!(deck, SetDeck::full());

        let mut cards: Vec<_> = deck.iter_from_top().copied().collect();
        cards.sort();
        let expected: Vec<_> = Card::all().collect();
        assert_eq!(cards, expected);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = SetDeck::full();
        let mut b = SetDeck::full();
        a.shuffle(&mut GameRng::new(9));
        b.shuffle(&mut GameRng::new(9));
        assert_eq!(a, b);
    }
}
