//! Solitaire game driver.

use log::debug;

use crate::cards::{Deck, SetDeck};
use crate::core::error::TableError;
use crate::rules::{SetFinder, Triple, TripleFinder};
use crate::table::Table;

/// Outcome of one solitaire move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A triple was found and taken off the table.
    Matched(Triple),
    /// No triple was showing, so three more cards were opened.
    Dealt,
    /// No triple is showing and no more cards can be opened.
    Finished,
}

/// A triple taken off the table, with the slots it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord<C> {
    pub triple: Triple,
    pub cards: [C; 3],
}

/// Summary of a finished game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayReport {
    /// Triples taken off the table.
    pub triples: usize,
    /// Cards opened after the initial deal.
    pub cards_dealt: usize,
    /// Cards still open when the game ended.
    pub open_left: usize,
    /// Cards never dealt.
    pub deck_left: usize,
}

/// Plays a table out.
pub struct Solitaire<D: Deck = SetDeck, F = SetFinder> {
    table: Table<D, F>,
    history: Vec<MatchRecord<D::Card>>,
    cards_dealt: usize,
    finished: bool,
}

impl Solitaire {
    /// Standard game on a table shuffled from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Table::with_seed(seed))
    }
}

impl<D, F> Solitaire<D, F>
where
    D: Deck,
    F: TripleFinder<D::Card>,
{
    /// Start a game on `table`.
    pub fn new(table: Table<D, F>) -> Self {
        Self {
            table,
            history: Vec::new(),
            cards_dealt: 0,
            finished: false,
        }
    }

    /// The table being played.
    pub fn table(&self) -> &Table<D, F> {
        &self.table
    }

    /// Triples taken so far, oldest first.
    pub fn history(&self) -> &[MatchRecord<D::Card>] {
        &self.history
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Make one move.
    ///
    /// Once `Finished` has been returned, every later call returns it again
    /// without touching the table.
    pub fn step(&mut self) -> Result<Step, TableError> {
        if self.finished {
            return Ok(Step::Finished);
        }

        match self.table.find_triple() {
            Some(triple) => {
                let cards = self.table.remove_three_cards(triple.indices())?;
                self.history.push(MatchRecord { triple, cards });

                if self.table.open_count() < self.table.config().default_open
                    && self.table.open_three_cards()?
                {
                    self.cards_dealt += 3;
                }
                self.table.compact_open_cards();
                Ok(Step::Matched(triple))
            }
            None => match self.table.open_three_cards() {
                Ok(true) => {
                    self.cards_dealt += 3;
                    Ok(Step::Dealt)
                }
                // Out of cards, or out of room: either way nothing more
                // can be shown.
                Ok(false) | Err(TableError::CapacityExceeded { .. }) => {
                    self.finished = true;
                    debug!(
                        "solitaire finished: {} triples, {} open, {} in deck",
                        self.history.len(),
                        self.table.open_count(),
                        self.table.cards_in_deck()
                    );
                    Ok(Step::Finished)
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> Result<PlayReport, TableError> {
        while self.step()? != Step::Finished {}
        Ok(self.report())
    }

    /// Summary of the game so far.
    pub fn report(&self) -> PlayReport {
        PlayReport {
            triples: self.history.len(),
            cards_dealt: self.cards_dealt,
            open_left: self.table.open_count(),
            deck_left: self.table.cards_in_deck(),
        }
    }

    /// End the game and hand back the table.
    pub fn into_table(self) -> Table<D, F> {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{is_set, Card, CARD_COUNT};
    use crate::core::{GameRng, TableConfig};
    use crate::rules::RuleFinder;

    #[test]
    fn test_full_game_conserves_cards() {
        let mut game = Solitaire::with_seed(42);
        let report = game.run().unwrap();

        assert!(game.is_finished());
        assert_eq!(
            report.triples * 3 + report.open_left + report.deck_left,
            CARD_COUNT
        );
        assert_eq!(report.cards_dealt + 12, CARD_COUNT - report.deck_left);
        assert!(report.deck_left < 3);
    }

    #[test]
    fn test_history_holds_sets() {
        let mut game = Solitaire::with_seed(3);
        game.run().unwrap();

        assert!(!game.history().is_empty());
        let mut seen: Vec<Card> = Vec::new();
        for record in game.history() {
            let [a, b, c] = &record.cards;
            assert!(is_set(a, b, c));
            seen.extend(record.cards);
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), game.history().len() * 3);
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut game = Solitaire::with_seed(11);
        game.run().unwrap();
        let report = game.report();

        assert_eq!(game.step(), Ok(Step::Finished));
        assert_eq!(game.report(), report);
    }

    #[test]
    fn test_window_full_while_deck_lasts() {
        let mut game = Solitaire::with_seed(5);
        while let Step::Matched(_) | Step::Dealt = game.step().unwrap() {
            let table = game.table();
            if table.cards_in_deck() >= 3 {
                assert!(table.open_count() >= 12);
                for i in 0..12 {
                    assert!(table.open_card(i).is_some());
                }
            }
        }
    }

    #[test]
    fn test_runs_with_brute_force_finder() {
        let mut rng = GameRng::new(42);
        let table = Table::from_parts(TableConfig::new(), SetDeck::full(), RuleFinder::standard(), &mut rng).unwrap();
        let mut brute = Solitaire::new(table);

        let mut fast = Solitaire::with_seed(42);

        assert_eq!(brute.run().unwrap(), fast.run().unwrap());
    }

    /// Deck that ignores shuffling, so tests control the deal.
    struct StackedDeck(Vec<Card>);

    impl Deck for StackedDeck {
        type Card = Card;

        fn shuffle(&mut self, _rng: &mut GameRng) {}

        fn take_top(&mut self) -> Option<Card> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }

        fn remaining(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn test_full_table_without_triple_ends_game() {
        // Eight cards that only use two values per attribute hold no
        // triple, and an eight-slot table has no room for more.
        let open = [0, 1, 3, 4, 9, 10, 12, 13];
        let reserve = [27, 54, 80];
        let cards = open.iter().chain(&reserve).filter_map(|&i| Card::from_index(i)).collect();

        let config = TableConfig::new().with_capacity(8).with_default_open(8);
        let table = Table::from_parts(config, StackedDeck(cards), SetFinder, &mut GameRng::new(0)).unwrap();
        let mut game = Solitaire::new(table);

        assert_eq!(game.step(), Ok(Step::Finished));
        assert_eq!(
            game.report(),
            PlayReport {
                triples: 0,
                cards_dealt: 0,
                open_left: 8,
                deck_left: 3,
            }
        );
    }
}
