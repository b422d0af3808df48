//! Triple finders.
//!
//! A finder looks at the table's slots, gaps included, and reports three
//! slot indices whose cards match. Finders never mutate and never fail:
//! "no triple" is an ordinary answer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{is_set, Card};

/// Three distinct slot indices, ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple([usize; 3]);

impl Triple {
    /// Create a triple from three slot indices in any order.
    ///
    /// Returns `None` if any two indices are equal.
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Option<Self> {
        let mut indices = [a, b, c];
        indices.sort_unstable();
        if indices[0] == indices[1] || indices[1] == indices[2] {
            return None;
        }
        Some(Self(indices))
    }

    /// The indices, ascending.
    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }
}

impl From<Triple> for [usize; 3] {
    fn from(triple: Triple) -> Self {
        triple.0
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Finds a matching triple among open-card slots.
///
/// ## Implementation Notes
///
/// - Empty slots must be skipped by the finder, not the caller
/// - Same slots in, same answer out
/// - Indices are returned ascending
pub trait TripleFinder<C> {
    /// Find one matching triple, or `None`.
    fn find(&self, slots: &[Option<C>]) -> Option<Triple>;

    /// Whether any matching triple exists.
    fn has_triple(&self, slots: &[Option<C>]) -> bool {
        self.find(slots).is_some()
    }
}

/// Standard finder for Set cards.
///
/// Any two cards determine the one card that completes them, so instead of
/// testing every triple this walks the pairs and looks the completion up in
/// a card-to-slot map. The first pair in index order whose completion sits
/// further right wins, which is also the smallest matching triple in
/// lexicographic order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFinder;

impl SetFinder {
    /// Every matching triple, in lexicographic order.
    #[must_use]
    pub fn all_triples(&self, slots: &[Option<Card>]) -> Vec<Triple> {
        let positions = slot_positions(slots);
        let occupied = occupied_slots(slots);
        let mut out = Vec::new();

        for (n, &(i, a)) in occupied.iter().enumerate() {
            for &(j, b) in &occupied[n + 1..] {
                if let Some(&k) = positions.get(&Card::third(a, b)) {
                    if k > j {
                        out.push(Triple([i, j, k]));
                    }
                }
            }
        }

        out.sort_unstable_by_key(|t| t.0);
        out
    }
}

impl TripleFinder<Card> for SetFinder {
    fn find(&self, slots: &[Option<Card>]) -> Option<Triple> {
        let positions = slot_positions(slots);
        let occupied = occupied_slots(slots);

        for (n, &(i, a)) in occupied.iter().enumerate() {
            for &(j, b) in &occupied[n + 1..] {
                match positions.get(&Card::third(a, b)) {
                    Some(&k) if k > j => return Some(Triple([i, j, k])),
                    _ => {}
                }
            }
        }
        None
    }
}

fn slot_positions(slots: &[Option<Card>]) -> FxHashMap<Card, usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.map(|card| (card, i)))
        .collect()
}

fn occupied_slots(slots: &[Option<Card>]) -> Vec<(usize, Card)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.map(|card| (i, card)))
        .collect()
}

/// Brute-force finder for an arbitrary matching rule.
///
/// Tests every triple of occupied slots in lexicographic order against
/// `rule`. Useful for card types without a completion shortcut.
#[derive(Clone, Copy, Debug)]
pub struct RuleFinder<F> {
    rule: F,
}

impl<F> RuleFinder<F> {
    /// Create a finder using `rule` as the matching predicate.
    pub const fn new(rule: F) -> Self {
        Self { rule }
    }
}

impl RuleFinder<fn(&Card, &Card, &Card) -> bool> {
    /// Brute-force finder using the standard Set rule.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(is_set)
    }
}

impl<C, F> TripleFinder<C> for RuleFinder<F>
where
    F: Fn(&C, &C, &C) -> bool,
{
    fn find(&self, slots: &[Option<C>]) -> Option<Triple> {
        let occupied: Vec<(usize, &C)> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|card| (i, card)))
            .collect();

        for (x, &(i, a)) in occupied.iter().enumerate() {
            for (y, &(j, b)) in occupied.iter().enumerate().skip(x + 1) {
                for &(k, c) in &occupied[y + 1..] {
                    if (self.rule)(a, b, c) {
                        return Some(Triple([i, j, k]));
                    }
                }
            }
        }
        None
    }
}
