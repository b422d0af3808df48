//! Set cards.
//!
//! A card is the combination of one value for each of the four attributes,
//! so the full deck has 3^4 = 81 distinct cards. Each card also has a
//! compact index `0..81`, its attribute digits read as a base-3 number
//! (number, color, shading, shape from most to least significant).

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Number, Shading, Shape, Ternary};

/// Number of distinct cards.
pub const CARD_COUNT: usize = 81;

/// One Set card. Immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub number: Number,
    pub color: Color,
    pub shading: Shading,
    pub shape: Shape,
}

impl Card {
    /// Create a card from its attributes.
    #[must_use]
    pub const fn new(number: Number, color: Color, shading: Shading, shape: Shape) -> Self {
        Self {
            number,
            color,
            shading,
            shape,
        }
    }

    /// Card with the given index, or `None` if `index >= 81`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CARD_COUNT {
            return None;
        }
        // Each digit is < 3, so the casts cannot truncate.
        let digit = |place: usize| ((index / place) % 3) as u8;
        Some(Self {
            number: Number::from_digit(digit(27)),
            color: Color::from_digit(digit(9)),
            shading: Shading::from_digit(digit(3)),
            shape: Shape::from_digit(digit(1)),
        })
    }

    /// Index of this card, `0..81`.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.number.digit()) * 27
            + usize::from(self.color.digit()) * 9
            + usize::from(self.shading.digit()) * 3
            + usize::from(self.shape.digit())
    }

    /// All 81 cards in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..CARD_COUNT).filter_map(Card::from_index)
    }

    /// The unique card that forms a set with `a` and `b`.
    ///
    /// If `a == b` the result is `a` again, which can never be on the table
    /// twice.
    #[must_use]
    pub fn third(a: Card, b: Card) -> Card {
        Card {
            number: a.number.third(b.number),
            color: a.color.third(b.color),
            shading: a.shading.third(b.shading),
            shape: a.shape.third(b.shape),
        }
    }
}

/// Whether three cards form a set: every attribute is either the same on
/// all three or different on all three.
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Number::is_set(a.number, b.number, c.number)
        && Color::is_set(a.color, b.color, c.color)
        && Shading::is_set(a.shading, b.shading, c.shading)
        && Shape::is_set(a.shape, b.shape, c.shape)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.number == Number::One { "" } else { "s" };
        write!(
            f,
            "{} {} {} {}{}",
            self.number, self.color, self.shading, self.shape, plural
        )
    }
}
