//! The four card attributes.
//!
//! Each attribute takes one of three values, so every attribute value maps
//! to a digit `0..3`. Three cards form a set exactly when, for every
//! attribute, their digits sum to a multiple of three (all equal or all
//! different).

use serde::{Deserialize, Serialize};

/// A three-valued card attribute.
pub trait Ternary: Copy + Eq + Sized {
    /// All values in digit order.
    const ALL: [Self; 3];

    /// Digit of this value, `0..3`.
    fn digit(self) -> u8;

    /// Value for a digit. Digits are taken modulo 3.
    #[must_use]
    fn from_digit(digit: u8) -> Self {
        Self::ALL[usize::from(digit % 3)]
    }

    /// The value that completes a set together with `self` and `other`.
    #[must_use]
    fn third(self, other: Self) -> Self {
        Self::from_digit(6 - self.digit() - other.digit())
    }

    /// Whether three values are all equal or all different.
    fn is_set(a: Self, b: Self, c: Self) -> bool {
        (a.digit() + b.digit() + c.digit()) % 3 == 0
    }
}

macro_rules! ternary_attribute {
    ($(#[$meta:meta])* $name:ident { $a:ident => $na:literal, $b:ident => $nb:literal, $c:ident => $nc:literal }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $a,
            $b,
            $c,
        }

        impl Ternary for $name {
            const ALL: [Self; 3] = [$name::$a, $name::$b, $name::$c];

            fn digit(self) -> u8 {
                self as u8
            }
        }

        impl $name {
            /// Lowercase display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $name::$a => $na,
                    $name::$b => $nb,
                    $name::$c => $nc,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

ternary_attribute! {
    /// How many symbols the card shows.
    Number { One => "1", Two => "2", Three => "3" }
}

ternary_attribute! {
    /// Symbol color.
    Color { Red => "red", Green => "green", Purple => "purple" }
}

ternary_attribute! {
    /// Symbol fill.
    Shading { Solid => "solid", Striped => "striped", Open => "open" }
}

ternary_attribute! {
    /// Symbol shape.
    Shape { Diamond => "diamond", Oval => "oval", Squiggle => "squiggle" }
}

impl Number {
    /// Symbol count, 1 to 3.
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8 + 1
    }
}
