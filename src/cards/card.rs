//! Set cards - immutable feature combinations.
//!
//! A `Card` holds exactly one value of each feature kind. Equality and
//! hashing are structural, so two cards are equal iff all four values
//! match. There are `DECK_SIZE` (81) distinct cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::feature::{Color, Feature, FeatureKind, Number, Shading, Symbol, VALUES_PER_FEATURE};

/// Number of distinct cards: 3^4.
pub const DECK_SIZE: usize = VALUES_PER_FEATURE.pow(4);

/// A card of a Set game.
///
/// ## Example
///
/// ```
/// use set_engine::cards::{Card, Color, Number, Shading, Symbol};
///
/// let card = Card::new(Number::Two, Color::Green, Symbol::Diamond, Shading::Striped);
/// assert_eq!(card.to_string(), "▲▲ green, striped");
/// assert_eq!(Card::from_index(card.index()), Some(card));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    number: Number,
    color: Color,
    symbol: Symbol,
    shading: Shading,
}

impl Card {
    /// Create a card from its four feature values.
    #[must_use]
    pub const fn new(number: Number, color: Color, symbol: Symbol, shading: Shading) -> Self {
        Self {
            number,
            color,
            symbol,
            shading,
        }
    }

    /// Card at position `index` (0..81) of the canonical, unshuffled ordering.
    ///
    /// The ordering is Number-major, Shading-minor, i.e. the Cartesian
    /// product Number × Color × Symbol × Shading.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        let digit = |place: u32| (index / VALUES_PER_FEATURE.pow(place)) % VALUES_PER_FEATURE;
        Some(Self::new(
            Number::from_index(digit(3))?,
            Color::from_index(digit(2))?,
            Symbol::from_index(digit(1))?,
            Shading::from_index(digit(0))?,
        ))
    }

    /// Position of this card in the canonical ordering (inverse of `from_index`).
    #[must_use]
    pub const fn index(self) -> usize {
        ((self.number.index() * VALUES_PER_FEATURE + self.color.index()) * VALUES_PER_FEATURE
            + self.symbol.index())
            * VALUES_PER_FEATURE
            + self.shading.index()
    }

    #[must_use]
    pub const fn number(self) -> Number {
        self.number
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn symbol(self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub const fn shading(self) -> Shading {
        self.shading
    }

    /// The value this card has for `kind`.
    #[must_use]
    pub const fn feature(self, kind: FeatureKind) -> Feature {
        match kind {
            FeatureKind::Number => Feature::Number(self.number),
            FeatureKind::Color => Feature::Color(self.color),
            FeatureKind::Symbol => Feature::Symbol(self.symbol),
            FeatureKind::Shading => Feature::Shading(self.shading),
        }
    }

    /// All four feature values, in `FeatureKind::ALL` order.
    #[must_use]
    pub fn features(self) -> [Feature; 4] {
        FeatureKind::ALL.map(|kind| self.feature(kind))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.number.count() {
            write!(f, "{}", self.symbol)?;
        }
        write!(f, " {}, {}", self.color, self.shading)
    }
}
