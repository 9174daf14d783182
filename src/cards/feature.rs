//! The four card features and their value domains.
//!
//! Every kind has exactly three values, listed in `ALL` in a fixed
//! order. `index()` gives the position of a value in that order, which
//! is what the match rule and the deck generator work with.
//!
//! ## Kinds
//!
//! - `Number`: one, two, three
//! - `Color`: red, green, purple
//! - `Symbol`: squiggle, diamond, oval
//! - `Shading`: solid, striped, outlined

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of values each feature kind has.
pub const VALUES_PER_FEATURE: usize = 3;

/// How many symbols are printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    One,
    Two,
    Three,
}

/// Ink color of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// Shape of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Squiggle,
    Diamond,
    Oval,
}

/// Fill of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    Solid,
    Striped,
    Outlined,
}

macro_rules! feature_values {
    ($ty:ident { $a:ident, $b:ident, $c:ident }) => {
        impl $ty {
            /// All values in enumeration order.
            pub const ALL: [$ty; VALUES_PER_FEATURE] = [$ty::$a, $ty::$b, $ty::$c];

            /// Position of this value in `ALL`.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Value at `index` in `ALL`, if in range.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }
    };
}

feature_values!(Number { One, Two, Three });
feature_values!(Color { Red, Green, Purple });
feature_values!(Symbol { Squiggle, Diamond, Oval });
feature_values!(Shading { Solid, Striped, Outlined });

impl Number {
    /// Symbol count printed on the card (1-3).
    #[must_use]
    pub const fn count(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Symbol::Squiggle => "■",
            Symbol::Diamond => "▲",
            Symbol::Oval => "●",
        };
        f.write_str(glyph)
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Outlined => "outlined",
        };
        f.write_str(name)
    }
}

/// The four independent feature kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Number,
    Color,
    Symbol,
    Shading,
}

impl FeatureKind {
    /// All kinds, in the order cards are generated.
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::Number,
        FeatureKind::Color,
        FeatureKind::Symbol,
        FeatureKind::Shading,
    ];

    /// Every value of this kind, in enumeration order.
    #[must_use]
    pub fn values(self) -> [Feature; VALUES_PER_FEATURE] {
        match self {
            FeatureKind::Number => Number::ALL.map(Feature::Number),
            FeatureKind::Color => Color::ALL.map(Feature::Color),
            FeatureKind::Symbol => Symbol::ALL.map(Feature::Symbol),
            FeatureKind::Shading => Shading::ALL.map(Feature::Shading),
        }
    }
}

/// A single feature value tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Feature {
    Number(Number),
    Color(Color),
    Symbol(Symbol),
    Shading(Shading),
}

impl Feature {
    /// Which kind this value belongs to.
    #[must_use]
    pub const fn kind(self) -> FeatureKind {
        match self {
            Feature::Number(_) => FeatureKind::Number,
            Feature::Color(_) => FeatureKind::Color,
            Feature::Symbol(_) => FeatureKind::Symbol,
            Feature::Shading(_) => FeatureKind::Shading,
        }
    }

    /// Position of the value within its kind.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Feature::Number(v) => v.index(),
            Feature::Color(v) => v.index(),
            Feature::Symbol(v) => v.index(),
            Feature::Shading(v) => v.index(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Number(v) => fmt::Display::fmt(v, f),
            Feature::Color(v) => fmt::Display::fmt(v, f),
            Feature::Symbol(v) => fmt::Display::fmt(v, f),
            Feature::Shading(v) => fmt::Display::fmt(v, f),
        }
    }
}
