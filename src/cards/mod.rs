//! Card system: features, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Number`, `Color`, `Symbol`, `Shading`: the four feature kinds
//! - `Feature` / `FeatureKind`: a value tagged with its kind, and the kinds themselves
//! - `Card`: immutable combination of one value per kind
//! - `Deck`: shuffled cards waiting to be dealt

pub mod card;
pub mod deck;
pub mod feature;

pub use card::{Card, DECK_SIZE};
pub use deck::{is_complete_deck, Deck};
pub use feature::{Color, Feature, FeatureKind, Number, Shading, Symbol, VALUES_PER_FEATURE};
