//! What a tap on the table did.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, FeatureKind};

/// A confirmed Set. Never mutated once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedTrio([Card; 3]);

impl MatchedTrio {
    #[must_use]
    pub const fn new(cards: [Card; 3]) -> Self {
        Self(cards)
    }

    #[must_use]
    pub const fn cards(&self) -> &[Card; 3] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

impl fmt::Display for MatchedTrio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "{a} | {b} | {c}")
    }
}

/// Result of `SetGame::select`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Empty, matched, out-of-range, or part of a full trio.
    Ignored,
    /// Added to the selection, which now has fewer than three cards.
    Selected,
    /// Removed from the selection.
    Deselected,
    /// Third card completed a Set.
    Matched(MatchedTrio),
    /// Third card completed a non-Set; `failing` lists the offending kinds.
    Mismatched { failing: SmallVec<[FeatureKind; 4]> },
}

impl SelectOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Number, Shading, Symbol};

    #[test]
    fn test_trio_display_and_contains() {
        let a = Card::new(Number::One, Color::Red, Symbol::Oval, Shading::Solid);
        let b = Card::new(Number::Two, Color::Red, Symbol::Oval, Shading::Solid);
        let c = Card::new(Number::Three, Color::Red, Symbol::Oval, Shading::Solid);
        let trio = MatchedTrio::new([a, b, c]);

        assert!(trio.contains(&b));
        assert_eq!(trio.to_string(), "● red, solid | ●● red, solid | ●●● red, solid");
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = SelectOutcome::Mismatched {
            failing: SmallVec::from_slice(&[FeatureKind::Color]),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SelectOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
        assert!(!back.is_ignored());
    }
}
