//! Table slots.
//!
//! A slot is either empty or holds a face-up card with its selection and
//! match flags. The flags are only ever changed by `SetGame`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A card in play plus its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCard {
    pub card: Card,
    pub selected: bool,
    pub matched: bool,
}

impl TableCard {
    /// A freshly dealt card: not selected, not matched.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            selected: false,
            matched: false,
        }
    }
}

/// One position on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Nothing dealt here yet, or the card was matched and removed.
    #[default]
    Empty,
    Occupied(TableCard),
}

impl Slot {
    #[must_use]
    pub const fn with_card(card: Card) -> Self {
        Slot::Occupied(TableCard::new(card))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Slot::Occupied(tc) => Some(tc.card),
            Slot::Empty => None,
        }
    }

    #[must_use]
    pub const fn table_card(&self) -> Option<&TableCard> {
        match self {
            Slot::Occupied(tc) => Some(tc),
            Slot::Empty => None,
        }
    }

    pub fn table_card_mut(&mut self) -> Option<&mut TableCard> {
        match self {
            Slot::Occupied(tc) => Some(tc),
            Slot::Empty => None,
        }
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Slot::Occupied(TableCard { selected: true, .. }))
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Slot::Occupied(TableCard { matched: true, .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Number, Shading, Symbol};

    fn sample() -> Card {
        Card::new(Number::Two, Color::Purple, Symbol::Oval, Shading::Striped)
    }

    #[test]
    fn test_empty_slot() {
        let slot = Slot::default();
        assert!(slot.is_empty());
        assert_eq!(slot.card(), None);
        assert!(!slot.is_selected());
        assert!(!slot.is_matched());
    }

    #[test]
    fn test_fresh_card_has_no_flags() {
        let slot = Slot::with_card(sample());
        assert!(!slot.is_empty());
        assert_eq!(slot.card(), Some(sample()));
        assert!(!slot.is_selected());
        assert!(!slot.is_matched());
    }

    #[test]
    fn test_flags() {
        let mut slot = Slot::with_card(sample());
        if let Some(tc) = slot.table_card_mut() {
            tc.selected = true;
        }
        assert!(slot.is_selected());

        if let Some(tc) = slot.table_card_mut() {
            tc.selected = false;
            tc.matched = true;
        }
        assert!(!slot.is_selected());
        assert!(slot.is_matched());
    }
}
