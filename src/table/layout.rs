//! The table: an ordered list of slots.
//!
//! `Table` tracks where dealt cards sit and handles placement and
//! removal. It supports:
//! - Filling empty slots before growing the table
//! - Clearing matched cards while keeping slot positions stable
//! - Permuting the cards in play
//! - Queries over selected and matched slots

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::SetRng;

use super::slot::{Slot, TableCard};

/// Slot indices; inline for the common case of a trio.
pub type SlotList = SmallVec<[usize; 3]>;

/// Cards in play, by slot position.
///
/// ## Usage
///
/// ```
/// use set_engine::cards::Deck;
/// use set_engine::table::Table;
///
/// let mut deck = Deck::ordered();
/// let mut table = Table::new();
///
/// table.place(deck.draw(12));
/// assert_eq!(table.len(), 12);
/// assert_eq!(table.occupied_count(), 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    slots: Vec<Slot>,
}

impl Table {
    /// An empty table with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot exists at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Slots whose card was removed.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    /// Slot at `index`, or `None` past the end of the table.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub(crate) fn table_card_mut(&mut self, index: usize) -> Option<&mut TableCard> {
        self.slots.get_mut(index).and_then(Slot::table_card_mut)
    }

    /// All slots in table order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Card per slot, `None` for empty slots.
    #[must_use]
    pub fn cards(&self) -> Vec<Option<Card>> {
        self.slots.iter().map(Slot::card).collect()
    }

    /// Occupied slots with their index.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &TableCard)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.table_card().map(|tc| (i, tc)))
    }

    /// Put cards on the table.
    ///
    /// Empty slots are filled first, lowest index first; the rest are
    /// appended as new slots.
    pub fn place(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut cards = cards.into_iter();

        for slot in self.slots.iter_mut().filter(|s| s.is_empty()) {
            match cards.next() {
                Some(card) => *slot = Slot::with_card(card),
                None => return,
            }
        }

        self.slots.extend(cards.map(Slot::with_card));
    }

    /// Empty every matched slot. Returns how many were emptied.
    pub fn remove_matched(&mut self) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.is_matched() {
                *slot = Slot::Empty;
                removed += 1;
            }
        }
        removed
    }

    /// Drop every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Indices of selected slots, ascending.
    #[must_use]
    pub fn selected_indices(&self) -> SlotList {
        self.occupied()
            .filter(|(_, tc)| tc.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of matched slots still on the table, ascending.
    #[must_use]
    pub fn matched_indices(&self) -> SlotList {
        self.occupied()
            .filter(|(_, tc)| tc.matched)
            .map(|(i, _)| i)
            .collect()
    }

    /// Unset the selected flag everywhere.
    pub fn clear_selection(&mut self) {
        for slot in &mut self.slots {
            if let Some(tc) = slot.table_card_mut() {
                tc.selected = false;
            }
        }
    }

    /// Randomly permute the cards in play among the occupied slots.
    ///
    /// Empty slots stay where they are; flags travel with their card.
    pub fn shuffle(&mut self, rng: &mut SetRng) {
        let positions: Vec<usize> = self.occupied().map(|(i, _)| i).collect();
        let mut cards: Vec<TableCard> = self.occupied().map(|(_, tc)| *tc).collect();
        rng.shuffle(&mut cards);

        for (pos, tc) in positions.into_iter().zip(cards) {
            self.slots[pos] = Slot::Occupied(tc);
        }
    }
}
