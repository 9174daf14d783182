//! The Set game: deck, table, selection state machine, and score.
//!
//! ## Selection rules
//!
//! - Taps on empty or matched slots are ignored.
//! - With three cards already selected (a non-Set awaiting clearing), a
//!   tap on one of them is ignored; a tap elsewhere clears the trio and
//!   starts a new selection with the tapped card.
//! - Otherwise a tap toggles the slot.
//! - When a toggle brings the selection to three cards the trio is
//!   checked. A Set is flagged matched, deselected, recorded, and scored.
//!   A non-Set stays selected and is penalized according to
//!   `PenaltyTiming`: immediately, or when the trio is cleared.
//!
//! Matched cards stay on the table until `remove_matched_cards_from_table`
//! (or `deal_more` / `replace_matched_cards`) empties their slots.

use im::Vector;
use tracing::{debug, trace, warn};

use crate::cards::{Card, Deck};
use crate::core::{PenaltyTiming, SetConfig, SetRng};
use crate::rules::{failing_kinds, find_matches, is_match, Score, ScoringPolicy};
use crate::table::{Slot, SlotList, Table};

use super::outcome::{MatchedTrio, SelectOutcome};

/// A single-player Set game.
///
/// Owned by one presentation layer at a time; every operation runs to
/// completion on the caller's thread. Cloning is cheap: the deck and the
/// matched history are persistent vectors.
///
/// ## Example
///
/// ```
/// use set_engine::SetGame;
///
/// let mut game = SetGame::with_seed(42);
/// game.new_game();
/// assert_eq!(game.deck().len(), 69);
/// assert_eq!(game.table_cards().len(), 12);
///
/// if let Some([a, b, c]) = game.hint() {
///     game.select(a);
///     game.select(b);
///     game.select(c);
///     assert_eq!(game.score(), 4);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    config: SetConfig,
    scoring: ScoringPolicy,
    rng: SetRng,
    deck: Deck,
    table: Table,
    matched_deck: Vector<MatchedTrio>,
    score: Score,
}

impl SetGame {
    /// Create a game with a fresh shuffled deck and an empty table.
    ///
    /// Nothing is dealt yet; call `new_game` or `deal`.
    #[must_use]
    pub fn new(config: SetConfig, mut rng: SetRng) -> Self {
        let deck = Deck::generate(&mut rng);
        Self {
            scoring: ScoringPolicy::from_config(&config),
            config,
            rng,
            deck,
            table: Table::new(),
            matched_deck: Vector::new(),
            score: Score::default(),
        }
    }

    /// Default configuration, deterministic deck order.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SetConfig::default(), SetRng::new(seed))
    }

    // === Lifecycle ===

    /// Discard everything and start over with a freshly generated deck.
    pub fn reset(&mut self) {
        self.deck = Deck::generate(&mut self.rng);
        self.table.clear();
        self.matched_deck = Vector::new();
        self.score = Score::default();
        debug!(seed = self.rng.seed(), "game reset");
    }

    /// Reset, then deal the opening layout.
    pub fn new_game(&mut self) {
        self.reset();
        self.deal(self.config.initial_deal);
    }

    // === Dealing ===

    /// Deal up to `amount` cards from the deck into the table.
    ///
    /// Empty slots are refilled before new ones are added. Returns the
    /// cards actually dealt, which is fewer than `amount` when the deck
    /// runs short.
    pub fn deal(&mut self, amount: usize) -> Vec<Card> {
        if amount == 0 || self.deck.is_empty() {
            trace!(amount, remaining = self.deck.len(), "nothing to deal");
            return Vec::new();
        }

        let dealt = self.deck.draw(amount);
        self.table.place(dealt.iter().copied());
        debug!(
            requested = amount,
            dealt = dealt.len(),
            remaining = self.deck.len(),
            "dealt cards"
        );
        dealt
    }

    /// Clear any matched cards, then deal `deal_more_amount` cards.
    pub fn deal_more(&mut self) -> Vec<Card> {
        self.remove_matched_cards_from_table();
        self.deal(self.config.deal_more_amount)
    }

    /// Clear matched cards and refill exactly the slots they freed.
    pub fn replace_matched_cards(&mut self) -> Vec<Card> {
        let freed = self.remove_matched_cards_from_table();
        self.deal(freed)
    }

    /// Empty every slot holding a matched card. Returns how many.
    pub fn remove_matched_cards_from_table(&mut self) -> usize {
        let removed = self.table.remove_matched();
        if removed > 0 {
            debug!(removed, "removed matched cards");
        }
        removed
    }

    /// Whether a deal would put any card on the table.
    #[must_use]
    pub fn can_deal_more(&self) -> bool {
        !self.deck.is_empty()
    }

    /// Randomly rearrange the cards in play.
    pub fn shuffle_table(&mut self) {
        self.table.shuffle(&mut self.rng);
    }

    // === Selection ===

    /// Tap the card at `index`.
    ///
    /// Out-of-range indices are a programming error: they trip a debug
    /// assertion and are ignored in release builds.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        debug_assert!(
            index < self.table.len(),
            "slot {index} out of range for table of {}",
            self.table.len()
        );

        let tapped = match self.table.get(index) {
            Some(Slot::Occupied(tc)) => *tc,
            Some(Slot::Empty) => {
                trace!(index, "ignored tap on empty slot");
                return SelectOutcome::Ignored;
            }
            None => {
                warn!(index, len = self.table.len(), "ignored tap outside the table");
                return SelectOutcome::Ignored;
            }
        };

        if tapped.matched {
            trace!(index, "ignored tap on matched card");
            return SelectOutcome::Ignored;
        }

        if self.config.auto_replace_matched {
            self.replace_matched_cards();
        }

        let selected = self.table.selected_indices();
        if selected.len() == 3 {
            if selected.contains(&index) {
                trace!(index, "ignored tap inside a full trio");
                return SelectOutcome::Ignored;
            }
            self.clear_full_selection(&selected);
        }

        let now_selected = match self.table.table_card_mut(index) {
            Some(tc) => {
                tc.selected = !tc.selected;
                tc.selected
            }
            None => return SelectOutcome::Ignored,
        };

        if !now_selected {
            return SelectOutcome::Deselected;
        }

        let selected = self.table.selected_indices();
        if selected.len() < 3 {
            return SelectOutcome::Selected;
        }

        self.evaluate_trio(&selected)
    }

    /// Clear a full selection, charging a deferred mismatch penalty.
    fn clear_full_selection(&mut self, selected: &SlotList) {
        let is_set = self.cards_at(selected).is_some_and(|[a, b, c]| is_match(a, b, c));
        if !is_set && self.config.penalty_timing == PenaltyTiming::Deferred {
            self.scoring.apply_mismatch(&mut self.score);
            debug!(score = self.score.value(), "deferred mismatch penalty");
        }
        self.table.clear_selection();
    }

    fn evaluate_trio(&mut self, selected: &SlotList) -> SelectOutcome {
        let Some([a, b, c]) = self.cards_at(selected) else {
            return SelectOutcome::Ignored;
        };

        if is_match(a, b, c) {
            for &i in selected {
                if let Some(tc) = self.table.table_card_mut(i) {
                    tc.matched = true;
                    tc.selected = false;
                }
            }
            let trio = MatchedTrio::new([a, b, c]);
            self.matched_deck.push_back(trio);
            self.scoring.apply_match(&mut self.score);
            debug!(%trio, score = self.score.value(), "matched");
            SelectOutcome::Matched(trio)
        } else {
            if self.config.penalty_timing == PenaltyTiming::Immediate {
                self.scoring.apply_mismatch(&mut self.score);
            }
            let failing = failing_kinds(a, b, c);
            debug!(?failing, score = self.score.value(), "mismatch");
            SelectOutcome::Mismatched { failing }
        }
    }

    fn cards_at(&self, indices: &SlotList) -> Option<[Card; 3]> {
        match indices.as_slice() {
            &[i, j, k] => Some([
                self.table.get(i)?.card()?,
                self.table.get(j)?.card()?,
                self.table.get(k)?.card()?,
            ]),
            _ => None,
        }
    }

    // === Queries ===

    /// Configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Seed of the random source, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cards not yet dealt, in dealing order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Slots and their flags.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Card per slot; `None` for empty slots.
    #[must_use]
    pub fn table_cards(&self) -> Vec<Option<Card>> {
        self.table.cards()
    }

    /// Currently selected cards, in slot order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<Card> {
        self.table
            .occupied()
            .filter(|(_, tc)| tc.selected)
            .map(|(_, tc)| tc.card)
            .collect()
    }

    /// Matched cards still on the table.
    #[must_use]
    pub fn matched_cards(&self) -> Vec<Card> {
        self.table
            .occupied()
            .filter(|(_, tc)| tc.matched)
            .map(|(_, tc)| tc.card)
            .collect()
    }

    /// Every Set found this game, oldest first.
    #[must_use]
    pub fn matched_deck(&self) -> &Vector<MatchedTrio> {
        &self.matched_deck
    }

    /// Current score, never below zero.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// All Sets among the unmatched cards on the table, as slot triples.
    #[must_use]
    pub fn find_matches(&self) -> Vec<[usize; 3]> {
        let in_play: Vec<(usize, Card)> = self
            .table
            .occupied()
            .filter(|(_, tc)| !tc.matched)
            .map(|(i, tc)| (i, tc.card))
            .collect();
        find_matches(&in_play)
    }

    /// One Set on the table, if any.
    #[must_use]
    pub fn hint(&self) -> Option<[usize; 3]> {
        self.find_matches().into_iter().next()
    }

    /// No cards left to deal and no Set left on the table.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() && self.find_matches().is_empty()
    }
}

impl Default for SetGame {
    fn default() -> Self {
        Self::new(SetConfig::default(), SetRng::from_entropy())
    }
}
