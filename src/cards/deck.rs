//! The undealt deck.
//!
//! `Deck::generate` builds all 81 feature combinations and shuffles them
//! with the supplied random source. Cards leave the deck from the front
//! only; nothing is ever put back. A new game always generates a fresh
//! deck instead of reusing the previous one.

use im::Vector;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};
use super::feature::{Color, Number, Shading, Symbol};

/// Ordered sequence of cards not yet dealt.
///
/// Backed by `im::Vector` so cloning a game is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Every card exactly once, in canonical (unshuffled) order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vector::new();
        for number in Number::ALL {
            for color in Color::ALL {
                for symbol in Symbol::ALL {
                    for shading in Shading::ALL {
                        cards.push_back(Card::new(number, color, symbol, shading));
                    }
                }
            }
        }
        Self { cards }
    }

    /// A complete deck in uniformly random order.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Self::ordered().cards.into_iter().collect();
        cards.shuffle(rng);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove up to `amount` cards from the front.
    ///
    /// Returns fewer cards when the deck runs short, none when it is empty.
    pub fn draw(&mut self, amount: usize) -> Vec<Card> {
        let take = amount.min(self.cards.len());
        let rest = self.cards.split_off(take);
        let drawn = std::mem::replace(&mut self.cards, rest);
        drawn.into_iter().collect()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card to be dealt.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Whether `card` is still waiting to be dealt.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Copy of the remaining cards in dealing order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Check that `cards` is exactly one of each of the 81 combinations.
#[must_use]
pub fn is_complete_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(*card) {
            return false;
        }
    }
    seen.len() == DECK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SetRng;

    #[test]
    fn test_ordered_deck_is_canonical() {
        let deck = Deck::ordered();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
    }

    #[test]
    fn test_generate_is_complete() {
        let deck = Deck::generate(&mut SetRng::new(42));
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(is_complete_deck(&deck));
    }

    #[test]
    fn test_generate_is_shuffled() {
        let deck = Deck::generate(&mut SetRng::new(42));
        assert_ne!(deck, Deck::ordered());
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = Deck::generate(&mut SetRng::new(9));
        let b = Deck::generate(&mut SetRng::new(9));
        let c = Deck::generate(&mut SetRng::new(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = Deck::generate(&mut SetRng::new(1));
        let expected: Vec<Card> = deck.iter().take(12).copied().collect();

        let drawn = deck.draw(12);
        assert_eq!(drawn, expected);
        assert_eq!(deck.len(), DECK_SIZE - 12);
        assert!(drawn.iter().all(|c| !deck.contains(c)));
    }

    #[test]
    fn test_draw_more_than_remaining() {
        let mut deck = Deck::ordered();
        let _ = deck.draw(80);
        let peeked = deck.peek().copied();

        let drawn = deck.draw(3);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn.first().copied(), peeked);
        assert!(deck.is_empty());
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_draw_zero() {
        let mut deck = Deck::ordered();
        assert!(deck.draw(0).is_empty());
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_serde_keeps_order() {
        let mut deck = Deck::generate(&mut SetRng::new(5));
        let _ = deck.draw(12);

        let json = serde_json::to_string(&deck).unwrap();
        let restored: Deck = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, deck);
        assert_eq!(restored.len(), DECK_SIZE - 12);
        assert_eq!(restored.peek(), deck.peek());
    }

    #[test]
    fn test_is_complete_deck_rejects_duplicates() {
        let mut cards = Deck::ordered().to_vec();
        assert!(is_complete_deck(&cards));

        cards[1] = cards[0];
        assert!(!is_complete_deck(&cards));

        cards.pop();
        assert!(!is_complete_deck(&cards));
    }
}
