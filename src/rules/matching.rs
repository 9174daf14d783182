//! The three-card match rule.
//!
//! A trio is a Set when, for every feature kind independently, the three
//! values are either all the same or all different. Two-of-a-kind on any
//! single kind disqualifies the trio.
//!
//! Because each kind has three values, any two cards determine exactly
//! one third card that completes a Set with them. `completing_card`
//! computes it, and `find_matches` uses it to search a table in
//! O(n²) instead of O(n³).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, Color, FeatureKind, Number, Shading, Symbol, VALUES_PER_FEATURE};

/// All three equal, or all three pairwise distinct.
#[inline]
fn all_same_or_all_different(a: usize, b: usize, c: usize) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Check whether the three cards agree on `kind`.
#[must_use]
pub fn kind_agrees(kind: FeatureKind, a: Card, b: Card, c: Card) -> bool {
    all_same_or_all_different(
        a.feature(kind).index(),
        b.feature(kind).index(),
        c.feature(kind).index(),
    )
}

/// Check whether three cards form a Set.
///
/// Symmetric in its arguments. A card paired with itself and a
/// different third card never matches: the repeat forces two-of-a-kind
/// on whichever kind the third card differs in.
///
/// ```
/// use set_engine::cards::{Card, Color, Number, Shading, Symbol};
/// use set_engine::rules::is_match;
///
/// let one = Card::new(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
/// let two = Card::new(Number::Two, Color::Red, Symbol::Squiggle, Shading::Solid);
/// let three = Card::new(Number::Three, Color::Red, Symbol::Squiggle, Shading::Solid);
/// assert!(is_match(one, two, three));
/// ```
#[must_use]
pub fn is_match(a: Card, b: Card, c: Card) -> bool {
    FeatureKind::ALL
        .iter()
        .all(|&kind| kind_agrees(kind, a, b, c))
}

/// Feature kinds on which the trio fails (empty for a Set).
#[must_use]
pub fn failing_kinds(a: Card, b: Card, c: Card) -> SmallVec<[FeatureKind; 4]> {
    FeatureKind::ALL
        .iter()
        .copied()
        .filter(|&kind| !kind_agrees(kind, a, b, c))
        .collect()
}

/// The unique card that forms a Set with `a` and `b`.
///
/// When `a == b` this returns the same card again, which is not a
/// valid Set; callers pairing distinct cards never hit that case.
#[must_use]
pub fn completing_card(a: Card, b: Card) -> Card {
    // Values are 0, 1, 2: equal pairs complete with themselves,
    // distinct pairs complete with the remaining value.
    fn third(x: usize, y: usize) -> usize {
        if x == y {
            x
        } else {
            VALUES_PER_FEATURE - x - y
        }
    }

    let idx = |kind: FeatureKind| third(a.feature(kind).index(), b.feature(kind).index());

    Card::new(
        Number::ALL[idx(FeatureKind::Number)],
        Color::ALL[idx(FeatureKind::Color)],
        Symbol::ALL[idx(FeatureKind::Symbol)],
        Shading::ALL[idx(FeatureKind::Shading)],
    )
}

/// Find every Set among keyed cards.
///
/// Each item is `(key, card)`; keys are typically table slot indices.
/// Every trio is reported once, with keys in input order. Cards are
/// expected to be distinct.
#[must_use]
pub fn find_matches<K: Copy>(cards: &[(K, Card)]) -> Vec<[K; 3]> {
    let positions: FxHashMap<Card, usize> = cards
        .iter()
        .enumerate()
        .map(|(pos, &(_, card))| (card, pos))
        .collect();

    let mut found = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = completing_card(cards[i].1, cards[j].1);
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    found.push([cards[i].0, cards[j].0, cards[k].0]);
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn card(n: Number, c: Color, sy: Symbol, sh: Shading) -> Card {
        Card::new(n, c, sy, sh)
    }

    #[test]
    fn test_number_varies_everything_else_same() {
        let a = card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
        let b = card(Number::Two, Color::Red, Symbol::Squiggle, Shading::Solid);
        let c = card(Number::Three, Color::Red, Symbol::Squiggle, Shading::Solid);
        assert!(is_match(a, b, c));
        assert!(failing_kinds(a, b, c).is_empty());
    }

    #[test]
    fn test_duplicate_card_is_not_a_match() {
        let a = card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
        let b = card(Number::One, Color::Green, Symbol::Squiggle, Shading::Solid);
        let c = card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
        assert!(!is_match(a, b, c));
        assert_eq!(failing_kinds(a, b, c).as_slice(), &[FeatureKind::Color]);
    }

    #[test]
    fn test_all_different_everywhere() {
        let a = card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
        let b = card(Number::Two, Color::Green, Symbol::Diamond, Shading::Striped);
        let c = card(Number::Three, Color::Purple, Symbol::Oval, Shading::Outlined);
        assert!(is_match(a, b, c));
    }

    #[test]
    fn test_single_failing_kind_fails_trio() {
        let a = card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid);
        let b = card(Number::Two, Color::Green, Symbol::Diamond, Shading::Striped);
        let c = card(Number::Three, Color::Purple, Symbol::Oval, Shading::Striped);
        assert!(!is_match(a, b, c));
        assert_eq!(failing_kinds(a, b, c).as_slice(), &[FeatureKind::Shading]);
    }

    #[test]
    fn test_completing_card_matches() {
        let deck = Deck::ordered().to_vec();
        for &a in &deck {
            for &b in &deck {
                if a == b {
                    continue;
                }
                let c = completing_card(a, b);
                assert_ne!(c, a);
                assert_ne!(c, b);
                assert!(is_match(a, b, c));
            }
        }
    }

    #[test]
    fn test_find_matches_counts_every_set_once() {
        // The full deck holds 81 * 80 / 6 = 1080 distinct Sets.
        let keyed: Vec<(usize, Card)> = Deck::ordered().to_vec().into_iter().enumerate().collect();
        let found = find_matches(&keyed);
        assert_eq!(found.len(), 1080);
        for [i, j, k] in found {
            assert!(i < j && j < k);
            assert!(is_match(keyed[i].1, keyed[j].1, keyed[k].1));
        }
    }

    #[test]
    fn test_find_matches_none() {
        // Four cards differing only in two-of-a-kind patterns.
        let cards = [
            (10, card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid)),
            (11, card(Number::One, Color::Red, Symbol::Squiggle, Shading::Striped)),
            (12, card(Number::One, Color::Red, Symbol::Diamond, Shading::Solid)),
            (13, card(Number::One, Color::Red, Symbol::Diamond, Shading::Striped)),
        ];
        assert!(find_matches(&cards).is_empty());
    }

    #[test]
    fn test_find_matches_reports_keys() {
        let cards = [
            (7, card(Number::One, Color::Red, Symbol::Squiggle, Shading::Solid)),
            (3, card(Number::One, Color::Green, Symbol::Oval, Shading::Solid)),
            (5, card(Number::Two, Color::Red, Symbol::Squiggle, Shading::Solid)),
            (9, card(Number::Three, Color::Red, Symbol::Squiggle, Shading::Solid)),
        ];
        assert_eq!(find_matches(&cards), vec![[7, 5, 9]]);
    }
}
