//! Game rules: the match predicate and scoring.
//!
//! Neither piece holds state about the table; `game::SetGame` calls into
//! them when a third card is selected.

pub mod matching;
pub mod scoring;

pub use matching::{completing_card, failing_kinds, find_matches, is_match, kind_agrees};
pub use scoring::{Score, ScoringPolicy};
