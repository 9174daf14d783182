//! The playable game built from cards, table, and rules.
//!
//! `SetGame` is the only stateful type a presentation layer needs; it
//! reports each tap back as a `SelectOutcome`.

mod outcome;
mod set_game;

pub use outcome::{MatchedTrio, SelectOutcome};
pub use set_game::SetGame;
