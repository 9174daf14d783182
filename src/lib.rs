//! # set-engine
//!
//! A presentation-free engine for the Set card game.
//!
//! ## Design Principles
//!
//! 1. **No UI types**: The engine exposes deal, select, and query calls.
//!    Rendering, animation, and input handling belong to the caller.
//!
//! 2. **Total operations**: Out-of-range taps and oversized deals are
//!    absorbed as no-ops. Only configuration loading can fail.
//!
//! 3. **Injected randomness**: Deck order comes from a seeded `SetRng`,
//!    so tests and replays are deterministic.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Features, cards, and deck generation
//! - `rules`: Match predicate and scoring
//! - `table`: Slots and card placement
//! - `game`: The `SetGame` selection state machine

pub mod core;
pub mod cards;
pub mod rules;
pub mod table;
pub mod game;

// Re-export commonly used types
pub use crate::core::{ConfigError, PenaltyTiming, SetConfig, SetRng};

pub use crate::cards::{
    Card, Color, Deck, Feature, FeatureKind, Number, Shading, Symbol, DECK_SIZE,
};

pub use crate::rules::{completing_card, is_match, Score, ScoringPolicy};

pub use crate::table::{Slot, Table, TableCard};

pub use crate::game::{MatchedTrio, SelectOutcome, SetGame};
