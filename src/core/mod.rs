//! Core engine plumbing: random source and configuration.
//!
//! Nothing in here knows about cards; the rest of the crate builds on it.

pub mod config;
pub mod rng;

pub use config::{ConfigError, PenaltyTiming, SetConfig};
pub use rng::SetRng;
