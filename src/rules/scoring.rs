//! Score keeping.
//!
//! A confirmed match adds the reward, a confirmed mismatch removes the
//! penalty. The score is clamped at zero after every change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::SetConfig;

/// Player score, never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    #[must_use]
    pub const fn new(points: u32) -> Self {
        Self(points)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Add points.
    pub fn reward(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    /// Remove points, stopping at zero.
    pub fn penalize(&mut self, points: u32) {
        self.0 = self.0.saturating_sub(points);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point deltas for match outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub match_reward: u32,
    pub mismatch_penalty: u32,
}

impl ScoringPolicy {
    #[must_use]
    pub fn from_config(config: &SetConfig) -> Self {
        Self {
            match_reward: config.match_reward,
            mismatch_penalty: config.mismatch_penalty,
        }
    }

    pub fn apply_match(&self, score: &mut Score) {
        score.reward(self.match_reward);
    }

    pub fn apply_mismatch(&self, score: &mut Score) {
        score.penalize(self.mismatch_penalty);
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::from_config(&SetConfig::default())
    }
}
