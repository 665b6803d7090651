//! Weighted pool of spawnable tile values.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, EngineResult, TileValue};

/// Candidate values and their relative weights.
///
/// Buckets are laid out in insertion order: value `i` owns the cumulative
/// range `(w_0 + .. + w_{i-1}, w_0 + .. + w_i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool<T> {
    entries: SmallVec<[(T, u64); 4]>,
}

impl<T> Default for TilePool<T> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl TilePool<u64> {
    /// The classic pool: a 2 ninety-five times out of a hundred, else a 4.
    pub fn classic() -> Self {
        Self::new().with(2, 95).with(4, 5)
    }
}

impl<T: TileValue> TilePool<T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` with `weight`, returning the pool (builder pattern).
    #[must_use]
    pub fn with(mut self, value: T, weight: u64) -> Self {
        self.add(value, weight);
        self
    }

    /// Add `value` with `weight`.
    ///
    /// Adding a value already in the pool increases its weight.
    pub fn add(&mut self, value: T, weight: u64) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, existing_weight)) => {
                *existing_weight = existing_weight.saturating_add(weight);
            }
            None => self.entries.push((value, weight)),
        }
    }

    /// Add `value` with the pool's current average weight (1 if empty).
    pub fn add_with_average_weight(&mut self, value: T) {
        let weight = if self.entries.is_empty() {
            1
        } else {
            self.total_weight() / self.entries.len() as u64
        };
        self.add(value, weight);
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Does the pool hold no values?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, (_, weight)| total.saturating_add(*weight))
    }

    /// Weight of `value`, if present.
    #[must_use]
    pub fn weight_of(&self, value: &T) -> Option<u64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == value)
            .map(|(_, weight)| *weight)
    }

    /// Iterate `(value, weight)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.entries.iter().map(|(value, weight)| (value, *weight))
    }

    /// Check that a value can be drawn.
    pub fn validate(&self) -> EngineResult<()> {
        if self.entries.is_empty() {
            return Err(EngineError::invalid_config("tile pool is empty"));
        }
        if self.total_weight() == 0 {
            return Err(EngineError::invalid_config("tile pool has zero total weight"));
        }
        Ok(())
    }

    /// Value whose `(min, max]` bucket contains `roll`.
    ///
    /// `roll` is expected in `1..=total_weight()`; anything else yields `None`.
    #[must_use]
    pub fn pick(&self, roll: u64) -> Option<&T> {
        let mut min = 0u64;
        for (value, weight) in &self.entries {
            let max = min.saturating_add(*weight);
            if min < roll && roll <= max {
                return Some(value);
            }
            min = max;
        }
        None
    }
}
