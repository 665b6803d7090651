//! Value policies: what "empty", "mergeable" and "merged" mean.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, TileValue};

/// Strategy defining tile semantics.
///
/// Implementations must be pure: no hidden state, no side effects.
///
/// ## Argument Order
///
/// The compaction engine always calls `is_mergeable(destination, source)`
/// and `merge(destination, source)`, where `destination` is the tile nearer
/// the target edge and `source` the tile sliding into it. Asymmetric policies
/// can rely on this order.
pub trait ValuePolicy<T: TileValue> {
    /// The sentinel written into empty cells.
    fn base_value(&self) -> T;

    /// Is `value` the empty sentinel?
    fn is_base(&self, value: &T) -> bool {
        *value == self.base_value()
    }

    /// Can `source` merge into `destination`? Both are non-empty.
    fn is_mergeable(&self, destination: &T, source: &T) -> bool;

    /// Value produced when `source` merges into `destination`.
    fn merge(&self, destination: &T, source: &T) -> T;

    /// Points awarded for producing `merged`.
    fn score(&self, _merged: &T) -> u64 {
        0
    }
}

/// How two equal numeric tiles combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeRule {
    /// `destination + source`.
    #[default]
    Sum,
    /// `destination * 2`.
    Double,
}

/// Classic numeric 2048 policy over `u64`.
///
/// Equal non-empty values merge; merge results score their own value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericPolicy {
    base: u64,
    rule: MergeRule,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self {
            base: 0,
            rule: MergeRule::Sum,
        }
    }
}

impl NumericPolicy {
    /// Sum policy with `0` as the empty sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different empty sentinel.
    #[must_use]
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Use a different merge rule.
    #[must_use]
    pub fn with_rule(mut self, rule: MergeRule) -> Self {
        self.rule = rule;
        self
    }

    /// The configured merge rule.
    #[must_use]
    pub fn rule(&self) -> MergeRule {
        self.rule
    }
}

impl ValuePolicy<u64> for NumericPolicy {
    fn base_value(&self) -> u64 {
        self.base
    }

    fn is_mergeable(&self, destination: &u64, source: &u64) -> bool {
        destination == source && *destination != self.base
    }

    fn merge(&self, destination: &u64, source: &u64) -> u64 {
        match self.rule {
            MergeRule::Sum => destination.saturating_add(*source),
            MergeRule::Double => destination.saturating_mul(2),
        }
    }

    fn score(&self, merged: &u64) -> u64 {
        *merged
    }
}

/// Policy assembled from plain functions.
///
/// Lets hosts define token sets or engine-specific value types without
/// writing a trait impl. Build it with [`FnPolicy::builder`].
#[derive(Clone, Debug)]
pub struct FnPolicy<T> {
    base: T,
    is_base: Option<fn(&T) -> bool>,
    is_mergeable: fn(&T, &T) -> bool,
    merge: fn(&T, &T) -> T,
    score: Option<fn(&T) -> u64>,
}

impl<T: TileValue> FnPolicy<T> {
    /// Start building a function-backed policy.
    pub fn builder() -> FnPolicyBuilder<T> {
        FnPolicyBuilder::default()
    }
}

impl<T: TileValue> ValuePolicy<T> for FnPolicy<T> {
    fn base_value(&self) -> T {
        self.base.clone()
    }

    fn is_base(&self, value: &T) -> bool {
        match self.is_base {
            Some(check) => check(value),
            None => *value == self.base,
        }
    }

    fn is_mergeable(&self, destination: &T, source: &T) -> bool {
        (self.is_mergeable)(destination, source)
    }

    fn merge(&self, destination: &T, source: &T) -> T {
        (self.merge)(destination, source)
    }

    fn score(&self, merged: &T) -> u64 {
        self.score.map_or(0, |score| score(merged))
    }
}

/// Builder for [`FnPolicy`].
///
/// `base_value`, `is_mergeable` and `merge` are required. `is_base` defaults
/// to equality with the base value; `score` defaults to zero.
#[derive(Clone, Debug)]
pub struct FnPolicyBuilder<T> {
    base: Option<T>,
    is_base: Option<fn(&T) -> bool>,
    is_mergeable: Option<fn(&T, &T) -> bool>,
    merge: Option<fn(&T, &T) -> T>,
    score: Option<fn(&T) -> u64>,
}

impl<T> Default for FnPolicyBuilder<T> {
    fn default() -> Self {
        Self {
            base: None,
            is_base: None,
            is_mergeable: None,
            merge: None,
            score: None,
        }
    }
}

impl<T: TileValue> FnPolicyBuilder<T> {
    #[must_use]
    pub fn base_value(mut self, base: T) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use]
    pub fn is_base(mut self, check: fn(&T) -> bool) -> Self {
        self.is_base = Some(check);
        self
    }

    #[must_use]
    pub fn is_mergeable(mut self, check: fn(&T, &T) -> bool) -> Self {
        self.is_mergeable = Some(check);
        self
    }

    #[must_use]
    pub fn merge(mut self, merge: fn(&T, &T) -> T) -> Self {
        self.merge = Some(merge);
        self
    }

    #[must_use]
    pub fn score(mut self, score: fn(&T) -> u64) -> Self {
        self.score = Some(score);
        self
    }

    /// Finish the policy, failing if a required piece is missing.
    pub fn build(self) -> EngineResult<FnPolicy<T>> {
        let base = self
            .base
            .ok_or_else(|| EngineError::invalid_config("value policy is missing a base value"))?;
        let is_mergeable = self
            .is_mergeable
            .ok_or_else(|| EngineError::invalid_config("value policy is missing is_mergeable"))?;
        let merge = self
            .merge
            .ok_or_else(|| EngineError::invalid_config("value policy is missing merge"))?;

        Ok(FnPolicy {
            base,
            is_base: self.is_base,
            is_mergeable,
            merge,
            score: self.score,
        })
    }
}
