//! Pluggable value semantics.
//!
//! The compaction engine and tile generator never interpret tile values
//! directly; they ask a `ValuePolicy`. This is the one extension point that
//! lets the same engine run numeric 2048, custom token sets, or host-defined
//! value types.

pub mod value;

pub use value::{FnPolicy, FnPolicyBuilder, MergeRule, NumericPolicy, ValuePolicy};
