//! Merge operations for Content Entity Store collections.
//!
//! Pure functions over loaded collections; no I/O. The store layer loads a
//! collection once per invocation, these operations transform it in memory,
//! and the store layer writes the whole result back.
//!
//! - [`append_all`] — append new records, order-preserving, no dedup
//! - [`replace_from`] — keep a prefix, splice in replacement records
//! - [`update_first`] — mutate the first record matching a predicate
//! - [`SplicePoint`] — explicit policy for where a splice begins

pub mod ops;
pub mod splice;

pub use ops::{append_all, replace_from, update_first};
pub use splice::SplicePoint;
