//! # shortlist-index
//!
//! The similarity index: one fixed-length vector per catalog entry, k-nearest
//! neighbor search by squared L2 distance converted to a similarity score.
//!
//! A flat linear scan is deliberate: at the target scale (low thousands of
//! vectors) correctness and simplicity dominate, and [`VectorStore`]'s
//! interface leaves room to swap in a sub-linear index without touching
//! callers.

mod flat;
mod store;

pub use store::VectorStore;
