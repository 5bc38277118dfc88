//! Dedup Framework
//!
//! First-occurrence-wins tracking of lines that were already accepted.

pub mod seen_set;

pub use seen_set::{Capacity, SeenSet, SeenSetError};
