//! Foundational primitives for grid topology analysis.
//!
//! ## Arrays and Indexing
//! Arrays are dense, row-major (last axis fastest), with a runtime `shape`.
//! Linear indices enumerate cells in lexicographic multi-index order, which
//! is the canonical scan order for every algorithm built on top.
//!
//! ## Neighbor Offsets
//! Neighbors are addressed by signed per-axis deltas relative to a cell.
//! Offset application is bounds-checked; stepping outside the array yields
//! `None` rather than wrapping.

mod array;
mod error;

pub use array::NdArray;
pub use error::Error;
