//! Connected-region labeling of n-dimensional integer arrays.
//!
//! A [`Pattern`] is a boolean neighbor mask with odd extent per axis,
//! centered on the origin. A [`PatternRegistry`] resolves the mask to use
//! per cell value (one default plus per-value overrides).
//!
//! Two foreground cells belong to the same region iff their values are
//! equal and the offset between them is present in either cell's resolved
//! pattern. Asymmetric masks are therefore closed symmetrically: a cell
//! that can "see" its neighbor connects to it even if the neighbor cannot
//! see back.
//!
//! [`label_regions`] assigns dense labels `1..=K` in order of first
//! appearance during a row-major scan, which makes repeated runs on the
//! same input bit-identical. `0` marks background.

mod error;
mod label;
mod pattern;
mod union_find;

pub use error::Error;
pub use label::{Label, Labeling, label_regions};
pub use pattern::{Pattern, PatternRegistry};
pub use union_find::UnionFind;
