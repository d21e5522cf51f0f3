//! Umbrella crate for the `grid-topology` workspace.
//!
//! Re-exports the array substrate, the labeler, and the containment DAG
//! pipeline. The per-crate `Error` types are re-exported under distinct
//! names.

pub use gt_contain::{
    ContainError, ContainmentDag, Error as InvariantError, ExplicitTree, GroupGraph, GroupNode,
    Layering, TreeNode, TreeNodeId, contain,
};
pub use gt_core::{Error as ArrayError, NdArray};
pub use gt_label::{
    Error as ConfigError, Label, Labeling, Pattern, PatternRegistry, UnionFind, label_regions,
};
