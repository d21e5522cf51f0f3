//! Containment DAG construction over labeled regions.
//!
//! Pipeline stages, leaf-first:
//! - [`GroupGraph::build`]: undirected adjacency over labels plus an
//!   exterior flag per label. Background cells are transparent conduits to
//!   the exterior, not nodes.
//! - [`Layering::compute`]: layer-synchronous multi-source BFS from the
//!   exterior frontier; depth is the minimal number of other regions
//!   crossed to reach the exterior, and every minimal-depth parent is
//!   recorded, not just the first discovered.
//! - [`ContainmentDag`]: depth/parents/children queries over the result.
//! - [`ContainmentDag::materialize`]: nested arena form with shared
//!   sub-structure identity for multi-parent labels.
//!
//! [`contain`] runs the whole pipeline from an input array. Everything is
//! single-threaded, synchronous and pure; any error aborts the pipeline
//! with no partial output.

mod dag;
mod error;
mod graph;
mod layer;
mod tree;

use std::collections::HashSet;
use std::hash::Hash;

use gt_core::NdArray;
use gt_label::{Label, Labeling, PatternRegistry, label_regions};

pub use dag::ContainmentDag;
pub use error::{ContainError, Error};
pub use graph::{GroupGraph, GroupNode};
pub use layer::Layering;
pub use tree::{ExplicitTree, TreeNode, TreeNodeId};

#[inline]
pub(crate) fn slot(label: Label) -> usize {
    label as usize - 1
}

/// Labels `array` and builds its containment DAG in one call.
pub fn contain<T>(
    array: &NdArray<T>,
    registry: &PatternRegistry<T>,
    background: &HashSet<T>,
) -> Result<(Labeling<T>, ContainmentDag), ContainError>
where
    T: Copy + Eq + Hash,
{
    let labeling = label_regions(array, registry, background)?;
    let graph = GroupGraph::build(&labeling, registry);
    let layering = Layering::compute(&graph)?;
    Ok((labeling, ContainmentDag::new(graph, layering)))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use gt_core::NdArray;
    use gt_label::{Pattern, PatternRegistry};

    use super::contain;

    fn run_2d(data: Vec<i64>, side: usize) -> (gt_label::Labeling<i64>, super::ContainmentDag) {
        let array = NdArray::from_vec(vec![side, side], data).expect("valid array");
        let registry = PatternRegistry::new(Pattern::axis_neighbors(2).expect("valid pattern"));
        let background: HashSet<i64> = [0].into_iter().collect();
        contain(&array, &registry, &background).expect("pipeline succeeds")
    }

    #[test]
    fn flat_1d_regions_all_sit_at_depth_zero() {
        let array = NdArray::from_vec(vec![11], vec![0i64, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0])
            .expect("valid array");
        let registry = PatternRegistry::new(Pattern::axis_neighbors(1).expect("valid pattern"));
        let background: HashSet<i64> = [0].into_iter().collect();
        let (labeling, dag) = contain(&array, &registry, &background).expect("pipeline succeeds");

        assert_eq!(labeling.num_labels(), 3);
        for label in 1..=3 {
            assert_eq!(dag.depth(label), 0);
            assert!(dag.parents(label).is_empty());
        }
        assert_eq!(dag.roots(), &[1, 2, 3]);
    }

    #[test]
    fn nested_rings_chain() {
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 2, 2, 2, 1, //
            1, 2, 3, 2, 1, //
            1, 2, 2, 2, 1, //
            1, 1, 1, 1, 1, //
        ];
        let (labeling, dag) = run_2d(data, 5);

        assert_eq!(labeling.num_labels(), 3);
        assert_eq!(dag.depth(1), 0);
        assert_eq!(dag.depth(2), 1);
        assert_eq!(dag.depth(3), 2);
        assert_eq!(dag.parents(2), &BTreeSet::from([1]));
        assert_eq!(dag.parents(3), &BTreeSet::from([2]));
        assert_eq!(dag.children(1), &BTreeSet::from([2]));
        assert_eq!(dag.children(2), &BTreeSet::from([3]));
        assert_eq!(dag.max_depth(), Some(2));
    }

    #[test]
    fn shared_notch_yields_two_parents_and_one_shared_node() {
        // The 1s and 2s jointly enclose the 3 block; both are exterior.
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 3, 3, 3, 1, //
            2, 3, 3, 3, 2, //
            2, 3, 3, 3, 2, //
            2, 2, 2, 2, 2, //
        ];
        let (labeling, dag) = run_2d(data, 5);

        // First-appearance order: 1s, then the 3 block, then the 2s.
        assert_eq!(labeling.num_labels(), 3);
        assert_eq!(*labeling.value_of(2), 3);

        assert_eq!(dag.depth(1), 0);
        assert_eq!(dag.depth(3), 0);
        assert_eq!(dag.depth(2), 1);
        assert_eq!(dag.parents(2), &BTreeSet::from([1, 3]));

        let tree = dag.materialize().expect("materialization succeeds");
        let shared = tree.node_of(2).expect("label 2 materialized");
        assert_eq!(tree.roots().len(), 2);
        for &root in tree.roots() {
            assert_eq!(tree.node(root).children, vec![shared]);
        }
    }

    #[test]
    fn explicit_tree_agrees_with_implicit_children() {
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 2, 2, 2, 1, //
            1, 2, 3, 2, 1, //
            1, 2, 2, 2, 1, //
            1, 1, 1, 1, 1, //
        ];
        let (_, dag) = run_2d(data, 5);
        let tree = dag.materialize().expect("materialization succeeds");

        let flat = tree.flatten();
        assert_eq!(flat.len() as u32, dag.num_labels());
        for (&label, kids) in &flat {
            assert_eq!(kids, dag.children(label));
        }
    }

    #[test]
    fn pipeline_is_deterministic() {
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 3, 3, 3, 1, //
            2, 3, 3, 3, 2, //
            2, 3, 3, 3, 2, //
            2, 2, 2, 2, 2, //
        ];
        let (labeling_a, dag_a) = run_2d(data.clone(), 5);
        let (labeling_b, dag_b) = run_2d(data, 5);

        assert_eq!(labeling_a, labeling_b);
        assert_eq!(dag_a, dag_b);
        assert_eq!(
            dag_a.materialize().expect("materialization succeeds"),
            dag_b.materialize().expect("materialization succeeds")
        );
    }

    #[test]
    fn empty_input_yields_empty_dag() {
        let array = NdArray::<i64>::from_vec(vec![0, 7], Vec::new()).expect("valid array");
        let registry = PatternRegistry::new(Pattern::axis_neighbors(2).expect("valid pattern"));
        let (labeling, dag) =
            contain(&array, &registry, &HashSet::new()).expect("pipeline succeeds");

        assert_eq!(labeling.num_labels(), 0);
        assert_eq!(dag.num_labels(), 0);
        assert!(dag.roots().is_empty());
        assert!(dag.materialize().expect("materialization succeeds").is_empty());
    }

    #[test]
    fn depth_zero_iff_exterior_adjacent() {
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 2, 2, 2, 1, //
            1, 2, 3, 2, 1, //
            1, 2, 2, 2, 1, //
            1, 1, 1, 1, 1, //
        ];
        let (_, dag) = run_2d(data, 5);

        for label in 1..=dag.num_labels() {
            let exterior = dag.graph().touches_exterior(label);
            assert_eq!(dag.depth(label) == 0, exterior);
            if dag.depth(label) > 0 {
                assert!(!dag.parents(label).is_empty());
            }
        }
    }
}
