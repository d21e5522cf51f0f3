use std::collections::BTreeSet;

use gt_label::Label;

use crate::graph::GroupGraph;
use crate::layer::Layering;
use crate::slot;

/// Depth-layered containment DAG over labels.
///
/// Edges run from parents to children and increase depth by exactly 1; a
/// label may have several parents and several children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainmentDag {
    graph: GroupGraph,
    layering: Layering,
    pub(crate) children: Vec<BTreeSet<Label>>,
    roots: Vec<Label>,
}

impl ContainmentDag {
    pub fn new(graph: GroupGraph, layering: Layering) -> Self {
        debug_assert_eq!(graph.num_labels(), layering.num_labels());

        let mut children = vec![BTreeSet::new(); graph.nodes.len()];
        for node in &graph.nodes {
            for &parent in layering.parents(node.label) {
                children[slot(parent)].insert(node.label);
            }
        }

        let roots = graph
            .nodes
            .iter()
            .map(|n| n.label)
            .filter(|&l| layering.depth(l) == 0)
            .collect();

        Self {
            graph,
            layering,
            children,
            roots,
        }
    }

    pub fn num_labels(&self) -> u32 {
        self.graph.num_labels()
    }

    pub fn depth(&self, label: Label) -> u32 {
        self.layering.depth(label)
    }

    pub fn parents(&self, label: Label) -> &BTreeSet<Label> {
        self.layering.parents(label)
    }

    pub fn children(&self, label: Label) -> &BTreeSet<Label> {
        &self.children[slot(label)]
    }

    /// Depth-0 labels in ascending order.
    pub fn roots(&self) -> &[Label] {
        &self.roots
    }

    pub fn graph(&self) -> &GroupGraph {
        &self.graph
    }

    pub fn max_depth(&self) -> Option<u32> {
        self.layering.max_depth()
    }

    /// All parent→child edges in ascending (parent, child) order.
    pub fn edges(&self) -> impl Iterator<Item = (Label, Label)> + '_ {
        self.children
            .iter()
            .enumerate()
            .flat_map(|(i, kids)| kids.iter().map(move |&c| (i as Label + 1, c)))
    }
}
