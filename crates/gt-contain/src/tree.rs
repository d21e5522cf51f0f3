use std::collections::{BTreeMap, BTreeSet, HashMap};

use gt_label::Label;

use crate::dag::ContainmentDag;
use crate::Error;

pub type TreeNodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: Label,
    pub children: Vec<TreeNodeId>,
}

/// Nested rendering of a containment DAG.
///
/// Nodes live in an arena addressed by [`TreeNodeId`]; a multi-parent
/// label occupies exactly one slot, referenced from every parent's child
/// list. Identity of shared sub-structure is identity of the arena index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplicitTree {
    nodes: Vec<TreeNode>,
    roots: Vec<TreeNodeId>,
    index: HashMap<Label, TreeNodeId>,
}

impl ExplicitTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: TreeNodeId) -> &TreeNode {
        &self.nodes[id]
    }

    /// Arena ids of the depth-0 labels, in ascending label order.
    pub fn roots(&self) -> &[TreeNodeId] {
        &self.roots
    }

    pub fn node_of(&self, label: Label) -> Option<TreeNodeId> {
        self.index.get(&label).copied()
    }

    /// Collapses the nesting back into a flat label→children mapping.
    pub fn flatten(&self) -> BTreeMap<Label, BTreeSet<Label>> {
        self.nodes
            .iter()
            .map(|node| {
                let kids = node
                    .children
                    .iter()
                    .map(|&id| self.nodes[id].label)
                    .collect();
                (node.label, kids)
            })
            .collect()
    }
}

impl ContainmentDag {
    /// Materializes the nested form of the DAG.
    ///
    /// Expansion starts from each depth-0 label in ascending label order
    /// and is memoized per label: a label re-encountered as the child of a
    /// second parent reuses the already-built arena node, so every label
    /// is materialized exactly once and shared sub-structure stays shared.
    ///
    /// Every edge is checked for the depth invariant first; a violation
    /// means a builder defect upstream.
    pub fn materialize(&self) -> Result<ExplicitTree, Error> {
        for (parent, child) in self.edges() {
            let parent_depth = self.depth(parent);
            let child_depth = self.depth(child);
            if child_depth != parent_depth + 1 {
                return Err(Error::DepthStep {
                    parent,
                    child,
                    parent_depth,
                    child_depth,
                });
            }
        }

        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let roots = self
            .roots()
            .iter()
            .map(|&root| expand(self, root, &mut nodes, &mut index))
            .collect();

        Ok(ExplicitTree {
            nodes,
            roots,
            index,
        })
    }
}

fn expand(
    dag: &ContainmentDag,
    label: Label,
    nodes: &mut Vec<TreeNode>,
    index: &mut HashMap<Label, TreeNodeId>,
) -> TreeNodeId {
    if let Some(&id) = index.get(&label) {
        return id;
    }

    let id = nodes.len();
    nodes.push(TreeNode {
        label,
        children: Vec::new(),
    });
    index.insert(label, id);

    for &child in dag.children(label) {
        let child_id = expand(dag, child, nodes, index);
        nodes[id].children.push(child_id);
    }

    id
}
