use std::collections::BTreeSet;

use gt_label::Label;

use crate::graph::GroupGraph;
use crate::{Error, slot};

const UNSET: u32 = u32::MAX;

/// Minimal separation degree and full parent-candidate set per label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layering {
    depth: Vec<u32>,
    parents: Vec<BTreeSet<Label>>,
}

impl Layering {
    /// Multi-source BFS from all exterior-adjacent labels.
    ///
    /// Processing is strictly layer-synchronous: every depth-`d` label is
    /// finalized before any depth-`d+1` label is discovered, so a parent
    /// set can be read off a finalized label's neighbors as exactly those
    /// with depth one less. All qualifying neighbors are collected; the
    /// result is a DAG, not a spanning tree.
    pub fn compute(graph: &GroupGraph) -> Result<Self, Error> {
        let k = graph.nodes.len();
        let mut depth = vec![UNSET; k];
        let mut parents = vec![BTreeSet::new(); k];

        let frontier: Vec<Label> = graph
            .nodes
            .iter()
            .filter(|n| n.touches_exterior)
            .map(|n| n.label)
            .collect();
        for &label in &frontier {
            depth[slot(label)] = 0;
        }

        let mut frontier = frontier;
        let mut d = 0u32;
        while !frontier.is_empty() {
            let mut next: BTreeSet<Label> = BTreeSet::new();
            for &label in &frontier {
                for &nb in &graph.nodes[slot(label)].neighbors {
                    if depth[slot(nb)] == UNSET {
                        next.insert(nb);
                    }
                }
            }

            for &label in &next {
                depth[slot(label)] = d + 1;
            }
            for &label in &next {
                parents[slot(label)] = graph.nodes[slot(label)]
                    .neighbors
                    .iter()
                    .copied()
                    .filter(|&nb| depth[slot(nb)] == d)
                    .collect();
            }

            frontier = next.into_iter().collect();
            d += 1;
        }

        for node in &graph.nodes {
            if depth[slot(node.label)] == UNSET {
                return Err(Error::UnreachedLabel { label: node.label });
            }
        }

        Ok(Self { depth, parents })
    }

    pub fn num_labels(&self) -> u32 {
        self.depth.len() as u32
    }

    pub fn depth(&self, label: Label) -> u32 {
        self.depth[slot(label)]
    }

    pub fn parents(&self, label: Label) -> &BTreeSet<Label> {
        &self.parents[slot(label)]
    }

    pub fn max_depth(&self) -> Option<u32> {
        self.depth.iter().copied().max()
    }
}
