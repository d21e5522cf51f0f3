use std::collections::BTreeSet;
use std::hash::Hash;

use gt_label::{Label, Labeling, PatternRegistry};

use crate::slot;

/// One labeled region in the group adjacency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    pub label: Label,
    pub touches_exterior: bool,
    pub neighbors: BTreeSet<Label>,
}

/// Undirected adjacency graph over labels, with exterior flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupGraph {
    pub nodes: Vec<GroupNode>,
}

impl GroupGraph {
    /// Derives the group graph from a labeling.
    ///
    /// Exterior policy: a label touches the exterior if any member cell
    /// lies on the array boundary, any offset of its resolved pattern
    /// window leaves the array, or any such offset lands on a background
    /// cell. Background is a transparent conduit to the exterior; it is
    /// never a node here.
    ///
    /// Two distinct labels are adjacent iff some cell of one lies in the
    /// pattern window of a cell of the other. Scanning every foreground
    /// cell against its own symmetric-closed window covers both directions
    /// of the either-pattern rule.
    pub fn build<T>(labeling: &Labeling<T>, registry: &PatternRegistry<T>) -> Self
    where
        T: Eq + Hash,
    {
        let labels = labeling.labels();
        let k = labeling.num_labels();

        let mut nodes: Vec<GroupNode> = (1..=k)
            .map(|label| GroupNode {
                label,
                touches_exterior: false,
                neighbors: BTreeSet::new(),
            })
            .collect();

        let mut index = vec![0usize; labels.rank()];
        for (i, &label) in labels.data().iter().enumerate() {
            if label == 0 {
                continue;
            }

            labels.index_of(i, &mut index);
            if labels.on_boundary(&index) {
                nodes[slot(label)].touches_exterior = true;
            }

            let pattern = registry.resolve(labeling.value_of(label));
            for delta in pattern.sym_offsets() {
                match labels.offset_of(&index, delta) {
                    None => nodes[slot(label)].touches_exterior = true,
                    Some(j) => {
                        let other = labels.data()[j];
                        if other == 0 {
                            nodes[slot(label)].touches_exterior = true;
                        } else if other != label {
                            nodes[slot(label)].neighbors.insert(other);
                            nodes[slot(other)].neighbors.insert(label);
                        }
                    }
                }
            }
        }

        Self { nodes }
    }

    pub fn num_labels(&self) -> u32 {
        self.nodes.len() as u32
    }

    pub fn node(&self, label: Label) -> &GroupNode {
        &self.nodes[slot(label)]
    }

    pub fn touches_exterior(&self, label: Label) -> bool {
        self.nodes[slot(label)].touches_exterior
    }

    pub fn neighbors(&self, label: Label) -> &BTreeSet<Label> {
        &self.nodes[slot(label)].neighbors
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gt_core::NdArray;
    use gt_label::{Pattern, PatternRegistry, label_regions};

    use super::GroupGraph;

    fn build_2d(data: Vec<i64>, side: usize) -> GroupGraph {
        let array = NdArray::from_vec(vec![side, side], data).expect("valid array");
        let registry = PatternRegistry::new(Pattern::axis_neighbors(2).expect("valid pattern"));
        let background: HashSet<i64> = [0].into_iter().collect();
        let labeling =
            label_regions(&array, &registry, &background).expect("labeling succeeds");
        GroupGraph::build(&labeling, &registry)
    }

    #[test]
    fn boundary_cells_touch_exterior() {
        let graph = build_2d(vec![1i64; 9], 3);

        assert_eq!(graph.num_labels(), 1);
        assert!(graph.touches_exterior(1));
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn background_is_a_conduit_to_the_exterior() {
        // An enclosed region separated from its enclosure by background is
        // exterior-adjacent and not a graph neighbor of the enclosure.
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 0, 0, 0, 1, //
            1, 0, 2, 0, 1, //
            1, 0, 0, 0, 1, //
            1, 1, 1, 1, 1, //
        ];
        let graph = build_2d(data, 5);

        assert_eq!(graph.num_labels(), 2);
        assert!(graph.touches_exterior(1));
        assert!(graph.touches_exterior(2));
        assert!(graph.neighbors(1).is_empty());
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn nested_rings_are_chain_adjacent() {
        let data = vec![
            1, 1, 1, 1, 1, //
            1, 2, 2, 2, 1, //
            1, 2, 3, 2, 1, //
            1, 2, 2, 2, 1, //
            1, 1, 1, 1, 1, //
        ];
        let graph = build_2d(data, 5);

        assert_eq!(graph.num_labels(), 3);
        assert!(graph.touches_exterior(1));
        assert!(!graph.touches_exterior(2));
        assert!(!graph.touches_exterior(3));

        assert_eq!(graph.neighbors(1).iter().copied().collect::<Vec<_>>(), [2]);
        assert_eq!(
            graph.neighbors(2).iter().copied().collect::<Vec<_>>(),
            [1, 3]
        );
        assert_eq!(graph.neighbors(3).iter().copied().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn wide_pattern_reaches_across_a_gap() {
        // Value 7 resolves to a 5-wide window, so its label sees the 8
        // two cells away even though 8's own pattern cannot see back.
        let array = NdArray::from_vec(vec![3], vec![7i64, 0, 8]).expect("valid array");
        let mut mask = vec![true; 5];
        mask[2] = false;
        let wide = Pattern::from_mask(&[5], &mask).expect("valid pattern");
        let registry = PatternRegistry::new(Pattern::axis_neighbors(1).expect("valid pattern"))
            .with_value(7, wide);
        let background: HashSet<i64> = [0].into_iter().collect();
        let labeling =
            label_regions(&array, &registry, &background).expect("labeling succeeds");
        let graph = GroupGraph::build(&labeling, &registry);

        assert_eq!(graph.num_labels(), 2);
        assert_eq!(graph.neighbors(1).iter().copied().collect::<Vec<_>>(), [2]);
        assert_eq!(graph.neighbors(2).iter().copied().collect::<Vec<_>>(), [1]);
    }
}
