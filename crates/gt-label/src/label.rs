use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use gt_core::NdArray;

use crate::pattern::PatternRegistry;
use crate::union_find::UnionFind;
use crate::Error;

/// Dense positive region identifier; `0` marks background.
pub type Label = u32;

/// Result of labeling: a label per cell plus per-label metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeling<T> {
    labels: NdArray<Label>,
    values: Vec<T>,
}

impl<T> Labeling<T> {
    /// The label array, same shape as the input.
    pub fn labels(&self) -> &NdArray<Label> {
        &self.labels
    }

    pub fn num_labels(&self) -> u32 {
        self.values.len() as u32
    }

    /// The input-array value the labeled region refers to.
    ///
    /// Panics if `label` is `0` or past the label count.
    pub fn value_of(&self, label: Label) -> &T {
        &self.values[label as usize - 1]
    }
}

/// Labels every maximal connected region of `array`.
///
/// Cells with values in `background` are left unlabeled. Two foreground
/// cells at offset `d` from one another connect iff their values are equal
/// and `d` lies in either cell's resolved pattern (see the crate docs for
/// the symmetric-closure rule). Labels are dense `1..=K`, assigned in
/// order of first appearance during a row-major scan.
///
/// Fails if any registry pattern has the wrong rank for `array`; mask
/// shape errors are caught earlier, at [`Pattern`](crate::Pattern)
/// construction.
pub fn label_regions<T>(
    array: &NdArray<T>,
    registry: &PatternRegistry<T>,
    background: &HashSet<T>,
) -> Result<Labeling<T>, Error>
where
    T: Copy + Eq + Hash,
{
    for pattern in registry.patterns() {
        if pattern.rank() != array.rank() {
            return Err(Error::RankMismatch {
                pattern_rank: pattern.rank(),
                array_rank: array.rank(),
            });
        }
    }

    let mut values = Vec::new();
    if array.is_empty() {
        return Ok(Labeling {
            labels: NdArray::new_fill(array.shape().to_vec(), 0 as Label),
            values,
        });
    }

    let cells = array.data();
    let mut forest = UnionFind::new(cells.len());
    let mut index = vec![0usize; array.rank()];

    for (i, &value) in cells.iter().enumerate() {
        if background.contains(&value) {
            continue;
        }

        array.index_of(i, &mut index);
        for delta in registry.resolve(&value).sym_offsets() {
            let Some(j) = array.offset_of(&index, delta) else {
                continue;
            };
            // Only merge against already-visited cells; the forward half
            // of each link is handled when the scan reaches the neighbor.
            if j < i && cells[j] == value {
                forest.union(i, j);
            }
        }
    }

    let mut dense: HashMap<usize, Label> = HashMap::new();
    let mut assigned = vec![0 as Label; cells.len()];

    for (i, &value) in cells.iter().enumerate() {
        if background.contains(&value) {
            continue;
        }

        let root = forest.find(i);
        let label = *dense.entry(root).or_insert_with(|| {
            values.push(value);
            values.len() as Label
        });
        assigned[i] = label;
    }

    let labels = NdArray::from_vec(array.shape().to_vec(), assigned)
        .expect("label buffer matches input shape");

    Ok(Labeling { labels, values })
}
