use std::collections::HashMap;
use std::hash::Hash;

use crate::Error;

/// Boolean neighbor mask with odd extent per axis, centered on the origin.
///
/// The origin cell itself never counts as a neighbor; a mask that selects
/// nothing but the origin is rejected as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    extents: Vec<usize>,
    offsets: Vec<Vec<isize>>,
    sym_offsets: Vec<Vec<isize>>,
}

impl Pattern {
    /// Builds a pattern from a row-major boolean mask over `extents`.
    pub fn from_mask(extents: &[usize], mask: &[bool]) -> Result<Self, Error> {
        for (axis, &extent) in extents.iter().enumerate() {
            if extent % 2 == 0 {
                return Err(Error::EvenExtent { axis, extent });
            }
        }

        let expected: usize = extents.iter().product();
        if mask.len() != expected {
            return Err(Error::MaskSize {
                expected,
                actual: mask.len(),
            });
        }

        let mut offsets = Vec::new();
        let mut index = vec![0usize; extents.len()];
        for (linear, &set) in mask.iter().enumerate() {
            unravel(linear, extents, &mut index);
            let delta: Vec<isize> = index
                .iter()
                .zip(extents)
                .map(|(&i, &extent)| i as isize - (extent / 2) as isize)
                .collect();

            if set && delta.iter().any(|&d| d != 0) {
                offsets.push(delta);
            }
        }

        if offsets.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let mut sym_offsets = offsets.clone();
        for delta in &offsets {
            sym_offsets.push(delta.iter().map(|&d| -d).collect());
        }
        sym_offsets.sort();
        sym_offsets.dedup();

        Ok(Self {
            extents: extents.to_vec(),
            offsets,
            sym_offsets,
        })
    }

    /// Axis-aligned immediate neighbors (2·rank offsets); the n-d analog
    /// of 4-connectivity.
    pub fn axis_neighbors(rank: usize) -> Result<Self, Error> {
        let extents = vec![3usize; rank];
        let len: usize = extents.iter().product();
        let mut mask = vec![false; len];
        let mut index = vec![0usize; rank];

        for (linear, m) in mask.iter_mut().enumerate() {
            unravel(linear, &extents, &mut index);
            let dist: usize = index.iter().map(|&i| i.abs_diff(1)).sum();
            *m = dist == 1;
        }

        Self::from_mask(&extents, &mask)
    }

    /// Full 3^rank box around the origin; the n-d analog of
    /// 8-connectivity.
    pub fn box_neighbors(rank: usize) -> Result<Self, Error> {
        let extents = vec![3usize; rank];
        let len: usize = extents.iter().product();
        Self::from_mask(&extents, &vec![true; len])
    }

    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Offsets selected by the mask, in row-major mask order.
    pub fn offsets(&self) -> &[Vec<isize>] {
        &self.offsets
    }

    /// Symmetric closure of [`offsets`](Self::offsets): each selected
    /// offset together with its negation, sorted and deduplicated.
    pub fn sym_offsets(&self) -> &[Vec<isize>] {
        &self.sym_offsets
    }
}

fn unravel(linear: usize, extents: &[usize], out: &mut [usize]) {
    let mut rem = linear;
    for axis in (0..extents.len()).rev() {
        out[axis] = rem % extents[axis];
        rem /= extents[axis];
    }
}

/// Per-value pattern lookup: one default mask plus per-value overrides.
#[derive(Debug, Clone)]
pub struct PatternRegistry<T> {
    default: Pattern,
    by_value: HashMap<T, Pattern>,
}

impl<T: Eq + Hash> PatternRegistry<T> {
    pub fn new(default: Pattern) -> Self {
        Self {
            default,
            by_value: HashMap::new(),
        }
    }

    pub fn with_value(mut self, value: T, pattern: Pattern) -> Self {
        self.by_value.insert(value, pattern);
        self
    }

    pub fn resolve(&self, value: &T) -> &Pattern {
        self.by_value.get(value).unwrap_or(&self.default)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        std::iter::once(&self.default).chain(self.by_value.values())
    }
}
