use crate::Error;

/// Dense row-major n-dimensional array.
///
/// A rank-0 shape (`[]`) denotes a single-cell scalar array; a shape with
/// any zero extent denotes an empty array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> NdArray<T> {
    pub fn from_vec(shape: Vec<usize>, data: Vec<T>) -> Result<Self, Error> {
        let expected = checked_len(&shape).ok_or(Error::SizeOverflow)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, linear: usize) -> Option<&T> {
        self.data.get(linear)
    }

    /// Linear index of a multi-index, or `None` if out of bounds or of the
    /// wrong rank.
    pub fn linear_of(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }

        let mut linear = 0usize;
        for (&i, &extent) in index.iter().zip(&self.shape) {
            if i >= extent {
                return None;
            }
            linear = linear * extent + i;
        }
        Some(linear)
    }

    /// Writes the multi-index of `linear` into `out`.
    ///
    /// `out.len()` must equal the rank and `linear` must be in bounds.
    pub fn index_of(&self, linear: usize, out: &mut [usize]) {
        assert!(linear < self.data.len(), "linear index out of bounds");
        assert_eq!(out.len(), self.shape.len(), "index buffer rank mismatch");

        let mut rem = linear;
        for axis in (0..self.shape.len()).rev() {
            out[axis] = rem % self.shape[axis];
            rem /= self.shape[axis];
        }
    }

    /// Linear index of `index + delta`, or `None` if the step leaves the
    /// array.
    pub fn offset_of(&self, index: &[usize], delta: &[isize]) -> Option<usize> {
        debug_assert_eq!(index.len(), delta.len());

        let mut linear = 0usize;
        for axis in 0..self.shape.len() {
            let moved = index[axis] as isize + delta[axis];
            if moved < 0 || moved >= self.shape[axis] as isize {
                return None;
            }
            linear = linear * self.shape[axis] + moved as usize;
        }
        Some(linear)
    }

    /// Whether the cell lies on the array boundary along any axis.
    pub fn on_boundary(&self, index: &[usize]) -> bool {
        index
            .iter()
            .zip(&self.shape)
            .any(|(&i, &extent)| i == 0 || i + 1 == extent)
    }
}

impl<T: Clone> NdArray<T> {
    pub fn new_fill(shape: Vec<usize>, value: T) -> Self {
        let len = checked_len(&shape).expect("array size overflow");
        Self {
            shape,
            data: vec![value; len],
        }
    }
}

fn checked_len(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &e| acc.checked_mul(e))
}
