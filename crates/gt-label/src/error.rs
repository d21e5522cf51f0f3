use core::fmt;

/// Pattern configuration errors, reported before any labeling occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EvenExtent { axis: usize, extent: usize },
    EmptyPattern,
    MaskSize { expected: usize, actual: usize },
    RankMismatch { pattern_rank: usize, array_rank: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenExtent { axis, extent } => {
                write!(f, "pattern extent along axis {axis} is even: {extent}")
            }
            Self::EmptyPattern => write!(f, "pattern selects no neighbor offsets"),
            Self::MaskSize { expected, actual } => {
                write!(f, "pattern mask size mismatch: expected {expected}, got {actual}")
            }
            Self::RankMismatch {
                pattern_rank,
                array_rank,
            } => {
                write!(
                    f,
                    "pattern rank {pattern_rank} does not match array rank {array_rank}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
