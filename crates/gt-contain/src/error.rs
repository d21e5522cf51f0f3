use core::fmt;

use gt_label::Label;

/// Layering and materialization invariant violations.
///
/// These indicate a builder defect, not a legitimate input state; the
/// pipeline is pure, so a retry would fail identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnreachedLabel {
        label: Label,
    },
    DepthStep {
        parent: Label,
        child: Label,
        parent_depth: u32,
        child_depth: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachedLabel { label } => {
                write!(f, "label {label} not reachable from the exterior frontier")
            }
            Self::DepthStep {
                parent,
                child,
                parent_depth,
                child_depth,
            } => {
                write!(
                    f,
                    "edge {parent} -> {child} breaks the depth step: {parent_depth} -> {child_depth}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Any failure of the one-call pipeline in [`contain`](crate::contain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainError {
    Configuration(gt_label::Error),
    Invariant(Error),
}

impl fmt::Display for ContainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration: {e}"),
            Self::Invariant(e) => write!(f, "invariant: {e}"),
        }
    }
}

impl std::error::Error for ContainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<gt_label::Error> for ContainError {
    fn from(e: gt_label::Error) -> Self {
        Self::Configuration(e)
    }
}

impl From<Error> for ContainError {
    fn from(e: Error) -> Self {
        Self::Invariant(e)
    }
}
