//! Error type shared by sampling, validation and morphing.
//!
//! The mesh core itself is infallible: a point without two eligible
//! neighbors is reported through `Option`, not through `MeshError`.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MeshError {
    InvalidViewport { reason: String },
    NonFiniteCoordinate { index: usize },
    LengthMismatch { from: usize, to: usize },
}

impl MeshError {
    pub(crate) fn viewport(reason: impl Into<String>) -> Self {
        Self::InvalidViewport {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { reason } => write!(f, "invalid viewport: {reason}"),
            Self::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::LengthMismatch { from, to } => {
                write!(f, "point sets differ in length ({from} vs {to})")
            }
        }
    }
}

impl std::error::Error for MeshError {}
