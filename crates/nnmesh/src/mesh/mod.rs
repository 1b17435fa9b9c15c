//! Nearest-neighbor triangle mesh.
//!
//! Purpose
//! - Turn a point set into outline triangles: every point is joined with its
//!   two nearest neighbors, and permutation-equal triangles are kept once.
//!
//! Contract
//! - Exclusion is by coordinates: a target never pairs with any point equal
//!   to it, so coincident points hide each other.
//! - Ranking uses squared distance with strict `<`; ties keep the earliest
//!   candidate in scan order.
//! - Output order is first-occurrence order of the generating point. No
//!   filtering by area or shape; degenerate triangles are kept.
//!
//! Everything here is pure: O(n²) per call, no shared state.

mod build;
mod nearest;

pub use build::{build_mesh, TriangleMesh};
pub use nearest::{nearest_two, nearest_two_indices};
