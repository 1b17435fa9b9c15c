//! Nearest-neighbor triangle meshes for decorative backgrounds.
//!
//! Pipeline
//! - Sample a `PointSet` inside a `width × height` viewport (`sample`).
//! - Connect every point to its two nearest neighbors and keep the unique
//!   triangles (`mesh`).
//! - Optionally morph between two point sets (`morph`) and render outlines as
//!   SVG (`svg`).
//!
//! API Policy
//! - The crate is small and internal to the workspace. Breaking changes are
//!   fine when they make the mesh contract clearer.

pub mod error;
pub mod mesh;
pub mod morph;
pub mod sample;
pub mod svg;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::MeshError;
pub use mesh::{build_mesh, nearest_two, nearest_two_indices, TriangleMesh};
pub use types::{Point, PointSet, Triangle, TriangleKey};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mesh::{build_mesh, nearest_two, nearest_two_indices, TriangleMesh};
    pub use crate::morph::{interpolate, smoothstep, Morph, MorphCfg};
    pub use crate::sample::{generate_points, generate_points_replay, ReplayToken, ViewportCfg};
    pub use crate::svg::{render_svg, SvgStyle};
    pub use crate::types::{Point, PointSet, Triangle, TriangleKey};
    pub use crate::MeshError;
}
