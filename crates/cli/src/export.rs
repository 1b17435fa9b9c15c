//! JSON export of a mesh, one record per triangle.

use nnmesh::TriangleMesh;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TriangleRecord {
    /// SVG `points` attribute, ready to paste into a `<polygon>`.
    pub points: String,
    pub vertices: [[f64; 2]; 3],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeshExport {
    pub width: f64,
    pub height: f64,
    pub point_count: usize,
    pub triangle_count: usize,
    pub triangles: Vec<TriangleRecord>,
}

impl MeshExport {
    pub fn new(mesh: &TriangleMesh, point_count: usize, width: f64, height: f64) -> Self {
        let triangles = mesh
            .iter()
            .map(|t| TriangleRecord {
                points: t.svg_points(),
                vertices: t.vertices.map(|v| [v.x, v.y]),
            })
            .collect();
        Self {
            width,
            height,
            point_count,
            triangle_count: mesh.len(),
            triangles,
        }
    }
}
