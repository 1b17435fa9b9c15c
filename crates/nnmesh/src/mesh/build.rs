use std::collections::HashSet;

use super::nearest::nearest_two_indices;
use crate::types::{Point, Triangle, TriangleKey};

/// Unique triangles in first-occurrence order.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// True if a permutation-equal triangle is part of the mesh.
    pub fn contains(&self, t: &Triangle) -> bool {
        let key = t.canonical_key();
        self.triangles.iter().any(|m| m.canonical_key() == key)
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl<'a> IntoIterator for &'a TriangleMesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;
    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl IntoIterator for TriangleMesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;
    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

/// Join every point with its two nearest neighbors and keep unique triangles.
///
/// Points without two eligible neighbors contribute nothing, so inputs with
/// fewer than three distinct coordinates yield an empty mesh.
pub fn build_mesh(points: &[Point]) -> TriangleMesh {
    let mut seen: HashSet<TriangleKey> = HashSet::with_capacity(points.len());
    let mut triangles = Vec::with_capacity(points.len());

    for p in points {
        let Some((i, j)) = nearest_two_indices(p, points) else {
            continue;
        };
        let tri = Triangle::new(*p, points[i], points[j]);
        if seen.insert(tri.canonical_key()) {
            triangles.push(tri);
        }
    }

    TriangleMesh { triangles }
}
