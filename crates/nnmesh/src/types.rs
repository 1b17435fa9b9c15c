//! Value types: points, point sets and triangles.
//!
//! - `Point`: a 2D coordinate, compared by value (`0.0 == -0.0`).
//! - `PointSet`: ordered, immutable input of one mesh pass.
//! - `Triangle`: three points in construction order; equality ignores order.
//! - `TriangleKey`: canonical, hashable form of a triangle used for dedup.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::error::MeshError;

/// 2D point. Identity is "same coordinates", never "same slot".
pub type Point = Vector2<f64>;

/// Ordered sequence of points produced once per render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from raw `(x, y)` pairs, rejecting NaN and infinities.
    pub fn try_from_coords<I>(coords: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points = Vec::new();
        for (index, (x, y)) in coords.into_iter().enumerate() {
            if !(x.is_finite() && y.is_finite()) {
                return Err(MeshError::NonFiniteCoordinate { index });
            }
            points.push(Vector2::new(x, y));
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Shorthand for `build_mesh(self.as_slice())`.
    pub fn mesh(&self) -> crate::mesh::TriangleMesh {
        crate::mesh::build_mesh(&self.points)
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Mesh primitive. `vertices` keeps the order `[source, nearest, second]`.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn canonical_key(&self) -> TriangleKey {
        TriangleKey::of(&self.vertices)
    }

    /// SVG `points` attribute: `"x1,y1 x2,y2 x3,y3"`.
    pub fn svg_points(&self) -> String {
        let [a, b, c] = self.vertices;
        format!("{},{} {},{} {},{}", a.x, a.y, b.x, b.y, c.x, c.y)
    }

    /// Unsigned area. Zero for collinear or coincident vertices.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        let ab = b - a;
        let ac = c - a;
        0.5 * (ab.x * ac.y - ab.y * ac.x).abs()
    }

    /// True if `p` is coordinate-equal to one of the vertices.
    pub fn has_vertex(&self, p: &Point) -> bool {
        self.vertices.iter().any(|v| v == p)
    }

    /// Copy with every coordinate multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(a * k, b * k, c * k)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

/// Canonical triangle key: vertices sorted by numeric `(x, y)`.
///
/// Coordinates are stored as bit patterns after folding `-0.0` into `0.0`, so
/// the key agrees with coordinate equality and can live in a `HashSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriangleKey([[u64; 2]; 3]);

impl TriangleKey {
    pub fn of(vertices: &[Point; 3]) -> Self {
        let mut sorted = vertices.map(|p| [p.x + 0.0, p.y + 0.0]);
        sorted.sort_by(|a, b| cmp_xy(a, b));
        Self(sorted.map(|[x, y]| [x.to_bits(), y.to_bits()]))
    }

    /// Vertices in canonical order.
    pub fn points(&self) -> [Point; 3] {
        self.0
            .map(|[x, y]| Vector2::new(f64::from_bits(x), f64::from_bits(y)))
    }
}

#[inline]
fn cmp_xy(a: &[f64; 2], b: &[f64; 2]) -> Ordering {
    a[0].total_cmp(&b[0]).then_with(|| a[1].total_cmp(&b[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn key_ignores_vertex_order() {
        let a = vector![0.0, 0.0];
        let b = vector![10.0, 0.0];
        let c = vector![0.0, 10.0];
        let k = Triangle::new(a, b, c).canonical_key();
        for t in [
            Triangle::new(a, c, b),
            Triangle::new(b, a, c),
            Triangle::new(b, c, a),
            Triangle::new(c, a, b),
            Triangle::new(c, b, a),
        ] {
            assert_eq!(t.canonical_key(), k);
            assert_eq!(t, Triangle::new(a, b, c));
        }
        assert_eq!(k.points(), [a, c, b]);
    }

    #[test]
    fn key_orders_numerically_not_lexically() {
        // As text, "10,0" sorts before "2,0"; numerically 2 comes first.
        let t = Triangle::new(vector![10.0, 0.0], vector![2.0, 0.0], vector![5.0, 1.0]);
        let [first, second, third] = t.canonical_key().points();
        assert_eq!(first, vector![2.0, 0.0]);
        assert_eq!(second, vector![5.0, 1.0]);
        assert_eq!(third, vector![10.0, 0.0]);
    }

    #[test]
    fn key_folds_negative_zero() {
        let t1 = Triangle::new(vector![-0.0, 1.0], vector![1.0, 0.0], vector![2.0, 2.0]);
        let t2 = Triangle::new(vector![0.0, 1.0], vector![1.0, -0.0], vector![2.0, 2.0]);
        assert_eq!(t1.canonical_key(), t2.canonical_key());
    }

    #[test]
    fn svg_points_and_area() {
        let t = Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.5]);
        assert_eq!(t.svg_points(), "0,0 4,0 0,3.5");
        assert!((t.area() - 7.0).abs() < 1e-12);
        let flat = Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
        assert_eq!(flat.area(), 0.0);
    }

    #[test]
    fn point_set_from_vec_round_trips() {
        let raw = vec![vector![1.0, 2.0], vector![3.0, 4.0], vector![5.0, 0.5]];
        let set: PointSet = raw.clone().into();
        assert_eq!(set, PointSet::new(raw.clone()));
        assert_eq!((&set).into_iter().count(), 3);
        assert_eq!(set.mesh().len(), 1);
        assert_eq!(set.into_inner(), raw);
    }

    #[test]
    fn try_from_coords_rejects_non_finite() {
        let ok = PointSet::try_from_coords([(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.as_slice()[1], vector![3.0, 4.0]);
        let err = PointSet::try_from_coords([(1.0, 2.0), (f64::NAN, 0.0)]).unwrap_err();
        assert_eq!(err, MeshError::NonFiniteCoordinate { index: 1 });
        assert!(PointSet::try_from_coords([(f64::INFINITY, 0.0)]).is_err());
    }
}
