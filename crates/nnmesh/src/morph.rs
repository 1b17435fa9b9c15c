//! Eased morphing between two point sets.
//!
//! Each frame is a pointwise blend `from + (to − from) · s(t)` with the
//! smoothstep easing `s`. Frames are plain point sets; callers re-mesh them.

use crate::error::MeshError;
use crate::types::{Point, PointSet};

/// Smoothstep easing `t²(3 − 2t)` on `t` clamped to `[0, 1]`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphCfg {
    pub duration_ms: u64,
}

impl Default for MorphCfg {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}

impl MorphCfg {
    /// Linear progress in `[0, 1]`; a zero duration is already finished.
    pub fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }
}

/// Blend two equally sized point sets at linear `progress`.
pub fn interpolate(from: &[Point], to: &[Point], progress: f64) -> Result<PointSet, MeshError> {
    if from.len() != to.len() {
        return Err(MeshError::LengthMismatch {
            from: from.len(),
            to: to.len(),
        });
    }
    Ok(blend_points(from, to, progress))
}

fn blend_points(from: &[Point], to: &[Point], t: f64) -> PointSet {
    let s = smoothstep(t);
    let points = from
        .iter()
        .zip(to)
        .map(|(a, b)| a + (b - a) * s)
        .collect();
    PointSet::new(points)
}

/// Frame source for one morph from `from` to `to`.
#[derive(Clone, Debug)]
pub struct Morph {
    from: PointSet,
    to: PointSet,
    cfg: MorphCfg,
}

impl Morph {
    pub fn new(from: PointSet, to: PointSet, cfg: MorphCfg) -> Result<Self, MeshError> {
        if from.len() != to.len() {
            return Err(MeshError::LengthMismatch {
                from: from.len(),
                to: to.len(),
            });
        }
        Ok(Self { from, to, cfg })
    }

    #[inline]
    pub fn cfg(&self) -> MorphCfg {
        self.cfg
    }

    pub fn frame_at(&self, elapsed_ms: u64) -> PointSet {
        self.blend(self.cfg.progress(elapsed_ms))
    }

    /// `n` evenly spaced frames from progress 0 to 1 inclusive.
    pub fn frames(&self, n: usize) -> impl Iterator<Item = PointSet> + '_ {
        (0..n).map(move |i| {
            let t = if n <= 1 {
                1.0
            } else {
                i as f64 / (n - 1) as f64
            };
            self.blend(t)
        })
    }

    fn blend(&self, t: f64) -> PointSet {
        blend_points(self.from.as_slice(), self.to.as_slice(), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(7.0), 1.0);
        assert!(smoothstep(0.25) < 0.25);
        assert!(smoothstep(0.75) > 0.75);
    }

    #[test]
    fn progress_clamps() {
        let cfg = MorphCfg::default();
        assert_eq!(cfg.progress(0), 0.0);
        assert_eq!(cfg.progress(2500), 0.5);
        assert_eq!(cfg.progress(9000), 1.0);
        assert_eq!(MorphCfg { duration_ms: 0 }.progress(0), 1.0);
    }

    #[test]
    fn interpolate_blends_pointwise() {
        let from = [vector![0.0, 0.0], vector![10.0, 10.0]];
        let to = [vector![10.0, 20.0], vector![0.0, 10.0]];
        let mid = interpolate(&from, &to, 0.5).unwrap();
        assert_eq!(mid.as_slice(), &[vector![5.0, 10.0], vector![5.0, 10.0]]);
        assert_eq!(interpolate(&from, &to, 0.0).unwrap().as_slice(), &from);
        assert_eq!(interpolate(&from, &to, 1.0).unwrap().as_slice(), &to);
    }

    #[test]
    fn interpolate_length_mismatch() {
        let err = interpolate(&[vector![0.0, 0.0]], &[], 0.3).unwrap_err();
        assert_eq!(err, MeshError::LengthMismatch { from: 1, to: 0 });
    }

    #[test]
    fn frames_span_both_ends() {
        let from = PointSet::new(vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]]);
        let to = PointSet::new(vec![vector![8.0, 8.0], vector![12.0, 8.0], vector![8.0, 12.0]]);
        let morph = Morph::new(from.clone(), to.clone(), MorphCfg::default()).unwrap();
        assert_eq!(morph.cfg(), MorphCfg::default());
        let frames: Vec<_> = morph.frames(5).collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], from);
        assert_eq!(frames[4], to);
        // A pure translation keeps the mesh shape in every frame.
        for f in &frames {
            assert_eq!(f.mesh().len(), 1);
        }
        assert_eq!(morph.frame_at(5000), to);
        assert_eq!(morph.frame_at(0), from);
    }

    #[test]
    fn morph_rejects_mismatched_sets() {
        let a = PointSet::new(vec![vector![0.0, 0.0]]);
        assert!(Morph::new(a, PointSet::default(), MorphCfg::default()).is_err());
    }
}
