//! Random point sets inside a viewport.
//!
//! Model
//! - `count` points, `x ~ U[0, width)`, `y ~ U[0, height)`, independent.
//! - The RNG is the caller's choice; `ReplayToken` gives a reproducible,
//!   indexable stream for seeded callers (CLI, benches, tests).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MeshError;
use crate::types::PointSet;

/// Viewport and point budget of one background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportCfg {
    fn default() -> Self {
        Self {
            count: 400,
            width: 1000.0,
            height: 400.0,
        }
    }
}

impl ViewportCfg {
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(MeshError::viewport("width and height must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MeshError::viewport("width and height must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` uniform points in `[0, width) × [0, height)`.
pub fn generate_points<R: Rng>(
    cfg: ViewportCfg,
    rng: &mut R,
) -> Result<PointSet, MeshError> {
    cfg.validate()?;
    let points = (0..cfg.count)
        .map(|_| {
            let x = rng.gen::<f64>() * cfg.width;
            let y = rng.gen::<f64>() * cfg.height;
            Vector2::new(x, y)
        })
        .collect();
    Ok(PointSet::new(points))
}

/// Seeded variant of `generate_points`; the same token gives the same set.
pub fn generate_points_replay(cfg: ViewportCfg, tok: ReplayToken) -> Result<PointSet, MeshError> {
    let mut rng = tok.to_std_rng();
    generate_points(cfg, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_viewport() {
        let cfg = ViewportCfg::default();
        let pts = generate_points_replay(cfg, ReplayToken { seed: 3, index: 0 }).unwrap();
        assert_eq!(pts.len(), 400);
        for p in &pts {
            assert!((0.0..cfg.width).contains(&p.x));
            assert!((0.0..cfg.height).contains(&p.y));
        }
    }

    #[test]
    fn reproducible_draw() {
        let cfg = ViewportCfg {
            count: 50,
            width: 20.0,
            height: 10.0,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = generate_points_replay(cfg, tok).unwrap();
        let b = generate_points_replay(cfg, tok).unwrap();
        assert_eq!(a, b);
        let c = generate_points_replay(cfg, tok.next()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn caller_rng_is_used() {
        let cfg = ViewportCfg {
            count: 10,
            ..ViewportCfg::default()
        };
        let mut r1 = StdRng::seed_from_u64(9);
        let mut r2 = StdRng::seed_from_u64(9);
        assert_eq!(
            generate_points(cfg, &mut r1).unwrap(),
            generate_points(cfg, &mut r2).unwrap()
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let cfg = ViewportCfg {
            count: 0,
            ..ViewportCfg::default()
        };
        let pts = generate_points_replay(cfg, ReplayToken { seed: 1, index: 1 }).unwrap();
        assert!(pts.is_empty());
        assert!(pts.mesh().is_empty());
    }

    #[test]
    fn invalid_viewport_rejected() {
        for (w, h) in [(0.0, 1.0), (1.0, -2.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            let cfg = ViewportCfg {
                count: 5,
                width: w,
                height: h,
            };
            let err = generate_points_replay(cfg, ReplayToken { seed: 0, index: 0 }).unwrap_err();
            assert!(matches!(err, MeshError::InvalidViewport { .. }));
        }
    }
}
