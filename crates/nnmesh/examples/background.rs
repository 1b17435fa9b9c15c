//! Print a summary of one seeded background mesh.
//!
//! Usage:
//!   cargo run -p nnmesh --example background -- [seed]

use nnmesh::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let cfg = ViewportCfg::default();
    let pts = match generate_points_replay(cfg, ReplayToken { seed, index: 0 }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("sampling failed: {e}");
            return;
        }
    };
    let mesh = pts.mesh();
    let degenerate = mesh.iter().filter(|t| t.area() == 0.0).count();
    println!(
        "seed {seed}: points={}, triangles={}, degenerate={degenerate}",
        pts.len(),
        mesh.len()
    );
    for (i, t) in mesh.iter().take(3).enumerate() {
        println!("  triangle {i}: {}", t.svg_points());
    }
}
