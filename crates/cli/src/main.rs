use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nnmesh::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod points_csv;
mod provenance;

use export::MeshExport;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "nnmesh")]
#[command(about = "Nearest-neighbor triangle meshes for animated backgrounds")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Viewport and seeded sampling parameters.
#[derive(Args, Clone, Copy, Debug)]
struct SampleArgs {
    #[arg(long, default_value_t = 400)]
    count: usize,
    #[arg(long, default_value_t = 1000.0)]
    width: f64,
    #[arg(long, default_value_t = 400.0)]
    height: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
}

impl SampleArgs {
    fn viewport(&self) -> ViewportCfg {
        ViewportCfg {
            count: self.count,
            width: self.width,
            height: self.height,
        }
    }

    fn token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: self.index,
        }
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "count": self.count,
            "width": self.width,
            "height": self.height,
            "seed": self.seed,
            "index": self.index,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Sample a point set and write it as x,y CSV
    Points {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build the triangle mesh and write it as JSON
    Mesh {
        #[command(flatten)]
        sample: SampleArgs,
        /// Read points from CSV instead of sampling
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Render the mesh as an SVG background
    Svg {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "white")]
        stroke: String,
        #[arg(long, default_value_t = 1.0)]
        stroke_width: f64,
        #[arg(long, default_value = "#3b82f6")]
        background: String,
        /// Leave the backdrop transparent
        #[arg(long)]
        no_background: bool,
    },
    /// Write SVG frames morphing between two consecutive seeded point sets
    Frames {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long, default_value_t = 30)]
        frames: usize,
        #[arg(long, default_value_t = 5000)]
        duration_ms: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Points { sample, out } => points(sample, &out, cmd.tag),
        Action::Mesh { sample, input, out } => mesh(sample, input.as_deref(), &out, cmd.tag),
        Action::Svg {
            sample,
            input,
            out,
            stroke,
            stroke_width,
            background,
            no_background,
        } => {
            let style = SvgStyle {
                stroke,
                stroke_width,
                background: (!no_background).then_some(background),
                ..SvgStyle::default()
            };
            svg(sample, input.as_deref(), &style, &out, cmd.tag)
        }
        Action::Frames {
            sample,
            out_dir,
            frames: n,
            duration_ms,
        } => frames(sample, n, MorphCfg { duration_ms }, &out_dir, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn load_points(sample: &SampleArgs, input: Option<&Path>) -> Result<PointSet> {
    let viewport = sample.viewport();
    viewport.validate().context("checking viewport")?;
    let Some(path) = input else {
        return generate_points_replay(viewport, sample.token()).context("sampling points");
    };
    let pts = points_csv::read_points(path)?;
    let outside = pts
        .iter()
        .filter(|p| {
            !(0.0..viewport.width).contains(&p.x) || !(0.0..viewport.height).contains(&p.y)
        })
        .count();
    if outside > 0 {
        tracing::warn!(
            outside,
            width = viewport.width,
            height = viewport.height,
            "input points fall outside the viewport"
        );
    }
    Ok(pts)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn input_param(input: Option<&Path>) -> serde_json::Value {
    json!(input.map(|p| p.to_string_lossy().into_owned()))
}

fn points(sample: SampleArgs, out: &Path, tag: Option<String>) -> Result<()> {
    let pts = load_points(&sample, None)?;
    ensure_parent(out)?;
    points_csv::write_points(out, &pts)?;
    tracing::info!(count = pts.len(), out = %out.display(), tag = ?tag, "points");
    write_sidecar(out, Payload::new(sample.params(), tag))?;
    Ok(())
}

fn mesh(sample: SampleArgs, input: Option<&Path>, out: &Path, tag: Option<String>) -> Result<()> {
    let pts = load_points(&sample, input)?;
    let mesh = pts.mesh();
    if mesh.is_empty() {
        tracing::warn!(count = pts.len(), "mesh is empty");
    }
    tracing::info!(
        count = pts.len(),
        triangles = mesh.len(),
        out = %out.display(),
        tag = ?tag,
        "mesh"
    );
    let export = MeshExport::new(&mesh, pts.len(), sample.width, sample.height);
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&export)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let mut params = sample.params();
    params["input"] = input_param(input);
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn svg(
    sample: SampleArgs,
    input: Option<&Path>,
    style: &SvgStyle,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    let pts = load_points(&sample, input)?;
    let mesh = pts.mesh();
    if mesh.is_empty() {
        tracing::warn!(count = pts.len(), "mesh is empty");
    }
    let doc = render_svg(&mesh, sample.width, sample.height, style);
    ensure_parent(out)?;
    fs::write(out, doc).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        count = pts.len(),
        triangles = mesh.len(),
        out = %out.display(),
        tag = ?tag,
        "svg"
    );
    let mut params = sample.params();
    params["input"] = input_param(input);
    params["stroke"] = json!(style.stroke);
    params["stroke_width"] = json!(style.stroke_width);
    params["background"] = json!(style.background);
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn frames(
    sample: SampleArgs,
    n: usize,
    cfg: MorphCfg,
    out_dir: &Path,
    tag: Option<String>,
) -> Result<()> {
    let viewport = sample.viewport();
    let tok = sample.token();
    let from = generate_points_replay(viewport, tok).context("sampling start points")?;
    let to = generate_points_replay(viewport, tok.next()).context("sampling end points")?;
    let morph = Morph::new(from, to, cfg)?;
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let style = SvgStyle::default();
    let mut written = Vec::with_capacity(n);
    for (i, pts) in morph.frames(n).enumerate() {
        let mesh = pts.mesh();
        let path = out_dir.join(format!("frame_{i:03}.svg"));
        fs::write(&path, render_svg(&mesh, viewport.width, viewport.height, &style))
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(frame = i, triangles = mesh.len(), "frame");
        written.push(path.to_string_lossy().into_owned());
    }
    tracing::info!(frames = written.len(), out_dir = %out_dir.display(), tag = ?tag, "frames");

    let manifest = out_dir.join("frames.json");
    let body = json!({
        "duration_ms": morph.cfg().duration_ms,
        "frames": written,
    });
    fs::write(&manifest, serde_json::to_vec_pretty(&body)?)
        .with_context(|| format!("writing {}", manifest.display()))?;
    let mut params = sample.params();
    params["frames"] = json!(n);
    params["duration_ms"] = json!(cfg.duration_ms);
    write_sidecar(&manifest, Payload::new(params, tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::report_block(tag);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
