//! Point sets as `x,y` CSV, read and written through polars.

use anyhow::{anyhow, bail, Context, Result};
use nnmesh::PointSet;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Read an `x,y` CSV. Columns are loaded as text and converted afterwards, so
/// whole-number rows never pin a column to an integer type.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = float_column(&df, "x", path)?;
    let ys = float_column(&df, "y", path)?;
    PointSet::try_from_coords(xs.into_iter().zip(ys))
        .map_err(|e| anyhow!("{}: {e}", path.display()))
}

fn float_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("{}: missing column `{name}`", path.display()))?
        .cast(&DataType::Float64)?;
    let values = col.f64()?;
    let mut out = Vec::with_capacity(values.len());
    for (row, v) in values.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("{}: null `{name}` at row {row}", path.display()),
        }
    }
    Ok(out)
}
