//! CSV input/output for coordinate columns.
//!
//! Polygons and point sets are CSV files with numeric `x` and `y` columns (extra
//! columns are ignored). Masks are written as `x,y,inside`.

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read the `x` and `y` columns of a CSV file as `f64`.
pub fn read_xy(path: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .collect()
        .with_context(|| format!("reading {path}"))?;
    tracing::debug!(rows = df.height(), cols = df.width(), path, "csv_shape");
    Ok((column_f64(&df, "x", path)?, column_f64(&df, "y", path)?))
}

fn column_f64(df: &DataFrame, name: &str, path: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("{path}: missing column '{name}'"))?;
    let cast = col
        .cast(&DataType::Float64)
        .with_context(|| format!("{path}: column '{name}' is not numeric"))?;
    cast.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("{path}: empty value in '{name}' at row {row}")))
        .collect()
}

/// Write `x,y,inside` rows to `out`, creating parent directories as needed.
pub fn write_mask(out: &str, xs: &[f64], ys: &[f64], mask: &[bool]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = df!("x" => xs, "y" => ys, "inside" => mask)?;
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}
