use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inpolygon::api::{contains, inside_fraction, mask_columns, ContainmentCfg, Polygon};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{InputFile, MaskProvenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-polygon masks for CSV point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Mark every row of a points CSV as inside/outside a polygon CSV (columns x,y)
    Classify {
        #[arg(long)]
        polygon: String,
        #[arg(long)]
        points: String,
        #[arg(long)]
        out: String,
        /// Minimum point count before classification fans out across threads
        #[arg(long, default_value_t = ContainmentCfg::default().min_parallel_len)]
        parallel_min: usize,
    },
    /// Classify a single point and print the answer as JSON
    Point {
        #[arg(long)]
        polygon: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Counts printed after `classify` and stored in its provenance record.
#[derive(Debug, Serialize, PartialEq)]
struct Summary {
    points: usize,
    inside: usize,
    outside: usize,
    inside_fraction: f64,
}

impl Summary {
    fn from_mask(mask: &[bool]) -> Self {
        let inside = mask.iter().filter(|&&b| b).count();
        Self {
            points: mask.len(),
            inside,
            outside: mask.len() - inside,
            inside_fraction: inside_fraction(mask),
        }
    }
}

#[derive(Debug, Serialize)]
struct PointAnswer {
    x: f64,
    y: f64,
    inside: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            polygon,
            points,
            out,
            parallel_min,
        } => {
            let summary = classify(&polygon, &points, &out, parallel_min)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Point { polygon, x, y } => point(polygon, x, y),
        Action::Report => report(),
    }
}

fn classify(polygon: &str, points: &str, out: &str, parallel_min: usize) -> Result<Summary> {
    tracing::info!(polygon, points, out, parallel_min, "classify");
    let (px, py) = io::read_xy(polygon)?;
    let poly = Polygon::from_coords(&px, &py).with_context(|| format!("polygon {polygon}"))?;
    let (qx, qy) = io::read_xy(points)?;
    let cfg = ContainmentCfg {
        min_parallel_len: parallel_min,
    };
    let mask = mask_columns(&poly, &qx, &qy, cfg).with_context(|| format!("points {points}"))?;
    io::write_mask(out, &qx, &qy, &mask)?;

    let summary = Summary::from_mask(&mask);
    let record = MaskProvenance {
        code_rev: provenance::current_git_rev(),
        crate_version: inpolygon::VERSION,
        polygon: InputFile::describe(polygon, poly.len()),
        points: InputFile::describe(points, qx.len()),
        parallel_min,
        parallel_enabled: cfg!(feature = "parallel"),
        summary: &summary,
        mask: out.to_string(),
    };
    let prov = provenance::write_sidecar(Path::new(out), &record)?;
    tracing::info!(
        inside = summary.inside,
        outside = summary.outside,
        provenance = %prov.display(),
        "classified"
    );
    Ok(summary)
}

fn point(polygon: String, x: f64, y: f64) -> Result<()> {
    tracing::info!(polygon, x, y, "point");
    let (px, py) = io::read_xy(&polygon)?;
    let inside = contains(px, py, x, y)
        .with_context(|| format!("polygon {polygon}"))?
        .as_scalar()
        .context("scalar query produced a sequence")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&PointAnswer { x, y, inside })?
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": inpolygon::VERSION,
        "parallel_enabled": cfg!(feature = "parallel"),
        "default_parallel_min": ContainmentCfg::default().min_parallel_len
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
