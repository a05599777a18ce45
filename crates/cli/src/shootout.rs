//! Triangulation shootout: time every triangulator on every polygon and judge
//! each result with the exact validator.
//!
//! Results are tabulated in a polars `DataFrame` and written as CSV or Parquet.

use std::fs::{self, File};
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::*;
use trivalid::triangulate::Triangulator;
use trivalid::{validate_triangulation, Polygon};

/// Shootout configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShootoutCfg {
    /// Timed repetitions per (polygon, triangulator) pair, after one untimed run.
    pub iterations: usize,
}

impl Default for ShootoutCfg {
    fn default() -> Self {
        Self { iterations: 5 }
    }
}

/// Outcome of one (polygon, triangulator) pair.
#[derive(Clone, Debug)]
pub struct Row {
    pub polygon: String,
    pub vertices: usize,
    pub triangulator: &'static str,
    pub triangles: usize,
    pub valid: bool,
    /// Violation kind, empty when valid.
    pub violation: String,
    /// Human-readable violation, empty when valid.
    pub message: String,
    pub min_ns: u64,
    pub median_ns: u64,
    pub validate_ns: u64,
}

pub fn run_one(name: &str, polygon: &Polygon, triangulator: &dyn Triangulator, cfg: ShootoutCfg) -> Row {
    let view = polygon.view();
    let triangles = triangulator.triangulate(view);

    let start = Instant::now();
    let verdict = validate_triangulation(view, &triangles);
    let validate_ns = elapsed_ns(start);

    let (valid, violation, message) = match &verdict {
        Ok(()) => (true, String::new(), String::new()),
        Err(v) => {
            tracing::warn!(
                polygon = name,
                triangulator = triangulator.name(),
                "invalid triangulation: {v}"
            );
            (false, v.kind().as_str().to_owned(), v.to_string())
        }
    };

    let mut samples: Vec<u64> = (0..cfg.iterations.max(1))
        .map(|_| {
            let start = Instant::now();
            black_box(triangulator.triangulate(black_box(view)));
            elapsed_ns(start)
        })
        .collect();
    samples.sort_unstable();

    let row = Row {
        polygon: name.to_owned(),
        vertices: polygon.len(),
        triangulator: triangulator.name(),
        triangles: triangles.len(),
        valid,
        violation,
        message,
        min_ns: samples[0],
        median_ns: samples[samples.len() / 2],
        validate_ns,
    };
    tracing::info!(
        polygon = name,
        vertices = row.vertices,
        triangulator = row.triangulator,
        valid = row.valid,
        median_ns = row.median_ns,
        "shootout"
    );
    row
}

/// Every triangulator on every polygon, polygon-major.
pub fn run<'a, I>(polygons: I, triangulators: &[Box<dyn Triangulator + Send + Sync>], cfg: ShootoutCfg) -> Vec<Row>
where
    I: IntoIterator<Item = (&'a str, &'a Polygon)>,
{
    let mut rows = Vec::new();
    for (name, polygon) in polygons {
        for t in triangulators {
            rows.push(run_one(name, polygon, t.as_ref(), cfg));
        }
    }
    rows
}

pub fn to_dataframe(rows: &[Row]) -> PolarsResult<DataFrame> {
    df!(
        "polygon" => rows.iter().map(|r| r.polygon.clone()).collect::<Vec<_>>(),
        "vertices" => rows.iter().map(|r| r.vertices as u64).collect::<Vec<_>>(),
        "triangulator" => rows.iter().map(|r| r.triangulator.to_owned()).collect::<Vec<_>>(),
        "triangles" => rows.iter().map(|r| r.triangles as u64).collect::<Vec<_>>(),
        "valid" => rows.iter().map(|r| r.valid).collect::<Vec<_>>(),
        "violation" => rows.iter().map(|r| r.violation.clone()).collect::<Vec<_>>(),
        "message" => rows.iter().map(|r| r.message.clone()).collect::<Vec<_>>(),
        "min_ns" => rows.iter().map(|r| r.min_ns).collect::<Vec<_>>(),
        "median_ns" => rows.iter().map(|r| r.median_ns).collect::<Vec<_>>(),
        "validate_ns" => rows.iter().map(|r| r.validate_ns).collect::<Vec<_>>(),
    )
}

/// Write `df` as Parquet if `path` ends in `.parquet`, CSV otherwise.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}

fn elapsed_ns(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
