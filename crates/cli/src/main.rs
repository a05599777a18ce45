mod geojson;
mod input;
mod provenance;
mod shootout;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use trivalid::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use trivalid::triangulate::{all_triangulators, triangulator_by_name};
use trivalid::{validate_triangulation, Polygon};

use crate::geojson::Countries;
use crate::shootout::ShootoutCfg;

#[derive(Parser)]
#[command(name = "trivalid")]
#[command(about = "Exact triangulation validator and triangulator shootout")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the polygons loaded from a GeoJSON file
    Countries {
        #[arg(long)]
        input: PathBuf,
    },
    /// Triangulate, validate, and time polygons with every triangulator
    Shootout {
        /// GeoJSON FeatureCollection of country outlines
        #[arg(long)]
        input: Option<PathBuf>,
        /// Countries to take from --input
        #[arg(long = "country", default_values = ["Canada", "Netherlands", "Chile"])]
        countries: Vec<String>,
        /// Number of random star polygons to add
        #[arg(long, default_value_t = 0)]
        random: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Vertices per random polygon
        #[arg(long, default_value_t = 64)]
        vertices: usize,
        #[arg(long, default_value_t = ShootoutCfg::default().iterations)]
        iterations: usize,
        /// Restrict to these triangulators (default: all)
        #[arg(long = "triangulator")]
        triangulators: Vec<String>,
        /// Write results to this .csv or .parquet file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a triangulation given as JSON files
    Validate {
        /// `[[x, y], ...]`
        #[arg(long)]
        polygon: PathBuf,
        /// `[[[x, y], [x, y], [x, y]], ...]`
        #[arg(long)]
        triangles: PathBuf,
        /// Also reject polygons whose ring is not simple
        #[arg(long)]
        check_simple: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Countries { input } => countries(input),
        Action::Shootout {
            input,
            countries,
            random,
            seed,
            vertices,
            iterations,
            triangulators,
            out,
        } => run_shootout(ShootoutArgs {
            input,
            countries,
            random,
            seed,
            vertices,
            iterations,
            triangulators,
            out,
        }),
        Action::Validate {
            polygon,
            triangles,
            check_simple,
        } => validate(polygon, triangles, check_simple),
    }
}

fn countries(input: PathBuf) -> Result<()> {
    let countries = Countries::read_from_file(&input)?;
    if countries.is_empty() {
        tracing::warn!(input = %input.display(), "no usable polygons");
    }
    tracing::info!(input = %input.display(), count = countries.len(), "countries");
    for (name, polygon) in countries.iter() {
        println!("{name}\t{}", polygon.len());
    }
    Ok(())
}

struct ShootoutArgs {
    input: Option<PathBuf>,
    countries: Vec<String>,
    random: u64,
    seed: u64,
    vertices: usize,
    iterations: usize,
    triangulators: Vec<String>,
    out: Option<PathBuf>,
}

fn run_shootout(args: ShootoutArgs) -> Result<()> {
    let mut polygons: Vec<(String, Polygon)> = Vec::new();
    if let Some(input) = &args.input {
        let countries = Countries::read_from_file(input)?;
        for name in &args.countries {
            match countries.polygon(name) {
                Some(p) => polygons.push((name.clone(), p.clone())),
                None => tracing::warn!(country = %name, "not in input; skipped"),
            }
        }
    }

    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(args.vertices),
        ..RadialCfg::default()
    };
    for index in 0..args.random {
        let tok = ReplayToken {
            seed: args.seed,
            index,
        };
        match draw_star_polygon(cfg, tok) {
            Some(p) => polygons.push((format!("star_{}_{index}", args.seed), p)),
            None => tracing::warn!(seed = args.seed, index, "random draw rejected"),
        }
    }
    if polygons.is_empty() {
        bail!("nothing to run: pass --input with known --country names or --random N");
    }

    let triangulators = if args.triangulators.is_empty() {
        all_triangulators()
    } else {
        args.triangulators
            .iter()
            .map(|name| match triangulator_by_name(name) {
                Some(t) => Ok(t),
                None => bail!("unknown triangulator {name:?}"),
            })
            .collect::<Result<Vec<_>>>()?
    };

    tracing::info!(
        polygons = polygons.len(),
        triangulators = triangulators.len(),
        iterations = args.iterations,
        "shootout start"
    );
    let rows = shootout::run(
        polygons.iter().map(|(name, p)| (name.as_str(), p)),
        &triangulators,
        ShootoutCfg {
            iterations: args.iterations,
        },
    );
    let invalid = rows.iter().filter(|r| !r.valid).count();
    let mut df = shootout::to_dataframe(&rows)?;

    match &args.out {
        Some(out) => {
            shootout::write_table(&mut df, out)?;
            let params = json!({
                "input": args.input,
                "countries": args.countries,
                "random": args.random,
                "seed": args.seed,
                "vertices": args.vertices,
                "iterations": args.iterations,
                "triangulators": triangulators.iter().map(|t| t.name()).collect::<Vec<_>>(),
            });
            let sidecar = provenance::write_sidecar(out, "shootout", params)?;
            tracing::info!(
                out = %out.display(),
                provenance = %sidecar.display(),
                rows = rows.len(),
                invalid,
                "shootout written"
            );
        }
        None => {
            println!("{df}");
            tracing::info!(rows = rows.len(), invalid, "shootout done");
        }
    }
    Ok(())
}

fn validate(polygon: PathBuf, triangles: PathBuf, check_simple: bool) -> Result<()> {
    let poly = input::read_polygon(&polygon)?;
    let tris = input::read_triangles(&triangles)?;
    tracing::info!(vertices = poly.len(), triangles = tris.len(), "validate");
    if check_simple && !poly.is_simple() {
        bail!("{} is not a simple polygon", polygon.display());
    }
    match validate_triangulation(poly.view(), &tris) {
        Ok(()) => {
            println!("valid");
            Ok(())
        }
        Err(violation) => {
            println!("invalid: {violation}");
            bail!("triangulation rejected ({})", violation.kind().as_str())
        }
    }
}
