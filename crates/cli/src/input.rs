//! JSON inputs for the `validate` command.
//!
//! - polygon: `[[x, y], ...]`, optionally closed, either winding.
//! - triangles: `[[[x, y], [x, y], [x, y]], ...]`, taken as given.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use trivalid::{Point, Polygon, Triangle};

pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Polygon> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    polygon_from_reader(BufReader::new(file))
        .with_context(|| format!("reading polygon from {}", path.display()))
}

pub fn read_triangles<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    triangles_from_reader(BufReader::new(file))
        .with_context(|| format!("reading triangles from {}", path.display()))
}

pub fn polygon_from_reader<R: Read>(reader: R) -> Result<Polygon> {
    let coords: Vec<[f64; 2]> =
        serde_json::from_reader(reader).context("expected [[x, y], ...]")?;
    Ok(Polygon::from_f64_ring(coords.into_iter().map(|[x, y]| (x, y)))?)
}

pub fn triangles_from_reader<R: Read>(reader: R) -> Result<Vec<Triangle>> {
    let raw: Vec<[[f64; 2]; 3]> =
        serde_json::from_reader(reader).context("expected [[[x, y], [x, y], [x, y]], ...]")?;
    raw.into_iter()
        .enumerate()
        .map(|(i, corners)| {
            let mut points = [Point::default(); 3];
            for (slot, [x, y]) in points.iter_mut().zip(corners) {
                *slot = Point::try_from_f64(x, y)
                    .with_context(|| format!("triangles[{i}] has an unrepresentable corner"))?;
            }
            Ok(Triangle(points))
        })
        .collect()
}
