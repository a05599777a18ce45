//! Country outlines from a GeoJSON `FeatureCollection`.
//!
//! Each feature contributes one polygon keyed by its `ADMIN` (or `name`)
//! property: the outer ring of a `Polygon`, or the outer ring with the most
//! positions of a `MultiPolygon`. Holes are ignored. Rings are rounded onto
//! the fixed-point grid and normalized (repeated and closing vertices removed,
//! winding made counter-clockwise). Features that cannot be turned into a
//! polygon are skipped with a warning.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use trivalid::Polygon;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Map<String, Value>,
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Ring = Vec<Vec<f64>>;

/// Polygons by country name.
#[derive(Debug, Default)]
pub struct Countries {
    polygons: BTreeMap<String, Polygon>,
}

impl Countries {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("reading countries from {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: FeatureCollection =
            serde_json::from_reader(reader).context("parsing GeoJSON FeatureCollection")?;
        let mut polygons = BTreeMap::new();
        for (i, feature) in doc.features.into_iter().enumerate() {
            let Some(name) = feature_name(&feature.properties) else {
                tracing::warn!(feature = i, "feature has no ADMIN or name property; skipped");
                continue;
            };
            let Some(geometry) = feature.geometry else {
                tracing::warn!(country = %name, "feature has no geometry; skipped");
                continue;
            };
            let ring = match outer_ring(&geometry) {
                Ok(ring) => ring,
                Err(e) => {
                    tracing::warn!(country = %name, "{e:#}");
                    continue;
                }
            };
            let coords = ring
                .iter()
                .filter(|pos| pos.len() >= 2)
                .map(|pos| (pos[0], pos[1]));
            match Polygon::from_f64_ring(coords) {
                Ok(polygon) => {
                    tracing::debug!(country = %name, vertices = polygon.len(), "loaded");
                    polygons.insert(name, polygon);
                }
                Err(e) => tracing::warn!(country = %name, "not a valid polygon: {e}"),
            }
        }
        Ok(Self { polygons })
    }

    pub fn polygon(&self, name: &str) -> Option<&Polygon> {
        self.polygons.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Polygon)> {
        self.polygons.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

fn feature_name(properties: &Map<String, Value>) -> Option<String> {
    ["ADMIN", "name"]
        .iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

fn outer_ring(geometry: &Geometry) -> Result<Ring> {
    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Ring> = serde_json::from_value(geometry.coordinates.clone())
                .context("malformed Polygon coordinates")?;
            rings
                .into_iter()
                .next()
                .context("Polygon without rings")
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Ring>> = serde_json::from_value(geometry.coordinates.clone())
                .context("malformed MultiPolygon coordinates")?;
            let mut best: Option<Ring> = None;
            for ring in polygons.into_iter().filter_map(|rings| rings.into_iter().next()) {
                if best.as_ref().map_or(true, |b| ring.len() > b.len()) {
                    best = Some(ring);
                }
            }
            best.context("MultiPolygon without rings")
        }
        other => anyhow::bail!(
            "only Polygon and MultiPolygon are supported, but {other} was found"
        ),
    }
}
