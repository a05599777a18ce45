//! Exact 2D primitives: points, vectors, segments, triangles and polygon rings.
//!
//! Purpose
//! - Value types over the fixed-point grid of `crate::exact`. Equality is exact
//!   identity on the grid; there is no notion of "close enough".
//! - `PolygonView` is the borrowed, read-only ring the validator consumes;
//!   `Polygon` is the owned ring producers build and normalize.
//!
//! Conventions
//! - Rings are counter-clockwise and closed implicitly (last vertex connects to
//!   the first); the closing vertex is never repeated.
//! - Triangles are stored in the order they were produced. Validity requires
//!   counter-clockwise order, but storage does not enforce it.

mod point;
mod polygon;
mod triangle;

pub use point::{cross, dot, Point, Segment, Vector};
pub use polygon::{Polygon, PolygonError, PolygonView};
pub use triangle::Triangle;
