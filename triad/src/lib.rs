//! Planar geometry algorithms for GeoJSON-shaped data.
//!
//! The crate provides:
//! * convex hulls of point sets ([`hull::convex_hull`]), using the monotone chain algorithm;
//! * axis-aligned bounding boxes ([`Rect`]) of arbitrary geometries;
//! * point-in-polygon tests for polygons with holes and multipolygons ([`CartesianPolygon`]);
//! * an adapter between these native types and [`geojson`](::geojson) documents.
//!
//! With the `geo-types` feature (enabled by default) the algorithms also accept `geo_types`
//! coordinates and points.
//!
//! All computations are planar and euclidean. Every function borrows its input and returns freshly
//! allocated output, so the caller's data is never modified.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod geometry_type;
pub mod hull;
pub mod multi_contour;
pub mod multi_point;
pub mod multi_polygon;
pub mod polygon;

pub mod geojson;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use cartesian::{
    cross_product, CartesianPoint2d, CartesianPolygon, NewCartesianPoint2d, Orientation, Point2,
    Point2d, Rect,
};
pub use contour::{ClosedContour, Contour};
pub use error::TriadError;
pub use geometry::{CartesianGeometry2d, Geom};
pub use geometry_type::GeometryKind;
pub use hull::convex_hull;
pub use multi_contour::MultiContour;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
