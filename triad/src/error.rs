//! Error type used by the crate.

use thiserror::Error;

use crate::geometry_type::GeometryKind;

/// Error enum.
///
/// Degenerate geometries (empty rings, hulls of less than three points, empty collections) are not
/// errors. These variants are returned only when the input cannot be interpreted at all.
#[derive(Debug, Error)]
pub enum TriadError {
    /// A feature does not have a geometry.
    #[error("feature has no geometry")]
    MissingGeometry,
    /// A position has less than two coordinates.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    /// Coordinate tree is not a (possibly nested) array of positions.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    /// `bbox` member must contain 4 (or 6 for 3d boxes) values.
    #[error("invalid bbox: expected 4 or 6 values, got {0}")]
    InvalidBbox(usize),
    /// Geometry is of a type that the operation does not accept.
    #[error("unexpected geometry: expected {expected}, found {found}")]
    UnexpectedGeometry {
        /// Geometry types accepted by the operation.
        expected: &'static str,
        /// Type of the given geometry.
        found: GeometryKind,
    },
    /// Input is not a valid GeoJSON document.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[source] Box<::geojson::Error>),
    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<::geojson::Error> for TriadError {
    fn from(value: ::geojson::Error) -> Self {
        Self::GeoJson(Box::new(value))
    }
}
