//! See documentation for [`GeometryKind`].
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Type tag of a geometry, named after the GeoJSON geometry types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Set of points.
    MultiPoint,
    /// Sequence of points connected by segments.
    LineString,
    /// Set of line strings.
    MultiLineString,
    /// Area bounded by an outer ring with optional holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
}

impl GeometryKind {
    /// Name of the type as it appears in the `type` member of a GeoJSON geometry.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&geojson::Value> for GeometryKind {
    fn from(value: &geojson::Value) -> Self {
        match value {
            geojson::Value::Point(_) => GeometryKind::Point,
            geojson::Value::MultiPoint(_) => GeometryKind::MultiPoint,
            geojson::Value::LineString(_) => GeometryKind::LineString,
            geojson::Value::MultiLineString(_) => GeometryKind::MultiLineString,
            geojson::Value::Polygon(_) => GeometryKind::Polygon,
            geojson::Value::MultiPolygon(_) => GeometryKind::MultiPolygon,
            geojson::Value::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}
