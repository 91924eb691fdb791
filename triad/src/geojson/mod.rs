//! Adapter between the geometries of this crate and [`geojson`](::geojson) documents.
//!
//! GeoJSON values are converted into the native geometries ([`Geom`] and friends) with `f64` coordinates, the
//! algorithms run on the native types, and the results are wrapped back into newly created GeoJSON features. Input
//! documents are only borrowed, never modified, and the returned features never share data with them.

use ::geojson::{Geometry, LineStringType, PolygonType, Position, Value};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::contour::{ClosedContour, Contour};
use crate::error::TriadError;
use crate::geometry::Geom;
use crate::geometry_type::GeometryKind;
use crate::multi_contour::MultiContour;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

mod bbox;
mod contains;
mod feature;
mod hull;

pub use bbox::{bounding_box, bounding_box_of_coordinates, bounding_box_of_json, envelope_feature};
pub use contains::{point_in_geometry, point_in_polygon};
pub use feature::{
    deep_copy, feature_from_geom, is_homogeneous_collection, line_string_feature,
    points_from_collection, polygon_feature, positions,
};
pub use hull::convex_hull_feature;

/// Converts a GeoJSON position into a point. Coordinates after the first two (altitude) are ignored.
pub fn position_to_point(position: &Position) -> Result<Point2d, TriadError> {
    match position.as_slice() {
        [x, y, ..] => Ok(Point2d::new(*x, *y)),
        _ => {
            log::debug!("Position {position:?} has less than 2 coordinates");
            Err(TriadError::InvalidPosition(format!(
                "position must contain at least 2 dimensions, got {}",
                position.len()
            )))
        }
    }
}

/// Converts a point into a 2d GeoJSON position.
pub fn point_to_position(point: &impl CartesianPoint2d<Num = f64>) -> Position {
    vec![point.x(), point.y()]
}

impl TryFrom<&Value> for Geom<Point2d> {
    type Error = TriadError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geom::Point(position_to_point(p)?),
            Value::MultiPoint(points) => Geom::MultiPoint(MultiPoint::from(convert_points(points)?)),
            Value::LineString(points) => Geom::Contour(convert_contour(points)?),
            Value::MultiLineString(lines) => Geom::MultiContour(convert_multi_contour(lines)?),
            Value::Polygon(polygon) => Geom::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geom::MultiPolygon(convert_multi_polygon(mp)?),
            Value::GeometryCollection(_) => {
                return Err(TriadError::UnexpectedGeometry {
                    expected: "a single geometry",
                    found: GeometryKind::GeometryCollection,
                })
            }
        })
    }
}

impl TryFrom<&Geometry> for Geom<Point2d> {
    type Error = TriadError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value.value)
    }
}

impl From<&Geom<Point2d>> for Value {
    fn from(geom: &Geom<Point2d>) -> Self {
        match geom {
            Geom::Point(p) => Value::Point(point_to_position(p)),
            Geom::MultiPoint(points) => {
                Value::MultiPoint(points.points().iter().map(point_to_position).collect())
            }
            Geom::Contour(contour) => Value::LineString(contour_positions(contour)),
            Geom::MultiContour(contours) => {
                Value::MultiLineString(contours.contours().map(contour_positions).collect())
            }
            Geom::Polygon(polygon) => Value::Polygon(polygon_positions(polygon)),
            Geom::MultiPolygon(mp) => {
                Value::MultiPolygon(mp.parts().iter().map(polygon_positions).collect())
            }
        }
    }
}

fn convert_points(points: &[Position]) -> Result<Vec<Point2d>, TriadError> {
    points.iter().map(position_to_point).collect()
}

fn convert_contour(line_string: &LineStringType) -> Result<Contour<Point2d>, TriadError> {
    Ok(Contour::open(convert_points(line_string)?))
}

fn convert_multi_contour(lines: &[LineStringType]) -> Result<MultiContour<Point2d>, TriadError> {
    Ok(MultiContour::from(
        lines
            .iter()
            .map(convert_contour)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_ring(ring: &[Position]) -> Result<ClosedContour<Point2d>, TriadError> {
    Ok(ClosedContour::from_ring(convert_points(ring)?))
}

pub(crate) fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<Point2d>, TriadError> {
    let mut rings = polygon.iter().map(Vec::as_slice).map(convert_ring);
    let outer_contour = rings.next().transpose()?.unwrap_or_default();
    let inner_contours = rings.collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(outer_contour, inner_contours))
}

pub(crate) fn convert_multi_polygon(
    mp: &[PolygonType],
) -> Result<MultiPolygon<Point2d>, TriadError> {
    Ok(MultiPolygon::from(
        mp.iter()
            .map(convert_polygon)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn contour_positions(contour: &Contour<Point2d>) -> Vec<Position> {
    contour.iter_points_closing().map(point_to_position).collect()
}

fn ring_positions(ring: &ClosedContour<Point2d>) -> Vec<Position> {
    ring.iter_points_closing().map(point_to_position).collect()
}

fn polygon_positions(polygon: &Polygon<Point2d>) -> Vec<Vec<Position>> {
    polygon.iter_contours().map(ring_positions).collect()
}
