use ::geojson::{Feature, Geometry, Value};

use super::feature::{feature_geometry, unexpected_geometry};
use super::{convert_multi_polygon, convert_polygon, position_to_point};
use crate::cartesian::{CartesianPolygon, Point2d, Rect};
use crate::error::TriadError;
use crate::geometry::Geom;
use crate::multi_polygon::MultiPolygon;

/// Returns true if the `Point` feature lies inside the `Polygon` or `MultiPolygon` feature.
///
/// Holes are excluded from the area of a polygon. If the polygon has a `bbox` member (on the geometry or, if the
/// geometry has none, on the feature), points outside of the box are rejected without testing the rings. Whether
/// a point lying exactly on an edge is inside is not specified.
pub fn point_in_polygon(point: &Feature, polygon: &Feature) -> Result<bool, TriadError> {
    let point = match &feature_geometry(point)?.value {
        Value::Point(position) => position_to_point(position)?,
        other => return Err(unexpected_geometry("Point", other)),
    };

    let geometry = feature_geometry(polygon)?;
    let polygons = match &geometry.value {
        Value::Polygon(rings) => MultiPolygon::from(convert_polygon(rings)?),
        Value::MultiPolygon(parts) => convert_multi_polygon(parts)?,
        other => return Err(unexpected_geometry("Polygon or MultiPolygon", other)),
    };

    let bbox = geometry.bbox.as_deref().or(polygon.bbox.as_deref());
    if is_outside_bbox(&point, bbox)? {
        return Ok(false);
    }

    Ok(polygons.contains_point(&point))
}

/// Returns true if the point lies inside the geometry.
///
/// Only polygons and multipolygons have area, other geometries never contain a point. A geometry collection contains
/// the point if any of its members does.
pub fn point_in_geometry(point: &Point2d, geometry: &Geometry) -> Result<bool, TriadError> {
    if is_outside_bbox(point, geometry.bbox.as_deref())? {
        return Ok(false);
    }

    match &geometry.value {
        Value::GeometryCollection(geometries) => {
            for member in geometries {
                if point_in_geometry(point, member)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        value => Ok(Geom::<Point2d>::try_from(value)?.contains_point(point)),
    }
}

fn is_outside_bbox(point: &Point2d, bbox: Option<&[f64]>) -> Result<bool, TriadError> {
    let Some(bbox) = bbox else {
        return Ok(false);
    };

    let outside = !Rect::from_bbox(bbox)?.contains(point);
    if outside {
        log::debug!("Point {point:?} is outside of the polygon bbox {bbox:?}");
    }

    Ok(outside)
}
