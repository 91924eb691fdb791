use ::geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Position, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{convert_points, point_to_position, position_to_point};
use crate::cartesian::Point2d;
use crate::error::TriadError;
use crate::geometry::Geom;
use crate::geometry_type::GeometryKind;

/// Creates a feature with the given geometry and an empty properties object.
pub(crate) fn new_feature(value: Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}

/// Polygon feature with a single empty ring, `"coordinates": [[]]`.
pub(crate) fn empty_polygon_feature() -> Feature {
    new_feature(Value::Polygon(vec![vec![]]))
}

pub(crate) fn feature_geometry(feature: &Feature) -> Result<&Geometry, TriadError> {
    feature.geometry.as_ref().ok_or_else(|| {
        log::debug!("Feature {:?} has no geometry", feature.id);
        TriadError::MissingGeometry
    })
}

pub(crate) fn unexpected_geometry(expected: &'static str, value: &Value) -> TriadError {
    let found = GeometryKind::from(value);
    log::debug!("Expected {expected} geometry, got {found}");
    TriadError::UnexpectedGeometry { expected, found }
}

/// Returns the coordinates of a collection of `Point` features, in the order of the features.
///
/// Fails if any of the features has no geometry or has a geometry other than `Point`.
pub fn points_from_collection(collection: &FeatureCollection) -> Result<Vec<Point2d>, TriadError> {
    collection
        .features
        .iter()
        .map(|feature| match &feature_geometry(feature)?.value {
            Value::Point(position) => position_to_point(position),
            other => Err(unexpected_geometry("Point", other)),
        })
        .collect()
}

/// Returns all the positions of the geometry flattened into one list, in document order.
///
/// Rings keep their closing positions. Members of a `GeometryCollection` are visited in order.
pub fn positions(geometry: &Geometry) -> Result<Vec<Point2d>, TriadError> {
    let mut points = Vec::new();
    collect_positions(&geometry.value, &mut points)?;
    Ok(points)
}

fn collect_positions(value: &Value, points: &mut Vec<Point2d>) -> Result<(), TriadError> {
    match value {
        Value::Point(position) => points.push(position_to_point(position)?),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            points.extend(convert_points(positions)?)
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for line in lines {
                points.extend(convert_points(line)?);
            }
        }
        Value::MultiPolygon(polygons) => {
            for ring in polygons.iter().flatten() {
                points.extend(convert_points(ring)?);
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_positions(&geometry.value, points)?;
            }
        }
    }

    Ok(())
}

/// Creates a `LineString` feature going through the points of a collection of `Point` features, in the order of the
/// features.
pub fn line_string_feature(collection: &FeatureCollection) -> Result<Feature, TriadError> {
    let points = points_from_collection(collection)?;
    Ok(new_feature(Value::LineString(
        points.iter().map(point_to_position).collect(),
    )))
}

/// Creates a `Polygon` feature with a single ring going through the given points.
///
/// Accepts a collection of `Point` features, or a `MultiPoint` or `LineString` (either as a feature or as a bare
/// geometry). The ring is closed by repeating the first position if the input does not do that already.
pub fn polygon_feature(geojson: &GeoJson) -> Result<Feature, TriadError> {
    let mut ring: Vec<Position> = match geojson {
        GeoJson::FeatureCollection(collection) => points_from_collection(collection)?
            .iter()
            .map(point_to_position)
            .collect(),
        GeoJson::Feature(feature) => ring_positions(&feature_geometry(feature)?.value)?,
        GeoJson::Geometry(geometry) => ring_positions(&geometry.value)?,
    };

    if ring.first() != ring.last() {
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }
    }

    Ok(new_feature(Value::Polygon(vec![ring])))
}

fn ring_positions(value: &Value) -> Result<Vec<Position>, TriadError> {
    match value {
        Value::MultiPoint(positions) | Value::LineString(positions) => Ok(convert_points(positions)?
            .iter()
            .map(point_to_position)
            .collect()),
        other => Err(unexpected_geometry("MultiPoint or LineString", other)),
    }
}

/// Wraps a geometry into a new feature with an empty properties object.
pub fn feature_from_geom(geom: &Geom<Point2d>) -> Feature {
    new_feature(Value::from(geom))
}

/// Returns true if all the features of the collection have geometries of the same type. An empty collection is
/// homogeneous.
pub fn is_homogeneous_collection(collection: &FeatureCollection) -> Result<bool, TriadError> {
    let kinds = collection
        .features
        .iter()
        .map(|feature| Ok(GeometryKind::from(&feature_geometry(feature)?.value)))
        .collect::<Result<Vec<_>, TriadError>>()?;

    let Some((first, rest)) = kinds.split_first() else {
        return Ok(true);
    };

    Ok(rest.iter().all(|kind| kind == first))
}

/// Creates an independent copy of any serializable value by passing it through its JSON representation.
///
/// The copy is equal to what a JSON parser would produce from the serialized input, so non-finite numbers become
/// `null` and fail to deserialize into numeric fields.
pub fn deep_copy<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, TriadError> {
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}
