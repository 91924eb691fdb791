use ::geojson::{Feature, GeoJson, Geometry, JsonValue, Value};

use super::feature::{empty_polygon_feature, feature_geometry, new_feature};
use super::{point_to_position, position_to_point};
use crate::cartesian::{Point2d, Rect};
use crate::error::TriadError;
use crate::geometry::{CartesianGeometry2d, Geom};

/// Bounding box of a GeoJSON document.
///
/// Geometries, features and feature collections are all accepted, geometry collections are descended into. A
/// document without any positions returns [`Rect::EMPTY`]. Features without geometry are rejected.
pub fn bounding_box(geojson: &GeoJson) -> Result<Rect, TriadError> {
    let rect = match geojson {
        GeoJson::Geometry(geometry) => expand_with_geometry(Rect::EMPTY, geometry)?,
        GeoJson::Feature(feature) => expand_with_feature(Rect::EMPTY, feature)?,
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .try_fold(Rect::EMPTY, |rect, feature| {
                expand_with_feature(rect, feature)
            })?,
    };

    log::trace!("Bounding box of the document: {rect:?}");
    Ok(rect)
}

/// Bounding box of a bare `coordinates` array of any nesting depth.
///
/// An array of numbers is a position and must contain at least 2 numbers. An array of arrays is descended into.
/// Anything else (mixed arrays, strings, objects) is rejected.
pub fn bounding_box_of_coordinates(coordinates: &JsonValue) -> Result<Rect, TriadError> {
    expand_with_coordinates(Rect::EMPTY, coordinates)
}

/// Bounding box of an arbitrary JSON value: either a GeoJSON object or a bare `coordinates` array.
pub fn bounding_box_of_json(value: &JsonValue) -> Result<Rect, TriadError> {
    match value {
        JsonValue::Array(_) => bounding_box_of_coordinates(value),
        _ => bounding_box(&GeoJson::from_json_value(value.clone())?),
    }
}

/// Creates a `Polygon` feature covering the bounding box of the document.
///
/// The ring goes counterclockwise from the bottom left corner and is closed. The feature has its `bbox` member set.
/// If the document has no positions, the polygon has a single empty ring.
pub fn envelope_feature(geojson: &GeoJson) -> Result<Feature, TriadError> {
    let rect = bounding_box(geojson)?;
    if rect.is_empty() {
        return Ok(empty_polygon_feature());
    }

    let ring = rect
        .into_contour()
        .iter_points_closing()
        .map(point_to_position)
        .collect();

    let mut feature = new_feature(Value::Polygon(vec![ring]));
    feature.bbox = Some(rect.to_bbox().to_vec());
    Ok(feature)
}

fn expand_with_feature(rect: Rect, feature: &Feature) -> Result<Rect, TriadError> {
    expand_with_geometry(rect, feature_geometry(feature)?)
}

fn expand_with_geometry(rect: Rect, geometry: &Geometry) -> Result<Rect, TriadError> {
    match &geometry.value {
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .try_fold(rect, |rect, geometry| expand_with_geometry(rect, geometry)),
        value => Ok(Geom::<Point2d>::try_from(value)?.expand_rect(rect)),
    }
}

fn expand_with_coordinates(rect: Rect, node: &JsonValue) -> Result<Rect, TriadError> {
    let JsonValue::Array(items) = node else {
        return Err(invalid_coordinates(node));
    };

    if !items.is_empty() && items.iter().all(JsonValue::is_number) {
        let position: Vec<f64> = items.iter().filter_map(JsonValue::as_f64).collect();
        return Ok(rect.expand(&position_to_point(&position)?));
    }

    items.iter().try_fold(rect, |rect, item| {
        if item.is_array() {
            expand_with_coordinates(rect, item)
        } else {
            Err(invalid_coordinates(node))
        }
    })
}

fn invalid_coordinates(node: &JsonValue) -> TriadError {
    log::debug!("Invalid coordinates: {node}");
    TriadError::InvalidCoordinates(node.to_string())
}
