use ::geojson::{Feature, FeatureCollection, Value};

use super::feature::{empty_polygon_feature, new_feature, points_from_collection};
use super::point_to_position;
use crate::contour::ClosedContour;
use crate::error::TriadError;
use crate::hull::convex_hull;

/// Creates a `Polygon` feature with the convex hull of a collection of `Point` features.
///
/// The ring goes counterclockwise from the point with the smallest `x` and is closed. A collection of 2 features or
/// less has no hull, so a polygon with a single empty ring is returned. If all the points are collinear, the ring
/// degenerates into the segment between the two extreme points.
pub fn convex_hull_feature(collection: &FeatureCollection) -> Result<Feature, TriadError> {
    if collection.features.len() <= 2 {
        log::debug!(
            "Collection of {} features has no convex hull",
            collection.features.len()
        );
        return Ok(empty_polygon_feature());
    }

    let points = points_from_collection(collection)?;
    let hull = ClosedContour::new(convex_hull(&points));
    let ring = hull.iter_points_closing().map(point_to_position).collect();

    Ok(new_feature(Value::Polygon(vec![ring])))
}
