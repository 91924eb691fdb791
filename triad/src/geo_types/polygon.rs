use crate::cartesian::Point2d;
use crate::contour::{ClosedContour, Contour};
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

fn convert_coords(line: &geo_types::LineString<f64>) -> Vec<Point2d> {
    line.coords().map(|c| Point2d::new(c.x, c.y)).collect()
}

impl From<&geo_types::LineString<f64>> for Contour<Point2d> {
    fn from(line: &geo_types::LineString<f64>) -> Self {
        let points = convert_coords(line);
        if points.len() > 1 && line.is_closed() {
            Contour::from(ClosedContour::from_ring(points))
        } else {
            Contour::open(points)
        }
    }
}

impl From<&geo_types::Polygon<f64>> for Polygon<Point2d> {
    fn from(polygon: &geo_types::Polygon<f64>) -> Self {
        Polygon::new(
            ClosedContour::from_ring(convert_coords(polygon.exterior())),
            polygon
                .interiors()
                .iter()
                .map(|ring| ClosedContour::from_ring(convert_coords(ring)))
                .collect(),
        )
    }
}

impl From<&geo_types::MultiPolygon<f64>> for MultiPolygon<Point2d> {
    fn from(mp: &geo_types::MultiPolygon<f64>) -> Self {
        Self {
            parts: mp.0.iter().map(Polygon::from).collect(),
        }
    }
}
