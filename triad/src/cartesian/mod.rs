//! Types and functions on geometries in cartesian coordinates.

mod orient;
mod point;
mod polygon;
mod rect;

pub use orient::{cross_product, Orientation};
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Point2d};
pub use polygon::CartesianPolygon;
pub use rect::Rect;
