//! Line strings and rings.
//!
//! A [`Contour`] is either:
//! * **open** - the first and the last points of the contour are not connected. A GeoJSON `LineString` is read as an
//!   open contour.
//! * **closed** - the first and the last points of the contour are connected. Rings of GeoJSON polygons are read as
//!   closed contours.
//!
//! # Contour vs GeoJSON LineString
//!
//! A GeoJSON linear ring is closed by repeating its first position at the end. A [`ClosedContour`] does not store
//! that duplicate: the segment between the last and the first points is implied. Use
//! [`ClosedContour::from_ring`] to read a ring with the duplicate and [`ClosedContour::iter_points_closing`] to write
//! it back.

use crate::cartesian::CartesianPoint2d;
use crate::geometry::CartesianGeometry2d;
use serde::{Deserialize, Serialize};

/// Line string, open or closed.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> std::ops::Deref for Contour<Point> {
    type Target = Vec<Point>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Creates a new closed contour.
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Whether the contour is closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Returns the ring of a closed contour, `None` for an open one.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Same as iterating over the points, but for closed contours repeats the first point again at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Point> {
        let closing = if self.is_closed {
            self.points.first()
        } else {
            None
        };
        self.points.iter().chain(closing)
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for Contour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

/// Closed contour (ring). The first point is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points, repeating the first point at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter().chain(self.points.first())
    }
}

impl<P: CartesianPoint2d> ClosedContour<P> {
    /// Creates a contour from a ring that may repeat its first point at the end, as GeoJSON rings do. The duplicate
    /// is dropped. A ring that is not explicitly closed is taken as implicitly closed.
    pub fn from_ring(mut points: Vec<P>) -> Self {
        let is_explicitly_closed = points.len() > 1
            && match (points.first(), points.last()) {
                (Some(first), Some(last)) => first.equal(last),
                _ => false,
            };
        if is_explicitly_closed {
            points.pop();
        }

        Self { points }
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for ClosedContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2d, Rect};

    #[test]
    fn iter_points_closing() {
        let contour = Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 2);
        assert_eq!(
            *contour.iter_points_closing().last().unwrap(),
            Point2d::new(1.0, 1.0)
        );

        let contour = ClosedContour::new(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 3);
        assert_eq!(
            *contour.iter_points_closing().last().unwrap(),
            Point2d::new(0.0, 0.0)
        );

        let contour = ClosedContour::<Point2d>::new(vec![]);
        assert_eq!(contour.iter_points_closing().count(), 0);
    }

    #[test]
    fn from_ring() {
        let ring = ClosedContour::from_ring(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(0.0, 0.0),
        ]);
        assert_eq!(ring.points.len(), 3);

        let not_closed = ClosedContour::from_ring(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(1.0, 0.0),
        ]);
        assert_eq!(not_closed, ring);

        let single = ClosedContour::from_ring(vec![Point2d::new(1.0, 1.0)]);
        assert_eq!(single.points.len(), 1);
    }

    #[test]
    fn into_closed() {
        let points = vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)];
        assert!(Contour::open(points.clone()).into_closed().is_none());
        assert_eq!(
            Contour::closed(points.clone()).into_closed(),
            Some(ClosedContour::new(points))
        );
    }

    #[test]
    fn bounding_rectangle() {
        let contour = Contour::open(vec![
            Point2d::new(102.0, 0.0),
            Point2d::new(103.0, 1.0),
            Point2d::new(104.0, 0.0),
            Point2d::new(105.0, 1.0),
        ]);
        assert_eq!(
            contour.bounding_rectangle(),
            Some(Rect::new(102.0, 0.0, 105.0, 1.0))
        );
        assert_eq!(Contour::<Point2d>::open(vec![]).bounding_rectangle(), None);
    }
}
