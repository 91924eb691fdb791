use crate::cartesian::CartesianPoint2d;
use crate::contour::ClosedContour;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// Area geometry in 2d cartesian coordinates that can tell whether a point is inside it.
///
/// The test is an even-odd ray casting without any tolerance. Classification of points lying exactly on a boundary is
/// whatever the floating point arithmetic yields for them, so it is not guaranteed to be stable. Shared vertices of
/// adjacent edges are never counted twice.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d;

    /// Returns true if the `point` lies inside the area.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;
}

impl<P: CartesianPoint2d> CartesianPolygon for ClosedContour<P> {
    type Point = P;

    fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Other: CartesianPoint2d<Num = P::Num>,
    {
        let x = point.x();
        let y = point.y();
        let mut inside = false;

        let Some(mut prev) = self.points.last() else {
            return false;
        };

        for curr in &self.points {
            if (curr.y() > y) != (prev.y() > y) {
                let x_edge =
                    (prev.x() - curr.x()) * (y - curr.y()) / (prev.y() - curr.y()) + curr.x();
                if x < x_edge {
                    inside = !inside;
                }
            }

            prev = curr;
        }

        inside
    }
}

impl<P: CartesianPoint2d> CartesianPolygon for Polygon<P> {
    type Point = P;

    fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Other: CartesianPoint2d<Num = P::Num>,
    {
        self.outer_contour.contains_point(point)
            && !self
                .inner_contours
                .iter()
                .any(|hole| hole.contains_point(point))
    }
}

impl<P: CartesianPoint2d> CartesianPolygon for MultiPolygon<P> {
    type Point = P;

    fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Other: CartesianPoint2d<Num = P::Num>,
    {
        self.parts.iter().any(|polygon| polygon.contains_point(point))
    }
}
