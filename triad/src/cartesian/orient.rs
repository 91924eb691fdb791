use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points, i.e. on which side of the directed line `p -> q` the point `r`
    /// lies.
    ///
    /// Coordinates that are not comparable (NaN) are reported as [`Orientation::Collinear`].
    pub fn triplet<Num: num_traits::Float>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        match cross_product(p, q, r).partial_cmp(&Num::zero()) {
            Some(Ordering::Less) => Self::Clockwise,
            Some(Ordering::Greater) => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}

/// Z component of the cross product of vectors `p -> q` and `p -> r`, which is twice the signed area of the triangle
/// `(p, q, r)`.
///
/// * `< 0` - `r` is to the right of `p -> q` (clockwise turn)
/// * `> 0` - `r` is to the left of `p -> q` (counterclockwise turn)
/// * `0` - the points are collinear
pub fn cross_product<Num: num_traits::Float>(
    p: &impl CartesianPoint2d<Num = Num>,
    q: &impl CartesianPoint2d<Num = Num>,
    r: &impl CartesianPoint2d<Num = Num>,
) -> Num {
    (q.x() - p.x()) * (r.y() - p.y()) - (q.y() - p.y()) * (r.x() - p.x())
}
