//! See [`MultiPoint`].

use crate::cartesian::CartesianPoint2d;
use crate::geometry::CartesianGeometry2d;
use serde::{Deserialize, Serialize};

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}

impl<P> MultiPoint<P> {
    /// Returns the points of the set.
    pub fn points(&self) -> &[P] {
        &self.0
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for MultiPoint<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.0.iter()
    }
}
