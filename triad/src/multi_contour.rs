//! See [`MultiContour`].

use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::geometry::CartesianGeometry2d;
use serde::{Deserialize, Serialize};

/// Geometry consisting of several contours. This is the counterpart of a GeoJSON `MultiLineString`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}

impl<P> MultiContour<P> {
    /// Iterates over contours.
    pub fn contours(&self) -> impl Iterator<Item = &Contour<P>> {
        self.0.iter()
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for MultiContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.0.iter().flat_map(|c| c.iter_points())
    }
}
