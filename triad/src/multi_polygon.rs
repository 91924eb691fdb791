//! See [`MultiPolygon`].

use crate::cartesian::CartesianPoint2d;
use crate::geometry::CartesianGeometry2d;
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> From<Polygon<P>> for MultiPolygon<P> {
    fn from(polygon: Polygon<P>) -> Self {
        Self {
            parts: vec![polygon],
        }
    }
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for MultiPolygon<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.parts.iter().flat_map(|p| p.iter_points())
    }
}
