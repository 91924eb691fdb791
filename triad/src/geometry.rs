//! Geometry trait and the [`Geom`] enum that can hold any of the supported geometries.

use crate::cartesian::{CartesianPoint2d, CartesianPolygon, Rect};
use crate::contour::Contour;
use crate::geometry_type::GeometryKind;
use crate::multi_contour::MultiContour;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Geometry in 2d cartesian coordinates.
pub trait CartesianGeometry2d {
    /// Type of the points of the geometry.
    type Point: CartesianPoint2d;

    /// Iterates over all the points of the geometry, in the order they are stored.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Bounding rectangle of the geometry. Returns `None` if the geometry has no points.
    fn bounding_rectangle(&self) -> Option<Rect<<Self::Point as CartesianPoint2d>::Num>> {
        Rect::from_points(self.iter_points())
    }

    /// Expands the `rect` to include all the points of the geometry. An empty geometry returns the `rect` unchanged.
    fn expand_rect(
        &self,
        rect: Rect<<Self::Point as CartesianPoint2d>::Num>,
    ) -> Rect<<Self::Point as CartesianPoint2d>::Num> {
        self.iter_points().fold(rect, |rect, p| rect.expand(p))
    }
}

/// Any of the supported geometries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Point geometry.
    Point(P),
    /// MultiPoint geometry.
    MultiPoint(MultiPoint<P>),
    /// Contour (line string) geometry.
    Contour(Contour<P>),
    /// MultiContour (multi line string) geometry.
    MultiContour(MultiContour<P>),
    /// Polygon geometry.
    Polygon(Polygon<P>),
    /// MultiPolygon geometry.
    MultiPolygon(MultiPolygon<P>),
}

impl<P> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::LineString,
            Geom::MultiContour(_) => GeometryKind::MultiLineString,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Returns true if the geometry is a polygon or a multipolygon and the `point` is inside it.
    ///
    /// Points and lines have no area, so they never contain a point.
    pub fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Other: CartesianPoint2d<Num = P::Num>,
    {
        match self {
            Geom::Polygon(v) => v.contains_point(point),
            Geom::MultiPolygon(v) => v.contains_point(point),
            Geom::Point(_) | Geom::MultiPoint(_) | Geom::Contour(_) | Geom::MultiContour(_) => {
                false
            }
        }
    }
}

impl<P: CartesianPoint2d> CartesianGeometry2d for Geom<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        let iter: Box<dyn Iterator<Item = &'_ P> + '_> = match self {
            Geom::Point(v) => Box::new(std::iter::once(v)),
            Geom::MultiPoint(v) => Box::new(v.iter_points()),
            Geom::Contour(v) => Box::new(v.iter_points()),
            Geom::MultiContour(v) => Box::new(v.iter_points()),
            Geom::Polygon(v) => Box::new(v.iter_points()),
            Geom::MultiPolygon(v) => Box::new(v.iter_points()),
        };
        iter
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
