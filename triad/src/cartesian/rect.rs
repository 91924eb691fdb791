use crate::cartesian::{CartesianPoint2d, Point2};
use crate::contour::ClosedContour;
use crate::error::TriadError;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Axis-aligned bounding rectangle.
///
/// A rectangle that has not been expanded with any point yet is *empty*: its minimums are `+inf` and its maximums are
/// `-inf`, so expanding it with the first point makes it exactly that point. See [`Rect::empty`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x.
    pub x_min: N,
    /// Minimum y.
    pub y_min: N,
    /// Maximum x.
    pub x_max: N,
    /// Maximum y.
    pub y_max: N,
}

impl Rect<f64> {
    /// Empty rectangle, `[+inf, +inf, -inf, -inf]`.
    pub const EMPTY: Self = Self {
        x_min: f64::INFINITY,
        y_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_max: f64::NEG_INFINITY,
    };

    /// Reads a GeoJSON `bbox` member.
    ///
    /// 2d boxes have 4 values `[x_min, y_min, x_max, y_max]`, 3d boxes have 6 values
    /// `[x_min, y_min, z_min, x_max, y_max, z_max]` (the z range is ignored). Values are trusted as they are.
    pub fn from_bbox(bbox: &[f64]) -> Result<Self, TriadError> {
        match *bbox {
            [x_min, y_min, x_max, y_max] | [x_min, y_min, _, x_max, y_max, _] => Ok(Self {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            _ => Err(TriadError::InvalidBbox(bbox.len())),
        }
    }
}

impl<N: Float + Debug> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates an empty rectangle, that contains no points.
    pub fn empty() -> Self {
        Self {
            x_min: N::infinity(),
            y_min: N::infinity(),
            x_max: N::neg_infinity(),
            y_max: N::neg_infinity(),
        }
    }

    /// Returns true if the rectangle was never expanded with a point.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Returns the smallest rectangle that contains both this rectangle and the `point`.
    ///
    /// None of the bounds of the result is smaller than the bounds of `self`.
    pub fn expand(&self, point: &impl CartesianPoint2d<Num = N>) -> Self {
        self.merge(Self::from_point(point))
    }

    /// Returns the smallest rectangle that contains both rectangles.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Creates a zero-size rectangle at the point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| rect.expand(p)))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns the values of the rectangle in the GeoJSON `bbox` order: `[x_min, y_min, x_max, y_max]`.
    pub fn to_bbox(&self) -> [N; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// Corners of the rectangle, counterclockwise starting from the bottom-left one.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }

    /// Converts the rectangle into a closed contour of its corners.
    pub fn into_contour(self) -> ClosedContour<Point2<N>> {
        ClosedContour::new(Vec::from(self.into_quadrangle()))
    }
}

impl<N: Float + Debug> Default for Rect<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: Float + Debug> FromIterator<Rect<N>> for Rect<N> {
    fn from_iter<T: IntoIterator<Item = Rect<N>>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |curr, rect| curr.merge(rect))
    }
}
