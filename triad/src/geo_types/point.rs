use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use geo_types::CoordFloat;

impl<T: CoordFloat> CartesianPoint2d for geo_types::Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordFloat> NewCartesianPoint2d<T> for geo_types::Coord<T> {
    fn new(x: T, y: T) -> Self {
        geo_types::coord! { x: x, y: y }
    }
}

impl<T: CoordFloat> CartesianPoint2d for geo_types::Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl<T: CoordFloat> NewCartesianPoint2d<T> for geo_types::Point<T> {
    fn new(x: T, y: T) -> Self {
        geo_types::point!(x: x, y: y)
    }
}
