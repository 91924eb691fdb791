//! Conversions from the [`geo_types`](::geo_types) geometries.
//!
//! `geo_types` points and coordinates implement [`CartesianPoint2d`](crate::CartesianPoint2d), so they can be used
//! with the algorithms of the crate directly. Lines and polygons are converted into the native geometries.

mod point;
mod polygon;
