//! Convex hull of a set of points.
//!
//! The hull is built with the monotone chain algorithm (A. M. Andrew, 1979): the points are sorted lexicographically,
//! then the lower and the upper chains are built by walking the sorted points in both directions and dropping every
//! point that does not make a left turn.

use crate::cartesian::{cross_product, CartesianPoint2d};
use num_traits::{Float, Zero};
use std::cmp::Ordering;

/// Returns the convex hull of the `points`.
///
/// The hull vertices are returned in counterclockwise order, starting from the lexicographically smallest point
/// (smallest `x`, then smallest `y`). The hull is open: the first point is not repeated at the end.
///
/// * Sets of 0, 1 or 2 points are returned unchanged.
/// * Collinear points are not included into the hull, so if all the points lie on one line, only the two extreme
///   points are returned.
/// * Duplicate points are allowed.
///
/// The input slice is not modified. NaN coordinates are sorted after all other values, so they never make the
/// function panic, but the hull of points with NaN coordinates is meaningless.
pub fn convex_hull<P>(points: &[P]) -> Vec<P>
where
    P: CartesianPoint2d + Clone,
{
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut sorted: Vec<&P> = points.iter().collect();
    sorted.sort_by(|a, b| lexicographic_cmp(*a, *b));

    let mut lower = build_chain(sorted.iter().copied());
    let mut upper = build_chain(sorted.iter().rev().copied());

    // The last point of each chain is the first point of the other one.
    lower.pop();
    upper.pop();

    let hull: Vec<P> = lower.into_iter().chain(upper).cloned().collect();
    log::trace!(
        "Convex hull of {} points has {} vertices",
        points.len(),
        hull.len()
    );

    hull
}

fn lexicographic_cmp<P: CartesianPoint2d>(a: &P, b: &P) -> Ordering {
    coordinate_cmp(a.x(), b.x()).then_with(|| coordinate_cmp(a.y(), b.y()))
}

// Total order with NaN after every number.
fn coordinate_cmp<N: Float>(a: N, b: N) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn build_chain<'a, P: CartesianPoint2d + 'a>(points: impl Iterator<Item = &'a P>) -> Vec<&'a P> {
    let mut chain: Vec<&P> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && cross_product(chain[chain.len() - 2], chain[chain.len() - 1], p)
                <= P::Num::zero()
        {
            chain.pop();
        }
        chain.push(p);
    }

    chain
}
