//! Trait seams shared across the crate.
use crate::geom::Point;

/// A planar region with a closed membership test.
///
/// `contains` is a pure predicate: boundary points count as inside, there are
/// no side effects, and any finite point is a valid query. The
/// rejection-sampling estimator only ever asks this one question of a region,
/// so anything implementing `Region` can be measured by
/// [`estimate_area`](crate::estimator::estimate_area).
///
/// # Example
///
/// ```rust
/// use areal::geom::{Circle, Point};
/// use areal::traits::Region;
///
/// let unit = Circle::new(0.0, 0.0, 1.0).unwrap();
///
/// assert!(unit.contains(&Point::new(0.5, 0.5)));
/// // Boundary points are inside
/// assert!(unit.contains(&Point::new(1.0, 0.0)));
/// assert!(!unit.contains(&Point::new(1.0, 1.0)));
/// ```
pub trait Region {
    /// Returns `true` if `point` lies inside the region, boundary included.
    fn contains(&self, point: &Point) -> bool;
}
