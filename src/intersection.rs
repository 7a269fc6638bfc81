//! Intersection of circles, the region whose area gets estimated.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::{Circle, Point, Rect, RectError};
use crate::impl_display;
use crate::traits::Region;
use itertools::Itertools;
use std::fmt;

/// The intersection of a non-empty set of circles, treated as a closed
/// region: a point is inside iff it is inside every circle.
///
/// Membership does not depend on the order the circles are given in.
///
/// # Example
///
/// ```rust
/// use areal::geom::{Circle, Point};
/// use areal::intersection::CircleIntersection;
/// use areal::traits::Region;
///
/// let lens = CircleIntersection::new(vec![
///     Circle::new(0.0, 0.0, 1.0).unwrap(),
///     Circle::new(1.0, 0.0, 1.0).unwrap(),
/// ])
/// .unwrap();
///
/// // between the centers: in both circles
/// assert!(lens.contains(&Point::new(0.5, 0.0)));
/// // in the first circle only
/// assert!(!lens.contains(&Point::new(-0.5, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct CircleIntersection {
    circles: Vec<Circle>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
/// Ways a [`CircleIntersection`] can fail to build.
pub enum CircleIntersectionError {
    /// The circles vector was empty
    CirclesEmpty,
}

impl CircleIntersection {
    /// Create a new intersection region from a set of circles.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Circle;
    /// # use areal::intersection::CircleIntersection;
    /// let region = CircleIntersection::new(vec![
    ///     Circle::new(1.0, 1.0, 1.0).unwrap(),
    ///     Circle::new(1.5, 2.0, 1.25_f64.sqrt()).unwrap(),
    ///     Circle::new(2.0, 1.5, 1.25_f64.sqrt()).unwrap(),
    /// ]);
    /// assert!(region.is_ok());
    ///
    /// // there is no intersection of zero circles
    /// assert!(CircleIntersection::new(vec![]).is_err());
    /// ```
    #[inline]
    pub fn new(
        circles: Vec<Circle>,
    ) -> Result<Self, CircleIntersectionError> {
        if circles.is_empty() {
            Err(CircleIntersectionError::CirclesEmpty)
        } else {
            Ok(CircleIntersection { circles })
        }
    }

    /// Creates a new CircleIntersection without checking whether the circles
    /// vector is non-empty.
    #[inline]
    pub fn new_unchecked(circles: Vec<Circle>) -> Self {
        CircleIntersection { circles }
    }

    /// Get the circles defining the region
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Circle;
    /// # use areal::intersection::CircleIntersection;
    /// let region = CircleIntersection::new(vec![
    ///     Circle::new(0.0, 0.0, 1.0).unwrap(),
    ///     Circle::new(1.0, 0.0, 2.0).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(region.circles().len(), 2);
    /// assert_eq!(region.circles()[1].radius(), 2.0);
    /// ```
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// The axis-aligned rectangle spanning center ± radius over all circles.
    ///
    /// The result encloses every circle, hence the intersection, so it is a
    /// valid sampling domain for area estimation. Errs when the span is
    /// degenerate, e.g. for a single radius-0 circle.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Circle;
    /// # use areal::intersection::CircleIntersection;
    /// let region = CircleIntersection::new(vec![
    ///     Circle::new(0.0, 0.0, 1.0).unwrap(),
    ///     Circle::new(2.0, 0.5, 1.0).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let rect = region.enclosing_rect().unwrap();
    /// assert_eq!(rect.x_min(), -1.0);
    /// assert_eq!(rect.y_min(), -1.0);
    /// assert_eq!(rect.x_max(), 3.0);
    /// assert_eq!(rect.y_max(), 1.5);
    /// ```
    pub fn enclosing_rect(&self) -> Result<Rect, RectError> {
        let (x_min, y_min, x_max, y_max) = self.circles.iter().fold(
            (
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |(x_min, y_min, x_max, y_max), c| {
                let x = c.center().x();
                let y = c.center().y();
                let r = c.radius();
                (
                    x_min.min(x - r),
                    y_min.min(y - r),
                    x_max.max(x + r),
                    y_max.max(y + r),
                )
            },
        );
        Rect::new(x_min, y_min, x_max, y_max)
    }
}

impl Region for CircleIntersection {
    fn contains(&self, point: &Point) -> bool {
        self.circles.iter().all(|c| c.contains(point))
    }
}

impl Default for CircleIntersection {
    fn default() -> Self {
        CircleIntersection::new_unchecked(vec![Circle::default()])
    }
}

impl From<&CircleIntersection> for String {
    fn from(region: &CircleIntersection) -> String {
        let circles = region.circles.iter().map(String::from).join(" ∩ ");
        format!("CircleIntersection({})", circles)
    }
}

impl_display!(CircleIntersection);

impl std::error::Error for CircleIntersectionError {}

impl fmt::Display for CircleIntersectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CirclesEmpty => write!(f, "circles vector was empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_basic_impls;

    const TOL: f64 = 1E-12;

    test_basic_impls!(CircleIntersection::default());

    fn three_circles() -> CircleIntersection {
        CircleIntersection::new(vec![
            Circle::new(1.0, 1.0, 1.0).unwrap(),
            Circle::new(1.5, 2.0, 1.25_f64.sqrt()).unwrap(),
            Circle::new(2.0, 1.5, 1.25_f64.sqrt()).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_circles() {
        assert_eq!(
            CircleIntersection::new(vec![]),
            Err(CircleIntersectionError::CirclesEmpty)
        );
    }

    #[test]
    fn new_accepts_a_single_circle() {
        let region =
            CircleIntersection::new(vec![Circle::default()]).unwrap();
        assert_eq!(region.circles().len(), 1);
    }

    #[test]
    fn contains_requires_every_circle() {
        let region = three_circles();

        // roughly the middle of the overlap
        assert!(region.contains(&Point::new(1.5, 1.5)));
        assert!(region.contains(&Point::new(1.2, 1.3)));

        // inside the first circle only
        assert!(!region.contains(&Point::new(0.2, 1.0)));
        // inside none
        assert!(!region.contains(&Point::new(3.0, 0.1)));
    }

    #[test]
    fn contains_includes_boundary_points() {
        let a = Circle::new(0.0, 0.0, 1.0).unwrap();
        let b = Circle::new(1.0, 0.0, 1.0).unwrap();
        let lens = CircleIntersection::new(vec![a, b]).unwrap();

        // the center of b sits exactly on the boundary of a
        assert!(lens.contains(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn singleton_matches_the_circle() {
        let c = Circle::new(0.5, -0.5, 2.0).unwrap();
        let region = CircleIntersection::new(vec![c.clone()]).unwrap();

        for pt in [
            Point::new(0.5, -0.5),
            Point::new(2.5, -0.5),
            Point::new(2.6, -0.5),
            Point::new(-1.0, 1.0),
        ] {
            assert_eq!(region.contains(&pt), c.contains(&pt));
        }
    }

    #[test]
    fn enclosing_rect_spans_all_circles() {
        let rect = three_circles().enclosing_rect().unwrap();
        let r = 1.25_f64.sqrt();

        assert::close(rect.x_min(), 0.0, TOL);
        assert::close(rect.y_min(), 0.0, TOL);
        assert::close(rect.x_max(), 2.0 + r, TOL);
        assert::close(rect.y_max(), 2.0 + r, TOL);
    }

    #[test]
    fn enclosing_rect_of_a_single_circle() {
        let region =
            CircleIntersection::new(vec![Circle::new(2.0, 3.0, 1.5).unwrap()])
                .unwrap();
        let rect = region.enclosing_rect().unwrap();

        assert::close(rect.x_min(), 0.5, TOL);
        assert::close(rect.y_min(), 1.5, TOL);
        assert::close(rect.x_max(), 3.5, TOL);
        assert::close(rect.y_max(), 4.5, TOL);
    }

    #[test]
    fn enclosing_rect_errs_on_a_degenerate_span() {
        let region =
            CircleIntersection::new(vec![Circle::new(2.0, 3.0, 0.0).unwrap()])
                .unwrap();
        assert!(region.enclosing_rect().is_err());
    }

    proptest! {
        #[test]
        fn contains_is_invariant_under_circle_order(
            params in prop::collection::vec(
                (-3.0..3.0_f64, -3.0..3.0_f64, 0.0..2.0_f64),
                1..6,
            ),
            px in -4.0..4.0_f64,
            py in -4.0..4.0_f64,
        ) {
            let circles: Vec<Circle> = params
                .iter()
                .map(|&(x, y, r)| Circle::new(x, y, r).unwrap())
                .collect();

            let fwd = CircleIntersection::new(circles.clone()).unwrap();
            let mut rev_circles = circles;
            rev_circles.reverse();
            let rev = CircleIntersection::new(rev_circles).unwrap();

            let pt = Point::new(px, py);
            assert_eq!(fwd.contains(&pt), rev.contains(&pt));
        }
    }
}
