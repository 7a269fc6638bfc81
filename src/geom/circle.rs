//! Circle (closed disc) region.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::impl_display;
use crate::traits::Region;
use std::fmt;

/// A circle with a given center and radius, treated as a closed disc: points
/// on the boundary are inside.
///
/// A radius of zero is allowed and gives a degenerate circle containing
/// exactly its center.
///
/// # Example
///
/// ```rust
/// use areal::geom::{Circle, Point};
/// use areal::traits::Region;
///
/// let c = Circle::new(1.0, 1.0, 2.0).unwrap();
///
/// assert!(c.contains(&Point::new(1.0, 3.0)));
/// assert!(!c.contains(&Point::new(1.0, 3.1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
/// Ways a [`Circle`] can fail to build.
pub enum CircleError {
    /// A center coordinate was infinite or NaN
    CenterNotFinite {
        /// given center x coordinate
        x: f64,
        /// given center y coordinate
        y: f64,
    },
    /// The radius was infinite or NaN
    RadiusNotFinite {
        /// given radius
        radius: f64,
    },
    /// The radius was less than zero
    NegativeRadius {
        /// given radius
        radius: f64,
    },
}

impl Circle {
    /// Create a new circle centered on (x, y).
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Circle;
    /// let c = Circle::new(1.5, 2.0, 1.25_f64.sqrt()).unwrap();
    /// assert_eq!(c.center().x(), 1.5);
    ///
    /// // degenerate circles are fine
    /// assert!(Circle::new(0.0, 0.0, 0.0).is_ok());
    ///
    /// // negative or non-finite parameters are not
    /// assert!(Circle::new(0.0, 0.0, -1.0).is_err());
    /// assert!(Circle::new(f64::NAN, 0.0, 1.0).is_err());
    /// assert!(Circle::new(0.0, 0.0, f64::INFINITY).is_err());
    /// ```
    #[inline]
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self, CircleError> {
        if !x.is_finite() || !y.is_finite() {
            Err(CircleError::CenterNotFinite { x, y })
        } else if !radius.is_finite() {
            Err(CircleError::RadiusNotFinite { radius })
        } else if radius < 0.0 {
            Err(CircleError::NegativeRadius { radius })
        } else {
            Ok(Circle::new_unchecked(x, y, radius))
        }
    }

    /// Creates a new Circle without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(x: f64, y: f64, radius: f64) -> Self {
        Circle {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Get the center point
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Circle;
    /// let c = Circle::new(2.0, 1.5, 1.0).unwrap();
    /// assert_eq!(c.center().y(), 1.5);
    /// ```
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Get the radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Region for Circle {
    fn contains(&self, point: &Point) -> bool {
        let dx = point.x() - self.center.x();
        let dy = point.y() - self.center.y();
        dx.mul_add(dx, dy * dy) <= self.radius * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new_unchecked(0.0, 0.0, 1.0)
    }
}

impl From<&Circle> for String {
    fn from(c: &Circle) -> String {
        format!("Circle(({}, {}), r: {})", c.center.x(), c.center.y(), c.radius)
    }
}

impl_display!(Circle);

impl std::error::Error for CircleError {}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterNotFinite { x, y } => {
                write!(f, "non-finite center: ({}, {})", x, y)
            }
            Self::RadiusNotFinite { radius } => {
                write!(f, "non-finite radius: {}", radius)
            }
            Self::NegativeRadius { radius } => {
                write!(f, "radius ({}) must not be negative", radius)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;

    const TOL: f64 = 1E-12;

    test_basic_impls!(Circle::default());

    #[test]
    fn new() {
        let c = Circle::new(1.0, 2.0, 3.0).unwrap();
        assert::close(c.center().x(), 1.0, TOL);
        assert::close(c.center().y(), 2.0, TOL);
        assert::close(c.radius(), 3.0, TOL);
    }

    #[test]
    fn new_accepts_zero_radius() {
        assert!(Circle::new(1.0, 1.0, 0.0).is_ok());
        assert!(Circle::new(1.0, 1.0, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn new_rejects_negative_radius() {
        assert!(Circle::new(1.0, 1.0, -f64::MIN_POSITIVE).is_err());
        assert!(Circle::new(1.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn new_rejects_non_finite_params() {
        assert!(Circle::new(f64::NAN, 0.0, 1.0).is_err());
        assert!(Circle::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(Circle::new(f64::NEG_INFINITY, 0.0, 1.0).is_err());
        assert!(Circle::new(0.0, 0.0, f64::NAN).is_err());
        assert!(Circle::new(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn contains_is_a_closed_test() {
        let c = Circle::new(0.0, 0.0, 1.0).unwrap();

        assert!(c.contains(&Point::new(0.0, 0.0)));
        assert!(c.contains(&Point::new(0.5, -0.5)));
        // exactly on the boundary
        assert!(c.contains(&Point::new(1.0, 0.0)));
        assert!(c.contains(&Point::new(0.0, -1.0)));

        assert!(!c.contains(&Point::new(1.0, 1.0)));
        assert!(!c.contains(&Point::new(0.0, 1.0 + 1e-12)));
    }

    #[test]
    fn degenerate_circle_contains_only_its_center() {
        let c = Circle::new(2.0, 3.0, 0.0).unwrap();

        assert!(c.contains(&Point::new(2.0, 3.0)));
        assert!(!c.contains(&Point::new(2.0, 3.0 + 1e-15)));
        assert!(!c.contains(&Point::new(2.0 - 1e-15, 3.0)));
    }
}
