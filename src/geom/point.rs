//! A point in the plane.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;

/// A point (x, y) in the plane.
///
/// Any pair of `f64`s is a point. Validation lives in the types built from
/// points ([`Circle`](crate::geom::Circle), [`Rect`](crate::geom::Rect)),
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a new point at (x, y)
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Point;
    /// let p = Point::new(1.2, -0.5);
    /// assert_eq!(p.x(), 1.2);
    /// assert_eq!(p.y(), -0.5);
    /// ```
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Get the x coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<&Point> for String {
    fn from(p: &Point) -> String {
        format!("({}, {})", p.x, p.y)
    }
}

impl_display!(Point);
