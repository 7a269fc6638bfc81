//! Axis-aligned rectangle, used both as a region and as a sampling domain.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::impl_display;
use crate::traits::Region;
use std::fmt;

/// An axis-aligned rectangle on (x_min, x_max) × (y_min, y_max), treated as a
/// closed region: points on the edges are inside.
///
/// `Rect` doubles as the bounding box that points are drawn from during
/// estimation, so both intervals must be non-degenerate.
///
/// # Example
///
/// ```rust
/// use areal::geom::{Point, Rect};
/// use areal::traits::Region;
///
/// let rect = Rect::new(0.0, 0.0, 3.2, 3.2).unwrap();
///
/// assert!(rect.contains(&Point::new(3.2, 1.0)));
/// assert!(!rect.contains(&Point::new(3.3, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
/// Ways a [`Rect`] can fail to build.
pub enum RectError {
    /// An x bound was infinite or NaN
    XBoundsNotFinite {
        /// given lower x bound
        x_min: f64,
        /// given upper x bound
        x_max: f64,
    },
    /// A y bound was infinite or NaN
    YBoundsNotFinite {
        /// given lower y bound
        y_min: f64,
        /// given upper y bound
        y_max: f64,
    },
    /// x_min must be less than x_max
    InvalidXInterval {
        /// given lower x bound
        x_min: f64,
        /// given upper x bound
        x_max: f64,
    },
    /// y_min must be less than y_max
    InvalidYInterval {
        /// given lower y bound
        y_min: f64,
        /// given upper y bound
        y_max: f64,
    },
}

impl Rect {
    /// Create a new rectangle from its lower-left and upper-right corners.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Rect;
    /// let rect = Rect::new(1.0, 1.0, 2.0, 2.0).unwrap();
    /// assert_eq!(rect.area(), 1.0);
    ///
    /// // empty and inverted intervals are rejected
    /// assert!(Rect::new(1.0, 1.0, 1.0, 2.0).is_err());
    /// assert!(Rect::new(0.0, 2.0, 1.0, 1.0).is_err());
    ///
    /// // as are non-finite bounds
    /// assert!(Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    /// ```
    #[inline]
    pub fn new(
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<Self, RectError> {
        if !x_min.is_finite() || !x_max.is_finite() {
            Err(RectError::XBoundsNotFinite { x_min, x_max })
        } else if !y_min.is_finite() || !y_max.is_finite() {
            Err(RectError::YBoundsNotFinite { y_min, y_max })
        } else if x_max <= x_min {
            Err(RectError::InvalidXInterval { x_min, x_max })
        } else if y_max <= y_min {
            Err(RectError::InvalidYInterval { y_min, y_max })
        } else {
            Ok(Rect::new_unchecked(x_min, y_min, x_max, y_max))
        }
    }

    /// Creates a new Rect without checking whether the bounds are valid.
    #[inline]
    pub fn new_unchecked(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Get the lower x bound
    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Get the lower y bound
    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Get the upper x bound
    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Get the upper y bound
    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width of the x interval
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Rect;
    /// let rect = Rect::new(0.0, 0.0, 3.2, 1.0).unwrap();
    /// assert_eq!(rect.width(), 3.2);
    /// ```
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the y interval
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Area of the rectangle
    ///
    /// # Example
    ///
    /// ```rust
    /// # use areal::geom::Rect;
    /// let rect = Rect::new(0.0, 0.0, 3.2, 3.2).unwrap();
    /// assert!((rect.area() - 10.24).abs() < 1E-12);
    /// ```
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl Region for Rect {
    fn contains(&self, point: &Point) -> bool {
        self.x_min <= point.x()
            && point.x() <= self.x_max
            && self.y_min <= point.y()
            && point.y() <= self.y_max
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::new_unchecked(0.0, 0.0, 1.0, 1.0)
    }
}

impl From<&Rect> for String {
    fn from(rect: &Rect) -> String {
        format!(
            "Rect(({}, {}), ({}, {}))",
            rect.x_min, rect.y_min, rect.x_max, rect.y_max
        )
    }
}

impl_display!(Rect);

impl std::error::Error for RectError {}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XBoundsNotFinite { x_min, x_max } => {
                write!(f, "non-finite x bounds: [{}, {}]", x_min, x_max)
            }
            Self::YBoundsNotFinite { y_min, y_max } => {
                write!(f, "non-finite y bounds: [{}, {}]", y_min, y_max)
            }
            Self::InvalidXInterval { x_min, x_max } => {
                write!(f, "x_min ({}) must be less than x_max ({})", x_min, x_max)
            }
            Self::InvalidYInterval { y_min, y_max } => {
                write!(f, "y_min ({}) must be less than y_max ({})", y_min, y_max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;

    const TOL: f64 = 1E-12;

    test_basic_impls!(Rect::default());

    #[test]
    fn new() {
        let rect = Rect::new(1.0, 1.5, 2.0, 3.5).unwrap();
        assert::close(rect.x_min(), 1.0, TOL);
        assert::close(rect.y_min(), 1.5, TOL);
        assert::close(rect.x_max(), 2.0, TOL);
        assert::close(rect.y_max(), 3.5, TOL);
        assert::close(rect.width(), 1.0, TOL);
        assert::close(rect.height(), 2.0, TOL);
        assert::close(rect.area(), 2.0, TOL);
    }

    #[test]
    fn new_rejects_empty_intervals() {
        assert!(Rect::new(1.0, 0.0, 1.0, 1.0).is_err());
        assert!(Rect::new(0.0, 1.0, 1.0, 1.0).is_err());
        assert!(Rect::new(2.0, 0.0, 1.0, 1.0).is_err());
        assert!(Rect::new(0.0, 2.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn new_rejects_non_finite_bounds() {
        assert!(Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(Rect::new(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Rect::new(0.0, 0.0, 1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn contains_is_a_closed_test() {
        let rect = Rect::new(1.0, 1.0, 2.0, 2.0).unwrap();

        assert!(rect.contains(&Point::new(1.5, 1.5)));
        // corners and edges are inside
        assert!(rect.contains(&Point::new(1.0, 1.0)));
        assert!(rect.contains(&Point::new(2.0, 2.0)));
        assert!(rect.contains(&Point::new(1.0, 2.0)));
        assert!(rect.contains(&Point::new(1.5, 2.0)));

        assert!(!rect.contains(&Point::new(0.5, 1.5)));
        assert!(!rect.contains(&Point::new(1.5, 2.0 + 1e-12)));
    }

    #[test]
    fn default_is_the_unit_square() {
        let rect = Rect::default();
        assert::close(rect.area(), 1.0, TOL);
        assert!(rect.contains(&Point::new(0.0, 0.0)));
        assert!(rect.contains(&Point::new(1.0, 1.0)));
    }
}
