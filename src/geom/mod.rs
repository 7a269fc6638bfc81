//! Planar geometry primitives: points, circles, and axis-aligned rectangles.
pub mod circle;
pub mod point;
pub mod rect;

pub use self::circle::{Circle, CircleError};
pub use self::point::Point;
pub use self::rect::{Rect, RectError};
