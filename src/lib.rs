//! Monte Carlo area estimation for planar regions.
//!
//! `areal` measures the area of a planar region by plain rejection sampling:
//! draw points uniformly from an axis-aligned rectangle, count how many land
//! inside the region, and scale the hit fraction by the rectangle's area,
//!
//! ```text
//!            hits
//!   area ~= ------ * rect_area
//!            draws
//! ```
//!
//! The crate provides the geometric primitives ([`geom::Circle`],
//! [`geom::Rect`]), a closed membership seam ([`traits::Region`]) with an
//! intersection-of-circles region ([`intersection::CircleIntersection`]), the
//! estimator itself ([`estimator::estimate_area`]), and a sweep driver
//! ([`sweep::Sweep`]) that records how the estimate converges toward an
//! externally supplied exact area as the sample count grows.
//!
//! The statistical error of the estimate shrinks like 1/sqrt(n). Every
//! sampling entry point takes `&mut R where R: rand::Rng`, so callers choose
//! between entropy seeding (`rand::thread_rng`) and fixed seeds for
//! reproducible runs.
//!
//! # Example
//!
//! Estimate the area of the intersection of three mutually overlapping
//! circles, then compare against the closed-form value:
//!
//! ```rust
//! use areal::prelude::*;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let region = CircleIntersection::new(vec![
//!     Circle::new(1.0, 1.0, 1.0).unwrap(),
//!     Circle::new(1.5, 2.0, 1.25_f64.sqrt()).unwrap(),
//!     Circle::new(2.0, 1.5, 1.25_f64.sqrt()).unwrap(),
//! ])
//! .unwrap();
//!
//! // The sampling rectangle must contain the whole region, otherwise the
//! // estimate converges to the clipped area instead.
//! let rect = Rect::new(0.0, 0.0, 3.2, 3.2).unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(0xABCD);
//! let est = estimate_area(&region, &rect, 100_000, &mut rng);
//!
//! // Closed form for this configuration: PI/4 + 1.25 * asin(0.8) - 1
//! let exact = std::f64::consts::FRAC_PI_4 + 1.25 * 0.8_f64.asin() - 1.0;
//! assert!(relative_error(est, exact).unwrap() < 0.05);
//! ```
//!
//! # Feature flags
//!
//! - `serde1`: de/serialization of geometry types, sweep configuration,
//!   records, and errors via serde.
#![warn(missing_docs)]

use doc_comment::doctest;
doctest!("../README.md");

/// Implements [`Display`](std::fmt::Display) for types that implement
/// `From<&Self> for String`.
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl std::fmt::Display for $kind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

pub mod estimator;
pub mod geom;
pub mod intersection;
pub mod prelude;
pub mod sweep;
pub mod traits;

mod test;
