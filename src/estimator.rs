//! Rejection-sampling Monte Carlo area estimation.
use rand::Rng;

use crate::geom::{Point, Rect};
use crate::traits::Region;

/// Estimate the area of `region` by drawing `n_points` points uniformly from
/// `rect` and scaling the hit fraction by the rectangle's area,
/// `(hits / n_points) * rect.area()`.
///
/// Each point is drawn as an x coordinate from `[x_min, x_max)` followed by a
/// y coordinate from `[y_min, y_max)`, so a run is reproducible from the rng
/// seed alone. The statistical error of the estimate shrinks like
/// `1 / sqrt(n_points)`.
///
/// `rect` must contain the whole region: any part of the region outside
/// `rect` can never be hit, and the estimate converges to the area of the
/// clipped region instead.
///
/// When `n_points` is 0 the estimate is 0.0 and the rng is left untouched.
///
/// # Example
///
/// Estimating the area of the unit circle recovers π:
///
/// ```rust
/// use areal::estimator::estimate_area;
/// use areal::geom::{Circle, Rect};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let circle = Circle::new(0.0, 0.0, 1.0).unwrap();
/// let rect = Rect::new(-1.0, -1.0, 1.0, 1.0).unwrap();
///
/// let mut rng = SmallRng::seed_from_u64(0x1234);
/// let est = estimate_area(&circle, &rect, 10_000, &mut rng);
///
/// assert!((est - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn estimate_area<Z, R>(
    region: &Z,
    rect: &Rect,
    n_points: usize,
    rng: &mut R,
) -> f64
where
    Z: Region + ?Sized,
    R: Rng,
{
    if n_points == 0 {
        return 0.0;
    }

    let ux = rand_distr::Uniform::new(rect.x_min(), rect.x_max());
    let uy = rand_distr::Uniform::new(rect.y_min(), rect.y_max());

    let hits = (0..n_points)
        .filter(|_| {
            let x = rng.sample(ux);
            let y = rng.sample(uy);
            region.contains(&Point::new(x, y))
        })
        .count();

    (hits as f64 / n_points as f64) * rect.area()
}
