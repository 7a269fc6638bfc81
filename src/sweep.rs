//! Sample-count sweep driver: run the estimator over a schedule of sample
//! counts and several sampling rectangles, recording the error against a
//! known exact area.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::estimator::estimate_area;
use crate::geom::Rect;
use crate::impl_display;
use crate::traits::Region;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// Relative error of an estimate against a known exact area,
/// `|estimate - exact| / exact`.
///
/// # Example
///
/// ```rust
/// use areal::sweep::{relative_error, SweepError};
///
/// assert_eq!(relative_error(0.75, 1.0), Ok(0.25));
/// assert_eq!(relative_error(1.25, 1.0), Ok(0.25));
///
/// // a zero reference area is flagged, never a silent NaN or infinity
/// assert_eq!(relative_error(1.0, 0.0), Err(SweepError::ZeroExactArea));
/// ```
pub fn relative_error(
    estimate: f64,
    exact: f64,
) -> Result<f64, SweepError> {
    if exact == 0.0 {
        Err(SweepError::ZeroExactArea)
    } else {
        Ok((estimate - exact).abs() / exact)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
/// Ways a [`Sweep`] can fail to build or a sweep cell can fail to evaluate.
pub enum SweepError {
    /// The sample-count schedule was empty
    ScheduleEmpty,
    /// The sample-count schedule was not strictly ascending
    ScheduleNotAscending {
        /// index of the first out-of-order entry
        ix: usize,
        /// schedule entry at ix
        prev: usize,
        /// schedule entry at ix + 1
        next: usize,
    },
    /// The rects vector was empty
    RectsEmpty,
    /// The exact reference area was infinite or NaN
    ExactAreaNotFinite {
        /// given exact area
        exact_area: f64,
    },
    /// The exact reference area was zero, so relative error is undefined
    ZeroExactArea,
}

/// Configuration for an estimator sweep: which sample counts to run, which
/// sampling rectangles to draw from, and the exact area to compare against.
///
/// The exact area is supplied by the caller, typically as a closed form for
/// the region at hand; it is never computed here.
///
/// # Example
///
/// ```rust
/// use areal::geom::Rect;
/// use areal::sweep::Sweep;
///
/// let sweep = Sweep::new(
///     vec![100, 1_000, 10_000],
///     vec![Rect::new(0.0, 0.0, 3.2, 3.2).unwrap()],
///     0.9445,
/// )
/// .unwrap();
/// assert_eq!(sweep.schedule().len(), 3);
///
/// // the schedule must be strictly ascending
/// assert!(Sweep::new(
///     vec![100, 100],
///     vec![Rect::default()],
///     0.9445,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Sweep {
    schedule: Vec<usize>,
    rects: Vec<Rect>,
    exact_area: f64,
}

/// The outcome of one sweep cell: one estimator run at a given sample count
/// over a given rectangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct SweepRecord {
    /// Number of points drawn
    pub n_points: usize,
    /// The area estimate
    pub estimate: f64,
    /// Relative error against the exact area, or the reason it is undefined
    pub relative_error: Result<f64, SweepError>,
}

/// All records for one schedule entry: one [`SweepRecord`] per rectangle, in
/// the configured rectangle order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct SweepRow {
    /// Number of points drawn for every record in this row
    pub n_points: usize,
    /// One record per sampling rectangle
    pub records: Vec<SweepRecord>,
}

impl Sweep {
    /// Create a new sweep configuration.
    ///
    /// The schedule must be non-empty and strictly ascending, at least one
    /// sampling rectangle must be given, and the exact area must be finite.
    /// An exact area of zero is accepted here; it makes every cell's
    /// relative error come back as [`SweepError::ZeroExactArea`].
    pub fn new(
        schedule: Vec<usize>,
        rects: Vec<Rect>,
        exact_area: f64,
    ) -> Result<Self, SweepError> {
        if schedule.is_empty() {
            return Err(SweepError::ScheduleEmpty);
        }

        schedule
            .iter()
            .tuple_windows::<(_, _)>()
            .enumerate()
            .try_for_each(|(ix, (&prev, &next))| {
                if prev >= next {
                    Err(SweepError::ScheduleNotAscending { ix, prev, next })
                } else {
                    Ok(())
                }
            })?;

        if rects.is_empty() {
            Err(SweepError::RectsEmpty)
        } else if !exact_area.is_finite() {
            Err(SweepError::ExactAreaNotFinite { exact_area })
        } else {
            Ok(Sweep {
                schedule,
                rects,
                exact_area,
            })
        }
    }

    /// Creates a new Sweep without checking whether the configuration is
    /// valid.
    #[inline]
    pub fn new_unchecked(
        schedule: Vec<usize>,
        rects: Vec<Rect>,
        exact_area: f64,
    ) -> Self {
        Sweep {
            schedule,
            rects,
            exact_area,
        }
    }

    /// Get the sample-count schedule
    #[inline]
    pub fn schedule(&self) -> &[usize] {
        &self.schedule
    }

    /// Get the sampling rectangles
    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Get the exact reference area
    #[inline]
    pub fn exact_area(&self) -> f64 {
        self.exact_area
    }

    /// Run the sweep: one estimator invocation per (sample count, rectangle)
    /// cell, in schedule order with the rectangles cycled inside each count.
    ///
    /// A single rng drives every cell, advancing in that row-major order, so
    /// a run is reproducible from the seed but the cells are not
    /// statistically independent of one another. A cell whose relative error
    /// is undefined carries the error in its record; the sweep itself always
    /// completes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use areal::geom::Rect;
    /// use areal::sweep::Sweep;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// // a region covering the whole sampling rectangle: every draw hits
    /// let region = Rect::new(0.0, 0.0, 2.0, 2.0).unwrap();
    /// let sweep = Sweep::new(
    ///     vec![10, 100],
    ///     vec![Rect::new(0.0, 0.0, 1.0, 1.0).unwrap()],
    ///     4.0,
    /// )
    /// .unwrap();
    ///
    /// let mut rng = SmallRng::seed_from_u64(0x1234);
    /// let rows = sweep.run(&region, &mut rng);
    ///
    /// assert_eq!(rows.len(), 2);
    /// assert_eq!(rows[1].n_points, 100);
    /// assert_eq!(rows[1].records[0].estimate, 1.0);
    /// assert_eq!(rows[1].records[0].relative_error, Ok(0.75));
    /// ```
    pub fn run<Z, R>(&self, region: &Z, rng: &mut R) -> Vec<SweepRow>
    where
        Z: Region + ?Sized,
        R: Rng,
    {
        self.schedule
            .iter()
            .map(|&n_points| {
                let records = self
                    .rects
                    .iter()
                    .map(|rect| {
                        let estimate =
                            estimate_area(region, rect, n_points, rng);
                        SweepRecord {
                            n_points,
                            estimate,
                            relative_error: relative_error(
                                estimate,
                                self.exact_area,
                            ),
                        }
                    })
                    .collect();
                SweepRow { n_points, records }
            })
            .collect()
    }
}

impl From<&Sweep> for String {
    fn from(sweep: &Sweep) -> String {
        format!(
            "Sweep({} sample counts × {} rects, exact area: {})",
            sweep.schedule.len(),
            sweep.rects.len(),
            sweep.exact_area
        )
    }
}

impl_display!(Sweep);

impl std::error::Error for SweepError {}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScheduleEmpty => write!(f, "sample schedule was empty"),
            Self::ScheduleNotAscending { ix, prev, next } => write!(
                f,
                "schedule[{}] ({}) must be less than schedule[{}] ({})",
                ix,
                prev,
                ix + 1,
                next
            ),
            Self::RectsEmpty => write!(f, "rects vector was empty"),
            Self::ExactAreaNotFinite { exact_area } => {
                write!(f, "non-finite exact area: {}", exact_area)
            }
            Self::ZeroExactArea => {
                write!(f, "exact area was zero; relative error is undefined")
            }
        }
    }
}
