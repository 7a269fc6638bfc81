//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::estimator::estimate_area;
#[doc(no_inline)]
pub use crate::geom::*;
#[doc(no_inline)]
pub use crate::intersection::*;
#[doc(no_inline)]
pub use crate::sweep::*;
#[doc(no_inline)]
pub use crate::traits::*;
