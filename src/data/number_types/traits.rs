//! # Traits
//!
//! The simplex algorithm is defined over an ordered field. Floats only approximate one, which is
//! why a `Scalar` also carries a default tolerance that comparisons are made with.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// A floating point type the solver can compute with.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + Sum + Debug + Display + Send + Sync + 'static {
    /// Tolerance used when the caller doesn't provide one.
    ///
    /// Reduced costs above `-epsilon` count as optimal, pivot candidates need an entry above
    /// `epsilon` and a phase one value below `epsilon` counts as zero.
    fn default_epsilon() -> Self;
}

impl Scalar for f64 {
    /// `1e-6`
    fn default_epsilon() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    /// `1e-4`, single precision has only about seven significant digits.
    fn default_epsilon() -> Self {
        1e-4
    }
}
