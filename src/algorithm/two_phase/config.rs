//! # Solver configuration
use crate::data::number_types::traits::Scalar;
use crate::error::SolveError;

/// Number of pivots, over both phases, after which the solver gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings of a `SimplexSolver`.
///
/// Built with the `with_*` methods, starting from the default:
///
/// ```
/// use dense_simplex::algorithm::two_phase::config::SolverConfig;
///
/// let config = SolverConfig::<f64>::default()
///     .with_epsilon(1e-9)
///     .with_restrict_to_non_negative(false);
/// assert_eq!(config.max_iterations(), 10_000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    epsilon: F,
    max_iterations: usize,
    restrict_to_non_negative: bool,
}

impl<F: Scalar> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: F::default_epsilon(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restrict_to_non_negative: true,
        }
    }
}

impl<F: Scalar> SolverConfig<F> {
    /// Tolerance used for all comparisons with zero.
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Maximum number of pivots before `SolveError::MaxIterationsExceeded` is returned.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Whether all decision variables are implicitly bounded below by zero.
    ///
    /// If not, each variable is replaced by the difference of two nonnegative variables.
    pub fn with_restrict_to_non_negative(mut self, restrict_to_non_negative: bool) -> Self {
        self.restrict_to_non_negative = restrict_to_non_negative;
        self
    }

    /// Tolerance used for all comparisons with zero.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Maximum number of pivots, over both phases.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Whether all decision variables are nonnegative.
    pub fn restrict_to_non_negative(&self) -> bool {
        self.restrict_to_non_negative
    }

    pub(crate) fn validate(&self) -> Result<(), SolveError> {
        if self.epsilon > F::zero() && self.epsilon.is_finite() {
            Ok(())
        } else {
            Err(SolveError::InvalidEpsilon)
        }
    }
}
