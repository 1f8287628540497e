//! # Error reporting
//!
//! Problems that prevent the solver from producing one of the three algorithmic outcomes.
//!
//! Infeasible and unbounded problems are not errors: they are legitimate results and are reported
//! through `OptimizationResult`. The errors in this module are either contract violations by the
//! caller, detected before any work is done, or signs of numerical trouble inside the algorithm.
use thiserror::Error;

/// Where in the problem a value that is not finite was found.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Location {
    /// A coefficient of the objective function.
    ObjectiveCoefficient(usize),
    /// The constant term of the objective function.
    ObjectiveConstant,
    /// A left-hand side coefficient of a constraint, as `(constraint, variable)`.
    ConstraintCoefficient(usize, usize),
    /// The constant term on the left-hand side of a constraint.
    ConstraintConstant(usize),
    /// The right-hand side of a constraint.
    ConstraintValue(usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Location::ObjectiveCoefficient(j) => write!(f, "objective coefficient {}", j),
            Location::ObjectiveConstant => write!(f, "objective constant term"),
            Location::ConstraintCoefficient(i, j) => write!(f, "coefficient {} of constraint {}", j, i),
            Location::ConstraintConstant(i) => write!(f, "constant term of constraint {}", i),
            Location::ConstraintValue(i) => write!(f, "right-hand side of constraint {}", i),
        }
    }
}

/// Reasons why a linear program could not be solved.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The objective function has no coefficients.
    #[error("the objective function has no variables")]
    NoVariables,
    /// No constraints were provided.
    #[error("at least one constraint is needed")]
    NoConstraints,
    /// A constraint has a different number of coefficients than the objective function.
    #[error("constraint {constraint} has {found} coefficients, the objective function has {expected}")]
    DimensionMismatch {
        /// Index of the offending constraint.
        constraint: usize,
        /// Number of coefficients of the objective function.
        expected: usize,
        /// Number of coefficients of the constraint.
        found: usize,
    },
    /// Two expressions that should be combined have different lengths.
    #[error("cannot combine expressions over {left} and {right} variables")]
    ExpressionLengthMismatch {
        /// Number of coefficients of the left expression.
        left: usize,
        /// Number of coefficients of the right expression.
        right: usize,
    },
    /// A value in the problem is NaN or infinite.
    #[error("{0} is not finite")]
    NonFinite(Location),
    /// The tolerance is not a positive, finite number.
    #[error("epsilon should be positive and finite")]
    InvalidEpsilon,
    /// The pivot loop didn't reach a terminal state within the configured number of pivots.
    ///
    /// The anti cycling rule should prevent this, so it signals numerical trouble rather than a
    /// property of the problem.
    #[error("no terminal state was reached within {0} pivots")]
    MaxIterationsExceeded(usize),
    /// The first phase found a column with negative artificial cost but no row to pivot on.
    ///
    /// The sum of the artificial variables is bounded from below by zero, so this can only be the
    /// result of accumulated rounding errors.
    #[error("the artificial objective appears unbounded, which indicates numerical breakdown")]
    ArtificialUnbounded,
}
