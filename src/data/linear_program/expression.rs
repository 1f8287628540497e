//! # Linear expressions
//!
//! An affine function of the decision variables. Used both as the objective function and as the
//! left-hand side of constraints.
use itertools::Itertools;

use crate::data::number_types::traits::Scalar;
use crate::error::{Location, SolveError};

/// Coefficients, one per decision variable, together with a constant term.
///
/// Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearExpression<F> {
    coefficients: Vec<F>,
    constant_term: F,
}

impl<F: Scalar> LinearExpression<F> {
    /// Create a new expression `coefficients · x + constant_term`.
    pub fn new(coefficients: Vec<F>, constant_term: F) -> Self {
        Self { coefficients, constant_term }
    }

    /// Coefficients of the decision variables.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// The constant term.
    pub fn constant_term(&self) -> F {
        self.constant_term
    }

    /// Number of decision variables this expression is defined over.
    pub fn nr_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate the expression.
    ///
    /// # Arguments
    ///
    /// * `point`: Value for each decision variable, should have length `self.nr_variables()`.
    ///
    /// # Panics
    ///
    /// When the length of `point` doesn't match.
    pub fn value(&self, point: &[F]) -> F {
        self.coefficients.iter()
            .zip_eq(point)
            .map(|(&coefficient, &x)| coefficient * x)
            .sum::<F>() + self.constant_term
    }

    /// Subtract another expression over the same variables.
    pub fn subtract(&self, other: &Self) -> Result<Self, SolveError> {
        if self.nr_variables() != other.nr_variables() {
            return Err(SolveError::ExpressionLengthMismatch {
                left: self.nr_variables(),
                right: other.nr_variables(),
            });
        }

        let coefficients = self.coefficients.iter()
            .zip_eq(&other.coefficients)
            .map(|(&left, &right)| left - right)
            .collect();

        Ok(Self::new(coefficients, self.constant_term - other.constant_term))
    }

    /// Check that all values are finite, reporting the first one that isn't.
    ///
    /// # Arguments
    ///
    /// * `coefficient_location`: Describes where a coefficient at a given index lives.
    /// * `constant_location`: Describes where the constant term lives.
    pub(crate) fn check_finite(
        &self,
        coefficient_location: impl Fn(usize) -> Location,
        constant_location: Location,
    ) -> Result<(), SolveError> {
        if let Some(j) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(SolveError::NonFinite(coefficient_location(j)));
        }
        if !self.constant_term.is_finite() {
            return Err(SolveError::NonFinite(constant_location));
        }

        Ok(())
    }
}
