//! # Linear constraints
//!
//! A linear expression, a relationship and a right-hand side value.
use crate::data::linear_program::elements::Relationship;
use crate::data::linear_program::expression::LinearExpression;
use crate::data::number_types::traits::Scalar;
use crate::error::{Location, SolveError};

/// A constraint of the form `a · x + c (<=|=|>=) b`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearConstraint<F> {
    left_hand_side: LinearExpression<F>,
    relationship: Relationship,
    value: F,
}

impl<F: Scalar> LinearConstraint<F> {
    /// Create a constraint `coefficients · x (<=|=|>=) value`.
    pub fn new(coefficients: Vec<F>, relationship: Relationship, value: F) -> Self {
        Self::from_expression(LinearExpression::new(coefficients, F::zero()), relationship, value)
    }

    /// Create a constraint with an affine left-hand side.
    pub fn from_expression(
        left_hand_side: LinearExpression<F>,
        relationship: Relationship,
        value: F,
    ) -> Self {
        Self { left_hand_side, relationship, value }
    }

    /// Create a constraint with variables on both sides.
    ///
    /// The constraint `l · x + lc (<=|=|>=) r · x + rc` is stored as
    /// `(l - r) · x + (lc - rc) (<=|=|>=) 0`.
    ///
    /// # Errors
    ///
    /// If the two expressions aren't defined over the same number of variables.
    pub fn from_expressions(
        left_hand_side: &LinearExpression<F>,
        relationship: Relationship,
        right_hand_side: &LinearExpression<F>,
    ) -> Result<Self, SolveError> {
        let difference = left_hand_side.subtract(right_hand_side)?;
        Ok(Self::from_expression(difference, relationship, F::zero()))
    }

    /// Left-hand side coefficients.
    pub fn coefficients(&self) -> &[F] {
        self.left_hand_side.coefficients()
    }

    /// The left-hand side, including its constant term.
    pub fn left_hand_side(&self) -> &LinearExpression<F> {
        &self.left_hand_side
    }

    /// Type of (in)equality.
    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    /// The right-hand side value.
    pub fn value(&self) -> F {
        self.value
    }

    /// Right-hand side after moving the left-hand side constant over.
    pub fn constant_free_value(&self) -> F {
        self.value - self.left_hand_side.constant_term()
    }

    /// Whether a point satisfies this constraint, within a tolerance.
    pub fn is_satisfied_by(&self, point: &[F], epsilon: F) -> bool {
        let left = self.left_hand_side.value(point);
        match self.relationship {
            Relationship::Leq => left <= self.value + epsilon,
            Relationship::Eq => (left - self.value).abs() <= epsilon,
            Relationship::Geq => left >= self.value - epsilon,
        }
    }

    /// Rewrite such that the left-hand side has no constant and the right-hand side is nonnegative.
    ///
    /// If the right-hand side is negative, both sides get multiplied by `-1` and the relationship
    /// is opposed.
    ///
    /// # Return value
    ///
    /// Tuple `(coefficients, relationship, value)` with `value >= 0`.
    pub(crate) fn normalize(&self) -> (Vec<F>, Relationship, F) {
        let value = self.constant_free_value();
        if value < F::zero() {
            let coefficients = self.coefficients().iter().map(|&c| -c).collect();
            (coefficients, self.relationship.oppose(), -value)
        } else {
            (self.coefficients().to_vec(), self.relationship, value)
        }
    }

    /// Check that all values are finite.
    ///
    /// # Arguments
    ///
    /// * `index`: Index of this constraint in the problem, used for reporting.
    pub(crate) fn check_finite(&self, index: usize) -> Result<(), SolveError> {
        self.left_hand_side.check_finite(
            |j| Location::ConstraintCoefficient(index, j),
            Location::ConstraintConstant(index),
        )?;
        if !self.value.is_finite() {
            return Err(SolveError::NonFinite(Location::ConstraintValue(index)));
        }

        Ok(())
    }
}
