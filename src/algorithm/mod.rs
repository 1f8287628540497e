//! # Algorithms
pub mod two_phase;
pub(crate) mod utilities;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// No point satisfies all constraints.
    Infeasible,
    /// An optimal point, together with the value of the objective function in that point.
    Optimal {
        /// Value of each decision variable.
        point: Vec<F>,
        /// The objective function, constant term included, evaluated at `point`.
        value: F,
    },
    /// The objective function can be improved without bound.
    Unbounded,
}

impl<F: Copy> OptimizationResult<F> {
    /// Whether an optimum was found.
    pub fn is_optimal(&self) -> bool {
        matches!(self, OptimizationResult::Optimal { .. })
    }

    /// The optimal point, if any.
    pub fn point(&self) -> Option<&[F]> {
        match self {
            OptimizationResult::Optimal { point, .. } => Some(point),
            _ => None,
        }
    }

    /// The optimal objective value, if any.
    pub fn value(&self) -> Option<F> {
        match self {
            OptimizationResult::Optimal { value, .. } => Some(*value),
            _ => None,
        }
    }
}
