//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! A feasible basis is found in a first phase that minimizes the sum of artificial variables, after
//! which the second phase minimizes the actual objective function starting from that basis.
use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::config::SolverConfig;
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::{Rank, Tableau};
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::expression::LinearExpression;
use crate::data::number_types::traits::Scalar;
use crate::error::{Location, SolveError};

pub mod config;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Solves linear programs with the two phase Simplex method on a dense tableau.
///
/// Holds no state between calls, every call to `optimize` builds and discards its own tableau.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimplexSolver<F> {
    config: SolverConfig<F>,
}

impl<F: Scalar> SimplexSolver<F> {
    /// Create a solver with the given settings.
    pub fn new(config: SolverConfig<F>) -> Self {
        Self { config }
    }

    /// The settings used by this solver.
    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    /// Optimize an objective function subject to linear constraints.
    ///
    /// Columns enter the basis according to the `SteepestDescentAlongVariable` rule.
    ///
    /// # Arguments
    ///
    /// * `objective`: Affine function of the decision variables.
    /// * `constraints`: At least one, each over the same number of variables as the objective.
    /// * `goal`: Whether to minimize or maximize.
    ///
    /// # Return value
    ///
    /// An optimal point with its objective value, or an indication that the problem is infeasible
    /// or unbounded.
    ///
    /// # Errors
    ///
    /// If the input is malformed, or if no terminal state was reached within the pivot limit.
    pub fn optimize(
        &self,
        objective: &LinearExpression<F>,
        constraints: &[LinearConstraint<F>],
        goal: Objective,
    ) -> Result<OptimizationResult<F>, SolveError> {
        self.optimize_with::<SteepestDescentAlongVariable>(objective, constraints, goal)
    }

    /// Optimize using a specific pivot rule.
    ///
    /// See `optimize`.
    pub fn optimize_with<PR: PivotRule<F>>(
        &self,
        objective: &LinearExpression<F>,
        constraints: &[LinearConstraint<F>],
        goal: Objective,
    ) -> Result<OptimizationResult<F>, SolveError> {
        self.config.validate()?;
        validate(objective, constraints)?;

        let mut tableau = Tableau::new(
            objective,
            constraints,
            goal,
            self.config.restrict_to_non_negative(),
            self.config.epsilon(),
        );
        debug!(
            "Created tableau with {} rows and {} columns, of which {} artificial",
            tableau.nr_rows(), tableau.nr_columns(), tableau.nr_artificial_variables(),
        );
        trace!("{}", tableau);

        let mut iterations = IterationCounter::new(self.config.max_iterations());
        if tableau.has_phase_1_objective() {
            match phase_one::primal::<_, PR>(&mut tableau, &mut iterations)? {
                RankedFeasibilityResult::Feasible { rank } => {
                    if let Rank::Deficient(removed) = rank {
                        debug!("Removed redundant constraints {:?}", removed);
                    }
                    debug!("Found a basic feasible solution after {} pivots", iterations.count());
                },
                RankedFeasibilityResult::Infeasible => return Ok(OptimizationResult::Infeasible),
            }
        } else {
            debug!("Slack variables form a feasible basis, skipping phase one");
        }

        let result = phase_two::primal::<_, PR>(&mut tableau, objective, &mut iterations)?;
        debug!("Finished after {} pivots: {:?}", iterations.count(), result);
        Ok(result)
    }
}

impl<F: Scalar> Default for SimplexSolver<F> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Check the problem before a tableau is built from it.
fn validate<F: Scalar>(
    objective: &LinearExpression<F>,
    constraints: &[LinearConstraint<F>],
) -> Result<(), SolveError> {
    if objective.nr_variables() == 0 {
        return Err(SolveError::NoVariables);
    }
    if constraints.is_empty() {
        return Err(SolveError::NoConstraints);
    }

    objective.check_finite(Location::ObjectiveCoefficient, Location::ObjectiveConstant)?;
    for (i, constraint) in constraints.iter().enumerate() {
        if constraint.coefficients().len() != objective.nr_variables() {
            return Err(SolveError::DimensionMismatch {
                constraint: i,
                expected: objective.nr_variables(),
                found: constraint.coefficients().len(),
            });
        }
        constraint.check_finite(i)?;
    }

    Ok(())
}

/// What happened during a single iteration of the primal Simplex method.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// A column entered the basis.
    Pivoted {
        /// Row of the pivot element.
        row: usize,
        /// Column that entered the basis.
        column: usize,
    },
    /// No column has a sufficiently negative relative cost.
    Optimal,
    /// A column has a negative relative cost but can be increased without bound.
    Unbounded {
        /// The improving column without a pivot row.
        column: usize,
    },
}

/// Perform a single iteration of the primal Simplex method on the cost row that is currently
/// optimized.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state, modified by the pivot.
/// * `rule`: Selects the entering column.
pub fn primal_step<F, PR>(tableau: &mut Tableau<F>, rule: &mut PR) -> Step
where
    F: Scalar,
    PR: PivotRule<F>,
{
    match rule.select_primal_pivot_column(tableau) {
        Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
            Some(row) => {
                trace!("Pivoting on row {} and column {}, relative cost {}", row, column, cost);
                tableau.pivot(row, column);
                trace!("{}", tableau);
                Step::Pivoted { row, column }
            },
            None => Step::Unbounded { column },
        },
        None => Step::Optimal,
    }
}

/// Counts pivots over both phases.
#[derive(Debug)]
pub(crate) struct IterationCounter {
    limit: usize,
    count: usize,
}

impl IterationCounter {
    pub(crate) fn new(limit: usize) -> Self {
        Self { limit, count: 0 }
    }

    /// Register a pivot.
    ///
    /// # Errors
    ///
    /// When more pivots than the limit have been registered.
    pub(crate) fn increment(&mut self) -> Result<(), SolveError> {
        self.count += 1;
        if self.count > self.limit {
            Err(SolveError::MaxIterationsExceeded(self.limit))
        } else {
            Ok(())
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
