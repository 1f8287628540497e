//! # Phase two: improving a basic feasible solution
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{IterationCounter, primal_step, Step};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::expression::LinearExpression;
use crate::data::number_types::traits::Scalar;
use crate::error::SolveError;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
/// - There are no artificial variables left
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state.
/// * `objective`: The objective function as provided, used to compute the reported value.
/// * `iterations`: Shared with the first phase.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    objective: &LinearExpression<F>,
    iterations: &mut IterationCounter,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
{
    debug_assert!(!tableau.has_phase_1_objective());

    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match primal_step(tableau, &mut rule) {
            Step::Pivoted { .. } => iterations.increment()?,
            Step::Optimal => {
                let point = tableau.solution();
                let value = objective.value(&point);
                break Ok(OptimizationResult::Optimal { point, value });
            },
            Step::Unbounded { .. } => break Ok(OptimizationResult::Unbounded),
        }
    }
}
