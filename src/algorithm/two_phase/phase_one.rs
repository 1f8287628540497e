//! # Phase one: finding a basic feasible solution
use log::debug;

use crate::algorithm::two_phase::{IterationCounter, primal_step, Step};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Rank, Tableau};
use crate::data::number_types::traits::Scalar;
use crate::error::SolveError;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Tableau with a phase one cost row, and a basis that will typically consist of
/// slack and artificial variables.
/// * `iterations`: Shared with the second phase.
///
/// # Return value
///
/// Whether the problem is feasible. If it is, the tableau no longer has artificial variables.
///
/// # Errors
///
/// If the pivot limit is exceeded, or if rounding errors made the artificial cost unbounded.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    iterations: &mut IterationCounter,
) -> Result<RankedFeasibilityResult, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
{
    debug_assert!(tableau.has_phase_1_objective());

    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);
        if tableau.objective_function_value() <= tableau.epsilon() {
            break;
        }

        match primal_step(tableau, &mut rule) {
            Step::Pivoted { .. } => iterations.increment()?,
            Step::Optimal => break,
            Step::Unbounded { .. } => return Err(SolveError::ArtificialUnbounded),
        }
    }

    let artificial_cost = tableau.objective_function_value();
    if artificial_cost > tableau.epsilon() {
        debug!("Artificial cost {} remains, the problem is infeasible", artificial_cost);
        Ok(RankedFeasibilityResult::Infeasible)
    } else {
        let rank = tableau.drop_phase_1_objective();
        Ok(RankedFeasibilityResult::Feasible { rank })
    }
}

/// After the first phase, a basic feasible solution is found when the problem is feasible.
///
/// The tableau itself holds the basis, this only records what happened to the constraints while
/// the artificial variables were removed.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RankedFeasibilityResult {
    /// The problem is feasible and all artificial variables have been removed.
    Feasible {
        /// Whether any redundant constraints were removed.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
}
