use proptest::prelude::*;

use dense_simplex::algorithm::OptimizationResult;
use dense_simplex::algorithm::two_phase::config::SolverConfig;
use dense_simplex::algorithm::two_phase::SimplexSolver;
use dense_simplex::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use dense_simplex::data::linear_program::elements::Objective;

use super::{problem, Problem};

const TOLERANCE: f64 = 1e-6;

fn goal(maximize: bool) -> Objective {
    if maximize { Objective::Maximize } else { Objective::Minimize }
}

/// Solve and check everything that should hold for an optimum.
fn check(problem: &Problem, goal: Objective, restrict_to_non_negative: bool) -> Result<(), TestCaseError> {
    let config = SolverConfig::default().with_restrict_to_non_negative(restrict_to_non_negative);
    let solver = SimplexSolver::new(config);
    let result = solver.optimize(&problem.objective, &problem.constraints, goal);

    let (point, value) = match &result {
        Ok(OptimizationResult::Optimal { point, value }) => (point, *value),
        other => return Err(TestCaseError::fail(format!("expected an optimum, got {:?}", other))),
    };

    for constraint in &problem.constraints {
        prop_assert!(constraint.is_satisfied_by(point, TOLERANCE), "{:?} violates {:?}", point, constraint);
    }
    if restrict_to_non_negative {
        prop_assert!(point.iter().all(|&x| x >= -TOLERANCE), "{:?} has a negative value", point);
    }
    prop_assert!((problem.objective.value(point) - value).abs() <= TOLERANCE);

    // At least as good as the known feasible point
    let reference = problem.objective.value(&problem.feasible_point);
    match goal {
        Objective::Maximize => prop_assert!(value >= reference - TOLERANCE),
        Objective::Minimize => prop_assert!(value <= reference + TOLERANCE),
    }

    // Solving again gives the same outcome
    prop_assert_eq!(&solver.optimize(&problem.objective, &problem.constraints, goal), &result);

    // Another pivot rule might end in another vertex, but not with another value
    let other = solver.optimize_with::<FirstProfitable>(&problem.objective, &problem.constraints, goal);
    match other {
        Ok(OptimizationResult::Optimal { value: other_value, .. }) => {
            prop_assert!((other_value - value).abs() <= TOLERANCE);
        },
        other => return Err(TestCaseError::fail(format!("expected an optimum, got {:?}", other))),
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn non_negative(problem in problem(0), maximize in any::<bool>()) {
        check(&problem, goal(maximize), true)?;
    }

    #[test]
    fn free_variables(problem in problem(-5), maximize in any::<bool>()) {
        check(&problem, goal(maximize), false)?;
    }
}
