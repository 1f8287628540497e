//! # Properties of solutions to random problems
//!
//! Each generated problem has a known feasible point and bounds on all variables, so it always has
//! a finite optimum.
use proptest::collection::vec;
use proptest::prelude::*;

use dense_simplex::data::linear_program::constraint::LinearConstraint;
use dense_simplex::data::linear_program::elements::Relationship;
use dense_simplex::data::linear_program::expression::LinearExpression;

/// # Generation and execution
mod test;

/// Absolute value of the bound on every variable.
const BOUND: f64 = 10f64;

/// A random problem.
#[derive(Clone, Debug)]
struct Problem {
    objective: LinearExpression<f64>,
    constraints: Vec<LinearConstraint<f64>>,
    /// Satisfies all constraints.
    feasible_point: Vec<f64>,
}

fn relationship(index: u8) -> Relationship {
    match index % 3 {
        0 => Relationship::Leq,
        1 => Relationship::Eq,
        _ => Relationship::Geq,
    }
}

/// Strategy generating feasible, bounded problems with small integer data.
///
/// # Arguments
///
/// * `lowest`: Smallest value a coordinate of the feasible point can have. If negative, the
/// variables also get a lower bound of `-BOUND`.
fn problem(lowest: i32) -> impl Strategy<Value = Problem> {
    (1..=4usize, 1..=4usize)
        .prop_flat_map(move |(nr_variables, nr_constraints)| (
            vec(-5i32..=5, nr_variables),
            -5i32..=5,
            vec((vec(-5i32..=5, nr_variables), 0u8..3, 0i32..=3), nr_constraints),
            vec(lowest..=5, nr_variables),
        ))
        .prop_map(move |(cost, constant, rows, point)| {
            let feasible_point = point.into_iter().map(f64::from).collect::<Vec<_>>();
            let nr_variables = feasible_point.len();

            let mut constraints = rows.into_iter()
                .map(|(coefficients, relationship_index, slack)| {
                    let coefficients = coefficients.into_iter().map(f64::from).collect::<Vec<_>>();
                    let activity = coefficients.iter().zip(&feasible_point).map(|(a, x)| a * x).sum::<f64>();
                    let relationship = relationship(relationship_index);
                    let value = match relationship {
                        Relationship::Leq => activity + f64::from(slack),
                        Relationship::Eq => activity,
                        Relationship::Geq => activity - f64::from(slack),
                    };
                    LinearConstraint::new(coefficients, relationship, value)
                })
                .collect::<Vec<_>>();

            for j in 0..nr_variables {
                let mut unit = vec![0f64; nr_variables];
                unit[j] = 1f64;
                constraints.push(LinearConstraint::new(unit.clone(), Relationship::Leq, BOUND));
                if lowest < 0 {
                    constraints.push(LinearConstraint::new(unit, Relationship::Geq, -BOUND));
                }
            }

            Problem {
                objective: LinearExpression::new(cost.into_iter().map(f64::from).collect(), f64::from(constant)),
                constraints,
                feasible_point,
            }
        })
}
