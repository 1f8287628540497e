//! # A dense two phase Simplex solver
//!
//! Linear programs are solved using the Simplex Method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use dense_simplex::algorithm::OptimizationResult;
//! use dense_simplex::algorithm::two_phase::SimplexSolver;
//! use dense_simplex::data::linear_program::constraint::LinearConstraint;
//! use dense_simplex::data::linear_program::elements::{Objective, Relationship};
//! use dense_simplex::data::linear_program::expression::LinearExpression;
//!
//! // max 15x + 10y s.t. x <= 2, y <= 3, x + y = 4
//! let objective = LinearExpression::new(vec![15f64, 10f64], 0f64);
//! let constraints = vec![
//!     LinearConstraint::new(vec![1f64, 0f64], Relationship::Leq, 2f64),
//!     LinearConstraint::new(vec![0f64, 1f64], Relationship::Leq, 3f64),
//!     LinearConstraint::new(vec![1f64, 1f64], Relationship::Eq, 4f64),
//! ];
//!
//! let result = SimplexSolver::default().optimize(&objective, &constraints, Objective::Maximize);
//! assert_eq!(result, Ok(OptimizationResult::Optimal { point: vec![2f64, 2f64], value: 50f64 }));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
