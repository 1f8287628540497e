//! # Strategies
//!
//! Decisions that the Simplex method leaves open, such as which column should enter the basis.
pub mod pivot_rule;
