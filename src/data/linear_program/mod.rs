//! # Representing linear programs
//!
//! The objective function and the constraints of a linear program, as provided by the caller.
//! These are plain values; the solver derives its own representation from them.
pub mod constraint;
pub mod elements;
pub mod expression;
