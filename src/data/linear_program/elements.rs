//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter};
use std::fmt;
use std::ops::{Neg, Not};

use enum_map::Enum;
use num_traits::One;

/// Type of (in)equality between the left- and right-hand side of a constraint.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relationship {
    /// Left-hand side is at most the right-hand side.
    Leq,
    /// Left-hand side equals the right-hand side.
    Eq,
    /// Left-hand side is at least the right-hand side.
    Geq,
}

impl Relationship {
    /// The relationship that holds after both sides of a constraint are multiplied by `-1`.
    #[must_use]
    pub fn oppose(self) -> Self {
        match self {
            Relationship::Leq => Relationship::Geq,
            Relationship::Eq => Relationship::Eq,
            Relationship::Geq => Relationship::Leq,
        }
    }
}

impl Not for Relationship {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.oppose()
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Relationship::Leq => "<=",
            Relationship::Eq => "=",
            Relationship::Geq => ">=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Sign with which the objective coefficients enter a minimization.
    ///
    /// The tableau always minimizes, maximization happens by minimizing the negated function.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Maximize => -F::one(),
            Objective::Minimize => F::one(),
        }
    }
}
