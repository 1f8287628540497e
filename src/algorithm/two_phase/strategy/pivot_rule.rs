//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Scalar;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, by the ratio test of the tableau.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column that is not in the basis with a relative cost below `-epsilon`, together with that
    /// cost. `None` if there is no such column, which means the current basis is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl<F: Scalar> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.non_basic_columns()
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }
}

/// Pivot on the column with the most negative relative cost.
///
/// Also known as Dantzig's rule. When several columns share the most negative cost, the one with
/// the lowest index is chosen.
pub struct SteepestDescentAlongVariable;
impl<F: Scalar> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, F)> = None;
        for column in tableau.non_basic_columns() {
            let cost = tableau.relative_cost(column);
            if cost < -tableau.epsilon() && smallest.is_none_or(|(_, smallest_cost)| cost < smallest_cost) {
                smallest = Some((column, cost));
            }
        }

        smallest
    }
}
