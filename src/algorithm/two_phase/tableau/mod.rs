//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is a dense matrix that is owned exclusively by a single solve, it is mutated in
//! place by pivots and discarded afterwards.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};
use itertools::Itertools;

use crate::algorithm::utilities::remove_indices;
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::{Objective, Relationship};
use crate::data::linear_program::expression::LinearExpression;
use crate::data::number_types::traits::Scalar;

/// The groups in which the columns of the tableau are laid out, in this order.
///
/// The right-hand side column follows after the last group.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Decision variables, or their positive parts if they are not restricted in sign.
    Decision,
    /// Negative parts of decision variables that are not restricted in sign.
    NegativePart,
    /// Slack and surplus variables, one per inequality constraint.
    Slack,
    /// Artificial variables, one per equality or `>=` constraint.
    ///
    /// Only present during the first phase.
    Artificial,
}

/// A matrix either has full rank, or is rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of constraint indices is provided
/// that when removed, makes the matrix full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows were removed.
    Full,
    /// Indices of the constraints that were removed, relative to the order in which they were
    /// provided.
    Deficient(Vec<usize>),
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// The layout is as follows:
///
/// ```text
///                || decision | negative parts | slack, surplus | artificial || b |
/// ===============||==========|================|================|============||===|
/// phase one cost ||                     (only with artificial variables)    ||   |
/// cost           ||                                                         ||   |
/// ---------------||----------|----------------|----------------|------------||---|
/// constraint 0   ||                                                         ||   |
/// ...            ||                                                         ||   |
/// ```
///
/// The cost rows hold the relative cost of a minimization and minus the objective value in the
/// right-hand side column. Every basic column is a unit vector over all rows, including the cost
/// rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Row major, cost rows first.
    rows: Vec<Vec<F>>,
    /// Either two (while there are artificial variables) or one.
    nr_objective_rows: usize,

    /// Column that is basic for each constraint row, indexed by constraint.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Index after the last column of each group.
    column_group_end: EnumMap<ColumnType, usize>,
    restrict_to_non_negative: bool,
    epsilon: F,
}

impl<F: Scalar> Tableau<F> {
    /// Create the initial tableau of a linear program.
    ///
    /// Constraints with a negative right-hand side are negated first, such that the initial basis
    /// consisting of slack and artificial variables is feasible.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to optimize.
    /// * `constraints`: Should all have as many coefficients as the objective function.
    /// * `goal`: Whether to minimize or maximize.
    /// * `restrict_to_non_negative`: If false, each decision variable gets split in a positive and
    /// a negative part.
    /// * `epsilon`: Tolerance used in all comparisons.
    pub fn new(
        objective: &LinearExpression<F>,
        constraints: &[LinearConstraint<F>],
        goal: Objective,
        restrict_to_non_negative: bool,
        epsilon: F,
    ) -> Self {
        debug_assert!(constraints.iter().all(|c| c.coefficients().len() == objective.nr_variables()));
        debug_assert!(epsilon > F::zero());

        let normalized = constraints.iter().map(LinearConstraint::normalize).collect::<Vec<_>>();
        let mut nr_per_relationship = EnumMap::<Relationship, usize>::default();
        for (_, relationship, _) in &normalized {
            nr_per_relationship[*relationship] += 1;
        }
        let nr_slack = nr_per_relationship[Relationship::Leq] + nr_per_relationship[Relationship::Geq];
        let nr_artificial = nr_per_relationship[Relationship::Eq] + nr_per_relationship[Relationship::Geq];

        let nr_decision = objective.nr_variables();
        let nr_negative_parts = if restrict_to_non_negative { 0 } else { nr_decision };
        let cumulative = cumsum_array_owned([nr_decision, nr_negative_parts, nr_slack, nr_artificial]);
        let column_group_end = enum_map! {
            ColumnType::Decision     => cumulative[0],
            ColumnType::NegativePart => cumulative[1],
            ColumnType::Slack        => cumulative[2],
            ColumnType::Artificial   => cumulative[3],
        };
        let width = column_group_end[ColumnType::Artificial] + 1;
        let rhs = width - 1;

        let nr_objective_rows = if nr_artificial > 0 { 2 } else { 1 };
        let mut rows = vec![vec![F::zero(); width]; nr_objective_rows + normalized.len()];
        let (objective_rows, constraint_rows) = rows.split_at_mut(nr_objective_rows);

        let sign = goal.into::<F>();
        let cost_row = &mut objective_rows[nr_objective_rows - 1];
        write_decision_coefficients(cost_row, objective.coefficients(), sign, restrict_to_non_negative);
        cost_row[rhs] = -(sign * objective.constant_term());

        let mut next_slack = column_group_end[ColumnType::NegativePart];
        let mut next_artificial = column_group_end[ColumnType::Slack];
        let mut basis_indices = Vec::with_capacity(normalized.len());
        for (row, (coefficients, relationship, value)) in constraint_rows.iter_mut().zip_eq(normalized) {
            write_decision_coefficients(row, &coefficients, F::one(), restrict_to_non_negative);
            row[rhs] = value;

            let basis_column = match relationship {
                Relationship::Leq => {
                    row[next_slack] = F::one();
                    next_slack += 1;
                    next_slack - 1
                },
                Relationship::Eq => {
                    row[next_artificial] = F::one();
                    next_artificial += 1;
                    next_artificial - 1
                },
                Relationship::Geq => {
                    row[next_slack] = -F::one();
                    next_slack += 1;
                    row[next_artificial] = F::one();
                    next_artificial += 1;
                    next_artificial - 1
                },
            };
            basis_indices.push(basis_column);
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);
        debug_assert_eq!(next_artificial, column_group_end[ColumnType::Artificial]);

        if nr_artificial > 0 {
            // Sum of the artificial variables, expressed in the non-basic variables
            let artificial_columns = column_group_end[ColumnType::Slack]..column_group_end[ColumnType::Artificial];
            let phase_one_row = &mut objective_rows[0];
            for (row, basis_column) in constraint_rows.iter().zip_eq(&basis_indices) {
                if artificial_columns.contains(basis_column) {
                    for (j, (total, &value)) in phase_one_row.iter_mut().zip_eq(row).enumerate() {
                        if !artificial_columns.contains(&j) {
                            *total = *total - value;
                        }
                    }
                }
            }
        }

        let basis_columns = basis_indices.iter().copied().collect();

        Self {
            rows,
            nr_objective_rows,
            basis_indices,
            basis_columns,
            column_group_end,
            restrict_to_non_negative,
            epsilon,
        }
    }

    /// Value at a position in the matrix.
    ///
    /// # Arguments
    ///
    /// * `row`: Row index, in range `0` until `self.nr_rows()`. Cost rows come first.
    /// * `column`: Column index, in range `0` until `self.nr_columns()`. The last column is the
    /// right-hand side.
    ///
    /// # Panics
    ///
    /// If the position is out of range.
    pub fn entry(&self, row: usize, column: usize) -> F {
        self.rows[row][column]
    }

    /// Overwrite a value in the matrix.
    ///
    /// Doesn't maintain any invariant, see `entry` for the indexing.
    pub fn set_entry(&mut self, row: usize, column: usize, value: F) {
        self.rows[row][column] = value;
    }

    /// Divide the pivot row by the pivot element and eliminate the pivot column from all other
    /// rows, the cost rows included.
    ///
    /// Afterwards, `pivot_column` is basic in `pivot_row` and the column that was basic there
    /// left the basis.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: A constraint row.
    /// * `pivot_column`: A column that is not yet in the basis, with a non zero value in the
    /// pivot row.
    pub fn pivot(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(self.constraint_rows().contains(&pivot_row));
        debug_assert!(pivot_column < self.nr_variables());
        debug_assert!(!self.is_in_basis(pivot_column));

        let pivot_value = self.rows[pivot_row][pivot_column];
        debug_assert_ne!(pivot_value, F::zero());
        for value in &mut self.rows[pivot_row] {
            *value = *value / pivot_value;
        }
        self.rows[pivot_row][pivot_column] = F::one();

        let pivot_values = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            let factor = row[pivot_column];
            if i == pivot_row || factor == F::zero() {
                continue;
            }

            for (value, &pivot_value) in row.iter_mut().zip_eq(&pivot_values) {
                *value = *value - factor * pivot_value;
            }
            row[pivot_column] = F::zero();
        }

        let constraint = pivot_row - self.nr_objective_rows;
        let leaving_column = std::mem::replace(&mut self.basis_indices[constraint], pivot_column);
        self.update_basis_columns(pivot_column, leaving_column);
    }

    /// Update the set of basis columns.
    ///
    /// Removes the index of the variable leaving the basis, while inserting the entering variable
    /// index.
    fn update_basis_columns(&mut self, pivot_column: usize, leaving_column: usize) {
        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint value and the column.
    ///
    /// When there are multiple choices for the pivot row, that is, ratios within `epsilon` of the
    /// minimum, the row of which the basic variable has the largest column index is chosen. As
    /// artificial variables have the largest indices, these are preferred to leave the basis.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_variables());

        let rhs = self.rhs_column();
        // (chosen row, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for row in self.constraint_rows() {
            let entry = self.rows[row][column];
            if entry > self.epsilon {
                let ratio = self.rows[row][rhs] / entry;
                let leaving_column = self.basis_column(row);
                if let Some((min_row, min_ratio, min_leaving_column)) = &mut min_values {
                    if (ratio - *min_ratio).abs() <= self.epsilon {
                        if leaving_column > *min_leaving_column {
                            *min_row = row;
                            *min_leaving_column = leaving_column;
                        }
                        *min_ratio = (*min_ratio).min(ratio);
                    } else if ratio < *min_ratio {
                        *min_row = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column));
                }
            }
        }

        min_values.map(|(row, _, _)| row)
    }

    /// Remove the phase one cost row and all artificial columns.
    ///
    /// Should only be called once the artificial cost is (close to) zero. Artificial variables that
    /// are still in the basis get replaced by a non-artificial variable. At value zero, any entry
    /// larger than `epsilon` in magnitude will do as the solution doesn't change. At a small
    /// nonzero value, only pivots that keep all right-hand sides nonnegative are considered. If no
    /// pivot is possible, the row is (close to) a linear combination of the other rows and gets
    /// removed.
    ///
    /// # Return value
    ///
    /// Whether constraints were removed, and if so, which.
    pub fn drop_phase_1_objective(&mut self) -> Rank {
        if !self.has_phase_1_objective() {
            return Rank::Full;
        }

        let artificial_columns = self.artificial_columns();
        let mut rows_to_remove = Vec::new();
        for row in self.constraint_rows() {
            if !artificial_columns.contains(&self.basis_column(row)) {
                continue;
            }

            // Largest magnitude for numerical stability, the first one in case of ties
            let value = self.rows[row][self.rhs_column()];
            let mut replacement: Option<(usize, F)> = None;
            for column in (0..artificial_columns.start).filter(|&j| !self.is_in_basis(j)) {
                let entry = self.rows[row][column];
                let allowed = if value == F::zero() {
                    // Degenerate pivot, no right-hand side changes
                    entry.abs() > self.epsilon
                } else {
                    self.pivot_keeps_feasibility(row, column)
                };
                let magnitude = entry.abs();
                if allowed && replacement.is_none_or(|(_, best)| magnitude > best) {
                    replacement = Some((column, magnitude));
                }
            }

            match replacement {
                Some((column, _)) => self.pivot(row, column),
                None => rows_to_remove.push(row),
            }
        }

        let removed_constraints = rows_to_remove.iter()
            .map(|row| row - self.nr_objective_rows)
            .collect::<Vec<_>>();
        for &constraint in &removed_constraints {
            let was_there = self.basis_columns.remove(&self.basis_indices[constraint]);
            debug_assert!(was_there);
        }
        remove_indices(&mut self.basis_indices, &removed_constraints);

        // The phase one cost row is the first row
        let rows_to_remove = std::iter::once(0).chain(rows_to_remove).collect::<Vec<_>>();
        remove_indices(&mut self.rows, &rows_to_remove);
        let artificial_columns = artificial_columns.collect::<Vec<_>>();
        for row in &mut self.rows {
            remove_indices(row, &artificial_columns);
        }

        self.nr_objective_rows = 1;
        self.column_group_end[ColumnType::Artificial] = self.column_group_end[ColumnType::Slack];
        debug_assert!(self.basis_indices.iter().all(|&j| j < self.nr_variables()));

        if removed_constraints.is_empty() {
            Rank::Full
        } else {
            Rank::Deficient(removed_constraints)
        }
    }

    /// Whether pivoting on a position leaves all right-hand sides nonnegative.
    ///
    /// The entry should have the same sign as the right-hand side of the pivot row, and that row
    /// should win the ratio test among the rows with a positive entry in the column (up to
    /// `epsilon` in the resulting right-hand sides).
    fn pivot_keeps_feasibility(&self, pivot_row: usize, column: usize) -> bool {
        let rhs = self.rhs_column();
        let entry = self.rows[pivot_row][column];
        let value = self.rows[pivot_row][rhs];
        if entry == F::zero() || (entry > F::zero()) != (value > F::zero()) {
            return false;
        }

        let step = value / entry;
        self.constraint_rows()
            .filter(|&row| row != pivot_row)
            .all(|row| self.rows[row][rhs] - self.rows[row][column] * step >= -self.epsilon)
    }

    /// Row in which a column is basic.
    ///
    /// # Return value
    ///
    /// The row index, or `None` if the column is not in the basis.
    pub fn basic_row(&self, column: usize) -> Option<usize> {
        if !self.is_in_basis(column) {
            return None;
        }

        self.basis_indices.iter()
            .position(|&j| j == column)
            .map(|constraint| constraint + self.nr_objective_rows)
    }

    /// Column that is basic in a constraint row.
    pub fn basis_column(&self, row: usize) -> usize {
        debug_assert!(self.constraint_rows().contains(&row));

        self.basis_indices[row - self.nr_objective_rows]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_variables());

        self.basis_columns.contains(&column)
    }

    /// All columns that are currently not in the basis, in increasing order.
    pub fn non_basic_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nr_variables()).filter(|&j| !self.is_in_basis(j))
    }

    /// Calculates the relative cost of a column.
    ///
    /// This is the value in the cost row that is currently optimized: the phase one cost row when
    /// it is present, the real cost row otherwise.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_variables());

        self.rows[0][column]
    }

    /// Get the cost of the current solution.
    ///
    /// # Return value
    ///
    /// The current value of the objective function that is minimized. During the first phase, this
    /// is the sum of the artificial variables. Afterwards, it is the objective function, negated in
    /// case of maximization.
    pub fn objective_function_value(&self) -> F {
        -self.rows[0][self.rhs_column()]
    }

    /// Whether no column has a relative cost below `-epsilon`.
    pub fn is_optimal(&self) -> bool {
        self.non_basic_columns().all(|j| self.relative_cost(j) >= -self.epsilon)
    }

    /// Values of the decision variables in the current basic solution.
    ///
    /// Variables that are not in the basis have value zero. Variables that were split have the
    /// value of their positive part minus that of their negative part.
    pub fn solution(&self) -> Vec<F> {
        let rhs = self.rhs_column();
        let mut values = vec![F::zero(); self.nr_variables()];
        for row in self.constraint_rows() {
            values[self.basis_column(row)] = self.rows[row][rhs];
        }

        let nr_decision = self.nr_decision_variables();
        if self.restrict_to_non_negative {
            values.truncate(nr_decision);
            values
        } else {
            (0..nr_decision).map(|j| values[j] - values[nr_decision + j]).collect()
        }
    }

    /// Number of rows, including the cost rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, including the right-hand side column.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Artificial] + 1
    }

    /// Number of columns that correspond to a variable.
    pub fn nr_variables(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Number of decision variables of the original problem.
    pub fn nr_decision_variables(&self) -> usize {
        self.column_group_end[ColumnType::Decision]
    }

    /// Number of artificial variables, zero once the first phase is over.
    pub fn nr_artificial_variables(&self) -> usize {
        self.artificial_columns().len()
    }

    /// Number of cost rows at the top of the matrix.
    pub fn nr_objective_rows(&self) -> usize {
        self.nr_objective_rows
    }

    /// Whether the phase one cost row is still present.
    pub fn has_phase_1_objective(&self) -> bool {
        self.nr_objective_rows == 2
    }

    /// Indices of the rows that represent constraints.
    pub fn constraint_rows(&self) -> Range<usize> {
        self.nr_objective_rows..self.rows.len()
    }

    /// Index of the right-hand side column.
    pub fn rhs_column(&self) -> usize {
        self.nr_columns() - 1
    }

    /// The tolerance used in all comparisons.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    fn artificial_columns(&self) -> Range<usize> {
        self.column_group_end[ColumnType::Slack]..self.column_group_end[ColumnType::Artificial]
    }
}

/// Write the (scaled) coefficients of the decision variables in a row.
///
/// Negative parts, if present, get the negated coefficients.
fn write_decision_coefficients<F: Scalar>(
    row: &mut [F],
    coefficients: &[F],
    factor: F,
    restrict_to_non_negative: bool,
) {
    let nr_decision = coefficients.len();
    for (j, &coefficient) in coefficients.iter().enumerate() {
        row[j] = factor * coefficient;
        if !restrict_to_non_negative {
            row[nr_decision + j] = -(factor * coefficient);
        }
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: Scalar>(tableau: &Tableau<F>) {
    // Correct number of basis columns (uniqueness is implied because it's a set)
    debug_assert_eq!(tableau.basis_indices.len(), tableau.constraint_rows().len());
    debug_assert_eq!(tableau.basis_columns.len(), tableau.basis_indices.len());
    debug_assert!(tableau.basis_indices.iter().all(|j| tableau.basis_columns.contains(j)));

    // Basis columns are unit vectors over all rows
    for row in tableau.constraint_rows() {
        let column = tableau.basis_column(row);
        for i in 0..tableau.nr_rows() {
            let expected = if i == row { F::one() } else { F::zero() };
            debug_assert_eq!(
                tableau.entry(i, column), expected,
                "Column {} is not equal to e_{}", column, row,
            );
        }
    }

    // `b` >= 0
    let rhs = tableau.rhs_column();
    for row in tableau.constraint_rows() {
        let value = tableau.entry(row, rhs);
        debug_assert!(
            value >= -tableau.epsilon,
            "rhs (b) is not always nonnegative: at row {} we have {} < 0", row, value,
        );
    }
}

impl<F: Scalar> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let labels = (0..self.nr_rows())
            .map(|i| if i >= self.nr_objective_rows {
                (i - self.nr_objective_rows).to_string()
            } else if i == 0 && self.has_phase_1_objective() {
                "artificial".to_string()
            } else {
                "cost".to_string()
            })
            .collect::<Vec<_>>();
        let cells = self.rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let headers = (0..self.nr_columns())
            .map(|j| if j == self.rhs_column() { "b".to_string() } else { j.to_string() })
            .collect::<Vec<_>>();

        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let column_width = headers.iter().enumerate()
            .map(|(j, header)| {
                cells.iter().map(|row| row[j].len()).fold(header.len(), usize::max)
            })
            .collect::<Vec<_>>();
        let total_width = label_width + 2 + column_width.iter().map(|width| 1 + width).sum::<usize>();

        writeln!(f, "=== Tableau ===")?;
        write!(f, "{0:>width$} |", "", width = label_width)?;
        for (header, width) in headers.iter().zip_eq(&column_width) {
            write!(f, " {0:^width$}", header, width = *width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        for (i, (label, row)) in labels.iter().zip_eq(&cells).enumerate() {
            if i == self.nr_objective_rows {
                writeln!(f, "{}", "-".repeat(total_width))?;
            }
            write!(f, "{0:>width$} |", label, width = label_width)?;
            for (cell, width) in row.iter().zip_eq(&column_width) {
                write!(f, " {0:>width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.constraint_rows()
            .map(|row| (row, self.basis_column(row)))
            .collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}
