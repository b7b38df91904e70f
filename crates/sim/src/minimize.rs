//! Seam for the external two-level formula minimizer.

use std::error::Error;

use crate::table::TruthTable;

/// A minimized expression for one table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimizedFormula {
    /// Column label the formula belongs to.
    pub label: String,
    /// Minimized boolean expression, in the minimizer's own syntax.
    pub expr: String,
}

/// An external two-level logic minimizer.
///
/// The engine hands over the truth table with rows in sweep order and
/// columns in campaign-label order; how the minimizer reduces it is its
/// own business.
pub trait FormulaMinimizer {
    /// Error type for whatever can go wrong on the minimizer's side.
    type Error: Error + Send + Sync + 'static;

    /// Produces one minimized formula per table column.
    fn minimize(&self, table: &TruthTable) -> Result<Vec<MinimizedFormula>, Self::Error>;
}
