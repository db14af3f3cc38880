//! Ordering of the visible page.

use std::cmp::Ordering;

use crate::model::Column;
use crate::model::Record;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Specifies the ordering of rows.
///
/// Multiple columns can be chained together for secondary, tertiary, etc.
/// sorting. Sorting is stable: rows that compare equal on every column keep
/// the order they arrived in.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Column;
/// use datatable_lib::query::OrderBy;
///
/// // Single column ordering
/// let order = OrderBy::desc(Column::Visits);
///
/// // Multiple column ordering
/// let order = OrderBy::desc(Column::Visits)
///     .then_asc(Column::LastName);
/// assert_eq!(order.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub(crate) fields: Vec<(Column, Direction)>,
}

impl OrderBy {
    /// Creates an ascending order on a column.
    pub fn asc(column: Column) -> Self {
        Self {
            fields: vec![(column, Direction::Asc)],
        }
    }

    /// Creates a descending order on a column.
    pub fn desc(column: Column) -> Self {
        Self {
            fields: vec![(column, Direction::Desc)],
        }
    }

    /// Adds a secondary ascending order on a column.
    pub fn then_asc(mut self, column: Column) -> Self {
        self.fields.push((column, Direction::Asc));
        self
    }

    /// Returns the ordered columns with their directions.
    pub fn fields(&self) -> &[(Column, Direction)] {
        &self.fields
    }

    /// Returns the direction for a column, if the column is sorted.
    pub fn direction_of(&self, column: Column) -> Option<Direction> {
        self.fields
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, d)| *d)
    }

    /// Compares two records column by column.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        for (column, direction) in &self.fields {
            let ordering = a.value(*column).cmp(&b.value(*column));
            let ordering = match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Sorts rows in place.
    pub fn sort(&self, rows: &mut [&Record]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}
