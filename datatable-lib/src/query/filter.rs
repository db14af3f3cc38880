//! Column filters for the visible page.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::Column;
use crate::model::Record;
use crate::model::Value;

use super::fuzzy_filter;

/// The kind of match a column filter performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Case-insensitive prefix match: `text`.
    Text,
    /// Fuzzy match ranked by score: `fuzzyText`.
    FuzzyText,
    /// Exact match on the rendered cell: `equals`.
    Equals,
    /// Case-insensitive substring match: `includes`.
    Includes,
    /// Numeric lower bound (inclusive): `greaterThan`.
    GreaterThan,
}

impl FilterKind {
    /// Returns the filter type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Text => "text",
            FilterKind::FuzzyText => "fuzzyText",
            FilterKind::Equals => "equals",
            FilterKind::Includes => "includes",
            FilterKind::GreaterThan => "greaterThan",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(FilterKind::Text),
            "fuzzy" | "fuzzytext" => Ok(FilterKind::FuzzyText),
            "equals" | "eq" => Ok(FilterKind::Equals),
            "includes" | "contains" => Ok(FilterKind::Includes),
            "greaterthan" | "gt" => Ok(FilterKind::GreaterThan),
            _ => Err(ParseError::UnknownFilter(s.to_string())),
        }
    }
}

/// A filter on a single column.
///
/// Filters only ever see the rows of the visible page; they never reach
/// the dataset provider.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Column;
/// use datatable_lib::query::{Filter, FilterKind};
///
/// let filter = Filter::new(Column::FirstName, FilterKind::Text, "jo").unwrap();
/// assert_eq!(filter.column(), Column::FirstName);
///
/// // Empty values remove the filter entirely
/// assert!(Filter::new(Column::FirstName, FilterKind::Text, "").is_none());
///
/// // Numeric bounds need a number
/// assert!(Filter::new(Column::Age, FilterKind::GreaterThan, "old").is_none());
/// assert!(Filter::new(Column::Status, FilterKind::GreaterThan, "3").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive prefix: `startswith(column, value)`
    Text(Column, String),
    /// Fuzzy match: `fuzzy(column, value)`
    FuzzyText(Column, String),
    /// Exact match: `column eq value`
    Equals(Column, String),
    /// Case-insensitive substring: `contains(column, value)`
    Includes(Column, String),
    /// Inclusive lower bound: `column ge value`
    GreaterThan(Column, i64),
}

impl Filter {
    /// Builds a filter from the raw text a user typed.
    ///
    /// Returns `None` when the value would remove the filter: an empty
    /// value for any kind, or a non-numeric value or text column for
    /// [`FilterKind::GreaterThan`].
    pub fn new(column: Column, kind: FilterKind, value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let filter = match kind {
            FilterKind::Text => Filter::Text(column, value.to_string()),
            FilterKind::FuzzyText => Filter::FuzzyText(column, value.to_string()),
            FilterKind::Equals => Filter::Equals(column, value.to_string()),
            FilterKind::Includes => Filter::Includes(column, value.to_string()),
            FilterKind::GreaterThan if column.is_numeric() => {
                Filter::GreaterThan(column, value.parse().ok()?)
            }
            FilterKind::GreaterThan => return None,
        };
        Some(filter)
    }

    /// Creates a case-insensitive prefix filter.
    pub fn text(column: Column, value: impl Into<String>) -> Self {
        Filter::Text(column, value.into())
    }

    /// Creates a fuzzy filter.
    pub fn fuzzy(column: Column, value: impl Into<String>) -> Self {
        Filter::FuzzyText(column, value.into())
    }

    /// Creates an exact-match filter.
    pub fn equals(column: Column, value: impl Into<String>) -> Self {
        Filter::Equals(column, value.into())
    }

    /// Creates a case-insensitive substring filter.
    pub fn includes(column: Column, value: impl Into<String>) -> Self {
        Filter::Includes(column, value.into())
    }

    /// Creates an inclusive lower-bound filter.
    pub fn greater_than(column: Column, value: i64) -> Self {
        Filter::GreaterThan(column, value)
    }

    /// Returns the filtered column.
    pub fn column(&self) -> Column {
        match self {
            Filter::Text(c, _)
            | Filter::FuzzyText(c, _)
            | Filter::Equals(c, _)
            | Filter::Includes(c, _)
            | Filter::GreaterThan(c, _) => *c,
        }
    }

    /// Returns the filter kind.
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Text(..) => FilterKind::Text,
            Filter::FuzzyText(..) => FilterKind::FuzzyText,
            Filter::Equals(..) => FilterKind::Equals,
            Filter::Includes(..) => FilterKind::Includes,
            Filter::GreaterThan(..) => FilterKind::GreaterThan,
        }
    }

    /// Returns `true` if a single record passes this filter.
    ///
    /// Fuzzy filters match when the query scores at all; ranking only
    /// happens in [`Filter::apply`].
    pub fn matches(&self, record: &Record) -> bool {
        let value = record.value(self.column());
        match self {
            Filter::Text(_, prefix) => lowercase(&value).starts_with(&prefix.to_lowercase()),
            Filter::FuzzyText(_, query) => !fuzzy_filter(query, &[value.to_text()]).is_empty(),
            Filter::Equals(_, expected) => value.to_text() == expected.as_str(),
            Filter::Includes(_, needle) => lowercase(&value).contains(&needle.to_lowercase()),
            Filter::GreaterThan(_, bound) => value.as_int().is_some_and(|n| n >= *bound),
        }
    }

    /// Applies the filter to a list of rows.
    ///
    /// Fuzzy filters reorder the surviving rows by match score, best first;
    /// every other kind keeps the input order.
    pub fn apply<'a>(&self, rows: Vec<&'a Record>) -> Vec<&'a Record> {
        match self {
            Filter::FuzzyText(column, query) => {
                let cells: Vec<_> = rows.iter().map(|r| r.value(*column).to_text()).collect();
                fuzzy_filter(query, &cells)
                    .into_iter()
                    .map(|m| rows[m.index])
                    .collect()
            }
            _ => rows.into_iter().filter(|r| self.matches(r)).collect(),
        }
    }
}

fn lowercase(value: &Value<'_>) -> String {
    value.to_text().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("Jordan", "Smith").with_age(31).with_status(Status::Single),
            Record::new("Maria", "Jones").with_age(24).with_status(Status::Relationship),
            Record::new("Jo", "Brown").with_age(19).with_status(Status::Complicated),
        ]
    }

    fn names<'a>(rows: &[&'a Record]) -> Vec<&'a str> {
        rows.iter().map(|r| r.first_name()).collect()
    }

    #[test]
    fn test_text_is_case_insensitive_prefix() {
        let data = rows();
        let filtered = Filter::text(Column::FirstName, "JO").apply(data.iter().collect());
        assert_eq!(names(&filtered), vec!["Jordan", "Jo"]);
    }

    #[test]
    fn test_equals_compares_rendered_cell() {
        let data = rows();
        let filtered = Filter::equals(Column::Age, "24").apply(data.iter().collect());
        assert_eq!(names(&filtered), vec!["Maria"]);

        let filtered = Filter::equals(Column::FirstName, "jo").apply(data.iter().collect());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_includes_substring() {
        let data = rows();
        let filtered = Filter::includes(Column::Status, "LATION").apply(data.iter().collect());
        assert_eq!(names(&filtered), vec!["Maria"]);
    }

    #[test]
    fn test_greater_than_is_inclusive() {
        let data = rows();
        let filtered = Filter::greater_than(Column::Age, 24).apply(data.iter().collect());
        assert_eq!(names(&filtered), vec!["Jordan", "Maria"]);
    }

    #[test]
    fn test_greater_than_never_matches_text() {
        let data = rows();
        let filtered = Filter::greater_than(Column::FirstName, 0).apply(data.iter().collect());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_fuzzy_drops_non_matches() {
        let data = rows();
        let filtered = Filter::fuzzy(Column::LastName, "jns").apply(data.iter().collect());
        assert_eq!(names(&filtered), vec!["Maria"]);
    }

    #[test]
    fn test_auto_remove() {
        assert_eq!(Filter::new(Column::Url, FilterKind::Includes, "   "), None);
        assert_eq!(
            Filter::new(Column::Visits, FilterKind::GreaterThan, "10"),
            Some(Filter::GreaterThan(Column::Visits, 10))
        );
    }

    #[test]
    fn test_greater_than_needs_numeric_column() {
        assert_eq!(Filter::new(Column::LastName, FilterKind::GreaterThan, "10"), None);
        assert_eq!(
            Filter::new(Column::Progress, FilterKind::GreaterThan, "50"),
            Some(Filter::GreaterThan(Column::Progress, 50))
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("fuzzyText".parse::<FilterKind>().unwrap(), FilterKind::FuzzyText);
        assert_eq!("gt".parse::<FilterKind>().unwrap(), FilterKind::GreaterThan);
        assert!("between".parse::<FilterKind>().is_err());
    }
}
