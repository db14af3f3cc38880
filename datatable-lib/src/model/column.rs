//! Table columns

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::query::FilterKind;

/// A column of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    FirstName,
    LastName,
    Url,
    Age,
    Visits,
    Status,
    Progress,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Column; 7] = [
        Column::FirstName,
        Column::LastName,
        Column::Url,
        Column::Age,
        Column::Visits,
        Column::Status,
        Column::Progress,
    ];

    /// Returns the header label shown above the column.
    pub fn header(&self) -> &'static str {
        match self {
            Column::FirstName => "FirstName",
            Column::LastName => "LastName",
            Column::Url => "URL",
            Column::Age => "Age",
            Column::Visits => "Visits",
            Column::Status => "Status",
            Column::Progress => "Profile Progress",
        }
    }

    /// Returns the accessor key, matching the serialized record field.
    pub fn accessor(&self) -> &'static str {
        match self {
            Column::FirstName => "firstName",
            Column::LastName => "lastName",
            Column::Url => "url",
            Column::Age => "age",
            Column::Visits => "visits",
            Column::Status => "status",
            Column::Progress => "progress",
        }
    }

    /// Returns the filter applied when the user types into the column's
    /// filter box.
    pub fn default_filter(&self) -> FilterKind {
        match self {
            Column::Status => FilterKind::Includes,
            _ => FilterKind::Equals,
        }
    }

    /// Returns `true` if the column holds numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Age | Column::Visits | Column::Progress)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = ParseError;

    /// Parses an accessor key or header label, ignoring case, spaces,
    /// underscores and dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Column::ALL
            .into_iter()
            .find(|c| normalize(c.accessor()) == wanted || normalize(c.header()) == wanted)
            .ok_or_else(|| ParseError::UnknownColumn(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
