//! Table record

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Column;
use super::Value;

/// Relationship status of a person in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not in a relationship.
    Single,
    /// In a relationship.
    Relationship,
    /// It's complicated.
    Complicated,
}

impl Status {
    /// All statuses, in declaration order.
    pub const ALL: [Status; 3] = [Status::Single, Status::Relationship, Status::Complicated];

    /// Returns the lowercase name used for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Single => "single",
            Status::Relationship => "relationship",
            Status::Complicated => "complicated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dataset.
///
/// Records are built once by the dataset provider and never mutated
/// afterwards. Pages hand out clones, so a view can own the rows it was
/// given without borrowing from the provider.
///
/// # Example
///
/// ```
/// use datatable_lib::model::{Column, Record, Status, Value};
///
/// let record = Record::new("Ada", "Lovelace")
///     .with_age(28)
///     .with_visits(3)
///     .with_status(Status::Complicated)
///     .with_progress(90);
///
/// assert_eq!(record.first_name(), "Ada");
/// assert_eq!(record.value(Column::Age), Value::Int(28));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    first_name: String,
    last_name: String,
    url: String,
    age: u32,
    visits: u32,
    status: Status,
    progress: u8,
}

impl Record {
    /// Creates a record with the given name.
    ///
    /// The URL is derived from the name; numeric fields start at zero and
    /// the status at [`Status::Single`].
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let url = profile_url(&first_name, &last_name);

        Self {
            first_name,
            last_name,
            url,
            age: 0,
            visits: 0,
            status: Status::Single,
            progress: 0,
        }
    }

    /// Sets the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the visit count.
    pub fn with_visits(mut self, visits: u32) -> Self {
        self.visits = visits;
        self
    }

    /// Sets the relationship status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the profile progress, clamped to 100.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(100);
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Profile progress in percent (0–100).
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the cell value for a column.
    pub fn value(&self, column: Column) -> Value<'_> {
        match column {
            Column::FirstName => Value::Text(&self.first_name),
            Column::LastName => Value::Text(&self.last_name),
            Column::Url => Value::Text(&self.url),
            Column::Age => Value::Int(i64::from(self.age)),
            Column::Visits => Value::Int(i64::from(self.visits)),
            Column::Status => Value::Text(self.status.as_str()),
            Column::Progress => Value::Int(i64::from(self.progress)),
        }
    }
}

fn profile_url(first_name: &str, last_name: &str) -> String {
    let slug: String = first_name
        .chars()
        .chain(last_name.chars())
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("https://{}.example.com", slug)
}
