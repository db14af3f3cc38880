//! Cell values

use std::borrow::Cow;
use std::fmt;

/// A borrowed cell value.
///
/// Filters and sorting work on values rather than on record fields so that
/// every column can be handled the same way. Integers order before text
/// when the two are compared, which only happens for mixed columns.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// assert!(Value::Int(2) < Value::Int(10));
/// assert!(Value::Text("apple") < Value::Text("banana"));
/// assert_eq!(Value::Int(7).to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value<'a> {
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(&'a str),
}

impl<'a> Value<'a> {
    /// Returns the integer, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Returns the value rendered as text, borrowing when possible.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(*s),
            Value::Int(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(v)
    }
}
