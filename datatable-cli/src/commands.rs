//! Commands read from stdin.

use std::str::FromStr;

use datatable_lib::error::ParseError;
use datatable_lib::model::Column;
use datatable_lib::query::FilterKind;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  next | prev              move one page
  page N                   jump to page N (1-based)
  size N                   rows per page
  sort COLUMN              toggle sort: asc, desc, off
  filter COLUMN VALUE      filter a column with its default match
  fuzzy COLUMN VALUE       fuzzy-filter a column
  match KIND COLUMN VALUE  filter with text, fuzzy, equals, includes or gt
  search VALUE             match any column
  clear                    remove all filters
  show                     print the current page again
  help                     print this help
  quit                     exit

An empty VALUE removes the filter.";

/// Error type for command parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("page numbers start at 1")]
    PageZero,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// Zero-based page index.
    Page(usize),
    Size(usize),
    Sort(Column),
    Filter {
        column: Column,
        kind: FilterKind,
        value: String,
    },
    Search(String),
    Clear,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Show);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "page" => match number(words.next(), "page number")? {
                0 => return Err(CommandError::PageZero),
                page => Command::Page(page - 1),
            },
            "size" => Command::Size(number(words.next(), "page size")?),
            "sort" => Command::Sort(column(words.next())?),
            "filter" => {
                let column = column(words.next())?;
                Command::Filter {
                    column,
                    kind: column.default_filter(),
                    value: rest(words),
                }
            }
            "fuzzy" => Command::Filter {
                column: column(words.next())?,
                kind: FilterKind::FuzzyText,
                value: rest(words),
            },
            "match" => {
                let kind = words
                    .next()
                    .ok_or(CommandError::MissingArgument("filter kind"))?
                    .parse::<FilterKind>()?;
                Command::Filter {
                    column: column(words.next())?,
                    kind,
                    value: rest(words),
                }
            }
            "search" => Command::Search(rest(words)),
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn number(word: Option<&str>, what: &'static str) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(what))?;
    word.parse::<usize>()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

fn column(word: Option<&str>) -> Result<Column, CommandError> {
    word.ok_or(CommandError::MissingArgument("column"))?
        .parse::<Column>()
        .map_err(CommandError::from)
}

fn rest<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}
