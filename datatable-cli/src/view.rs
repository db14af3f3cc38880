//! Plain-text and JSON rendering of a table page.

use clap::ValueEnum;
use datatable_lib::fetch::FetchState;
use datatable_lib::model::Column;
use datatable_lib::model::Record;
use datatable_lib::query::Direction;
use datatable_lib::table::TableState;
use serde_json::json;

/// Output format of rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

/// Renders the visible rows of a delivered page.
pub fn render(format: Format, state: &TableState, fetched: &FetchState) -> anyhow::Result<String> {
    let rows = state.visible_rows(fetched.rows());
    match format {
        Format::Table => Ok(render_table(state, fetched, &rows)),
        Format::Json => render_json(state, fetched, &rows),
    }
}

fn header(state: &TableState, column: Column) -> String {
    match state.sort_direction(column) {
        Some(Direction::Asc) => format!("{} ^", column.header()),
        Some(Direction::Desc) => format!("{} v", column.header()),
        None => column.header().to_string(),
    }
}

fn render_table(state: &TableState, fetched: &FetchState, rows: &[&Record]) -> String {
    let headers: Vec<String> = Column::ALL.iter().map(|c| header(state, *c)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| Column::ALL.iter().map(|c| r.value(*c).to_string()).collect())
        .collect();

    let widths: Vec<usize> = (0..Column::ALL.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }

    if let Some(error) = fetched.error() {
        out.push_str(&format!("Error: {}\n", error));
    }
    out.push_str(&state.summary(fetched.is_loading(), rows.len()));
    out.push('\n');

    let options: Vec<String> = state
        .page_size_options()
        .iter()
        .map(|size| {
            if *size == state.page_size() {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect();
    out.push_str(&format!(
        "Rows per page: {}   {}\n",
        options.join(" "),
        state.page_label()
    ));

    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

fn render_json(
    state: &TableState,
    fetched: &FetchState,
    rows: &[&Record],
) -> anyhow::Result<String> {
    let page = json!({
        "pageIndex": state.page_index(),
        "pageSize": state.page_size(),
        "pageCount": state.page_count(),
        "loading": fetched.is_loading(),
        "error": fetched.error().map(|e| e.to_string()),
        "rows": rows,
    });
    Ok(serde_json::to_string_pretty(&page)?)
}
