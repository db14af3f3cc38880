mod commands;
mod paths;
mod view;

use std::fs::File;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use datatable_lib::DEFAULT_DATASET_SIZE;
use datatable_lib::TableConfig;
use datatable_lib::fetch::FetchTicket;
use datatable_lib::table::Table;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use commands::{Command, HELP};
use view::Format;

/// Page through a generated dataset from the terminal.
#[derive(Parser, Debug)]
#[command(name = "datatable", version)]
struct Cli {
    /// Number of records to generate.
    #[arg(long, default_value_t = DEFAULT_DATASET_SIZE)]
    size: usize,

    /// Initial rows per page.
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Simulated fetch latency in milliseconds.
    #[arg(long, default_value_t = 1000)]
    latency_ms: u64,

    /// Seed for the record generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Log level written to the log file.
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> TableConfig {
        let config = TableConfig::default()
            .with_dataset_size(self.size)
            .with_page_size(self.page_size)
            .with_latency(Duration::from_millis(self.latency_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let Some(path) = paths::prepare_log_file()? else {
        return Ok(());
    };
    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    let config = cli.config();
    log::info!(
        "Generating {} records, {} ms latency",
        config.dataset_size,
        config.latency.as_millis()
    );
    let mut table = Table::simulated(&config);

    let ticket = table.mount()?;
    show(&mut table, cli.format, Some(ticket)).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let fetched = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Next => table.next_page(),
            Command::Prev => table.previous_page(),
            Command::Page(index) => table.goto_page(index),
            Command::Size(size) => table.set_page_size(size),
            Command::Sort(column) => {
                table.state_mut().toggle_sort(column);
                Ok(None)
            }
            Command::Filter {
                column,
                kind,
                value,
            } => {
                table.state_mut().set_filter(column, kind, &value);
                Ok(None)
            }
            Command::Search(value) => {
                table.state_mut().set_global_filter(&value);
                Ok(None)
            }
            Command::Clear => {
                table.state_mut().clear_filters();
                Ok(None)
            }
            Command::Show => Ok(None),
        };

        match fetched {
            Ok(ticket) => show(&mut table, cli.format, ticket).await?,
            Err(e) => eprintln!("{}", e),
        }
    }

    table.shutdown();
    log::info!("Exiting");
    Ok(())
}

/// Prints the page, first announcing a pending fetch if there is one.
async fn show(table: &mut Table, format: Format, pending: Option<FetchTicket>) -> Result<()> {
    if let Some(ticket) = pending {
        log::debug!("Waiting for fetch {}", ticket);
        println!("{}", table.state().summary(true, 0));
    }
    let fetched = table.settled().await?;
    print!("{}", view::render(format, table.state(), &fetched)?);
    if format == Format::Json {
        println!();
    }
    Ok(())
}
