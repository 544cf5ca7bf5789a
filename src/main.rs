mod aggregator;
mod cli;
mod fetcher;
mod models;
mod source;
mod types;
mod view;

use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::aggregator::StatementAggregator;
use crate::cli::Cli;
use crate::fetcher::RecordsFetcher;
use crate::source::HttpRecordsSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level());

    let source = HttpRecordsSource::new(&cli.base_url)?;
    let fetcher = RecordsFetcher::new(source).with_config(cli.fetch_config());

    let timer = Instant::now();
    let transactions = fetcher.fetch_all(cli.user_id).await
        .with_context(|| format!("Could not fetch transactions for user [{}]", cli.user_id))?;

    info!("Fetched [{}] transactions in: {:?}", transactions.len(), timer.elapsed());

    let statement = if cli.utc {
        StatementAggregator::new(Utc).aggregate(&transactions)
    } else {
        StatementAggregator::local().aggregate(&transactions)
    }
    .with_context(|| format!("Could not build the statement for user [{}]", cli.user_id))?;

    let output = BufWriter::new(stdout().lock());
    view::render(cli.format, &statement, &cli.view_context(), output)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the rendered statement, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
