
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::fetcher::{FetchConfig, PageStrategy, DEFAULT_MAX_IN_FLIGHT, DEFAULT_TIMEOUT};
use crate::source::DEFAULT_BASE_URL;
use crate::types::UserId;
use crate::view::{OutputFormat, ViewContext};

/// Fetch a user's transaction history and print monthly statement summaries.
#[derive(Debug, Parser)]
#[command(name = "monthly-statements", version)]
pub struct Cli {
    /// User whose transactions are summarized.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub user_id: UserId,

    /// Base url of the records source.
    #[arg(long, env = "STATEMENTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upper bound, in seconds, on fetching every page.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = PageStrategy::Concurrent)]
    pub strategy: PageStrategy,

    /// Most page requests kept in flight with the concurrent strategy.
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub max_in_flight: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Bucket months in UTC instead of the local time zone.
    #[arg(long)]
    pub utc: bool,

    /// Name shown in place of the one carried by the records.
    #[arg(long)]
    pub display_name: Option<String>,

    /// error, warn, info, debug or trace. Logs go to stderr.
    #[arg(long, env = "STATEMENTS_LOG", default_value = "error")]
    pub log_level: String
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            strategy: self.strategy,
            max_in_flight: self.max_in_flight
        }
    }

    pub fn view_context(&self) -> ViewContext {
        let context = ViewContext::default().with_selected_user(self.user_id);

        match &self.display_name {
            Some(name) => context.with_display_name(name.as_str()),
            None => context
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
