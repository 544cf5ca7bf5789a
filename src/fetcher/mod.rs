mod records_fetcher;

use std::time::Duration;

use clap::ValueEnum;

use crate::types::PageNumber;

pub use records_fetcher::RecordsFetcher;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;
/// Largest page count a records source may claim before the envelope is rejected.
pub const MAX_PAGES: PageNumber = 10_000;

/// How pages after the first are requested.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum PageStrategy {
    /// Keep up to `max_in_flight` remaining pages in flight at once.
    #[default]
    Concurrent,
    /// Issue remaining pages one after another.
    Sequential
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Bound on the whole fetch, across every page.
    pub timeout: Duration,
    pub strategy: PageStrategy,
    /// Cap on simultaneous page requests under [`PageStrategy::Concurrent`].
    pub max_in_flight: usize
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            strategy: PageStrategy::default(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT
        }
    }
}
