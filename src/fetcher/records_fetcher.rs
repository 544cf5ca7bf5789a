use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::fetcher::{FetchConfig, PageStrategy, MAX_PAGES};
use crate::models::{Transaction, TransactionPage};
use crate::source::{FetchError, RecordsSource};
use crate::types::{PageNumber, UserId};

/// Collects every page of a user's transactions from a records source.
pub struct RecordsFetcher<S: RecordsSource> {
    source: S,
    config: FetchConfig
}

impl<S: RecordsSource> RecordsFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: FetchConfig::default()
        }
    }

    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the user's transactions across all pages, concatenated in page order.
    ///
    /// # Errors
    /// Any failing page fails the whole call, as does exceeding the configured timeout.
    /// Nothing is retried and no partial result is returned.
    pub async fn fetch_all(&self, user_id: UserId) -> Result<Vec<Transaction>, FetchError> {
        if user_id == 0 {
            return Err(FetchError::InvalidUserId(user_id));
        }

        match timeout(self.config.timeout, self.fetch_pages(user_id)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout { user_id, timeout: self.config.timeout })
        }
    }

    async fn fetch_pages(&self, user_id: UserId) -> Result<Vec<Transaction>, FetchError> {
        let first = self.fetch_page(user_id, 1, None).await?;
        check_envelope(user_id, &first)?;

        let total_pages = first.total_pages;
        let expected_records = first.total;
        let mut records = first.data;

        if total_pages > 1 {
            let in_flight = match self.config.strategy {
                PageStrategy::Concurrent => self.config.max_in_flight.max(1),
                PageStrategy::Sequential => 1
            };

            // `buffered` yields in page order whatever order the requests complete in.
            let pages: Vec<TransactionPage> = stream::iter(2..=total_pages)
                .map(|page| self.fetch_page(user_id, page, Some(total_pages)))
                .buffered(in_flight)
                .try_collect()
                .await?;

            for page in pages {
                records.extend(page.data);
            }
        }

        if records.len() as u64 != expected_records {
            warn!("User [{user_id}] reported [{expected_records}] records but [{}] were received", records.len());
        }

        debug!("Fetched [{}] records over [{}] pages for user [{user_id}]", records.len(), total_pages.max(1));

        Ok(records)
    }

    async fn fetch_page(&self, user_id: UserId, page: PageNumber, expected_pages: Option<PageNumber>) -> Result<TransactionPage, FetchError> {
        let response = self.source.fetch_page(user_id, page).await?;

        if response.page != page {
            return Err(FetchError::PageMismatch { user_id, requested: page, received: response.page });
        }

        if let Some(expected) = expected_pages {
            if response.total_pages != expected {
                return Err(FetchError::TotalPagesMismatch { user_id, page, expected, reported: response.total_pages });
            }
        }

        debug!("Page [{page}] of user [{user_id}] returned [{}] records", response.data.len());

        Ok(response)
    }
}

/// Rejects a first page whose page count cannot be right before any further request is made.
fn check_envelope(user_id: UserId, first: &TransactionPage) -> Result<(), FetchError> {
    let reported = first.total_pages;

    if reported > MAX_PAGES {
        return Err(FetchError::ImplausiblePageCount { user_id, reported, limit: MAX_PAGES });
    }

    // More pages than `total` records can fill at `per_page` each.
    if let Some(per_page) = first.per_page.filter(|per_page| *per_page > 0) {
        let limit = first.total.div_ceil(per_page as u64).max(1);

        if reported as u64 > limit {
            return Err(FetchError::ImplausiblePageCount { user_id, reported, limit: limit as PageNumber });
        }
    }

    Ok(())
}
