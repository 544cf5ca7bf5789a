mod errors;
mod http_source;

use std::future::Future;

use crate::models::TransactionPage;
use crate::types::{PageNumber, UserId};

pub use errors::FetchError;
pub use http_source::HttpRecordsSource;

pub const DEFAULT_BASE_URL: &str = "https://jsonmock.hackerrank.com";

/// Anything that can serve one page of a user's transaction history.
pub trait RecordsSource: Send + Sync {
    fn fetch_page(&self, user_id: UserId, page: PageNumber) -> impl Future<Output = Result<TransactionPage, FetchError>> + Send;
}
