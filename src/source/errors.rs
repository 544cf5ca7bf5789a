use std::time::Duration;

use thiserror::Error;

use crate::types::{PageNumber, UserId};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("User id must be positive, got [{0}]")]
    InvalidUserId(UserId),
    #[error("Invalid base url [{url}]: {reason}")]
    InvalidBaseUrl {
        url: String,
        reason: String
    },
    #[error("HTTP client could not be created: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request for page [{page}] of user [{user_id}] failed: {source}")]
    Transport {
        user_id: UserId,
        page: PageNumber,
        #[source]
        source: reqwest::Error
    },
    #[error("Page [{page}] of user [{user_id}] returned status [{status}]")]
    Status {
        user_id: UserId,
        page: PageNumber,
        status: u16
    },
    #[error("Page [{page}] of user [{user_id}] could not be decoded: {source}")]
    Decode {
        user_id: UserId,
        page: PageNumber,
        #[source]
        source: serde_json::Error
    },
    #[error("Requested page [{requested}] of user [{user_id}] but received page [{received}]")]
    PageMismatch {
        user_id: UserId,
        requested: PageNumber,
        received: PageNumber
    },
    #[error("Page [{page}] of user [{user_id}] reports [{reported}] total pages but page 1 reported [{expected}]")]
    TotalPagesMismatch {
        user_id: UserId,
        page: PageNumber,
        expected: PageNumber,
        reported: PageNumber
    },
    #[error("User [{user_id}] reports [{reported}] pages, more than the [{limit}] its envelope allows")]
    ImplausiblePageCount {
        user_id: UserId,
        reported: PageNumber,
        limit: PageNumber
    },
    #[error("Fetching records for user [{user_id}] timed out after {timeout:?}")]
    Timeout {
        user_id: UserId,
        timeout: Duration
    }
}
