use thiserror::Error;

use crate::types::{MonetaryError, MonthKey, MonthKeyError};

#[derive(Debug, Error, Eq, PartialEq)]
pub enum StatementError {
    #[error("Transaction at [{timestamp}] has a malformed amount [{amount}]: {source}")]
    MalformedAmount {
        timestamp: i64,
        amount: String,
        #[source]
        source: MonetaryError
    },
    #[error("Transaction at [{timestamp}] has a negative amount [{amount}]")]
    NegativeAmount {
        timestamp: i64,
        amount: String
    },
    #[error("Transaction has an unusable timestamp: {0}")]
    InvalidTimestamp(#[from] MonthKeyError),
    #[error("Statement totals overflowed in month [{month}]")]
    Overflow {
        month: MonthKey
    }
}
