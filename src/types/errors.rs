use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: Overflow")]
    Overflow
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum MonthKeyError {
    #[error("Month key error: {0}")]
    InvalidFormat(String),
    #[error("Month key error: timestamp [{0}] is out of range")]
    TimestampOutOfRange(i64)
}
