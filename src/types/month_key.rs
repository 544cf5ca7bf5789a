use crate::types::errors::MonthKeyError;
use chrono::{DateTime, Datelike, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Calendar month bucket, displayed as `MM-YYYY`.
///
/// Field order gives chronological ordering: year first, then month.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::InvalidFormat(format!("Month [{month}] is not between 1 and 12")));
        }

        if !(0..=9999).contains(&year) {
            return Err(MonthKeyError::InvalidFormat(format!("Year [{year}] does not fit in four digits")));
        }

        Ok(Self { year, month })
    }

    /// Derives the month bucket of an epoch-millisecond timestamp as seen in `timezone`.
    pub fn from_timestamp_millis<Tz: TimeZone>(timestamp: i64, timezone: &Tz) -> Result<Self, MonthKeyError> {
        let instant = DateTime::from_timestamp_millis(timestamp)
            .ok_or(MonthKeyError::TimestampOutOfRange(timestamp))?;
        let local = instant.with_timezone(timezone);

        Self::new(local.year(), local.month())
            .map_err(|_| MonthKeyError::TimestampOutOfRange(timestamp))
    }
}

impl Display for MonthKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:02}-{:04}", self.month, self.year)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthKeyError::InvalidFormat(format!("Value [{value}] is not in MM-YYYY form"));

        let (month, year) = value.trim().split_once('-').ok_or_else(invalid)?;

        if month.len() != 2 || year.len() != 4 {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
