use serde::Deserialize;

use std::str::FromStr;

use crate::models::TransactionType;
use crate::types::{Monetary, MonetaryError, UserId};

/// A single record as served by the records source.
///
/// Decoding is strict for the fields the statement depends on: a missing or mistyped
/// `timestamp`, `amount`, `txnType` or `userName` fails the whole page. The amount is kept
/// as the currency string received and parsed by [`Transaction::parse_amount`].
/// The remaining fields are carried through when present.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub amount: String,
    #[serde(rename = "txnType")]
    pub transaction_type: TransactionType,
    pub user_name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub location: Option<Location>
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<ZipCode>
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ZipCode {
    Number(u64),
    Text(String)
}

impl Transaction {
    pub fn parse_amount(&self) -> Result<Monetary, MonetaryError> {
        Monetary::from_str(&self.amount)
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }
}
