use serde::Deserialize;

use crate::models::Transaction;
use crate::types::PageNumber;

/// Response envelope of `GET /api/transactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPage {
    pub page: PageNumber,
    #[serde(default)]
    pub per_page: Option<u32>,
    pub total: u64,
    pub total_pages: PageNumber,
    pub data: Vec<Transaction>
}
