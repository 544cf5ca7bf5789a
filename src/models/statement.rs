use serde::Serialize;

use crate::types::{Monetary, MonthKey};

/// Credit and debit totals of a single calendar month.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: MonthKey,
    /// Always `credit_amount - debit_amount`.
    pub balance: Monetary,
    pub credit_amount: Monetary,
    pub debit_amount: Monetary,
    pub transaction_count: usize
}

/// A user's overall balance plus one summary per month, oldest month first.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementResult {
    pub user_name: String,
    pub balance: Monetary,
    pub total_credit: Monetary,
    pub total_debit: Monetary,
    pub monthly: Vec<MonthlySummary>
}

impl StatementResult {
    pub fn empty() -> Self {
        Self {
            user_name: String::new(),
            balance: Monetary::new(),
            total_credit: Monetary::new(),
            total_debit: Monetary::new(),
            monthly: Vec::new()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}
