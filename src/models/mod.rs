mod page;
mod statement;
mod transaction;

use serde::{Deserialize, Serialize};

pub use page::TransactionPage;
pub use statement::{MonthlySummary, StatementResult};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit
}
