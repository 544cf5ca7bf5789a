use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use tracing::debug;

use crate::aggregator::StatementError;
use crate::models::{MonthlySummary, StatementResult, Transaction};
use crate::types::{Monetary, MonthKey};

/// Folds a user's transactions into a [`StatementResult`].
///
/// Month buckets are calendar months in `timezone`. Records are visited newest first and
/// the summaries come out oldest month first, so the result does not depend on the order
/// pages were served in.
pub struct StatementAggregator<Tz: TimeZone> {
    timezone: Tz
}

impl StatementAggregator<Local> {
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> StatementAggregator<Tz> {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// # Errors
    /// Returns `StatementError` if an amount is malformed or negative, a timestamp has no
    /// calendar month, or a total overflows. Nothing is coerced to zero.
    pub fn aggregate(&self, transactions: &[Transaction]) -> Result<StatementResult, StatementError> {
        let Some(first) = transactions.first() else {
            return Ok(StatementResult::empty());
        };

        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut months = BTreeMap::<MonthKey, MonthAccumulator>::new();

        for transaction in ordered {
            let month = MonthKey::from_timestamp_millis(transaction.timestamp, &self.timezone)?;
            let amount = transaction.parse_amount().map_err(|source| StatementError::MalformedAmount {
                timestamp: transaction.timestamp,
                amount: transaction.amount.clone(),
                source
            })?;

            if amount.is_negative() {
                return Err(StatementError::NegativeAmount {
                    timestamp: transaction.timestamp,
                    amount: transaction.amount.clone()
                });
            }

            months.entry(month)
                .or_default()
                .record(transaction.is_credit(), amount)
                .ok_or(StatementError::Overflow { month })?;
        }

        let mut statement = StatementResult {
            user_name: first.user_name.clone(),
            ..StatementResult::empty()
        };

        for (month, accumulator) in months {
            let summary = accumulator.summarize(month)?;

            statement.total_credit = statement.total_credit.checked_add(summary.credit_amount)
                .ok_or(StatementError::Overflow { month })?;
            statement.total_debit = statement.total_debit.checked_add(summary.debit_amount)
                .ok_or(StatementError::Overflow { month })?;
            statement.balance = statement.balance.checked_add(summary.balance)
                .ok_or(StatementError::Overflow { month })?;
            statement.monthly.push(summary);
        }

        debug!(
            "Aggregated [{}] transactions for [{}] into [{}] months, balance [{}]",
            transactions.len(),
            statement.user_name,
            statement.monthly.len(),
            statement.balance
        );

        Ok(statement)
    }
}

#[derive(Debug, Default)]
struct MonthAccumulator {
    credit: Monetary,
    debit: Monetary,
    count: usize
}

impl MonthAccumulator {
    fn record(&mut self, is_credit: bool, amount: Monetary) -> Option<()> {
        if is_credit {
            self.credit = self.credit.checked_add(amount)?;
        } else {
            self.debit = self.debit.checked_add(amount)?;
        }

        self.count += 1;

        Some(())
    }

    fn summarize(self, month: MonthKey) -> Result<MonthlySummary, StatementError> {
        let balance = self.credit.checked_sub(self.debit)
            .ok_or(StatementError::Overflow { month })?;

        Ok(MonthlySummary {
            month,
            balance,
            credit_amount: self.credit,
            debit_amount: self.debit,
            transaction_count: self.count
        })
    }
}
