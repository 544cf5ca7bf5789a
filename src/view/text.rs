use std::io::Write;

use serde::Serialize;

use crate::models::StatementResult;
use crate::view::{ViewContext, ViewError};

pub fn render_text(statement: &StatementResult, context: &ViewContext) -> String {
    let mut lines = vec![
        format!("Statement for {}", context.user_name(statement)),
        format!("Balance: {}", statement.balance),
    ];

    if statement.is_empty() {
        lines.push("No transactions".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("{:<8} {:>16} {:>16} {:>16} {:>6}", "MONTH", "BALANCE", "CREDIT", "DEBIT", "TXNS"));

        for summary in &statement.monthly {
            lines.push(format!(
                "{:<8} {:>16} {:>16} {:>16} {:>6}",
                summary.month.to_string(),
                summary.balance.to_string(),
                summary.credit_amount.to_string(),
                summary.debit_amount.to_string(),
                summary.transaction_count
            ));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn write_json<W: Write>(statement: &StatementResult, mut writer: W) -> Result<(), ViewError> {
    serde_json::to_writer_pretty(&mut writer, statement)?;
    writeln!(writer)?;

    Ok(())
}

#[derive(Serialize)]
struct CsvRow {
    month: String,
    balance: String,
    credit: String,
    debit: String,
    transactions: usize
}

pub fn write_csv<W: Write>(statement: &StatementResult, writer: W) -> Result<(), ViewError> {
    let mut writer = csv::Writer::from_writer(writer);

    if statement.monthly.is_empty() {
        writer.write_record(["month", "balance", "credit", "debit", "transactions"])?;
    }

    for summary in &statement.monthly {
        writer.serialize(CsvRow {
            month: summary.month.to_string(),
            balance: summary.balance.to_plain_string(),
            credit: summary.credit_amount.to_plain_string(),
            debit: summary.debit_amount.to_plain_string(),
            transactions: summary.transaction_count
        })?;
    }

    writer.flush()?;

    Ok(())
}
