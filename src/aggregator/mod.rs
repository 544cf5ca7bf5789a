mod errors;
mod statement_aggregator;

pub use errors::StatementError;
pub use statement_aggregator::StatementAggregator;
