mod errors;
mod monetary;
mod month_key;
#[cfg(test)]
mod tests;

pub use errors::{MonetaryError, MonthKeyError};
pub use monetary::Monetary;
pub use month_key::MonthKey;

pub type UserId = u32;
pub type PageNumber = u32;
