pub mod macros;
pub mod query;
#[cfg(test)]
pub mod test_utils;
pub mod types;

pub use crate::query::builder::error::BuildError;
pub use crate::query::builder::{select, SelectBuilder};
pub use crate::query::placeholder::PlaceholderFormat;
pub use crate::query::predicate::{LogicalOperator, Predicate};
