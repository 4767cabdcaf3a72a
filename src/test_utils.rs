use crate::query::builder::SelectBuilder;
use crate::types::column_value::ColumnValue;

/// Generates SQL from `query`, unwrapping the result, and asserts both the SQL
/// text and the bind arguments.
///
/// # Panics
///
/// Panics if SQL generation fails or if either the SQL or the arguments differ.
pub fn assert_sql(query: &SelectBuilder, expected_sql: &str, expected_args: Vec<ColumnValue>) {
    let (sql, args) = query.to_sql().unwrap();
    assert_eq!(expected_sql, sql, "Mismatch in generated SQL");
    assert_eq!(expected_args, args, "Mismatch in bind arguments");
}
