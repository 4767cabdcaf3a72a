/// Creates a `Vec<ColumnValue>` of bind arguments from a list of values.
///
/// Values are converted into `ColumnValue`s using `From` implementations.
///
/// # Examples
///
/// ```
/// use sieve::args;
/// use sieve::types::column_value::ColumnValue;
///
/// let args = args![1, "text", true];
/// assert_eq!(
///     vec![
///         ColumnValue::int(1),
///         ColumnValue::text("text"),
///         ColumnValue::Boolean(true)
///     ],
///     args
/// );
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::types::column_value::ColumnValue>::new()
    };
    ( $( $x:expr ),+ $(,)? ) => {
        {
            use $crate::types::column_value::ColumnValue;
            vec![
                $( ColumnValue::from($x) ),+
            ]
        }
    };
}

/// Creates an `OrderingKey` for ascending order.
///
/// # Examples
///
/// ```
/// use sieve::{asc, select};
///
/// let (sql, _) = select(["id"]).from("users").order_by([asc!("id")]).to_sql().unwrap();
/// assert_eq!("SELECT id FROM users ORDER BY id ASC", sql);
/// ```
#[macro_export]
macro_rules! asc {
    ( $x:expr ) => {
        $crate::query::ordering_key::OrderingKey::ascending_by($x)
    };
}

/// Creates an `OrderingKey` for descending order.
///
/// # Examples
///
/// ```
/// use sieve::{desc, select};
///
/// let (sql, _) = select(["id"]).from("users").order_by([desc!("id")]).to_sql().unwrap();
/// assert_eq!("SELECT id FROM users ORDER BY id DESC", sql);
/// ```
#[macro_export]
macro_rules! desc {
    ( $x:expr ) => {
        $crate::query::ordering_key::OrderingKey::descending_by($x)
    };
}
