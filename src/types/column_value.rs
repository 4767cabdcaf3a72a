/// `ColumnValue` is a bind argument carried alongside the generated SQL.
#[derive(Debug, PartialEq, Hash, Eq, Clone)]
pub enum ColumnValue {
    Null,
    Int(i64),
    Boolean(bool),
    Text(String),
}

impl ColumnValue {
    pub fn int(value: i64) -> Self {
        ColumnValue::Int(value)
    }

    pub fn text<T: Into<String>>(value: T) -> Self {
        ColumnValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    pub fn int_value(&self) -> Option<i64> {
        if let ColumnValue::Int(value) = self {
            return Some(*value);
        }
        None
    }

    pub fn text_value(&self) -> Option<&str> {
        if let ColumnValue::Text(ref value) = self {
            return Some(value);
        }
        None
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Int(value)
    }
}

impl From<i32> for ColumnValue {
    fn from(value: i32) -> Self {
        ColumnValue::Int(value as i64)
    }
}

impl From<bool> for ColumnValue {
    fn from(value: bool) -> Self {
        ColumnValue::Boolean(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl<T: Into<ColumnValue>> From<Option<T>> for ColumnValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ColumnValue::Null)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn int_value() {
        let column_value = ColumnValue::Int(100);
        assert_eq!(Some(100), column_value.int_value());
    }

    #[test]
    fn attempt_to_get_int_value_for_a_non_int_column_value() {
        let column_value = ColumnValue::text("sieve");
        assert_eq!(None, column_value.int_value());
    }

    #[test]
    fn text_value() {
        let column_value = ColumnValue::text("sieve");
        assert_eq!(Some("sieve"), column_value.text_value());
    }

    #[test]
    fn attempt_to_get_text_value_for_a_non_text_column_value() {
        let column_value = ColumnValue::Boolean(true);
        assert_eq!(None, column_value.text_value());
    }

    #[test]
    fn column_value_from_i32() {
        assert_eq!(ColumnValue::Int(42), ColumnValue::from(42));
    }

    #[test]
    fn column_value_from_none() {
        let value: Option<i64> = None;
        assert!(ColumnValue::from(value).is_null());
    }

    #[test]
    fn column_value_from_some() {
        assert_eq!(ColumnValue::text("users"), ColumnValue::from(Some("users")));
    }
}
