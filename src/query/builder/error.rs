use regex::Error;

/// Represents errors that can occur while generating SQL from a `SelectBuilder`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Indicates that the projection list is empty, either because no columns
    /// were selected or because every column was reduced away.
    #[error("invalid query: no columns to select")]
    NoColumns,
    /// Indicates that the placeholder pattern could not be compiled.
    #[error("invalid placeholder pattern: {0}")]
    Placeholder(String),
}

impl From<Error> for BuildError {
    fn from(error: Error) -> Self {
        BuildError::Placeholder(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_columns() {
        assert_eq!(
            "invalid query: no columns to select",
            BuildError::NoColumns.to_string()
        );
    }

    #[test]
    fn build_error_from_regex_error() {
        let error = regex::Regex::new("(").unwrap_err();
        assert!(matches!(
            BuildError::from(error),
            BuildError::Placeholder(_)
        ));
    }
}
