use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::query::builder::error::BuildError;

static PLACEHOLDER_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\?\??"));

/// `PlaceholderFormat` decides how `?` bind placeholders appear in generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderFormat {
    /// `?`, left as written.
    #[default]
    Question,
    /// `$1`, `$2`, ...
    Dollar,
    /// `:1`, `:2`, ...
    Colon,
    /// `@p1`, `@p2`, ...
    AtP,
}

impl PlaceholderFormat {
    /// Rewrites every `?` in `sql` into this format's positional marker.
    ///
    /// A doubled `??` is an escape for a literal `?` and does not take a position.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The SQL with placeholders rewritten.
    /// * `Err(BuildError::Placeholder)` - If the placeholder pattern cannot be compiled.
    pub(crate) fn replace(&self, sql: &str) -> Result<String, BuildError> {
        let prefix = match self {
            PlaceholderFormat::Question => return Ok(sql.to_string()),
            PlaceholderFormat::Dollar => "$",
            PlaceholderFormat::Colon => ":",
            PlaceholderFormat::AtP => "@p",
        };

        let pattern = PLACEHOLDER_REGEX
            .as_ref()
            .map_err(|error| BuildError::from(error.clone()))?;
        let mut position = 0;
        let replaced = pattern.replace_all(sql, |captures: &Captures| {
            if &captures[0] == "??" {
                return "?".to_string();
            }
            position += 1;
            format!("{}{}", prefix, position)
        });
        Ok(replaced.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_format_leaves_sql_untouched() {
        let sql = PlaceholderFormat::Question
            .replace("SELECT id FROM users WHERE id = ? AND data ?? 'k'")
            .unwrap();
        assert_eq!("SELECT id FROM users WHERE id = ? AND data ?? 'k'", sql);
    }

    #[test]
    fn dollar_format() {
        let sql = PlaceholderFormat::Dollar
            .replace("SELECT id FROM users WHERE age > ? AND name = ?")
            .unwrap();
        assert_eq!("SELECT id FROM users WHERE age > $1 AND name = $2", sql);
    }

    #[test]
    fn colon_format() {
        let sql = PlaceholderFormat::Colon.replace("a = ? AND b = ?").unwrap();
        assert_eq!("a = :1 AND b = :2", sql);
    }

    #[test]
    fn at_p_format() {
        let sql = PlaceholderFormat::AtP.replace("a = ? AND b = ?").unwrap();
        assert_eq!("a = @p1 AND b = @p2", sql);
    }

    #[test]
    fn escaped_question_mark_does_not_take_a_position() {
        let sql = PlaceholderFormat::Dollar
            .replace("data ?? 'key' AND id = ?")
            .unwrap();
        assert_eq!("data ? 'key' AND id = $1", sql);
    }

    #[test]
    fn sql_without_placeholders() {
        let sql = PlaceholderFormat::Dollar.replace("SELECT 1").unwrap();
        assert_eq!("SELECT 1", sql);
    }

    #[test]
    fn placeholder_pattern_is_reused_across_calls() {
        let first = PlaceholderFormat::Dollar.replace("a = ?").unwrap();
        let second = PlaceholderFormat::AtP.replace("a = ? AND b = ?").unwrap();

        assert_eq!("a = $1", first);
        assert_eq!("a = @p1 AND b = @p2", second);
        assert!(PLACEHOLDER_REGEX.is_ok());
    }
}
