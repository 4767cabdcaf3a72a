//! Builder module for `SELECT` statements.
//!
//! `SelectBuilder` is an immutable value: every method borrows the receiver and
//! returns a new builder, so a builder can be shared freely (including across
//! threads) and used as the base of several derived statements.

pub mod error;

use tracing::{debug, warn};

use crate::query::builder::error::BuildError;
use crate::query::ordering_key::OrderingKey;
use crate::query::placeholder::PlaceholderFormat;
use crate::query::predicate::Predicate;
use crate::query::projection::reducer::{ColumnReducer, ExclusionSet};
use crate::query::projection::ProjectionList;
use crate::types::column_value::ColumnValue;

/// Creates a `SelectBuilder` projecting the given entries.
///
/// Each entry is kept verbatim and may pack several comma-separated columns.
///
/// # Examples
///
/// ```
/// use sieve::select;
///
/// let (sql, args) = select(["id", "name, email"])
///     .from("users")
///     .reduce_columns(["email"])
///     .to_sql()
///     .unwrap();
///
/// assert_eq!("SELECT id, name FROM users", sql);
/// assert!(args.is_empty());
/// ```
pub fn select<I, S>(columns: I) -> SelectBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectBuilder::new().columns(columns)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    Join,
    Left,
    Right,
    Inner,
    Cross,
}

impl JoinKind {
    fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Join => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Join {
    kind: JoinKind,
    clause: String,
    args: Vec<ColumnValue>,
}

/// A fluent, immutable builder of `SELECT` statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectBuilder {
    placeholder_format: PlaceholderFormat,
    distinct: bool,
    projection: ProjectionList,
    from: Option<String>,
    joins: Vec<Join>,
    where_predicates: Vec<Predicate>,
    group_by: Vec<String>,
    having_predicates: Vec<Predicate>,
    order_by: Vec<OrderingKey>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl SelectBuilder {
    /// Creates an empty `SelectBuilder` using `?` placeholders.
    pub fn new() -> SelectBuilder {
        Self::default()
    }

    fn with<F: FnOnce(&mut SelectBuilder)>(&self, change: F) -> SelectBuilder {
        let mut builder = self.clone();
        change(&mut builder);
        builder
    }

    /// Sets the placeholder format used by `to_sql`.
    pub fn placeholder_format(&self, format: PlaceholderFormat) -> SelectBuilder {
        self.with(|builder| builder.placeholder_format = format)
    }

    /// Adds `DISTINCT` to the statement.
    pub fn distinct(&self) -> SelectBuilder {
        self.with(|builder| builder.distinct = true)
    }

    /// Appends projection entries after the existing ones.
    ///
    /// # Arguments
    ///
    /// * `columns` - The entries to append; each becomes one entry verbatim.
    pub fn columns<I, S>(&self, columns: I) -> SelectBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let projection = self.projection.extend(columns);
        self.with(|builder| builder.projection = projection)
    }

    /// Removes every projection entry.
    pub fn remove_columns(&self) -> SelectBuilder {
        self.with(|builder| builder.projection = ProjectionList::default())
    }

    /// Returns the projection entries, as supplied and not split into columns.
    pub fn get_select_columns(&self) -> &[String] {
        self.projection.entries()
    }

    /// Returns a new builder with the named columns removed from the projection.
    ///
    /// Names are matched exactly (case-sensitive) against the trimmed
    /// comma-separated parts of each entry. An entry whose parts are all removed
    /// disappears; a partially reduced entry keeps its surviving parts joined with
    /// `", "`; an untouched entry is kept verbatim. Unknown names are ignored.
    ///
    /// The projection may end up empty, in which case `to_sql` fails with
    /// [`BuildError::NoColumns`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve::select;
    ///
    /// let query = select(["id, name", "email", "age, created_at"]).from("users");
    /// let reduced = query.reduce_columns(["id", "email", "age"]);
    ///
    /// assert_eq!(&["name", "created_at"], reduced.get_select_columns());
    /// assert_eq!(3, query.get_select_columns().len());
    /// ```
    pub fn reduce_columns<I, S>(&self, names: I) -> SelectBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reducer = ColumnReducer::new(ExclusionSet::new(names));
        let projection = reducer.reduce(&self.projection);
        self.with(|builder| builder.projection = projection)
    }

    /// Sets the `FROM` target.
    pub fn from<T: Into<String>>(&self, table: T) -> SelectBuilder {
        let table = table.into();
        self.with(|builder| builder.from = Some(table))
    }

    fn add_join<C, I, V>(&self, kind: JoinKind, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        let join = Join {
            kind,
            clause: clause.into(),
            args: args.into_iter().map(Into::into).collect(),
        };
        self.with(|builder| builder.joins.push(join))
    }

    /// Appends `JOIN <clause>`; `clause` may contain `?` placeholders bound to `args`.
    pub fn join<C, I, V>(&self, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        self.add_join(JoinKind::Join, clause, args)
    }

    pub fn left_join<C, I, V>(&self, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        self.add_join(JoinKind::Left, clause, args)
    }

    pub fn right_join<C, I, V>(&self, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        self.add_join(JoinKind::Right, clause, args)
    }

    pub fn inner_join<C, I, V>(&self, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        self.add_join(JoinKind::Inner, clause, args)
    }

    pub fn cross_join<C, I, V>(&self, clause: C, args: I) -> SelectBuilder
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        self.add_join(JoinKind::Cross, clause, args)
    }

    /// Adds a `WHERE` predicate; successive predicates are joined with `AND`.
    pub fn where_clause(&self, predicate: Predicate) -> SelectBuilder {
        self.with(|builder| builder.where_predicates.push(predicate))
    }

    /// Appends `GROUP BY` expressions.
    pub fn group_by<I, S>(&self, expressions: I) -> SelectBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expressions: Vec<String> = expressions.into_iter().map(Into::into).collect();
        self.with(|builder| builder.group_by.extend(expressions))
    }

    /// Adds a `HAVING` predicate; successive predicates are joined with `AND`.
    pub fn having(&self, predicate: Predicate) -> SelectBuilder {
        self.with(|builder| builder.having_predicates.push(predicate))
    }

    /// Appends `ORDER BY` keys.
    pub fn order_by<I: IntoIterator<Item = OrderingKey>>(&self, keys: I) -> SelectBuilder {
        let keys: Vec<OrderingKey> = keys.into_iter().collect();
        self.with(|builder| builder.order_by.extend(keys))
    }

    pub fn limit(&self, limit: usize) -> SelectBuilder {
        self.with(|builder| builder.limit = Some(limit))
    }

    pub fn offset(&self, offset: usize) -> SelectBuilder {
        self.with(|builder| builder.offset = Some(offset))
    }

    /// Generates the SQL text and its bind arguments.
    ///
    /// Clauses are emitted in the order `SELECT [DISTINCT] ... FROM ... JOIN ...
    /// WHERE ... GROUP BY ... HAVING ... ORDER BY ... LIMIT ... OFFSET ...`.
    /// Arguments follow placeholder order: join arguments, then `WHERE`, then `HAVING`.
    ///
    /// # Returns
    ///
    /// * `Ok((String, Vec<ColumnValue>))` - The SQL and its bind arguments.
    /// * `Err(BuildError::NoColumns)` - If the projection list is empty or every entry is blank.
    /// * `Err(BuildError::Placeholder)` - If placeholders could not be rewritten.
    pub fn to_sql(&self) -> Result<(String, Vec<ColumnValue>), BuildError> {
        if self.projection.is_blank() {
            warn!(from = ?self.from, "select statement has no columns");
            return Err(BuildError::NoColumns);
        }

        let mut sql = String::from("SELECT ");
        let mut args = Vec::new();

        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.projection.render());

        if let Some(table) = &self.from {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join.kind.keyword());
            sql.push(' ');
            sql.push_str(&join.clause);
            args.extend(join.args.iter().cloned());
        }

        Self::write_predicates(" WHERE ", &self.where_predicates, &mut sql, &mut args);

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        Self::write_predicates(" HAVING ", &self.having_predicates, &mut sql, &mut args);

        if !self.order_by.is_empty() {
            let keys: Vec<String> = self.order_by.iter().map(OrderingKey::render).collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&keys.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        let sql = self.placeholder_format.replace(&sql)?;
        debug!(sql = %sql, args = args.len(), "generated select statement");
        Ok((sql, args))
    }

    fn write_predicates(
        keyword: &str,
        predicates: &[Predicate],
        sql: &mut String,
        args: &mut Vec<ColumnValue>,
    ) {
        if predicates.is_empty() {
            return;
        }
        sql.push_str(keyword);
        for (index, predicate) in predicates.iter().enumerate() {
            if index > 0 {
                sql.push_str(" AND ");
            }
            predicate.write_to(sql, args);
        }
    }
}
