use crate::types::column_value::ColumnValue;

/// `Predicate` represents a `WHERE` or `HAVING` condition.
///
/// Predicates render with `?` placeholders and collect their bind arguments in
/// placeholder order. Placeholder numbering for other formats is applied once
/// the whole statement has been rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// A verbatim SQL fragment with its bind arguments.
    Raw {
        sql: String,
        args: Vec<ColumnValue>,
    },
    /// A comparison predicate (e.g., `age > ?`).
    Comparison {
        /// The column name to compare.
        column_name: String,
        /// The logical comparison operator.
        operator: LogicalOperator,
        /// The value bound to the placeholder.
        value: ColumnValue,
    },
    /// A parenthesised conjunction.
    And(Vec<Predicate>),
}

/// `LogicalOperator` defines the comparison operators supported in a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Equal to `=`.
    Eq,
    /// Not equal to `<>`.
    NotEq,
    /// Greater than `>`.
    Greater,
    /// Greater than or equal to `>=`.
    GreaterEq,
    /// Less than `<`.
    Lesser,
    /// Less than or equal to `<=`.
    LesserEq,
    /// Pattern match `LIKE`.
    Like,
}

impl LogicalOperator {
    fn symbol(&self) -> &'static str {
        match self {
            LogicalOperator::Eq => "=",
            LogicalOperator::NotEq => "<>",
            LogicalOperator::Greater => ">",
            LogicalOperator::GreaterEq => ">=",
            LogicalOperator::Lesser => "<",
            LogicalOperator::LesserEq => "<=",
            LogicalOperator::Like => "LIKE",
        }
    }
}

impl Predicate {
    /// Creates a `Raw` predicate from a SQL fragment using `?` placeholders.
    ///
    /// # Arguments
    ///
    /// * `sql` - The fragment, emitted verbatim.
    /// * `args` - One bind argument per `?` in `sql`.
    pub fn raw<S, I, V>(sql: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        Predicate::Raw {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a new `Comparison` predicate.
    ///
    /// # Arguments
    ///
    /// * `column_name` - The name of the column to compare.
    /// * `operator` - The logical operator to use for comparison.
    /// * `value` - The value to compare against.
    pub fn comparison<C, V>(column_name: C, operator: LogicalOperator, value: V) -> Self
    where
        C: Into<String>,
        V: Into<ColumnValue>,
    {
        Predicate::Comparison {
            column_name: column_name.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq<C: Into<String>, V: Into<ColumnValue>>(column_name: C, value: V) -> Self {
        Self::comparison(column_name, LogicalOperator::Eq, value)
    }

    pub fn not_eq<C: Into<String>, V: Into<ColumnValue>>(column_name: C, value: V) -> Self {
        Self::comparison(column_name, LogicalOperator::NotEq, value)
    }

    pub fn greater<C: Into<String>, V: Into<ColumnValue>>(column_name: C, value: V) -> Self {
        Self::comparison(column_name, LogicalOperator::Greater, value)
    }

    pub fn lesser<C: Into<String>, V: Into<ColumnValue>>(column_name: C, value: V) -> Self {
        Self::comparison(column_name, LogicalOperator::Lesser, value)
    }

    pub fn like<C: Into<String>, P: Into<String>>(column_name: C, pattern: P) -> Self {
        Self::comparison(
            column_name,
            LogicalOperator::Like,
            ColumnValue::Text(pattern.into()),
        )
    }

    /// Creates an `And` predicate over the given predicates.
    pub fn and<I: IntoIterator<Item = Predicate>>(predicates: I) -> Self {
        Predicate::And(predicates.into_iter().collect())
    }

    /// Appends the rendered predicate to `sql` and its bind arguments to `args`.
    pub(crate) fn write_to(&self, sql: &mut String, args: &mut Vec<ColumnValue>) {
        match self {
            Predicate::Raw {
                sql: fragment,
                args: fragment_args,
            } => {
                sql.push_str(fragment);
                args.extend(fragment_args.iter().cloned());
            }
            Predicate::Comparison {
                column_name,
                operator,
                value,
            } => match (operator, value) {
                (LogicalOperator::Eq, ColumnValue::Null) => {
                    sql.push_str(&format!("{} IS NULL", column_name));
                }
                (LogicalOperator::NotEq, ColumnValue::Null) => {
                    sql.push_str(&format!("{} IS NOT NULL", column_name));
                }
                _ => {
                    sql.push_str(&format!("{} {} ?", column_name, operator.symbol()));
                    args.push(value.clone());
                }
            },
            Predicate::And(predicates) => {
                if predicates.is_empty() {
                    sql.push_str("(1=1)");
                    return;
                }
                sql.push('(');
                for (index, predicate) in predicates.iter().enumerate() {
                    if index > 0 {
                        sql.push_str(" AND ");
                    }
                    predicate.write_to(sql, args);
                }
                sql.push(')');
            }
        }
    }
}
