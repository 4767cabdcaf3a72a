use sieve::query::projection::reducer::{ColumnReducer, ExclusionSet};
use sieve::query::projection::ProjectionList;
use sieve::{args, desc, select, BuildError, PlaceholderFormat, Predicate};

fn reduce(entries: &[&str], exclusions: &[&str]) -> Vec<String> {
    ColumnReducer::new(ExclusionSet::new(exclusions))
        .reduce(&ProjectionList::new(entries.iter().copied()))
        .entries()
        .to_vec()
}

#[test]
fn reduce_columns_and_generate_sql() {
    let query = select(["id", "name", "email", "age", "created_at"]).from("users");
    assert_eq!(5, query.get_select_columns().len());

    let reduced = query.reduce_columns(["email", "age"]);
    assert_eq!(&["id", "name", "created_at"], reduced.get_select_columns());

    let (sql, args) = reduced.to_sql().unwrap();
    assert_eq!("SELECT id, name, created_at FROM users", sql);
    assert!(args.is_empty());
}

#[test]
fn reduce_columns_with_no_names_returns_the_original_query() {
    let query = select(["id", "name"]).from("users");
    let reduced = query.reduce_columns(Vec::<&str>::new());

    assert_eq!(query.to_sql().unwrap(), reduced.to_sql().unwrap());
}

#[test]
fn reduce_non_existent_columns_returns_the_original_query() {
    let query = select(["id", "name"]).from("users");
    let reduced = query.reduce_columns(["non_existent_column"]);

    assert_eq!(query.to_sql().unwrap(), reduced.to_sql().unwrap());
}

#[test]
fn reduce_a_packed_entry() {
    let (sql, args) = select(["id, name"])
        .from("users")
        .reduce_columns(["id"])
        .to_sql()
        .unwrap();

    assert_eq!("SELECT name FROM users", sql);
    assert!(args.is_empty());
}

#[test]
fn reduce_mixed_entries() {
    assert_eq!(
        vec!["name", "created_at"],
        reduce(&["id, name", "email", "age, created_at"], &["id", "email", "age"])
    );

    let (sql, _) = select(["id, name", "email", "age, created_at"])
        .from("users")
        .reduce_columns(["id", "email", "age"])
        .to_sql()
        .unwrap();
    assert_eq!("SELECT name, created_at FROM users", sql);
}

#[test]
fn reduce_every_column_fails_sql_generation() {
    assert!(reduce(&["id", "name"], &["id", "name"]).is_empty());

    let result = select(["id", "name"])
        .from("users")
        .reduce_columns(["id", "name"])
        .to_sql();

    assert_eq!(Err(BuildError::NoColumns), result);
    assert_eq!(
        "invalid query: no columns to select",
        result.unwrap_err().to_string()
    );
}

#[test]
fn reduction_keeps_the_original_query_untouched() {
    let query = select(["id", "name", "email"]).from("users");
    let _reduced = query.reduce_columns(["name", "email"]);

    let (sql, _) = query.to_sql().unwrap();
    assert_eq!("SELECT id, name, email FROM users", sql);
}

#[test]
fn untouched_entry_keeps_its_formatting() {
    assert_eq!(vec!["id,name"], reduce(&["id,name"], &["email"]));
    assert_eq!(vec!["name"], reduce(&["id,name"], &["id"]));
    assert_eq!(vec!["name"], reduce(&["id,  name"], &["id"]));
}

#[test]
fn order_of_survivors_is_preserved() {
    let entries = ["a, b, c", "d", "e, f"];
    let reduced = reduce(&entries, &["b", "d", "e"]);

    assert_eq!(vec!["a, c", "f"], reduced);
}

#[test]
fn reduce_a_full_statement_with_dollar_placeholders() {
    let (sql, args) = select(["id", "name, email", "age"])
        .from("users")
        .where_clause(Predicate::eq("active", true))
        .where_clause(Predicate::greater("age", 18))
        .order_by([desc!("age")])
        .limit(5)
        .placeholder_format(PlaceholderFormat::Dollar)
        .reduce_columns(["email", "age"])
        .to_sql()
        .unwrap();

    assert_eq!(
        "SELECT id, name FROM users WHERE active = $1 AND age > $2 ORDER BY age DESC LIMIT 5",
        sql
    );
    assert_eq!(args![true, 18], args);
}
