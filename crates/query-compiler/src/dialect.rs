//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect. Both supported back ends accept
    /// double quotes.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query, given the 0-based
    /// count of arguments bound so far.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - SQLite uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Whether NULL members of an IN list are bound as arguments.
    ///
    /// SQLite binds every member, NULLs included. PostgreSQL skips them:
    /// NULL membership must be expressed by the builder as a separate
    /// `IS NULL` predicate.
    fn binds_null_in_list(&self) -> bool;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "SQLite").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn binds_null_in_list(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // SQLite uses ?
        "?".into()
    }

    fn binds_null_in_list(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}
