//! UPSERT (insert-or-update) statement builder.
//!
//! The builder accumulates state without checking it; every rule is checked
//! once, by [`Upsert::statement`], which turns the builder into a validated
//! [`UpsertStatement`]. Rendering a validated statement cannot fail.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{Result, UpsertError};
use crate::placeholder::PlaceholderStyle;

use super::value::{SqlValue, ToSqlValue};
use super::writer::SqlWriter;

/// The unique key used to detect a conflicting row.
#[derive(Debug, Clone, PartialEq)]
struct Key {
    column: String,
    value: Option<SqlValue>,
}

/// A `column = value` assignment applied to the conflicting row.
#[derive(Debug, Clone, PartialEq)]
struct Replacement {
    column: String,
    value: SqlValue,
}

/// A dialect-aware UPSERT builder.
///
/// # Example
///
/// ```rust
/// use oxide_upsert::{Dialect, SqlValue, Upsert};
///
/// let (sql, params) = Upsert::new("users", Dialect::Postgres)
///     .columns(&["name", "email"])
///     .values(vec!["John Doe", "john@doe.com"])
///     .key("email")
///     .replace("name", "John Does")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     sql,
///     "INSERT INTO \"users\" (\"name\", \"email\") VALUES ($1, $2) \
///      ON CONFLICT (\"email\") DO UPDATE SET \"name\" = $3;"
/// );
/// assert_eq!(params.len(), 3);
/// assert_eq!(params[2], SqlValue::Text(String::from("John Does")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Upsert {
    table: String,
    dialect: Dialect,
    columns: Vec<String>,
    values: Vec<SqlValue>,
    key: Option<Key>,
    replacements: Vec<Replacement>,
    placeholder: Option<PlaceholderStyle>,
}

impl Upsert {
    /// Creates a new UPSERT builder for `table`.
    ///
    /// An empty table name is accepted here and reported by [`Upsert::build`].
    #[must_use]
    pub fn new(table: &str, dialect: Dialect) -> Self {
        Self {
            table: String::from(table),
            dialect,
            columns: vec![],
            values: vec![],
            key: None,
            replacements: vec![],
            placeholder: None,
        }
    }

    /// Specifies the columns to insert into, replacing any earlier list.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Specifies the row of values to insert, replacing any earlier row.
    ///
    /// Value `i` is inserted into column `i`.
    #[must_use]
    pub fn values<T: ToSqlValue>(mut self, vals: Vec<T>) -> Self {
        self.values = vals.into_iter().map(ToSqlValue::to_sql_value).collect();
        self
    }

    /// Specifies the unique key column without a value.
    ///
    /// Enough for PostgreSQL and SQLite. MySQL ignores the key.
    #[must_use]
    pub fn key(mut self, column: &str) -> Self {
        self.key = Some(Key {
            column: String::from(column),
            value: None,
        });
        self
    }

    /// Specifies the unique key column and the value identifying the row.
    ///
    /// MS SQL binds the value twice: in the existence probe and in the
    /// `WHERE` of the fallback update. Other dialects do not bind it.
    #[must_use]
    pub fn key_value<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.key = Some(Key {
            column: String::from(column),
            value: Some(value.to_sql_value()),
        });
        self
    }

    /// Adds a `column = value` assignment applied when the row already exists.
    ///
    /// Assignments are rendered in the order they were added.
    #[must_use]
    pub fn replace<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.replacements.push(Replacement {
            column: String::from(column),
            value: value.to_sql_value(),
        });
        self
    }

    /// Overrides the dialect's default placeholder style.
    #[must_use]
    pub fn placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = Some(style);
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Returns the target dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the placeholder style `build` will use.
    #[must_use]
    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.placeholder
            .unwrap_or_else(|| self.dialect.default_placeholder())
    }

    /// Validates the builder state.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in this order: table,
    /// columns, values, value count, replacements, dialect key requirement.
    pub fn statement(&self) -> Result<UpsertStatement<'_>> {
        if self.table.is_empty() {
            return Err(UpsertError::MissingTable);
        }
        if self.columns.is_empty() {
            return Err(UpsertError::NoColumns);
        }
        if self.values.is_empty() {
            return Err(UpsertError::NoValues);
        }
        if self.values.len() != self.columns.len() {
            return Err(UpsertError::ValueCountMismatch {
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }
        if self.replacements.is_empty() {
            return Err(UpsertError::NoReplacements);
        }

        let key = self.key.as_ref().filter(|k| !k.column.is_empty());
        let target = match self.dialect {
            Dialect::MySql => ConflictTarget::DuplicateKey,
            Dialect::Postgres | Dialect::Sqlite => {
                let key = key.ok_or(UpsertError::MissingKeyPostgresSqlite)?;
                ConflictTarget::OnConflict {
                    column: &key.column,
                }
            }
            Dialect::MsSql => match key {
                Some(Key {
                    column,
                    value: Some(value),
                }) => ConflictTarget::Probe { column, value },
                _ => return Err(UpsertError::MissingKeyMsSql),
            },
        };

        Ok(UpsertStatement {
            table: &self.table,
            columns: &self.columns,
            values: &self.values,
            replacements: &self.replacements,
            target,
            style: self.placeholder_style(),
        })
    }

    /// Builds the UPSERT statement and returns SQL with parameters.
    ///
    /// Parameter `i` is bound to the `i`-th placeholder, reading the SQL left
    /// to right. The builder is not consumed; building twice gives the same
    /// result.
    ///
    /// # Errors
    ///
    /// See [`Upsert::statement`].
    pub fn build(&self) -> Result<(String, Vec<SqlValue>)> {
        match self.statement() {
            Ok(stmt) => {
                let (sql, params) = stmt.render();
                debug!(
                    dialect = %self.dialect,
                    table = %self.table,
                    placeholder = %stmt.style,
                    params = params.len(),
                    "rendered upsert"
                );
                Ok((sql, params))
            }
            Err(err) => {
                debug!(
                    dialect = %self.dialect,
                    table = %self.table,
                    error = %err,
                    "upsert validation failed"
                );
                Err(err)
            }
        }
    }

    /// Builds the UPSERT statement and returns only the SQL string.
    ///
    /// # Errors
    ///
    /// See [`Upsert::statement`].
    pub fn build_sql(&self) -> Result<String> {
        self.build().map(|(sql, _)| sql)
    }
}

/// How a dialect detects and handles the conflicting row.
#[derive(Debug, Clone, Copy)]
enum ConflictTarget<'a> {
    /// `ON DUPLICATE KEY UPDATE`, keyed on the table's own constraints.
    DuplicateKey,
    /// `ON CONFLICT ("key") DO UPDATE SET`.
    OnConflict { column: &'a str },
    /// `IF NOT EXISTS (...) INSERT ... ELSE UPDATE ... WHERE "key" = value`.
    Probe { column: &'a str, value: &'a SqlValue },
}

/// A validated UPSERT, borrowed from its [`Upsert`] builder.
#[derive(Debug, Clone, Copy)]
pub struct UpsertStatement<'a> {
    table: &'a str,
    columns: &'a [String],
    values: &'a [SqlValue],
    replacements: &'a [Replacement],
    target: ConflictTarget<'a>,
    style: PlaceholderStyle,
}

impl UpsertStatement<'_> {
    /// Returns the placeholder style used for rendering.
    #[must_use]
    pub const fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Renders the SQL text and its parameters.
    #[must_use]
    pub fn render(&self) -> (String, Vec<SqlValue>) {
        let mut w = SqlWriter::new(self.style);

        match self.target {
            ConflictTarget::DuplicateKey => {
                self.write_insert(&mut w);
                w.push(" ON DUPLICATE KEY UPDATE ");
                self.write_replacements(&mut w);
            }
            ConflictTarget::OnConflict { column } => {
                self.write_insert(&mut w);
                w.push(" ON CONFLICT (");
                w.push_ident(column);
                w.push(") DO UPDATE SET ");
                self.write_replacements(&mut w);
            }
            ConflictTarget::Probe { column, value } => {
                w.push("IF NOT EXISTS (SELECT * FROM ");
                w.push_ident(self.table);
                w.push(" WHERE ");
                w.push_ident(column);
                w.push(" = ");
                w.bind(value);
                w.push(") ");
                self.write_insert(&mut w);
                w.push(" ELSE UPDATE ");
                w.push_ident(self.table);
                w.push(" SET ");
                self.write_replacements(&mut w);
                w.push(" WHERE ");
                w.push_ident(column);
                w.push(" = ");
                w.bind(value);
            }
        }

        w.push(";");
        w.finish()
    }

    fn write_insert(&self, w: &mut SqlWriter) {
        w.push("INSERT INTO ");
        w.push_ident(self.table);
        w.push(" (");
        w.push_ident_list(self.columns.iter().map(String::as_str));
        w.push(") VALUES (");
        w.bind_list(self.values);
        w.push(")");
    }

    fn write_replacements(&self, w: &mut SqlWriter) {
        w.push_assignments(
            self.replacements
                .iter()
                .map(|r| (r.column.as_str(), &r.value)),
        );
    }
}
