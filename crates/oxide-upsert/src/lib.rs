//! # oxide-upsert
//!
//! Builds dialect-correct UPSERT (insert-or-update) statements without
//! executing them. The output is a parameterized SQL string and the list of
//! values bound to its placeholders, in placeholder order.
//!
//! # How the dialects differ
//!
//! | Dialect | Key | Statement |
//! |---|---|---|
//! | MySQL | none | `INSERT ... ON DUPLICATE KEY UPDATE ...` |
//! | PostgreSQL | column | `INSERT ... ON CONFLICT ("key") DO UPDATE SET ...` |
//! | SQLite | column | same as PostgreSQL |
//! | MS SQL | column and value | `IF NOT EXISTS (SELECT ...) INSERT ... ELSE UPDATE ... WHERE ...` |
//!
//! Identifiers are always double-quoted. Default placeholders are `?` for
//! MySQL and SQLite, `$N` for PostgreSQL and `@pN` for MS SQL; any style can be
//! forced with [`Upsert::placeholder`].
//!
//! ## Example
//!
//! ```rust
//! use oxide_upsert::{Dialect, PlaceholderStyle, SqlValue, Upsert};
//!
//! let (sql, params) = Upsert::new("users", Dialect::MsSql)
//!     .columns(&["name", "email"])
//!     .values(vec!["John Doe", "john@doe.com"])
//!     .key_value("email", "john@doe.com")
//!     .replace("name", "John Does")
//!     .placeholder(PlaceholderStyle::AtP)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "IF NOT EXISTS (SELECT * FROM \"users\" WHERE \"email\" = @p1) \
//!      INSERT INTO \"users\" (\"name\", \"email\") VALUES (@p2, @p3) \
//!      ELSE UPDATE \"users\" SET \"name\" = @p4 WHERE \"email\" = @p5;"
//! );
//! assert_eq!(params.len(), 5);
//! assert_eq!(params[0], SqlValue::Text(String::from("john@doe.com")));
//! ```
//!
//! ## Validation
//!
//! Builder methods never fail. [`Upsert::build`] checks the state and
//! returns the first problem found:
//!
//! ```rust
//! use oxide_upsert::{Dialect, Upsert, UpsertError};
//!
//! let err = Upsert::new("users", Dialect::Sqlite)
//!     .columns(&["name", "email"])
//!     .values(vec!["James", "james@mail.com"])
//!     .replace("name", "Thomas")
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err, UpsertError::MissingKeyPostgresSqlite);
//! ```

pub mod builder;
pub mod dialect;
pub mod error;
pub mod placeholder;

pub use builder::{upsert, SqlValue, ToSqlValue, Upsert, UpsertStatement};
pub use dialect::Dialect;
pub use error::{Result, UpsertError};
pub use placeholder::PlaceholderStyle;
