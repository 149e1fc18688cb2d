//! UPSERT builder.
//!
//! # Example
//!
//! ```rust
//! use oxide_upsert::builder::upsert;
//! use oxide_upsert::Dialect;
//!
//! let (sql, params) = upsert("users", Dialect::MySql)
//!     .columns(&["name", "email"])
//!     .values(vec!["John Doe", "john@doe.com"])
//!     .replace("name", "John Does")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "INSERT INTO \"users\" (\"name\", \"email\") VALUES (?, ?) \
//!      ON DUPLICATE KEY UPDATE \"name\" = ?;"
//! );
//! assert_eq!(params.len(), 3);
//! ```

mod statement;
pub mod value;
mod writer;

pub use statement::{Upsert, UpsertStatement};
pub use value::{SqlValue, ToSqlValue};

use crate::dialect::Dialect;

/// Starts an UPSERT into `table` for `dialect`.
#[must_use]
pub fn upsert(table: &str, dialect: Dialect) -> Upsert {
    Upsert::new(table, dialect)
}
