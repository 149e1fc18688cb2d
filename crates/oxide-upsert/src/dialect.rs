//! SQL dialects supported by the UPSERT builder.
//!
//! Each dialect spells "insert or update" differently:
//!
//! - **MySQL**: `INSERT ... ON DUPLICATE KEY UPDATE`, relying on the
//!   table's own unique or primary key.
//! - **PostgreSQL** and **SQLite**: `INSERT ... ON CONFLICT (key) DO UPDATE
//!   SET ...`, naming the conflicting column.
//! - **MS SQL**: no native upsert, so the statement is an
//!   `IF NOT EXISTS (...) INSERT ... ELSE UPDATE ...` pair probing on an
//!   explicit key value.

use core::fmt;
use core::str::FromStr;

use crate::error::UpsertError;
use crate::placeholder::PlaceholderStyle;

/// Target database dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    Postgres,
    /// SQLite 3.24.0+.
    Sqlite,
    /// Microsoft SQL Server.
    MsSql,
}

impl Dialect {
    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::MsSql => "mssql",
        }
    }

    /// Returns the placeholder style used when none is set explicitly.
    #[must_use]
    pub const fn default_placeholder(self) -> PlaceholderStyle {
        match self {
            Self::MySql | Self::Sqlite => PlaceholderStyle::Question,
            Self::Postgres => PlaceholderStyle::Dollar,
            Self::MsSql => PlaceholderStyle::AtP,
        }
    }

    /// Returns whether the statement must name the conflicting column.
    #[must_use]
    pub const fn requires_key_column(self) -> bool {
        !matches!(self, Self::MySql)
    }

    /// Returns whether the key value must be bound as a parameter.
    #[must_use]
    pub const fn requires_key_value(self) -> bool {
        matches!(self, Self::MsSql)
    }

    /// Quotes an identifier with double quotes.
    ///
    /// Embedded double quotes are doubled, so the result is always a single
    /// identifier token.
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        push_quoted(&mut out, name);
        out
    }
}

/// Appends `name` as a double-quoted identifier.
pub(crate) fn push_quoted(out: &mut String, name: &str) {
    out.push('"');
    for c in name.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UpsertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "mssql" | "sqlserver" => Ok(Self::MsSql),
            _ => Err(UpsertError::UnknownDialect(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::MySql.name(), "mysql");
        assert_eq!(Dialect::Postgres.name(), "postgres");
        assert_eq!(Dialect::Sqlite.name(), "sqlite");
        assert_eq!(Dialect::MsSql.name(), "mssql");
        assert_eq!(Dialect::MsSql.to_string(), "mssql");
    }

    #[test]
    fn test_default_placeholders() {
        assert_eq!(Dialect::MySql.default_placeholder(), PlaceholderStyle::Question);
        assert_eq!(Dialect::Sqlite.default_placeholder(), PlaceholderStyle::Question);
        assert_eq!(Dialect::Postgres.default_placeholder(), PlaceholderStyle::Dollar);
        assert_eq!(Dialect::MsSql.default_placeholder(), PlaceholderStyle::AtP);
    }

    #[test]
    fn test_key_requirements() {
        assert!(!Dialect::MySql.requires_key_column());
        assert!(Dialect::Postgres.requires_key_column());
        assert!(Dialect::Sqlite.requires_key_column());
        assert!(Dialect::MsSql.requires_key_column());

        assert!(Dialect::MsSql.requires_key_value());
        assert!(!Dialect::Postgres.requires_key_value());
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Dialect::MySql.quote_identifier("users"), "\"users\"");
        assert_eq!(
            Dialect::Postgres.quote_identifier("we\"ird"),
            "\"we\"\"ird\""
        );
    }

    #[test]
    fn test_parse_dialect() {
        assert_eq!("MySQL".parse::<Dialect>(), Ok(Dialect::MySql));
        assert_eq!("postgresql".parse::<Dialect>(), Ok(Dialect::Postgres));
        assert_eq!(" pg ".parse::<Dialect>(), Ok(Dialect::Postgres));
        assert_eq!("sqlite3".parse::<Dialect>(), Ok(Dialect::Sqlite));
        assert_eq!("sqlserver".parse::<Dialect>(), Ok(Dialect::MsSql));
        assert_eq!(
            "oracle".parse::<Dialect>(),
            Err(UpsertError::UnknownDialect(String::from("oracle")))
        );
    }
}
