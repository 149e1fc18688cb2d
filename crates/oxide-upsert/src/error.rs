//! Error types for UPSERT building.

use thiserror::Error;

/// Errors returned when an UPSERT cannot be rendered.
///
/// Validation is fail-fast: `build` reports the first rule violated, in the
/// order the variants that concern the builder state are declared below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpsertError {
    /// The table name is empty.
    #[error("upsert statement must specify a table")]
    MissingTable,

    /// No columns were given.
    #[error("upsert statement must have at least one column")]
    NoColumns,

    /// No values were given.
    #[error("upsert statements must have at least one set of values")]
    NoValues,

    /// The values row does not line up with the column list.
    #[error("upsert statement has {columns} columns but {values} values")]
    ValueCountMismatch {
        /// Number of columns.
        columns: usize,
        /// Number of values.
        values: usize,
    },

    /// No replacement was given for the conflict branch.
    #[error("upsert statement must have at least one key value pair to be replaced")]
    NoReplacements,

    /// MS SQL needs both the key column and the key value.
    #[error("unique key and value must be provided for MS SQL")]
    MissingKeyMsSql,

    /// PostgreSQL and SQLite need the key column for `ON CONFLICT`.
    #[error("unique key must be provided for PostgreSQL and SQLite")]
    MissingKeyPostgresSqlite,

    /// A dialect name could not be parsed.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// A placeholder style name could not be parsed.
    #[error("unknown placeholder style: {0}")]
    UnknownPlaceholder(String),
}

/// Result type alias for UPSERT operations.
pub type Result<T> = std::result::Result<T, UpsertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            UpsertError::MissingTable.to_string(),
            "upsert statement must specify a table"
        );
        assert_eq!(
            UpsertError::NoColumns.to_string(),
            "upsert statement must have at least one column"
        );
        assert_eq!(
            UpsertError::NoValues.to_string(),
            "upsert statements must have at least one set of values"
        );
        assert_eq!(
            UpsertError::NoReplacements.to_string(),
            "upsert statement must have at least one key value pair to be replaced"
        );
        assert_eq!(
            UpsertError::MissingKeyMsSql.to_string(),
            "unique key and value must be provided for MS SQL"
        );
        assert_eq!(
            UpsertError::MissingKeyPostgresSqlite.to_string(),
            "unique key must be provided for PostgreSQL and SQLite"
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = UpsertError::ValueCountMismatch {
            columns: 2,
            values: 3,
        };
        assert_eq!(err.to_string(), "upsert statement has 2 columns but 3 values");
    }
}
