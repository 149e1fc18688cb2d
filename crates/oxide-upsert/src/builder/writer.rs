//! SQL text accumulator that binds parameters as it goes.

use crate::dialect::push_quoted;
use crate::placeholder::PlaceholderStyle;

use super::value::SqlValue;

/// Builds SQL text and its parameter list in one left-to-right pass.
///
/// The placeholder index is the length of `params`, so numbered placeholders
/// always match the position of their value.
pub(crate) struct SqlWriter {
    sql: String,
    params: Vec<SqlValue>,
    style: PlaceholderStyle,
}

impl SqlWriter {
    pub(crate) fn new(style: PlaceholderStyle) -> Self {
        Self {
            sql: String::with_capacity(128),
            params: vec![],
            style,
        }
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    pub(crate) fn push_ident(&mut self, name: &str) {
        push_quoted(&mut self.sql, name);
    }

    /// Emits the next placeholder and records `value` for it.
    pub(crate) fn bind(&mut self, value: &SqlValue) {
        self.style.write(self.params.len(), &mut self.sql);
        self.params.push(value.clone());
    }

    /// `"a", "b", "c"`
    pub(crate) fn push_ident_list<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_ident(name);
        }
    }

    /// `?, ?, ?`
    pub(crate) fn bind_list<'a>(&mut self, values: impl IntoIterator<Item = &'a SqlValue>) {
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.bind(value);
        }
    }

    /// `"a" = ?, "b" = ?`
    pub(crate) fn push_assignments<'a>(
        &mut self,
        assignments: impl IntoIterator<Item = (&'a str, &'a SqlValue)>,
    ) {
        for (i, (column, value)) in assignments.into_iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_ident(column);
            self.push(" = ");
            self.bind(value);
        }
    }

    pub(crate) fn finish(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_spans_fragments() {
        let mut w = SqlWriter::new(PlaceholderStyle::AtP);
        w.bind(&SqlValue::Int(1));
        w.push(" | ");
        w.bind_list(&[SqlValue::Int(2), SqlValue::Int(3)]);
        w.push(" | ");
        w.push_assignments([("a", &SqlValue::Int(4))]);
        let (sql, params) = w.finish();

        assert_eq!(sql, "@p1 | @p2, @p3 | \"a\" = @p4");
        assert_eq!(
            params,
            vec![
                SqlValue::Int(1),
                SqlValue::Int(2),
                SqlValue::Int(3),
                SqlValue::Int(4)
            ]
        );
    }

    #[test]
    fn test_ident_list() {
        let mut w = SqlWriter::new(PlaceholderStyle::Question);
        w.push_ident_list(["name", "email"]);
        let (sql, params) = w.finish();
        assert_eq!(sql, "\"name\", \"email\"");
        assert!(params.is_empty());
    }
}
