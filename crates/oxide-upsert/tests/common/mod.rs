#![allow(dead_code)]

use oxide_upsert::{Dialect, PlaceholderStyle, Upsert};

pub const DIALECTS: [Dialect; 4] = [
    Dialect::MySql,
    Dialect::Postgres,
    Dialect::Sqlite,
    Dialect::MsSql,
];

pub const STYLES: [PlaceholderStyle; 3] = [
    PlaceholderStyle::Question,
    PlaceholderStyle::Dollar,
    PlaceholderStyle::AtP,
];

/// Returns every placeholder token in `sql`, left to right.
///
/// Only tokens outside double-quoted identifiers are counted.
pub fn placeholders(sql: &str, style: PlaceholderStyle) -> Vec<String> {
    let prefix = match style {
        PlaceholderStyle::Question => "?",
        PlaceholderStyle::Dollar => "$",
        PlaceholderStyle::AtP => "@p",
    };

    let mut found = vec![];
    let mut in_ident = false;
    let mut rest = sql;
    while let Some(c) = rest.chars().next() {
        if c == '"' {
            in_ident = !in_ident;
            rest = &rest[1..];
            continue;
        }
        if !in_ident && rest.starts_with(prefix) {
            let after = &rest[prefix.len()..];
            let digits: String = after.chars().take_while(char::is_ascii_digit).collect();
            found.push(format!("{prefix}{digits}"));
            rest = &after[digits.len()..];
            continue;
        }
        rest = &rest[c.len_utf8()..];
    }
    found
}

/// A builder that passes validation for `dialect`.
pub fn valid_users(dialect: Dialect) -> Upsert {
    Upsert::new("users", dialect)
        .columns(&["name", "email"])
        .values(vec!["John Doe", "john@doe.com"])
        .key_value("email", "john@doe.com")
        .replace("name", "John Does")
}
