//! Parameter placeholder styles.

use core::fmt;
use core::str::FromStr;

use crate::error::UpsertError;

/// How bound parameters are spelled in the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaceholderStyle {
    /// `?` for every parameter.
    Question,
    /// `$1`, `$2`, ...
    Dollar,
    /// `@p1`, `@p2`, ...
    AtP,
}

impl PlaceholderStyle {
    /// Appends the placeholder for the parameter at the 0-based `index`.
    pub fn write(self, index: usize, out: &mut String) {
        match self {
            Self::Question => out.push('?'),
            Self::Dollar => {
                out.push('$');
                out.push_str(&(index + 1).to_string());
            }
            Self::AtP => {
                out.push_str("@p");
                out.push_str(&(index + 1).to_string());
            }
        }
    }

    /// Returns the placeholder for the parameter at the 0-based `index`.
    #[must_use]
    pub fn format(self, index: usize) -> String {
        let mut out = String::new();
        self.write(index, &mut out);
        out
    }

    /// Returns the name of the style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Dollar => "dollar",
            Self::AtP => "atp",
        }
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlaceholderStyle {
    type Err = UpsertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "?" => Ok(Self::Question),
            "dollar" | "$" => Ok(Self::Dollar),
            "atp" | "@p" => Ok(Self::AtP),
            _ => Err(UpsertError::UnknownPlaceholder(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_constant() {
        assert_eq!(PlaceholderStyle::Question.format(0), "?");
        assert_eq!(PlaceholderStyle::Question.format(41), "?");
    }

    #[test]
    fn test_numbered_styles_are_one_based() {
        assert_eq!(PlaceholderStyle::Dollar.format(0), "$1");
        assert_eq!(PlaceholderStyle::Dollar.format(11), "$12");
        assert_eq!(PlaceholderStyle::AtP.format(0), "@p1");
        assert_eq!(PlaceholderStyle::AtP.format(4), "@p5");
    }

    #[test]
    fn test_write_appends() {
        let mut s = String::from("x = ");
        PlaceholderStyle::Dollar.write(2, &mut s);
        assert_eq!(s, "x = $3");
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("Dollar".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::Dollar));
        assert_eq!("?".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::Question));
        assert_eq!("@p".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::AtP));
        assert_eq!(PlaceholderStyle::AtP.to_string(), "atp");
        assert!(matches!(
            "colon".parse::<PlaceholderStyle>(),
            Err(UpsertError::UnknownPlaceholder(_))
        ));
    }
}
