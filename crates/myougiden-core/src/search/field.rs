//! Searchable dictionary fields and their storage mapping.

use crate::{MyougidenError, Result};
use std::fmt;
use std::str::FromStr;

/// A field an entry can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Written form (kanji headword).
    Kanji,
    /// Kana reading.
    Reading,
    /// English gloss.
    Sense,
}

impl Field {
    /// Canonical order tried by a guess search.
    pub const GUESS_ORDER: [Field; 3] = [Field::Kanji, Field::Reading, Field::Sense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Kanji => "kanji",
            Field::Reading => "reading",
            Field::Sense => "sense",
        }
    }

    /// Child table holding this field's rows.
    pub fn table(&self) -> &'static str {
        match self {
            Field::Kanji => "kanjis",
            Field::Reading => "readings",
            Field::Sense => "senses",
        }
    }

    /// Column holding this field's text inside [`Field::table`].
    pub fn column(&self) -> &'static str {
        match self {
            Field::Kanji => "kanji",
            Field::Reading => "reading",
            Field::Sense => "sense",
        }
    }
}

impl FromStr for Field {
    type Err = MyougidenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kanji" => Ok(Field::Kanji),
            "reading" => Ok(Field::Reading),
            "sense" => Ok(Field::Sense),
            other => Err(MyougidenError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
