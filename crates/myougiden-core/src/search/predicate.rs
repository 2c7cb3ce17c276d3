//! Translation of a search condition into an SQL predicate.
//!
//! Literal searches use SQLite's `LIKE`; regular-expression searches use the
//! `REGEXP` operator backed by the session's `regexp()` hook. The query text is
//! rewritten so both operators see full-string semantics unless a partial or
//! word match was requested:
//!
//! | mode                     | query sent           |
//! |--------------------------|----------------------|
//! | regexp + whole word      | `\b{q}\b`            |
//! | regexp                   | `^{q}$`              |
//! | regexp + partial         | `{q}`                |
//! | literal + partial        | `%{q}%`              |
//! | literal                  | `{q}`                |
//!
//! Literal mode does not escape `%` or `_`, so they keep their wildcard meaning.
//! Whole-word matching is not implemented for literal mode and is ignored there.

use super::field::Field;
use super::options::{MatchOptions, SearchCondition};
use std::fmt;
use tracing::debug;

/// SQL comparison operator used by a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    Like,
    Regexp,
}

impl MatchOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            MatchOperator::Like => "LIKE",
            MatchOperator::Regexp => "REGEXP",
        }
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A ready-to-bind predicate against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: Field,
    pub operator: MatchOperator,
    /// Query text after anchoring or wildcard wrapping.
    pub query: String,
}

impl Predicate {
    /// `SELECT` returning the ids of entries whose field satisfies the predicate.
    ///
    /// The query text is left as the single bound parameter `?1`.
    pub fn select_sql(&self) -> String {
        let table = self.field.table();
        format!(
            "SELECT ent_seq FROM entries NATURAL INNER JOIN {table} WHERE {table}.{column} {op} ?1",
            column = self.field.column(),
            op = self.operator.as_sql(),
        )
    }
}

/// Build the predicate for `query` against `field`.
pub fn build_predicate(field: Field, query: &str, options: &MatchOptions) -> Predicate {
    let (operator, query) = if options.regexp {
        let query = if options.whole_word {
            format!(r"\b{query}\b")
        } else if !options.partial {
            format!("^{query}$")
        } else {
            query.to_string()
        };
        (MatchOperator::Regexp, query)
    } else {
        let query = if options.whole_word {
            debug!("Whole-word matching requires regexp mode; matching literally");
            query.to_string()
        } else if options.partial {
            format!("%{query}%")
        } else {
            query.to_string()
        };
        (MatchOperator::Like, query)
    };

    Predicate {
        field,
        operator,
        query,
    }
}

impl From<&SearchCondition> for Predicate {
    fn from(condition: &SearchCondition) -> Self {
        build_predicate(condition.field, &condition.query, &condition.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(partial: bool, whole_word: bool, regexp: bool) -> MatchOptions {
        MatchOptions {
            partial,
            whole_word,
            regexp,
            case_sensitive: false,
        }
    }

    #[test]
    fn test_regexp_full_match_is_anchored() {
        for field in Field::GUESS_ORDER {
            let predicate = build_predicate(field, "mizu", &options(false, false, true));
            assert_eq!(predicate.operator, MatchOperator::Regexp);
            assert_eq!(predicate.query, "^mizu$");
        }
    }

    #[test]
    fn test_regexp_whole_word_ignores_partial() {
        for partial in [false, true] {
            let predicate = build_predicate(Field::Sense, "water", &options(partial, true, true));
            assert_eq!(predicate.query, r"\bwater\b");
        }
    }

    #[test]
    fn test_regexp_partial_is_unchanged() {
        let predicate = build_predicate(Field::Sense, "wat.r", &options(true, false, true));
        assert_eq!(predicate.query, "wat.r");
    }

    #[test]
    fn test_literal_partial_wraps_wildcards() {
        let predicate = build_predicate(Field::Reading, "みず", &options(true, false, false));
        assert_eq!(predicate.operator, MatchOperator::Like);
        assert_eq!(predicate.query, "%みず%");
    }

    #[test]
    fn test_literal_exact_is_unchanged() {
        let predicate = build_predicate(Field::Kanji, "水", &options(false, false, false));
        assert_eq!(predicate.query, "水");
    }

    #[test]
    fn test_literal_whole_word_is_noop() {
        let predicate = build_predicate(Field::Sense, "water", &options(false, true, false));
        assert_eq!(predicate.operator, MatchOperator::Like);
        assert_eq!(predicate.query, "water");

        let predicate = build_predicate(Field::Sense, "water", &options(true, true, false));
        assert_eq!(predicate.query, "water");
    }

    #[test]
    fn test_literal_does_not_escape_wildcards() {
        let predicate = build_predicate(Field::Sense, "50%_off", &options(false, false, false));
        assert_eq!(predicate.query, "50%_off");
    }

    #[test]
    fn test_case_sensitivity_does_not_change_query() {
        let mut opts = options(false, false, true);
        let insensitive = build_predicate(Field::Sense, "Tokyo", &opts);
        opts.case_sensitive = true;
        let sensitive = build_predicate(Field::Sense, "Tokyo", &opts);
        assert_eq!(insensitive, sensitive);
    }

    #[test]
    fn test_select_sql_uses_field_mapping() {
        let predicate = build_predicate(Field::Reading, "みず", &options(false, false, true));
        assert_eq!(
            predicate.select_sql(),
            "SELECT ent_seq FROM entries NATURAL INNER JOIN readings \
             WHERE readings.reading REGEXP ?1"
        );
    }

    #[test]
    fn test_from_condition() {
        let condition = SearchCondition::new(Field::Sense, "water", options(true, false, false));
        let predicate = Predicate::from(&condition);
        assert_eq!(predicate.query, "%water%");
        assert_eq!(predicate.field, Field::Sense);
    }
}
