//! Search parameters: matching modifiers, case mode and per-field conditions.

use super::field::Field;
use regex::Regex;
use std::sync::LazyLock;

/// Any ASCII uppercase letter switches a search to case-sensitive mode.
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]").unwrap());

/// Case sensitivity of a dictionary session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseMode {
    /// Pick the case mode for `query`.
    ///
    /// An explicit request always wins; otherwise a query containing an
    /// uppercase letter is searched case-sensitively.
    pub fn resolve(query: &str, explicit_sensitive: bool) -> Self {
        if explicit_sensitive || UPPERCASE.is_match(query) {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, CaseMode::Sensitive)
    }
}

/// Modifiers controlling how a query is matched against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Substring match instead of full-string match.
    pub partial: bool,
    /// Match only on word boundaries. Only honored together with `regexp`.
    pub whole_word: bool,
    /// Treat the query as a regular expression.
    pub regexp: bool,
    /// Distinguish uppercase from lowercase.
    pub case_sensitive: bool,
}

impl MatchOptions {
    pub fn case_mode(&self) -> CaseMode {
        if self.case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }
}

/// A single-field search: what to look for, where, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub field: Field,
    pub query: String,
    pub options: MatchOptions,
}

impl SearchCondition {
    pub fn new(field: Field, query: impl Into<String>, options: MatchOptions) -> Self {
        Self {
            field,
            query: query.into(),
            options,
        }
    }
}

/// A user-level lookup, optionally pinned to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// `None` tries every field in [`Field::GUESS_ORDER`].
    pub field: Option<Field>,
    pub options: MatchOptions,
}

impl SearchRequest {
    /// Build a request, resolving case sensitivity from the query text.
    pub fn new(query: impl Into<String>, field: Option<Field>, mut options: MatchOptions) -> Self {
        let query = query.into();
        options.case_sensitive = CaseMode::resolve(&query, options.case_sensitive).is_sensitive();
        Self {
            query,
            field,
            options,
        }
    }

    pub fn case_mode(&self) -> CaseMode {
        self.options.case_mode()
    }

    /// Whether this request falls back through every field.
    pub fn is_guess(&self) -> bool {
        self.field.is_none()
    }

    /// Conditions to run, in order.
    pub fn conditions(&self) -> Vec<SearchCondition> {
        match self.field {
            Some(field) => vec![SearchCondition::new(field, &self.query, self.options)],
            None => Field::GUESS_ORDER
                .iter()
                .map(|&field| SearchCondition::new(field, &self.query, self.options))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_resolution() {
        assert_eq!(CaseMode::resolve("Tokyo", false), CaseMode::Sensitive);
        assert_eq!(CaseMode::resolve("tokyo", false), CaseMode::Insensitive);
        assert_eq!(CaseMode::resolve("tokyo", true), CaseMode::Sensitive);
        assert_eq!(CaseMode::resolve("東京", false), CaseMode::Insensitive);
    }

    #[test]
    fn test_request_resolves_case() {
        let request = SearchRequest::new("Tokyo", None, MatchOptions::default());
        assert!(request.options.case_sensitive);
        assert_eq!(request.case_mode(), CaseMode::Sensitive);

        let request = SearchRequest::new("tokyo", None, MatchOptions::default());
        assert_eq!(request.case_mode(), CaseMode::Insensitive);
    }

    #[test]
    fn test_guess_conditions_order() {
        let options = MatchOptions {
            partial: true,
            ..Default::default()
        };
        let request = SearchRequest::new("water", None, options);
        assert!(request.is_guess());

        let conditions = request.conditions();
        let fields: Vec<Field> = conditions.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![Field::Kanji, Field::Reading, Field::Sense]);
        assert!(conditions.iter().all(|c| c.query == "water" && c.options == options));
    }

    #[test]
    fn test_pinned_conditions() {
        let request = SearchRequest::new("みず", Some(Field::Reading), MatchOptions::default());
        let conditions = request.conditions();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].field, Field::Reading);
    }
}
