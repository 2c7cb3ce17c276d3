//! Dictionary search engine.
//!
//! This module provides:
//! - Field selection and its storage mapping
//! - Predicate building for literal and regular-expression queries
//! - A session-scoped cache of compiled patterns
//! - Guess search falling back through fields in priority order

mod field;
mod guess;
mod options;
mod predicate;
mod regex_cache;

pub use field::Field;
pub use guess::{guess_search, FieldSearch};
pub use options::{CaseMode, MatchOptions, SearchCondition, SearchRequest};
pub use predicate::{build_predicate, MatchOperator, Predicate};
pub use regex_cache::RegexCache;
