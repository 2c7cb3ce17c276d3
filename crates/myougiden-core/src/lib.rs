//! myougiden core - search engine for a JMdict-derived SQLite dictionary.
//!
//! Queries are matched against one of three fields (written form, reading or
//! English gloss) either literally with `LIKE` or as a regular expression. When
//! no field is given, a guess search tries kanji, then reading, then sense, and
//! keeps the first field that matches anything.
//!
//! # Example
//!
//! ```rust,no_run
//! use myougiden_core::{Dictionary, MatchOptions, SearchRequest};
//!
//! fn main() -> myougiden_core::Result<()> {
//!     let options = MatchOptions {
//!         partial: true,
//!         ..Default::default()
//!     };
//!     let request = SearchRequest::new("water", None, options);
//!     let dict = Dictionary::open("jmdict.sqlite", request.case_mode())?;
//!
//!     for entry in dict.lookup(&request)? {
//!         println!("{:?} {:?} {:?}", entry.kanjis, entry.readings, entry.senses);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use config::{DictionaryConfig, PathsConfig};
pub use dictionary::{Dictionary, EntSeq, Entry};
pub use error::{MyougidenError, Result};
pub use search::{
    build_predicate, guess_search, CaseMode, Field, FieldSearch, MatchOperator, MatchOptions,
    Predicate, RegexCache, SearchCondition, SearchRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
