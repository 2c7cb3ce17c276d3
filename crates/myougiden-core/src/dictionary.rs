//! Read-only dictionary session over a JMdict SQLite database.

use crate::search::{
    guess_search, CaseMode, Field, FieldSearch, MatchOperator, Predicate, RegexCache,
    SearchCondition, SearchRequest,
};
use crate::{MyougidenError, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry sequence number, the primary key shared by every dictionary table.
pub type EntSeq = i64;

/// A dictionary entry with all of its written forms, readings and glosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub ent_seq: EntSeq,
    pub kanjis: Vec<String>,
    pub readings: Vec<String>,
    pub senses: Vec<String>,
}

/// An open dictionary with a fixed case mode.
///
/// The case mode drives both `PRAGMA case_sensitive_like` and the `regexp()`
/// hook registered on the connection, and stays fixed for the session. Searches
/// needing a different mode need a second `Dictionary`.
pub struct Dictionary {
    conn: Connection,
    case: CaseMode,
    regex_cache: Arc<RegexCache>,
}

impl Dictionary {
    /// Open the dictionary database at `db_path` read-only.
    pub fn open(db_path: impl AsRef<Path>, case: CaseMode) -> Result<Self> {
        let db_path = db_path.as_ref();

        if !db_path.is_file() {
            return Err(MyougidenError::DatabaseNotFound(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| MyougidenError::Database {
            message: format!("Failed to open dictionary {}: {}", db_path.display(), e),
            source: Some(e),
        })?;

        info!("Opened dictionary {} ({:?})", db_path.display(), case);
        Self::from_connection(conn, case)
    }

    /// Wrap an already-open connection with a fresh pattern cache.
    pub fn from_connection(conn: Connection, case: CaseMode) -> Result<Self> {
        Self::with_regex_cache(conn, case, Arc::new(RegexCache::new()))
    }

    /// Wrap an already-open connection, sharing `regex_cache` with the caller.
    pub fn with_regex_cache(
        conn: Connection,
        case: CaseMode,
        regex_cache: Arc<RegexCache>,
    ) -> Result<Self> {
        Self::configure_case(&conn, case)?;
        Self::register_regexp(&conn, case, Arc::clone(&regex_cache))?;

        Ok(Self {
            conn,
            case,
            regex_cache,
        })
    }

    /// Set LIKE case sensitivity for the whole session.
    fn configure_case(conn: &Connection, case: CaseMode) -> Result<()> {
        let pragma = if case.is_sensitive() {
            "PRAGMA case_sensitive_like = 1;"
        } else {
            "PRAGMA case_sensitive_like = 0;"
        };
        conn.execute_batch(pragma)?;
        Ok(())
    }

    /// Register `regexp(pattern, value)`, which backs the `REGEXP` operator.
    fn register_regexp(conn: &Connection, case: CaseMode, cache: Arc<RegexCache>) -> Result<()> {
        conn.create_scalar_function(
            "regexp",
            2,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            move |ctx| {
                let pattern: String = ctx.get(0)?;
                let Some(value) = value_as_text(ctx.get_raw(1)) else {
                    return Ok(false);
                };

                let regex = cache
                    .compile(&pattern, case)
                    .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))?;
                Ok(regex.is_match(&value))
            },
        )?;
        Ok(())
    }

    /// Pattern cache backing this session's `regexp()` hook.
    pub fn regex_cache(&self) -> &Arc<RegexCache> {
        &self.regex_cache
    }

    /// Search a single field. Returns entry ids in storage order, duplicates included.
    pub fn search_by(&self, condition: &SearchCondition) -> Result<Vec<EntSeq>> {
        let predicate = Predicate::from(condition);

        if condition.options.case_mode() != self.case {
            warn!(
                "Search requested {:?} matching but the session is {:?}",
                condition.options.case_mode(),
                self.case
            );
        }

        if predicate.operator == MatchOperator::Regexp {
            self.regex_cache.compile(&predicate.query, self.case)?;
        }

        debug!(
            "Searching {} {} {:?}",
            predicate.field, predicate.operator, predicate.query
        );

        let mut stmt = self.conn.prepare_cached(&predicate.select_sql())?;
        let rows = stmt.query_map(params![predicate.query], |row| row.get(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }

        debug!("{} rows matched by {}", ids.len(), predicate.field);
        Ok(ids)
    }

    /// Try each condition in order, returning the first non-empty result.
    pub fn guess_search(&self, conditions: &[SearchCondition]) -> Result<Vec<EntSeq>> {
        guess_search(self, conditions)
    }

    /// Load every written form, reading and gloss of an entry.
    ///
    /// An unknown id yields an entry with three empty lists.
    pub fn fetch_entry(&self, ent_seq: EntSeq) -> Result<Entry> {
        Ok(Entry {
            ent_seq,
            kanjis: self.field_values(Field::Kanji, ent_seq)?,
            readings: self.field_values(Field::Reading, ent_seq)?,
            senses: self.field_values(Field::Sense, ent_seq)?,
        })
    }

    /// Text values of `field` for an entry. NULL and blob rows are skipped.
    fn field_values(&self, field: Field, ent_seq: EntSeq) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE ent_seq = ?1",
            field.column(),
            field.table()
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params![ent_seq], |row| Ok(value_as_text(row.get_ref(0)?)))?;

        let mut values = Vec::new();
        for row in rows {
            if let Some(value) = row? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Run a request (pinned field or guess) and fetch every matching entry.
    pub fn lookup(&self, request: &SearchRequest) -> Result<Vec<Entry>> {
        let ids = match request.field {
            Some(field) => self.search_by(&SearchCondition::new(
                field,
                &request.query,
                request.options,
            ))?,
            None => self.guess_search(&request.conditions())?,
        };

        ids.into_iter().map(|id| self.fetch_entry(id)).collect()
    }
}

/// Text form of a column value, the way SQLite's `LIKE` sees it.
///
/// Numbers are rendered as text; NULL and blobs have no text form.
fn value_as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(text) => Some(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

impl FieldSearch for Dictionary {
    fn search_by(&self, condition: &SearchCondition) -> Result<Vec<EntSeq>> {
        Dictionary::search_by(self, condition)
    }
}
