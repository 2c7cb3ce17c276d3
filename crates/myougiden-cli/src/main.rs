//! myougiden - Japanese/English command-line dictionary.
//!
//! Looks a query up in a JMdict SQLite database and prints one tab-separated
//! line per matching entry.

mod output;

use anyhow::{anyhow, Result};
use clap::{ArgGroup, Parser};
use myougiden_core::{
    Dictionary, DictionaryConfig, Field, MatchOptions, MyougidenError, PathsConfig, SearchRequest,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "myougiden")]
#[command(about = "Japanese/English command-line dictionary")]
#[command(group(ArgGroup::new("field").args(["by_kanji", "by_reading", "by_sense"])))]
struct Args {
    /// Search entry with kanji field matching query
    #[arg(short = 'k', long)]
    by_kanji: bool,

    /// Search entry with reading field (in kana) matching query
    #[arg(short = 'r', long)]
    by_reading: bool,

    /// Search entry with sense field (English translation) matching query
    #[arg(short = 's', long)]
    by_sense: bool,

    /// Case-sensitive search (distinguish uppercase from lowercase)
    #[arg(long, visible_alias = "sensitive")]
    case_sensitive: bool,

    /// Search partial matches
    #[arg(short, long)]
    partial: bool,

    /// Match whole words only (requires -x)
    #[arg(short, long)]
    word: bool,

    /// Regular expression search
    #[arg(short = 'x', long)]
    regexp: bool,

    /// Dictionary database (defaults to ./jmdict.sqlite)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Text to look up
    query: String,
}

impl Args {
    /// Field pinned on the command line, if any.
    fn field(&self) -> Option<Field> {
        if self.by_kanji {
            Some(Field::Kanji)
        } else if self.by_reading {
            Some(Field::Reading)
        } else if self.by_sense {
            Some(Field::Sense)
        } else {
            None
        }
    }

    fn request(&self) -> SearchRequest {
        let options = MatchOptions {
            partial: self.partial,
            whole_word: self.word,
            regexp: self.regexp,
            case_sensitive: self.case_sensitive,
        };
        SearchRequest::new(self.query.clone(), self.field(), options)
    }

    fn database(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(PathsConfig::default_database)
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Turn a library error into the message shown to the user.
///
/// Errors caused by the query or the setup get a short message; store failures
/// keep their source chain under `context`.
fn report(err: MyougidenError, context: impl Into<String>) -> anyhow::Error {
    match err {
        MyougidenError::DatabaseNotFound(path) => anyhow!(
            "Dictionary database not found at {}; build it from {} first",
            path.display(),
            DictionaryConfig::JMDICT_URL
        ),
        err if err.is_user_error() => anyhow::Error::new(err),
        err => anyhow::Error::new(err).context(context.into()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let request = args.request();
    let db_path = args.database();
    debug!("Request: {:?}", request);

    let dict = Dictionary::open(&db_path, request.case_mode())
        .map_err(|e| report(e, "Failed to open dictionary"))?;

    let entries = dict
        .lookup(&request)
        .map_err(|e| report(e, format!("Search for {:?} failed", request.query)))?;

    if entries.is_empty() {
        info!("No entries matched {:?}", request.query);
    }

    let mut stdout = std::io::stdout().lock();
    for entry in &entries {
        writeln!(stdout, "{}", output::format_entry_tsv(entry))?;
    }
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use myougiden_core::CaseMode;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("Should parse")
    }

    #[test]
    fn test_default_is_guess() {
        let args = parse(&["myougiden", "みず"]);
        assert_eq!(args.field(), None);
        assert!(args.request().is_guess());
        assert_eq!(args.database(), PathsConfig::default_database());
    }

    #[test]
    fn test_field_flags() {
        assert_eq!(parse(&["myougiden", "-k", "水"]).field(), Some(Field::Kanji));
        assert_eq!(parse(&["myougiden", "-r", "みず"]).field(), Some(Field::Reading));
        assert_eq!(
            parse(&["myougiden", "--by-sense", "water"]).field(),
            Some(Field::Sense)
        );
    }

    #[test]
    fn test_field_flags_are_exclusive() {
        assert!(Args::try_parse_from(["myougiden", "-k", "-s", "water"]).is_err());
    }

    #[test]
    fn test_match_flags() {
        let args = parse(&["myougiden", "-p", "-w", "-x", "--sensitive", "wat.r"]);
        let request = args.request();
        assert!(request.options.partial);
        assert!(request.options.whole_word);
        assert!(request.options.regexp);
        assert_eq!(request.case_mode(), CaseMode::Sensitive);
    }

    #[test]
    fn test_case_auto_detection() {
        assert_eq!(
            parse(&["myougiden", "Tokyo"]).request().case_mode(),
            CaseMode::Sensitive
        );
        assert_eq!(
            parse(&["myougiden", "tokyo"]).request().case_mode(),
            CaseMode::Insensitive
        );
    }

    #[test]
    fn test_database_override() {
        let args = parse(&["myougiden", "--database", "/tmp/dict.sqlite", "water"]);
        assert_eq!(args.database(), PathBuf::from("/tmp/dict.sqlite"));
    }

    #[test]
    fn test_report_missing_database() {
        let err = report(
            MyougidenError::DatabaseNotFound(PathBuf::from("jmdict.sqlite")),
            "Failed to open dictionary",
        );
        let message = err.to_string();
        assert!(message.starts_with("Dictionary database not found at jmdict.sqlite"));
        assert!(message.contains(DictionaryConfig::JMDICT_URL));
    }

    #[test]
    fn test_report_user_error_is_short() {
        let err = report(MyougidenError::UnknownField("foo".into()), "Search failed");
        assert_eq!(
            err.to_string(),
            "Unknown search field: foo (expected kanji, reading or sense)"
        );
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn test_report_store_error_keeps_context() {
        let err = report(MyougidenError::Other("disk I/O error".into()), "Search failed");
        assert_eq!(err.to_string(), "Search failed");
        assert_eq!(err.root_cause().to_string(), "disk I/O error");
    }

    #[test]
    fn test_query_is_required() {
        assert!(Args::try_parse_from(["myougiden", "-p"]).is_err());
    }
}
