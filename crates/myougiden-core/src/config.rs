//! Centralized configuration for myougiden.
//!
//! Paths, upstream locations and output separators used by the library and the CLI.

use std::path::PathBuf;

/// Shared directory and path configurations.
pub struct PathsConfig;

impl PathsConfig {
    pub const SHARE_DIR: &'static str = ".";
    pub const DATABASE_FILENAME: &'static str = "jmdict.sqlite";

    /// Default location of the dictionary database.
    pub fn default_database() -> PathBuf {
        PathBuf::from(Self::SHARE_DIR).join(Self::DATABASE_FILENAME)
    }
}

/// Dictionary source and presentation settings.
pub struct DictionaryConfig;

impl DictionaryConfig {
    pub const JMDICT_URL: &'static str = "http://ftp.monash.edu.au/pub/nihongo/JMdict_e.gz";

    /// Separator between written forms and between readings (full-width semicolon).
    pub const JAPANESE_SEPARATOR: &'static str = "\u{FF1B}";
    /// Separator between glosses.
    pub const GLOSS_SEPARATOR: &'static str = ";";
}
