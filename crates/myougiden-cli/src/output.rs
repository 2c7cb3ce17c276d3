//! Plain-text rendering of dictionary entries.

use myougiden_core::{DictionaryConfig, Entry};

/// Render an entry as `kanjis<TAB>readings<TAB>senses`.
///
/// Written forms and readings are joined with a full-width semicolon, glosses
/// with an ASCII one. Empty groups stay in place as empty columns.
pub fn format_entry_tsv(entry: &Entry) -> String {
    format!(
        "{}\t{}\t{}",
        entry.kanjis.join(DictionaryConfig::JAPANESE_SEPARATOR),
        entry.readings.join(DictionaryConfig::JAPANESE_SEPARATOR),
        entry.senses.join(DictionaryConfig::GLOSS_SEPARATOR),
    )
}
