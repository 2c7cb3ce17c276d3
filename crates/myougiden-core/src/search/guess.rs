//! Fallback search across several fields.

use super::options::SearchCondition;
use crate::{EntSeq, Result};
use tracing::debug;

/// Anything able to run a single-field search.
pub trait FieldSearch {
    /// Ids of entries matching `condition`, in storage order.
    fn search_by(&self, condition: &SearchCondition) -> Result<Vec<EntSeq>>;
}

/// Try `conditions` in order and return the first non-empty result.
///
/// Later conditions are not evaluated once one matches. Running out of
/// conditions yields an empty result, not an error.
pub fn guess_search<S>(searcher: &S, conditions: &[SearchCondition]) -> Result<Vec<EntSeq>>
where
    S: FieldSearch + ?Sized,
{
    for condition in conditions {
        let found = searcher.search_by(condition)?;
        if !found.is_empty() {
            debug!(
                "Guess search matched {} entries by {}",
                found.len(),
                condition.field
            );
            return Ok(found);
        }
        debug!("Guess search: no match by {}", condition.field);
    }

    Ok(Vec::new())
}
