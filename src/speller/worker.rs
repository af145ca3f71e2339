use smol_str::SmolStr;

use super::WordRecord;
use crate::case_handling::{self, CasingCategory};
use crate::constants::{MAX_EDIT_DISTANCE, MAX_SUGGESTIONS, SUGGESTION_SLACK};
use crate::normalize;
use crate::speller::suggestion::Suggestion;

/// One suggestion pass over the record list.
///
/// Distances are computed between the folded, NFC-normalized forms of
/// the query and each record, code point by code point. Records within
/// [`SUGGESTION_SLACK`] of the best distance found survive, ranked by
/// distance with dictionary order breaking ties, and are re-cased to
/// match the shape of the query.
pub(crate) struct SuggestionWorker<'a> {
    records: &'a [WordRecord],
    query_key: SmolStr,
    query_casing: CasingCategory,
    max: usize,
}

impl<'a> SuggestionWorker<'a> {
    pub(crate) fn new(records: &'a [WordRecord], word: &str, max: usize) -> SuggestionWorker<'a> {
        let query = normalize::nfc(word);

        SuggestionWorker {
            records,
            query_key: normalize::fold_key(&query),
            query_casing: case_handling::categorize(&query),
            max,
        }
    }

    pub(crate) fn suggest(self) -> Vec<Suggestion> {
        log::trace!("Beginning suggest");

        let mut ranked: Vec<(usize, &WordRecord)> = vec![];
        let mut best = usize::MAX;

        for record in self.records {
            let distance = strsim::levenshtein(&self.query_key, &record.key);

            if distance > MAX_EDIT_DISTANCE {
                continue;
            }
            if distance < best {
                best = distance;
            }
            ranked.push((distance, record));
        }

        ranked.retain(|(distance, _)| *distance <= best + SUGGESTION_SLACK);
        // stable, so records at equal distance keep dictionary order
        ranked.sort_by_key(|(distance, _)| *distance);

        ranked
            .into_iter()
            .take(self.max.min(MAX_SUGGESTIONS))
            .map(|(distance, record)| Suggestion::new(self.recase(record), distance))
            .collect()
    }

    /// Recasts a surviving record to the query's casing shape, when that
    /// shape is one the record legitimately answers to; otherwise the
    /// stored form is emitted unchanged. An all-caps entry is never
    /// lowercased for a lowercase query.
    fn recase(&self, record: &WordRecord) -> SmolStr {
        let cased = self.query_casing.recast(&record.normalized);
        if record.casing.permits(&record.normalized, &cased) {
            self.query_casing.recast(&record.original)
        } else {
            record.original.clone()
        }
    }
}
