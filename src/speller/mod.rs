//! The word list engine: index, membership policy, suggestions, mutation.

use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;
use parking_lot::RwLock;
use smol_str::SmolStr;

use crate::case_handling::{self, CasingCategory};
use crate::constants::MAX_SUGGESTIONS;
use crate::error::Error;
use crate::normalize;
use crate::speller::suggestion::Suggestion;
use crate::speller::worker::SuggestionWorker;
use crate::wordlist::{Line, WordlistFile};

pub mod suggestion;
mod worker;

/// One accepted word: the stored form, its canonical form, and the
/// casing shape derived from it.
#[derive(Debug, Clone)]
pub(crate) struct WordRecord {
    /// index of the backing line this record came from
    line: usize,
    /// exact code points as stored; the form given back to callers
    original: SmolStr,
    /// NFC of `original`; all matching runs on this
    normalized: SmolStr,
    /// folded canonical key (NFC + case fold); groups lookup candidates
    key: SmolStr,
    casing: CasingCategory,
}

impl WordRecord {
    fn new(line: usize, original: &str) -> WordRecord {
        let normalized = normalize::nfc(original);
        let key = normalize::fold_key(&normalized);
        let casing = case_handling::categorize(&normalized);

        WordRecord {
            line,
            original: SmolStr::new(original),
            normalized,
            key,
            casing,
        }
    }

    /// Whether `candidate` (NFC) is a surface form this record answers to.
    fn matches(&self, candidate: &str) -> bool {
        self.casing.permits(&self.normalized, candidate)
    }
}

#[derive(Debug, Default)]
struct Index {
    records: Vec<WordRecord>,
    by_key: HashMap<SmolStr, Vec<usize>>,
}

impl Index {
    fn rebuild(&mut self, lines: &[Line]) {
        self.records.clear();
        self.by_key.clear();
        for (i, line) in lines.iter().enumerate() {
            if let Line::Word(text) = line {
                self.insert(WordRecord::new(i, text));
            }
        }
    }

    fn insert(&mut self, record: WordRecord) {
        let slot = self.records.len();
        self.by_key
            .entry(record.key.clone())
            .or_default()
            .push(slot);
        self.records.push(record);
    }

    fn lookup<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a WordRecord> + 'a {
        let records = &self.records;
        self.by_key
            .get(key)
            .into_iter()
            .flatten()
            .map(move |&slot| &records[slot])
    }
}

#[derive(Debug)]
struct Inner {
    store: WordlistFile,
    index: Index,
}

/// The read surface a surrounding spell-check subsystem consumes.
pub trait Speller {
    /// Whether the word is accepted as spelled.
    fn is_correct(&self, word: &str) -> bool;
    /// Correction candidates, nearest first.
    fn suggest(&self, word: &str) -> Vec<Suggestion>;
}

/// A personal word list: a user-editable dictionary of accepted words
/// backed by a one-word-per-line file.
///
/// Reads run concurrently; any mutation takes the instance's exclusive
/// lock and reconciles the backing file before returning, so callers
/// observe a consistent index/file pair at every call boundary.
#[derive(Debug)]
pub struct PersonalWordList {
    inner: RwLock<Inner>,
}

impl PersonalWordList {
    /// Opens the word list at `path`.
    ///
    /// A missing file is an empty word list; the file is created by the
    /// first [`add`](Self::add).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PersonalWordList, Error> {
        let store = WordlistFile::open(path)?;
        Ok(PersonalWordList::from_store(store))
    }

    /// A word list with no backing file, e.g. for session words.
    pub fn in_memory() -> PersonalWordList {
        PersonalWordList::from_store(WordlistFile::in_memory())
    }

    fn from_store(store: WordlistFile) -> PersonalWordList {
        let mut index = Index::default();
        index.rebuild(store.lines());
        log::debug!("loaded {} words", index.records.len());

        PersonalWordList {
            inner: RwLock::new(Inner { store, index }),
        }
    }

    /// Re-reads the backing file and replaces the index wholesale,
    /// making externally-made edits visible.
    pub fn reload(&self) -> Result<(), Error> {
        let mut inner = self.inner.write();
        inner.store.reload()?;
        let Inner { store, index } = &mut *inner;
        index.rebuild(store.lines());
        Ok(())
    }

    /// Whether `word` is in the list, under the casing-equivalence policy.
    pub fn is_known(&self, word: &str) -> bool {
        let inner = self.inner.read();
        let query = normalize::nfc(word);
        let found = inner
            .index
            .lookup(&normalize::fold_key(&query))
            .any(|record| record.matches(&query));
        found
    }

    /// At most `max` correction candidates for `word`, nearest first.
    pub fn suggest(&self, word: &str, max: usize) -> Vec<Suggestion> {
        let inner = self.inner.read();
        SuggestionWorker::new(&inner.index.records, word, max).suggest()
    }

    /// Adds `word`, appending it to the backing file before returning.
    ///
    /// The word is visible to reads immediately, without a reload. Adding
    /// a word that is already stored in exactly this form is a no-op.
    pub fn add(&self, word: &str) -> Result<(), Error> {
        validate(word)?;

        let mut inner = self.inner.write();
        let record = WordRecord::new(inner.store.lines().len(), word);
        if inner
            .index
            .lookup(&record.key)
            .any(|existing| existing.normalized == record.normalized)
        {
            return Ok(());
        }
        inner.store.append(word)?;
        inner.index.insert(record);
        Ok(())
    }

    /// Removes the entry whose stored form is canonically identical to
    /// `word` (case-sensitive), rewriting the backing file without its
    /// line. Removing an absent word is a no-op, not an error.
    pub fn remove(&self, word: &str) -> Result<(), Error> {
        let normalized = normalize::nfc(word);
        let mut inner = self.inner.write();
        let line = inner
            .index
            .lookup(&normalize::fold_key(&normalized))
            .find(|record| record.normalized == normalized)
            .map(|record| record.line);
        let Some(line) = line else {
            return Ok(());
        };

        inner.store.remove_line(line)?;
        let Inner { store, index } = &mut *inner;
        index.rebuild(store.lines());
        Ok(())
    }
}

impl Speller for PersonalWordList {
    #[inline]
    fn is_correct(&self, word: &str) -> bool {
        self.is_known(word)
    }

    #[inline]
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        PersonalWordList::suggest(self, word, MAX_SUGGESTIONS)
    }
}

/// A dictionary pairing the durable personal list with an in-memory
/// session list.
///
/// Words added through [`add`](Self::add) go to both, so they survive
/// the session; words added through [`add_to_session`](Self::add_to_session)
/// are accepted until the dictionary is dropped and never touch the file.
#[derive(Debug)]
pub struct Dictionary {
    personal: PersonalWordList,
    session: PersonalWordList,
}

impl Dictionary {
    /// Opens the personal word list at `path` with a fresh session.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dictionary, Error> {
        Ok(Dictionary {
            personal: PersonalWordList::load(path)?,
            session: PersonalWordList::in_memory(),
        })
    }

    /// A dictionary with no backing file at all.
    pub fn in_memory() -> Dictionary {
        Dictionary {
            personal: PersonalWordList::in_memory(),
            session: PersonalWordList::in_memory(),
        }
    }

    /// Whether `word` is in the personal list or the session.
    pub fn is_known(&self, word: &str) -> bool {
        self.personal.is_known(word) || self.session.is_known(word)
    }

    /// Whether `word` was accepted during this session.
    pub fn is_in_session(&self, word: &str) -> bool {
        self.session.is_known(word)
    }

    /// Adds `word` to the personal list and to the current session.
    pub fn add(&self, word: &str) -> Result<(), Error> {
        self.personal.add(word)?;
        self.session.add(word)
    }

    /// Accepts `word` for this session only; the backing file is untouched.
    pub fn add_to_session(&self, word: &str) -> Result<(), Error> {
        self.session.add(word)
    }

    /// Removes `word` from the personal list and the session.
    pub fn remove(&self, word: &str) -> Result<(), Error> {
        self.personal.remove(word)?;
        self.session.remove(word)
    }

    /// Reloads the personal list from disk; the session is kept.
    pub fn reload(&self) -> Result<(), Error> {
        self.personal.reload()
    }

    /// At most `max` correction candidates drawn from the personal list
    /// and the session, nearest first.
    pub fn suggest(&self, word: &str, max: usize) -> Vec<Suggestion> {
        let mut merged = self.personal.suggest(word, max);
        merged.extend(self.session.suggest(word, max));

        let mut merged: Vec<Suggestion> = merged
            .into_iter()
            .unique_by(|sugg| sugg.value.clone())
            .collect();
        // stable, so the personal list wins ties
        merged.sort_by_key(|sugg| sugg.distance);
        merged.truncate(max.min(MAX_SUGGESTIONS));
        merged
    }
}

impl Speller for Dictionary {
    #[inline]
    fn is_correct(&self, word: &str) -> bool {
        self.is_known(word)
    }

    #[inline]
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        Dictionary::suggest(self, word, MAX_SUGGESTIONS)
    }
}

fn validate(word: &str) -> Result<(), Error> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }
    if word.chars().any(|ch| ch == '\r' || ch == '\n') {
        return Err(Error::InvalidWord);
    }
    Ok(())
}
