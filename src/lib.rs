/*! Personal word list engine for spell checking.

A personal word list (PWL) is a user-maintained list of accepted words,
stored one word per line in a UTF-8 text file. This crate loads such a
file into an in-memory index and answers the questions a surrounding
spell-check subsystem asks of it: is a word known, and if not, which
stored words are closest to it.

Membership checks apply a casing-equivalence policy (an all-caps entry
matches only its all-caps spelling, a lowercase entry also matches its
title and all-caps spellings) and treat canonically-equivalent Unicode
spellings as the same entry, so the composed and decomposed forms of a
word are interchangeable. Suggestions are ranked by code-point edit
distance and re-cased to match the shape of the queried word.

Words added or removed through the API are persisted to the backing file
before the call returns; lines the engine did not touch, including ones
with invalid encoding, are preserved byte for byte.

# Usage examples

```
use pwl::Dictionary;

let dict = Dictionary::in_memory();
dict.add("fiancé")?;

assert!(dict.is_known("fiancé"));
assert!(dict.is_known("fiance\u{301}"));

for sugg in dict.suggest("fiance", 5) {
    println!("{} ({})", sugg.value(), sugg.distance());
}
# Ok::<(), pwl::Error>(())
```

A file-backed dictionary is opened with [`Dictionary::load`] (or
[`PersonalWordList::load`] when no session layer is wanted); a missing
file is an empty dictionary and is created on the first add.
*/

#![warn(missing_docs)]

pub mod case_handling;
pub mod error;
pub mod normalize;
pub mod speller;
pub mod wordlist;

pub(crate) mod constants;

pub use error::Error;
pub use speller::suggestion::Suggestion;
pub use speller::{Dictionary, PersonalWordList, Speller};
