//! Canonical normalization and the folded lookup key.
//!
//! Everything the engine compares is compared in NFC, so composed and
//! decomposed spellings of the same text are one dictionary entry. The
//! folded key additionally applies full case folding and is what the
//! index is keyed by.

use smol_str::SmolStr;
use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Canonically composes `s` (NFC).
#[inline]
pub fn nfc(s: &str) -> SmolStr {
    if is_nfc(s) {
        SmolStr::new(s)
    } else {
        s.nfc().collect::<SmolStr>()
    }
}

/// The canonical-equivalence lookup key: NFC followed by full case folding.
#[inline]
pub fn fold_key(s: &str) -> SmolStr {
    s.nfc().case_fold().collect::<SmolStr>()
}
