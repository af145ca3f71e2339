//! Letter-casing classification and the casing-equivalence policy.

use smol_str::SmolStr;
use unicode_titlecase::TitleCase;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Titlecases the first code point and keeps the rest untouched.
///
/// Uses the full titlecase mapping, so a digraph letter such as U+01F3
/// `dz` becomes U+01F2 `Dz`, not its all-caps form.
#[inline(always)]
pub fn title_case(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_titlecase().collect::<String>() + c.as_str()),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
    Title,
    Neither,
}

impl Case {
    #[inline(always)]
    fn new(ch: char) -> Case {
        if ch.is_lowercase() {
            Case::Lower
        } else if ch.is_uppercase() {
            Case::Upper
        } else if is_title_char(ch) {
            Case::Title
        } else {
            Case::Neither
        }
    }
}

// A titlecase-cased code point (category Lt) is its own titlecase but not
// its own uppercase, e.g. U+01F2.
#[inline]
fn is_title_char(ch: char) -> bool {
    ch.to_titlecase().eq(std::iter::once(ch)) && !ch.to_uppercase().eq(std::iter::once(ch))
}

/// The casing shape of a word, computed once when its record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingCategory {
    /// Every cased code point is uppercase, and at least one exists
    AllCaps,
    /// Every cased code point is lowercase
    Lower,
    /// Titlecasing the fully-lowercased word reproduces it exactly
    Title,
    /// Anything else, e.g. "McDonald"
    Mixed,
}

/// Classifies `word` by its per-code-point case properties.
pub fn categorize(word: &str) -> CasingCategory {
    let mut has_cased = false;
    let mut all_upper = true;
    let mut all_lower = true;

    for ch in word.chars() {
        match Case::new(ch) {
            Case::Upper => {
                has_cased = true;
                all_lower = false;
            }
            Case::Lower => {
                has_cased = true;
                all_upper = false;
            }
            Case::Title => {
                has_cased = true;
                all_upper = false;
                all_lower = false;
            }
            Case::Neither => {}
        }
    }

    if has_cased && all_upper {
        CasingCategory::AllCaps
    } else if all_lower {
        CasingCategory::Lower
    } else if title_case(&lower_case(word)) == word {
        CasingCategory::Title
    } else {
        CasingCategory::Mixed
    }
}

impl CasingCategory {
    /// Whether `candidate` is one of the surface forms a word of this shape
    /// answers to.
    ///
    /// An all-caps or mixed-case word answers only to itself; a lowercase
    /// word also answers to its title and all-caps forms; a titlecase word
    /// also answers to its all-caps form.
    pub fn permits(self, original: &str, candidate: &str) -> bool {
        if original == candidate {
            return true;
        }
        match self {
            CasingCategory::AllCaps | CasingCategory::Mixed => false,
            CasingCategory::Lower => {
                upper_case(original) == candidate || title_case(original) == candidate
            }
            CasingCategory::Title => upper_case(original) == candidate,
        }
    }

    /// Recasts `word` into this shape.
    pub fn recast(self, word: &str) -> SmolStr {
        match self {
            CasingCategory::AllCaps => upper_case(word),
            CasingCategory::Lower => lower_case(word),
            CasingCategory::Title => title_case(&lower_case(word)),
            CasingCategory::Mixed => SmolStr::new(word),
        }
    }
}
