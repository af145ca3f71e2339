//! Suggestion for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Suggestion for a spelling correction
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// code-point edit distance from the queried word
    pub distance: usize,
}

impl Suggestion {
    /// creates a spelling correction suggestion
    pub fn new(value: SmolStr, distance: usize) -> Suggestion {
        Suggestion { value, distance }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the edit distance of the suggestion
    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        let x = self.distance.cmp(&other.distance);

        if let Ordering::Equal = x {
            return self.value.cmp(&other.value);
        }

        x
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.distance == other.distance
    }
}

impl Eq for Suggestion {}
