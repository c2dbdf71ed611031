use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::index::Occurrence;

/// Characters stripped off the end of a token during normalization.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

static ALPHABETIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Words excluded from indexing. Loaded once during the build phase and
/// immutable afterward. Entries are stored lowercased and probed with
/// lowercased keywords, so membership is case-insensitive.
#[derive(Debug, Default)]
pub struct NoiseWordSet {
    words: HashSet<String>,
}

impl NoiseWordSet {
    /// Builds the set from an already-materialized line sequence, trimming
    /// entries and skipping blank lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reduces a raw whitespace token to an indexable keyword: trailing
/// punctuation stripped, lowercased, alphabetic-only and not a noise word.
/// Returns `None` for anything that does not survive.
pub fn normalize(raw: &str, noise: &NoiseWordSet) -> Option<String> {
    let mut word = raw.trim();

    while let Some(last) = word.chars().last() {
        if !TRAILING_PUNCTUATION.contains(&last) {
            break;
        }
        word = &word[..word.len() - last.len_utf8()];
        // a lone remaining character stays, punctuation or not; the
        // alphabetic check below settles its fate
        if word.len() <= 1 {
            break;
        }
    }

    if word.is_empty() {
        return None;
    }

    let word = word.to_lowercase();
    if noise.contains(&word) {
        return None;
    }
    if !ALPHABETIC.is_match(&word) {
        return None;
    }

    Some(word)
}

/// Scans one document's text into its per-document keyword map: tokens are
/// split on whitespace, normalized, and counted. Resolving the identifier to
/// content is the `DocumentSource`'s job; the scanner only sees text.
pub fn scan(document_id: &str, text: &str, noise: &NoiseWordSet) -> HashMap<String, Occurrence> {
    let mut keywords: HashMap<String, Occurrence> = HashMap::new();

    for token in text.split_whitespace() {
        if let Some(keyword) = normalize(token, noise) {
            keywords
                .entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(document_id, 1));
        }
    }

    debug!(document = document_id, keywords = keywords.len(), "scanned document");
    keywords
}
