use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One keyword sighting: the document it occurs in and how many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

/// Inverted index mapping keywords to occurrence lists held in descending
/// frequency order. Built one document at a time during the build phase and
/// read-only once queries start.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeywordIndex {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one document's keyword map into the index. A new keyword starts
    /// a singleton list; a known keyword gets the occurrence appended at the
    /// tail and sifted into place by [`insert_last`].
    ///
    /// The caller scans each document exactly once, so an occurrence's
    /// document never appears elsewhere in the list it joins.
    pub fn merge_document(&mut self, keywords: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in keywords {
            match self.entries.get_mut(&keyword) {
                Some(list) => {
                    list.push(occurrence);
                    insert_last(list);
                }
                None => {
                    self.entries.insert(keyword, vec![occurrence]);
                }
            }
        }
    }

    /// Occurrence list for an already-normalized keyword, if indexed.
    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    /// Number of distinct keywords in the index.
    pub fn keyword_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sifts the last element of `occurrences` into its slot, restoring
/// descending frequency order. Elements `0..len-1` must already be sorted;
/// the final element is the newly appended, possibly out-of-place one.
///
/// Returns the sequence of midpoints probed by the binary search so tests
/// can check the search itself; a single-element list needs no search and
/// yields an empty sequence.
pub fn insert_last(occurrences: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut probes = Vec::new();
    let n = occurrences.len();
    if n < 2 {
        return probes;
    }

    let target = occurrences[n - 1].frequency;
    let mut low: isize = 0;
    let mut hi: isize = n as isize - 2;
    let mut found: Option<usize> = None;

    while low <= hi {
        let mid = (low + hi) / 2;
        probes.push(mid as usize);
        let probed = occurrences[mid as usize].frequency;
        if target > probed {
            hi = mid - 1;
        } else if target < probed {
            low = mid + 1;
        } else {
            found = Some(mid as usize);
            break;
        }
    }

    // On an equal probe the element slots in right before its peer. On
    // exhaustion the slot is `low`: everything above it ranks strictly
    // higher. The last midpoint alone cannot tell "before" from "after" the
    // element it probed, so in particular a final probe at the head with a
    // lower frequency lands at index 1, not 0.
    let insert_at = found.unwrap_or(low as usize);

    if let Some(last) = occurrences.pop() {
        occurrences.insert(insert_at, last);
    }

    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(freqs: &[u32]) -> Vec<Occurrence> {
        freqs
            .iter()
            .enumerate()
            .map(|(i, &f)| Occurrence::new(format!("doc{i}"), f))
            .collect()
    }

    fn frequencies(occurrences: &[Occurrence]) -> Vec<u32> {
        occurrences.iter().map(|occ| occ.frequency).collect()
    }

    #[test]
    fn singleton_list_needs_no_search() {
        let mut occs = list(&[5]);
        let probes = insert_last(&mut occs);
        assert!(probes.is_empty());
        assert_eq!(frequencies(&occs), vec![5]);
    }

    #[test]
    fn lower_frequency_after_head_probe_lands_at_one() {
        // Last probe at index 0 with a lower frequency: the slot is 1, not 0.
        let mut occs = list(&[5, 3]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![0]);
        assert_eq!(frequencies(&occs), vec![5, 3]);
    }

    #[test]
    fn higher_frequency_displaces_the_head() {
        let mut occs = list(&[5, 7]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![0]);
        assert_eq!(frequencies(&occs), vec![7, 5]);
    }

    #[test]
    fn equal_frequency_slots_in_before_its_peer() {
        let mut occs = list(&[1, 1]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![0]);
        assert_eq!(frequencies(&occs), vec![1, 1]);
        assert_eq!(occs[0].document, "doc1");
    }

    #[test]
    fn probes_walk_the_sorted_prefix() {
        let mut occs = list(&[9, 7, 5, 3, 6]);
        let probes = insert_last(&mut occs);
        assert_eq!(probes, vec![1, 2]);
        assert_eq!(frequencies(&occs), vec![9, 7, 6, 5, 3]);
    }

    #[test]
    fn smallest_frequency_sinks_to_the_tail() {
        let mut occs = list(&[9, 7, 5, 3, 1]);
        insert_last(&mut occs);
        assert_eq!(frequencies(&occs), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn largest_frequency_rises_to_the_head() {
        let mut occs = list(&[9, 7, 5, 3, 12]);
        insert_last(&mut occs);
        assert_eq!(frequencies(&occs), vec![12, 9, 7, 5, 3]);
    }

    #[test]
    fn merge_starts_singleton_lists() {
        let mut index = KeywordIndex::new();
        let mut kws = HashMap::new();
        kws.insert("cat".to_string(), Occurrence::new("d1", 2));
        index.merge_document(kws);

        assert_eq!(index.get("cat"), Some(&[Occurrence::new("d1", 2)][..]));
        assert_eq!(index.keyword_count(), 1);
    }

    #[test]
    fn merge_keeps_lists_sorted_and_deduplicated() {
        let mut index = KeywordIndex::new();
        for (doc, freq) in [("d1", 1), ("d2", 4), ("d3", 2), ("d4", 4), ("d5", 3)] {
            let mut kws = HashMap::new();
            kws.insert("ran".to_string(), Occurrence::new(doc, freq));
            index.merge_document(kws);
        }

        let occs = index.get("ran").unwrap();
        assert_eq!(occs.len(), 5);
        assert!(occs.windows(2).all(|w| w[0].frequency >= w[1].frequency));

        let mut docs: Vec<_> = occs.iter().map(|occ| occ.document.as_str()).collect();
        docs.sort_unstable();
        docs.dedup();
        assert_eq!(docs.len(), 5);
    }

    #[test]
    fn merged_entry_ranks_higher_frequency_first() {
        let mut index = KeywordIndex::new();
        let mut d1 = HashMap::new();
        d1.insert("ran".to_string(), Occurrence::new("d1", 1));
        index.merge_document(d1);
        let mut d2 = HashMap::new();
        d2.insert("ran".to_string(), Occurrence::new("d2", 2));
        index.merge_document(d2);

        let occs = index.get("ran").unwrap();
        assert_eq!(occs[0], Occurrence::new("d2", 2));
        assert_eq!(occs[1], Occurrence::new("d1", 1));
    }

    proptest! {
        #[test]
        fn insertion_sorts_any_appended_frequency(
            mut freqs in proptest::collection::vec(1u32..100, 1..20),
            appended in 1u32..100,
        ) {
            freqs.sort_unstable_by(|a, b| b.cmp(a));
            let mut occs = list(&freqs);
            occs.push(Occurrence::new("appended", appended));
            let before_docs = occs.len();

            insert_last(&mut occs);

            let mut expected = freqs.clone();
            expected.push(appended);
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(frequencies(&occs), expected);
            prop_assert_eq!(occs.len(), before_docs);
            prop_assert!(occs.iter().any(|occ| occ.document == "appended"));
        }
    }
}
