use crate::index::{KeywordIndex, Occurrence};
use crate::preprocessing::tokenizer::{NoiseWordSet, normalize};

/// Result cap for OR queries.
pub const RESULT_LIMIT: usize = 5;

/// Answers "keyword_a OR keyword_b": documents containing either keyword,
/// ranked by descending occurrence frequency and capped at [`RESULT_LIMIT`]
/// entries. Frequency ties go to `keyword_a`'s document, and no document
/// appears twice. A keyword that fails normalization or was never indexed
/// contributes nothing; an empty result is the normal no-match outcome, not
/// an error.
pub fn search(
    index: &KeywordIndex,
    noise: &NoiseWordSet,
    keyword_a: &str,
    keyword_b: &str,
) -> Vec<String> {
    let list_a = lookup(index, noise, keyword_a);
    let list_b = lookup(index, noise, keyword_b);

    match (list_a, list_b) {
        (None, None) => Vec::new(),
        (Some(list), None) | (None, Some(list)) => list
            .iter()
            .take(RESULT_LIMIT)
            .map(|occ| occ.document.clone())
            .collect(),
        (Some(a), Some(b)) => merge_ranked(a.to_vec(), b.to_vec()),
    }
}

fn lookup<'a>(index: &'a KeywordIndex, noise: &NoiseWordSet, raw: &str) -> Option<&'a [Occurrence]> {
    let keyword = normalize(raw, noise)?;
    index.get(&keyword)
}

/// Ranked merge over working copies of the two occurrence lists. Emitting a
/// document removes it from both copies so it cannot reappear; the shared
/// index is never touched by a query.
fn merge_ranked(mut a: Vec<Occurrence>, mut b: Vec<Occurrence>) -> Vec<String> {
    let mut results = Vec::new();

    while results.len() < RESULT_LIMIT {
        match (a.first().cloned(), b.first().cloned()) {
            (Some(head_a), Some(head_b)) => {
                if head_a.frequency > head_b.frequency {
                    emit(&mut results, &mut a, &mut b, &head_a.document);
                } else if head_b.frequency > head_a.frequency {
                    emit(&mut results, &mut a, &mut b, &head_b.document);
                } else if head_a.document == head_b.document {
                    emit(&mut results, &mut a, &mut b, &head_a.document);
                } else {
                    // the first keyword wins frequency ties; its head also
                    // takes precedence when only one result slot remains
                    emit(&mut results, &mut a, &mut b, &head_a.document);
                    if results.len() < RESULT_LIMIT {
                        emit(&mut results, &mut a, &mut b, &head_b.document);
                    }
                }
            }
            (Some(head_a), None) => emit(&mut results, &mut a, &mut b, &head_a.document),
            (None, Some(head_b)) => emit(&mut results, &mut a, &mut b, &head_b.document),
            (None, None) => break,
        }
    }

    results
}

fn emit(results: &mut Vec<String>, a: &mut Vec<Occurrence>, b: &mut Vec<Occurrence>, document: &str) {
    results.push(document.to_string());
    a.retain(|occ| occ.document != document);
    b.retain(|occ| occ.document != document);
}
