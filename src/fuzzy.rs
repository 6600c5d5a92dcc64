//! Fuzzy filtering for presented results
//!
//! A candidate is kept when every non-space character of the query appears in
//! it in order. Survivors are ranked by how many of the query's 1-, 2- and
//! 3-character substrings they share, relative to the size of both bags.

use std::collections::HashSet;

const SUBSTRING_SIZES: &[usize] = &[1, 2, 3];

#[derive(Debug)]
struct SplitWord {
    word: String,
    substrings: HashSet<String>,
}

fn split_word<S, V>(word: S, sizes: V) -> SplitWord
where
    S: AsRef<str>,
    V: AsRef<[usize]>,
{
    let word = word.as_ref().to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let mut substrings = HashSet::new();

    for &size in sizes.as_ref() {
        if size == 0 || size > chars.len() {
            continue;
        }
        for window in chars.windows(size) {
            if window.iter().any(|c| c.is_whitespace()) {
                continue;
            }
            substrings.insert(window.iter().collect::<String>());
        }
    }

    SplitWord { word, substrings }
}

fn evaluate(word_subs: &HashSet<String>, possible_subs: &HashSet<String>) -> f32 {
    let len_sum = word_subs.len() + possible_subs.len();
    if len_sum == 0 {
        return 0.0;
    }

    let count = word_subs
        .iter()
        .filter(|sub| possible_subs.contains(*sub))
        .count();

    count as f32 / len_sum as f32
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();

    needle
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|n| haystack.any(|h| h == n))
}

/// A query prepared for scoring many candidates.
#[derive(Debug)]
pub struct FuzzyQuery {
    query: SplitWord,
}

impl FuzzyQuery {
    pub fn new<S>(query: S) -> FuzzyQuery
    where
        S: AsRef<str>,
    {
        FuzzyQuery {
            query: split_word(query, SUBSTRING_SIZES),
        }
    }

    /// `None` when `candidate` doesn't match at all, otherwise a score in
    /// `0.0..=0.5` where higher is closer.
    pub fn score<S>(&self, candidate: S) -> Option<f32>
    where
        S: AsRef<str>,
    {
        let candidate = split_word(candidate, SUBSTRING_SIZES);

        if !is_subsequence(&self.query.word, &candidate.word) {
            return None;
        }

        Some(evaluate(&self.query.substrings, &candidate.substrings))
    }
}

/// Indices of the `candidates` matching `query`, best first. Equal scores keep
/// their input order, and a blank query keeps everything as is.
pub fn filter<S, Q>(candidates: &[S], query: Q) -> Vec<usize>
where
    S: AsRef<str>,
    Q: AsRef<str>,
{
    let query = query.as_ref();
    if query.trim().is_empty() {
        return (0..candidates.len()).collect();
    }

    let query = FuzzyQuery::new(query);
    let mut scored: Vec<(usize, f32)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, candidate)| query.score(candidate).map(|score| (idx, score)))
        .collect();

    // stable, so ties stay in input order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().map(|(idx, _)| idx).collect()
}
