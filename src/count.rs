//! General-purpose keyword counting capabilities.

use counter::Counter;
use std::vec::IntoIter;

/// A pair of keyword and occurrence count.
pub type KeywordCount = (String, usize);

/// Counts occurrences of a fixed set of keywords across a stream of titles.
///
/// Keywords are case-folded once, up front; the caller's ordering is kept,
/// and a keyword supplied twice is counted twice. Each observed title is
/// lowercased and split on whitespace, and every token is compared to every
/// keyword _exactly_: no stemming, no punctuation stripping. The token
/// `cats!` does not match the keyword `cats`. Keywords that never match any
/// token do not appear in the results at all.
#[derive(Debug)]
pub struct KeywordCounter {
    keywords: Vec<String>,
    counts: Counter<String>,
}

impl KeywordCounter {
    /// Creates a new, empty counter for the given keywords.
    pub fn new(keywords: &[String]) -> Self {
        let keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        let counts = Counter::new();
        Self { keywords, counts }
    }

    /// Tallies every keyword occurrence in a single title.
    pub fn observe(&mut self, title: &str) {
        let title = title.to_lowercase();
        let words: Vec<&str> = title.split_whitespace().collect();

        for keyword in &self.keywords {
            let count = words.iter().filter(|&word| *word == keyword.as_str()).count();
            if count > 0 {
                self.counts[keyword] += count;
            }
        }
    }

    /// True if no keyword has matched any observed title.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the (keyword, count) pairs, sorted by descending count,
    /// with ties broken by the keywords' lexicographic order.
    pub fn sorted(&self) -> IntoIter<KeywordCount> {
        self.counts
            .most_common_tiebreaker(|lhs, rhs| lhs.cmp(rhs))
            .into_iter()
    }
}
