//! Text matching strategies: regex, exact substring, and edit-distance fuzzy matching

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::models::{MatchType, SearchOptions};

/// Minimum word similarity for a fuzzy hit
const FUZZY_THRESHOLD: f64 = 0.6;

/// Fuzzy scores are discounted relative to exact and regex hits
const FUZZY_WEIGHT: f64 = 0.8;

const REGEX_SCORE: f64 = 0.9;

/// Outcome of matching one piece of text against the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMatch {
    pub matched: bool,
    pub score: f64,
    pub kind: MatchType,
}

impl TextMatch {
    pub const NONE: TextMatch = TextMatch { matched: false, score: 0.0, kind: MatchType::Exact };

    fn hit(score: f64, kind: MatchType) -> Self {
        Self { matched: true, score, kind }
    }
}

/// A query prepared once per search and applied to many texts
///
/// Strategies run in order (regex, exact, fuzzy) and the first hit wins.
#[derive(Debug, Clone)]
pub struct Matcher {
    query_lower: String,
    query_len: usize,
    regex: Option<Regex>,
    fuzzy: bool,
}

impl Matcher {
    pub fn new(query: &str, regex: bool, fuzzy: bool) -> Self {
        let regex = if regex { compile_regex(query) } else { None };
        let query_lower = query.to_lowercase();
        let query_len = query_lower.chars().count();

        Self { query_lower, query_len, regex, fuzzy }
    }

    pub fn from_options(options: &SearchOptions) -> Self {
        Self::new(&options.query, options.regex, options.fuzzy)
    }

    pub fn match_text(&self, text: &str) -> TextMatch {
        if let Some(re) = &self.regex
            && re.is_match(text)
        {
            return TextMatch::hit(REGEX_SCORE, MatchType::Regex);
        }

        let text_lower = text.to_lowercase();
        if text_lower.contains(&self.query_lower) {
            return TextMatch::hit(self.exact_score(&text_lower), MatchType::Exact);
        }

        if self.fuzzy {
            let similarity = self.fuzzy_similarity(&text_lower);
            if similarity >= FUZZY_THRESHOLD {
                return TextMatch::hit(similarity * FUZZY_WEIGHT, MatchType::Fuzzy);
            }
        }

        TextMatch::NONE
    }

    /// 0.5 floor plus half the fraction of the text covered by the query
    fn exact_score(&self, text_lower: &str) -> f64 {
        let text_len = text_lower.chars().count();
        if text_len == 0 {
            return 1.0;
        }
        0.5 + 0.5 * (self.query_len as f64 / text_len as f64)
    }

    /// Best similarity between the query and any whitespace-separated word
    fn fuzzy_similarity(&self, text_lower: &str) -> f64 {
        if text_lower.contains(&self.query_lower) {
            return 1.0;
        }

        text_lower
            .split_whitespace()
            .map(|word| {
                let distance = levenshtein(&self.query_lower, word);
                let longest = word.chars().count().max(self.query_len);
                1.0 - distance as f64 / longest as f64
            })
            .fold(0.0, f64::max)
    }
}

fn compile_regex(query: &str) -> Option<Regex> {
    match RegexBuilder::new(query).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            debug!(pattern = query, error = %e, "Invalid regex, skipping regex matching");
            None
        }
    }
}

/// Match a single text against a query
///
/// Convenience wrapper around [`Matcher`]; prefer building one `Matcher` when
/// matching many texts against the same query.
pub fn match_text(text: &str, query: &str, options: &SearchOptions) -> TextMatch {
    Matcher::new(query, options.regex, options.fuzzy).match_text(text)
}

/// Edit distance with unit-cost insert, delete, and substitute
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // (|b|+1) x (|a|+1)
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1].min(matrix[i][j - 1]).min(matrix[i - 1][j])
            };
        }
    }

    matrix[b.len()][a.len()]
}
