use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::matcher::{Matcher, TextMatch};
use crate::models::{MatchType, WorkItem};

/// Description hits count for less than title hits
const DESCRIPTION_WEIGHT: f64 = 0.8;

/// Combined title/description score for one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeMatch {
    pub score: f64,
    pub match_type: MatchType,
}

/// Score an item against the query, or `None` if neither title nor description matched
///
/// The match type follows whichever field had the higher raw score, even though the
/// description score is discounted before it competes for the final score.
pub fn score_item(item: &WorkItem, matcher: &Matcher) -> Option<CompositeMatch> {
    let title = matcher.match_text(&item.title);
    let description = match item.description.as_deref().filter(|text| !text.is_empty()) {
        Some(text) => matcher.match_text(text),
        None => TextMatch::NONE,
    };

    if !title.matched && !description.matched {
        return None;
    }

    let score = title.score.max(description.score * DESCRIPTION_WEIGHT);
    let match_type = if title.score >= description.score { title.kind } else { description.kind };

    Some(CompositeMatch { score, match_type })
}

/// Anything that can be ranked by score, then recency
pub trait Ranked {
    fn score(&self) -> f64;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Order by score (highest first), breaking ties by timestamp (newest first)
pub fn compare_ranked<R: Ranked>(a: &R, b: &R) -> Ordering {
    b.score().total_cmp(&a.score()).then_with(|| b.timestamp().cmp(&a.timestamp()))
}

/// Sort in rank order and keep at most `limit` results when `limit` is positive
pub fn rank<R: Ranked>(results: &mut Vec<R>, limit: Option<i64>) {
    results.sort_by(compare_ranked);

    if let Some(limit) = limit
        && limit > 0
    {
        results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::SourceType;

    #[derive(Debug, Clone, PartialEq)]
    struct Scored(f64, DateTime<Utc>, &'static str);

    impl Ranked for Scored {
        fn score(&self) -> f64 {
            self.0
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.1
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
    }

    fn item(title: &str, description: Option<&str>) -> WorkItem {
        WorkItem {
            source: SourceType::Git,
            timestamp: day(1),
            title: title.to_string(),
            description: description.map(String::from),
            project: None,
            metadata: None,
        }
    }

    #[test]
    fn test_title_only_match() {
        let matcher = Matcher::new("cache", false, false);
        let result = score_item(&item("cache", None), &matcher).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_description_match_discounted() {
        let matcher = Matcher::new("cache", false, false);
        let result = score_item(&item("Refactor", Some("cache")), &matcher).unwrap();
        assert_eq!(result.score, 0.8);
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_no_match_returns_none() {
        let matcher = Matcher::new("cache", false, false);
        assert!(score_item(&item("Refactor", Some("logging")), &matcher).is_none());
        assert!(score_item(&item("Refactor", None), &matcher).is_none());
    }

    #[test]
    fn test_empty_description_ignored() {
        let matcher = Matcher::new("", false, false);
        let result = score_item(&item("Refactor", Some("")), &matcher).unwrap();
        // Only the title counts: 0.5 + 0.5 * 0/8
        assert_eq!(result.score, 0.5);
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_match_type_follows_raw_scores() {
        // Title: fuzzy hit ~0.74. Description: exact hit 1.0, discounted to 0.8.
        // The exact description wins both the raw comparison and the final score here.
        let matcher = Matcher::new("authenticaton", false, true);
        let result =
            score_item(&item("authentication handler", Some("authenticaton")), &matcher).unwrap();
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_match_type_can_diverge_from_score_driver() {
        // Title: regex hit 0.9. Description: the pattern fails as a regex but is a
        // literal substring, exact hit 1.0 (raw), 0.8 discounted. The match type comes
        // from the description while the score comes from the title.
        let matcher = Matcher::new("fix$", true, false);
        let result = score_item(&item("quick fix", Some("fix$")), &matcher).unwrap();
        assert_eq!(result.score, 0.9);
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_rank_orders_by_score_then_recency() {
        let mut results = vec![
            Scored(0.5, day(3), "low"),
            Scored(0.9, day(1), "high-old"),
            Scored(0.9, day(2), "high-new"),
        ];
        rank(&mut results, None);

        let order: Vec<_> = results.iter().map(|r| r.2).collect();
        assert_eq!(order, vec!["high-new", "high-old", "low"]);
    }

    #[test]
    fn test_rank_limit() {
        let make = || {
            vec![Scored(0.6, day(1), "a"), Scored(0.7, day(1), "b"), Scored(0.8, day(1), "c")]
        };

        let mut limited = make();
        rank(&mut limited, Some(2));
        assert_eq!(limited.iter().map(|r| r.2).collect::<Vec<_>>(), vec!["c", "b"]);

        for limit in [None, Some(0), Some(-3), Some(10)] {
            let mut all = make();
            rank(&mut all, limit);
            assert_eq!(all.len(), 3);
        }
    }
}
