//! Ranking history entries against a query.
//!
//! Two strategies are supported: plain case-sensitive substring containment
//! (keeps history order) and skim-style fuzzy scoring (best score first).
//! Either way the result is bounded to the visible window.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::{Deserialize, Serialize};

/// How entries are matched against the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Substring,
    Fuzzy,
}

/// A single ranked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    /// Relevance score; only the fuzzy strategy produces one.
    pub score: Option<i64>,
    /// Char indices of `text` that matched the query.
    pub positions: Vec<usize>,
}

pub struct MatchRanker {
    strategy: MatchStrategy,
    max_results: usize,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for MatchRanker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchRanker")
            .field("strategy", &self.strategy)
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl MatchRanker {
    pub fn new(strategy: MatchStrategy, max_results: usize) -> Self {
        Self {
            strategy,
            max_results,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Rank `entries` against `query`.
    ///
    /// A blank query yields no matches rather than every entry. Otherwise
    /// the query is matched as typed, surrounding whitespace included.
    pub fn rank(&self, entries: &[String], query: &str) -> Vec<Match> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        match self.strategy {
            MatchStrategy::Substring => entries
                .iter()
                .filter_map(|entry| substring_match(entry, query))
                .take(self.max_results)
                .collect(),
            MatchStrategy::Fuzzy => {
                let mut scored: Vec<Match> = entries
                    .iter()
                    .filter_map(|entry| {
                        self.matcher
                            .fuzzy_indices(entry, query)
                            .map(|(score, positions)| Match {
                                text: entry.clone(),
                                score: Some(score),
                                positions,
                            })
                    })
                    .collect();

                // Stable: equal scores keep history order
                scored.sort_by(|a, b| b.score.cmp(&a.score));
                scored.truncate(self.max_results);
                scored
            }
        }
    }
}

fn substring_match(entry: &str, query: &str) -> Option<Match> {
    let byte_start = entry.find(query)?;
    let char_start = entry[..byte_start].chars().count();
    let char_len = query.chars().count();
    Some(Match {
        text: entry.to_string(),
        score: None,
        positions: (char_start..char_start + char_len).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_substring_keeps_history_order() {
        let ranker = MatchRanker::new(MatchStrategy::Substring, 32);
        let history = entries(&["git status", "ls -la", "git log"]);
        let matches = ranker.rank(&history, "git");
        assert_eq!(texts(&matches), vec!["git status", "git log"]);
        assert!(matches.iter().all(|m| m.score.is_none()));
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let ranker = MatchRanker::new(MatchStrategy::Substring, 32);
        let history = entries(&["Git push", "git pull"]);
        assert_eq!(texts(&ranker.rank(&history, "git")), vec!["git pull"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let history = entries(&["ls", "cd /tmp"]);
        for strategy in [MatchStrategy::Substring, MatchStrategy::Fuzzy] {
            let ranker = MatchRanker::new(strategy, 32);
            assert!(ranker.rank(&history, "").is_empty());
            assert!(ranker.rank(&history, "   ").is_empty());
        }
    }

    #[test]
    fn test_results_bounded_by_window() {
        let history: Vec<String> = (0..100).map(|i| format!("echo {}", i)).collect();
        for strategy in [MatchStrategy::Substring, MatchStrategy::Fuzzy] {
            let ranker = MatchRanker::new(strategy, 10);
            assert_eq!(ranker.strategy(), strategy);
            assert_eq!(ranker.max_results(), 10);
            let matches = ranker.rank(&history, "echo");
            assert_eq!(matches.len(), 10);
            assert!(matches.iter().all(|m| m.text.contains("echo")));
        }
    }

    #[test]
    fn test_substring_positions_are_char_indices() {
        let ranker = MatchRanker::new(MatchStrategy::Substring, 32);
        let history = entries(&["echo héllo world"]);
        let matches = ranker.rank(&history, "world");
        assert_eq!(matches[0].positions, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_fuzzy_matches_subsequence() {
        let ranker = MatchRanker::new(MatchStrategy::Fuzzy, 32);
        let history = entries(&["docker compose up", "ls -la", "cargo build"]);
        let matches = ranker.rank(&history, "dcu");
        assert_eq!(texts(&matches), vec!["docker compose up"]);
        assert!(matches[0].score.is_some());
        assert_eq!(matches[0].positions.len(), 3);
    }

    #[test]
    fn test_fuzzy_sorted_by_score_descending() {
        let ranker = MatchRanker::new(MatchStrategy::Fuzzy, 32);
        let history = entries(&["a_x_b_x_c", "abc", "xyzabc"]);
        let matches = ranker.rank(&history, "abc");
        assert_eq!(matches.len(), 3);
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_fuzzy_ties_keep_history_order() {
        let ranker = MatchRanker::new(MatchStrategy::Fuzzy, 32);
        let history = entries(&["make a", "make b", "make c"]);
        let matches = ranker.rank(&history, "make");
        assert_eq!(texts(&matches), vec!["make a", "make b", "make c"]);
    }
}
