use crate::Error;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// How to treat a query that was executed but has no entry in the
/// judgment table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Fail the whole evaluation (strict lookup).
    #[default]
    Fail,
    /// Score the query 0.0 and log a warning.
    ScoreZero,
}

/// Recall for one query: `|actual ∩ expected| / |expected|`. Defined as
/// 0.0 when the expected set is empty, avoiding a division by zero.
pub fn score_one(actual: &BTreeSet<String>, expected: &HashSet<String>) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let hits = actual
        .iter()
        .filter(|name| expected.contains(name.as_str()))
        .count();
    hits as f64 / expected.len() as f64
}

/// Score every query in `actual_by_query` against its judgment set.
pub fn score_all(
    actual_by_query: &BTreeMap<String, BTreeSet<String>>,
    expected_by_query: &HashMap<String, HashSet<String>>,
    policy: MissingPolicy,
) -> Result<BTreeMap<String, f64>, Error> {
    let mut scores = BTreeMap::new();
    for (query, actual) in actual_by_query {
        let score = match expected_by_query.get(query) {
            Some(expected) => score_one(actual, expected),
            None => match policy {
                MissingPolicy::Fail => return Err(Error::MissingJudgment(query.clone())),
                MissingPolicy::ScoreZero => {
                    tracing::warn!(query = %query, "no relevance judgment, scoring 0.0");
                    0.0
                }
            },
        };
        scores.insert(query.clone(), score);
    }
    Ok(scores)
}

/// Arithmetic mean of per-query scores. Zero scored queries is an
/// explicit error, never a silent NaN or zero.
pub fn mean_score(scores: &BTreeMap<String, f64>) -> Result<f64, Error> {
    if scores.is_empty() {
        return Err(Error::EmptyAggregate);
    }
    Ok(scores.values().sum::<f64>() / scores.len() as f64)
}

/// Parse a relevance judgment file. Records are three lines each: the
/// query name, a whitespace-separated list of relevant document names,
/// and a blank separator.
pub fn parse_judgments(text: &str) -> HashMap<String, HashSet<String>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut expected = HashMap::new();
    for record in lines.chunks(3) {
        let query = record[0].trim();
        if query.is_empty() {
            continue;
        }
        let docs: HashSet<String> = record
            .get(1)
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        expected.insert(query.to_string(), docs);
    }
    expected
}
