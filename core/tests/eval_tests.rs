use core::{mean_score, parse_judgments, score_all, score_one, Error, MissingPolicy};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn judged(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn recall_is_hits_over_expected() {
    let score = score_one(&set(&["a.poem"]), &judged(&["a.poem", "c.poem"]));
    assert_eq!(score, 0.5);
}

#[test]
fn recall_stays_within_unit_interval() {
    let expected = judged(&["a.poem", "b.poem"]);
    for actual in [set(&[]), set(&["a.poem"]), set(&["a.poem", "b.poem", "x.poem"])] {
        let score = score_one(&actual, &expected);
        assert!((0.0..=1.0).contains(&score));
    }
    // Full recall despite extra hits.
    assert_eq!(score_one(&set(&["a.poem", "b.poem", "x.poem"]), &expected), 1.0);
}

#[test]
fn empty_expected_set_scores_zero() {
    assert_eq!(score_one(&set(&["a.poem"]), &judged(&[])), 0.0);
}

#[test]
fn score_all_keys_by_query() {
    let mut actual = BTreeMap::new();
    actual.insert("q1.query".to_string(), set(&["a.poem"]));
    actual.insert("q2.query".to_string(), set(&["b.poem"]));
    let mut expected = HashMap::new();
    expected.insert("q1.query".to_string(), judged(&["a.poem", "c.poem"]));
    expected.insert("q2.query".to_string(), judged(&["b.poem"]));

    let scores = score_all(&actual, &expected, MissingPolicy::Fail).unwrap();
    assert_eq!(scores["q1.query"], 0.5);
    assert_eq!(scores["q2.query"], 1.0);
}

#[test]
fn missing_judgment_is_fatal_by_default() {
    let mut actual = BTreeMap::new();
    actual.insert("q9.query".to_string(), set(&["a.poem"]));
    let err = score_all(&actual, &HashMap::new(), MissingPolicy::Fail).unwrap_err();
    assert_eq!(err, Error::MissingJudgment("q9.query".to_string()));
}

#[test]
fn lenient_policy_scores_missing_judgment_zero() {
    let mut actual = BTreeMap::new();
    actual.insert("q9.query".to_string(), set(&["a.poem"]));
    let scores = score_all(&actual, &HashMap::new(), MissingPolicy::ScoreZero).unwrap();
    assert_eq!(scores["q9.query"], 0.0);
}

#[test]
fn mean_over_zero_queries_fails_explicitly() {
    let err = mean_score(&BTreeMap::new()).unwrap_err();
    assert_eq!(err, Error::EmptyAggregate);
}

#[test]
fn mean_averages_per_query_scores() {
    let mut scores = BTreeMap::new();
    scores.insert("q1.query".to_string(), 0.5);
    scores.insert("q2.query".to_string(), 1.0);
    assert_eq!(mean_score(&scores).unwrap(), 0.75);
}

#[test]
fn judgment_file_parses_in_three_line_records() {
    let text = "q1.query\na.poem c.poem\n\nq2.query\nb.poem\n\n";
    let expected = parse_judgments(text);
    assert_eq!(expected.len(), 2);
    assert_eq!(expected["q1.query"], judged(&["a.poem", "c.poem"]));
    assert_eq!(expected["q2.query"], judged(&["b.poem"]));
}

#[test]
fn judgment_record_may_omit_trailing_separator() {
    let expected = parse_judgments("q1.query\na.poem");
    assert_eq!(expected["q1.query"], judged(&["a.poem"]));
}
