use crate::index::{DocId, InvertedIndex};
use crate::tokenizer::Analyzer;
use std::collections::{BTreeSet, HashSet};

/// Boolean expression over terms. Free-text queries parse to a single
/// `Or` over their terms; `And` and `Not` are available to callers that
/// compose expressions directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    Term(String),
    Or(Vec<QueryExpr>),
    And(Vec<QueryExpr>),
    Not(Box<QueryExpr>),
}

/// Parse free text into an OR of its terms, tokenized with the same
/// analyzer used at index build so the vocabularies match. Empty or
/// all-stopword text parses to the empty OR, which matches no documents.
pub fn parse(analyzer: &Analyzer, query_text: &str) -> QueryExpr {
    QueryExpr::Or(
        analyzer
            .tokenize(query_text)
            .into_iter()
            .map(QueryExpr::Term)
            .collect(),
    )
}

/// Evaluate an expression against the index, returning the names of
/// matching documents. The BTreeSet iterates in name-ascending order,
/// which keeps output reproducible.
pub fn execute(expr: &QueryExpr, index: &InvertedIndex) -> BTreeSet<String> {
    eval(expr, index)
        .into_iter()
        .filter_map(|doc_id| index.doc_name(doc_id).map(str::to_string))
        .collect()
}

fn eval(expr: &QueryExpr, index: &InvertedIndex) -> HashSet<DocId> {
    match expr {
        QueryExpr::Term(term) => index.lookup(term).iter().copied().collect(),
        QueryExpr::Or(children) => {
            let mut out = HashSet::new();
            for child in children {
                out.extend(eval(child, index));
            }
            out
        }
        QueryExpr::And(children) => {
            let mut iter = children.iter();
            // The empty AND matches nothing, same as the empty OR.
            let Some(first) = iter.next() else {
                return HashSet::new();
            };
            let mut out = eval(first, index);
            for child in iter {
                let next = eval(child, index);
                out.retain(|doc_id| next.contains(doc_id));
            }
            out
        }
        QueryExpr::Not(inner) => {
            let excluded = eval(inner, index);
            index
                .docs
                .keys()
                .copied()
                .filter(|doc_id| !excluded.contains(doc_id))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_empty_or() {
        let expr = parse(&Analyzer::default(), "  ");
        assert_eq!(expr, QueryExpr::Or(vec![]));
    }
}
