use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","an","and","are","as","at","be","by","can","for","from","have","if",
            "in","is","it","may","not","of","on","or","tbd","that","the","this","to",
            "us","we","when","will","with","yet","you","your",
        ];
        words.iter().copied().collect()
    };
}

/// Tokenization settings shared between index build and query parse.
/// Passed explicitly to both so indices with different settings can
/// coexist in one process.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub remove_stopwords: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self { remove_stopwords: true }
    }
}

impl Analyzer {
    /// Tokenize text into terms using NFKC normalization, lowercasing and
    /// optional stopword removal. Deterministic; empty input yields an
    /// empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut terms = Vec::new();
        for mat in RE.find_iter(&normalized) {
            let token = mat.as_str();
            if self.remove_stopwords && STOPWORDS.contains(token) {
                continue;
            }
            terms.push(token.to_string());
        }
        terms
    }
}
