//! Indexing, boolean-OR retrieval and recall evaluation over a corpus of
//! short text documents.
//!
//! The pipeline is batch-oriented: build an [`InvertedIndex`] over
//! `(name, text)` pairs, [`parse`] each free-text query into a
//! [`QueryExpr`], [`execute`] it against the index, then score the result
//! sets against a relevance judgment table with [`score_all`] and
//! [`mean_score`]. The index is plain data and freely shareable once
//! built.

pub mod error;
pub mod eval;
pub mod index;
pub mod persist;
pub mod query;
pub mod tokenizer;

pub use error::Error;
pub use eval::{mean_score, parse_judgments, score_all, score_one, MissingPolicy};
pub use index::{DocId, DocMeta, InvertedIndex, TermId};
pub use query::{execute, parse, QueryExpr};
pub use tokenizer::Analyzer;
