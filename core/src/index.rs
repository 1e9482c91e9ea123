use crate::tokenizer::Analyzer;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type TermId = u32;
pub type DocId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMeta {
    /// External identifier, derived from the source filename.
    pub name: String,
}

/// Term-to-posting-list mapping plus document metadata. Built once per
/// run, read-only afterward; plain data, safe to share across threads.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    pub dictionary: HashMap<String, TermId>,
    /// Posting lists keyed by term id. Sorted by doc id, one entry per
    /// document regardless of how often the term occurs in it.
    pub postings: HashMap<TermId, Vec<DocId>>,
    pub docs: HashMap<DocId, DocMeta>,
    pub doc_names: HashMap<String, DocId>,
    pub num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `(name, text)` pairs. A repeated document name
    /// is rejected rather than silently overwritten. An empty corpus
    /// yields a valid empty index.
    pub fn build<I>(analyzer: &Analyzer, documents: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut index = Self::new();
        for (name, text) in documents {
            index.add_document(analyzer, name, &text)?;
        }
        tracing::info!(
            num_docs = index.num_docs,
            num_terms = index.dictionary.len(),
            "index built"
        );
        Ok(index)
    }

    fn add_document(&mut self, analyzer: &Analyzer, name: String, text: &str) -> Result<(), Error> {
        if self.doc_names.contains_key(&name) {
            return Err(Error::DuplicateDocument(name));
        }
        let doc_id = self.num_docs;
        self.num_docs += 1;
        self.doc_names.insert(name.clone(), doc_id);
        self.docs.insert(doc_id, DocMeta { name });

        // Doc ids are assigned in insertion order, so pushing keeps each
        // posting list sorted.
        let mut seen: HashSet<TermId> = HashSet::new();
        for term in analyzer.tokenize(text) {
            let next_id = self.dictionary.len() as TermId;
            let tid = *self.dictionary.entry(term).or_insert(next_id);
            if seen.insert(tid) {
                self.postings.entry(tid).or_default().push(doc_id);
            }
        }
        Ok(())
    }

    /// Posting list for a term; empty when the term is absent.
    pub fn lookup(&self, term: &str) -> &[DocId] {
        self.dictionary
            .get(term)
            .and_then(|tid| self.postings.get(tid))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn doc_name(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(&doc_id).map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.num_docs as usize
    }

    pub fn is_empty(&self) -> bool {
        self.num_docs == 0
    }
}
