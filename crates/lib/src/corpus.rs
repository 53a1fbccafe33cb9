//! # FAQ Corpus
//!
//! The read-only question/answer records the assistant is grounded on, one
//! corpus per supported language. Corpora are loaded once at startup from a
//! JSON array of `{id, category, question, answer}` records and never mutated
//! afterwards.

use crate::{errors::CorpusError, types::CategoryOrder, types::Language};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// A single FAQ record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered, validated sequence of FAQ entries for one language.
///
/// Ids are unique and every category is non-empty; both are checked on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqCorpus {
    entries: Vec<FaqEntry>,
}

/// The entries of one category, in the order they appear in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a FaqEntry>,
}

impl FaqCorpus {
    /// Builds a corpus, rejecting duplicate ids and blank categories.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.category.trim().is_empty() {
                return Err(CorpusError::EmptyCategory(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CorpusError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let corpus = Self::from_json_str(&content)?;
        info!(path = %path.display(), entries = corpus.len(), "Loaded FAQ corpus.");
        Ok(corpus)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries whose question or answer contains `query`,
    /// ignoring case. An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&FaqEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|faq| {
                faq.question.to_lowercase().contains(&needle)
                    || faq.answer.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Groups the whole corpus by category.
    pub fn grouped(&self, order: CategoryOrder) -> Vec<CategoryGroup<'_>> {
        group_entries(self.entries.iter(), order)
    }
}

impl<'a> IntoIterator for &'a FaqCorpus {
    type Item = &'a FaqEntry;
    type IntoIter = std::slice::Iter<'a, FaqEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Groups entries by category.
///
/// Entries keep their relative order inside each group. Groups are ordered by
/// first occurrence, or by category name when `order` is `Alphabetical`.
pub fn group_entries<'a>(
    entries: impl IntoIterator<Item = &'a FaqEntry>,
    order: CategoryOrder,
) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.category.as_str()) {
            Some(&i) => groups[i].entries.push(entry),
            None => {
                index.insert(entry.category.as_str(), groups.len());
                groups.push(CategoryGroup {
                    category: entry.category.as_str(),
                    entries: vec![entry],
                });
            }
        }
    }

    if order == CategoryOrder::Alphabetical {
        groups.sort_by(|a, b| a.category.cmp(b.category));
    }
    groups
}

/// The per-language set of corpora available to the application.
#[derive(Debug, Clone, Default)]
pub struct FaqLibrary {
    corpora: HashMap<Language, FaqCorpus>,
}

impl FaqLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corpus(mut self, language: Language, corpus: FaqCorpus) -> Self {
        self.insert(language, corpus);
        self
    }

    pub fn insert(&mut self, language: Language, corpus: FaqCorpus) {
        self.corpora.insert(language, corpus);
    }

    /// Loads one corpus file per language.
    pub fn from_paths<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = (Language, P)>,
    ) -> Result<Self, CorpusError> {
        let mut library = Self::new();
        for (language, path) in paths {
            library.insert(language, FaqCorpus::from_path(path)?);
        }
        Ok(library)
    }

    pub fn get(&self, language: Language) -> Result<&FaqCorpus, CorpusError> {
        self.corpora
            .get(&language)
            .ok_or_else(|| CorpusError::MissingLanguage(language.to_string()))
    }

    /// The loaded languages, in `Language::ALL` order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.corpora.contains_key(lang))
            .collect()
    }
}
