//! Category name → id lookup derived from a sample of random clues

use super::model::{ANY, Clue};
use crate::error::{Result, SearchError};
use indexmap::IndexMap;

/// Selectable categories for one session.
///
/// Built once from a random sample, so it only knows the categories that
/// happened to appear in that sample. Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    ids: IndexMap<String, i64>,
    sample_size: usize,
}

impl CategoryIndex {
    /// Build the index from sampled clues.
    ///
    /// Clues without both a category title and id are skipped. A title seen
    /// twice keeps its first position but takes the later id.
    pub fn build(sample: &[Clue]) -> Self {
        let mut ids = IndexMap::new();
        for clue in sample {
            if let (Some(title), Some(id)) = (&clue.category, clue.category_id) {
                ids.insert(title.clone(), id);
            }
        }
        Self {
            ids,
            sample_size: sample.len(),
        }
    }

    /// Category names for a picker, with the "Any" sentinel first
    pub fn names(&self) -> Vec<String> {
        std::iter::once(ANY.to_string())
            .chain(self.ids.keys().cloned())
            .collect()
    }

    pub fn resolve(&self, name: &str) -> Result<i64> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::UnknownCategory(name.to_string()))
    }

    /// (name, id) pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ids.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of clues the index was built from
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}
