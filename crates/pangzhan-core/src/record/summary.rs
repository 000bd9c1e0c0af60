//! Compact "first N, +M more" view of a record's documents.

use crate::doc_ref::{DocumentCategory, DocumentReference};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_DISPLAY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub shown: Vec<DocumentReference>,
    /// Documents not in `shown`; zero when everything fits.
    pub remaining: usize,
}

impl DocumentSummary {
    pub fn new(mut documents: Vec<DocumentReference>, max_display: usize) -> Self {
        let remaining = documents.len().saturating_sub(max_display);
        documents.truncate(max_display);
        Self {
            shown: documents,
            remaining,
        }
    }

    pub fn total(&self) -> usize {
        self.shown.len() + self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Number of documents per category, in category order.
pub fn count_by_category(documents: &[DocumentReference]) -> BTreeMap<DocumentCategory, usize> {
    let mut counts = BTreeMap::new();
    for doc in documents {
        *counts.entry(doc.category).or_insert(0) += 1;
    }
    counts
}
