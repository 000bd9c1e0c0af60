//! Flattened document listing across records, with filtering.

use super::{RecordId, SupervisionRecord};
use crate::doc_ref::{DocumentCategory, DocumentParser, DocumentReference};
use serde::Serialize;

/// Project label for records with a blank project name.
pub const UNNAMED_PROJECT: &str = "unnamed project";

/// One document in the cross-record listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentListing {
    /// `"{record_id}-{index}"`, unique within one listing.
    pub id: String,
    pub record_id: RecordId,
    pub project_name: String,
    pub uploaded_at: Option<String>,
    pub document: DocumentReference,
}

/// Flattens records into one listing, record order first, then document
/// order. Records without an id are skipped.
pub fn flatten_documents(
    records: &[SupervisionRecord],
    parser: &DocumentParser,
) -> Vec<DocumentListing> {
    let mut out = Vec::new();
    for record in records {
        let Some(record_id) = record.id else {
            tracing::debug!(project = %record.project_name, "skipping record without id");
            continue;
        };
        let project_name = if record.project_name.trim().is_empty() {
            UNNAMED_PROJECT.to_string()
        } else {
            record.project_name.clone()
        };
        let uploaded_at = record.last_touched().map(str::to_string);
        for (index, document) in record.documents(parser).into_iter().enumerate() {
            out.push(DocumentListing {
                id: format!("{record_id}-{index}"),
                record_id,
                project_name: project_name.clone(),
                uploaded_at: uploaded_at.clone(),
                document,
            });
        }
    }
    out
}

/// Category and free-text filter for a listing. Empty filter matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: Option<DocumentCategory>,
    /// Case-insensitive substring of the file name or project name.
    pub search: Option<String>,
}

impl ListingFilter {
    pub fn matches(&self, entry: &DocumentListing) -> bool {
        if let Some(category) = self.category {
            if entry.document.category != category {
                return false;
            }
        }
        match self.search.as_deref().map(str::to_lowercase) {
            Some(term) if !term.is_empty() => {
                entry.document.file_name.to_lowercase().contains(&term)
                    || entry.project_name.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, entries: &'a [DocumentListing]) -> Vec<&'a DocumentListing> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}
