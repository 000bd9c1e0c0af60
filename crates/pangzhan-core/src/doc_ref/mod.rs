//! Document references stored on supervision records.
//!
//! A record's `document_urls` field is a loosely structured string: either a
//! JSON array of URLs or a comma-separated list. This module turns it into an
//! ordered list of [`DocumentReference`]s with a display name, extension and
//! category. Parsing never fails; bad input degrades to best-effort values.

mod category;
mod decode;
mod name;
mod size;
mod validate;

pub use category::{
    classify, extension_of, is_supported_extension, DocumentCategory, UnknownCategory,
};
pub use decode::{decode_candidates, Candidates, Encoding};
pub use name::{file_name_from_candidate, file_stem, is_valid_url, UNKNOWN_FILE_NAME};
pub use size::format_file_size;
pub use validate::{validate, CandidateIssue, ReferenceIssue, ValidationReport};

use serde::Serialize;

/// One attached document, derived from a single raw candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReference {
    pub url: String,
    pub file_name: String,
    pub extension: String,
    pub category: DocumentCategory,
}

/// Parser with a configurable placeholder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentParser {
    placeholder: String,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self {
            placeholder: UNKNOWN_FILE_NAME.to_string(),
        }
    }
}

impl DocumentParser {
    /// Parser that names unnamed documents `placeholder` (blank uses the default).
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if placeholder.trim().is_empty() {
            return Self::default();
        }
        Self { placeholder }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Parses a stored `document_urls` value. Output order follows input
    /// order; duplicates are kept.
    pub fn parse(&self, raw: Option<&str>) -> Vec<DocumentReference> {
        let candidates = decode_candidates(raw);
        tracing::trace!(
            encoding = ?candidates.encoding,
            count = candidates.urls.len(),
            "decoded document_urls"
        );
        candidates
            .urls
            .into_iter()
            .map(|url| self.reference(url))
            .collect()
    }

    /// Builds the descriptor for one raw candidate.
    pub fn reference(&self, url: String) -> DocumentReference {
        let file_name = file_name_from_candidate(&url, &self.placeholder);
        let extension = extension_of(&url);
        let category = classify(&extension);
        DocumentReference {
            url,
            file_name,
            extension,
            category,
        }
    }
}

/// Parses `raw` with the default placeholder name.
pub fn parse(raw: Option<&str>) -> Vec<DocumentReference> {
    DocumentParser::default().parse(raw)
}
