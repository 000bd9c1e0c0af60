//! Optional validation pass over stored document references.
//!
//! Parsing never fails; this report is how a caller finds out that a stored
//! value is malformed rather than legitimately empty.

use super::category::{extension_of, is_supported_extension};
use super::decode::{decode_candidates, Encoding};
use super::name::is_valid_url;

/// Problem found with a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceIssue {
    #[error("not an absolute URL")]
    NotAUrl,
    #[error("no file extension")]
    MissingExtension,
    #[error("unsupported file type .{0}")]
    UnsupportedType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIssue {
    pub index: usize,
    pub candidate: String,
    pub issue: ReferenceIssue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub encoding: Encoding,
    pub candidates: usize,
    /// Non-string JSON array elements that parsing silently skips.
    pub dropped_elements: usize,
    pub issues: Vec<CandidateIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.dropped_elements == 0
    }
}

/// Checks every candidate of `raw` and reports what a strict consumer would
/// reject. A candidate can carry both a URL issue and an extension issue.
pub fn validate(raw: Option<&str>) -> ValidationReport {
    let decoded = decode_candidates(raw);
    let mut issues = Vec::new();

    for (index, candidate) in decoded.urls.iter().enumerate() {
        let mut push = |issue| {
            issues.push(CandidateIssue {
                index,
                candidate: candidate.clone(),
                issue,
            })
        };
        if !is_valid_url(candidate) {
            push(ReferenceIssue::NotAUrl);
        }
        let ext = extension_of(candidate);
        if ext.is_empty() {
            push(ReferenceIssue::MissingExtension);
        } else if !is_supported_extension(&ext) {
            push(ReferenceIssue::UnsupportedType(ext));
        }
    }

    ValidationReport {
        encoding: decoded.encoding,
        candidates: decoded.urls.len(),
        dropped_elements: decoded.dropped,
        issues,
    }
}
