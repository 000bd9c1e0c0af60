//! Supervision records (旁站记录) as served by the record API, and the
//! document views built from them.

mod listing;
mod summary;

pub use listing::{flatten_documents, DocumentListing, ListingFilter, UNNAMED_PROJECT};
pub use summary::{count_by_category, DocumentSummary, DEFAULT_MAX_DISPLAY};

use crate::doc_ref::{DocumentParser, DocumentReference};
use serde::{Deserialize, Deserializer, Serialize};

/// Record identifier assigned by the remote store.
pub type RecordId = i64;

/// One supervision record. Missing or `null` text fields decode as empty
/// strings so older rows still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_as_empty")]
    pub project_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub construction_unit: String,
    pub pangzhan_unit: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub supervision_company: String,
    pub start_datetime: Option<String>,
    pub end_datetime: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub work_overview: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pre_work_check_content: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub supervising_personnel: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub issues_and_opinions: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub rectification_status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub remarks: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub construction_enterprise: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub supervising_enterprise: String,
    pub supervising_organization: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub on_site_supervising_personnel: String,
    pub document_urls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

impl SupervisionRecord {
    /// Documents attached to this record, in stored order.
    pub fn documents(&self, parser: &DocumentParser) -> Vec<DocumentReference> {
        parser.parse(self.document_urls.as_deref())
    }

    /// Most recent timestamp the store reported for this record.
    pub fn last_touched(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}
