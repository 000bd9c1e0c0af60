//! Extension extraction and document category lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse document type, used for icon/badge selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Image,
    Text,
    Audio,
    Video,
    Archive,
    Other,
}

/// Extension table backing [`classify`]. Keys are lowercase.
const EXTENSION_TABLE: &[(&str, DocumentCategory)] = &[
    ("pdf", DocumentCategory::Pdf),
    ("doc", DocumentCategory::Word),
    ("docx", DocumentCategory::Word),
    ("xls", DocumentCategory::Excel),
    ("xlsx", DocumentCategory::Excel),
    ("ppt", DocumentCategory::PowerPoint),
    ("pptx", DocumentCategory::PowerPoint),
    ("txt", DocumentCategory::Text),
    ("jpg", DocumentCategory::Image),
    ("jpeg", DocumentCategory::Image),
    ("png", DocumentCategory::Image),
    ("gif", DocumentCategory::Image),
    ("bmp", DocumentCategory::Image),
    ("webp", DocumentCategory::Image),
    ("mp4", DocumentCategory::Video),
    ("avi", DocumentCategory::Video),
    ("mov", DocumentCategory::Video),
    ("wmv", DocumentCategory::Video),
    ("mp3", DocumentCategory::Audio),
    ("wav", DocumentCategory::Audio),
    ("flac", DocumentCategory::Audio),
    ("zip", DocumentCategory::Archive),
    ("rar", DocumentCategory::Archive),
    ("7z", DocumentCategory::Archive),
];

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 10] = [
        DocumentCategory::Pdf,
        DocumentCategory::Word,
        DocumentCategory::Excel,
        DocumentCategory::PowerPoint,
        DocumentCategory::Image,
        DocumentCategory::Text,
        DocumentCategory::Audio,
        DocumentCategory::Video,
        DocumentCategory::Archive,
        DocumentCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentCategory::Pdf => "PDF",
            DocumentCategory::Word => "Word",
            DocumentCategory::Excel => "Excel",
            DocumentCategory::PowerPoint => "PowerPoint",
            DocumentCategory::Image => "Image",
            DocumentCategory::Text => "Text",
            DocumentCategory::Audio => "Audio",
            DocumentCategory::Video => "Video",
            DocumentCategory::Archive => "Archive",
            DocumentCategory::Other => "Other",
        }
    }

    /// Badge text used by the Chinese dashboard.
    pub fn label_zh(self) -> &'static str {
        match self {
            DocumentCategory::Pdf => "PDF",
            DocumentCategory::Word => "Word",
            DocumentCategory::Excel => "Excel",
            DocumentCategory::PowerPoint => "PowerPoint",
            DocumentCategory::Image => "图片",
            DocumentCategory::Text => "文本",
            DocumentCategory::Audio => "音频",
            DocumentCategory::Video => "视频",
            DocumentCategory::Archive => "压缩包",
            DocumentCategory::Other => "文档",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown document category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for DocumentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Maps an extension to its category. Case-insensitive; unknown or empty
/// extensions map to [`DocumentCategory::Other`].
pub fn classify(extension: &str) -> DocumentCategory {
    lookup(extension).unwrap_or(DocumentCategory::Other)
}

/// True if `extension` has an entry in the category table.
pub fn is_supported_extension(extension: &str) -> bool {
    lookup(extension).is_some()
}

fn lookup(extension: &str) -> Option<DocumentCategory> {
    let ext = extension.to_lowercase();
    EXTENSION_TABLE
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, category)| *category)
}

/// Lowercased text after the last `.` of `raw`, or empty if there is none.
///
/// Works on the raw string, not the parsed path, so a query string or a
/// dotted host without a file extension yields an extension that classifies
/// as `Other`.
pub fn extension_of(raw: &str) -> String {
    match raw.rfind('.') {
        Some(idx) => raw[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}
