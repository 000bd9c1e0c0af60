//! Record source over a JSON export (array of records) on disk.

use super::error::ApiError;
use super::{records_from_value, Page, RecordSource};
use crate::record::{RecordId, SupervisionRecord};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<SupervisionRecord>, ApiError> {
        let data = fs::read(&self.path)?;
        let value: serde_json::Value = serde_json::from_slice(&data)?;
        records_from_value(value)
    }
}

impl RecordSource for FileRecordSource {
    fn list_records(&self, page: Page) -> Result<Vec<SupervisionRecord>, ApiError> {
        Ok(self
            .load()?
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    fn get_record(&self, id: RecordId) -> Result<SupervisionRecord, ApiError> {
        self.load()?
            .into_iter()
            .find(|r| r.id == Some(id))
            .ok_or(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn export(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    const RECORDS: &str = r#"[
        {"id": 1, "project_name": "Bridge A", "document_urls": "a.pdf,b.png"},
        {"id": 2, "project_name": "Tunnel B", "document_urls": null},
        {"id": 3, "project_name": "Depot C", "document_urls": "[\"c.xlsx\"]"}
    ]"#;

    #[test]
    fn list_applies_paging() {
        let f = export(RECORDS);
        let src = FileRecordSource::new(f.path());
        let all = src.list_records(Page::default()).unwrap();
        assert_eq!(all.len(), 3);
        let page = src.list_records(Page { skip: 1, limit: 1 }).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].project_name, "Tunnel B");
    }

    #[test]
    fn get_by_id() {
        let f = export(RECORDS);
        let src = FileRecordSource::new(f.path());
        assert_eq!(src.get_record(3).unwrap().project_name, "Depot C");
        assert!(matches!(src.get_record(99), Err(ApiError::NotFound)));
    }

    #[test]
    fn non_array_export_is_empty() {
        let f = export(r#"{"detail": "nothing here"}"#);
        let src = FileRecordSource::new(f.path());
        assert!(src.list_records(Page::default()).unwrap().is_empty());
    }

    #[test]
    fn missing_or_invalid_file_errors() {
        let src = FileRecordSource::new("/nonexistent/pangzhan/records.json");
        assert!(matches!(src.list_records(Page::default()), Err(ApiError::Io(_))));

        let f = export("not json");
        let src = FileRecordSource::new(f.path());
        assert!(matches!(src.list_records(Page::default()), Err(ApiError::Decode(_))));
    }
}
