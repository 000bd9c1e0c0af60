//! Shared helpers: raw value input and record source selection.

use anyhow::{Context, Result};
use pangzhan_core::api::{FileRecordSource, HttpRecordSource, RecordSource};
use pangzhan_core::config::PangzhanConfig;
use pangzhan_core::DocumentReference;
use std::io::Read;
use std::path::Path;

/// Returns `raw`, or stdin's contents when `raw` is `-`.
pub fn read_raw(raw: &str) -> Result<String> {
    if raw != "-" {
        return Ok(raw.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read document_urls from stdin")?;
    Ok(buf)
}

/// File export when `file` is given, otherwise the configured record API.
pub fn record_source(cfg: &PangzhanConfig, file: Option<&Path>) -> Box<dyn RecordSource> {
    match file {
        Some(path) => Box::new(FileRecordSource::new(path)),
        None => Box::new(HttpRecordSource::from_config(&cfg.api)),
    }
}

pub fn print_documents(documents: &[DocumentReference]) {
    if documents.is_empty() {
        println!("No documents.");
        return;
    }
    println!("{:<32} {:<11} {:<6} {}", "NAME", "TYPE", "EXT", "URL");
    for d in documents {
        println!(
            "{:<32} {:<11} {:<6} {}",
            d.file_name,
            d.category.label(),
            d.extension,
            d.url
        );
    }
}
