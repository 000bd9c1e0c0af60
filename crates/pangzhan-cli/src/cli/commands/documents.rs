//! `pangzhan documents` – documents across records, filtered.

use super::input::record_source;
use anyhow::{Context, Result};
use pangzhan_core::api::Page;
use pangzhan_core::config::PangzhanConfig;
use pangzhan_core::record::{flatten_documents, DocumentListing, ListingFilter};
use pangzhan_core::DocumentCategory;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct DocumentsArgs {
    pub file: Option<PathBuf>,
    pub category: Option<DocumentCategory>,
    pub search: Option<String>,
    pub skip: u32,
    pub limit: Option<u32>,
    pub json: bool,
}

/// Fetches one page of records and returns their documents after filtering.
pub fn load_documents(cfg: &PangzhanConfig, args: &DocumentsArgs) -> Result<Vec<DocumentListing>> {
    let source = record_source(cfg, args.file.as_deref());
    let page = Page {
        skip: args.skip,
        limit: args.limit.unwrap_or(cfg.api.page_limit),
    };
    let records = source
        .list_records(page)
        .context("load supervision records")?;
    let listing = flatten_documents(&records, &cfg.parser());
    let filter = ListingFilter {
        category: args.category,
        search: args.search.clone(),
    };
    let hits: Vec<DocumentListing> = filter.apply(&listing).into_iter().cloned().collect();
    tracing::debug!(
        records = records.len(),
        documents = listing.len(),
        shown = hits.len(),
        "documents listing"
    );
    Ok(hits)
}

pub fn run_documents(cfg: &PangzhanConfig, args: DocumentsArgs) -> Result<()> {
    let hits = load_documents(cfg, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }
    if hits.is_empty() {
        println!("No documents.");
        return Ok(());
    }
    println!(
        "{:<8} {:<24} {:<32} {:<11} {}",
        "ID", "PROJECT", "NAME", "TYPE", "UPDATED"
    );
    for e in hits {
        println!(
            "{:<8} {:<24} {:<32} {:<11} {}",
            e.id,
            e.project_name,
            e.document.file_name,
            e.document.category.label(),
            e.uploaded_at.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
