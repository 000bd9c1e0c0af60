//! `pangzhan record <id>` – one record and its documents.

use super::input::{print_documents, record_source};
use anyhow::{Context, Result};
use pangzhan_core::config::PangzhanConfig;
use pangzhan_core::record::{RecordId, SupervisionRecord};
use std::path::Path;

pub fn load_record(
    cfg: &PangzhanConfig,
    id: RecordId,
    file: Option<&Path>,
) -> Result<SupervisionRecord> {
    record_source(cfg, file)
        .get_record(id)
        .with_context(|| format!("load supervision record {id}"))
}

pub fn run_record(cfg: &PangzhanConfig, id: RecordId, file: Option<&Path>) -> Result<()> {
    let record = load_record(cfg, id, file)?;
    println!("Record {id}: {}", record.project_name);
    if !record.construction_unit.is_empty() {
        println!("  construction unit: {}", record.construction_unit);
    }
    if let Some(ts) = record.last_touched() {
        println!("  updated: {ts}");
    }
    print_documents(&record.documents(&cfg.parser()));
    Ok(())
}
