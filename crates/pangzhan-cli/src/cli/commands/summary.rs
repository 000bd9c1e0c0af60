//! `pangzhan summary <raw>` – first N document names plus a remainder count.

use super::input::read_raw;
use anyhow::Result;
use pangzhan_core::config::PangzhanConfig;
use pangzhan_core::record::DocumentSummary;

pub fn run_summary(cfg: &PangzhanConfig, raw: &str, max: Option<usize>) -> Result<()> {
    let raw = read_raw(raw)?;
    let documents = cfg.parser().parse(Some(raw.as_str()));
    let summary = DocumentSummary::new(documents, max.unwrap_or(cfg.summary_max_display));
    if summary.is_empty() {
        println!("No documents.");
        return Ok(());
    }
    for d in &summary.shown {
        println!("[{}] {}", d.category.label(), d.file_name);
    }
    if summary.remaining > 0 {
        println!("+{} more", summary.remaining);
    }
    Ok(())
}
