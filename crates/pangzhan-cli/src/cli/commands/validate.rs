//! `pangzhan validate <raw>` – report malformed entries; fails if any.

use super::input::read_raw;
use anyhow::{bail, Result};
use pangzhan_core::doc_ref::validate;

pub fn run_validate(raw: &str) -> Result<()> {
    let raw = read_raw(raw)?;
    let report = validate(Some(raw.as_str()));
    println!(
        "encoding: {:?}, candidates: {}",
        report.encoding, report.candidates
    );
    if report.dropped_elements > 0 {
        println!("  {} non-string JSON element(s) ignored", report.dropped_elements);
    }
    for issue in &report.issues {
        println!("  #{} {}: {}", issue.index, issue.candidate, issue.issue);
    }
    if !report.is_clean() {
        bail!(
            "{} issue(s), {} ignored element(s)",
            report.issues.len(),
            report.dropped_elements
        );
    }
    println!("ok");
    Ok(())
}
