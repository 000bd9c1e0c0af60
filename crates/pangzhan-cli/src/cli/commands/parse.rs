//! `pangzhan parse <raw>` – list the documents in a stored value.

use super::input::{print_documents, read_raw};
use anyhow::Result;
use pangzhan_core::config::PangzhanConfig;

pub fn run_parse(cfg: &PangzhanConfig, raw: &str, json: bool) -> Result<()> {
    let raw = read_raw(raw)?;
    let documents = cfg.parser().parse(Some(raw.as_str()));
    if json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
    } else {
        print_documents(&documents);
    }
    Ok(())
}
