//! `pangzhan classify <ext>` – print the category for an extension.

use pangzhan_core::classify;

pub fn run_classify(extension: &str) {
    let ext = extension.trim_start_matches('.');
    let category = classify(ext);
    println!("{} ({})", category.label(), category.label_zh());
}
