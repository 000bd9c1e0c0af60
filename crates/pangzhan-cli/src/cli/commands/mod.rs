//! CLI command handlers, one per file.

mod classify;
mod documents;
mod input;
mod parse;
mod record;
mod summary;
mod validate;

pub use classify::run_classify;
pub use documents::{run_documents, DocumentsArgs};
pub use parse::run_parse;
pub use record::run_record;
pub use summary::run_summary;
pub use validate::run_validate;

#[cfg(test)]
pub use documents::load_documents;
#[cfg(test)]
pub use record::load_record;
