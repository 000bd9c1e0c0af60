pub mod config;
pub mod logging;

pub mod api;
pub mod doc_ref;
pub mod record;

pub use doc_ref::{classify, parse, DocumentCategory, DocumentParser, DocumentReference};
