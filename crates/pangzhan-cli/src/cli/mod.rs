//! CLI for inspecting supervision record documents.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pangzhan_core::config;
use pangzhan_core::DocumentCategory;
use std::path::PathBuf;

use commands::{
    run_classify, run_documents, run_parse, run_record, run_summary, run_validate, DocumentsArgs,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pangzhan")]
#[command(
    about = "Inspect documents attached to construction supervision records",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a stored document_urls value and list its documents.
    Parse {
        /// Raw value (JSON array or comma-separated list); `-` reads stdin.
        raw: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the document category for a file extension.
    Classify {
        /// Extension without the dot, e.g. `pdf`.
        extension: String,
    },

    /// Report malformed entries in a stored document_urls value.
    Validate {
        /// Raw value; `-` reads stdin.
        raw: String,
    },

    /// Show the first few documents and how many more there are.
    Summary {
        /// Raw value; `-` reads stdin.
        raw: String,
        /// Documents to show (defaults to `summary_max_display` from config).
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// List documents across all records.
    Documents {
        /// Read records from a JSON export instead of the record API.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Only documents of this category (pdf, word, excel, image, ...).
        #[arg(long)]
        category: Option<DocumentCategory>,
        /// Case-insensitive match on file name or project name.
        #[arg(long)]
        search: Option<String>,
        /// Records to skip.
        #[arg(long, default_value = "0")]
        skip: u32,
        /// Records to fetch (defaults to `api.page_limit` from config).
        #[arg(long)]
        limit: Option<u32>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show one record and its documents.
    Record {
        /// Record identifier.
        id: i64,
        /// Read records from a JSON export instead of the record API.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { raw, json } => run_parse(&cfg, &raw, json)?,
            CliCommand::Classify { extension } => run_classify(&extension),
            CliCommand::Validate { raw } => run_validate(&raw)?,
            CliCommand::Summary { raw, max } => run_summary(&cfg, &raw, max)?,
            CliCommand::Documents {
                file,
                category,
                search,
                skip,
                limit,
                json,
            } => run_documents(
                &cfg,
                DocumentsArgs {
                    file,
                    category,
                    search,
                    skip,
                    limit,
                    json,
                },
            )?,
            CliCommand::Record { id, file } => run_record(&cfg, id, file.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
