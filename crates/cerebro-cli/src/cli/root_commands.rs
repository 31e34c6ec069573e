use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search processed items by relevance.
    Search(SearchArgs),
    /// Import items from a JSONL file.
    Import(ImportArgs),
}

/// Arguments for `cbr search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    /// Restrict to one kind: note, link, file, photo, audio, video.
    /// Unknown kinds are ignored.
    #[arg(long)]
    pub kind: Option<String>,
    /// Include the per-field score breakdown of every result.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `cbr import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// JSONL file with one item per line, tagged by `kind`.
    pub file: PathBuf,
}
