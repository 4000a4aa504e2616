//! CLI support for ccl-lang
//!
//! Provides programmatic access to the `ccl` command so other tools can
//! embed it without going through a process boundary.

mod convert;
mod docs;
mod translate;

pub use convert::{
    json_to_symbols, json_to_value, postfix_to_json, symbols_to_json, value_to_json, ConvertError,
};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use translate::{execute_translate, Mode, TranslateOptions, TranslateResult};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The symbol stream was rejected
    #[error(transparent)]
    Syntax(#[from] crate::SyntaxError),

    /// The input JSON is not a symbol stream
    #[error("Invalid symbols: {0}")]
    Convert(#[from] ConvertError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe a JSON symbol array to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'ccl docs' to see available categories.")]
    UnknownCategory(String),
}
