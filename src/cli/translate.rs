//! Group or translate a JSON symbol stream

use std::collections::VecDeque;

use tracing::info;

use super::{json_to_symbols, postfix_to_json, symbols_to_json, CliError, ConvertError};
use crate::{group_expressions, to_postfix_notation, to_rpn, PostfixSymbol, Symbol};

/// Which pass to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Group and reorder into postfix notation
    #[default]
    Postfix,
    /// Only fold comparison runs into expressions
    Group,
}

/// Options for the translate commands
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// JSON array of symbols
    pub input: Option<String>,
    /// Pass to run
    pub mode: Mode,
}

/// Result of a translate operation
#[derive(Debug)]
pub enum TranslateResult {
    /// Output of the grouping pass
    Grouped(Vec<Symbol>),
    /// Output of the postfix translation
    Postfix(VecDeque<PostfixSymbol>),
}

impl TranslateResult {
    /// JSON form of the result
    pub fn to_json(&self) -> Result<serde_json::Value, ConvertError> {
        match self {
            TranslateResult::Grouped(symbols) => symbols_to_json(symbols),
            TranslateResult::Postfix(queue) => postfix_to_json(queue),
        }
    }

    /// Plain text form of the result
    pub fn to_text(&self) -> String {
        match self {
            TranslateResult::Grouped(symbols) => to_rpn(symbols),
            TranslateResult::Postfix(queue) => to_rpn(queue),
        }
    }
}

/// Execute a translate operation
pub fn execute_translate(options: &TranslateOptions) -> Result<TranslateResult, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let symbols = json_to_symbols(json_value)?;

    info!(symbols = symbols.len(), mode = ?options.mode, "translating");

    let result = match options.mode {
        Mode::Postfix => TranslateResult::Postfix(to_postfix_notation(&symbols)?),
        Mode::Group => TranslateResult::Grouped(group_expressions(&symbols)?),
    };
    Ok(result)
}
