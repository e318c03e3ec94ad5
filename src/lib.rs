#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::{parse, ParseOutput},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod report;

/// 1-based character offset into the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position(pub u32);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything produced for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub output: ParseOutput,
}

/// Validates, tokenizes and parses `input`.
///
/// Input is trimmed first, so positions are relative to the trimmed text.
/// Empty or whitespace-only input is rejected before tokenizing.
pub fn compile_expression(input: &str) -> Result<Compilation, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyInput, None));
    }

    let tokens = tokenize(input);
    let output = parse(&tokens)?;

    debug!(
        tokens = tokens.len(),
        steps = output.steps.len(),
        "compiled expression"
    );

    Ok(Compilation { tokens, output })
}

/// Formats an error against the expression it came from.
///
/// ```text
/// Error: UnexpectedToken (Expected a number or `(` but found `)`)
///   |
///   | 2*)
///   | --^
/// ```
///
/// The expression is trimmed the same way `compile_expression` trims it.
/// Only the line holding the error is shown. Errors at end of input point
/// one past the last character.
pub fn format_error(error: &Error, expression: &str) -> String {
    let expression = expression.trim();

    let mut result = if let ErrorTip::None = error.get_tip() {
        format!("Error: {} ({})\n", error.get_error_name(), error)
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    let mut column = match error.get_position() {
        Some(position) => position.0 as usize,
        None => expression.chars().count() + 1,
    };

    // positions count the newlines too, rebase the column onto its line
    let mut line = "";
    for text in expression.split('\n') {
        line = text;
        let width = text.chars().count() + 1;
        if column <= width {
            break;
        }
        column -= width;
    }
    let line = line.trim_end_matches('\r');

    result.push_str("  |\n");
    result.push_str(&format!("  | {}\n", line));
    result.push_str(&format!("  | {:->column$}\n", "^"));

    result
}
