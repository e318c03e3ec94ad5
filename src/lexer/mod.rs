//! Lexical analysis for arithmetic expressions.
//!
//! Turns source text into a positioned token stream:
//!
//! - Integer literals and the symbols `+ - * / ( )`
//! - Classification into `TokenKind`
//! - 1-based source positions for error reporting
//! - Silent skipping of whitespace and unsupported characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
