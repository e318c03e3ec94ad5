//! Error types for tokenizing and parsing.
//!
//! There is a single error kind, a syntax error, carrying:
//!
//! - The specific violation (expected vs. found, unexpected token, end of input)
//! - The 1-based source position of the offending token, when there is one
//! - A human-readable tip for display

pub mod errors;
