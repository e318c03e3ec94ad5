//! Text and JSON renderings of tokenizer and parser output.
//!
//! Everything here is read-only over the core results:
//!
//! - Token tables
//! - Text trees
//! - Numbered (optionally narrated) step lists
//! - Production listings
//! - A combined JSON document

pub mod report;

#[cfg(test)]
mod tests;
