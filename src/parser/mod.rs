//! Parser module for building the expression tree.
//!
//! A recursive-descent parser over a three-level grammar
//! (expression → term → factor) that, alongside the tree, records:
//!
//! - The ordered trace of every rule firing
//! - The set of production families used
//!
//! Both are collected in a `Trace` owned by the `parse` call.

pub mod expr;
pub mod parser;
pub mod trace;
