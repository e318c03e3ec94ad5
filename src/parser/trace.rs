//! Derivation bookkeeping: the ordered step trace and the set of grammar
//! productions used during one parse.

use std::{collections::BTreeSet, fmt::Display};

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::ast::ast::BinaryOp;

/// One grammar rule firing, in parse order.
///
/// The `Display` form is what step narration matches on, so each variant
/// keeps a fixed prefix.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Step {
    /// `expression -> term`
    ExpressionToTerm,
    /// `expression -> expression OP term`
    ExpressionOp(BinaryOp),
    /// `term -> factor`
    TermToFactor,
    /// `term -> term OP factor`
    TermOp(BinaryOp),
    /// `factor -> NUMBER (n)`
    FactorNumber(String),
    /// `factor -> LPAREN expression RPAREN`
    FactorParen,
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::ExpressionToTerm => write!(f, "expression -> term"),
            Step::ExpressionOp(op) => write!(f, "expression -> expression {} term", op),
            Step::TermToFactor => write!(f, "term -> factor"),
            Step::TermOp(op) => write!(f, "term -> term {} factor", op),
            Step::FactorNumber(value) => write!(f, "factor -> NUMBER ({})", value),
            Step::FactorParen => write!(f, "factor -> LPAREN expression RPAREN"),
        }
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A production family of the grammar. Loop-back branches belong to the
/// family of their non-terminal, so a parse uses at most four of these.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Production {
    Expression,
    Term,
    Factor,
    FactorParen,
}

impl Production {
    pub fn all() -> [Production; 4] {
        [
            Production::Expression,
            Production::Term,
            Production::Factor,
            Production::FactorParen,
        ]
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let template = match self {
            Production::Expression => {
                "expression → term | expression '+' term | expression '-' term"
            }
            Production::Term => "term → factor | term '*' factor | term '/' factor",
            Production::Factor => "factor → NUMBER | '(' expression ')'",
            Production::FactorParen => "factor → '(' expression ')'",
        };
        write!(f, "{}", template)
    }
}

impl Serialize for Production {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accumulates steps and productions for a single parse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub rules: BTreeSet<Production>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: Step, production: Production) {
        trace!(index = self.steps.len() + 1, step = %step, "derivation step");
        self.steps.push(step);
        self.rules.insert(production);
    }
}
