//! Parser state and entry point.
//!
//! The parser walks a token slice once, left to right, with no
//! backtracking. Grammar functions live in `expr`; this file holds the
//! cursor primitives they share (`peek`, `consume`) and `parse`, which
//! owns the derivation trace for the duration of one call.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl, END_OF_INPUT},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expression,
    trace::{Production, Step, Trace},
};

/// Deepest parenthesis nesting accepted before giving up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Cursor over a token slice.
pub struct Parser<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Index of the next unconsumed token
    pos: usize,
    /// Number of currently open parentheses
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the next unconsumed token, or `None` past the end.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes the next token if it has the expected kind.
    ///
    /// This is the only place the cursor moves forward.
    pub fn consume(&mut self, expected: TokenKind) -> Result<&'a Token, Error> {
        match self.peek() {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token)
            }
            found => {
                let expected = expected
                    .symbol()
                    .map(String::from)
                    .unwrap_or_else(|| expected.to_string());

                Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected,
                        found: found
                            .map(|token| token.value.clone())
                            .unwrap_or_else(|| String::from(END_OF_INPUT)),
                    },
                    found.map(|token| token.position),
                ))
            }
        }
    }

    /// Checks if there are tokens left to consume.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Enters one level of parentheses, failing past `MAX_NESTING_DEPTH`.
    ///
    /// `position` is where the opening parenthesis sits.
    pub fn enter_group(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                Some(position),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Source position of the next token, if any.
    pub fn get_position(&self) -> Option<Position> {
        self.peek().map(|token| token.position)
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    pub tree: Expr,
    pub steps: Vec<Step>,
    pub rules: BTreeSet<Production>,
}

impl ParseOutput {
    pub fn step_strings(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.to_string()).collect()
    }

    pub fn rule_strings(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.to_string()).collect()
    }
}

/// Parses a token sequence into an expression tree plus its derivation.
///
/// The whole token sequence must form one expression; anything left over
/// after it is reported as `TrailingTokens`. The first error aborts the
/// parse and no partial tree is returned.
pub fn parse(tokens: &[Token]) -> Result<ParseOutput, Error> {
    debug!(tokens = tokens.len(), "parsing");

    let mut parser = Parser::new(tokens);
    let mut trace = Trace::new();

    let tree = parse_expression(&mut parser, &mut trace)?;

    if let Some(token) = parser.peek() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: token.value.clone(),
            },
            Some(token.position),
        ));
    }

    debug!(
        steps = trace.steps.len(),
        rules = trace.rules.len(),
        nodes = tree.node_count(),
        "parsed expression"
    );

    Ok(ParseOutput {
        tree,
        steps: trace.steps,
        rules: trace.rules,
    })
}
