//! The three grammar levels, one function each:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := NUMBER | '(' expression ')'
//! ```
//!
//! The repetition loops build left-leaning trees, so same-precedence
//! operators associate to the left.

use crate::{
    ast::ast::{BinaryOp, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    MK_STEP,
};

use super::{
    parser::Parser,
    trace::{Production, Step, Trace},
};

pub fn parse_expression(parser: &mut Parser, trace: &mut Trace) -> Result<Expr, Error> {
    MK_STEP!(trace, Step::ExpressionToTerm, Production::Expression);
    let mut node = parse_term(parser, trace)?;

    while let Some((kind, op)) = additive_op(parser.peek_kind()) {
        parser.consume(kind)?;
        MK_STEP!(trace, Step::ExpressionOp(op), Production::Expression);
        let right = parse_term(parser, trace)?;
        node = Expr::binary(op, node, right);
    }

    Ok(node)
}

pub fn parse_term(parser: &mut Parser, trace: &mut Trace) -> Result<Expr, Error> {
    MK_STEP!(trace, Step::TermToFactor, Production::Term);
    let mut node = parse_factor(parser, trace)?;

    while let Some((kind, op)) = multiplicative_op(parser.peek_kind()) {
        parser.consume(kind)?;
        MK_STEP!(trace, Step::TermOp(op), Production::Term);
        let right = parse_factor(parser, trace)?;
        node = Expr::binary(op, node, right);
    }

    Ok(node)
}

pub fn parse_factor(parser: &mut Parser, trace: &mut Trace) -> Result<Expr, Error> {
    match parser.peek_kind() {
        Some(TokenKind::Number) => {
            let value = parser.consume(TokenKind::Number)?.value.clone();
            MK_STEP!(trace, Step::FactorNumber(value.clone()), Production::Factor);
            Ok(Expr::Number(value))
        }
        Some(TokenKind::LParen) => {
            let open = parser.consume(TokenKind::LParen)?;
            parser.enter_group(open.position)?;
            MK_STEP!(trace, Step::FactorParen, Production::FactorParen);
            let inner = parse_expression(parser, trace)?;
            parser.consume(TokenKind::RParen)?;
            parser.exit_group();
            // grouping only, no node for the parentheses
            Ok(inner)
        }
        Some(_) => {
            let token = parser.peek().map(|t| t.value.clone()).unwrap_or_default();
            Err(Error::new(
                ErrorImpl::UnexpectedToken { token },
                parser.get_position(),
            ))
        }
        None => Err(Error::new(ErrorImpl::UnexpectedEndOfInput, None)),
    }
}

fn additive_op(kind: Option<TokenKind>) -> Option<(TokenKind, BinaryOp)> {
    match kind? {
        kind @ (TokenKind::Plus | TokenKind::Minus) => Some((kind, BinaryOp::from_kind(kind)?)),
        _ => None,
    }
}

fn multiplicative_op(kind: Option<TokenKind>) -> Option<(TokenKind, BinaryOp)> {
    match kind? {
        kind @ (TokenKind::Times | TokenKind::Divide) => Some((kind, BinaryOp::from_kind(kind)?)),
        _ => None,
    }
}
