use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error raised while checking or parsing an expression.
///
/// `position` is the 1-based offset of the offending token, or `None`
/// when the parser ran out of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyInput => "EmptyInput",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyInput => ErrorTip::Suggestion(String::from(
                "Please enter an arithmetic expression",
            )),
            ErrorImpl::ExpectedToken { expected, .. } if expected == ")" => {
                ErrorTip::Suggestion(String::from("Is a closing parenthesis missing?"))
            }
            ErrorImpl::ExpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Expected a number or `(` but found `{}`",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Is an operand missing after the last operator?",
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "The expression is complete before `{}`, is an operator missing?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses may be nested at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("empty expression")]
    EmptyInput,
    #[error("expected token '{expected}' but found '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected token: '{token}'")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected trailing token: '{token}'")]
    TrailingTokens { token: String },
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// How the parser describes the "no token" sentinel in messages.
pub const END_OF_INPUT: &str = "end of input";
