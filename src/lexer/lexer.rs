use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(r"[0-9]+|[-+*/()]").expect("token pattern is valid");
}

/// Scans `source` into tokens, left to right.
///
/// Text that matches neither a run of ASCII digits nor one of `+ - * / ( )` is
/// skipped without producing a token. Positions are 1-based character
/// offsets into `source`. This never fails; an empty result is left for
/// the caller to reject.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    // find_iter reports byte offsets, positions are counted in characters
    let mut chars_before = 0usize;
    let mut last_byte = 0usize;

    for matched in TOKEN_PATTERN.find_iter(source) {
        chars_before += source[last_byte..matched.start()].chars().count();
        last_byte = matched.start();

        let value = matched.as_str();
        tokens.push(MK_TOKEN!(
            TokenKind::classify(value),
            value.to_string(),
            Position((chars_before + 1) as u32)
        ));
    }

    debug!(tokens = tokens.len(), chars = source.chars().count(), "tokenized input");
    tokens
}
