//! Utility macros for the tokenizer and parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_STEP!` - Records a derivation step and the production it belongs to

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The 1-based source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position(1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Records a step in a `Trace` together with the production family it
/// instantiates.
///
/// # Example
///
/// ```ignore
/// MK_STEP!(trace, Step::TermToFactor, Production::Term);
/// ```
#[macro_export]
macro_rules! MK_STEP {
    ($trace:expr, $step:expr, $production:expr) => {
        $trace.record($step, $production)
    };
}
