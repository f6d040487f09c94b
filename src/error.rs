use thiserror::Error;

use crate::command::SvgChar;

/// Top-level error type for the pathmorph geometry core.
#[derive(Debug, Error)]
pub enum PathMorphError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors related to calculator operations.
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("cannot convert a {from} segment into {to}")]
    UnsupportedConversion { from: SvgChar, to: SvgChar },

    #[error("cannot materialize a segment as a {0} command")]
    InvalidCommandKind(SvgChar),

    #[error("{0} is not a valid control-point count for a segment")]
    InvalidPointCount(usize),

    #[error("degenerate segment: {0}")]
    Degenerate(String),
}

/// Errors related to building path commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("a {svg_char} command stores {expected} points, got {actual}")]
    PointCountMismatch {
        svg_char: SvgChar,
        expected: usize,
        actual: usize,
    },

    #[error("arc commands are not supported")]
    UnsupportedArc,
}

/// Convenience type alias for results using [`PathMorphError`].
pub type Result<T> = std::result::Result<T, PathMorphError>;
