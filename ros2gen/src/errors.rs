//! Error types for interface definition parsing

use thiserror::Error;

/// Main error type for definition parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// A body line matched neither the constant nor the field grammar.
    #[error("syntax error at line {line}: could not parse {text:?} as a field or constant")]
    Syntax {
        /// 1-based line number within the parsed body
        line: usize,
        /// The offending raw line
        text: String,
    },

    /// A type token could not be resolved through the mapping table or as a
    /// composite reference.
    #[error("unknown type '{type_string}': {reason}")]
    UnknownType {
        /// The unresolvable type token
        type_string: String,
        /// Why resolution failed
        reason: String,
    },

    /// A bounded-string marker was applied to a type other than the builtin
    /// `string`.
    #[error("invalid boundary on '{type_string}': the only base type that supports an upper boundary is string")]
    BoundaryConflict {
        /// The type token carrying the marker
        type_string: String,
    },

    /// More `---` section separators were found than the entity expects.
    #[error("too many '---' section separators, expected at most {expected}")]
    SectionOverflow {
        /// The number of separators the entity allows
        expected: usize,
    },

    /// A nested error annotated with the line it occurred on.
    #[error("error on line {line}: {message}")]
    Line {
        /// 1-based line number within the parsed body
        line: usize,
        /// The underlying error text
        message: String,
    },

    /// Interface file could not be dispatched by extension.
    #[error("invalid interface file '{path}': {reason}")]
    InvalidInterfaceFile {
        /// The rejected path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// IO error while reading a definition file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Helper to create [`ParseError::UnknownType`] errors
#[must_use]
pub fn unknown_type(type_string: &str, reason: &str) -> ParseError {
    ParseError::UnknownType {
        type_string: type_string.to_string(),
        reason: reason.to_string(),
    }
}
