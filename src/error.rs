// Error types for keycode registry, codec and loaders

use crate::protocol::Protocol;
use thiserror::Error;

/// Failure while building a registry generation or resolving text.
#[derive(Debug, Error)]
pub enum KeycodeError {
    #[error("keycode {id} has no raw value in protocol {protocol}")]
    ResolutionMiss { id: String, protocol: Protocol },

    #[error("recorder alias \"{alias}\" already maps to {existing}, cannot assign to {id}")]
    DuplicateRecorderAlias {
        alias: String,
        existing: String,
        id: String,
    },

    #[error("masked keycode {id} must use the OUTER(kc) template form")]
    InvalidMaskTemplate { id: String },

    #[error("{what}: {requested} requested, protocol {protocol} supports at most {limit}")]
    CapabilityOutOfRange {
        what: &'static str,
        requested: usize,
        limit: usize,
        protocol: Protocol,
    },

    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

/// Failure of the fallback expression evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("syntax error in \"{text}\": {message}")]
    Syntax { text: String, message: String },

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{context}: value {value} out of range")]
    OutOfRange { context: String, value: i64 },
}

/// Errors that can occur when loading keyboard capabilities.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("validation error: {0}")]
    Validation(#[from] KeycodeError),
}
