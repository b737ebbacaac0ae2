//! Decode errors for shape records.

use thiserror::Error;

use crate::model::{Identifier, Term};

/// Result type for shape decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// A shape resource could not be decoded into a record.
///
/// Every variant names the focus resource so callers can report exactly
/// which node of the shapes graph is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A predicate holds a value of the wrong shape (non-numeric count,
    /// literal where a node was expected, broken RDF list, ...).
    #[error("{focus}: invalid <{predicate}> value: {message}")]
    Value {
        /// The resource being decoded.
        focus: Identifier,
        /// Full IRI of the offending predicate.
        predicate: String,
        /// Human-readable description of the problem.
        message: String,
    },

    /// A closed-enumeration field holds a value outside its value set.
    #[error("{focus}: <{predicate}> value {actual} is not one of: {}", .expected.join(", "))]
    MistypedValue {
        /// The resource being decoded.
        focus: Identifier,
        /// Full IRI of the offending predicate.
        predicate: String,
        /// The value actually found.
        actual: Term,
        /// Full IRIs of the accepted values.
        expected: Vec<&'static str>,
    },

    /// The resource is not an instance of the expected shape class.
    #[error("{focus} is not an instance of <{expected}>")]
    UnexpectedClass {
        /// The resource being decoded.
        focus: Identifier,
        /// Full IRI of the expected class.
        expected: &'static str,
    },

    /// The underlying graph reported an error while being read.
    #[error("graph access failed: {0}")]
    Graph(String),
}

impl DecodeError {
    /// Builds a [`DecodeError::Value`].
    pub fn value(
        focus: &Identifier,
        predicate: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Value {
            focus: focus.clone(),
            predicate: predicate.to_owned(),
            message: message.into(),
        }
    }

    /// Returns the focus resource this error refers to, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&Identifier> {
        match self {
            Self::Value { focus, .. }
            | Self::MistypedValue { focus, .. }
            | Self::UnexpectedClass { focus, .. } => Some(focus),
            Self::Graph(_) => None,
        }
    }

    /// Returns the offending predicate, if the error is tied to one.
    #[must_use]
    pub fn predicate(&self) -> Option<&str> {
        match self {
            Self::Value { predicate, .. } | Self::MistypedValue { predicate, .. } => {
                Some(predicate)
            }
            Self::UnexpectedClass { .. } => Some(crate::model::iris::RDF_TYPE),
            Self::Graph(_) => None,
        }
    }
}
