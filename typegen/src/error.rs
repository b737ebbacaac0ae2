//! Error types for type resolution.

use shapec_shapes::Identifier;
use thiserror::Error;

/// Result type for type resolution.
pub type Result<T> = std::result::Result<T, TypeError>;

/// Failures while resolving declarations into types.
///
/// Literal datatype problems are never errors: they degrade to a generic
/// literal type and are logged instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The declaration graph uses a type construct the engine does not
    /// support yet.
    #[error("{kind} types are not implemented")]
    NotImplemented {
        /// The AST type tag, e.g. `Intersection`.
        kind: &'static str,
    },
    /// A placeholder type survived declaration building. This is a bug in
    /// whatever produced the declaration graph.
    #[error("unresolved placeholder type")]
    UnresolvedPlaceholder,
    /// A reference names an object type the declaration graph lacks.
    #[error("no object type is declared for {identifier}")]
    UnknownObjectType {
        /// The dangling reference.
        identifier: Identifier,
    },
}
