//! Error types for building the declaration graph.

use shapec_shapes::{Identifier, NodeKind};
use thiserror::Error;

/// Result type for AST building.
pub type Result<T> = std::result::Result<T, AstError>;

/// Errors raised while turning shape records into declarations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstError {
    /// A node shape lists a property shape that was never decoded.
    #[error("node shape {node_shape} references missing property shape {property}")]
    MissingPropertyShape {
        /// The referencing node shape.
        node_shape: Identifier,
        /// The missing property shape.
        property: Identifier,
    },
    /// A node shape's `sh:nodeKind` admits no identifiers.
    #[error("node shape {node_shape} has node kind {} which admits no IRI or blank node", .node_kind.iri())]
    LiteralNodeShape {
        /// The offending node shape.
        node_shape: Identifier,
        /// Its node kind.
        node_kind: NodeKind,
    },
    /// A node shape's `sh:in` lists a literal.
    #[error("node shape {node_shape} lists non-identifier {value} in sh:in")]
    LiteralInIdentifierSet {
        /// The offending node shape.
        node_shape: Identifier,
        /// The literal, rendered.
        value: String,
    },
    /// Two node shapes resolve to the same type name.
    #[error("node shapes {first} and {second} are both named {name}")]
    DuplicateTypeName {
        /// The shared name.
        name: String,
        /// The node shape that took the name first.
        first: Identifier,
        /// The node shape that collided with it.
        second: Identifier,
    },
    /// Two concrete types of one hierarchy share a discriminator value.
    #[error("node shapes {first} and {second} share discriminator value {value:?} under {root}")]
    DuplicateDiscriminator {
        /// The shared value.
        value: String,
        /// The type whose hierarchy contains both.
        root: Identifier,
        /// The type that took the value first.
        first: Identifier,
        /// The type that collided with it.
        second: Identifier,
    },
    /// Two properties of one node shape resolve to the same name.
    #[error("node shape {node_shape} declares {name} twice, via {first} and {second}")]
    DuplicatePropertyName {
        /// The declaring node shape.
        node_shape: Identifier,
        /// The shared name.
        name: String,
        /// The property shape that took the name first.
        first: Identifier,
        /// The property shape that collided with it.
        second: Identifier,
    },
}
