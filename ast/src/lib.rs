//! shapec declaration graph.
//!
//! Turns a decoded [`ShapesGraph`](shapec_shapes::ShapesGraph) into an
//! [`AstGraph`]: one [`AstObjectType`] per node shape, with its inheritance
//! neighbourhood and its properties, each property typed by an [`AstType`]
//! derived from the property shape's constraints and cardinality.
//!
//! Cross-references stay unresolved identifiers here. The type engine in
//! `shapec-typegen` turns them into shared values.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod error;
pub mod model;
pub mod names;

#[cfg(test)]
#[allow(clippy::expect_used, missing_docs)]
mod fixtures;

pub use builder::build;
pub use error::{AstError, Result};
pub use model::{
    AstGraph, AstObjectType, AstProperty, AstType, IdentifierKind, LiteralDescription,
};
