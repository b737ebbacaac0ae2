//! SHACL shapes graphs decoded into typed Rust records.
//!
//! The `shapec-shapes` crate reads node shapes, property shapes, and property
//! groups out of any sophia [`Graph`](sophia_api::graph::Graph) and hands
//! them to the rest of the compiler as immutable, structurally comparable
//! records.
//!
//! # Entry Point
//!
//! ```no_run
//! use shapec_shapes::{DecodeOptions, ShapesGraph};
//! # fn run(graph: &sophia_inmem::graph::LightGraph) -> shapec_shapes::Result<()> {
//! let options = DecodeOptions {
//!     languages: vec!["en".to_owned()],
//!     ignore_rdf_type: false,
//! };
//! let shapes = ShapesGraph::from_graph(graph, &options)?;
//! for shape in shapes.node_shapes() {
//!     println!("{}", shape.identifier);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Failure model
//!
//! Decoding is strict about structure and closed enumerations
//! (`sh:nodeKind`, minting strategies) and lenient about absence: a missing
//! optional field is `None` or empty, never an error.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod decode;
pub mod error;
pub mod graph;
pub mod model;
pub mod shapes_graph;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod fixtures;

pub use decode::DecodeOptions;
pub use error::{DecodeError, Result};
pub use model::{
    CollectionKind, Constraints, Identifier, Literal, MintingStrategy, NodeKind, NodeShape,
    NodeShapeAnnotations, PropertyGroup, PropertyPath, PropertyShape, PropertyShapeAnnotations,
    Shape, Term, Visibility,
};
pub use shapes_graph::ShapesGraph;
