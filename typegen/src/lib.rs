//! shapec type resolution engine.
//!
//! Resolves the declaration graph built by `shapec-ast` into a shared,
//! inheritance-aware object model. Each node shape becomes one cached
//! [`ObjectType`]; each property shape becomes one [`Property`] whose
//! [`Type`] is fully resolved, with literal datatypes specialized into
//! native value types.
//!
//! # Pipeline
//!
//! ```no_run
//! use shapec_shapes::{DecodeOptions, ShapesGraph};
//! use shapec_typegen::{serializer, TypeFactory};
//! # fn run(graph: &sophia_inmem::graph::LightGraph) -> Result<(), Box<dyn std::error::Error>> {
//! let shapes = ShapesGraph::from_graph(graph, &DecodeOptions::default())?;
//! let ast = shapec_ast::build(&shapes)?;
//! let mut factory = TypeFactory::new(&ast);
//! let object_types = factory.object_types()?;
//! println!("{}", serializer::to_json(&object_types));
//! # Ok(())
//! # }
//! ```
//!
//! Each object type's properties start with whichever synthesized
//! properties it declares (`$identifierPrefix`, `$identifier`, `$type`, in
//! that order), followed by its declared properties sorted by `sh:order`
//! and then by name.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod factory;
pub mod literal;
pub mod mapping;
pub mod object_type;
pub mod property;
pub mod serializer;
pub mod types;

pub use error::{Result, TypeError};
pub use factory::TypeFactory;
pub use object_type::ObjectType;
pub use property::{Property, PropertyKind, ShapeProperty};
pub use types::{GenericLiteralType, LiteralType, Number, NumberKind, NumberType, Type};
