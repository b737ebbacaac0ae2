//! shapec client library.
//!
//! Glue shared by the `shapec` binary: configuration loading, logging setup,
//! and the Turtle → JSON compilation pipeline.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;

use anyhow::{Context, Result};
use serde_json::Value;
use shapec_shapes::{DecodeOptions, ShapesGraph};
use shapec_typegen::{serializer, TypeFactory};
use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use config::Config;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Compiles a Turtle shapes graph into the JSON object model.
///
/// # Errors
///
/// Returns an error if the Turtle does not parse, a shape fails to decode,
/// the declaration graph cannot be built, or a type cannot be resolved.
pub fn compile(turtle: &str, options: &DecodeOptions) -> Result<Value> {
    let graph: LightGraph = sophia_turtle::parser::turtle::parse_str(turtle)
        .collect_triples()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to parse Turtle")?;
    let shapes = ShapesGraph::from_graph(&graph, options).context("Failed to decode shapes")?;
    let ast = shapec_ast::build(&shapes).context("Failed to build declarations")?;
    let mut factory = TypeFactory::new(&ast);
    let object_types = factory
        .object_types()
        .context("Failed to resolve object types")?;
    info!(
        node_shapes = shapes.node_shapes().count(),
        object_types = object_types.len(),
        "compiled shapes graph"
    );
    Ok(serializer::to_json(&object_types))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SHAPES: &str = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:NoteShape a sh:NodeShape ; sh:property ex:NoteShape-text .
ex:NoteShape-text sh:path ex:text ; sh:datatype xsd:string ; sh:minCount 1 ; sh:maxCount 1 .
"#;

    #[test]
    fn compiles_turtle_to_json() {
        let json = compile(SHAPES, &DecodeOptions::default()).unwrap();
        let note = &json["objectTypes"][0];
        assert_eq!(note["name"], "Note");
        assert_eq!(note["properties"][2]["name"], "text");
        assert_eq!(note["properties"][2]["type"]["kind"], "String");
    }

    #[test]
    fn bad_turtle_is_reported() {
        let err = compile("ex:broken", &DecodeOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse Turtle"));
    }

    #[test]
    fn bad_node_kind_is_reported() {
        let turtle = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .
ex:BadShape a sh:NodeShape ; sh:nodeKind sh:Nothing .
"#;
        let err = compile(turtle, &DecodeOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to decode shapes"));
    }
}
