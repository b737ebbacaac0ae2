//! Decodes a Turtle shapes graph and prints a summary of its records.
//!
//! Run with: `cargo run --example dump_shapes -p shapec-shapes -- shapes.ttl`

use std::error::Error;

use shapec_shapes::{DecodeOptions, ShapesGraph};
use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: dump_shapes <shapes.ttl>")?;
    let turtle = std::fs::read_to_string(&path)?;
    let graph: LightGraph = sophia_turtle::parser::turtle::parse_str(&turtle).collect_triples()?;
    let shapes = ShapesGraph::from_graph(&graph, &DecodeOptions::default())?;

    println!("Shapes graph {path}");
    println!("  Node shapes:     {}", shapes.node_shapes().count());
    println!("  Property shapes: {}", shapes.property_shapes().count());
    println!("  Property groups: {}", shapes.property_groups().count());
    println!();

    for shape in shapes.node_shapes() {
        println!(
            "  {:60} {:>2} properties  subclass of {}",
            shape.identifier.to_string(),
            shape.properties.len(),
            shape.subclass_of.len(),
        );
        for property in shape
            .properties
            .iter()
            .filter_map(|id| shapes.property_shape(id))
        {
            println!("      {:30} {}", property.path.predicate(), property.identifier);
        }
    }
    Ok(())
}
