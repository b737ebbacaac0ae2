//! Turtle shapes graphs used by the unit tests.

use shapec_shapes::{DecodeOptions, Identifier, ShapesGraph};
use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;

use crate::model::AstGraph;

pub fn ex(local: &str) -> Identifier {
    Identifier::iri(format!("http://example.com/{local}"))
}

pub fn shapes(turtle: &str) -> ShapesGraph {
    let graph: LightGraph = sophia_turtle::parser::turtle::parse_str(turtle)
        .collect_triples()
        .expect("fixture is valid Turtle");
    ShapesGraph::from_graph(&graph, &DecodeOptions::default()).expect("fixture decodes")
}

pub fn build(turtle: &str) -> AstGraph {
    crate::build(&shapes(turtle)).expect("fixture builds")
}

/// An abstract agent with person, organization, and employee subtypes.
pub const AGENTS: &str = r#"
@prefix ex:     <http://example.com/> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh:     <http://www.w3.org/ns/shacl#> .
@prefix shapec: <http://purl.org/shapec/ontology#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .

ex:AgentShape
    a               sh:NodeShape ;
    shapec:abstract true ;
    sh:property     ex:AgentShape-name .

ex:AgentShape-name
    sh:path     ex:name ;
    sh:datatype xsd:string ;
    sh:minCount 1 ;
    sh:maxCount 1 .

ex:PersonShape
    a               sh:NodeShape ;
    rdfs:subClassOf ex:AgentShape ;
    sh:nodeKind     sh:IRI ;
    sh:property     ex:PersonShape-knows, ex:PersonShape-nickname, ex:PersonShape-friends,
                    ex:PersonShape-contact, ex:PersonShape-best .

ex:PersonShape-knows
    sh:path           ex:knows ;
    sh:class          ex:PersonShape ;
    sh:maxCount       1 ;
    shapec:visibility shapec:protected .

ex:PersonShape-nickname
    sh:path        ex:nickname ;
    sh:datatype    xsd:string ;
    shapec:name    "alias" ;
    shapec:mutable true .

ex:PersonShape-friends
    sh:path           ex:friend ;
    sh:node           ex:PersonShape ;
    sh:minCount       1 ;
    shapec:collection shapec:List .

ex:PersonShape-contact
    sh:path     ex:contact ;
    sh:or       ( ex:PersonShape ex:OrganizationShape ) ;
    sh:minCount 1 ;
    sh:maxCount 1 .

ex:PersonShape-best
    sh:path     ex:bestFriend ;
    sh:name     "best friend" ;
    sh:class    ex:PersonShape ;
    sh:maxCount 1 .

ex:OrganizationShape
    a               sh:NodeShape ;
    rdfs:subClassOf ex:AgentShape, ex:SomethingElse ;
    sh:property     ex:Org-homepage, ex:Org-tag, ex:Org-members, ex:Org-anything, ex:Org-located .

ex:Org-homepage
    sh:path     ex:homepage ;
    sh:nodeKind sh:IRI ;
    sh:maxCount 1 .

ex:Org-tag
    sh:path     ex:tag ;
    sh:or       ( [ sh:datatype xsd:string ] [ sh:datatype xsd:integer ] ) ;
    sh:maxCount 1 .

ex:Org-members
    sh:path ex:member ;
    sh:and  ( ex:PersonShape ex:AgentShape ) .

ex:Org-anything
    sh:path ex:anything .

ex:Org-located
    sh:path     ex:located ;
    sh:class    ex:Place ;
    sh:maxCount 1 .

ex:EmployeeShape
    a                          sh:NodeShape ;
    rdfs:subClassOf            ex:PersonShape ;
    shapec:name                "StaffMember" ;
    shapec:discriminatorValue  "staff" .
"#;

/// Two node shapes that subclass each other.
pub const CYCLE: &str = r#"
@prefix ex:   <http://example.com/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh:   <http://www.w3.org/ns/shacl#> .

ex:AShape a sh:NodeShape ; rdfs:subClassOf ex:BShape .
ex:BShape a sh:NodeShape ; rdfs:subClassOf ex:AShape .
"#;

/// A node shape whose instances would have to be literals.
pub const LITERAL_NODE_SHAPE: &str = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .

ex:ValueShape a sh:NodeShape ; sh:nodeKind sh:Literal .
"#;

/// Two concrete animals whose node shapes both map to the name `Cat`.
pub const CLASHING_NAMES: &str = r#"
@prefix ex:     <http://example.com/> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh:     <http://www.w3.org/ns/shacl#> .
@prefix shapec: <http://purl.org/shapec/ontology#> .

ex:Animal a sh:NodeShape ; shapec:abstract true .
ex:Cat a sh:NodeShape ; rdfs:subClassOf ex:Animal .
ex:CatShape a sh:NodeShape ; rdfs:subClassOf ex:Animal .
"#;

/// Two concrete animals that declare the same discriminator value.
pub const CLASHING_DISCRIMINATORS: &str = r#"
@prefix ex:     <http://example.com/> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh:     <http://www.w3.org/ns/shacl#> .
@prefix shapec: <http://purl.org/shapec/ontology#> .

ex:Animal a sh:NodeShape ; shapec:abstract true .
ex:Cat a sh:NodeShape ; rdfs:subClassOf ex:Animal .
ex:Lynx a sh:NodeShape ; rdfs:subClassOf ex:Animal ; shapec:discriminatorValue "Cat" .
ex:Dog a sh:NodeShape ; shapec:discriminatorValue "Cat" .
"#;

/// Two property shapes whose paths share a local name.
pub const CLASHING_PROPERTIES: &str = r#"
@prefix ex:  <http://example.com/> .
@prefix ex1: <http://example.com/one/> .
@prefix ex2: <http://example.com/two/> .
@prefix sh:  <http://www.w3.org/ns/shacl#> .

ex:Thing a sh:NodeShape ; sh:property ex:Thing-name1, ex:Thing-name2 .
ex:Thing-name1 sh:path ex1:name .
ex:Thing-name2 sh:path ex2:name .
"#;
