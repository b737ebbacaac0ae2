//! Turtle shapes graphs used by the unit tests.

use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;

/// Parses a Turtle fixture into an in-memory graph.
pub fn parse(turtle: &str) -> LightGraph {
    sophia_turtle::parser::turtle::parse_str(turtle)
        .collect_triples()
        .expect("fixture is valid Turtle")
}

/// A person/address schema covering most constraint fields.
pub const PERSON: &str = r#"
@prefix ex:     <http://example.com/> .
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix sh:     <http://www.w3.org/ns/shacl#> .
@prefix shapec: <http://purl.org/shapec/ontology#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .

ex:PersonShape
    a                 sh:NodeShape ;
    rdfs:label        "Person"@en, "Personne"@fr ;
    rdfs:comment      "A human being."@en ;
    sh:closed         true ;
    sh:ignoredProperties ( rdf:type ) ;
    sh:nodeKind       sh:IRI ;
    shapec:identifierMintingStrategy shapec:uuidv4 ;
    sh:property       ex:PersonShape-name, ex:PersonShape-age, ex:PersonShape-knows .

ex:PersonShape-name
    sh:path           ex:name ;
    sh:name           "name"@en ;
    sh:datatype       xsd:string ;
    sh:minCount       1 ;
    sh:maxCount       1 ;
    sh:minLength      1 ;
    sh:order          1 ;
    sh:group          ex:Identity .

ex:PersonShape-age
    sh:path           ex:age ;
    sh:datatype       xsd:integer ;
    sh:maxCount       1 ;
    sh:minInclusive   0 ;
    sh:defaultValue   18 ;
    sh:in             ( 18 21 65 ) ;
    sh:order          2 .

ex:PersonShape-knows
    sh:path           [ sh:inversePath ex:knownBy ] ;
    sh:node           ex:PersonShape ;
    sh:or             ( ex:PersonShape ex:RobotShape ) ;
    sh:or             ( ex:RobotShape ) ;
    shapec:visibility shapec:protected ;
    shapec:collection shapec:List .

ex:RobotShape
    a                 sh:NodeShape ;
    rdfs:subClassOf   ex:PersonShape ;
    shapec:abstract   false .

ex:Identity
    a                 sh:PropertyGroup ;
    rdfs:label        "Identity"@en ;
    sh:order          0 .
"#;

/// A node shape whose `sh:nodeKind` is outside the six recognized values.
pub const BAD_NODE_KIND: &str = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .

ex:BadShape
    a           sh:NodeShape ;
    sh:nodeKind sh:Thing .
"#;

/// A property shape with a non-numeric `sh:maxCount`.
pub const BAD_COUNT: &str = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .

ex:Shape a sh:NodeShape ; sh:property ex:Shape-p .
ex:Shape-p sh:path ex:p ; sh:maxCount "many" .
"#;

/// An `sh:in` list whose last cell lacks `rdf:rest`.
pub const BROKEN_LIST: &str = r#"
@prefix ex:  <http://example.com/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix sh:  <http://www.w3.org/ns/shacl#> .

ex:Shape a sh:NodeShape ; sh:in ex:cell .
ex:cell rdf:first "a" .
"#;

/// A resource that is typed as nothing shapes-related.
pub const NOT_A_SHAPE: &str = r#"
@prefix ex:  <http://example.com/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

ex:Thing a rdfs:Class .
"#;

/// Property shapes whose `sh:or` members are untyped shapes.
pub const MEMBERS: &str = r#"
@prefix ex:  <http://example.com/> .
@prefix sh:  <http://www.w3.org/ns/shacl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:Thing a sh:NodeShape ; sh:property ex:Thing-value .
ex:Thing-value sh:path ex:value ; sh:or ( ex:Text ex:Count ex:Thing ) .
ex:Text sh:datatype xsd:string .
ex:Count sh:datatype xsd:integer ; sh:not ex:Nested .
ex:Nested sh:nodeKind sh:Literal .
"#;

/// A typed property shape whose `sh:nodeKind` is outside the recognized set.
pub const TYPED_BAD_PROPERTY: &str = r#"
@prefix ex: <http://example.com/> .
@prefix sh: <http://www.w3.org/ns/shacl#> .

ex:P a sh:PropertyShape ; sh:path ex:p ; sh:nodeKind sh:Thing .
"#;
