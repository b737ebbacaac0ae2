//! Core shape model types.
//!
//! These types represent a SHACL shapes graph as typed Rust data: RDF terms,
//! the three shape record kinds, and the closed enumerations their fields
//! decode into. Records are immutable once decoded and compare structurally.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node reference: an IRI or a blank node label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "termType", content = "value"))]
pub enum Identifier {
    /// A full IRI.
    Iri(String),
    /// A blank node label, without the `_:` prefix.
    BlankNode(String),
}

impl Identifier {
    /// Creates an IRI identifier.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates a blank node identifier.
    pub fn blank_node(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    /// Returns the IRI, or `None` for a blank node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::BlankNode(_) => None,
        }
    }

    /// Returns true if this is a blank node.
    #[must_use]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
        }
    }
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// The lexical form.
    pub lexical_form: String,
    /// Full IRI of the datatype (`rdf:langString` for language-tagged literals).
    pub datatype: String,
    /// Language tag, present only for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Literal {
    /// Creates a typed literal.
    pub fn typed(lexical_form: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical_form: impl Into<String>) -> Self {
        Self::typed(lexical_form, iris::XSD_STRING)
    }

    /// Creates a language-tagged literal.
    pub fn lang_string(lexical_form: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: iris::RDF_LANG_STRING.to_owned(),
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lexical_form)?;
        match &self.language {
            Some(language) => write!(f, "@{language}"),
            None if self.datatype == iris::XSD_STRING => Ok(()),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

/// Any value a shape constraint can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// An IRI or blank node.
    Identifier(Identifier),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Returns the identifier, or `None` for a literal.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(identifier) => Some(identifier),
            Self::Literal(_) => None,
        }
    }

    /// Returns the literal, or `None` for an identifier.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Identifier(_) => None,
            Self::Literal(literal) => Some(literal),
        }
    }

    /// Returns the IRI, or `None` for blank nodes and literals.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        self.as_identifier().and_then(Identifier::as_iri)
    }
}

impl From<Identifier> for Term {
    fn from(identifier: Identifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => identifier.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

/// `sh:nodeKind` values. A closed set: any other IRI is a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// `sh:BlankNode`.
    BlankNode,
    /// `sh:BlankNodeOrIRI`.
    BlankNodeOrIri,
    /// `sh:BlankNodeOrLiteral`.
    BlankNodeOrLiteral,
    /// `sh:IRI`.
    Iri,
    /// `sh:IRIOrLiteral`.
    IriOrLiteral,
    /// `sh:Literal`.
    Literal,
}

impl NodeKind {
    /// All six node kinds.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::BlankNode,
        NodeKind::BlankNodeOrIri,
        NodeKind::BlankNodeOrLiteral,
        NodeKind::Iri,
        NodeKind::IriOrLiteral,
        NodeKind::Literal,
    ];

    /// Returns the `sh:` IRI of this node kind.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            NodeKind::BlankNode => iris::SH_BLANK_NODE,
            NodeKind::BlankNodeOrIri => iris::SH_BLANK_NODE_OR_IRI,
            NodeKind::BlankNodeOrLiteral => iris::SH_BLANK_NODE_OR_LITERAL,
            NodeKind::Iri => iris::SH_IRI,
            NodeKind::IriOrLiteral => iris::SH_IRI_OR_LITERAL,
            NodeKind::Literal => iris::SH_LITERAL,
        }
    }

    /// Maps a `sh:` IRI back to its node kind. Returns `None` for any IRI
    /// outside the six recognized values.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            iris::SH_BLANK_NODE => Some(NodeKind::BlankNode),
            iris::SH_BLANK_NODE_OR_IRI => Some(NodeKind::BlankNodeOrIri),
            iris::SH_BLANK_NODE_OR_LITERAL => Some(NodeKind::BlankNodeOrLiteral),
            iris::SH_IRI => Some(NodeKind::Iri),
            iris::SH_IRI_OR_LITERAL => Some(NodeKind::IriOrLiteral),
            iris::SH_LITERAL => Some(NodeKind::Literal),
            _ => None,
        }
    }

    /// Returns true if values of this kind may be blank nodes.
    #[must_use]
    pub fn allows_blank_node(self) -> bool {
        matches!(
            self,
            NodeKind::BlankNode | NodeKind::BlankNodeOrIri | NodeKind::BlankNodeOrLiteral
        )
    }

    /// Returns true if values of this kind may be IRIs.
    #[must_use]
    pub fn allows_iri(self) -> bool {
        matches!(
            self,
            NodeKind::BlankNodeOrIri | NodeKind::Iri | NodeKind::IriOrLiteral
        )
    }

    /// Returns true if values of this kind may be literals.
    #[must_use]
    pub fn allows_literal(self) -> bool {
        matches!(
            self,
            NodeKind::BlankNodeOrLiteral | NodeKind::IriOrLiteral | NodeKind::Literal
        )
    }
}

/// How new identifiers are minted for instances of an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MintingStrategy {
    /// Anonymous blank node.
    BlankNode,
    /// IRI derived from a SHA-256 hash of the instance's content.
    Sha256,
    /// IRI derived from a random UUID v4.
    Uuidv4,
}

impl MintingStrategy {
    /// All minting strategies.
    pub const ALL: [MintingStrategy; 3] = [
        MintingStrategy::BlankNode,
        MintingStrategy::Sha256,
        MintingStrategy::Uuidv4,
    ];

    /// Returns the annotation IRI of this strategy.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            MintingStrategy::BlankNode => iris::SHAPEC_BLANK_NODE,
            MintingStrategy::Sha256 => iris::SHAPEC_SHA256,
            MintingStrategy::Uuidv4 => iris::SHAPEC_UUIDV4,
        }
    }

    /// Maps an annotation IRI back to its strategy.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            iris::SHAPEC_BLANK_NODE => Some(MintingStrategy::BlankNode),
            iris::SHAPEC_SHA256 => Some(MintingStrategy::Sha256),
            iris::SHAPEC_UUIDV4 => Some(MintingStrategy::Uuidv4),
            _ => None,
        }
    }

    /// Returns the string used in serialized models (`blankNode`, `sha256`, `uuidv4`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MintingStrategy::BlankNode => "blankNode",
            MintingStrategy::Sha256 => "sha256",
            MintingStrategy::Uuidv4 => "uuidv4",
        }
    }

    /// Returns true if minted identifiers carry a human-readable prefix.
    #[must_use]
    pub fn uses_prefix(self) -> bool {
        matches!(self, MintingStrategy::Sha256 | MintingStrategy::Uuidv4)
    }
}

/// Accessor visibility of a generated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Visibility {
    /// Visible only to the declaring type.
    Private,
    /// Visible to the declaring type and its descendants.
    Protected,
    /// Visible everywhere.
    #[default]
    Public,
}

impl Visibility {
    /// Maps an annotation IRI to its visibility.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            iris::SHAPEC_PRIVATE => Some(Visibility::Private),
            iris::SHAPEC_PROTECTED => Some(Visibility::Protected),
            iris::SHAPEC_PUBLIC => Some(Visibility::Public),
            _ => None,
        }
    }

    /// Returns the string used in serialized models.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Public => "public",
        }
    }
}

/// Collection representation requested for a multi-valued property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollectionKind {
    /// Unordered set (the default).
    Set,
    /// Ordered list, written as an `rdf:List`.
    List,
}

impl CollectionKind {
    /// Maps an annotation IRI to its collection kind.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            iris::SHAPEC_SET => Some(CollectionKind::Set),
            iris::SHAPEC_LIST => Some(CollectionKind::List),
            _ => None,
        }
    }
}

/// A SHACL property path. Only predicate and inverse-predicate paths are
/// supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyPath {
    /// A direct predicate.
    Predicate(String),
    /// `[ sh:inversePath <p> ]`.
    Inverse(String),
}

impl PropertyPath {
    /// Returns the predicate IRI, regardless of direction.
    #[must_use]
    pub fn predicate(&self) -> &str {
        match self {
            Self::Predicate(iri) | Self::Inverse(iri) => iri,
        }
    }
}

/// Constraint fields shared by node shapes and property shapes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    /// `sh:and`: one inner list per `sh:and` value.
    pub and: Vec<Vec<Identifier>>,
    /// `sh:class`.
    pub classes: Vec<Identifier>,
    /// `sh:datatype`.
    pub datatype: Option<String>,
    /// `sh:hasValue`.
    pub has_values: Vec<Term>,
    /// `sh:in` members, in list order.
    pub in_: Vec<Term>,
    /// `sh:languageIn` tags.
    pub language_in: Vec<String>,
    /// `sh:maxCount`.
    pub max_count: Option<u64>,
    /// `sh:maxExclusive`.
    pub max_exclusive: Option<Literal>,
    /// `sh:maxInclusive`.
    pub max_inclusive: Option<Literal>,
    /// `sh:maxLength`.
    pub max_length: Option<u64>,
    /// `sh:minCount`.
    pub min_count: Option<u64>,
    /// `sh:minExclusive`.
    pub min_exclusive: Option<Literal>,
    /// `sh:minInclusive`.
    pub min_inclusive: Option<Literal>,
    /// `sh:minLength`.
    pub min_length: Option<u64>,
    /// `sh:nodeKind`.
    pub node_kind: Option<NodeKind>,
    /// `sh:node`.
    pub nodes: Vec<Identifier>,
    /// `sh:not`.
    pub not: Vec<Identifier>,
    /// `sh:or`: one inner list per `sh:or` value.
    pub or: Vec<Vec<Identifier>>,
    /// `sh:pattern`.
    pub pattern: Option<String>,
    /// `sh:xone`: one inner list per `sh:xone` value.
    pub xone: Vec<Vec<Identifier>>,
}

impl Constraints {
    /// Every shape named by `sh:and`, `sh:or`, `sh:xone`, `sh:not` or
    /// `sh:node`, in that order. May repeat.
    pub fn shape_references(&self) -> impl Iterator<Item = &Identifier> {
        self.and
            .iter()
            .chain(&self.or)
            .chain(&self.xone)
            .flatten()
            .chain(&self.not)
            .chain(&self.nodes)
    }
}

/// Compiler annotations on a node shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeShapeAnnotations {
    /// `shapec:abstract`.
    pub abstract_: Option<bool>,
    /// `shapec:discriminatorValue`.
    pub discriminator_value: Option<String>,
    /// `shapec:identifierMintingStrategy`.
    pub identifier_minting_strategy: Option<MintingStrategy>,
    /// `shapec:name`.
    pub name: Option<String>,
}

/// A `sh:NodeShape`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeShape {
    /// The shape resource.
    pub identifier: Identifier,
    /// `rdfs:label`, language-filtered.
    pub label: Option<String>,
    /// `rdfs:comment`, language-filtered.
    pub comment: Option<String>,
    /// Constraint fields.
    pub constraints: Constraints,
    /// `sh:closed`.
    pub closed: Option<bool>,
    /// `sh:ignoredProperties`.
    pub ignored_properties: Vec<Identifier>,
    /// `sh:property` references.
    pub properties: Vec<Identifier>,
    /// `rdfs:subClassOf`.
    pub subclass_of: Vec<Identifier>,
    /// Compiler annotations.
    pub annotations: NodeShapeAnnotations,
}

/// Compiler annotations on a property shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyShapeAnnotations {
    /// `shapec:collection`.
    pub collection: Option<CollectionKind>,
    /// `shapec:mutable`.
    pub mutable: Option<bool>,
    /// `shapec:name`.
    pub name: Option<String>,
    /// `shapec:visibility`.
    pub visibility: Option<Visibility>,
}

/// A `sh:PropertyShape`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyShape {
    /// The shape resource.
    pub identifier: Identifier,
    /// `rdfs:label`, language-filtered.
    pub label: Option<String>,
    /// `rdfs:comment`, language-filtered.
    pub comment: Option<String>,
    /// Constraint fields.
    pub constraints: Constraints,
    /// `sh:path`.
    pub path: PropertyPath,
    /// `sh:defaultValue`.
    pub default_value: Option<Term>,
    /// `sh:description`, language-filtered.
    pub description: Option<String>,
    /// `sh:group`.
    pub group: Option<Identifier>,
    /// `sh:name`, language-filtered.
    pub name: Option<String>,
    /// `sh:order`.
    pub order: Option<f64>,
    /// `sh:uniqueLang`.
    pub unique_lang: Option<bool>,
    /// Compiler annotations.
    pub annotations: PropertyShapeAnnotations,
}

/// A `sh:PropertyGroup`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyGroup {
    /// The group resource.
    pub identifier: Identifier,
    /// `rdfs:label`, language-filtered.
    pub label: Option<String>,
    /// `rdfs:comment`, language-filtered.
    pub comment: Option<String>,
    /// `sh:order`.
    pub order: Option<f64>,
}

/// Any decoded shape record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A node shape.
    NodeShape(NodeShape),
    /// A property shape.
    PropertyShape(PropertyShape),
    /// A property group.
    PropertyGroup(PropertyGroup),
}

impl Shape {
    /// Returns the identifier of the underlying record.
    #[must_use]
    pub fn identifier(&self) -> &Identifier {
        match self {
            Shape::NodeShape(shape) => &shape.identifier,
            Shape::PropertyShape(shape) => &shape.identifier,
            Shape::PropertyGroup(group) => &group.identifier,
        }
    }
}

/// IRI constants used by the decoder.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";
    /// Compiler annotation namespace.
    pub const SHAPEC: &str = "http://purl.org/shapec/ontology#";

    // RDF / RDFS
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdf:HTML`.
    pub const RDF_HTML: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#HTML";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    // SHACL classes
    /// `sh:NodeShape`.
    pub const SH_NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    /// `sh:PropertyShape`.
    pub const SH_PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";
    /// `sh:PropertyGroup`.
    pub const SH_PROPERTY_GROUP: &str = "http://www.w3.org/ns/shacl#PropertyGroup";

    // SHACL predicates
    /// `sh:and`.
    pub const SH_AND: &str = "http://www.w3.org/ns/shacl#and";
    /// `sh:class`.
    pub const SH_CLASS: &str = "http://www.w3.org/ns/shacl#class";
    /// `sh:closed`.
    pub const SH_CLOSED: &str = "http://www.w3.org/ns/shacl#closed";
    /// `sh:datatype`.
    pub const SH_DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    /// `sh:defaultValue`.
    pub const SH_DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";
    /// `sh:description`.
    pub const SH_DESCRIPTION: &str = "http://www.w3.org/ns/shacl#description";
    /// `sh:group`.
    pub const SH_GROUP: &str = "http://www.w3.org/ns/shacl#group";
    /// `sh:hasValue`.
    pub const SH_HAS_VALUE: &str = "http://www.w3.org/ns/shacl#hasValue";
    /// `sh:ignoredProperties`.
    pub const SH_IGNORED_PROPERTIES: &str = "http://www.w3.org/ns/shacl#ignoredProperties";
    /// `sh:in`.
    pub const SH_IN: &str = "http://www.w3.org/ns/shacl#in";
    /// `sh:inversePath`.
    pub const SH_INVERSE_PATH: &str = "http://www.w3.org/ns/shacl#inversePath";
    /// `sh:languageIn`.
    pub const SH_LANGUAGE_IN: &str = "http://www.w3.org/ns/shacl#languageIn";
    /// `sh:maxCount`.
    pub const SH_MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
    /// `sh:maxExclusive`.
    pub const SH_MAX_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxExclusive";
    /// `sh:maxInclusive`.
    pub const SH_MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
    /// `sh:maxLength`.
    pub const SH_MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";
    /// `sh:minCount`.
    pub const SH_MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    /// `sh:minExclusive`.
    pub const SH_MIN_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#minExclusive";
    /// `sh:minInclusive`.
    pub const SH_MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
    /// `sh:minLength`.
    pub const SH_MIN_LENGTH: &str = "http://www.w3.org/ns/shacl#minLength";
    /// `sh:name`.
    pub const SH_NAME: &str = "http://www.w3.org/ns/shacl#name";
    /// `sh:node`.
    pub const SH_NODE: &str = "http://www.w3.org/ns/shacl#node";
    /// `sh:nodeKind`.
    pub const SH_NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
    /// `sh:not`.
    pub const SH_NOT: &str = "http://www.w3.org/ns/shacl#not";
    /// `sh:or`.
    pub const SH_OR: &str = "http://www.w3.org/ns/shacl#or";
    /// `sh:order`.
    pub const SH_ORDER: &str = "http://www.w3.org/ns/shacl#order";
    /// `sh:path`.
    pub const SH_PATH: &str = "http://www.w3.org/ns/shacl#path";
    /// `sh:pattern`.
    pub const SH_PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
    /// `sh:property`.
    pub const SH_PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    /// `sh:uniqueLang`.
    pub const SH_UNIQUE_LANG: &str = "http://www.w3.org/ns/shacl#uniqueLang";
    /// `sh:xone`.
    pub const SH_XONE: &str = "http://www.w3.org/ns/shacl#xone";

    // SHACL node kinds
    /// `sh:BlankNode`.
    pub const SH_BLANK_NODE: &str = "http://www.w3.org/ns/shacl#BlankNode";
    /// `sh:BlankNodeOrIRI`.
    pub const SH_BLANK_NODE_OR_IRI: &str = "http://www.w3.org/ns/shacl#BlankNodeOrIRI";
    /// `sh:BlankNodeOrLiteral`.
    pub const SH_BLANK_NODE_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#BlankNodeOrLiteral";
    /// `sh:IRI`.
    pub const SH_IRI: &str = "http://www.w3.org/ns/shacl#IRI";
    /// `sh:IRIOrLiteral`.
    pub const SH_IRI_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#IRIOrLiteral";
    /// `sh:Literal`.
    pub const SH_LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";

    // Compiler annotations
    /// `shapec:abstract`.
    pub const SHAPEC_ABSTRACT: &str = "http://purl.org/shapec/ontology#abstract";
    /// `shapec:collection`.
    pub const SHAPEC_COLLECTION: &str = "http://purl.org/shapec/ontology#collection";
    /// `shapec:discriminatorValue`.
    pub const SHAPEC_DISCRIMINATOR_VALUE: &str =
        "http://purl.org/shapec/ontology#discriminatorValue";
    /// `shapec:identifierMintingStrategy`.
    pub const SHAPEC_IDENTIFIER_MINTING_STRATEGY: &str =
        "http://purl.org/shapec/ontology#identifierMintingStrategy";
    /// `shapec:mutable`.
    pub const SHAPEC_MUTABLE: &str = "http://purl.org/shapec/ontology#mutable";
    /// `shapec:name`.
    pub const SHAPEC_NAME: &str = "http://purl.org/shapec/ontology#name";
    /// `shapec:visibility`.
    pub const SHAPEC_VISIBILITY: &str = "http://purl.org/shapec/ontology#visibility";
    /// `shapec:blankNode` minting strategy.
    pub const SHAPEC_BLANK_NODE: &str = "http://purl.org/shapec/ontology#blankNode";
    /// `shapec:sha256` minting strategy.
    pub const SHAPEC_SHA256: &str = "http://purl.org/shapec/ontology#sha256";
    /// `shapec:uuidv4` minting strategy.
    pub const SHAPEC_UUIDV4: &str = "http://purl.org/shapec/ontology#uuidv4";
    /// `shapec:private` visibility.
    pub const SHAPEC_PRIVATE: &str = "http://purl.org/shapec/ontology#private";
    /// `shapec:protected` visibility.
    pub const SHAPEC_PROTECTED: &str = "http://purl.org/shapec/ontology#protected";
    /// `shapec:public` visibility.
    pub const SHAPEC_PUBLIC: &str = "http://purl.org/shapec/ontology#public";
    /// `shapec:Set` collection kind.
    pub const SHAPEC_SET: &str = "http://purl.org/shapec/ontology#Set";
    /// `shapec:List` collection kind.
    pub const SHAPEC_LIST: &str = "http://purl.org/shapec/ontology#List";

    // XSD datatypes
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:byte`.
    pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:long`.
    pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    /// `xsd:negativeInteger`.
    pub const XSD_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:nonPositiveInteger`.
    pub const XSD_NON_POSITIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    /// `xsd:short`.
    pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:unsignedByte`.
    pub const XSD_UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";
    /// `xsd:unsignedInt`.
    pub const XSD_UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    /// `xsd:unsignedLong`.
    pub const XSD_UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
    /// `xsd:unsignedShort`.
    pub const XSD_UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_iris_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_iri(kind.iri()), Some(kind));
        }
        assert_eq!(NodeKind::from_iri("http://www.w3.org/ns/shacl#Thing"), None);
    }

    #[test]
    fn node_kind_membership() {
        assert!(NodeKind::BlankNodeOrIri.allows_iri());
        assert!(NodeKind::BlankNodeOrIri.allows_blank_node());
        assert!(!NodeKind::BlankNodeOrIri.allows_literal());
        assert!(NodeKind::IriOrLiteral.allows_literal());
        assert!(!NodeKind::Literal.allows_iri());
    }

    #[test]
    fn term_display() {
        assert_eq!(
            Term::from(Identifier::iri("http://example.com/a")).to_string(),
            "<http://example.com/a>"
        );
        assert_eq!(Identifier::blank_node("b0").to_string(), "_:b0");
        assert_eq!(Literal::string("x").to_string(), "\"x\"");
        assert_eq!(Literal::lang_string("x", "en").to_string(), "\"x\"@en");
        assert_eq!(
            Literal::typed("1", iris::XSD_INTEGER).to_string(),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn minting_strategy_prefix() {
        assert!(!MintingStrategy::BlankNode.uses_prefix());
        assert!(MintingStrategy::Sha256.uses_prefix());
        assert!(MintingStrategy::Uuidv4.uses_prefix());
    }
}
