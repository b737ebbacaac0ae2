//! The intermediate declaration graph.
//!
//! Declarations reference each other by [`Identifier`] only; resolving those
//! references into shared values is the type engine's job.

use std::collections::{BTreeMap, BTreeSet};

use shapec_shapes::{Identifier, Literal, MintingStrategy, NodeKind, PropertyPath, Term, Visibility};

/// The kinds of RDF identifier a resource may be named by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentifierKind {
    /// A blank node.
    BlankNode,
    /// An IRI.
    Iri,
}

impl IdentifierKind {
    /// The identifier kinds a node kind admits. Literal-only kinds admit none.
    pub fn from_node_kind(node_kind: NodeKind) -> BTreeSet<Self> {
        let mut kinds = BTreeSet::new();
        if node_kind.allows_blank_node() {
            kinds.insert(Self::BlankNode);
        }
        if node_kind.allows_iri() {
            kinds.insert(Self::Iri);
        }
        kinds
    }

    /// Both kinds.
    pub fn any() -> BTreeSet<Self> {
        [Self::BlankNode, Self::Iri].into_iter().collect()
    }
}

/// Everything a literal-valued property says about its values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiteralDescription {
    /// `sh:datatype`.
    pub datatype: Option<String>,
    /// `sh:defaultValue`.
    pub default_value: Option<Term>,
    /// `sh:hasValue`.
    pub has_values: Vec<Term>,
    /// `sh:in`.
    pub in_: Vec<Term>,
    /// `sh:languageIn`.
    pub language_in: Vec<String>,
    /// `sh:maxExclusive`.
    pub max_exclusive: Option<Literal>,
    /// `sh:maxInclusive`.
    pub max_inclusive: Option<Literal>,
    /// `sh:minExclusive`.
    pub min_exclusive: Option<Literal>,
    /// `sh:minInclusive`.
    pub min_inclusive: Option<Literal>,
    /// `sh:maxLength`.
    pub max_length: Option<u64>,
    /// `sh:minLength`.
    pub min_length: Option<u64>,
    /// `sh:pattern`.
    pub pattern: Option<String>,
}

/// Abstract description of a property's value type.
#[derive(Debug, Clone, PartialEq)]
pub enum AstType {
    /// An IRI or blank node naming some resource.
    Identifier {
        /// Admissible identifier kinds.
        kinds: BTreeSet<IdentifierKind>,
        /// `sh:hasValue` identifiers.
        has_values: Vec<Identifier>,
        /// `sh:in` identifiers.
        in_: Vec<Identifier>,
    },
    /// An ordered `rdf:List` of items.
    List(Box<AstType>),
    /// A literal.
    Literal(LiteralDescription),
    /// A reference to the object type declared by a node shape.
    ObjectType(Identifier),
    /// One of several object types.
    ObjectUnion(Vec<Identifier>),
    /// All of several object types at once.
    ObjectIntersection(Vec<Identifier>),
    /// Zero or one item.
    Option(Box<AstType>),
    /// An unordered collection of items.
    Set {
        /// Item type.
        item: Box<AstType>,
        /// `sh:minCount` of the collection.
        min_count: u64,
    },
    /// Any RDF term the node kind admits.
    Term {
        /// `sh:nodeKind`, if any.
        node_kind: Option<NodeKind>,
        /// `sh:hasValue` terms.
        has_values: Vec<Term>,
        /// `sh:in` terms.
        in_: Vec<Term>,
    },
    /// One of several types.
    Union(Vec<AstType>),
    /// All of several types at once.
    Intersection(Vec<AstType>),
    /// A type that was never filled in.
    Placeholder,
}

impl AstType {
    /// A short tag naming the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identifier { .. } => "Identifier",
            Self::List(_) => "List",
            Self::Literal(_) => "Literal",
            Self::ObjectType(_) => "ObjectType",
            Self::ObjectUnion(_) => "ObjectUnion",
            Self::ObjectIntersection(_) => "ObjectIntersection",
            Self::Option(_) => "Option",
            Self::Set { .. } => "Set",
            Self::Term { .. } => "Term",
            Self::Union(_) => "Union",
            Self::Intersection(_) => "Intersection",
            Self::Placeholder => "Placeholder",
        }
    }
}

/// A property declaration of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct AstProperty {
    /// The property shape's identifier.
    pub identifier: Identifier,
    /// Declaration name.
    pub name: String,
    /// `rdfs:comment` or `sh:description`.
    pub comment: Option<String>,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// Predicate path.
    pub path: PropertyPath,
    /// `sh:order`.
    pub order: Option<f64>,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Whether the property may be reassigned after construction.
    pub mutable: bool,
    /// Value type.
    pub type_: AstType,
}

/// An object type declared by a node shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AstObjectType {
    /// The node shape's identifier.
    pub identifier: Identifier,
    /// Declaration name.
    pub name: String,
    /// `rdfs:comment`.
    pub comment: Option<String>,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// `shapec:abstract`.
    pub abstract_: bool,
    /// Identifier kinds instances may be named by.
    pub identifier_kinds: BTreeSet<IdentifierKind>,
    /// `sh:in` on the node shape: the closed set of instance identifiers.
    pub identifier_in: Vec<Identifier>,
    /// `shapec:identifierMintingStrategy`.
    pub identifier_minting_strategy: Option<MintingStrategy>,
    /// `shapec:discriminatorValue`.
    pub discriminator_value: Option<String>,
    /// Transitive `rdfs:subClassOf` node shapes, nearest first.
    pub ancestors: Vec<Identifier>,
    /// Direct `rdfs:subClassOf` node shapes.
    pub parents: Vec<Identifier>,
    /// Node shapes that directly subclass this one.
    pub children: Vec<Identifier>,
    /// Node shapes that transitively subclass this one.
    pub descendants: Vec<Identifier>,
    /// Declared properties, in `sh:property` order.
    pub properties: Vec<AstProperty>,
}

/// All object type declarations of a shapes graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AstGraph {
    object_types: BTreeMap<Identifier, AstObjectType>,
}

impl AstGraph {
    /// Adds a declaration, replacing any with the same identifier.
    pub fn insert(&mut self, object_type: AstObjectType) {
        self.object_types
            .insert(object_type.identifier.clone(), object_type);
    }

    /// Looks up a declaration by identifier.
    pub fn object_type(&self, identifier: &Identifier) -> Option<&AstObjectType> {
        self.object_types.get(identifier)
    }

    /// All declarations, in identifier order.
    pub fn object_types(&self) -> impl Iterator<Item = &AstObjectType> {
        self.object_types.values()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.object_types.len()
    }

    /// True if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.object_types.is_empty()
    }
}
