//! Resolved property value types.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use shapec_ast::IdentifierKind;
use shapec_shapes::{Identifier, Literal, NodeKind, Term};

use crate::object_type::ObjectType;

/// A specialized literal type: the single datatype it was derived from plus
/// the default and enumerated values coerced to their native representation.
///
/// Values that could not be coerced are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralType<T> {
    /// The datatype IRI.
    pub datatype: String,
    /// `sh:defaultValue`.
    pub default_value: Option<T>,
    /// `sh:hasValue`.
    pub has_values: Vec<T>,
    /// `sh:in`.
    pub in_: Vec<T>,
}

/// Whether a number datatype holds integers or floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `xsd:integer` and its derived types.
    Integer,
    /// `xsd:decimal`, `xsd:double`, `xsd:float`.
    Float,
}

/// A coerced numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer.
    Integer(i128),
    /// A floating point number.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A number type.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberType {
    /// Integer or floating point.
    pub kind: NumberKind,
    /// Datatype and coerced values.
    pub literal: LiteralType<Number>,
}

/// The fallback literal type: no coercion, values kept as RDF literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericLiteralType {
    /// Every datatype encountered, sorted.
    pub datatypes: BTreeSet<String>,
    /// `sh:defaultValue`.
    pub default_value: Option<Literal>,
    /// `sh:hasValue`.
    pub has_values: Vec<Literal>,
    /// `sh:in`.
    pub in_: Vec<Literal>,
    /// `sh:languageIn`.
    pub language_in: Vec<String>,
}

/// A resolved property value type.
#[derive(Debug, Clone)]
pub enum Type {
    /// An IRI or blank node.
    Identifier {
        /// Admissible identifier kinds.
        kinds: BTreeSet<IdentifierKind>,
        /// `sh:hasValue` identifiers.
        has_values: Vec<Identifier>,
        /// `sh:in` identifiers.
        in_: Vec<Identifier>,
    },
    /// An ordered list.
    List(Box<Type>),
    /// An unordered collection.
    Set {
        /// Item type.
        item: Box<Type>,
        /// Minimum number of items.
        min_count: u64,
    },
    /// Zero or one item.
    Option(Box<Type>),
    /// One of several types.
    Union(Vec<Type>),
    /// Any RDF term the node kind admits.
    Term {
        /// `sh:nodeKind`, if any.
        node_kind: Option<NodeKind>,
        /// `sh:hasValue` terms.
        has_values: Vec<Term>,
        /// `sh:in` terms.
        in_: Vec<Term>,
    },
    /// An object type, shared with the engine's cache.
    ObjectType(Rc<ObjectType>),
    /// One of several object types.
    ObjectUnion(Vec<Rc<ObjectType>>),
    /// `xsd:boolean`.
    Boolean(LiteralType<bool>),
    /// `xsd:date`.
    Date(LiteralType<NaiveDate>),
    /// `xsd:dateTime`. Values without an offset are taken as UTC.
    DateTime(LiteralType<DateTime<FixedOffset>>),
    /// An XSD number.
    Number(NumberType),
    /// A string-valued datatype.
    String(LiteralType<String>),
    /// Any other literal.
    Literal(GenericLiteralType),
}

impl Type {
    /// A short tag naming the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identifier { .. } => "Identifier",
            Self::List(_) => "List",
            Self::Set { .. } => "Set",
            Self::Option(_) => "Option",
            Self::Union(_) => "Union",
            Self::Term { .. } => "Term",
            Self::ObjectType(_) => "ObjectType",
            Self::ObjectUnion(_) => "ObjectUnion",
            Self::Boolean(_) => "Boolean",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Literal(_) => "Literal",
        }
    }
}

/// Structural equality, except that object types compare by identity of
/// the cached value.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Identifier {
                    kinds: a,
                    has_values: b,
                    in_: c,
                },
                Self::Identifier {
                    kinds: x,
                    has_values: y,
                    in_: z,
                },
            ) => a == x && b == y && c == z,
            (Self::List(a), Self::List(b)) | (Self::Option(a), Self::Option(b)) => a == b,
            (
                Self::Set {
                    item: a,
                    min_count: m,
                },
                Self::Set {
                    item: b,
                    min_count: n,
                },
            ) => a == b && m == n,
            (Self::Union(a), Self::Union(b)) => a == b,
            (
                Self::Term {
                    node_kind: a,
                    has_values: b,
                    in_: c,
                },
                Self::Term {
                    node_kind: x,
                    has_values: y,
                    in_: z,
                },
            ) => a == x && b == y && c == z,
            (Self::ObjectType(a), Self::ObjectType(b)) => Rc::ptr_eq(a, b),
            (Self::ObjectUnion(a), Self::ObjectUnion(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Rc::ptr_eq(x, y))
            }
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Literal(a), Self::Literal(b)) => a == b,
            _ => false,
        }
    }
}
