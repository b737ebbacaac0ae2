//! Resolved properties of an object type.

use shapec_shapes::{Identifier, PropertyPath, Visibility};

use crate::types::Type;

/// What a property holds.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// Human-readable prefix prepended to minted identifiers.
    IdentifierPrefix,
    /// The instance's identifier.
    Identifier {
        /// The identifier's type.
        type_: Type,
    },
    /// The tag distinguishing concrete variants of a hierarchy.
    TypeDiscriminator {
        /// Legal tag values, sorted and deduplicated.
        values: Vec<String>,
        /// True when an ancestor already declares a discriminator.
        override_: bool,
    },
    /// A property declared by a property shape.
    Shape(ShapeProperty),
}

/// A property declared by a property shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProperty {
    /// The property shape.
    pub identifier: Identifier,
    /// Predicate path.
    pub path: PropertyPath,
    /// `sh:order`.
    pub order: Option<f64>,
    /// Whether the value may change after construction.
    pub mutable: bool,
    /// Documentation.
    pub comment: Option<String>,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// Value type.
    pub type_: Type,
}

/// A resolved property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name. Synthesized properties use `$`-prefixed names, which
    /// no declared property can take.
    pub name: String,
    /// Accessor visibility.
    pub visibility: Visibility,
    /// Contents.
    pub kind: PropertyKind,
}

impl Property {
    /// Name of the synthesized identifier-prefix property.
    pub const IDENTIFIER_PREFIX: &'static str = "$identifierPrefix";
    /// Name of the synthesized identifier property.
    pub const IDENTIFIER: &'static str = "$identifier";
    /// Name of the synthesized type-discriminator property.
    pub const TYPE_DISCRIMINATOR: &'static str = "$type";

    /// True for identifier-prefix, identifier, and type-discriminator
    /// properties.
    pub fn is_synthesized(&self) -> bool {
        !matches!(self.kind, PropertyKind::Shape(_))
    }

    /// The declaring property shape's identifier, for declared properties.
    pub fn shape_identifier(&self) -> Option<&Identifier> {
        match &self.kind {
            PropertyKind::Shape(shape) => Some(&shape.identifier),
            _ => None,
        }
    }

    /// The value type. Identifier prefixes are strings; discriminators are
    /// reported as `None` since their values are listed on the kind.
    pub fn type_(&self) -> Option<&Type> {
        match &self.kind {
            PropertyKind::Identifier { type_ } => Some(type_),
            PropertyKind::Shape(shape) => Some(&shape.type_),
            PropertyKind::IdentifierPrefix | PropertyKind::TypeDiscriminator { .. } => None,
        }
    }
}
