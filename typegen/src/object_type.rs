//! Resolved object types.
//!
//! An [`ObjectType`] is built in two phases. Its own fields are set when it
//! is created and inserted into the engine's cache. Its relationships and
//! properties are filled exactly once afterwards, which is what lets a
//! relative reached through a cycle hold a reference to a type that is still
//! being built. Nothing reads a relative's relationships or properties
//! while building, only its own fields.

use std::cell::OnceCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use shapec_ast::{AstObjectType, IdentifierKind};
use shapec_shapes::{Identifier, MintingStrategy};

use crate::property::Property;

/// A resolved object type.
pub struct ObjectType {
    identifier: Identifier,
    name: String,
    comment: Option<String>,
    label: Option<String>,
    abstract_: bool,
    discriminator_value: String,
    identifier_minting_strategy: Option<MintingStrategy>,
    identifier_kinds: BTreeSet<IdentifierKind>,
    identifier_in: Vec<Identifier>,
    relationships: OnceCell<Relationships>,
    properties: OnceCell<Vec<Rc<Property>>>,
}

/// Inheritance neighbourhood of an object type.
#[derive(Default)]
pub(crate) struct Relationships {
    pub(crate) ancestors: Vec<Rc<ObjectType>>,
    pub(crate) parents: Vec<Rc<ObjectType>>,
    pub(crate) children: Vec<Rc<ObjectType>>,
    pub(crate) descendants: Vec<Rc<ObjectType>>,
}

impl ObjectType {
    /// First phase: everything but relationships and properties.
    pub(crate) fn new(declaration: &AstObjectType) -> Self {
        Self {
            identifier: declaration.identifier.clone(),
            name: declaration.name.clone(),
            comment: declaration.comment.clone(),
            label: declaration.label.clone(),
            abstract_: declaration.abstract_,
            discriminator_value: declaration
                .discriminator_value
                .clone()
                .unwrap_or_else(|| declaration.name.clone()),
            identifier_minting_strategy: declaration.identifier_minting_strategy,
            identifier_kinds: declaration.identifier_kinds.clone(),
            identifier_in: declaration.identifier_in.clone(),
            relationships: OnceCell::new(),
            properties: OnceCell::new(),
        }
    }

    /// Second phase, relationships. Later calls are ignored.
    pub(crate) fn set_relationships(&self, relationships: Relationships) {
        let _ = self.relationships.set(relationships);
    }

    /// Second phase, properties. Later calls are ignored.
    pub(crate) fn set_properties(&self, properties: Vec<Rc<Property>>) {
        let _ = self.properties.set(properties);
    }

    /// The declaring node shape.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `rdfs:comment` of the node shape.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// `rdfs:label` of the node shape.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Abstract types have no instances of their own.
    pub fn is_abstract(&self) -> bool {
        self.abstract_
    }

    /// The tag distinguishing this type from its concrete relatives: the
    /// declared discriminator value, or the type name.
    pub fn discriminator_value(&self) -> &str {
        &self.discriminator_value
    }

    /// How identifiers of new instances are minted.
    pub fn identifier_minting_strategy(&self) -> Option<MintingStrategy> {
        self.identifier_minting_strategy
    }

    /// Identifier kinds instances may be named by.
    pub fn identifier_kinds(&self) -> &BTreeSet<IdentifierKind> {
        &self.identifier_kinds
    }

    /// Closed set of instance identifiers, if any.
    pub fn identifier_in(&self) -> &[Identifier] {
        &self.identifier_in
    }

    /// True if this type's identifiers get a human-readable prefix.
    pub fn needs_identifier_prefix(&self) -> bool {
        self.identifier_minting_strategy
            .is_some_and(MintingStrategy::uses_prefix)
    }

    fn relationships(&self) -> Option<&Relationships> {
        self.relationships.get()
    }

    /// Transitive supertypes, nearest first.
    pub fn ancestors(&self) -> &[Rc<ObjectType>] {
        self.relationships()
            .map(|r| r.ancestors.as_slice())
            .unwrap_or(&[])
    }

    /// Direct supertypes.
    pub fn parents(&self) -> &[Rc<ObjectType>] {
        self.relationships()
            .map(|r| r.parents.as_slice())
            .unwrap_or(&[])
    }

    /// Direct subtypes.
    pub fn children(&self) -> &[Rc<ObjectType>] {
        self.relationships()
            .map(|r| r.children.as_slice())
            .unwrap_or(&[])
    }

    /// Transitive subtypes.
    pub fn descendants(&self) -> &[Rc<ObjectType>] {
        self.relationships()
            .map(|r| r.descendants.as_slice())
            .unwrap_or(&[])
    }

    /// Synthesized properties followed by declared properties.
    pub fn properties(&self) -> &[Rc<Property>] {
        self.properties.get().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&Rc<Property>> {
        self.properties().iter().find(|p| p.name == name)
    }
}

fn identifiers(types: &[Rc<ObjectType>]) -> Vec<&Identifier> {
    types.iter().map(|t| &t.identifier).collect()
}

/// Relatives are printed by identifier so cycles terminate.
impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("identifier", &self.identifier)
            .field("name", &self.name)
            .field("abstract", &self.abstract_)
            .field("discriminator_value", &self.discriminator_value)
            .field("identifier_minting_strategy", &self.identifier_minting_strategy)
            .field("ancestors", &identifiers(self.ancestors()))
            .field("descendants", &identifiers(self.descendants()))
            .field(
                "properties",
                &self.properties().iter().map(|p| &p.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
