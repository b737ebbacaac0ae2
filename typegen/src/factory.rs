//! The type resolution engine.
//!
//! [`TypeFactory`] turns declarations of an [`AstGraph`] into [`ObjectType`]s
//! and [`Type`]s. Object types and declared properties are memoized by
//! identifier for the lifetime of the factory, so every path to the same
//! declaration yields the same `Rc`.
//!
//! A failed build leaves the cache as it was before the failing request:
//! every entry inserted while that request was in progress is dropped,
//! including relatives that completed but point at the failed type.

use std::collections::HashMap;
use std::rc::Rc;

use shapec_ast::{AstGraph, AstObjectType, AstProperty, AstType};
use shapec_shapes::{Identifier, Visibility};
use tracing::debug;

use crate::error::{Result, TypeError};
use crate::literal;
use crate::object_type::{ObjectType, Relationships};
use crate::property::{Property, PropertyKind, ShapeProperty};
use crate::types::Type;

/// Resolves and caches the object types of one declaration graph.
pub struct TypeFactory<'a> {
    ast: &'a AstGraph,
    object_types: HashMap<Identifier, Rc<ObjectType>>,
    properties: HashMap<Identifier, Rc<Property>>,
    /// Cache insertions made while a build is in progress.
    journal: Vec<Inserted>,
    depth: usize,
}

enum Inserted {
    ObjectType(Identifier),
    Property(Identifier),
}

impl<'a> TypeFactory<'a> {
    /// Creates a factory with an empty cache.
    pub fn new(ast: &'a AstGraph) -> Self {
        Self {
            ast,
            object_types: HashMap::new(),
            properties: HashMap::new(),
            journal: Vec::new(),
            depth: 0,
        }
    }

    /// Resolves every declared object type, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TypeError`] hit while resolving any type.
    pub fn object_types(&mut self) -> Result<Vec<Rc<ObjectType>>> {
        let ast = self.ast;
        ast.object_types()
            .map(|declaration| self.object_type(&declaration.identifier))
            .collect()
    }

    /// Returns the object type declared as `identifier`, building it on
    /// first request.
    ///
    /// A request that arrives while the type is still being built (through
    /// a cycle) returns the in-progress value.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownObjectType`] if nothing is declared as
    /// `identifier`, or any error raised while resolving its properties.
    pub fn object_type(&mut self, identifier: &Identifier) -> Result<Rc<ObjectType>> {
        if let Some(cached) = self.object_types.get(identifier) {
            return Ok(Rc::clone(cached));
        }
        let ast = self.ast;
        let declaration =
            ast.object_type(identifier)
                .ok_or_else(|| TypeError::UnknownObjectType {
                    identifier: identifier.clone(),
                })?;

        let object_type = Rc::new(ObjectType::new(declaration));
        let mark = self.journal.len();
        self.object_types
            .insert(identifier.clone(), Rc::clone(&object_type));
        self.journal.push(Inserted::ObjectType(identifier.clone()));
        debug!(identifier = %identifier, name = object_type.name(), "building object type");

        self.depth += 1;
        let completed = self.complete(&object_type, declaration);
        self.depth -= 1;
        match completed {
            Ok(()) => {
                if self.depth == 0 {
                    self.journal.clear();
                }
                Ok(object_type)
            }
            Err(error) => {
                self.roll_back(mark);
                Err(error)
            }
        }
    }

    fn roll_back(&mut self, mark: usize) {
        let dropped = self.journal.len() - mark;
        for entry in self.journal.drain(mark..) {
            match entry {
                Inserted::ObjectType(identifier) => {
                    self.object_types.remove(&identifier);
                }
                Inserted::Property(identifier) => {
                    self.properties.remove(&identifier);
                }
            }
        }
        debug!(dropped, "rolled back failed object type build");
    }

    /// Looks up an already-built object type without building it.
    pub fn cached(&self, identifier: &Identifier) -> Option<Rc<ObjectType>> {
        self.object_types.get(identifier).cloned()
    }

    /// Number of object types built so far.
    pub fn len(&self) -> usize {
        self.object_types.len()
    }

    /// True if nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.object_types.is_empty()
    }

    fn complete(&mut self, object_type: &ObjectType, declaration: &'a AstObjectType) -> Result<()> {
        let relationships = Relationships {
            ancestors: self.resolve_all(&declaration.ancestors)?,
            parents: self.resolve_all(&declaration.parents)?,
            children: self.resolve_all(&declaration.children)?,
            descendants: self.resolve_all(&declaration.descendants)?,
        };
        object_type.set_relationships(relationships);

        let mut declared = declaration
            .properties
            .iter()
            .map(|property| self.property(property))
            .collect::<Result<Vec<_>>>()?;
        declared.sort_by(|a, b| {
            sort_order(a)
                .total_cmp(&sort_order(b))
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut properties = synthesized_properties(object_type);
        properties.extend(declared);
        object_type.set_properties(properties);
        Ok(())
    }

    fn resolve_all(&mut self, identifiers: &[Identifier]) -> Result<Vec<Rc<ObjectType>>> {
        identifiers
            .iter()
            .map(|identifier| self.object_type(identifier))
            .collect()
    }

    fn property(&mut self, declaration: &AstProperty) -> Result<Rc<Property>> {
        if let Some(cached) = self.properties.get(&declaration.identifier) {
            return Ok(Rc::clone(cached));
        }
        let type_ = self.type_(&declaration.type_).inspect_err(|error| {
            debug!(property = %declaration.identifier, %error, "property type failed to resolve");
        })?;
        let property = Rc::new(Property {
            name: declaration.name.clone(),
            visibility: declaration.visibility,
            kind: PropertyKind::Shape(ShapeProperty {
                identifier: declaration.identifier.clone(),
                path: declaration.path.clone(),
                order: declaration.order,
                mutable: declaration.mutable,
                comment: declaration.comment.clone(),
                label: declaration.label.clone(),
                type_,
            }),
        });
        self.properties
            .insert(declaration.identifier.clone(), Rc::clone(&property));
        self.journal
            .push(Inserted::Property(declaration.identifier.clone()));
        Ok(property)
    }

    /// Maps an AST type onto a resolved type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NotImplemented`] for intersections,
    /// [`TypeError::UnresolvedPlaceholder`] for placeholders, and
    /// [`TypeError::UnknownObjectType`] for dangling object references.
    pub fn type_(&mut self, ast_type: &AstType) -> Result<Type> {
        Ok(match ast_type {
            AstType::Identifier {
                kinds,
                has_values,
                in_,
            } => Type::Identifier {
                kinds: kinds.clone(),
                has_values: has_values.clone(),
                in_: in_.clone(),
            },
            AstType::List(item) => Type::List(Box::new(self.type_(item)?)),
            AstType::Literal(description) => literal::specialize(description),
            AstType::ObjectType(identifier) => Type::ObjectType(self.object_type(identifier)?),
            AstType::ObjectUnion(identifiers) => Type::ObjectUnion(self.resolve_all(identifiers)?),
            AstType::Option(item) => Type::Option(Box::new(self.type_(item)?)),
            AstType::Set { item, min_count } => Type::Set {
                item: Box::new(self.type_(item)?),
                min_count: *min_count,
            },
            AstType::Term {
                node_kind,
                has_values,
                in_,
            } => Type::Term {
                node_kind: *node_kind,
                has_values: has_values.clone(),
                in_: in_.clone(),
            },
            AstType::Union(members) => Type::Union(
                members
                    .iter()
                    .map(|member| self.type_(member))
                    .collect::<Result<_>>()?,
            ),
            AstType::Intersection(_) | AstType::ObjectIntersection(_) => {
                return Err(TypeError::NotImplemented {
                    kind: ast_type.kind(),
                })
            }
            AstType::Placeholder => return Err(TypeError::UnresolvedPlaceholder),
        })
    }
}

/// `sh:order`, with unordered properties after ordered ones.
fn sort_order(property: &Property) -> f64 {
    match &property.kind {
        PropertyKind::Shape(shape) => shape.order.unwrap_or(f64::INFINITY),
        _ => f64::NEG_INFINITY,
    }
}

/// Identifier prefix, identifier, and type discriminator, in that order,
/// for the types that declare them. Reads only the own fields of relatives.
fn synthesized_properties(object_type: &ObjectType) -> Vec<Rc<Property>> {
    let ancestors = object_type.ancestors();
    let descendants = object_type.descendants();
    let concrete_ancestor = ancestors.iter().any(|a| !a.is_abstract());
    let concrete_descendant = descendants.iter().any(|d| !d.is_abstract());
    let mut properties = Vec::new();

    if object_type.needs_identifier_prefix()
        && !ancestors.iter().any(|a| a.needs_identifier_prefix())
    {
        properties.push(Rc::new(Property {
            name: Property::IDENTIFIER_PREFIX.to_owned(),
            visibility: if descendants.is_empty() {
                Visibility::Private
            } else {
                Visibility::Protected
            },
            kind: PropertyKind::IdentifierPrefix,
        }));
    }

    if !object_type.is_abstract() && !concrete_ancestor {
        properties.push(Rc::new(Property {
            name: Property::IDENTIFIER.to_owned(),
            visibility: if concrete_descendant {
                Visibility::Protected
            } else {
                Visibility::Private
            },
            kind: PropertyKind::Identifier {
                type_: Type::Identifier {
                    kinds: object_type.identifier_kinds().clone(),
                    has_values: Vec::new(),
                    in_: object_type.identifier_in().to_vec(),
                },
            },
        }));
    }

    let mut values: Vec<String> = descendants
        .iter()
        .filter(|d| !d.is_abstract())
        .map(|d| d.discriminator_value().to_owned())
        .collect();
    if !object_type.is_abstract() {
        values.push(object_type.discriminator_value().to_owned());
    }
    if !values.is_empty() {
        values.sort();
        values.dedup();
        properties.push(Rc::new(Property {
            name: Property::TYPE_DISCRIMINATOR.to_owned(),
            visibility: Visibility::Public,
            kind: PropertyKind::TypeDiscriminator {
                values,
                override_: concrete_ancestor,
            },
        }));
    }

    properties
}
