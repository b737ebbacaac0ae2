//! Shape records → declaration graph.
//!
//! Every `sh:NodeShape` becomes an [`AstObjectType`]. Inheritance comes from
//! `rdfs:subClassOf` between node shapes; `rdfs:subClassOf` targets that are
//! not node shapes are ignored. The closure is cycle-safe: a type never
//! lists itself among its own ancestors or descendants.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use shapec_shapes::{
    CollectionKind, Constraints, Identifier, NodeKind, NodeShape, PropertyShape, ShapesGraph, Term,
};
use tracing::debug;

use crate::error::{AstError, Result};
use crate::model::{
    AstGraph, AstObjectType, AstProperty, AstType, IdentifierKind, LiteralDescription,
};
use crate::names::{object_type_name, property_name, to_camel_case};

/// Builds the declaration graph of every node shape in `shapes`.
///
/// # Errors
///
/// Returns [`AstError::MissingPropertyShape`] if a node shape lists a
/// property shape `shapes` does not hold, and
/// [`AstError::LiteralNodeShape`] / [`AstError::LiteralInIdentifierSet`] if a
/// node shape constrains its own identifier to literals.
pub fn build(shapes: &ShapesGraph) -> Result<AstGraph> {
    let parents: BTreeMap<&Identifier, Vec<Identifier>> = shapes
        .node_shapes()
        .map(|shape| (&shape.identifier, direct_parents(shapes, shape)))
        .collect();
    let ancestors: BTreeMap<&Identifier, Vec<Identifier>> = parents
        .keys()
        .map(|&identifier| (identifier, transitive_ancestors(identifier, &parents)))
        .collect();

    let mut children: BTreeMap<&Identifier, Vec<Identifier>> = BTreeMap::new();
    let mut descendants: BTreeMap<&Identifier, Vec<Identifier>> = BTreeMap::new();
    for (&identifier, direct) in &parents {
        for parent in direct {
            children.entry(parent).or_default().push(identifier.clone());
        }
    }
    for (&identifier, transitive) in &ancestors {
        for ancestor in transitive {
            descendants
                .entry(ancestor)
                .or_default()
                .push(identifier.clone());
        }
    }

    let mut graph = AstGraph::default();
    let mut type_names: HashMap<String, &Identifier> = HashMap::new();
    for shape in shapes.node_shapes() {
        let id = &shape.identifier;
        let mut types = TypeBuilder::new(shapes);
        let properties = shape
            .properties
            .iter()
            .map(|property| {
                let property_shape = shapes.property_shape(property).ok_or_else(|| {
                    AstError::MissingPropertyShape {
                        node_shape: id.clone(),
                        property: property.clone(),
                    }
                })?;
                Ok(types.property(property_shape))
            })
            .collect::<Result<Vec<_>>>()?;
        check_property_names(id, &properties)?;

        let object_type = AstObjectType {
            identifier: id.clone(),
            name: shape
                .annotations
                .name
                .clone()
                .unwrap_or_else(|| object_type_name(id)),
            comment: shape.comment.clone(),
            label: shape.label.clone(),
            abstract_: shape.annotations.abstract_.unwrap_or(false),
            identifier_kinds: identifier_kinds(shape)?,
            identifier_in: identifier_in(shape)?,
            identifier_minting_strategy: shape.annotations.identifier_minting_strategy,
            discriminator_value: shape.annotations.discriminator_value.clone(),
            ancestors: ancestors.get(id).cloned().unwrap_or_default(),
            parents: parents.get(id).cloned().unwrap_or_default(),
            children: children.remove(id).unwrap_or_default(),
            descendants: descendants.remove(id).unwrap_or_default(),
            properties,
        };
        if let Some(first) = type_names.insert(object_type.name.clone(), id) {
            return Err(AstError::DuplicateTypeName {
                name: object_type.name,
                first: first.clone(),
                second: id.clone(),
            });
        }
        debug!(
            identifier = %id,
            name = %object_type.name,
            properties = object_type.properties.len(),
            ancestors = object_type.ancestors.len(),
            "built object type declaration"
        );
        graph.insert(object_type);
    }
    check_discriminators(&graph)?;
    Ok(graph)
}

fn check_property_names(node_shape: &Identifier, properties: &[AstProperty]) -> Result<()> {
    let mut seen: HashMap<&str, &Identifier> = HashMap::new();
    for property in properties {
        if let Some(first) = seen.insert(&property.name, &property.identifier) {
            return Err(AstError::DuplicatePropertyName {
                node_shape: node_shape.clone(),
                name: property.name.clone(),
                first: first.clone(),
                second: property.identifier.clone(),
            });
        }
    }
    Ok(())
}

/// Every concrete type among a type and its descendants needs its own
/// discriminator value. An absent value defaults to the type name.
fn check_discriminators(graph: &AstGraph) -> Result<()> {
    for root in graph.object_types() {
        let mut seen: HashMap<&str, &Identifier> = HashMap::new();
        let members = std::iter::once(root)
            .chain(root.descendants.iter().filter_map(|d| graph.object_type(d)))
            .filter(|member| !member.abstract_);
        for member in members {
            let value = member
                .discriminator_value
                .as_deref()
                .unwrap_or(&member.name);
            if let Some(first) = seen.insert(value, &member.identifier) {
                return Err(AstError::DuplicateDiscriminator {
                    value: value.to_owned(),
                    root: root.identifier.clone(),
                    first: first.clone(),
                    second: member.identifier.clone(),
                });
            }
        }
    }
    Ok(())
}

fn direct_parents(shapes: &ShapesGraph, shape: &NodeShape) -> Vec<Identifier> {
    shape
        .subclass_of
        .iter()
        .filter(|parent| {
            let known = shapes.node_shape(parent).is_some();
            if !known {
                debug!(shape = %shape.identifier, parent = %parent, "ignoring non-shape superclass");
            }
            known && **parent != shape.identifier
        })
        .cloned()
        .collect()
}

/// Breadth-first, so nearer ancestors come first.
fn transitive_ancestors(
    identifier: &Identifier,
    parents: &BTreeMap<&Identifier, Vec<Identifier>>,
) -> Vec<Identifier> {
    let mut seen: HashSet<&Identifier> = HashSet::from([identifier]);
    let mut queue: VecDeque<&Identifier> = VecDeque::from([identifier]);
    let mut ancestors = Vec::new();
    while let Some(current) = queue.pop_front() {
        for parent in parents.get(current).into_iter().flatten() {
            if seen.insert(parent) {
                ancestors.push(parent.clone());
                queue.push_back(parent);
            }
        }
    }
    ancestors
}

fn identifier_kinds(shape: &NodeShape) -> Result<BTreeSet<IdentifierKind>> {
    let Some(node_kind) = shape.constraints.node_kind else {
        return Ok(IdentifierKind::any());
    };
    let kinds = IdentifierKind::from_node_kind(node_kind);
    if kinds.is_empty() {
        return Err(AstError::LiteralNodeShape {
            node_shape: shape.identifier.clone(),
            node_kind,
        });
    }
    Ok(kinds)
}

fn identifier_in(shape: &NodeShape) -> Result<Vec<Identifier>> {
    shape
        .constraints
        .in_
        .iter()
        .map(|term| match term {
            Term::Identifier(identifier) => Ok(identifier.clone()),
            Term::Literal(literal) => Err(AstError::LiteralInIdentifierSet {
                node_shape: shape.identifier.clone(),
                value: literal.to_string(),
            }),
        })
        .collect()
}

/// Derives AST types from constraints, following member shapes of logical
/// constraints.
struct TypeBuilder<'a> {
    shapes: &'a ShapesGraph,
    visiting: Vec<Identifier>,
}

impl<'a> TypeBuilder<'a> {
    fn new(shapes: &'a ShapesGraph) -> Self {
        Self {
            shapes,
            visiting: Vec::new(),
        }
    }

    fn is_node_shape(&self, identifier: &Identifier) -> bool {
        self.shapes.node_shape(identifier).is_some()
    }

    fn property(&mut self, shape: &PropertyShape) -> AstProperty {
        let name = shape
            .annotations
            .name
            .clone()
            .or_else(|| shape.name.as_deref().map(to_camel_case))
            .unwrap_or_else(|| property_name(shape.path.predicate()));
        AstProperty {
            identifier: shape.identifier.clone(),
            name,
            comment: shape.comment.clone().or_else(|| shape.description.clone()),
            label: shape.label.clone(),
            path: shape.path.clone(),
            order: shape.order,
            visibility: shape.annotations.visibility.unwrap_or_default(),
            mutable: shape.annotations.mutable.unwrap_or(false),
            type_: self.property_type(shape),
        }
    }

    /// Item type wrapped by cardinality.
    fn property_type(&mut self, shape: &PropertyShape) -> AstType {
        let constraints = &shape.constraints;
        let item = self.item(constraints, shape.default_value.as_ref());
        let min_count = constraints.min_count.unwrap_or(0);
        match constraints.max_count {
            Some(1) if min_count >= 1 => item,
            Some(1) => AstType::Option(Box::new(item)),
            _ => match shape.annotations.collection {
                Some(CollectionKind::List) => AstType::List(Box::new(item)),
                _ => AstType::Set {
                    item: Box::new(item),
                    min_count,
                },
            },
        }
    }

    fn item(&mut self, constraints: &Constraints, default_value: Option<&Term>) -> AstType {
        if !constraints.and.is_empty() {
            let members = dedup(constraints.and.iter().flatten());
            return if members.iter().all(|m| self.is_node_shape(m)) {
                AstType::ObjectIntersection(members)
            } else {
                AstType::Intersection(members.iter().map(|m| self.member(m)).collect())
            };
        }

        let alternatives = dedup(constraints.or.iter().chain(&constraints.xone).flatten());
        if !alternatives.is_empty() {
            return if alternatives.iter().all(|m| self.is_node_shape(m)) {
                AstType::ObjectUnion(alternatives)
            } else {
                AstType::Union(alternatives.iter().map(|m| self.member(m)).collect())
            };
        }

        let referenced = dedup(constraints.nodes.iter().chain(&constraints.classes));
        let (object_refs, member_refs): (Vec<Identifier>, Vec<Identifier>) = referenced
            .into_iter()
            .partition(|r| self.is_node_shape(r));
        match object_refs.len() {
            0 => {}
            1 => return AstType::ObjectType(object_refs[0].clone()),
            _ => return AstType::ObjectIntersection(object_refs),
        }
        let shape_refs: Vec<&Identifier> = member_refs
            .iter()
            .filter(|r| self.shapes.member_shape(r).is_some())
            .collect();
        match shape_refs.as_slice() {
            [] => {}
            [single] => return self.member(single),
            many => return AstType::Intersection(many.iter().map(|m| self.member(m)).collect()),
        }

        let values: Vec<&Term> = constraints
            .in_
            .iter()
            .chain(&constraints.has_values)
            .chain(default_value)
            .collect();
        let all_literals = !values.is_empty() && values.iter().all(|t| t.as_literal().is_some());
        let all_identifiers =
            !values.is_empty() && values.iter().all(|t| t.as_identifier().is_some());

        let literal_node_kind = constraints.node_kind == Some(NodeKind::Literal);
        if constraints.datatype.is_some()
            || literal_node_kind
            || !constraints.language_in.is_empty()
            || all_literals
        {
            return AstType::Literal(literal_description(constraints, default_value));
        }

        let identifier_node_kind = matches!(
            constraints.node_kind,
            Some(NodeKind::BlankNode | NodeKind::BlankNodeOrIri | NodeKind::Iri)
        );
        if identifier_node_kind || !member_refs.is_empty() || all_identifiers {
            return AstType::Identifier {
                kinds: constraints
                    .node_kind
                    .map_or_else(IdentifierKind::any, IdentifierKind::from_node_kind),
                has_values: identifiers(&constraints.has_values),
                in_: identifiers(&constraints.in_),
            };
        }

        AstType::Term {
            node_kind: constraints.node_kind,
            has_values: constraints.has_values.clone(),
            in_: constraints.in_.clone(),
        }
    }

    /// The type of one member of a logical constraint.
    fn member(&mut self, identifier: &Identifier) -> AstType {
        if self.is_node_shape(identifier) {
            return AstType::ObjectType(identifier.clone());
        }
        let term = AstType::Term {
            node_kind: None,
            has_values: Vec::new(),
            in_: Vec::new(),
        };
        if self.visiting.contains(identifier) {
            debug!(shape = %identifier, "member shape refers back to itself");
            return term;
        }
        let Some(shape) = self.shapes.member_shape(identifier) else {
            debug!(shape = %identifier, "member shape was not decoded");
            return term;
        };
        self.visiting.push(identifier.clone());
        let type_ = self.item(&shape.constraints, None);
        self.visiting.pop();
        type_
    }
}

fn dedup<'i>(identifiers: impl Iterator<Item = &'i Identifier>) -> Vec<Identifier> {
    let mut seen = HashSet::new();
    identifiers
        .filter(|identifier| seen.insert(*identifier))
        .cloned()
        .collect()
}

fn identifiers(terms: &[Term]) -> Vec<Identifier> {
    terms
        .iter()
        .filter_map(Term::as_identifier)
        .cloned()
        .collect()
}

fn literal_description(constraints: &Constraints, default_value: Option<&Term>) -> LiteralDescription {
    LiteralDescription {
        datatype: constraints.datatype.clone(),
        default_value: default_value.cloned(),
        has_values: constraints.has_values.clone(),
        in_: constraints.in_.clone(),
        language_in: constraints.language_in.clone(),
        max_exclusive: constraints.max_exclusive.clone(),
        max_inclusive: constraints.max_inclusive.clone(),
        min_exclusive: constraints.min_exclusive.clone(),
        min_inclusive: constraints.min_inclusive.clone(),
        max_length: constraints.max_length,
        min_length: constraints.min_length,
        pattern: constraints.pattern.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::fixtures::{self, ex};
    use shapec_shapes::{
        NodeShapeAnnotations, PropertyPath, Visibility,
    };

    fn person_graph() -> AstGraph {
        fixtures::build(fixtures::AGENTS)
    }

    fn property<'g>(object_type: &'g AstObjectType, name: &str) -> &'g AstProperty {
        object_type
            .properties
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no property {name}"))
    }

    #[test]
    fn hierarchy_is_closed_transitively() {
        let graph = person_graph();
        let agent = graph.object_type(&ex("AgentShape")).unwrap();
        let person = graph.object_type(&ex("PersonShape")).unwrap();
        let employee = graph.object_type(&ex("EmployeeShape")).unwrap();

        assert!(agent.abstract_);
        assert!(agent.ancestors.is_empty());
        assert_eq!(
            agent.children,
            vec![ex("OrganizationShape"), ex("PersonShape")]
        );
        assert_eq!(
            agent.descendants,
            vec![ex("EmployeeShape"), ex("OrganizationShape"), ex("PersonShape")]
        );
        assert_eq!(person.parents, vec![ex("AgentShape")]);
        assert_eq!(person.children, vec![ex("EmployeeShape")]);
        assert_eq!(employee.ancestors, vec![ex("PersonShape"), ex("AgentShape")]);
        assert!(employee.descendants.is_empty());
    }

    #[test]
    fn non_shape_superclass_is_ignored() {
        let graph = person_graph();
        let organization = graph.object_type(&ex("OrganizationShape")).unwrap();
        assert_eq!(organization.parents, vec![ex("AgentShape")]);
    }

    #[test]
    fn names_and_annotations() {
        let graph = person_graph();
        let person = graph.object_type(&ex("PersonShape")).unwrap();
        assert_eq!(person.name, "Person");
        assert_eq!(
            person.identifier_kinds,
            BTreeSet::from([IdentifierKind::Iri])
        );
        let employee = graph.object_type(&ex("EmployeeShape")).unwrap();
        assert_eq!(employee.name, "StaffMember");
        assert_eq!(employee.discriminator_value.as_deref(), Some("staff"));

        let alias = property(person, "alias");
        assert_eq!(alias.path, PropertyPath::Predicate("http://example.com/nickname".into()));
        assert_eq!(alias.visibility, Visibility::Public);
        assert!(alias.mutable);
        assert_eq!(property(person, "knows").visibility, Visibility::Protected);
        // sh:name is camel-cased.
        assert!(person.properties.iter().any(|p| p.name == "bestFriend"));
    }

    #[test]
    fn cardinality_wraps_item_type() {
        let graph = person_graph();
        let agent = graph.object_type(&ex("AgentShape")).unwrap();
        let person = graph.object_type(&ex("PersonShape")).unwrap();

        assert!(matches!(property(agent, "name").type_, AstType::Literal(_)));
        assert_eq!(
            property(person, "knows").type_,
            AstType::Option(Box::new(AstType::ObjectType(ex("PersonShape"))))
        );
        assert!(matches!(
            &property(person, "alias").type_,
            AstType::Set { item, min_count: 0 } if matches!(**item, AstType::Literal(_))
        ));
        assert_eq!(
            property(person, "friend").type_,
            AstType::List(Box::new(AstType::ObjectType(ex("PersonShape"))))
        );
    }

    #[test]
    fn logical_constraints_become_unions_and_intersections() {
        let graph = person_graph();
        let person = graph.object_type(&ex("PersonShape")).unwrap();
        let organization = graph.object_type(&ex("OrganizationShape")).unwrap();

        assert_eq!(
            property(person, "contact").type_,
            AstType::ObjectUnion(vec![ex("PersonShape"), ex("OrganizationShape")])
        );
        match &property(organization, "tag").type_ {
            AstType::Option(inner) => match &**inner {
                AstType::Union(members) => {
                    assert_eq!(members.len(), 2);
                    assert!(members.iter().all(|m| matches!(m, AstType::Literal(_))));
                }
                other => panic!("expected a union, got {other:?}"),
            },
            other => panic!("expected an option, got {other:?}"),
        }
        assert_eq!(
            property(organization, "member").type_,
            AstType::Set {
                item: Box::new(AstType::ObjectIntersection(vec![
                    ex("PersonShape"),
                    ex("AgentShape")
                ])),
                min_count: 0,
            }
        );
    }

    #[test]
    fn node_kind_and_values_pick_identifier_or_term() {
        let graph = person_graph();
        let organization = graph.object_type(&ex("OrganizationShape")).unwrap();
        assert_eq!(
            property(organization, "homepage").type_,
            AstType::Option(Box::new(AstType::Identifier {
                kinds: BTreeSet::from([IdentifierKind::Iri]),
                has_values: Vec::new(),
                in_: Vec::new(),
            }))
        );
        assert!(matches!(
            &property(organization, "anything").type_,
            AstType::Set { item, .. } if matches!(**item, AstType::Term { node_kind: None, .. })
        ));
        // sh:class naming a non-shape class means "some resource".
        assert!(matches!(
            &property(organization, "located").type_,
            AstType::Option(inner) if matches!(**inner, AstType::Identifier { .. })
        ));
    }

    #[test]
    fn subclass_cycle_resolves_both_ways() {
        let graph = fixtures::build(fixtures::CYCLE);
        let a = graph.object_type(&ex("AShape")).unwrap();
        let b = graph.object_type(&ex("BShape")).unwrap();
        assert_eq!(a.ancestors, vec![ex("BShape")]);
        assert_eq!(a.descendants, vec![ex("BShape")]);
        assert_eq!(b.ancestors, vec![ex("AShape")]);
        assert_eq!(b.descendants, vec![ex("AShape")]);
    }

    #[test]
    fn literal_node_shape_is_rejected() {
        let shapes = fixtures::shapes(fixtures::LITERAL_NODE_SHAPE);
        let err = build(&shapes).unwrap_err();
        assert!(matches!(err, AstError::LiteralNodeShape { node_kind: NodeKind::Literal, .. }));
    }

    #[test]
    fn clashing_type_names_are_rejected() {
        let err = build(&fixtures::shapes(fixtures::CLASHING_NAMES)).unwrap_err();
        assert_eq!(
            err,
            AstError::DuplicateTypeName {
                name: "Cat".into(),
                first: ex("Cat"),
                second: ex("CatShape"),
            }
        );
    }

    #[test]
    fn clashing_discriminators_are_rejected_within_a_hierarchy() {
        let err = build(&fixtures::shapes(fixtures::CLASHING_DISCRIMINATORS)).unwrap_err();
        assert_eq!(
            err,
            AstError::DuplicateDiscriminator {
                value: "Cat".into(),
                root: ex("Animal"),
                first: ex("Cat"),
                second: ex("Lynx"),
            }
        );
    }

    #[test]
    fn clashing_property_names_are_rejected() {
        let err = build(&fixtures::shapes(fixtures::CLASHING_PROPERTIES)).unwrap_err();
        assert_eq!(
            err,
            AstError::DuplicatePropertyName {
                node_shape: ex("Thing"),
                name: "name".into(),
                first: ex("Thing-name1"),
                second: ex("Thing-name2"),
            }
        );
    }

    #[test]
    fn missing_property_shape_is_reported() {
        let mut shapes = ShapesGraph::default();
        shapes.insert_node_shape(NodeShape {
            identifier: ex("LonelyShape"),
            label: None,
            comment: None,
            constraints: Constraints::default(),
            closed: None,
            ignored_properties: Vec::new(),
            properties: vec![ex("LonelyShape-gone")],
            subclass_of: Vec::new(),
            annotations: NodeShapeAnnotations::default(),
        });
        assert_eq!(
            build(&shapes).unwrap_err(),
            AstError::MissingPropertyShape {
                node_shape: ex("LonelyShape"),
                property: ex("LonelyShape-gone"),
            }
        );
    }
}
