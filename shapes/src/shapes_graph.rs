//! The decoded contents of a whole shapes graph.

use std::collections::BTreeMap;

use sophia_api::graph::Graph;
use tracing::debug;

use crate::decode::DecodeOptions;
use crate::error::Result;
use crate::graph::instances_of;
use crate::model::iris::{SH_NODE_SHAPE, SH_PROPERTY_GROUP};
use crate::model::{Constraints, Identifier, NodeShape, PropertyGroup, PropertyShape};

/// Every node shape, property shape, and property group of a graph, keyed
/// by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapesGraph {
    node_shapes: BTreeMap<Identifier, NodeShape>,
    property_shapes: BTreeMap<Identifier, PropertyShape>,
    property_groups: BTreeMap<Identifier, PropertyGroup>,
    member_shapes: BTreeMap<Identifier, NodeShape>,
}

impl ShapesGraph {
    /// Decodes every `sh:NodeShape` subject of `graph`, the property shapes
    /// they reference through `sh:property`, and every `sh:PropertyGroup`.
    ///
    /// Property shapes are decoded without the `rdf:type` check: they are
    /// identified by being the object of `sh:property`, and are commonly
    /// written as untyped blank nodes. The same goes for member shapes, the
    /// shapes named by `sh:and`, `sh:or`, `sh:xone`, `sh:not` and `sh:node`
    /// that are not themselves typed `sh:NodeShape`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`](crate::DecodeError) hit while decoding
    /// any record.
    pub fn from_graph<G: Graph>(graph: &G, options: &DecodeOptions) -> Result<Self> {
        let mut shapes = Self::default();

        for identifier in instances_of(graph, SH_NODE_SHAPE)? {
            let shape = NodeShape::decode(graph, &identifier, options)?;
            shapes.node_shapes.insert(identifier, shape);
        }

        let property_options = options.ignoring_rdf_type();
        let referenced: Vec<Identifier> = shapes
            .node_shapes
            .values()
            .flat_map(|shape| shape.properties.iter().cloned())
            .collect();
        for identifier in referenced {
            if shapes.property_shapes.contains_key(&identifier) {
                continue;
            }
            let shape = PropertyShape::decode(graph, &identifier, &property_options)?;
            shapes.property_shapes.insert(identifier, shape);
        }

        for identifier in instances_of(graph, SH_PROPERTY_GROUP)? {
            let group = PropertyGroup::decode(graph, &identifier, options)?;
            shapes.property_groups.insert(identifier, group);
        }

        let mut pending: Vec<Identifier> = shapes
            .node_shapes
            .values()
            .map(|shape| &shape.constraints)
            .chain(shapes.property_shapes.values().map(|shape| &shape.constraints))
            .flat_map(Constraints::shape_references)
            .cloned()
            .collect();
        while let Some(identifier) = pending.pop() {
            if shapes.node_shapes.contains_key(&identifier)
                || shapes.member_shapes.contains_key(&identifier)
            {
                continue;
            }
            let shape = NodeShape::decode(graph, &identifier, &property_options)?;
            pending.extend(shape.constraints.shape_references().cloned());
            shapes.member_shapes.insert(identifier, shape);
        }

        debug!(
            node_shapes = shapes.node_shapes.len(),
            property_shapes = shapes.property_shapes.len(),
            property_groups = shapes.property_groups.len(),
            member_shapes = shapes.member_shapes.len(),
            "decoded shapes graph"
        );
        Ok(shapes)
    }

    /// Looks up a node shape by identifier.
    #[must_use]
    pub fn node_shape(&self, identifier: &Identifier) -> Option<&NodeShape> {
        self.node_shapes.get(identifier)
    }

    /// Looks up a property shape by identifier.
    #[must_use]
    pub fn property_shape(&self, identifier: &Identifier) -> Option<&PropertyShape> {
        self.property_shapes.get(identifier)
    }

    /// Looks up a property group by identifier.
    #[must_use]
    pub fn property_group(&self, identifier: &Identifier) -> Option<&PropertyGroup> {
        self.property_groups.get(identifier)
    }

    /// Looks up an untyped shape referenced from a logical constraint or
    /// `sh:node`.
    #[must_use]
    pub fn member_shape(&self, identifier: &Identifier) -> Option<&NodeShape> {
        self.member_shapes.get(identifier)
    }

    /// All node shapes, in identifier order.
    pub fn node_shapes(&self) -> impl Iterator<Item = &NodeShape> {
        self.node_shapes.values()
    }

    /// All property shapes, in identifier order.
    pub fn property_shapes(&self) -> impl Iterator<Item = &PropertyShape> {
        self.property_shapes.values()
    }

    /// All property groups, in identifier order.
    pub fn property_groups(&self) -> impl Iterator<Item = &PropertyGroup> {
        self.property_groups.values()
    }

    /// Adds a node shape, replacing any shape with the same identifier.
    pub fn insert_node_shape(&mut self, shape: NodeShape) {
        self.node_shapes.insert(shape.identifier.clone(), shape);
    }

    /// Adds a property shape, replacing any shape with the same identifier.
    pub fn insert_property_shape(&mut self, shape: PropertyShape) {
        self.property_shapes.insert(shape.identifier.clone(), shape);
    }
}
