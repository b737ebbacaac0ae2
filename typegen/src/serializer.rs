//! JSON rendition of a resolved object model.
//!
//! External code emitters read this document instead of linking against the
//! engine. Object type references are written as identifiers, so cyclic
//! models serialize to finite documents.

use std::rc::Rc;

use serde_json::{json, Map, Value};
use shapec_ast::IdentifierKind;
use shapec_shapes::{Identifier, Literal, PropertyPath, Term};

use crate::object_type::ObjectType;
use crate::property::{Property, PropertyKind};
use crate::types::{LiteralType, Number, NumberKind, Type};

/// Serializes object types, in the given order, to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(object_types: &[Rc<ObjectType>]) -> Value {
    json!({
        "objectTypes": object_types.iter().map(|t| object_type_json(t)).collect::<Vec<_>>()
    })
}

fn identifier_json(identifier: &Identifier) -> Value {
    match identifier {
        Identifier::Iri(iri) => json!({ "termType": "NamedNode", "value": iri }),
        Identifier::BlankNode(label) => json!({ "termType": "BlankNode", "value": label }),
    }
}

fn literal_json(literal: &Literal) -> Value {
    let mut node = json!({
        "termType": "Literal",
        "value": literal.lexical_form,
        "datatype": literal.datatype,
    });
    if let (Some(language), Value::Object(map)) = (&literal.language, &mut node) {
        map.insert("language".to_owned(), json!(language));
    }
    node
}

fn term_json(term: &Term) -> Value {
    match term {
        Term::Identifier(identifier) => identifier_json(identifier),
        Term::Literal(literal) => literal_json(literal),
    }
}

fn references(types: &[Rc<ObjectType>]) -> Vec<Value> {
    types.iter().map(|t| identifier_json(t.identifier())).collect()
}

fn object_type_json(object_type: &ObjectType) -> Value {
    json!({
        "identifier": identifier_json(object_type.identifier()),
        "name": object_type.name(),
        "label": object_type.label(),
        "comment": object_type.comment(),
        "abstract": object_type.is_abstract(),
        "discriminatorValue": object_type.discriminator_value(),
        "identifierMintingStrategy": object_type.identifier_minting_strategy().map(|s| s.as_str()),
        "identifierKinds": identifier_kinds_json(object_type.identifier_kinds()),
        "identifierIn": object_type.identifier_in().iter().map(identifier_json).collect::<Vec<_>>(),
        "ancestors": references(object_type.ancestors()),
        "parents": references(object_type.parents()),
        "children": references(object_type.children()),
        "descendants": references(object_type.descendants()),
        "properties": object_type.properties().iter().map(|p| property_json(p)).collect::<Vec<_>>(),
    })
}

fn identifier_kinds_json<'k>(kinds: impl IntoIterator<Item = &'k IdentifierKind>) -> Vec<&'static str> {
    kinds
        .into_iter()
        .map(|kind| match kind {
            IdentifierKind::BlankNode => "BlankNode",
            IdentifierKind::Iri => "IRI",
        })
        .collect()
}

fn property_json(property: &Property) -> Value {
    let mut node = Map::new();
    node.insert("name".to_owned(), json!(property.name));
    node.insert("visibility".to_owned(), json!(property.visibility.as_str()));
    match &property.kind {
        PropertyKind::IdentifierPrefix => {
            node.insert("kind".to_owned(), json!("identifierPrefix"));
        }
        PropertyKind::Identifier { type_ } => {
            node.insert("kind".to_owned(), json!("identifier"));
            node.insert("type".to_owned(), type_json(type_));
        }
        PropertyKind::TypeDiscriminator { values, override_ } => {
            node.insert("kind".to_owned(), json!("typeDiscriminator"));
            node.insert("values".to_owned(), json!(values));
            node.insert("override".to_owned(), json!(override_));
        }
        PropertyKind::Shape(shape) => {
            let (path, inverse) = match &shape.path {
                PropertyPath::Predicate(iri) => (iri, false),
                PropertyPath::Inverse(iri) => (iri, true),
            };
            node.insert("kind".to_owned(), json!("shape"));
            node.insert("identifier".to_owned(), identifier_json(&shape.identifier));
            node.insert(
                "path".to_owned(),
                json!({ "predicate": path, "inverse": inverse }),
            );
            node.insert("order".to_owned(), json!(shape.order));
            node.insert("mutable".to_owned(), json!(shape.mutable));
            node.insert("label".to_owned(), json!(shape.label));
            node.insert("comment".to_owned(), json!(shape.comment));
            node.insert("type".to_owned(), type_json(&shape.type_));
        }
    }
    Value::Object(node)
}

fn values_json<T>(literal: &LiteralType<T>, value: impl Fn(&T) -> Value) -> Value {
    json!({
        "datatype": literal.datatype,
        "defaultValue": literal.default_value.as_ref().map(&value),
        "hasValues": literal.has_values.iter().map(&value).collect::<Vec<_>>(),
        "in": literal.in_.iter().map(&value).collect::<Vec<_>>(),
    })
}

fn with_kind(kind: &str, mut node: Value) -> Value {
    if let Value::Object(map) = &mut node {
        map.insert("kind".to_owned(), json!(kind));
    }
    node
}

/// Integers outside the JSON-safe 64-bit range are written as decimal
/// strings, non-finite floats as their XSD lexical forms.
fn number_json(number: &Number) -> Value {
    match *number {
        Number::Integer(n) => {
            if let Ok(n) = i64::try_from(n) {
                json!(n)
            } else if let Ok(n) = u64::try_from(n) {
                json!(n)
            } else {
                json!(n.to_string())
            }
        }
        Number::Float(n) if n.is_nan() => json!("NaN"),
        Number::Float(n) if n == f64::INFINITY => json!("INF"),
        Number::Float(n) if n == f64::NEG_INFINITY => json!("-INF"),
        Number::Float(n) => json!(n),
    }
}

/// Renders one resolved type.
#[must_use]
pub fn type_json(type_: &Type) -> Value {
    let kind = type_.kind();
    match type_ {
        Type::Identifier {
            kinds,
            has_values,
            in_,
        } => json!({
            "kind": kind,
            "identifierKinds": identifier_kinds_json(kinds),
            "hasValues": has_values.iter().map(identifier_json).collect::<Vec<_>>(),
            "in": in_.iter().map(identifier_json).collect::<Vec<_>>(),
        }),
        Type::List(item) | Type::Option(item) => json!({ "kind": kind, "item": type_json(item) }),
        Type::Set { item, min_count } => {
            json!({ "kind": kind, "item": type_json(item), "minCount": min_count })
        }
        Type::Union(members) => json!({
            "kind": kind,
            "members": members.iter().map(type_json).collect::<Vec<_>>(),
        }),
        Type::Term {
            node_kind,
            has_values,
            in_,
        } => json!({
            "kind": kind,
            "nodeKind": node_kind.map(|n| n.iri()),
            "hasValues": has_values.iter().map(term_json).collect::<Vec<_>>(),
            "in": in_.iter().map(term_json).collect::<Vec<_>>(),
        }),
        Type::ObjectType(object_type) => json!({
            "kind": kind,
            "identifier": identifier_json(object_type.identifier()),
            "name": object_type.name(),
        }),
        Type::ObjectUnion(members) => json!({
            "kind": kind,
            "members": references(members),
        }),
        Type::Boolean(literal) => with_kind(kind, values_json(literal, |b| json!(b))),
        Type::Date(literal) => with_kind(kind, values_json(literal, |d| json!(d.to_string()))),
        Type::DateTime(literal) => {
            with_kind(kind, values_json(literal, |d| json!(d.to_rfc3339())))
        }
        Type::Number(number) => {
            let mut node = with_kind(kind, values_json(&number.literal, number_json));
            if let Value::Object(map) = &mut node {
                let integer = number.kind == NumberKind::Integer;
                map.insert("integer".to_owned(), json!(integer));
            }
            node
        }
        Type::String(literal) => with_kind(kind, values_json(literal, |s| json!(s))),
        Type::Literal(literal) => json!({
            "kind": kind,
            "datatypes": literal.datatypes,
            "defaultValue": literal.default_value.as_ref().map(literal_json),
            "hasValues": literal.has_values.iter().map(literal_json).collect::<Vec<_>>(),
            "in": literal.in_.iter().map(literal_json).collect::<Vec<_>>(),
            "languageIn": literal.language_in,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::factory::TypeFactory;
    use shapec_ast::{AstGraph, AstObjectType, AstProperty, AstType, LiteralDescription};
    use shapec_shapes::model::iris::{XSD_DOUBLE, XSD_INTEGER};
    use shapec_shapes::{MintingStrategy, Visibility};

    fn ex(local: &str) -> Identifier {
        Identifier::iri(format!("http://example.com/{local}"))
    }

    fn node_shape(local: &str) -> AstObjectType {
        AstObjectType {
            identifier: ex(local),
            name: local.to_owned(),
            comment: None,
            label: None,
            abstract_: false,
            identifier_kinds: IdentifierKind::any(),
            identifier_in: Vec::new(),
            identifier_minting_strategy: Some(MintingStrategy::Uuidv4),
            discriminator_value: None,
            ancestors: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            descendants: Vec::new(),
            properties: Vec::new(),
        }
    }

    #[test]
    fn renders_cyclic_model() {
        let mut node = node_shape("Node");
        node.properties = vec![
            AstProperty {
                identifier: ex("Node-next"),
                name: "next".to_owned(),
                comment: None,
                label: None,
                path: PropertyPath::Inverse("http://example.com/previous".to_owned()),
                order: Some(1.0),
                visibility: Visibility::Public,
                mutable: true,
                type_: AstType::Option(Box::new(AstType::ObjectType(ex("Node")))),
            },
            AstProperty {
                identifier: ex("Node-weight"),
                name: "weight".to_owned(),
                comment: None,
                label: None,
                path: PropertyPath::Predicate("http://example.com/weight".to_owned()),
                order: Some(2.0),
                visibility: Visibility::Public,
                mutable: false,
                type_: AstType::Literal(LiteralDescription {
                    datatype: Some(XSD_INTEGER.to_owned()),
                    default_value: Some(Term::Literal(Literal::typed("3", XSD_INTEGER))),
                    ..LiteralDescription::default()
                }),
            },
        ];
        let mut graph = AstGraph::default();
        graph.insert(node);
        let mut factory = TypeFactory::new(&graph);
        let types = factory.object_types().unwrap();
        let json = to_json(&types);

        let node = &json["objectTypes"][0];
        assert_eq!(node["name"], "Node");
        assert_eq!(node["identifierMintingStrategy"], "uuidv4");
        assert_eq!(node["identifier"]["value"], "http://example.com/Node");
        let properties = node["properties"].as_array().unwrap();
        let names: Vec<&str> = properties
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["$identifierPrefix", "$identifier", "$type", "next", "weight"]
        );
        assert_eq!(properties[2]["values"], json!(["Node"]));
        assert_eq!(properties[3]["path"]["inverse"], true);
        assert_eq!(properties[3]["type"]["item"]["kind"], "ObjectType");
        assert_eq!(properties[4]["type"]["kind"], "Number");
        assert_eq!(properties[4]["type"]["defaultValue"], 3);
        assert_eq!(properties[4]["type"]["integer"], true);
    }

    #[test]
    fn numbers_outside_plain_json_keep_their_value() {
        let number = |n| number_json(&n);
        assert_eq!(number(Number::Float(f64::INFINITY)), json!("INF"));
        assert_eq!(number(Number::Float(f64::NEG_INFINITY)), json!("-INF"));
        assert_eq!(number(Number::Float(f64::NAN)), json!("NaN"));
        assert_eq!(number(Number::Float(0.5)), json!(0.5));
        assert_eq!(
            number(Number::Integer(18_446_744_073_709_551_615)),
            json!(18_446_744_073_709_551_615_u64)
        );
        assert_eq!(
            number(Number::Integer(-18_446_744_073_709_551_616)),
            json!("-18446744073709551616")
        );

        let mut node = node_shape("Gauge");
        node.properties = vec![AstProperty {
            identifier: ex("Gauge-limit"),
            name: "limit".to_owned(),
            comment: None,
            label: None,
            path: PropertyPath::Predicate("http://example.com/limit".to_owned()),
            order: None,
            visibility: Visibility::Public,
            mutable: false,
            type_: AstType::Literal(LiteralDescription {
                datatype: Some(XSD_DOUBLE.to_owned()),
                default_value: Some(Term::Literal(Literal::typed("INF", XSD_DOUBLE))),
                ..LiteralDescription::default()
            }),
        }];
        let mut graph = AstGraph::default();
        graph.insert(node);
        let mut factory = TypeFactory::new(&graph);
        let json = to_json(&factory.object_types().unwrap());
        let limit = &json["objectTypes"][0]["properties"][3];
        assert_eq!(limit["name"], "limit");
        assert_eq!(limit["type"]["defaultValue"], "INF");
    }
}
