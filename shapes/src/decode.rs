//! Shape record decoding.
//!
//! Each record kind has a `decode` constructor that reads one resource's
//! predicates. Decoding short-circuits: the first field that fails aborts the
//! whole record with that field's error. Absent optional fields are never
//! errors.

use sophia_api::graph::Graph;
use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::graph::Resource;
use crate::model::iris::*;
use crate::model::{
    CollectionKind, Constraints, Identifier, Literal, MintingStrategy, NodeKind, NodeShape,
    NodeShapeAnnotations, PropertyGroup, PropertyPath, PropertyShape, PropertyShapeAnnotations,
    Shape, Term, Visibility,
};

/// Caller-supplied decoding options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Language allow-list for language-sensitive literal fields. Empty means
    /// every literal is considered.
    pub languages: Vec<String>,
    /// Skip the `rdf:type` check against the expected shape class.
    pub ignore_rdf_type: bool,
}

impl DecodeOptions {
    /// Returns a copy of these options with the `rdf:type` check disabled.
    #[must_use]
    pub fn ignoring_rdf_type(&self) -> Self {
        Self {
            languages: self.languages.clone(),
            ignore_rdf_type: true,
        }
    }

    fn accepts(&self, literal: &Literal) -> bool {
        if self.languages.is_empty() {
            return true;
        }
        let language = literal.language.as_deref().unwrap_or("");
        self.languages.iter().any(|allowed| allowed == language)
    }
}

struct Decoder<'a, G> {
    resource: Resource<'a, G>,
    options: &'a DecodeOptions,
}

impl<'a, G: Graph> Decoder<'a, G> {
    fn new(graph: &'a G, identifier: &'a Identifier, options: &'a DecodeOptions) -> Self {
        Self {
            resource: Resource::new(graph, identifier),
            options,
        }
    }

    fn focus(&self) -> &'a Identifier {
        self.resource.identifier()
    }

    fn expect_class(&self, class: &'static str) -> Result<()> {
        if self.options.ignore_rdf_type || self.resource.has_type(class)? {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedClass {
                focus: self.focus().clone(),
                expected: class,
            })
        }
    }

    fn first(&self, predicate: &str) -> Result<Option<Term>> {
        Ok(self.resource.objects(predicate)?.into_iter().next())
    }

    fn literal_values(&self, predicate: &str) -> Result<Vec<Literal>> {
        self.resource
            .objects(predicate)?
            .into_iter()
            .map(|term| match term {
                Term::Literal(literal) => Ok(literal),
                Term::Identifier(identifier) => Err(DecodeError::value(
                    self.focus(),
                    predicate,
                    format!("expected a literal, found {identifier}"),
                )),
            })
            .collect()
    }

    fn count(&self, predicate: &str) -> Result<Option<u64>> {
        let Some(literal) = self.literal_values(predicate)?.into_iter().next() else {
            return Ok(None);
        };
        literal
            .lexical_form
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| {
                DecodeError::value(
                    self.focus(),
                    predicate,
                    format!("expected a non-negative integer, found {literal}"),
                )
            })
    }

    fn number(&self, predicate: &str) -> Result<Option<f64>> {
        let Some(literal) = self.literal_values(predicate)?.into_iter().next() else {
            return Ok(None);
        };
        literal
            .lexical_form
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| {
                DecodeError::value(
                    self.focus(),
                    predicate,
                    format!("expected a number, found {literal}"),
                )
            })
    }

    fn boolean(&self, predicate: &str) -> Result<Option<bool>> {
        let Some(literal) = self.literal_values(predicate)?.into_iter().next() else {
            return Ok(None);
        };
        match literal.lexical_form.trim() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(DecodeError::value(
                self.focus(),
                predicate,
                format!("expected a boolean, found {literal}"),
            )),
        }
    }

    fn string(&self, predicate: &str) -> Result<Option<String>> {
        Ok(self
            .literal_values(predicate)?
            .into_iter()
            .next()
            .map(|literal| literal.lexical_form))
    }

    /// Language-filtered literal: only literals accepted by the allow-list
    /// are considered; none surviving yields `None`.
    fn language_literal(&self, predicate: &str) -> Result<Option<Literal>> {
        let literal = self
            .literal_values(predicate)?
            .into_iter()
            .find(|literal| self.options.accepts(literal));
        if literal.is_none() {
            trace!(focus = %self.focus(), predicate, "no literal survived language filter");
        }
        Ok(literal)
    }

    fn language_string(&self, predicate: &str) -> Result<Option<String>> {
        Ok(self
            .language_literal(predicate)?
            .map(|literal| literal.lexical_form))
    }

    fn identifier(&self, predicate: &str) -> Result<Option<Identifier>> {
        Ok(self.identifiers(predicate)?.into_iter().next())
    }

    fn identifiers(&self, predicate: &str) -> Result<Vec<Identifier>> {
        self.resource
            .objects(predicate)?
            .into_iter()
            .map(|term| self.expect_identifier(predicate, term))
            .collect()
    }

    fn iri(&self, predicate: &str) -> Result<Option<String>> {
        match self.identifier(predicate)? {
            None => Ok(None),
            Some(Identifier::Iri(iri)) => Ok(Some(iri)),
            Some(blank @ Identifier::BlankNode(_)) => Err(DecodeError::value(
                self.focus(),
                predicate,
                format!("expected an IRI, found {blank}"),
            )),
        }
    }

    fn expect_identifier(&self, predicate: &str, term: Term) -> Result<Identifier> {
        match term {
            Term::Identifier(identifier) => Ok(identifier),
            Term::Literal(literal) => Err(DecodeError::value(
                self.focus(),
                predicate,
                format!("expected an IRI or blank node, found {literal}"),
            )),
        }
    }

    /// The members of the single `rdf:List` held by `predicate`.
    fn list(&self, predicate: &str) -> Result<Vec<Term>> {
        match self.first(predicate)? {
            None => Ok(Vec::new()),
            Some(head) => self.resource.list(predicate, &head),
        }
    }

    fn identifier_list(&self, predicate: &str) -> Result<Vec<Identifier>> {
        self.list(predicate)?
            .into_iter()
            .map(|term| self.expect_identifier(predicate, term))
            .collect()
    }

    /// One identifier list per value of `predicate` (`sh:and`, `sh:or`, `sh:xone`).
    fn list_of_lists(&self, predicate: &str) -> Result<Vec<Vec<Identifier>>> {
        self.resource
            .objects(predicate)?
            .iter()
            .map(|head| {
                self.resource
                    .list(predicate, head)?
                    .into_iter()
                    .map(|term| self.expect_identifier(predicate, term))
                    .collect()
            })
            .collect()
    }

    /// Closed-enumeration field: the IRI must map through `from_iri`.
    fn enumerated<T>(
        &self,
        predicate: &str,
        expected: &[&'static str],
        from_iri: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(term) = self.first(predicate)? else {
            return Ok(None);
        };
        match term.as_iri().and_then(&from_iri) {
            Some(value) => Ok(Some(value)),
            None => Err(DecodeError::MistypedValue {
                focus: self.focus().clone(),
                predicate: predicate.to_owned(),
                actual: term,
                expected: expected.to_vec(),
            }),
        }
    }

    fn node_kind(&self) -> Result<Option<NodeKind>> {
        let expected = NodeKind::ALL.map(NodeKind::iri);
        self.enumerated(SH_NODE_KIND, &expected, NodeKind::from_iri)
    }

    fn constraints(&self) -> Result<Constraints> {
        Ok(Constraints {
            and: self.list_of_lists(SH_AND)?,
            classes: self.identifiers(SH_CLASS)?,
            datatype: self.iri(SH_DATATYPE)?,
            has_values: self.resource.objects(SH_HAS_VALUE)?,
            in_: self.list(SH_IN)?,
            language_in: self
                .list(SH_LANGUAGE_IN)?
                .into_iter()
                .filter_map(|term| term.as_literal().map(|l| l.lexical_form.clone()))
                .collect(),
            max_count: self.count(SH_MAX_COUNT)?,
            max_exclusive: self.language_literal(SH_MAX_EXCLUSIVE)?,
            max_inclusive: self.language_literal(SH_MAX_INCLUSIVE)?,
            max_length: self.count(SH_MAX_LENGTH)?,
            min_count: self.count(SH_MIN_COUNT)?,
            min_exclusive: self.language_literal(SH_MIN_EXCLUSIVE)?,
            min_inclusive: self.language_literal(SH_MIN_INCLUSIVE)?,
            min_length: self.count(SH_MIN_LENGTH)?,
            node_kind: self.node_kind()?,
            nodes: self.identifiers(SH_NODE)?,
            not: self.identifiers(SH_NOT)?,
            or: self.list_of_lists(SH_OR)?,
            pattern: self.string(SH_PATTERN)?,
            xone: self.list_of_lists(SH_XONE)?,
        })
    }

    fn path(&self) -> Result<PropertyPath> {
        let Some(term) = self.first(SH_PATH)? else {
            return Err(DecodeError::value(self.focus(), SH_PATH, "missing sh:path"));
        };
        match term {
            Term::Identifier(Identifier::Iri(iri)) => Ok(PropertyPath::Predicate(iri)),
            Term::Identifier(path @ Identifier::BlankNode(_)) => {
                let inverse = Resource::new(self.resource.graph(), &path)
                    .objects(SH_INVERSE_PATH)?
                    .into_iter()
                    .next();
                match inverse.as_ref().and_then(Term::as_iri) {
                    Some(iri) => Ok(PropertyPath::Inverse(iri.to_owned())),
                    None => Err(DecodeError::value(
                        self.focus(),
                        SH_PATH,
                        format!("unsupported property path {path}"),
                    )),
                }
            }
            Term::Literal(literal) => Err(DecodeError::value(
                self.focus(),
                SH_PATH,
                format!("expected a predicate IRI, found {literal}"),
            )),
        }
    }
}

impl NodeShape {
    /// Decodes the node shape `identifier` from `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered, or
    /// [`DecodeError::UnexpectedClass`] if the resource is not a `sh:NodeShape`
    /// and `options.ignore_rdf_type` is false.
    pub fn decode<G: Graph>(
        graph: &G,
        identifier: &Identifier,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let d = Decoder::new(graph, identifier, options);
        d.expect_class(SH_NODE_SHAPE)?;
        trace!(focus = %identifier, "decoding node shape");
        Ok(Self {
            identifier: identifier.clone(),
            label: d.language_string(RDFS_LABEL)?,
            comment: d.language_string(RDFS_COMMENT)?,
            constraints: d.constraints()?,
            closed: d.boolean(SH_CLOSED)?,
            ignored_properties: d.identifier_list(SH_IGNORED_PROPERTIES)?,
            properties: d.identifiers(SH_PROPERTY)?,
            subclass_of: d.identifiers(RDFS_SUB_CLASS_OF)?,
            annotations: NodeShapeAnnotations {
                abstract_: d.boolean(SHAPEC_ABSTRACT)?,
                discriminator_value: d.string(SHAPEC_DISCRIMINATOR_VALUE)?,
                identifier_minting_strategy: d.enumerated(
                    SHAPEC_IDENTIFIER_MINTING_STRATEGY,
                    &MintingStrategy::ALL.map(MintingStrategy::iri),
                    MintingStrategy::from_iri,
                )?,
                name: d.string(SHAPEC_NAME)?,
            },
        })
    }
}

impl PropertyShape {
    /// Decodes the property shape `identifier` from `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered (a missing or unsupported
    /// `sh:path` included), or [`DecodeError::UnexpectedClass`] if the resource
    /// is not a `sh:PropertyShape` and `options.ignore_rdf_type` is false.
    pub fn decode<G: Graph>(
        graph: &G,
        identifier: &Identifier,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let d = Decoder::new(graph, identifier, options);
        d.expect_class(SH_PROPERTY_SHAPE)?;
        trace!(focus = %identifier, "decoding property shape");
        Ok(Self {
            identifier: identifier.clone(),
            label: d.language_string(RDFS_LABEL)?,
            comment: d.language_string(RDFS_COMMENT)?,
            constraints: d.constraints()?,
            path: d.path()?,
            default_value: d.first(SH_DEFAULT_VALUE)?,
            description: d.language_string(SH_DESCRIPTION)?,
            group: d.identifier(SH_GROUP)?,
            name: d.language_string(SH_NAME)?,
            order: d.number(SH_ORDER)?,
            unique_lang: d.boolean(SH_UNIQUE_LANG)?,
            annotations: PropertyShapeAnnotations {
                collection: d.enumerated(
                    SHAPEC_COLLECTION,
                    &[SHAPEC_SET, SHAPEC_LIST],
                    CollectionKind::from_iri,
                )?,
                mutable: d.boolean(SHAPEC_MUTABLE)?,
                name: d.string(SHAPEC_NAME)?,
                visibility: d.enumerated(
                    SHAPEC_VISIBILITY,
                    &[SHAPEC_PRIVATE, SHAPEC_PROTECTED, SHAPEC_PUBLIC],
                    Visibility::from_iri,
                )?,
            },
        })
    }
}

impl PropertyGroup {
    /// Decodes the property group `identifier` from `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered, or
    /// [`DecodeError::UnexpectedClass`] if the resource is not a
    /// `sh:PropertyGroup` and `options.ignore_rdf_type` is false.
    pub fn decode<G: Graph>(
        graph: &G,
        identifier: &Identifier,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let d = Decoder::new(graph, identifier, options);
        d.expect_class(SH_PROPERTY_GROUP)?;
        Ok(Self {
            identifier: identifier.clone(),
            label: d.language_string(RDFS_LABEL)?,
            comment: d.language_string(RDFS_COMMENT)?,
            order: d.number(SH_ORDER)?,
        })
    }
}

type Candidate<G> = fn(&G, &Identifier, &DecodeOptions) -> Result<Shape>;

impl Shape {
    /// Decodes `identifier` as whichever shape kind accepts it.
    ///
    /// Candidates are tried in order (node shape, property shape, property
    /// group) and the first success wins. If every candidate fails, the
    /// error of the first candidate whose class matched is returned, so a
    /// typed shape reports its real field error; only when no class matched
    /// is the first [`DecodeError::UnexpectedClass`] returned. Class
    /// membership is what
    /// tells the candidates apart, so `rdf:type` is always checked here
    /// regardless of `options.ignore_rdf_type`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first class-matching candidate, or the first
    /// candidate's [`DecodeError::UnexpectedClass`], when no candidate
    /// succeeds.
    pub fn decode<G: Graph>(
        graph: &G,
        identifier: &Identifier,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let candidates: [Candidate<G>; 3] = [
            |g, id, o| NodeShape::decode(g, id, o).map(Shape::NodeShape),
            |g, id, o| PropertyShape::decode(g, id, o).map(Shape::PropertyShape),
            |g, id, o| PropertyGroup::decode(g, id, o).map(Shape::PropertyGroup),
        ];
        let options = DecodeOptions {
            languages: options.languages.clone(),
            ignore_rdf_type: false,
        };
        let mut class_error = None;
        let mut field_error = None;
        for candidate in candidates {
            match candidate(graph, identifier, &options) {
                Ok(shape) => return Ok(shape),
                Err(error @ DecodeError::UnexpectedClass { .. }) => {
                    class_error.get_or_insert(error);
                }
                Err(error) => {
                    field_error.get_or_insert(error);
                }
            }
        }
        Err(field_error.or(class_error).unwrap_or_else(|| {
            DecodeError::value(identifier, RDF_TYPE, "no shape decoder accepted the resource")
        }))
    }
}
