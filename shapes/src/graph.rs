//! Read access to a shapes graph through the sophia `Graph` API.
//!
//! Everything the decoder needs from the graph goes through [`Resource`]:
//! the objects of one predicate on one focus node, and `rdf:List` walking.
//! Objects are converted into the owned [`Term`] model as they are read.

use std::collections::HashSet;

use sophia_api::graph::Graph;
use sophia_api::term::matcher::Any;
use sophia_api::term::{BnodeId, IriRef, Term as RdfTerm, TermKind};
use sophia_api::triple::Triple;

use crate::error::{DecodeError, Result};
use crate::model::iris::{RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE};
use crate::model::{Identifier, Literal, Term};

/// Converts a sophia term into the owned [`Term`] model.
///
/// Returns `None` for quoted triples and variables, which never appear as
/// shape values.
pub fn term_from_rdf<T: RdfTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| Term::Identifier(Identifier::Iri(iri.as_str().to_owned()))),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::Identifier(Identifier::BlankNode(id.as_str().to_owned()))),
        TermKind::Literal => {
            let lexical_form = term.lexical_form()?.to_string();
            let datatype = term.datatype()?.as_str().to_owned();
            let language = term.language_tag().map(|tag| tag.as_str().to_owned());
            Some(Term::Literal(Literal {
                lexical_form,
                datatype,
                language,
            }))
        }
        _ => None,
    }
}

fn collect_objects<I, T, E>(triples: I, out: &mut Vec<Term>) -> Result<()>
where
    I: Iterator<Item = std::result::Result<T, E>>,
    T: Triple,
    E: std::error::Error,
{
    for triple in triples {
        let triple = triple.map_err(|e| DecodeError::Graph(e.to_string()))?;
        if let Some(term) = term_from_rdf(triple.o()) {
            out.push(term);
        }
    }
    Ok(())
}

fn collect_subjects<I, T, E>(triples: I, out: &mut Vec<Identifier>) -> Result<()>
where
    I: Iterator<Item = std::result::Result<T, E>>,
    T: Triple,
    E: std::error::Error,
{
    for triple in triples {
        let triple = triple.map_err(|e| DecodeError::Graph(e.to_string()))?;
        if let Some(Term::Identifier(identifier)) = term_from_rdf(triple.s()) {
            out.push(identifier);
        }
    }
    Ok(())
}

/// Returns every subject typed with `class`, sorted and deduplicated.
///
/// # Errors
///
/// Returns [`DecodeError::Graph`] if the graph fails while being iterated.
pub fn instances_of<G: Graph>(graph: &G, class: &str) -> Result<Vec<Identifier>> {
    let mut subjects = Vec::new();
    collect_subjects(
        graph.triples_matching(
            Any,
            [IriRef::new_unchecked(RDF_TYPE)],
            [IriRef::new_unchecked(class)],
        ),
        &mut subjects,
    )?;
    subjects.sort();
    subjects.dedup();
    Ok(subjects)
}

/// One focus node of a graph.
pub struct Resource<'a, G> {
    graph: &'a G,
    identifier: &'a Identifier,
}

impl<'a, G: Graph> Resource<'a, G> {
    /// Creates a view of `identifier` in `graph`.
    pub fn new(graph: &'a G, identifier: &'a Identifier) -> Self {
        Self { graph, identifier }
    }

    /// The focus node.
    pub fn identifier(&self) -> &'a Identifier {
        self.identifier
    }

    /// The graph this resource is read from.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the objects of `predicate` on this resource, sorted and
    /// deduplicated so repeated decodes see the same order.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Graph`] if the graph fails while being iterated.
    pub fn objects(&self, predicate: &str) -> Result<Vec<Term>> {
        let mut out = Vec::new();
        objects_of(self.graph, self.identifier, predicate, &mut out)?;
        out.sort();
        out.dedup();
        Ok(out)
    }

    /// Returns true if this resource has `rdf:type <class>`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Graph`] if the graph fails while being iterated.
    pub fn has_type(&self, class: &str) -> Result<bool> {
        Ok(self
            .objects(RDF_TYPE)?
            .iter()
            .any(|term| term.as_iri() == Some(class)))
    }

    /// Walks the `rdf:List` whose head is `head`, returning its members in
    /// list order. `predicate` is the predicate that pointed at the list and
    /// is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Value`] if the head is a literal, a cell lacks
    /// exactly one `rdf:first` / `rdf:rest`, or the list is cyclic.
    pub fn list(&self, predicate: &str, head: &Term) -> Result<Vec<Term>> {
        let mut members = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = match head {
            Term::Identifier(identifier) => identifier.clone(),
            Term::Literal(literal) => {
                return Err(DecodeError::value(
                    self.identifier,
                    predicate,
                    format!("expected an rdf:List, found literal {literal}"),
                ))
            }
        };
        while cell.as_iri() != Some(RDF_NIL) {
            if !visited.insert(cell.clone()) {
                return Err(DecodeError::value(
                    self.identifier,
                    predicate,
                    format!("rdf:List is cyclic at {cell}"),
                ));
            }
            let first = self.single_list_link(&cell, predicate, RDF_FIRST)?;
            let rest = self.single_list_link(&cell, predicate, RDF_REST)?;
            members.push(first);
            cell = match rest {
                Term::Identifier(next) => next,
                Term::Literal(literal) => {
                    return Err(DecodeError::value(
                        self.identifier,
                        predicate,
                        format!("rdf:rest of {cell} is literal {literal}"),
                    ))
                }
            };
        }
        Ok(members)
    }

    fn single_list_link(&self, cell: &Identifier, predicate: &str, link: &str) -> Result<Term> {
        let mut values = Vec::new();
        objects_of(self.graph, cell, link, &mut values)?;
        values.sort();
        values.dedup();
        let mut values = values.into_iter();
        match (values.next(), values.next()) {
            (Some(value), None) => Ok(value),
            (None, _) => Err(DecodeError::value(
                self.identifier,
                predicate,
                format!("list cell {cell} has no <{link}>"),
            )),
            (Some(_), Some(_)) => Err(DecodeError::value(
                self.identifier,
                predicate,
                format!("list cell {cell} has more than one <{link}>"),
            )),
        }
    }
}

fn objects_of<G: Graph>(
    graph: &G,
    subject: &Identifier,
    predicate: &str,
    out: &mut Vec<Term>,
) -> Result<()> {
    let predicate = [IriRef::new_unchecked(predicate)];
    match subject {
        Identifier::Iri(iri) => collect_objects(
            graph.triples_matching([IriRef::new_unchecked(iri.as_str())], predicate, Any),
            out,
        ),
        Identifier::BlankNode(label) => collect_objects(
            graph.triples_matching([BnodeId::new_unchecked(label.as_str())], predicate, Any),
            out,
        ),
    }
}
