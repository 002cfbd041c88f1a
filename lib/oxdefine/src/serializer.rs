//! RDF projection of assertions and changesets.
//!
//! Rewriting happens on the extracted model, but the output is produced by
//! editing the source graph in place: only the triples of replaced
//! assertions (and their owl:Axiom reifications) are touched, so every
//! construct the model does not capture survives a round trip unchanged.

use crate::axiom::AnnotationAssertion;
use crate::rewrite::Changeset;
use crate::vocab::owl;
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Graph, SubjectRef, Term, TermRef, Triple, TripleRef};

/// Expands an assertion into its RDF triples: the base triple plus an
/// owl:Axiom reification when the assertion carries annotations.
pub fn assertion_triples(assertion: &AnnotationAssertion) -> Vec<Triple> {
    let value: Term = assertion.value().clone().into();
    let mut triples = vec![Triple::new(
        assertion.subject().clone(),
        assertion.property().clone(),
        value.clone(),
    )];

    if !assertion.annotations().is_empty() {
        let axiom = BlankNode::default();
        triples.push(Triple::new(
            axiom.clone(),
            rdf::TYPE.into_owned(),
            owl::AXIOM.into_owned(),
        ));
        triples.push(Triple::new(
            axiom.clone(),
            owl::ANNOTATED_SOURCE.into_owned(),
            assertion.subject().clone(),
        ));
        triples.push(Triple::new(
            axiom.clone(),
            owl::ANNOTATED_PROPERTY.into_owned(),
            assertion.property().clone(),
        ));
        triples.push(Triple::new(
            axiom.clone(),
            owl::ANNOTATED_TARGET.into_owned(),
            value,
        ));
        for annotation in assertion.annotations() {
            triples.push(Triple::new(
                axiom.clone(),
                annotation.property().clone(),
                Term::from(annotation.value().clone()),
            ));
        }
    }

    triples
}

/// Applies a changeset to a graph: removes every replaced assertion along
/// with its reification nodes, then inserts the additions.
pub fn apply_changeset(graph: &mut Graph, changeset: &Changeset) {
    for removed in changeset.removals() {
        remove_assertion(graph, removed);
    }
    for added in changeset.additions() {
        for triple in assertion_triples(added) {
            graph.insert(&triple);
        }
    }
}

/// Builds a graph holding only the triples a changeset adds.
pub fn additions_graph(changeset: &Changeset) -> Graph {
    let mut graph = Graph::new();
    for added in changeset.additions() {
        for triple in assertion_triples(added) {
            graph.insert(&triple);
        }
    }
    graph
}

fn remove_assertion(graph: &mut Graph, assertion: &AnnotationAssertion) {
    let value: Term = assertion.value().clone().into();
    graph.remove(&Triple::new(
        assertion.subject().clone(),
        assertion.property().clone(),
        value.clone(),
    ));

    // Any owl:Axiom node reifying the removed triple goes with it.
    let mut reifications = Vec::new();
    for triple in graph.iter() {
        if triple.predicate != owl::ANNOTATED_SOURCE {
            continue;
        }
        if triple.object != TermRef::NamedNode(assertion.subject().as_ref()) {
            continue;
        }
        let SubjectRef::BlankNode(node) = triple.subject else {
            continue;
        };
        if graph.object_for_subject_predicate(node, owl::ANNOTATED_PROPERTY)
            != Some(TermRef::NamedNode(assertion.property().as_ref()))
        {
            continue;
        }
        if graph.object_for_subject_predicate(node, owl::ANNOTATED_TARGET) != Some(value.as_ref()) {
            continue;
        }
        reifications.push(node.into_owned());
    }

    let mut doomed = Vec::new();
    for node in &reifications {
        doomed.extend(graph.triples_for_subject(node).map(TripleRef::into_owned));
    }
    for triple in doomed {
        graph.remove(&triple);
    }
}
