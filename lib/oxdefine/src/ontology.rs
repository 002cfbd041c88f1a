//! In-memory ontology store.
//!
//! The store is the read surface the rewriters work against: classes in
//! their source order, annotation assertions indexed by subject and
//! equivalence axioms indexed by class. Rewriting never mutates it; a
//! computed [`Changeset`](crate::Changeset) is applied in a separate step.

use crate::axiom::{AnnotationAssertion, EquivalentClassesAxiom};
use crate::entity::OwlClass;
use crate::rewrite::Changeset;
use crate::vocab;
use oxrdf::{NamedNode, NamedNodeRef};
use rustc_hash::{FxHashMap, FxHashSet};

/// An ontology: classes, annotation assertions and equivalence axioms.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    /// The ontology IRI (optional)
    iri: Option<NamedNode>,

    /// Classes, in insertion order
    classes: Vec<OwlClass>,

    /// IRIs of the classes above, for dedup
    class_index: FxHashSet<String>,

    /// Annotation assertions, indexed by subject IRI
    annotations: FxHashMap<String, Vec<AnnotationAssertion>>,

    /// Equivalence axioms, indexed by class IRI
    equivalences: FxHashMap<String, Vec<EquivalentClassesAxiom>>,
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    /// Creates a new ontology with the given IRI string.
    pub fn with_iri(iri: impl AsRef<str>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::new(Some(NamedNode::new(iri.as_ref())?)))
    }

    /// Returns the ontology IRI.
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    /// Sets the ontology IRI.
    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    /// Registers a class. Duplicate registrations are ignored.
    pub fn add_class(&mut self, class: OwlClass) {
        if self.class_index.insert(class.as_str().to_owned()) {
            self.classes.push(class);
        }
    }

    /// Returns all classes, in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &OwlClass> {
        self.classes.iter()
    }

    /// Returns the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Checks if a class is known to this ontology.
    pub fn contains_class(&self, class: &OwlClass) -> bool {
        self.class_index.contains(class.as_str())
    }

    /// Adds an annotation assertion.
    pub fn add_annotation(&mut self, assertion: AnnotationAssertion) {
        self.annotations
            .entry(assertion.subject().as_str().to_owned())
            .or_default()
            .push(assertion);
    }

    /// Returns the annotation assertions targeting an entity.
    pub fn annotations_for(&self, entity: NamedNodeRef<'_>) -> &[AnnotationAssertion] {
        self.annotations
            .get(entity.as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Adds an equivalence axiom.
    pub fn add_equivalence(&mut self, axiom: EquivalentClassesAxiom) {
        self.equivalences
            .entry(axiom.class().as_str().to_owned())
            .or_default()
            .push(axiom);
    }

    /// Returns the equivalence axioms of a class, in insertion order.
    pub fn equivalence_axioms_of(&self, class: NamedNodeRef<'_>) -> &[EquivalentClassesAxiom] {
        self.equivalences
            .get(class.as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns true if the entity carries an assertion through a deprecated
    /// property, i.e. is flagged obsolete.
    pub fn is_obsolete(&self, entity: NamedNodeRef<'_>) -> bool {
        self.annotations_for(entity)
            .iter()
            .any(|a| a.property().as_ref() == vocab::DEPRECATED)
    }

    /// Applies a changeset: removes every assertion in the removal set and
    /// inserts every addition.
    pub fn apply(&mut self, changeset: &Changeset) {
        for removed in changeset.removals() {
            if let Some(assertions) = self.annotations.get_mut(removed.subject().as_str()) {
                assertions.retain(|a| a != removed);
            }
        }
        for added in changeset.additions() {
            self.add_annotation(added.clone());
        }
    }
}
