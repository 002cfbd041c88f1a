//! Annotation assertions and equivalence axioms.
//!
//! Assertions are immutable value objects: identity is by content, so two
//! independently built assertions with the same subject, property, value and
//! annotation set compare equal and hash identically. This is what lets a
//! changeset deduplicate additions produced through different classes.

use crate::entity::OwlClass;
use crate::expression::ClassExpression;
use oxrdf::{Literal, NamedNode, Term};
use std::fmt;

/// The value of an annotation: a literal or an IRI reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(NamedNode),
    Literal(Literal),
}

impl AnnotationValue {
    /// Returns the lexical form if this value is a literal.
    #[inline]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(l) => Some(l.value()),
            Self::Iri(_) => None,
        }
    }

    /// Returns the named node if this value is an IRI reference.
    #[inline]
    pub fn as_iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Iri(n) => Some(n),
            Self::Literal(_) => None,
        }
    }

    fn sort_key(&self) -> (u8, String) {
        match self {
            Self::Iri(n) => (0, n.as_str().to_owned()),
            Self::Literal(l) => (1, l.to_string()),
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(n) => write!(f, "{n}"),
            Self::Literal(l) => write!(f, "{l}"),
        }
    }
}

impl From<NamedNode> for AnnotationValue {
    fn from(node: NamedNode) -> Self {
        Self::Iri(node)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::Literal(Literal::new_simple_literal(value))
    }
}

impl From<AnnotationValue> for Term {
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Iri(n) => n.into(),
            AnnotationValue::Literal(l) => l.into(),
        }
    }
}

/// A single (property, value) annotation, attached to an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    property: NamedNode,
    value: AnnotationValue,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(property: NamedNode, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    /// Returns the annotation property.
    #[inline]
    pub fn property(&self) -> &NamedNode {
        &self.property
    }

    /// Returns the annotation value.
    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    fn sort_key(&self) -> (String, (u8, String)) {
        (self.property.as_str().to_owned(), self.value.sort_key())
    }
}

/// An annotation assertion: (subject, property, value) plus assertion-level
/// annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationAssertion {
    subject: NamedNode,
    property: NamedNode,
    value: AnnotationValue,
    annotations: Vec<Annotation>,
}

impl AnnotationAssertion {
    /// Creates a new assertion. The annotation set is canonicalized (sorted,
    /// deduplicated) so that content equality is order-independent.
    pub fn new(
        subject: NamedNode,
        property: NamedNode,
        value: impl Into<AnnotationValue>,
        annotations: Vec<Annotation>,
    ) -> Self {
        let mut annotations = annotations;
        annotations.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        annotations.dedup();
        Self {
            subject,
            property,
            value: value.into(),
            annotations,
        }
    }

    /// Returns the subject of this assertion.
    #[inline]
    pub fn subject(&self) -> &NamedNode {
        &self.subject
    }

    /// Returns the annotation property.
    #[inline]
    pub fn property(&self) -> &NamedNode {
        &self.property
    }

    /// Returns the asserted value.
    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    /// Returns the lexical form of the value if it is a literal.
    #[inline]
    pub fn literal_value(&self) -> Option<&str> {
        self.value.as_literal()
    }

    /// Returns the assertion-level annotations, in canonical order.
    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl fmt::Display for AnnotationAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.property, self.value)
    }
}

/// An equivalence axiom: a class plus the expressions it is equivalent to.
///
/// The expression list keeps the order of the source ontology; the class
/// itself appears in it as a named expression, mirroring the usual OWL
/// pairwise representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalentClassesAxiom {
    class: OwlClass,
    expressions: Vec<ClassExpression>,
}

impl EquivalentClassesAxiom {
    /// Creates a new equivalence axiom.
    pub fn new(class: OwlClass, expressions: Vec<ClassExpression>) -> Self {
        Self { class, expressions }
    }

    /// Returns the class this axiom is attached to.
    #[inline]
    pub fn class(&self) -> &OwlClass {
        &self.class
    }

    /// Returns the equivalent expressions, in source order.
    #[inline]
    pub fn expressions(&self) -> &[ClassExpression] {
        &self.expressions
    }
}
