//! Generation of textual definitions from logical definitions.
//!
//! A "DOT" definition consists of a single dot character ("."). This
//! rewriter replaces it with prose derived from the class's equivalent-class
//! expression, rendered by a small fixed sentence grammar:
//! `Any <genus> that <relation> <filler> and ...`.

use crate::axiom::{Annotation, AnnotationAssertion};
use crate::entity::OwlClass;
use crate::expression::ClassExpression;
use crate::lookup;
use crate::ontology::Ontology;
use crate::phrase;
use crate::rewrite::AnnotationRewriter;
use crate::vocab;
use tracing::debug;

/// Rewrites "DOT" definitions into generated prose.
#[derive(Debug, Clone)]
pub struct DefinitionGenerator {
    include_id: bool,
    default_annotations: Vec<Annotation>,
}

impl DefinitionGenerator {
    /// Creates a new generator. Head-class labels are followed by their
    /// short ID by default.
    pub fn new() -> Self {
        Self {
            include_id: true,
            default_annotations: Vec::new(),
        }
    }

    /// Sets whether head-class labels are followed by their short ID.
    #[must_use]
    pub fn with_ids(mut self, include_id: bool) -> Self {
        self.include_id = include_id;
        self
    }

    /// Sets the annotations attached to de-novo generated definitions.
    /// Definitions that replace a placeholder inherit the placeholder's
    /// annotations instead.
    #[must_use]
    pub fn with_default_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.default_annotations = annotations;
        self
    }

    /// Common logic to both forms of rewrite.
    fn build(
        &self,
        ontology: &Ontology,
        class: &OwlClass,
        annotations: Vec<Annotation>,
    ) -> Option<AnnotationAssertion> {
        let Some(expression) = defining_expression(ontology, class) else {
            debug!("no defining class expression for {class}");
            return None;
        };

        let mut writer = SentenceWriter {
            ontology,
            include_id: self.include_id,
            items: Vec::new(),
            in_intersection: false,
        };
        writer.visit(expression);
        let definition = writer.finish();
        debug!("generated definition for {class}: {definition}");

        Some(AnnotationAssertion::new(
            class.iri().clone(),
            vocab::DEFINITION.into_owned(),
            definition.as_str(),
            annotations,
        ))
    }
}

impl Default for DefinitionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationRewriter for DefinitionGenerator {
    fn rewrite(
        &self,
        ontology: &Ontology,
        class: &OwlClass,
        original: &AnnotationAssertion,
    ) -> Option<AnnotationAssertion> {
        if original.literal_value() != Some(".") {
            return None;
        }
        self.build(ontology, class, original.annotations().to_vec())
    }

    fn generate(&self, ontology: &Ontology, class: &OwlClass) -> Option<AnnotationAssertion> {
        self.build(ontology, class, self.default_annotations.clone())
    }
}

/// Finds the logical definition of a class: the first equivalent expression
/// that contains at least one object restriction, in store order.
fn defining_expression<'a>(ontology: &'a Ontology, class: &OwlClass) -> Option<&'a ClassExpression> {
    for axiom in ontology.equivalence_axioms_of(class.iri().as_ref()) {
        for expression in axiom.expressions() {
            if expression.has_restriction() {
                return Some(expression);
            }
        }
    }
    None
}

/// Walks a class expression and collects the sentence tokens.
struct SentenceWriter<'a> {
    ontology: &'a Ontology,
    include_id: bool,
    items: Vec<String>,
    in_intersection: bool,
}

impl SentenceWriter<'_> {
    fn visit(&mut self, expression: &ClassExpression) {
        match expression {
            ClassExpression::Class(class) => {
                let iri = class.iri().as_ref();
                if self.in_intersection {
                    if self.items.is_empty() {
                        // The genus opens the sentence and is the only label
                        // that may carry an ID suffix.
                        self.items.push("Any".to_owned());
                        self.items
                            .push(lookup::label(self.ontology, iri, self.include_id));
                    } else {
                        self.items.push("is a(n)".to_owned());
                        self.items.push(lookup::label(self.ontology, iri, false));
                    }
                } else {
                    // Restriction fillers carry no ID suffix, except genes,
                    // whose fabricated FBgn ID is part of the usual name.
                    let with_id = iri.as_str().starts_with(vocab::FBGN_PREFIX);
                    self.items.push(lookup::label(self.ontology, iri, with_id));
                }
            }
            ClassExpression::ObjectIntersectionOf(operands) => {
                let count = operands.len();
                for (i, operand) in operands.iter().enumerate() {
                    self.in_intersection = true;
                    self.visit(operand);
                    if i == 0 {
                        self.items.push("that".to_owned());
                    } else if i + 1 < count {
                        self.items.push("and".to_owned());
                    }
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                match phrase::phrase_for(property.iri().as_ref()) {
                    Some(entry) => {
                        self.items
                            .extend(entry.tokens().into_iter().map(str::to_owned));
                    }
                    None => {
                        // Fall back to the property's own label and the
                        // default connecting word. Gene names read naturally
                        // without it.
                        self.items
                            .push(lookup::label(self.ontology, property.iri().as_ref(), false));
                        if !is_gene_filler(filler) {
                            self.items.push("some".to_owned());
                        }
                    }
                }
                self.in_intersection = false;
                self.visit(filler);
            }
        }
    }

    fn finish(self) -> String {
        format!("{}.", self.items.join(" "))
    }
}

fn is_gene_filler(filler: &ClassExpression) -> bool {
    filler
        .as_class()
        .is_some_and(|c| c.as_str().starts_with(vocab::FBGN_PREFIX))
}
