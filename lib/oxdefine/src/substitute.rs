//! Substitution of cross-referenced definitions.
//!
//! A "SUB" placeholder of the form `$sub_FBbt:00001234` stands for the
//! textual definition of another term. This rewriter replaces the first
//! such placeholder with the referenced term's definition text.

use crate::axiom::{Annotation, AnnotationAssertion};
use crate::entity::OwlClass;
use crate::lookup;
use crate::ontology::Ontology;
use crate::rewrite::AnnotationRewriter;
use crate::vocab;
use oxrdf::NamedNode;
use regex::Regex;
use tracing::debug;

/// Rewrites "SUB" placeholders by copying the referenced definition.
#[derive(Debug, Clone)]
pub struct SubDefinitionResolver {
    pattern: Regex,
}

impl SubDefinitionResolver {
    pub fn new() -> Self {
        Self {
            // The pattern is valid, so compilation cannot fail.
            pattern: Regex::new(r"\$sub_([A-Za-z]+):([0-9]+)").unwrap(),
        }
    }
}

impl Default for SubDefinitionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationRewriter for SubDefinitionResolver {
    fn rewrite(
        &self,
        ontology: &Ontology,
        _class: &OwlClass,
        original: &AnnotationAssertion,
    ) -> Option<AnnotationAssertion> {
        let text = original.literal_value()?;
        let captures = self.pattern.captures(text)?;
        let span = captures.get(0)?;
        let prefix = &captures[1];
        let local_id = &captures[2];

        let target =
            NamedNode::new_unchecked(format!("{}{prefix}_{local_id}", vocab::OBO_PREFIX));
        let foreign = lookup::definition_of(ontology, target.as_ref());
        debug!(
            "substituting {prefix}:{local_id} in {}: definition {}",
            original.subject(),
            if foreign.is_some() { "found" } else { "missing" }
        );

        let mut annotations: Vec<Annotation> = original.annotations().to_vec();
        let replacement = match foreign {
            Some(foreign) => {
                annotations.extend(foreign.annotations().iter().cloned());
                let foreign_text = foreign.literal_value()?;
                if span.start() == 0 && span.end() == text.len() {
                    // The placeholder is the whole definition; credit the
                    // source ontology.
                    let stem = foreign_text.strip_suffix('.').unwrap_or(foreign_text);
                    format!("{stem} (from {prefix}).")
                } else {
                    format!("{}{foreign_text}{}", &text[..span.start()], &text[span.end()..])
                }
            }
            None => format!(
                "{}No definition for {prefix}:{local_id}.{}",
                &text[..span.start()],
                &text[span.end()..]
            ),
        };

        Some(AnnotationAssertion::new(
            original.subject().clone(),
            original.property().clone(),
            replacement.as_str(),
            annotations,
        ))
    }

    fn generate(&self, _ontology: &Ontology, _class: &OwlClass) -> Option<AnnotationAssertion> {
        None
    }
}
