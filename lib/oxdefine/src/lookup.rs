//! Shared lookup helpers over the store: entity labels and definitions.

use crate::axiom::AnnotationAssertion;
use crate::ontology::Ontology;
use crate::vocab;
use oxrdf::vocab::rdfs;
use oxrdf::NamedNodeRef;

/// Resolves the display label of an entity, optionally followed by its
/// short ID.
///
/// The entity's own annotations are scanned for an rdfs:label and an
/// oboInOwl ID. Gene report entities carry no oboInOwl ID, so one is
/// fabricated from the IRI. Priority: "label (ID)" when both resolved and
/// `with_id` is set, then label alone, then ID alone, then the raw IRI.
pub fn label(ontology: &Ontology, entity: NamedNodeRef<'_>, with_id: bool) -> String {
    let mut label = None;
    let mut id = None;
    for assertion in ontology.annotations_for(entity) {
        if assertion.property().as_ref() == rdfs::LABEL {
            if let Some(value) = assertion.literal_value() {
                label = Some(value.to_owned());
            }
        } else if assertion.property().as_ref() == vocab::OBO_ID {
            if let Some(value) = assertion.literal_value() {
                id = Some(value.to_owned());
            }
        }
    }

    let iri = entity.as_str();
    if id.is_none() {
        if let Some(digits) = iri.strip_prefix(vocab::FBGN_PREFIX) {
            id = Some(format!("FBgn{digits}"));
        }
    }

    match (label, id) {
        (Some(label), Some(id)) if with_id => format!("{label} ({id})"),
        (Some(label), _) => label,
        (None, Some(id)) => id,
        (None, None) => iri.to_owned(),
    }
}

/// Finds the definition assertion of an entity: the first assertion through
/// the definition property that carries a literal value.
pub fn definition_of<'a>(
    ontology: &'a Ontology,
    entity: NamedNodeRef<'_>,
) -> Option<&'a AnnotationAssertion> {
    ontology
        .annotations_for(entity)
        .iter()
        .find(|a| a.property().as_ref() == vocab::DEFINITION && a.literal_value().is_some())
}
