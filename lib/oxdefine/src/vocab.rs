//! Well-known IRIs used across the crate.
//!
//! Everything that identifies a fixed property, prefix or OWL construct
//! lives here, so the rest of the crate never spells out an IRI inline.

use oxrdf::NamedNodeRef;

/// IRI prefix of OBO Foundry terms.
pub const OBO_PREFIX: &str = "http://purl.obolibrary.org/obo/";

/// IRI prefix of the oboInOwl annotation vocabulary.
pub const OIO_PREFIX: &str = "http://www.geneontology.org/formats/oboInOwl#";

/// IRI prefix of FlyBase gene report pages. Gene entities carry no
/// oboInOwl identifier, so a short ID is fabricated from this prefix.
pub const FBGN_PREFIX: &str = "http://flybase.org/reports/FBgn";

/// The textual definition property (IAO:0000115).
pub const DEFINITION: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/IAO_0000115");

/// Cross-reference annotation carried on definitions.
pub const HAS_DBXREF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.geneontology.org/formats/oboInOwl#hasDbXref");

/// The short OBO identifier of a term.
pub const OBO_ID: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.geneontology.org/formats/oboInOwl#id");

/// Marks a term as obsolete when used as an annotation property.
pub const DEPRECATED: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#deprecated");

// OWL structural vocabulary used by the RDF parser and serializer.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
    pub const AXIOM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Axiom");

    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");

    pub const ANNOTATED_SOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedSource");
    pub const ANNOTATED_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedProperty");
    pub const ANNOTATED_TARGET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedTarget");

    pub const IMPORTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#imports");
    pub const VERSION_IRI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionIRI");
}
