//! Definition rewriting for OBO-style ontologies.
//!
//! Some ontology terms carry placeholder definitions instead of prose: a
//! lone dot (`.`) asking for a definition generated from the term's logical
//! description, or a `$sub_PFX:1234` token asking for the definition of the
//! referenced term to be copied in. This crate models the relevant OWL
//! subset, finds such placeholders and computes their replacements:
//! - [`DefinitionGenerator`] renders equivalent-class expressions as prose
//! - [`SubDefinitionResolver`] substitutes cross-referenced definitions
//! - [`BatchRewriter`] runs a rewriter chain over a whole ontology and
//!   collects the result in a [`Changeset`]
//!
//! # Example
//! ```
//! use oxdefine::{BatchRewriter, DefinitionGenerator, Ontology, vocab};
//!
//! let ontology = Ontology::new(None);
//! let mut engine = BatchRewriter::new();
//! engine.add_rewriter(DefinitionGenerator::new());
//! let changeset = engine.rewrite(&ontology, vocab::DEFINITION);
//! assert!(changeset.is_empty());
//! ```

mod axiom;
mod entity;
mod error;
mod expression;
mod generate;
pub mod lookup;
mod ontology;
mod parser;
pub mod phrase;
mod rewrite;
mod serializer;
mod substitute;
pub mod vocab;

pub use axiom::{Annotation, AnnotationAssertion, AnnotationValue, EquivalentClassesAxiom};
pub use entity::{ObjectProperty, OwlClass};
pub use error::OntologyParseError;
pub use expression::ClassExpression;
pub use generate::DefinitionGenerator;
pub use ontology::Ontology;
pub use parser::{parse_ontology, OntologyParser};
pub use rewrite::{AnnotationRewriter, BatchRewriter, Changeset};
pub use serializer::{additions_graph, apply_changeset, assertion_triples};
pub use substitute::SubDefinitionResolver;
