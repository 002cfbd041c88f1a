//! Error types for ontology extraction.

use thiserror::Error;

/// Errors raised while building the ontology model from an RDF graph.
#[derive(Debug, Error)]
pub enum OntologyParseError {
    /// An rdf:first/rdf:rest list is broken or unterminated.
    #[error("malformed RDF list: {0}")]
    MalformedList(String),

    /// A restriction node without an owl:onProperty triple.
    #[error("restriction {0} has no owl:onProperty")]
    MissingOnProperty(String),

    /// An anonymous class that is neither an intersection nor a supported
    /// restriction. Axioms carrying such expressions are skipped rather
    /// than failing the whole parse.
    #[error("unsupported class expression: {0}")]
    UnsupportedExpression(String),

    /// A term in a position where it cannot appear.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
