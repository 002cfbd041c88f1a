//! Ontology model extraction from RDF graphs.
//!
//! Only the constructs the rewriters consume are modeled: the ontology
//! header, class declarations, equivalence axioms over named classes,
//! intersections and existential restrictions, and annotation assertions
//! (with their owl:Axiom reifications). Everything else stays behind in the
//! source graph, untouched by rewriting.

use crate::axiom::{Annotation, AnnotationAssertion, AnnotationValue, EquivalentClassesAxiom};
use crate::entity::{ObjectProperty, OwlClass};
use crate::error::OntologyParseError;
use crate::expression::ClassExpression;
use crate::ontology::Ontology;
use crate::vocab;
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{BlankNodeRef, Graph, NamedNode, NamedNodeRef, SubjectRef, Term, TermRef};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Guard against unterminated rdf:first/rdf:rest chains.
const MAX_LIST_LENGTH: usize = 10_000;

/// Parses an ontology model from an RDF graph.
pub fn parse_ontology(graph: &Graph) -> Result<Ontology, OntologyParseError> {
    OntologyParser::new(graph).parse()
}

/// Extracts the ontology model from an RDF graph.
pub struct OntologyParser<'a> {
    graph: &'a Graph,
}

impl<'a> OntologyParser<'a> {
    /// Creates a new parser for the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Parses the ontology from the graph.
    pub fn parse(&self) -> Result<Ontology, OntologyParseError> {
        let mut ontology = Ontology::new(None);
        self.parse_header(&mut ontology);
        self.parse_declarations(&mut ontology);
        self.parse_equivalences(&mut ontology)?;
        self.parse_annotations(&mut ontology);
        Ok(ontology)
    }

    /// Finds the ontology IRI.
    fn parse_header(&self, ontology: &mut Ontology) {
        for triple in self.graph.iter() {
            if triple.predicate != rdf::TYPE {
                continue;
            }
            if triple.object != TermRef::NamedNode(owl::ONTOLOGY) {
                continue;
            }
            if let SubjectRef::NamedNode(subject) = triple.subject {
                ontology.set_iri(Some(subject.into_owned()));
            }
        }
    }

    /// Registers the declared classes.
    fn parse_declarations(&self, ontology: &mut Ontology) {
        for triple in self.graph.iter() {
            if triple.predicate != rdf::TYPE {
                continue;
            }
            if triple.object != TermRef::NamedNode(owl::CLASS) {
                continue;
            }
            if let SubjectRef::NamedNode(subject) = triple.subject {
                ontology.add_class(OwlClass::new(subject.into_owned()));
            }
        }
    }

    /// Parses owl:equivalentClass axioms on named classes. Axioms carrying
    /// a construct outside the modeled subset are skipped.
    fn parse_equivalences(&self, ontology: &mut Ontology) -> Result<(), OntologyParseError> {
        for triple in self.graph.iter() {
            if triple.predicate != owl::EQUIVALENT_CLASS {
                continue;
            }
            let SubjectRef::NamedNode(subject) = triple.subject else {
                continue;
            };
            match self.parse_class_expression(triple.object) {
                Ok(expression) => {
                    let class = OwlClass::new(subject.into_owned());
                    let named = ClassExpression::Class(class.clone());
                    ontology
                        .add_equivalence(EquivalentClassesAxiom::new(class, vec![named, expression]));
                }
                Err(OntologyParseError::UnsupportedExpression(construct)) => {
                    debug!("skipping equivalence axiom on {subject}: unsupported {construct}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Parses a class expression from a term.
    fn parse_class_expression(&self, term: TermRef<'_>) -> Result<ClassExpression, OntologyParseError> {
        match term {
            TermRef::NamedNode(n) => Ok(ClassExpression::Class(OwlClass::new(n.into_owned()))),
            TermRef::BlankNode(b) => self.parse_anonymous_class(b),
            _ => Err(OntologyParseError::InvalidValue(format!(
                "{term} cannot be a class expression"
            ))),
        }
    }

    /// Parses an anonymous class: a restriction or an intersection.
    fn parse_anonymous_class(&self, bnode: BlankNodeRef<'_>) -> Result<ClassExpression, OntologyParseError> {
        for triple in self.graph.triples_for_subject(bnode) {
            if triple.predicate == rdf::TYPE
                && triple.object == TermRef::NamedNode(owl::RESTRICTION)
            {
                return self.parse_restriction(bnode);
            }
        }
        for triple in self.graph.triples_for_subject(bnode) {
            if triple.predicate == owl::INTERSECTION_OF {
                return Ok(ClassExpression::ObjectIntersectionOf(
                    self.parse_class_list(triple.object)?,
                ));
            }
        }
        Err(OntologyParseError::UnsupportedExpression(bnode.to_string()))
    }

    /// Parses an existential restriction.
    fn parse_restriction(&self, bnode: BlankNodeRef<'_>) -> Result<ClassExpression, OntologyParseError> {
        let mut property = None;
        let mut filler = None;
        for triple in self.graph.triples_for_subject(bnode) {
            if triple.predicate == owl::ON_PROPERTY {
                if let TermRef::NamedNode(p) = triple.object {
                    property = Some(ObjectProperty::new(p.into_owned()));
                }
            } else if triple.predicate == owl::SOME_VALUES_FROM {
                filler = Some(self.parse_class_expression(triple.object)?);
            }
        }

        let property =
            property.ok_or_else(|| OntologyParseError::MissingOnProperty(bnode.to_string()))?;
        let filler = filler.ok_or_else(|| {
            OntologyParseError::UnsupportedExpression(format!(
                "restriction {bnode} without owl:someValuesFrom"
            ))
        })?;
        Ok(ClassExpression::ObjectSomeValuesFrom {
            property,
            filler: Box::new(filler),
        })
    }

    /// Parses an rdf:first/rdf:rest list of class expressions.
    fn parse_class_list(&self, head: TermRef<'_>) -> Result<Vec<ClassExpression>, OntologyParseError> {
        let mut result = Vec::new();
        let mut current = head.into_owned();

        while current != Term::NamedNode(rdf::NIL.into_owned()) {
            if result.len() >= MAX_LIST_LENGTH {
                return Err(OntologyParseError::MalformedList("list too long".into()));
            }

            let subject = match current.as_ref() {
                TermRef::NamedNode(n) => SubjectRef::from(n),
                TermRef::BlankNode(b) => SubjectRef::from(b),
                _ => {
                    return Err(OntologyParseError::MalformedList(format!(
                        "list node {current} is not a resource"
                    )))
                }
            };

            let first = self
                .graph
                .object_for_subject_predicate(subject, rdf::FIRST)
                .ok_or_else(|| {
                    OntologyParseError::MalformedList(format!("missing rdf:first on {current}"))
                })?;
            result.push(self.parse_class_expression(first)?);

            current = self
                .graph
                .object_for_subject_predicate(subject, rdf::REST)
                .ok_or_else(|| {
                    OntologyParseError::MalformedList(format!("missing rdf:rest on {current}"))
                })?
                .into_owned();
        }

        Ok(result)
    }

    /// Collects annotation assertions on named subjects, attaching the
    /// annotations carried by owl:Axiom reification nodes.
    fn parse_annotations(&self, ontology: &mut Ontology) {
        let reified = self.collect_reifications();

        for triple in self.graph.iter() {
            let SubjectRef::NamedNode(subject) = triple.subject else {
                continue;
            };
            if is_structural(triple.predicate) {
                continue;
            }
            let Some(value) = annotation_value(triple.object) else {
                continue;
            };

            let key = (
                subject.into_owned(),
                triple.predicate.into_owned(),
                triple.object.into_owned(),
            );
            let annotations = reified.get(&key).cloned().unwrap_or_default();
            ontology.add_annotation(AnnotationAssertion::new(key.0, key.1, value, annotations));
        }
    }

    /// Indexes owl:Axiom reification nodes by their annotated triple.
    fn collect_reifications(&self) -> FxHashMap<(NamedNode, NamedNode, Term), Vec<Annotation>> {
        let mut reified: FxHashMap<(NamedNode, NamedNode, Term), Vec<Annotation>> =
            FxHashMap::default();

        for triple in self.graph.iter() {
            if triple.predicate != rdf::TYPE || triple.object != TermRef::NamedNode(owl::AXIOM) {
                continue;
            }
            let SubjectRef::BlankNode(bnode) = triple.subject else {
                continue;
            };

            let mut source = None;
            let mut property = None;
            let mut target = None;
            let mut annotations = Vec::new();
            for t in self.graph.triples_for_subject(bnode) {
                if t.predicate == owl::ANNOTATED_SOURCE {
                    if let TermRef::NamedNode(n) = t.object {
                        source = Some(n.into_owned());
                    }
                } else if t.predicate == owl::ANNOTATED_PROPERTY {
                    if let TermRef::NamedNode(n) = t.object {
                        property = Some(n.into_owned());
                    }
                } else if t.predicate == owl::ANNOTATED_TARGET {
                    target = Some(t.object.into_owned());
                } else if t.predicate != rdf::TYPE {
                    if let Some(value) = annotation_value(t.object) {
                        annotations.push(Annotation::new(t.predicate.into_owned(), value));
                    }
                }
            }

            if let (Some(source), Some(property), Some(target)) = (source, property, target) {
                reified
                    .entry((source, property, target))
                    .or_default()
                    .extend(annotations);
            }
        }

        reified
    }
}

/// Checks whether a predicate belongs to the structural vocabulary rather
/// than carrying an annotation. owl:deprecated is the one annotation
/// property living in the OWL namespace.
fn is_structural(predicate: NamedNodeRef<'_>) -> bool {
    if predicate == vocab::DEPRECATED {
        return false;
    }
    predicate.as_str().starts_with(owl::NAMESPACE)
        || predicate == rdf::TYPE
        || predicate == rdf::FIRST
        || predicate == rdf::REST
        || predicate == rdfs::SUB_CLASS_OF
        || predicate == rdfs::SUB_PROPERTY_OF
        || predicate == rdfs::DOMAIN
        || predicate == rdfs::RANGE
}

fn annotation_value(term: TermRef<'_>) -> Option<AnnotationValue> {
    match term {
        TermRef::NamedNode(n) => Some(AnnotationValue::Iri(n.into_owned())),
        TermRef::Literal(l) => Some(AnnotationValue::Literal(l.into_owned())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal, Triple};

    fn node(iri: &str) -> NamedNode {
        NamedNode::new_unchecked(iri)
    }

    fn obo(id: &str) -> NamedNode {
        node(&format!("http://purl.obolibrary.org/obo/{id}"))
    }

    #[test]
    fn test_header_and_declarations() {
        let mut graph = Graph::new();
        let iri = node("http://purl.obolibrary.org/obo/fbbt.owl");
        graph.insert(&Triple::new(
            iri.clone(),
            rdf::TYPE.into_owned(),
            owl::ONTOLOGY.into_owned(),
        ));
        graph.insert(&Triple::new(
            obo("FBbt_00000001"),
            rdf::TYPE.into_owned(),
            owl::CLASS.into_owned(),
        ));

        let ontology = parse_ontology(&graph).unwrap();
        assert_eq!(ontology.iri(), Some(&iri));
        assert_eq!(ontology.class_count(), 1);
    }

    #[test]
    fn test_annotation_with_reification() {
        let mut graph = Graph::new();
        let subject = obo("FBbt_00000001");
        let definition = Term::from(Literal::new_simple_literal("A cell."));
        graph.insert(&Triple::new(
            subject.clone(),
            vocab::DEFINITION.into_owned(),
            definition.clone(),
        ));

        let axiom = BlankNode::default();
        graph.insert(&Triple::new(
            axiom.clone(),
            rdf::TYPE.into_owned(),
            owl::AXIOM.into_owned(),
        ));
        graph.insert(&Triple::new(
            axiom.clone(),
            owl::ANNOTATED_SOURCE.into_owned(),
            subject.clone(),
        ));
        graph.insert(&Triple::new(
            axiom.clone(),
            owl::ANNOTATED_PROPERTY.into_owned(),
            vocab::DEFINITION.into_owned(),
        ));
        graph.insert(&Triple::new(
            axiom.clone(),
            owl::ANNOTATED_TARGET.into_owned(),
            definition,
        ));
        graph.insert(&Triple::new(
            axiom.clone(),
            vocab::HAS_DBXREF.into_owned(),
            Term::from(Literal::new_simple_literal("FlyBase:FBrf0000001")),
        ));

        let ontology = parse_ontology(&graph).unwrap();
        let assertions = ontology.annotations_for(subject.as_ref());
        assert_eq!(assertions.len(), 1);
        assert_eq!(assertions[0].literal_value(), Some("A cell."));
        assert_eq!(assertions[0].annotations().len(), 1);
        assert_eq!(
            assertions[0].annotations()[0].value().as_literal(),
            Some("FlyBase:FBrf0000001")
        );
    }

    #[test]
    fn test_equivalence_with_intersection() {
        let mut graph = Graph::new();
        let class = obo("FBbt_00000002");
        let genus = obo("FBbt_00000001");
        let filler = obo("FBbt_00000003");
        let property = obo("BFO_0000050");

        let restriction = BlankNode::default();
        graph.insert(&Triple::new(
            restriction.clone(),
            rdf::TYPE.into_owned(),
            owl::RESTRICTION.into_owned(),
        ));
        graph.insert(&Triple::new(
            restriction.clone(),
            owl::ON_PROPERTY.into_owned(),
            property.clone(),
        ));
        graph.insert(&Triple::new(
            restriction.clone(),
            owl::SOME_VALUES_FROM.into_owned(),
            filler.clone(),
        ));

        let cell2 = BlankNode::default();
        let cell1 = BlankNode::default();
        graph.insert(&Triple::new(
            cell1.clone(),
            rdf::FIRST.into_owned(),
            genus.clone(),
        ));
        graph.insert(&Triple::new(
            cell1.clone(),
            rdf::REST.into_owned(),
            cell2.clone(),
        ));
        graph.insert(&Triple::new(
            cell2.clone(),
            rdf::FIRST.into_owned(),
            restriction.clone(),
        ));
        graph.insert(&Triple::new(
            cell2.clone(),
            rdf::REST.into_owned(),
            rdf::NIL.into_owned(),
        ));

        let intersection = BlankNode::default();
        graph.insert(&Triple::new(
            intersection.clone(),
            owl::INTERSECTION_OF.into_owned(),
            cell1.clone(),
        ));
        graph.insert(&Triple::new(
            class.clone(),
            owl::EQUIVALENT_CLASS.into_owned(),
            intersection.clone(),
        ));

        let ontology = parse_ontology(&graph).unwrap();
        let axioms = ontology.equivalence_axioms_of(class.as_ref());
        assert_eq!(axioms.len(), 1);
        let expression = axioms[0]
            .expressions()
            .iter()
            .find(|e| e.has_restriction())
            .unwrap();
        let ClassExpression::ObjectIntersectionOf(operands) = expression else {
            panic!("expected an intersection");
        };
        assert_eq!(operands.len(), 2);
        assert_eq!(operands[0].as_class().unwrap().iri(), &genus);
        let ClassExpression::ObjectSomeValuesFrom { property: p, filler: f } = &operands[1] else {
            panic!("expected a restriction");
        };
        assert_eq!(p.iri(), &property);
        assert_eq!(f.as_class().unwrap().iri(), &filler);
    }

    #[test]
    fn test_unsupported_equivalence_is_skipped() {
        let mut graph = Graph::new();
        let class = obo("FBbt_00000002");
        let anonymous = BlankNode::default();
        graph.insert(&Triple::new(
            anonymous.clone(),
            node("http://www.w3.org/2002/07/owl#unionOf"),
            rdf::NIL.into_owned(),
        ));
        graph.insert(&Triple::new(
            class.clone(),
            owl::EQUIVALENT_CLASS.into_owned(),
            anonymous.clone(),
        ));

        let ontology = parse_ontology(&graph).unwrap();
        assert!(ontology.equivalence_axioms_of(class.as_ref()).is_empty());
    }

    #[test]
    fn test_structural_predicates_are_not_annotations() {
        let mut graph = Graph::new();
        let class = obo("FBbt_00000002");
        graph.insert(&Triple::new(
            class.clone(),
            rdfs::SUB_CLASS_OF.into_owned(),
            obo("FBbt_00000001"),
        ));
        graph.insert(&Triple::new(
            class.clone(),
            vocab::DEPRECATED.into_owned(),
            Term::from(Literal::new_typed_literal(
                "true",
                oxrdf::vocab::xsd::BOOLEAN,
            )),
        ));

        let ontology = parse_ontology(&graph).unwrap();
        let assertions = ontology.annotations_for(class.as_ref());
        assert_eq!(assertions.len(), 1);
        assert_eq!(assertions[0].property().as_ref(), vocab::DEPRECATED);
        assert!(ontology.is_obsolete(class.as_ref()));
    }
}
