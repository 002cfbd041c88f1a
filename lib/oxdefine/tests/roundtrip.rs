use oxdefine::{
    additions_graph, apply_changeset, parse_ontology, BatchRewriter, DefinitionGenerator, vocab,
};
use oxrdf::{Graph, Literal, Term, Triple};
use oxttl::{TurtleParser, TurtleSerializer};

const MEDULLA_TTL: &str = r#"
@prefix obo: <http://purl.obolibrary.org/obo/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix oio: <http://www.geneontology.org/formats/oboInOwl#> .

<http://purl.obolibrary.org/obo/fbbt.owl> a owl:Ontology .

obo:FBbt_00003748 a owl:Class ;
    rdfs:label "medulla" ;
    oio:id "FBbt:00003748" ;
    obo:IAO_0000115 "." ;
    owl:equivalentClass [
        owl:intersectionOf (
            obo:FBbt_00005093
            [ a owl:Restriction ;
              owl:onProperty obo:BFO_0000050 ;
              owl:someValuesFrom obo:FBbt_00003701 ]
        )
    ] .

obo:FBbt_00005093 a owl:Class ;
    rdfs:label "synaptic neuropil domain" ;
    oio:id "FBbt:00005093" .

obo:FBbt_00003701 a owl:Class ;
    rdfs:label "optic lobe" ;
    oio:id "FBbt:00003701" .

[ a owl:Axiom ;
  owl:annotatedSource obo:FBbt_00003748 ;
  owl:annotatedProperty obo:IAO_0000115 ;
  owl:annotatedTarget "." ;
  oio:hasDbXref "FlyBase:FBrf0000001" ] .
"#;

fn load(data: &str) -> Graph {
    let mut graph = Graph::new();
    for triple in TurtleParser::new().for_reader(data.as_bytes()) {
        graph.insert(&triple.unwrap());
    }
    graph
}

fn rewrite(graph: &Graph) -> oxdefine::Changeset {
    let ontology = parse_ontology(graph).unwrap();
    let mut engine = BatchRewriter::new();
    engine.add_rewriter(DefinitionGenerator::new());
    engine.rewrite(&ontology, vocab::DEFINITION)
}

#[test]
fn placeholder_is_replaced_in_the_graph() {
    let mut graph = load(MEDULLA_TTL);
    let changeset = rewrite(&graph);
    assert_eq!(changeset.removal_count(), 1);
    assert_eq!(changeset.addition_count(), 1);
    apply_changeset(&mut graph, &changeset);

    let medulla = oxrdf::NamedNode::new_unchecked("http://purl.obolibrary.org/obo/FBbt_00003748");
    assert!(!graph.contains(&Triple::new(
        medulla.clone(),
        vocab::DEFINITION.into_owned(),
        Term::from(Literal::new_simple_literal(".")),
    )));
    assert!(graph.contains(&Triple::new(
        medulla.clone(),
        vocab::DEFINITION.into_owned(),
        Term::from(Literal::new_simple_literal(
            "Any synaptic neuropil domain (FBbt:00005093) that is part of optic lobe."
        )),
    )));

    // The replacement inherited the xref, so the rewritten graph carries a
    // fresh reification for it.
    let rewritten = parse_ontology(&graph).unwrap();
    let definitions: Vec<_> = rewritten
        .annotations_for(medulla.as_ref())
        .iter()
        .filter(|a| a.property().as_ref() == vocab::DEFINITION)
        .collect();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].annotations().len(), 1);
    assert_eq!(
        definitions[0].annotations()[0].value().as_literal(),
        Some("FlyBase:FBrf0000001")
    );
}

#[test]
fn unmodeled_triples_survive_rewriting() {
    let mut graph = load(MEDULLA_TTL);
    let before = graph.len();
    let changeset = rewrite(&graph);
    apply_changeset(&mut graph, &changeset);

    // One literal swapped, one reification replaced: the triple count is
    // stable and the logical definition is untouched.
    assert_eq!(graph.len(), before);
    let rewritten = parse_ontology(&graph).unwrap();
    let medulla = oxrdf::NamedNode::new_unchecked("http://purl.obolibrary.org/obo/FBbt_00003748");
    assert_eq!(rewritten.equivalence_axioms_of(medulla.as_ref()).len(), 1);
    assert_eq!(rewritten.class_count(), 3);
}

#[test]
fn rewritten_graph_serializes_and_reloads() {
    let mut graph = load(MEDULLA_TTL);
    let changeset = rewrite(&graph);
    apply_changeset(&mut graph, &changeset);

    let mut serializer = TurtleSerializer::new().for_writer(Vec::new());
    for triple in graph.iter() {
        serializer.serialize_triple(triple).unwrap();
    }
    let data = serializer.finish().unwrap();

    let reloaded = load(std::str::from_utf8(&data).unwrap());
    assert_eq!(reloaded.len(), graph.len());
}

#[test]
fn additions_graph_holds_the_new_definition_only() {
    let graph = load(MEDULLA_TTL);
    let changeset = rewrite(&graph);
    let additions = additions_graph(&changeset);

    // Base triple plus a reification carrying the inherited xref.
    assert_eq!(additions.len(), 6);
    let ontology = parse_ontology(&additions).unwrap();
    assert_eq!(ontology.class_count(), 0);
}
