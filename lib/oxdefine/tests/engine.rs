use oxdefine::{
    AnnotationAssertion, BatchRewriter, ClassExpression, DefinitionGenerator,
    EquivalentClassesAxiom, ObjectProperty, Ontology, OwlClass, SubDefinitionResolver, vocab,
};
use oxrdf::vocab::rdfs;
use oxrdf::{Literal, NamedNode};

fn node(iri: &str) -> NamedNode {
    NamedNode::new_unchecked(iri)
}

fn obo(id: &str) -> NamedNode {
    node(&format!("{}{id}", vocab::OBO_PREFIX))
}

fn add_defined_class(ontology: &mut Ontology, class: &NamedNode, label: &str) {
    ontology.add_class(OwlClass::new(class.clone()));
    ontology.add_annotation(AnnotationAssertion::new(
        class.clone(),
        rdfs::LABEL.into_owned(),
        label,
        Vec::new(),
    ));
    ontology.add_annotation(AnnotationAssertion::new(
        class.clone(),
        vocab::DEFINITION.into_owned(),
        ".",
        Vec::new(),
    ));

    let genus = obo("FBbt_00000001");
    ontology.add_equivalence(EquivalentClassesAxiom::new(
        OwlClass::new(class.clone()),
        vec![ClassExpression::intersection(vec![
            ClassExpression::class(OwlClass::new(genus.clone())),
            ClassExpression::some_values_from(
                ObjectProperty::new(obo("BFO_0000050")),
                ClassExpression::class(OwlClass::new(obo("FBbt_00000002"))),
            ),
        ])],
    ));
}

fn engine() -> BatchRewriter {
    let mut engine = BatchRewriter::new();
    engine.add_rewriter(DefinitionGenerator::new());
    engine
}

#[test]
fn prefix_filter_restricts_the_class_universe() {
    let mut ontology = Ontology::new(None);
    let fbbt = obo("FBbt_00000100");
    let go = obo("GO_0000001");
    add_defined_class(&mut ontology, &fbbt, "fly part");
    add_defined_class(&mut ontology, &go, "process");

    let mut engine = engine();
    engine.set_iri_filter(Some(format!("{}FBbt", vocab::OBO_PREFIX)));
    let changeset = engine.rewrite(&ontology, vocab::DEFINITION);

    assert_eq!(changeset.addition_count(), 1);
    assert_eq!(changeset.additions().next().unwrap().subject(), &fbbt);
}

#[test]
fn obsolete_classes_are_skipped_by_default() {
    let mut ontology = Ontology::new(None);
    let class = obo("FBbt_00000100");
    add_defined_class(&mut ontology, &class, "fly part");
    ontology.add_annotation(AnnotationAssertion::new(
        class.clone(),
        vocab::DEPRECATED.into_owned(),
        Literal::new_typed_literal("true", oxrdf::vocab::xsd::BOOLEAN),
        Vec::new(),
    ));

    let mut engine = engine();
    assert!(engine.rewrite(&ontology, vocab::DEFINITION).is_empty());

    engine.set_include_obsolete(true);
    assert_eq!(
        engine.rewrite(&ontology, vocab::DEFINITION).addition_count(),
        1
    );
}

#[test]
fn first_applicable_rewriter_wins() {
    let mut ontology = Ontology::new(None);
    let class = obo("FBbt_00000100");
    add_defined_class(&mut ontology, &class, "fly part");

    // The resolver is registered first but declines dot placeholders, so
    // the generator handles them.
    let mut engine = BatchRewriter::new();
    engine.add_rewriter(SubDefinitionResolver::new());
    engine.add_rewriter(DefinitionGenerator::new());
    let changeset = engine.rewrite(&ontology, vocab::DEFINITION);

    assert_eq!(changeset.addition_count(), 1);
    assert!(changeset
        .additions()
        .next()
        .unwrap()
        .literal_value()
        .unwrap()
        .starts_with("Any "));
}

#[test]
fn identical_replacements_are_recorded_once() {
    let mut ontology = Ontology::new(None);
    let class = obo("FBbt_00000100");
    add_defined_class(&mut ontology, &class, "fly part");
    // The same placeholder asserted twice collapses to one replacement.
    ontology.add_annotation(AnnotationAssertion::new(
        class.clone(),
        vocab::DEFINITION.into_owned(),
        ".",
        Vec::new(),
    ));

    let changeset = engine().rewrite(&ontology, vocab::DEFINITION);
    assert_eq!(changeset.removal_count(), 1);
    assert_eq!(changeset.addition_count(), 1);
}

#[test]
fn other_properties_are_left_alone() {
    let mut ontology = Ontology::new(None);
    let class = obo("FBbt_00000100");
    add_defined_class(&mut ontology, &class, "fly part");
    // A dot-valued comment must not look like a placeholder definition.
    ontology.add_annotation(AnnotationAssertion::new(
        class.clone(),
        rdfs::COMMENT.into_owned(),
        ".",
        Vec::new(),
    ));

    let changeset = engine().rewrite(&ontology, vocab::DEFINITION);
    assert_eq!(changeset.removal_count(), 1);
    for removed in changeset.removals() {
        assert_eq!(removed.property().as_ref(), vocab::DEFINITION);
    }
}

#[test]
fn unfiltered_rewrite_covers_every_class() {
    let mut ontology = Ontology::new(None);
    let fbbt = obo("FBbt_00000100");
    let go = obo("GO_0000001");
    add_defined_class(&mut ontology, &fbbt, "fly part");
    add_defined_class(&mut ontology, &go, "process");

    let changeset = engine().rewrite(&ontology, vocab::DEFINITION);
    assert_eq!(changeset.addition_count(), 2);
}
