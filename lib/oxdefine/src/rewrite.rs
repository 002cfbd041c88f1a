//! Batch rewriting of annotation assertions.

use crate::axiom::AnnotationAssertion;
use crate::entity::OwlClass;
use crate::ontology::Ontology;
use oxrdf::NamedNodeRef;
use rustc_hash::FxHashSet;
use tracing::debug;

/// An object that can rewrite an annotation assertion value.
///
/// Rewriters must be side-effect-free aside from read access to the store,
/// and each invocation must be independent of prior invocations.
pub trait AnnotationRewriter {
    /// Rewrites an existing assertion.
    ///
    /// Returns `None` when this rewriter is not applicable to the value
    /// (or applicable but unable to compute a replacement); the caller then
    /// tries the next rewriter in its chain.
    fn rewrite(
        &self,
        ontology: &Ontology,
        class: &OwlClass,
        original: &AnnotationAssertion,
    ) -> Option<AnnotationAssertion>;

    /// Produces a de-novo assertion for a class that has none.
    ///
    /// Returns `None` when no generation is possible for this class.
    fn generate(&self, ontology: &Ontology, class: &OwlClass) -> Option<AnnotationAssertion>;
}

/// The outcome of a rewrite pass: assertions to remove and to add.
///
/// Both sets are content-addressed, so the same assertion reached through
/// several classes is recorded only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    removals: FxHashSet<AnnotationAssertion>,
    additions: FxHashSet<AnnotationAssertion>,
}

impl Changeset {
    /// Creates an empty changeset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the replacement of an assertion.
    pub fn record_replacement(&mut self, old: AnnotationAssertion, new: AnnotationAssertion) {
        self.removals.insert(old);
        self.additions.insert(new);
    }

    /// Records a de-novo addition.
    pub fn record_addition(&mut self, added: AnnotationAssertion) {
        self.additions.insert(added);
    }

    /// Returns the assertions to remove.
    pub fn removals(&self) -> impl Iterator<Item = &AnnotationAssertion> {
        self.removals.iter()
    }

    /// Returns the assertions to add.
    pub fn additions(&self) -> impl Iterator<Item = &AnnotationAssertion> {
        self.additions.iter()
    }

    /// Returns the number of recorded removals.
    pub fn removal_count(&self) -> usize {
        self.removals.len()
    }

    /// Returns the number of recorded additions.
    pub fn addition_count(&self) -> usize {
        self.additions.len()
    }

    /// Returns true if the changeset records no change at all.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}

/// Applies a chain of rewriters over the classes of an ontology.
///
/// The engine only reads from the store; the produced [`Changeset`] is
/// applied by the caller in a separate step.
#[derive(Default)]
pub struct BatchRewriter {
    rewriters: Vec<Box<dyn AnnotationRewriter>>,
    iri_filter: Option<String>,
    generate_missing: bool,
    include_obsolete: bool,
}

impl BatchRewriter {
    /// Creates a new engine with an empty rewriter chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rewriter to the chain. Rewriters are tried in insertion
    /// order and the first one that replaces an assertion wins.
    pub fn add_rewriter(&mut self, rewriter: impl AnnotationRewriter + 'static) {
        self.rewriters.push(Box::new(rewriter));
    }

    /// Restricts rewriting to classes whose IRI starts with the given
    /// prefix. `None` (the default) leaves the universe unrestricted.
    pub fn set_iri_filter(&mut self, filter: Option<String>) {
        self.iri_filter = filter;
    }

    /// Enables the production of a de-novo assertion for classes that have
    /// none. Disabled by default.
    pub fn set_generate_missing(&mut self, generate: bool) {
        self.generate_missing = generate;
    }

    /// Also rewrites obsolete classes, which are skipped by default.
    pub fn set_include_obsolete(&mut self, include: bool) {
        self.include_obsolete = include;
    }

    /// Rewrites the assertions carried by the given annotation property
    /// across the (optionally filtered) class universe.
    pub fn rewrite(&self, ontology: &Ontology, property: NamedNodeRef<'_>) -> Changeset {
        let mut changeset = Changeset::new();
        for class in ontology.classes() {
            if let Some(filter) = &self.iri_filter {
                if !class.as_str().starts_with(filter.as_str()) {
                    continue;
                }
            }
            self.rewrite_class(ontology, property, class, &mut changeset);
        }
        changeset
    }

    fn rewrite_class(
        &self,
        ontology: &Ontology,
        property: NamedNodeRef<'_>,
        class: &OwlClass,
        changeset: &mut Changeset,
    ) {
        if !self.include_obsolete && ontology.is_obsolete(class.iri().as_ref()) {
            debug!("skipping obsolete class {class}");
            return;
        }

        let originals: Vec<&AnnotationAssertion> = ontology
            .annotations_for(class.iri().as_ref())
            .iter()
            .filter(|a| a.property().as_ref() == property)
            .collect();

        for original in &originals {
            for rewriter in &self.rewriters {
                if let Some(replacement) = rewriter.rewrite(ontology, class, original) {
                    changeset.record_replacement((*original).clone(), replacement);
                    break;
                }
            }
        }

        if originals.is_empty() && self.generate_missing {
            for rewriter in &self.rewriters {
                if let Some(generated) = rewriter.generate(ontology, class) {
                    changeset.record_addition(generated);
                    break;
                }
            }
        }
    }
}
