use anyhow::{bail, ensure, Context};
use clap::{Parser, ValueHint};
use oxdefine::{
    additions_graph, apply_changeset, parse_ontology, vocab, Annotation, BatchRewriter,
    DefinitionGenerator, SubDefinitionResolver,
};
use oxrdf::{Graph, NamedNode};
use oxttl::{NTriplesParser, NTriplesSerializer, TurtleParser, TurtleSerializer};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about, version, name = "oxdefine")]
/// Rewrites placeholder definitions in OBO-style ontologies.
struct Args {
    /// Ontology file to read. Turtle (.ttl) and N-Triples (.nt) are
    /// supported, guessed from the extension.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: PathBuf,
    /// File to write the rewritten ontology to.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: PathBuf,
    /// Restrict rewriting to terms of the given OBO prefix (e.g. "FBbt").
    #[arg(short = 'f', long, value_name = "PFX")]
    filter_prefix: Option<String>,
    /// Replace "." placeholders with definitions generated from the terms'
    /// logical definitions.
    #[arg(short = 'd', long)]
    dot_definitions: bool,
    /// Also generate definitions for terms that have none at all.
    #[arg(short = 'D', long, requires = "dot_definitions")]
    null_definitions: bool,
    /// Do not append the term ID to generated head-class labels.
    #[arg(long)]
    no_ids: bool,
    /// Annotation to attach to newly generated definitions, as a property
    /// IRI followed by a literal value. May be repeated.
    #[arg(long, num_args = 2, value_names = ["PROPERTY", "VALUE"])]
    add_annotation: Vec<String>,
    /// Replace "$sub_PFX:1234" placeholders with the definition of the
    /// referenced term.
    #[arg(short = 's', long)]
    sub_definitions: bool,
    /// Also rewrite obsolete terms, which are skipped by default.
    #[arg(long)]
    include_obsolete: bool,
    /// Additionally write the added assertions alone to a separate file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "FILE")]
    write_to: Option<PathBuf>,
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    ensure!(
        args.dot_definitions || args.sub_definitions,
        "nothing to do: enable --dot-definitions and/or --sub-definitions"
    );
    let default_annotations = parse_annotation_args(&args.add_annotation)?;

    let mut engine = BatchRewriter::new();
    if args.sub_definitions {
        engine.add_rewriter(SubDefinitionResolver::new());
    }
    if args.dot_definitions {
        engine.add_rewriter(
            DefinitionGenerator::new()
                .with_ids(!args.no_ids)
                .with_default_annotations(default_annotations),
        );
    }
    if let Some(prefix) = &args.filter_prefix {
        engine.set_iri_filter(Some(format!("{}{prefix}", vocab::OBO_PREFIX)));
    }
    engine.set_generate_missing(args.null_definitions);
    engine.set_include_obsolete(args.include_obsolete);

    let mut graph = load_graph(&args.input)?;
    let ontology = parse_ontology(&graph)
        .with_context(|| format!("invalid ontology in {}", args.input.display()))?;
    info!(
        "loaded {} triples and {} classes from {}",
        graph.len(),
        ontology.class_count(),
        args.input.display()
    );

    let changeset = engine.rewrite(&ontology, vocab::DEFINITION);
    info!(
        "replacing {} definitions, adding {}",
        changeset.removal_count(),
        changeset.addition_count()
    );

    apply_changeset(&mut graph, &changeset);
    save_graph(&graph, &args.output)?;
    if let Some(path) = &args.write_to {
        save_graph(&additions_graph(&changeset), path)?;
    }
    Ok(())
}

/// Turns the flattened --add-annotation pairs into annotations, validating
/// the property IRIs before any rewriting starts.
fn parse_annotation_args(values: &[String]) -> anyhow::Result<Vec<Annotation>> {
    values
        .chunks(2)
        .map(|pair| {
            let [property, value] = pair else {
                bail!("--add-annotation expects a property IRI and a value");
            };
            let property = NamedNode::new(property)
                .with_context(|| format!("invalid annotation property IRI '{property}'"))?;
            Ok(Annotation::new(property, value.as_str()))
        })
        .collect()
}

fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut graph = Graph::new();
    match path.extension().and_then(OsStr::to_str) {
        Some("ttl") => {
            for triple in TurtleParser::new().for_reader(reader) {
                graph.insert(&triple?);
            }
        }
        Some("nt") => {
            for triple in NTriplesParser::new().for_reader(reader) {
                graph.insert(&triple?);
            }
        }
        _ => bail!(
            "cannot guess the RDF format of {} from its extension",
            path.display()
        ),
    }
    Ok(graph)
}

fn save_graph(graph: &Graph, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    match path.extension().and_then(OsStr::to_str) {
        Some("ttl") => {
            let mut serializer = TurtleSerializer::new().for_writer(writer);
            for triple in graph.iter() {
                serializer.serialize_triple(triple)?;
            }
            serializer.finish()?.flush()?;
        }
        Some("nt") => {
            let mut serializer = NTriplesSerializer::new().for_writer(writer);
            for triple in graph.iter() {
                serializer.serialize_triple(triple)?;
            }
            serializer.finish().flush()?;
        }
        _ => bail!(
            "cannot guess the RDF format of {} from its extension",
            path.display()
        ),
    }
    Ok(())
}
