//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "carver", about = "open information extraction tool.")]
/// Holds every command that is callable by the `carver` command.
pub enum Carver {
    #[structopt(about = "Decode tagger output into extraction tuples")]
    Extract(Extract),
    #[structopt(about = "Build a probing dataset from span annotations")]
    Probe(Probe),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "tagger output dump (JSON lines)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder for extraction.txt")]
    pub dst: PathBuf,
    #[structopt(
        long = "binary",
        help = "force confidence to 1.0 and keep at most predicate + 2 arguments"
    )]
    pub binary: bool,
    #[structopt(
        long = "min-pred-run",
        default_value = "1",
        help = "drop predicate runs shorter than this many tokens"
    )]
    pub min_predicate_run: usize,
}

#[derive(Debug, StructOpt)]
/// Probe command and parameters.
pub struct Probe {
    #[structopt(parse(from_os_str), help = "probing task file (JSON lines)")]
    pub src: PathBuf,
    #[structopt(long = "dense", help = "embed span tokens instead of indexing them")]
    pub dense: bool,
    #[structopt(
        parse(from_os_str),
        long = "embeddings",
        help = "text-format embedding file (required with --dense)"
    )]
    pub embeddings: Option<PathBuf>,
    #[structopt(
        long = "dim",
        default_value = "300",
        help = "embedding dimension (dense mode)"
    )]
    pub dim: usize,
}
