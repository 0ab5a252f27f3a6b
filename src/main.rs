//! # Carver
//!
//! Carver decodes sequence-tagger output into open-information-extraction
//! tuples, and builds probing-task datasets from span annotations.
//!
//! This project can be used both as a tool to produce extraction files
//! and probing datasets, or as a lib to integrate tag decoding into other
//! projects.
//!
//! ## Getting started
//!
//! ```sh
//! carver 0.1.0
//! open information extraction tool.
//!
//! USAGE:
//!     carver <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Decode tagger output into extraction tuples
//!     help       Prints this message or the help of the given subcommand(s)
//!     probe      Build a probing dataset from span annotations
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use carver::error::Error;
use carver::pipeline::{Extraction, Pipeline};
use carver::probing::{DenseDataset, EmbeddingTable, IndexDataset, Registry};
use carver::writing::OutputMode;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Carver::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Carver::Extract(e) => {
            let mode = if e.binary {
                OutputMode::Binary
            } else {
                OutputMode::Full
            };
            let p = Extraction::new(e.src, e.dst, mode, e.min_predicate_run);
            p.run()?;
        }

        cli::Carver::Probe(p) => {
            if p.dense {
                let embeddings_path = p
                    .embeddings
                    .ok_or_else(|| Error::Custom("--dense requires --embeddings".to_string()))?;
                let table = EmbeddingTable::from_path(&embeddings_path, p.dim)?;
                let ds = DenseDataset::from_path(&p.src, &table, Registry::new())?;
                println!(
                    "{} instances, width {}, {} classes",
                    ds.len(),
                    ds.width(),
                    ds.classes().len()
                );
            } else {
                let ds = IndexDataset::from_path(&p.src, Registry::new(), Registry::new())?;
                println!(
                    "{} instances, {} words, {} classes",
                    ds.len(),
                    ds.words().len(),
                    ds.classes().len()
                );
            }
        }
    };
    Ok(())
}
