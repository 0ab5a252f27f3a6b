//! Tuple extraction pipeline.
//!
//! Reads a JSON-lines dump of tagger output, decodes each sentence into
//! zero or more extraction tuples and appends them to `extraction.txt`.
//!
//! # Processing
//! 1. Raw argmax tags are cleaned against the token strings ([TagFilter]).
//! 1. The cleaned sequence is split into one group per predicate
//!    occurrence; sentences without a predicate are skipped, since
//!    extraction is impossible without a predicate anchor.
//! 1. Each group is materialized into a textual tuple and scored.
//! 1. Tuples are written in sentence order, one line each.
//!
//! Sentences are independent, so decoding is parallelized across them;
//! only the final write is sequential.
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;

use crate::decoding::{score, segment, ExtractionTuple, TagFilter, TupleBuilder};
use crate::detok::Wordpiece;
use crate::error::Error;
use crate::pipeline::Pipeline;
use crate::tagger::{TaggedReader, TaggedSentence};
use crate::writing::{ExtractionWriter, OutputMode};

/// One decoded extraction, ready for writing.
struct Decoded {
    sentence: String,
    confidence: f32,
    tuple: ExtractionTuple,
}

pub struct Extraction {
    src: PathBuf,
    dst: PathBuf,
    mode: OutputMode,
    filter: TagFilter,
}

impl Extraction {
    pub fn new(src: PathBuf, dst: PathBuf, mode: OutputMode, min_predicate_run: usize) -> Self {
        Self {
            src,
            dst,
            mode,
            filter: TagFilter::with_min_predicate_run(min_predicate_run),
        }
    }

    /// Decode one sentence into its extractions.
    fn decode(&self, ts: &TaggedSentence, idx: usize) -> Result<Vec<Decoded>, Error> {
        let raw = ts.raw_tags()?;
        let clean = self.filter.clean(ts.tokens(), &raw, idx)?;

        let groups = segment(&clean);
        if groups.is_empty() {
            debug!("sentence {idx}: no predicate, skipping");
            return Ok(Vec::new());
        }

        let builder = TupleBuilder::new(Wordpiece);
        Ok(groups
            .iter()
            .map(|group| {
                let (tuple, spans) = builder.build(ts.sentence(), ts.tokens(), group);
                let confidence = score(ts.probs(), &spans);
                Decoded {
                    sentence: ts.sentence().to_string(),
                    confidence,
                    tuple,
                }
            })
            .collect())
    }
}

impl Pipeline<()> for Extraction {
    fn run(&self) -> Result<(), Error> {
        info!("extracting from {:?}", self.src);
        let reader = TaggedReader::from_path(&self.src)?;

        // malformed dumps are fatal, with the offending line logged
        let records: Vec<TaggedSentence> = reader
            .enumerate()
            .map(|(idx, r)| {
                r.map_err(|e| {
                    error!("sentence {idx}: {e}");
                    e
                })
            })
            .collect::<Result<_, Error>>()?;

        // sentence decodes are independent; collect preserves order
        let decoded: Vec<Vec<Decoded>> = records
            .par_iter()
            .enumerate()
            .map(|(idx, ts)| self.decode(ts, idx))
            .collect::<Result<_, Error>>()?;

        let mut writer = ExtractionWriter::new(&self.dst, self.mode)?;
        for extractions in decoded {
            for d in extractions {
                writer.write(&d.sentence, d.confidence, &d.tuple)?;
            }
        }
        writer.flush()?;

        info!("wrote {} extractions", writer.nb_lines());
        Ok(())
    }
}
