//! Fixed-length probing datasets.
use std::path::Path;

use log::info;

use crate::error::Error;

use super::{
    tokenize, EmbeddingTable, NodeReader, NodeRecord, ProbingReader, ProbingRecord, Registry,
    Target,
};

/// Check a target span against its sentence's token count.
///
/// Spans are `[lo, hi)`; an empty or out-of-bounds span is an upstream
/// annotation error and carries enough context to find it.
fn check_span(
    span: (usize, usize),
    nb_tokens: usize,
    sentence_idx: usize,
) -> Result<(), Error> {
    let (lo, hi) = span;
    if lo >= hi || hi > nb_tokens {
        return Err(Error::SpanOutOfRange {
            sentence_idx,
            span,
            nb_tokens,
        });
    }
    Ok(())
}

/// Right-pad every row with zeros up to the longest one.
/// Returns the resulting width.
pub fn pad_ragged(rows: &mut [Vec<f32>]) -> usize {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, 0.0);
    }
    width
}

/// Index-mode dataset: features are the vocabulary ids of the two
/// span-head words of each target.
#[derive(Debug)]
pub struct IndexDataset {
    x: Vec<[usize; 2]>,
    y: Vec<usize>,
    words: Registry,
    classes: Registry,
}

impl IndexDataset {
    /// Build from a JSONL task file. Pass empty registries for a training
    /// split, or a training split's registries for a validation split
    /// (unseen words/labels are appended, existing ids are kept).
    pub fn from_path(src: &Path, words: Registry, classes: Registry) -> Result<Self, Error> {
        let reader = ProbingReader::from_path(src)?;
        let ds = Self::from_records(reader, words, classes)?;
        info!(
            "loaded {} instances, {} words, {} classes from {:?}",
            ds.len(),
            ds.words().len(),
            ds.classes().len(),
            src
        );
        Ok(ds)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = Result<ProbingRecord, Error>>,
        words: Registry,
        classes: Registry,
    ) -> Result<Self, Error> {
        Self::from_records_filtered(records, &[], words, classes)
    }

    /// Like [`from_records`](Self::from_records), but drops every target
    /// whose label is in `skip_labels`. Used for tasks that annotate a
    /// placeholder class (such as `no_relation`) not meant to be probed.
    pub fn from_records_filtered(
        records: impl IntoIterator<Item = Result<ProbingRecord, Error>>,
        skip_labels: &[&str],
        mut words: Registry,
        mut classes: Registry,
    ) -> Result<Self, Error> {
        let mut x = Vec::new();
        let mut y = Vec::new();

        for (sentence_idx, record) in records.into_iter().enumerate() {
            let record = record?;
            let tokens = tokenize(&record.text);

            for target in &record.targets {
                if skip_labels.contains(&target.label.as_str()) {
                    continue;
                }
                check_span(target.span1, tokens.len(), sentence_idx)?;
                check_span(target.span2, tokens.len(), sentence_idx)?;

                let head1 = words.intern(tokens[target.span1.0]);
                let head2 = words.intern(tokens[target.span2.0]);
                x.push([head1, head2]);
                y.push(classes.intern(&target.label));
            }
        }

        Ok(Self {
            x,
            y,
            words,
            classes,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The `i`-th (features, class id) pair.
    pub fn get(&self, i: usize) -> ([usize; 2], usize) {
        (self.x[i], self.y[i])
    }

    pub fn words(&self) -> &Registry {
        &self.words
    }

    pub fn classes(&self) -> &Registry {
        &self.classes
    }

    /// Hand the registries over, e.g. to build a validation split.
    pub fn into_registries(self) -> (Registry, Registry) {
        (self.words, self.classes)
    }
}

/// Index-mode dataset over single-span targets: the feature is the
/// vocabulary id of the span's head word. Used by node-level tasks such
/// as monotonicity polarity.
#[derive(Debug)]
pub struct SingleSpanDataset {
    x: Vec<usize>,
    y: Vec<usize>,
    words: Registry,
    classes: Registry,
}

impl SingleSpanDataset {
    pub fn from_path(src: &Path, words: Registry, classes: Registry) -> Result<Self, Error> {
        let reader = NodeReader::from_path(src)?;
        let ds = Self::from_records(reader, words, classes)?;
        info!(
            "loaded {} single-span instances, {} words, {} classes from {:?}",
            ds.len(),
            ds.words().len(),
            ds.classes().len(),
            src
        );
        Ok(ds)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = Result<NodeRecord, Error>>,
        mut words: Registry,
        mut classes: Registry,
    ) -> Result<Self, Error> {
        let mut x = Vec::new();
        let mut y = Vec::new();

        for (sentence_idx, record) in records.into_iter().enumerate() {
            let record = record?;
            let tokens = tokenize(&record.text);

            for target in &record.targets {
                check_span(target.span, tokens.len(), sentence_idx)?;
                x.push(words.intern(tokens[target.span.0]));
                y.push(classes.intern(&target.label));
            }
        }

        Ok(Self {
            x,
            y,
            words,
            classes,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The `i`-th (word id, class id) pair.
    pub fn get(&self, i: usize) -> (usize, usize) {
        (self.x[i], self.y[i])
    }

    pub fn words(&self) -> &Registry {
        &self.words
    }

    pub fn classes(&self) -> &Registry {
        &self.classes
    }

    pub fn into_registries(self) -> (Registry, Registry) {
        (self.words, self.classes)
    }
}

/// Dense-mode dataset: features are the concatenated embedding vectors of
/// every token in both spans, zero-padded to the dataset-wide maximum.
#[derive(Debug)]
pub struct DenseDataset {
    x: Vec<Vec<f32>>,
    y: Vec<usize>,
    width: usize,
    classes: Registry,
}

impl DenseDataset {
    pub fn from_path(
        src: &Path,
        table: &EmbeddingTable,
        classes: Registry,
    ) -> Result<Self, Error> {
        let reader = ProbingReader::from_path(src)?;
        let ds = Self::from_records(reader, table, classes)?;
        info!(
            "loaded {} dense instances (width {}) from {:?}",
            ds.len(),
            ds.width(),
            src
        );
        Ok(ds)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = Result<ProbingRecord, Error>>,
        table: &EmbeddingTable,
        classes: Registry,
    ) -> Result<Self, Error> {
        Self::from_records_filtered(records, &[], table, classes)
    }

    /// Like [`from_records`](Self::from_records), but drops every target
    /// whose label is in `skip_labels`.
    pub fn from_records_filtered(
        records: impl IntoIterator<Item = Result<ProbingRecord, Error>>,
        skip_labels: &[&str],
        table: &EmbeddingTable,
        mut classes: Registry,
    ) -> Result<Self, Error> {
        let mut x: Vec<Vec<f32>> = Vec::new();
        let mut y = Vec::new();

        for (sentence_idx, record) in records.into_iter().enumerate() {
            let record = record?;
            let tokens = tokenize(&record.text);

            for target in &record.targets {
                if skip_labels.contains(&target.label.as_str()) {
                    continue;
                }
                x.push(Self::features(target, &tokens, table, sentence_idx)?);
                y.push(classes.intern(&target.label));
            }
        }

        let width = pad_ragged(&mut x);

        Ok(Self {
            x,
            y,
            width,
            classes,
        })
    }

    /// Embeddings of both spans' tokens, concatenated in span order.
    fn features(
        target: &Target,
        tokens: &[&str],
        table: &EmbeddingTable,
        sentence_idx: usize,
    ) -> Result<Vec<f32>, Error> {
        check_span(target.span1, tokens.len(), sentence_idx)?;
        check_span(target.span2, tokens.len(), sentence_idx)?;

        let mut row = Vec::new();
        for &span in &[target.span1, target.span2] {
            for token in &tokens[span.0..span.1] {
                row.extend_from_slice(table.get(token)?);
            }
        }
        Ok(row)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Row width after padding.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The `i`-th (features, class id) pair.
    pub fn get(&self, i: usize) -> (&[f32], usize) {
        (&self.x[i], self.y[i])
    }

    pub fn classes(&self) -> &Registry {
        &self.classes
    }
}
