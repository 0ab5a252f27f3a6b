/*! Probing-task dataset construction.

Converts span-pair annotations (JSON lines) into fixed-length numeric
instances for lightweight probing classifiers. Shares no code path with
the extraction pipeline.

Three representations are available:
- [IndexDataset]: features are vocabulary ids of the two span-head words,
- [SingleSpanDataset]: same, for node-level tasks annotating one span,
- [DenseDataset]: features are concatenated per-token embedding vectors of
  both spans, zero-padded to the dataset-wide maximum width.

Word and class id assignment goes through an append-only [Registry] whose
ids follow insertion order, so a validation split built on top of a
training split's registries keeps every training id stable.
!*/
mod dataset;
mod embeddings;
mod record;
mod vocab;

pub use dataset::{pad_ragged, DenseDataset, IndexDataset, SingleSpanDataset};
pub use embeddings::EmbeddingTable;
pub use record::{NodeReader, NodeRecord, NodeTarget, ProbingReader, ProbingRecord, Target};
pub use vocab::Registry;

/// Whitespace tokenization of an annotated sentence. Spans index into the
/// resulting list.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
