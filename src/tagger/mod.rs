/*! Sequence tagger adapter.

The neural model is an external collaborator: anything able to produce a
per-token probability row per class for a tokenized sentence can implement
[Tagger] and drive the extraction pipeline. The crate ships
[reader::TaggedReader], which replays model output dumped to a JSON-lines
file, so extraction runs without a neural runtime.
!*/
mod reader;
mod tagged;

pub use reader::TaggedReader;
pub use tagged::TaggedSentence;

use crate::error::Error;

/// Produces per-token class probabilities for a tokenized sentence.
///
/// Rows must sum to 1 (softmaxed) and have [crate::tags::NB_CLASSES]
/// columns; one row per token.
pub trait Tagger {
    fn predict(&self, tokens: &[String]) -> Result<Vec<Vec<f32>>, Error>;

    /// Predict and bundle into a [TaggedSentence] ready for decoding.
    fn tag(
        &self,
        sentence: &str,
        tokens: Vec<String>,
        sentence_idx: usize,
    ) -> Result<TaggedSentence, Error> {
        let probs = self.predict(&tokens)?;
        TaggedSentence::new(sentence.to_string(), tokens, probs, sentence_idx)
    }
}

/// Numerically stable softmax over one logit row.
pub fn softmax(row: &[f32]) -> Vec<f32> {
    let max = row.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = row.iter().map(|x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|x| x / sum).collect()
}
