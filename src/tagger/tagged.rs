//! One sentence's worth of tagger output.
use crate::error::Error;
use crate::tags::{argmax_tags, TagSequence};

/// Tagger output for a single sentence: the original sentence text, its
/// subword tokens and one probability row per token.
#[derive(Debug, Clone)]
pub struct TaggedSentence {
    sentence: String,
    tokens: Vec<String>,
    probs: Vec<Vec<f32>>,
}

impl TaggedSentence {
    /// Build from already-normalized probability rows.
    ///
    /// Fails if tokens and rows disagree on length, or if any row does not
    /// have [crate::tags::NB_CLASSES] columns; `sentence_idx` is only used
    /// for error context.
    pub fn new(
        sentence: String,
        tokens: Vec<String>,
        probs: Vec<Vec<f32>>,
        sentence_idx: usize,
    ) -> Result<Self, Error> {
        if tokens.len() != probs.len() {
            return Err(Error::LengthMismatch {
                sentence_idx,
                nb_tokens: tokens.len(),
                nb_tags: probs.len(),
            });
        }
        if let Some(row) = probs.iter().find(|row| row.len() != crate::tags::NB_CLASSES) {
            return Err(Error::Custom(format!(
                "sentence {sentence_idx}: probability row has {} classes, expected {}",
                row.len(),
                crate::tags::NB_CLASSES
            )));
        }
        Ok(Self {
            sentence,
            tokens,
            probs,
        })
    }

    /// Build from raw logit rows, applying softmax per row.
    pub fn from_logits(
        sentence: String,
        tokens: Vec<String>,
        logits: Vec<Vec<f32>>,
        sentence_idx: usize,
    ) -> Result<Self, Error> {
        let probs = logits.iter().map(|row| super::softmax(row)).collect();
        Self::new(sentence, tokens, probs, sentence_idx)
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Per-token probability rows (tokens × classes).
    pub fn probs(&self) -> &[Vec<f32>] {
        &self.probs
    }

    /// Raw argmax tags, before any filtering.
    pub fn raw_tags(&self) -> Result<TagSequence, Error> {
        argmax_tags(&self.probs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tag;

    #[test]
    fn rejects_mismatched_lengths() {
        let r = TaggedSentence::new(
            "a b".to_string(),
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]],
            7,
        );
        match r {
            Err(Error::LengthMismatch {
                sentence_idx,
                nb_tokens,
                nb_tags,
            }) => {
                assert_eq!(sentence_idx, 7);
                assert_eq!(nb_tokens, 2);
                assert_eq!(nb_tags, 1);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn raw_tags_follow_argmax() {
        let mut pred = vec![0.0; crate::tags::NB_CLASSES];
        pred[Tag::Predicate.class()] = 1.0;
        let mut none = vec![0.0; crate::tags::NB_CLASSES];
        none[Tag::NoRole.class()] = 1.0;

        let ts = TaggedSentence::new(
            "the cat".to_string(),
            vec!["the".to_string(), "cat".to_string()],
            vec![none, pred],
            0,
        )
        .unwrap();

        assert_eq!(ts.raw_tags().unwrap(), vec![Tag::NoRole, Tag::Predicate]);
    }
}
