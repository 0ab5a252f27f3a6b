//! Structural cleaning of raw argmax tags.
use log::debug;

use crate::error::Error;
use crate::tags::{Tag, TagSequence};

use super::role_runs;

/// Wordpiece-style special tokens that never carry a role.
const SPECIAL_TOKENS: [&str; 4] = ["[CLS]", "[SEP]", "[PAD]", "[UNK]"];

/// Marker prefix of subword continuation tokens.
const CONTINUATION_PREFIX: &str = "##";

/// Default minimum predicate-run length: keep runs of any length.
pub const MIN_PREDICATE_RUN: usize = 1;

/// True for tokens that are tokenizer artifacts rather than words.
pub fn is_structural(token: &str) -> bool {
    token.starts_with(CONTINUATION_PREFIX) || SPECIAL_TOKENS.contains(&token)
}

/// A cleaned tag sequence along with its structural mask.
///
/// `mask[i]` is true when position `i` holds a tokenizer artifact; those
/// positions always carry [Tag::NoRole] in `tags`.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTags {
    pub tags: TagSequence,
    pub mask: Vec<bool>,
}

/// Rewrites raw argmax tags so that downstream decoding only ever sees
/// role tags on real words.
///
/// Rules, in order:
/// 1. structural positions are forced to [Tag::NoRole],
/// 2. predicate runs shorter than [TagFilter::min_predicate_run] are
///    demoted to [Tag::NoRole] (default 1: keep everything),
/// 3. runs conflicting with the mask end at the mask boundary (implied
///    by rule 1).
///
/// Filtering is idempotent.
#[derive(Debug, Clone)]
pub struct TagFilter {
    min_predicate_run: usize,
}

impl TagFilter {
    /// Demote predicate runs shorter than `min_predicate_run` tokens.
    pub fn with_min_predicate_run(min_predicate_run: usize) -> Self {
        Self { min_predicate_run }
    }

    pub fn min_predicate_run(&self) -> usize {
        self.min_predicate_run
    }

    /// Clean one sentence's tags. `sentence_idx` is error context only.
    pub fn clean(
        &self,
        tokens: &[String],
        raw: &TagSequence,
        sentence_idx: usize,
    ) -> Result<CleanTags, Error> {
        if tokens.len() != raw.len() {
            return Err(Error::LengthMismatch {
                sentence_idx,
                nb_tokens: tokens.len(),
                nb_tags: raw.len(),
            });
        }

        let mask: Vec<bool> = tokens.iter().map(|t| is_structural(t)).collect();
        let mut tags: TagSequence = raw
            .iter()
            .zip(mask.iter())
            .map(|(tag, masked)| if *masked { Tag::NoRole } else { *tag })
            .collect();

        if self.min_predicate_run > 1 {
            for (tag, idxs) in role_runs(&tags, &mask) {
                if tag.is_predicate() && idxs.len() < self.min_predicate_run {
                    debug!(
                        "sentence {}: demoting predicate run of length {}",
                        sentence_idx,
                        idxs.len()
                    );
                    for i in idxs {
                        tags[i] = Tag::NoRole;
                    }
                }
            }
        }

        Ok(CleanTags { tags, mask })
    }

    /// Clean a whole batch, keeping sentence order.
    pub fn clean_batch(
        &self,
        batch: &[(Vec<String>, TagSequence)],
    ) -> Result<Vec<CleanTags>, Error> {
        batch
            .iter()
            .enumerate()
            .map(|(idx, (tokens, tags))| self.clean(tokens, tags, idx))
            .collect()
    }
}

impl Default for TagFilter {
    /// Keeps predicate runs of any length ([MIN_PREDICATE_RUN]).
    fn default() -> Self {
        Self {
            min_predicate_run: MIN_PREDICATE_RUN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tag::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn structural_positions_are_masked() {
        let tokens = toks(&["[CLS]", "the", "ca", "##t", "[SEP]"]);
        let raw = vec![Predicate, NoRole, Arg(0), Arg(0), Predicate];

        let clean = TagFilter::default().clean(&tokens, &raw, 0).unwrap();
        assert_eq!(clean.tags, vec![NoRole, NoRole, Arg(0), NoRole, NoRole]);
        assert_eq!(clean.mask, vec![true, false, false, true, true]);
    }

    #[test]
    fn idempotent() {
        let tokens = toks(&["[CLS]", "sa", "##t", "on", "[SEP]"]);
        let raw = vec![Arg(1), Predicate, Predicate, Predicate, NoRole];

        let f = TagFilter::default();
        let once = f.clean(&tokens, &raw, 0).unwrap();
        let twice = f.clean(&tokens, &once.tags, 0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn length_mismatch_is_fatal() {
        let tokens = toks(&["a", "b"]);
        let raw = vec![NoRole];
        let err = TagFilter::default().clean(&tokens, &raw, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                sentence_idx: 3,
                nb_tokens: 2,
                nb_tags: 1
            }
        ));
    }

    #[test]
    fn short_predicate_runs_survive_by_default() {
        let tokens = toks(&["a", "b", "c"]);
        let raw = vec![NoRole, Predicate, NoRole];
        let clean = TagFilter::default().clean(&tokens, &raw, 0).unwrap();
        assert_eq!(clean.tags, raw);
    }

    #[test]
    fn min_run_hook_demotes_short_runs() {
        let tokens = toks(&["a", "b", "c", "d"]);
        let raw = vec![Predicate, NoRole, Predicate, Predicate];
        let clean = TagFilter::with_min_predicate_run(2)
            .clean(&tokens, &raw, 0)
            .unwrap();
        assert_eq!(clean.tags, vec![NoRole, NoRole, Predicate, Predicate]);
    }

    #[test]
    fn clean_batch_keeps_sentence_order() {
        let f = TagFilter::with_min_predicate_run(2);
        assert_eq!(f.min_predicate_run(), 2);

        let batch = vec![
            (toks(&["[CLS]", "runs"]), vec![Predicate, Predicate]),
            (toks(&["eats", "food"]), vec![Predicate, Arg(0)]),
        ];
        let cleaned = f.clean_batch(&batch).unwrap();
        assert_eq!(cleaned.len(), 2);
        // first sentence: lone predicate on "runs" demoted by the run
        // minimum once "[CLS]" is masked
        assert_eq!(cleaned[0].tags, vec![NoRole, NoRole]);
        // second sentence untouched apart from the demoted short run
        assert_eq!(cleaned[1].tags, vec![NoRole, Arg(0)]);
    }

    #[test]
    fn clean_batch_error_carries_batch_index() {
        let batch = vec![
            (toks(&["fine"]), vec![NoRole]),
            (toks(&["bad"]), vec![NoRole, NoRole]),
        ];
        let err = TagFilter::default().clean_batch(&batch).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                sentence_idx: 1,
                nb_tokens: 1,
                nb_tags: 2
            }
        ));
    }

    #[test]
    fn min_run_counts_across_mask() {
        // run of 2 real predicate tokens around a continuation: length 2
        let tokens = toks(&["sa", "##t", "on"]);
        let raw = vec![Predicate, Predicate, Predicate];
        let clean = TagFilter::with_min_predicate_run(2)
            .clean(&tokens, &raw, 0)
            .unwrap();
        assert_eq!(clean.tags, vec![Predicate, NoRole, Predicate]);
    }
}
