/*! Tag-to-tuple decoding.

Turns raw per-token tagger output into extraction tuples:

- [TagFilter] cleans argmax tags using the token strings,
- [segment::segment] isolates one [PredicateGroup] per predicate occurrence,
- [TupleBuilder] materializes the textual tuple and its token spans,
- [confidence::score] aggregates per-token probabilities into one score.

Throughout the module, structurally masked positions (special tokens,
subword continuations, padding) are *transparent* for run boundaries: two
same-role runs separated only by masked positions count as a single span.
This policy is applied identically in segmentation and tuple building.
!*/
mod confidence;
mod filter;
mod segment;
mod tuple;

pub use confidence::score;
pub use filter::{is_structural, CleanTags, TagFilter};
pub use segment::{segment, PredicateGroup};
pub use tuple::{ExtractionTuple, Span, TupleBuilder};

use crate::tags::Tag;

/// Maximal runs of identical role tags.
///
/// Masked positions never belong to a run and never terminate one;
/// non-masked [Tag::NoRole] positions terminate the current run. Returned
/// index lists only contain role-bearing positions, in ascending order.
pub(crate) fn role_runs(tags: &[Tag], mask: &[bool]) -> Vec<(Tag, Vec<usize>)> {
    let mut runs: Vec<(Tag, Vec<usize>)> = Vec::new();
    let mut current: Option<(Tag, Vec<usize>)> = None;

    for (i, tag) in tags.iter().enumerate() {
        if mask[i] {
            continue;
        }
        if !tag.is_role() {
            if let Some(run) = current.take() {
                runs.push(run);
            }
            continue;
        }
        match &mut current {
            Some((t, idxs)) if t == tag => idxs.push(i),
            _ => {
                if let Some(run) = current.take() {
                    runs.push(run);
                }
                current = Some((*tag, vec![i]));
            }
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::role_runs;
    use crate::tags::Tag::*;

    #[test]
    fn runs_split_on_no_role() {
        let tags = vec![NoRole, Predicate, Predicate, NoRole, Arg(0)];
        let mask = vec![false; 5];
        let runs = role_runs(&tags, &mask);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], (Predicate, vec![1, 2]));
        assert_eq!(runs[1], (Arg(0), vec![4]));
    }

    #[test]
    fn masked_positions_are_transparent() {
        // predicate run interrupted by a masked subword continuation
        let tags = vec![Predicate, NoRole, Predicate];
        let mask = vec![false, true, false];
        let runs = role_runs(&tags, &mask);
        assert_eq!(runs, vec![(Predicate, vec![0, 2])]);
    }

    #[test]
    fn role_change_splits_even_across_mask() {
        let tags = vec![Predicate, NoRole, Arg(0)];
        let mask = vec![false, true, false];
        let runs = role_runs(&tags, &mask);
        assert_eq!(runs.len(), 2);
    }
}
