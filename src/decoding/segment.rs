//! Predicate-wise segmentation of a cleaned tag sequence.
use crate::tags::{Tag, TagSequence};

use super::{role_runs, CleanTags};

/// A tag sequence restricted to a single predicate occurrence.
///
/// Holds an owned copy of the full sequence in which every predicate
/// position outside its own run has been reset to [Tag::NoRole], so
/// argument tags are shared between sibling groups but predicate identity
/// is isolated. Groups never alias each other's storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateGroup {
    tags: TagSequence,
    mask: Vec<bool>,
    predicate_idxs: Vec<usize>,
}

impl PredicateGroup {
    pub fn tags(&self) -> &TagSequence {
        &self.tags
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Token positions of this group's predicate run (ascending).
    pub fn predicate_idxs(&self) -> &[usize] {
        &self.predicate_idxs
    }
}

/// Split a cleaned sequence into one [PredicateGroup] per maximal
/// predicate run, in left-to-right order.
///
/// Runs are counted mask-transparently (see [super::role_runs]). An input
/// with no predicate run yields an empty vector; such sentences carry
/// nothing to extract.
pub fn segment(clean: &CleanTags) -> Vec<PredicateGroup> {
    role_runs(&clean.tags, &clean.mask)
        .into_iter()
        .filter(|(tag, _)| tag.is_predicate())
        .map(|(_, idxs)| {
            let tags = clean
                .tags
                .iter()
                .enumerate()
                .map(|(i, tag)| {
                    if tag.is_predicate() && !idxs.contains(&i) {
                        Tag::NoRole
                    } else {
                        *tag
                    }
                })
                .collect();
            PredicateGroup {
                tags,
                mask: clean.mask.clone(),
                predicate_idxs: idxs,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoding::CleanTags;
    use crate::tags::Tag::*;

    fn clean(tags: Vec<crate::tags::Tag>) -> CleanTags {
        let mask = vec![false; tags.len()];
        CleanTags { tags, mask }
    }

    #[test]
    fn one_group_per_predicate_run() {
        let c = clean(vec![
            Predicate, NoRole, Arg(0), NoRole, Predicate, Predicate, NoRole,
        ]);
        let groups = segment(&c);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].predicate_idxs(), &[0]);
        assert_eq!(groups[1].predicate_idxs(), &[4, 5]);
    }

    #[test]
    fn sibling_predicates_reset_arguments_kept() {
        let c = clean(vec![Predicate, Arg(0), Predicate]);
        let groups = segment(&c);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tags(), &vec![Predicate, Arg(0), NoRole]);
        assert_eq!(groups[1].tags(), &vec![NoRole, Arg(0), Predicate]);
    }

    #[test]
    fn zero_predicates_zero_groups() {
        let c = clean(vec![NoRole, Arg(0), Arg(1)]);
        assert!(segment(&c).is_empty());
    }

    #[test]
    fn mask_does_not_split_a_predicate_occurrence() {
        let c = CleanTags {
            tags: vec![Predicate, NoRole, Predicate],
            mask: vec![false, true, false],
        };
        let groups = segment(&c);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].predicate_idxs(), &[0, 2]);
    }

    #[test]
    fn groups_do_not_alias() {
        let c = clean(vec![Predicate, Predicate]);
        let groups = segment(&c);
        assert_eq!(groups.len(), 1);
        // mutating the source after segmentation is impossible by API;
        // check the group owns a full-length copy instead
        assert_eq!(groups[0].tags().len(), 2);
    }
}
