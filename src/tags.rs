//! Tag vocabulary for open information extraction roles.
//!
//! The sequence tagger emits one class per token; classes map 1:1 onto
//! [Tag] values. The vocabulary is deliberately small: a predicate role,
//! a handful of indexed argument roles, and a no-role marker.
use crate::error::Error;

/// Number of argument roles in the tag set (`Arg(0)` to `Arg(NB_ARGS - 1)`).
pub const NB_ARGS: u8 = 4;

/// Total number of tagger output classes.
pub const NB_CLASSES: usize = 2 + NB_ARGS as usize;

/// A per-token role label.
///
/// Class-id layout follows the tagger head: `0` is the predicate,
/// `1..=NB_ARGS` are the argument roles, the last class is no-role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Predicate,
    Arg(u8),
    NoRole,
}

impl Tag {
    /// Map a raw argmax class id onto a [Tag].
    pub fn from_class(id: usize) -> Result<Tag, Error> {
        match id {
            0 => Ok(Tag::Predicate),
            i if i <= NB_ARGS as usize => Ok(Tag::Arg(i as u8 - 1)),
            i if i == NB_CLASSES - 1 => Ok(Tag::NoRole),
            i => Err(Error::UnknownTag(i)),
        }
    }

    /// Inverse of [Tag::from_class].
    pub fn class(&self) -> usize {
        match self {
            Tag::Predicate => 0,
            Tag::Arg(i) => *i as usize + 1,
            Tag::NoRole => NB_CLASSES - 1,
        }
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Tag::Predicate)
    }

    pub fn is_role(&self) -> bool {
        !matches!(self, Tag::NoRole)
    }

    /// Ordering key for span output: predicate first, then arguments
    /// by index.
    pub fn priority(&self) -> usize {
        match self {
            Tag::Predicate => 0,
            Tag::Arg(i) => *i as usize + 1,
            Tag::NoRole => usize::MAX,
        }
    }
}

/// Per-token role labels for one sentence.
pub type TagSequence = Vec<Tag>;

/// Argmax over one row of per-class probabilities.
pub fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (i, p) in row.iter().enumerate() {
        if *p > row[best] {
            best = i;
        }
    }
    best
}

/// Convert a matrix of per-token probabilities into a [TagSequence].
pub fn argmax_tags(probs: &[Vec<f32>]) -> Result<TagSequence, Error> {
    probs.iter().map(|row| Tag::from_class(argmax(row))).collect()
}
