//! Tuple materialization from a predicate group.
use itertools::Itertools;

use crate::detok::Detokenize;
use crate::tags::Tag;

use super::{role_runs, PredicateGroup};

/// Token positions contributing to one extracted span.
///
/// Indices are ascending and only cover role-bearing tokens; masked
/// positions bridged by the span are excluded (they carry no probability
/// mass of interest to the scorer).
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub role: Tag,
    pub idxs: Vec<usize>,
}

/// Ordered text spans of one extraction: predicate first, then arguments
/// by argument index, ties broken left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionTuple {
    spans: Vec<String>,
}

impl ExtractionTuple {
    /// The predicate span text.
    pub fn predicate(&self) -> &str {
        &self.spans[0]
    }

    /// Argument span texts, in role order.
    pub fn arguments(&self) -> &[String] {
        &self.spans[1..]
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Builds textual tuples out of predicate groups.
pub struct TupleBuilder<D: Detokenize> {
    detok: D,
}

impl<D: Detokenize> TupleBuilder<D> {
    pub fn new(detok: D) -> Self {
        Self { detok }
    }

    /// Materialize the tuple for `group`, along with the token spans the
    /// confidence scorer needs.
    ///
    /// Same-role runs separated only by masked positions arrive here
    /// already merged (see [super::role_runs]), so each run is one span.
    /// A group with no argument tags yields a one-element tuple; keeping
    /// or discarding argument-less extractions is the caller's call.
    pub fn build(
        &self,
        sentence: &str,
        tokens: &[String],
        group: &PredicateGroup,
    ) -> (ExtractionTuple, Vec<Span>) {
        // runs come out left to right, so a stable sort on role priority
        // keeps positional order among equal roles
        let spans: Vec<Span> = role_runs(group.tags(), group.mask())
            .into_iter()
            .map(|(role, idxs)| Span { role, idxs })
            .sorted_by_key(|s| s.role.priority())
            .collect();

        let texts = spans
            .iter()
            .map(|span| {
                let lo = span.idxs[0];
                let hi = *span.idxs.last().unwrap();
                self.detok.span_text(sentence, tokens, lo..=hi)
            })
            .collect();

        (ExtractionTuple { spans: texts }, spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoding::{segment, CleanTags};
    use crate::detok::Wordpiece;
    use crate::tags::Tag::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn one_group(tags: Vec<crate::tags::Tag>, mask: Option<Vec<bool>>) -> PredicateGroup {
        let mask = mask.unwrap_or_else(|| vec![false; tags.len()]);
        let mut groups = segment(&CleanTags { tags, mask });
        assert_eq!(groups.len(), 1);
        groups.remove(0)
    }

    #[test]
    fn worked_example() {
        // [O, O, PRED, PRED, O, ARG0, ARG0, O]
        let tokens = toks(&["The", "cat", "sat", "on", "the", "warm", "mat", "."]);
        let sentence = "The cat sat on the warm mat.";
        let group = one_group(
            vec![
                NoRole, NoRole, Predicate, Predicate, NoRole, Arg(0), Arg(0), NoRole,
            ],
            None,
        );

        let (tuple, spans) = TupleBuilder::new(Wordpiece).build(sentence, &tokens, &group);
        assert_eq!(tuple.spans(), &["sat on".to_string(), "warm mat".to_string()]);
        assert_eq!(spans[0].role, Predicate);
        assert_eq!(spans[0].idxs, vec![2, 3]);
        assert_eq!(spans[1].idxs, vec![5, 6]);
    }

    #[test]
    fn predicate_always_first() {
        let tokens = toks(&["him", "saw", "she"]);
        let group = one_group(vec![Arg(1), Predicate, Arg(0)], None);

        let (tuple, spans) = TupleBuilder::new(Wordpiece).build("him saw she", &tokens, &group);
        assert_eq!(spans[0].role, Predicate);
        assert_eq!(tuple.predicate(), "saw");
        // arguments in role order, not positional order
        assert_eq!(tuple.arguments(), &["she".to_string(), "him".to_string()]);
    }

    #[test]
    fn argument_less_group_yields_singleton() {
        let tokens = toks(&["it", "rains"]);
        let group = one_group(vec![NoRole, Predicate], None);

        let (tuple, _) = TupleBuilder::new(Wordpiece).build("it rains", &tokens, &group);
        assert_eq!(tuple.len(), 1);
        assert_eq!(tuple.predicate(), "rains");
        assert!(tuple.arguments().is_empty());
    }

    #[test]
    fn masked_gap_does_not_split_span() {
        // PRED over "sa ##t on": continuation masked, one span
        let tokens = toks(&["sa", "##t", "on"]);
        let group = one_group(
            vec![Predicate, NoRole, Predicate],
            Some(vec![false, true, false]),
        );

        let (tuple, spans) = TupleBuilder::new(Wordpiece).build("sat on", &tokens, &group);
        assert_eq!(tuple.len(), 1);
        assert_eq!(tuple.predicate(), "sat on");
        assert_eq!(spans[0].idxs, vec![0, 2]);
    }
}
