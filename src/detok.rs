/*! Span detokenization.

Maps contiguous token-index ranges back to human-readable surface text.
The shipped implementation understands wordpiece conventions: `##`
continuations fold into their head word, special tokens vanish, and the
original sentence is consulted to restore casing where possible.
!*/
use std::ops::RangeInclusive;

use crate::decoding::is_structural;

/// Maps a token-index span back to surface text.
pub trait Detokenize {
    /// Text covering `span` (inclusive bounds) of `tokens`, using
    /// `sentence` to recover surface form where the tokens alone are
    /// insufficient.
    fn span_text(&self, sentence: &str, tokens: &[String], span: RangeInclusive<usize>)
        -> String;
}

/// Punctuation that glues onto the preceding word when joining.
const GLUE_PUNCT: [&str; 8] = [".", ",", "!", "?", ";", ":", "'", "%"];

/// Wordpiece-aware detokenizer.
///
/// Words within the span are joined with single spaces; a trailing
/// continuation right after the span is folded in so that a span ending
/// mid-word still yields the whole word. If the joined text occurs in the
/// sentence up to ASCII case, the sentence slice is returned instead,
/// restoring the original casing; when it occurs several times, the
/// occurrence closest to the span's own position wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wordpiece;

impl Wordpiece {
    /// Join tokens of `lo..=hi`, folding `##` continuations (including
    /// those trailing `hi`) and dropping special tokens.
    fn join(&self, tokens: &[String], lo: usize, hi: usize) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut end = hi;
        // a span ending mid-word owns the rest of that word
        while end + 1 < tokens.len() && tokens[end + 1].starts_with("##") {
            end += 1;
        }

        for token in &tokens[lo..=end] {
            if let Some(cont) = token.strip_prefix("##") {
                if let Some(last) = words.last_mut() {
                    last.push_str(cont);
                } else {
                    // span starts mid-word: keep the fragment
                    words.push(cont.to_string());
                }
            } else if !is_structural(token) {
                words.push(token.clone());
            }
        }

        // single-space join, punctuation glued to the previous word
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 && !GLUE_PUNCT.contains(&word.as_str()) {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }

    /// Estimated byte offset of token `lo` within the detokenized
    /// sentence: words before it plus one space each, continuations
    /// folded, special tokens skipped.
    fn offset_hint(&self, tokens: &[String], lo: usize) -> usize {
        let mut offset = 0;
        for token in &tokens[..lo] {
            if let Some(cont) = token.strip_prefix("##") {
                offset += cont.len();
            } else if !is_structural(token) {
                offset += token.len() + 1;
            }
        }
        offset
    }

    /// Restore casing by locating `needle` in `sentence`, ignoring ASCII
    /// case. Among several occurrences, the one nearest `hint` (a byte
    /// offset) is taken, so a repeated phrase resolves to the span's own
    /// occurrence. Byte offsets are safe because ASCII lowercasing
    /// preserves them.
    fn restore_case<'a>(&self, sentence: &'a str, needle: &str, hint: usize) -> Option<&'a str> {
        if needle.is_empty() {
            return None;
        }
        let haystack = sentence.to_ascii_lowercase();
        let target = needle.to_ascii_lowercase();

        let mut best: Option<usize> = None;
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(&target).map(|p| p + from) {
            if best.map_or(true, |b| pos.abs_diff(hint) < b.abs_diff(hint)) {
                best = Some(pos);
            }
            from = pos + 1;
        }
        best.map(|start| &sentence[start..start + target.len()])
    }
}

impl Detokenize for Wordpiece {
    fn span_text(
        &self,
        sentence: &str,
        tokens: &[String],
        span: RangeInclusive<usize>,
    ) -> String {
        let hint = self.offset_hint(tokens, *span.start());
        let joined = self.join(tokens, *span.start(), *span.end());
        match self.restore_case(sentence, &joined, hint) {
            Some(original) => original.to_string(),
            None => joined,
        }
    }
}
