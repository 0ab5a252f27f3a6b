//! Confidence scoring for extracted tuples.
use super::Span;

/// Aggregate per-token tag probabilities into one tuple score.
///
/// The aggregate is the **minimum**, over every token of every span, of
/// the probability mass given to the tag that span carries. The minimum
/// keeps scores comparable for thresholding: a tuple is only ever as
/// credible as its least credible token, and adding a token with
/// probability below the current aggregate can only lower the score.
///
/// # Panics
///
/// Panics if `spans` is empty or any span has no token: a tuple without
/// spans cannot be scored and indicates a decoding bug upstream.
pub fn score(probs: &[Vec<f32>], spans: &[Span]) -> f32 {
    assert!(!spans.is_empty(), "cannot score a tuple with no spans");

    let mut min = f32::INFINITY;
    for span in spans {
        assert!(!span.idxs.is_empty(), "span with no token positions");
        for &i in &span.idxs {
            let p = probs[i][span.role.class()];
            if p < min {
                min = p;
            }
        }
    }
    min
}
