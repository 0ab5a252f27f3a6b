//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// token strings and tag sequence disagree on length for a given sentence.
    LengthMismatch {
        sentence_idx: usize,
        nb_tokens: usize,
        nb_tags: usize,
    },
    /// a probing annotation points outside of its sentence's token list.
    SpanOutOfRange {
        sentence_idx: usize,
        span: (usize, usize),
        nb_tokens: usize,
    },
    /// a tag id that is not part of the tag vocabulary.
    UnknownTag(usize),
    /// an embedding vector whose dimension differs from the declared one.
    EmbeddingDim {
        word: String,
        expected: usize,
        got: usize,
    },
    /// a word with no entry in the embedding table (dense mode only).
    MissingEmbedding(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{e}"),
            Error::Serde(e) => write!(f, "{e}"),
            Error::LengthMismatch {
                sentence_idx,
                nb_tokens,
                nb_tags,
            } => write!(
                f,
                "sentence {sentence_idx}: {nb_tokens} tokens but {nb_tags} tags"
            ),
            Error::SpanOutOfRange {
                sentence_idx,
                span,
                nb_tokens,
            } => write!(
                f,
                "sentence {sentence_idx}: span {span:?} outside of token list (len {nb_tokens})"
            ),
            Error::UnknownTag(id) => write!(f, "unknown tag id {id}"),
            Error::EmbeddingDim {
                word,
                expected,
                got,
            } => write!(
                f,
                "embedding for {word:?} has dimension {got}, expected {expected}"
            ),
            Error::MissingEmbedding(w) => write!(f, "no embedding for word {w:?}"),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
