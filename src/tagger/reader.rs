//! JSON-lines reader for dumped tagger output.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

use super::TaggedSentence;

/// On-disk form of one tagged sentence: raw logits, one row per token.
#[derive(Debug, Deserialize)]
struct TaggedRecord {
    sentence: String,
    tokens: Vec<String>,
    logits: Vec<Vec<f32>>,
}

/// Iterates over a JSON-lines dump of tagger output, yielding one
/// [TaggedSentence] per line. Logits are softmaxed on load.
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
    cursor: usize,
}

pub type TaggedReader = Reader<File>;

impl TaggedReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        let br = BufReader::new(handle);
        Ok(Self {
            lines: br.lines(),
            cursor: 0,
        })
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
            cursor: 0,
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<TaggedSentence, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        let idx = self.cursor;
        self.cursor += 1;

        let record: TaggedRecord = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => return Some(Err(Error::Serde(e))),
        };

        Some(TaggedSentence::from_logits(
            record.sentence,
            record.tokens,
            record.logits,
            idx,
        ))
    }
}
