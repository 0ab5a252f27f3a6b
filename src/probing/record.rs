//! JSON-lines probing annotations.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;

/// One annotated target: two token spans and a label.
///
/// Spans are `[lo, hi]` token indices into the whitespace-tokenized
/// sentence, inclusive of `lo`. `hi` follows the annotation format and is
/// exclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub span1: (usize, usize),
    pub span2: (usize, usize),
    pub label: String,
}

/// One annotated sentence with its span-pair targets.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbingRecord {
    pub text: String,
    pub targets: Vec<Target>,
}

/// One single-span target, as used by node-level tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeTarget {
    pub span: (usize, usize),
    pub label: String,
}

/// One annotated sentence with single-span targets.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub text: String,
    pub targets: Vec<NodeTarget>,
}

/// Iterates over a JSONL probing-task file, one record per line.
pub struct Reader<T, R>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
    record: PhantomData<R>,
}

pub type ProbingReader = Reader<File, ProbingRecord>;
pub type NodeReader = Reader<File, NodeRecord>;

impl<R> Reader<File, R>
where
    R: DeserializeOwned,
{
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self {
            lines: BufReader::new(handle).lines(),
            record: PhantomData,
        })
    }
}

impl<T, R> Reader<T, R>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
            record: PhantomData,
        }
    }
}

impl<T, R> Iterator for Reader<T, R>
where
    T: Read,
    R: DeserializeOwned,
{
    type Item = Result<R, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(serde_json::from_str(&line).map_err(Error::Serde)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}
