//! Word embedding lookup table.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

/// Maps words to fixed-dimension embedding vectors.
///
/// The dimension is declared up front; inserting a vector of any other
/// length is refused, so every successful lookup is guaranteed to have
/// `dim()` components.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    dim: usize,
    table: HashMap<String, Vec<f32>>,
}

impl EmbeddingTable {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            table: HashMap::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn insert(&mut self, word: &str, vector: Vec<f32>) -> Result<(), Error> {
        if vector.len() != self.dim {
            return Err(Error::EmbeddingDim {
                word: word.to_string(),
                expected: self.dim,
                got: vector.len(),
            });
        }
        self.table.insert(word.to_string(), vector);
        Ok(())
    }

    /// Load a text-format embedding file: one word per line followed by
    /// its `dim` whitespace-separated components.
    pub fn from_path(src: &Path, dim: usize) -> Result<Self, Error> {
        let mut table = Self::new(dim);
        let reader = BufReader::new(File::open(src)?);

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(w) => w,
                None => continue,
            };
            let vector: Vec<f32> = fields
                .map(|f| {
                    f.parse::<f32>().map_err(|e| {
                        Error::Custom(format!("{src:?} line {line_idx}: {e}"))
                    })
                })
                .collect::<Result<_, Error>>()?;
            table.insert(word, vector)?;
        }

        info!("loaded {} embeddings from {:?}", table.len(), src);
        Ok(table)
    }

    /// Lookup, erroring on unknown words so that upstream annotation
    /// problems surface with the offending word attached.
    pub fn get(&self, word: &str) -> Result<&[f32], Error> {
        self.table
            .get(word)
            .map(|v| v.as_slice())
            .ok_or_else(|| Error::MissingEmbedding(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_dimension() {
        let mut t = EmbeddingTable::new(3);
        assert!(t.insert("ok", vec![1.0, 2.0, 3.0]).is_ok());
        let err = t.insert("bad", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::EmbeddingDim {
                expected: 3,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn unknown_word_names_itself() {
        let t = EmbeddingTable::new(2);
        match t.get("ghost") {
            Err(Error::MissingEmbedding(w)) => assert_eq!(w, "ghost"),
            other => panic!("expected MissingEmbedding, got {other:?}"),
        }
    }
}
