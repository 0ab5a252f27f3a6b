//! Line-oriented writer for extraction tuples.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::decoding::ExtractionTuple;
use crate::error::Error;

/// How much of each extraction makes it onto the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// True confidence and every argument span.
    Full,
    /// Confidence forced to `1.0`, predicate plus at most two arguments.
    Binary,
}

/// Appends one tab-separated line per extraction:
/// `sentence`, `confidence`, `predicate`, `arg0`, `arg1`, …
pub struct ExtractionWriter {
    handle: BufWriter<File>,
    path: PathBuf,
    mode: OutputMode,
    nb_lines: u64,
}

impl ExtractionWriter {
    /// Open (or create) `extraction.txt` under `dst`. The folder is
    /// created if missing.
    pub fn new(dst: &Path, mode: OutputMode) -> Result<Self, Error> {
        std::fs::create_dir_all(dst)?;
        let path = dst.join("extraction.txt");

        let mut options = OpenOptions::new();
        options.append(true).create(true);

        info!("writing extractions to {:?}", path);
        let handle = BufWriter::new(options.open(&path)?);

        Ok(Self {
            handle,
            path,
            mode,
            nb_lines: 0,
        })
    }

    /// Write one extraction.
    pub fn write(
        &mut self,
        sentence: &str,
        confidence: f32,
        tuple: &ExtractionTuple,
    ) -> Result<(), Error> {
        let mut fields: Vec<&str> = vec![sentence];
        let confidence_repr;

        match self.mode {
            OutputMode::Binary => {
                fields.push("1.0");
                fields.extend(tuple.spans().iter().take(3).map(|s| s.as_str()));
            }
            OutputMode::Full => {
                confidence_repr = format!("{confidence}");
                fields.push(&confidence_repr);
                fields.extend(tuple.spans().iter().map(|s| s.as_str()));
            }
        }

        self.handle.write_all(fields.join("\t").as_bytes())?;
        self.handle.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn nb_lines(&self) -> u64 {
        self.nb_lines
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
