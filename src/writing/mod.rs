/*! Extraction output writing.

One tab-separated line per extraction, appended to `extraction.txt` in the
destination folder. Single writer; callers needing parallel writes must
serialize externally.
!*/
mod extractionwriter;

pub use extractionwriter::ExtractionWriter;
pub use extractionwriter::OutputMode;
