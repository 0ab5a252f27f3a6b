pub mod decoding;
pub mod detok;
pub mod error;
pub mod pipeline;
pub mod probing;
pub mod tagger;
pub mod tags;
pub mod writing;
