/*! Pipelines.

The module provides a light [pipeline::Pipeline] trait that enables easy
and flexible pipeline creation, and the [Extraction] pipeline that decodes
dumped tagger output into scored tuples.
!*/
mod extraction;
#[allow(clippy::module_inception)]
mod pipeline;

pub use extraction::Extraction;
pub use pipeline::Pipeline;
