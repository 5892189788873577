//! Transcript types and reassembly
//!
//! Segments are transient: produced per run by the transcription pipeline,
//! consumed once by the reassembler, and discarded.

mod export;
mod reassembly;
mod segment;

pub use export::{export_as_json, export_as_srt};
pub use reassembly::reassemble;
pub use segment::{Segment, SegmentError};
