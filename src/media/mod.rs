//! Media handling
//!
//! Audio extraction from recorded meeting videos via ffmpeg.

mod extractor;

pub use extractor::{extract_audio, ffmpeg_available};
