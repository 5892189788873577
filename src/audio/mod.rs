//! Audio loading and chunking
//!
//! Converts extracted audio into the mono 16 kHz f32 stream whisper
//! expects, and splits it into fixed-length overlapping windows.

mod chunker;
mod loader;

pub use chunker::{chunk_samples, AudioChunk};
pub use loader::load_audio;

/// Sample rate whisper expects
pub const SAMPLE_RATE: u32 = 16_000;
