//! Fixed-length overlapping chunk windows
//!
//! Consecutive windows overlap so the recognizer never cuts a word at a
//! window boundary; the duplicated overlap region is suppressed later
//! during transcript reassembly.

use anyhow::{bail, Result};

use super::SAMPLE_RATE;
use crate::config::ChunkingSettings;

/// One window of the source audio stream
#[derive(Debug)]
pub struct AudioChunk<'a> {
    /// Chunk number (0-indexed)
    pub index: usize,
    /// Offset of this window into the stream, in seconds
    pub offset_secs: f64,
    /// Samples in this window
    pub samples: &'a [f32],
}

/// Split samples into fixed-length windows advancing by
/// `chunk_secs - overlap_secs`, so consecutive windows share
/// `overlap_secs` of audio. The final window may be shorter. When
/// chunking is disabled the whole stream becomes a single chunk.
pub fn chunk_samples<'a>(
    samples: &'a [f32],
    settings: &ChunkingSettings,
) -> Result<Vec<AudioChunk<'a>>> {
    if !settings.enabled {
        return Ok(vec![AudioChunk {
            index: 0,
            offset_secs: 0.0,
            samples,
        }]);
    }

    if settings.chunk_secs <= 0.0 {
        bail!("chunking.chunk_secs must be positive (got {})", settings.chunk_secs);
    }
    if settings.overlap_secs < 0.0 {
        bail!(
            "chunking.overlap_secs must not be negative (got {})",
            settings.overlap_secs
        );
    }
    if settings.overlap_secs >= settings.chunk_secs {
        bail!(
            "chunking.overlap_secs ({}) must be smaller than chunking.chunk_secs ({})",
            settings.overlap_secs,
            settings.chunk_secs
        );
    }

    let chunk_len = (settings.chunk_secs * SAMPLE_RATE as f64) as usize;
    let stride = ((settings.chunk_secs - settings.overlap_secs) * SAMPLE_RATE as f64) as usize;

    // Sub-sample windows would never advance
    if chunk_len == 0 || stride == 0 {
        bail!(
            "chunking window too small: chunk_secs={}, overlap_secs={}",
            settings.chunk_secs,
            settings.overlap_secs
        );
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut index = 0usize;

    while start < samples.len() {
        let end = usize::min(start + chunk_len, samples.len());

        chunks.push(AudioChunk {
            index,
            offset_secs: start as f64 / SAMPLE_RATE as f64,
            samples: &samples[start..end],
        });

        // Stop once a window reaches the end of the stream, otherwise the
        // tail would be re-emitted as a window of pure overlap.
        if end == samples.len() {
            break;
        }

        start += stride;
        index += 1;
    }

    Ok(chunks)
}
