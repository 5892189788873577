//! Transcription pipeline orchestration

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::audio::{chunk_samples, load_audio};
use crate::config::{ChunkingSettings, Settings};
use crate::transcript::Segment;
use crate::transcription::whisper::WhisperTranscriber;

/// Transcription pipeline for processing audio files
pub struct TranscriptionPipeline {
    transcriber: WhisperTranscriber,
    chunking: ChunkingSettings,
}

impl TranscriptionPipeline {
    /// Create a new transcription pipeline
    pub fn new(settings: &Settings) -> Result<Self> {
        let transcriber = WhisperTranscriber::new(settings)?;

        Ok(Self {
            transcriber,
            chunking: settings.chunking.clone(),
        })
    }

    /// Transcribe an audio file into an ordered sequence of timed segments.
    ///
    /// Each chunk is transcribed independently with chunk-local timestamps;
    /// segments are shifted by their chunk's offset into the stream before
    /// being returned. Because consecutive chunks overlap, the returned
    /// sequence can cover the same time range twice; callers de-duplicate
    /// with [`crate::transcript::reassemble`].
    pub fn transcribe_file(&self, audio_path: &Path) -> Result<Vec<Segment>> {
        tracing::info!("Loading audio from: {}", audio_path.display());
        let samples = load_audio(audio_path)?;

        let chunks = chunk_samples(&samples, &self.chunking)?;
        let total_chunks = chunks.len();

        let started = Instant::now();
        let mut all_segments = Vec::new();

        for chunk in chunks {
            tracing::info!("Transcribing chunk {}/{}", chunk.index + 1, total_chunks);

            let mut segments = self.transcriber.transcribe(chunk.samples)?;

            // Shift chunk-local timestamps onto the stream timeline
            for segment in &mut segments {
                segment.start += chunk.offset_secs;
                segment.end += chunk.offset_secs;

                tracing::debug!(
                    "Transcribed segment [{:.2}s - {:.2}s]: {}",
                    segment.start,
                    segment.end,
                    segment.text
                );
            }

            all_segments.extend(segments);
        }

        tracing::info!(
            "Transcription complete: {} segments in {:.2} seconds",
            all_segments.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(all_segments)
    }
}
