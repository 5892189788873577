//! recap - Turn recorded meeting videos into transcripts and meeting notes
//!
//! The pipeline: extract audio from the video, transcribe it in overlapping
//! chunks, reassemble the chunk transcripts into one text, summarize.

pub mod audio;
pub mod cli;
pub mod config;
pub mod media;
pub mod summary;
pub mod transcript;
pub mod transcription;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Media error: {0}")]
    Media(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Segment error: {0}")]
    Segment(#[from] transcript::SegmentError),

    #[error("Summary error: {0}")]
    Summary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
