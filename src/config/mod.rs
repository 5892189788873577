//! Configuration module for recap

mod settings;

pub use settings::{
    ChunkingSettings, FfmpegSettings, GeneralSettings, OutputSettings, Settings, SummarySettings,
    WhisperSettings,
};
