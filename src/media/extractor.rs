//! Audio extraction from video files
//!
//! Codec handling stays inside ffmpeg; this module only drives the
//! subprocess and checks files.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, info};

use crate::audio::SAMPLE_RATE;
use crate::config::FfmpegSettings;

/// Extract the audio track of `video` into `audio` as 16 kHz mono WAV.
///
/// Skipped when the audio file already exists, so re-runs of the pipeline
/// do not redo the extraction.
pub fn extract_audio(video: &Path, audio: &Path, settings: &FfmpegSettings) -> Result<()> {
    if audio.exists() {
        info!("Audio file already exists, skipping extraction");
        return Ok(());
    }

    if !video.exists() {
        anyhow::bail!("Video file not found: {}", video.display());
    }

    if let Some(parent) = audio.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    info!("Starting audio extraction from video");

    let video_arg = video.display().to_string();
    let audio_arg = audio.display().to_string();
    let sample_rate = SAMPLE_RATE.to_string();
    let args = [
        "-y",
        "-i",
        video_arg.as_str(),
        "-map",
        "a",
        "-ac",
        "1",
        "-ar",
        sample_rate.as_str(),
        audio_arg.as_str(),
    ];
    debug!("Running ffmpeg command: {} {:?}", settings.binary, args);

    let started = Instant::now();
    let status = Command::new(&settings.binary)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("Failed to run '{}'; is ffmpeg installed?", settings.binary))?;

    if !status.success() {
        anyhow::bail!(
            "ffmpeg exited with {} while extracting audio from {}",
            status,
            video.display()
        );
    }

    info!(
        "Audio extraction completed successfully in {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Check whether the configured ffmpeg binary can be invoked.
pub fn ffmpeg_available(settings: &FfmpegSettings) -> bool {
    Command::new(&settings.binary)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
