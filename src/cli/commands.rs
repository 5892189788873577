//! CLI command implementations

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::media;
use crate::summary::{
    build_summarizer, build_translator, render_notes, Summarizer, SummaryRequest, Translator,
};
use crate::transcript::{export_as_json, export_as_srt, reassemble};
use crate::transcription::TranscriptionPipeline;

/// Run the full pipeline: extract audio, transcribe, summarize, write files
pub async fn run_pipeline(
    settings: &Settings,
    video: &Path,
    title: Option<String>,
    translate: Option<String>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    if !video.exists() {
        anyhow::bail!("Video file not found: {}", video.display());
    }

    settings.ensure_dirs()?;

    let out_dir = out_dir.unwrap_or_else(|| settings.output.dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let stem = video
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("meeting")
        .to_string();
    let title =
        title.unwrap_or_else(|| format!("Meeting {}", Local::now().format("%Y-%m-%d %H:%M")));

    // Step 1: audio extraction (skipped when the audio already exists)
    let audio = out_dir.join(format!("{stem}.wav"));
    media::extract_audio(video, &audio, &settings.ffmpeg)?;

    // Step 2: chunked transcription and reassembly
    let pipeline = TranscriptionPipeline::new(settings)?;
    let segments = pipeline.transcribe_file(&audio)?;
    let transcript = reassemble(&segments)?;

    let transcript_path = out_dir.join(format!("{stem}_transcript.txt"));
    std::fs::write(&transcript_path, &transcript).with_context(|| {
        format!(
            "Failed to write transcript file: {}",
            transcript_path.display()
        )
    })?;
    println!("Transcript saved to: {}", transcript_path.display());

    // Step 3: meeting notes
    let summarizer = build_summarizer(settings)?;
    let points = summarizer
        .summarize(SummaryRequest {
            title: &title,
            transcript: &transcript,
        })
        .await?;

    let notes_path = out_dir.join(format!("{stem}_notes.txt"));
    std::fs::write(&notes_path, render_notes(&points))
        .with_context(|| format!("Failed to write notes file: {}", notes_path.display()))?;
    println!("Meeting notes saved to: {}", notes_path.display());

    // Step 4 (optional): translated notes
    if let Some(language) = translate {
        let translator = build_translator(settings)?;
        let translated = translator.translate(&points, &language).await?;

        let translated_path = out_dir.join(format!("{stem}_notes.{language}.txt"));
        std::fs::write(&translated_path, render_notes(&translated)).with_context(|| {
            format!(
                "Failed to write translated notes file: {}",
                translated_path.display()
            )
        })?;
        println!("Translated notes saved to: {}", translated_path.display());
    }

    Ok(())
}

/// Extract the audio track from a video file
pub async fn extract_audio(
    settings: &Settings,
    video: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    if !video.exists() {
        anyhow::bail!("Video file not found: {}", video.display());
    }

    let output = output.unwrap_or_else(|| video.with_extension("wav"));
    media::extract_audio(video, &output, &settings.ffmpeg)?;

    println!("Audio saved to: {}", output.display());
    Ok(())
}

/// Transcribe an audio file and print or save the result
pub async fn transcribe_audio(
    settings: &Settings,
    audio: &Path,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    if !audio.exists() {
        anyhow::bail!("Audio file not found: {}", audio.display());
    }

    if !matches!(format, "txt" | "json" | "srt") {
        anyhow::bail!("Unsupported format: {}. Supported: txt, json, srt", format);
    }

    let pipeline = TranscriptionPipeline::new(settings)?;
    let segments = pipeline.transcribe_file(audio)?;

    let content = match format {
        "txt" => reassemble(&segments)?,
        "json" => export_as_json(audio, &segments)?,
        "srt" => export_as_srt(&segments),
        _ => unreachable!(),
    };

    if let Some(path) = output {
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write transcript file: {}", path.display()))?;
        println!("Transcript saved to: {}", path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}

/// Summarize a transcript file into meeting notes
pub async fn summarize_transcript(
    settings: &Settings,
    transcript_path: &Path,
    output: Option<PathBuf>,
    translate: Option<String>,
) -> Result<()> {
    if !transcript_path.exists() {
        anyhow::bail!("Transcript file not found: {}", transcript_path.display());
    }

    let transcript = std::fs::read_to_string(transcript_path).with_context(|| {
        format!(
            "Failed to read transcript file: {}",
            transcript_path.display()
        )
    })?;
    if transcript.trim().is_empty() {
        anyhow::bail!("Transcript file is empty: {}", transcript_path.display());
    }

    let title = transcript_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("meeting")
        .to_string();

    let summarizer = build_summarizer(settings)?;
    let mut points = summarizer
        .summarize(SummaryRequest {
            title: &title,
            transcript: &transcript,
        })
        .await?;

    if let Some(language) = translate {
        let translator = build_translator(settings)?;
        points = translator.translate(&points, &language).await?;
    }

    let notes = render_notes(&points);

    if let Some(path) = output {
        std::fs::write(&path, notes)
            .with_context(|| format!("Failed to write notes file: {}", path.display()))?;
        println!("Notes saved to: {}", path.display());
    } else {
        print!("{}", notes);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    ffmpeg_binary: String,
    whisper_model: String,
    summary_provider: String,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("recap doctor");
    println!("ffmpeg: {}", report.ffmpeg_binary);
    println!("whisper model: {}", report.whisper_model);
    println!("summary provider: {}", report.summary_provider);
    println!();

    for check in &report.checks {
        println!("{:<14} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let ffmpeg_ok = media::ffmpeg_available(&settings.ffmpeg);
    let model_path = settings.model_path();
    let model_ok = model_path.exists();
    let api_key_set = !settings.summary.api_key.trim().is_empty();

    let mut notes = Vec::new();

    if !ffmpeg_ok {
        notes.push(format!(
            "hint: install ffmpeg or point ffmpeg.binary at it (currently '{}').",
            settings.ffmpeg.binary
        ));
    }

    if !model_ok {
        notes.push(format!(
            "hint: download ggml-{}.bin into {}.",
            settings.whisper.model,
            settings.whisper.models_dir.display()
        ));
    }

    if settings.summary.provider == "gemini" && !api_key_set {
        notes.push(
            "warning: summary.provider is 'gemini' but no API key is set; \
             set summary.api_key or RECAP_GEMINI_API_KEY."
                .to_string(),
        );
    }

    DoctorReport {
        ffmpeg_binary: settings.ffmpeg.binary.clone(),
        whisper_model: settings.whisper.model.clone(),
        summary_provider: settings.summary.provider.clone(),
        checks: vec![
            DoctorCheck {
                name: "ffmpeg",
                status: if ffmpeg_ok { "ok" } else { "missing" },
                detail: "required for audio extraction".to_string(),
            },
            DoctorCheck {
                name: "whisper-model",
                status: if model_ok { "ok" } else { "missing" },
                detail: model_path.display().to_string(),
            },
            DoctorCheck {
                name: "gemini-key",
                status: if api_key_set { "ok" } else { "unset" },
                detail: "required for the gemini provider and translation".to_string(),
            },
        ],
        notes,
    }
}
