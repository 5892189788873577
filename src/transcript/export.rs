//! Timed transcript export formats

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

use super::segment::Segment;

/// Export the raw timed segments as pretty-printed JSON.
pub fn export_as_json(source: &Path, segments: &[Segment]) -> Result<String> {
    #[derive(serde::Serialize)]
    struct ExportData<'a> {
        source: String,
        generated_at: DateTime<Utc>,
        segments: &'a [Segment],
    }

    let data = ExportData {
        source: source.display().to_string(),
        generated_at: Utc::now(),
        segments,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Export the raw timed segments as SRT subtitles.
pub fn export_as_srt(segments: &[Segment]) -> String {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(segment.start),
            format_srt_timestamp(segment.end)
        ));
        output.push_str(&format!("{}\n\n", segment.text));
    }

    output
}

fn format_srt_timestamp(secs: f64) -> String {
    let total_ms = (secs * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, ms)
}
