use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::summary::extractive::{CombinedExtractive, FrequencySentences, LeadingSentences};
use crate::summary::gemini::GeminiClient;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub title: &'a str,
    pub transcript: &'a str,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<Vec<String>>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, points: &[String], language: &str) -> Result<Vec<String>>;
}

/// Build a summarizer from runtime settings.
pub fn build_summarizer(settings: &Settings) -> Result<Box<dyn Summarizer>> {
    let max_points = settings.summary.max_points;

    match settings.summary.provider.to_lowercase().as_str() {
        "leading" => Ok(Box::new(LeadingSentences::new(max_points))),
        "frequency" => Ok(Box::new(FrequencySentences::new(max_points))),
        "combined" => Ok(Box::new(CombinedExtractive::new(max_points))),
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported summary.provider '{}'. Supported providers: leading, frequency, combined, gemini",
            other
        ),
    }
}

/// Build a translator from runtime settings.
///
/// Translation always goes through the Gemini API, regardless of which
/// summarizer produced the points.
pub fn build_translator(settings: &Settings) -> Result<Box<dyn Translator>> {
    Ok(Box::new(GeminiClient::from_settings(settings)?))
}
