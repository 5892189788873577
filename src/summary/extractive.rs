//! Local extractive summarizers
//!
//! Two deterministic strategies plus the combiner that merges their
//! outputs back into transcript order. Deliberately simple: notes quality
//! beyond this comes from the Gemini provider.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use crate::summary::client::{SummaryRequest, Summarizer};

/// Split a transcript into sentences.
///
/// A sentence ends at '.', '!' or '?' followed by whitespace (or end of
/// input). Trailing text without a terminator still counts as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);

        if matches!(c, '.' | '!' | '?') && chars.peek().map_or(true, |next| next.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Takes the first N sentences of the transcript as the notes.
pub struct LeadingSentences {
    max_points: usize,
}

impl LeadingSentences {
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }
}

#[async_trait]
impl Summarizer for LeadingSentences {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<Vec<String>> {
        let mut sentences = split_sentences(request.transcript);
        sentences.truncate(self.max_points);
        Ok(sentences)
    }
}

/// Scores sentences by average term frequency and keeps the top N,
/// emitted in transcript order.
pub struct FrequencySentences {
    max_points: usize,
}

impl FrequencySentences {
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    fn select(&self, sentences: &[String]) -> Vec<String> {
        if sentences.len() <= self.max_points {
            return sentences.to_vec();
        }

        let mut freq: HashMap<String, usize> = HashMap::new();
        for sentence in sentences {
            for word in words(sentence) {
                *freq.entry(word).or_default() += 1;
            }
        }

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let sentence_words = words(sentence);
                if sentence_words.is_empty() {
                    return (i, 0.0);
                }
                let total: usize = sentence_words.iter().map(|w| freq[w]).sum();
                (i, total as f64 / sentence_words.len() as f64)
            })
            .collect();

        // Ties resolve to the earlier sentence
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut picked: Vec<usize> = scored.iter().take(self.max_points).map(|&(i, _)| i).collect();
        picked.sort_unstable();

        picked.into_iter().map(|i| sentences[i].clone()).collect()
    }
}

#[async_trait]
impl Summarizer for FrequencySentences {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<Vec<String>> {
        let sentences = split_sentences(request.transcript);
        Ok(self.select(&sentences))
    }
}

/// Runs both local strategies and merges their picks.
pub struct CombinedExtractive {
    leading: LeadingSentences,
    frequency: FrequencySentences,
}

impl CombinedExtractive {
    pub fn new(max_points: usize) -> Self {
        Self {
            leading: LeadingSentences::new(max_points),
            frequency: FrequencySentences::new(max_points),
        }
    }
}

#[async_trait]
impl Summarizer for CombinedExtractive {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<Vec<String>> {
        let first = self
            .leading
            .summarize(SummaryRequest {
                title: request.title,
                transcript: request.transcript,
            })
            .await?;
        let second = self
            .frequency
            .summarize(SummaryRequest {
                title: request.title,
                transcript: request.transcript,
            })
            .await?;

        Ok(combine_points(request.transcript, first, second))
    }
}

/// Merge two summarizers' outputs: drop duplicates, then order the points
/// by where they first occur in the transcript. Points that do not appear
/// verbatim in the transcript sort last, in arrival order.
pub fn combine_points(transcript: &str, first: Vec<String>, second: Vec<String>) -> Vec<String> {
    let mut points: Vec<String> = Vec::new();
    for point in first.into_iter().chain(second) {
        if !points.contains(&point) {
            points.push(point);
        }
    }

    points.sort_by_key(|point| transcript.find(point.as_str()).unwrap_or(usize::MAX));
    points
}
