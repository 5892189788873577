//! Summarization module for recap
//!
//! Turns a reassembled transcript into bullet-point meeting notes, either
//! with local extractive strategies or via the Gemini API, and optionally
//! translates the notes.

mod client;
mod extractive;
mod gemini;
mod prompts;

pub use client::{build_summarizer, build_translator, SummaryRequest, Summarizer, Translator};
pub use extractive::{combine_points, split_sentences};

/// Render bullet points into the meeting-notes file format.
pub fn render_notes(points: &[String]) -> String {
    let mut notes = String::from("Meeting Notes:");
    for point in points {
        notes.push_str("\n- ");
        notes.push_str(point);
    }
    notes.push('\n');
    notes
}
