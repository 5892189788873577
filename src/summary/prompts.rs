/// Build a deterministic summary prompt for meeting transcripts.
pub fn build_summary_prompt(title: &str, transcript: &str, max_points: usize) -> String {
    format!(
        "You are an assistant that writes concise, factual meeting notes.\n\
Meeting title: {title}\n\
\n\
Return at most {max_points} bullet points, one per line, each starting with '- '.\n\
\n\
Rules:\n\
- Use only information present in the transcript.\n\
- Keep each bullet short and concrete.\n\
- Do not add headings or commentary around the bullets.\n\
\n\
Transcript:\n\
{transcript}"
    )
}

/// Build a deterministic translation prompt for a list of note points.
pub fn build_translation_prompt(language: &str, points: &[String]) -> String {
    let mut notes = String::new();
    for point in points {
        notes.push_str("- ");
        notes.push_str(point);
        notes.push('\n');
    }

    format!(
        "Translate the following meeting notes into {language}.\n\
Return the same number of bullet points, one per line, each starting with '- ',\n\
in the same order. Do not add commentary.\n\
\n\
{notes}"
    )
}
