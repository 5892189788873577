//! Chunked-transcript reassembly with overlap suppression
//!
//! Chunk windows overlap by a fixed margin so the recognizer does not cut
//! words at a window boundary, which means the overlap region is
//! transcribed twice. Reassembly walks the segments in chunk order and
//! keeps a watermark of the latest time already covered: a segment that
//! starts before the watermark is a re-transcription of audio we already
//! have and is dropped whole.

use super::segment::{Segment, SegmentError};

/// Flatten an ordered sequence of possibly-overlapping segments into a
/// single de-duplicated transcript string.
///
/// Segments must arrive in chunk-processing order (which is chronological,
/// since chunks are consecutive windows of one audio stream). A segment
/// whose start falls before the watermark is dropped entirely, even when
/// its text differs or it extends past the watermark: first-seen-wins, and
/// the uncovered tail is not clipped out. The watermark advances on every
/// segment, accepted or not, so an engulfed segment cannot move it
/// backwards.
///
/// An empty input produces an empty string. A malformed segment (negative
/// or non-finite times, end before start) fails the whole call.
pub fn reassemble(segments: &[Segment]) -> Result<String, SegmentError> {
    let mut last_end = 0.0_f64;
    let mut transcript = String::new();

    for segment in segments {
        segment.validate()?;

        if segment.start >= last_end {
            transcript.push_str(&segment.text);
            transcript.push(' ');
        }

        last_end = last_end.max(segment.end);
    }

    Ok(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment::new(start, end, text)
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(reassemble(&[]).unwrap(), "");
    }

    #[test]
    fn non_overlapping_segments_concatenate_in_order() {
        let segments = [
            seg(0.0, 2.0, "good"),
            seg(2.0, 4.5, "morning"),
            seg(5.0, 7.0, "everyone"),
        ];
        assert_eq!(reassemble(&segments).unwrap(), "good morning everyone ");
    }

    #[test]
    fn engulfed_duplicate_is_dropped() {
        let segments = [seg(0.0, 10.0, "A"), seg(2.0, 8.0, "A")];
        assert_eq!(reassemble(&segments).unwrap(), "A ");
    }

    #[test]
    fn engulfed_segment_is_dropped_even_when_text_differs() {
        // Model non-determinism can re-transcribe the same span differently;
        // the first accepted reading wins.
        let segments = [seg(0.0, 10.0, "A"), seg(2.0, 8.0, "B")];
        assert_eq!(reassemble(&segments).unwrap(), "A ");
    }

    #[test]
    fn partial_overlap_drops_the_whole_segment() {
        // The second segment extends past the watermark, but there is no
        // partial acceptance: its non-overlapping tail is lost too.
        let segments = [seg(0.0, 10.0, "Hello"), seg(9.0, 20.0, "World")];
        assert_eq!(reassemble(&segments).unwrap(), "Hello ");
    }

    #[test]
    fn segment_starting_exactly_at_watermark_is_accepted() {
        let segments = [seg(0.0, 5.0, "one"), seg(5.0, 9.0, "two")];
        assert_eq!(reassemble(&segments).unwrap(), "one two ");
    }

    #[test]
    fn watermark_does_not_decrease_after_engulfed_segment() {
        // The engulfed segment (2..4) must not reset the watermark to 4:
        // a later segment starting at 5 is still inside the first
        // segment's span and has to stay suppressed.
        let segments = [
            seg(0.0, 10.0, "A"),
            seg(2.0, 4.0, "B"),
            seg(5.0, 11.0, "C"),
            seg(11.0, 12.0, "D"),
        ];
        assert_eq!(reassemble(&segments).unwrap(), "A D ");
    }

    #[test]
    fn dropped_segment_still_advances_the_watermark() {
        // Segment two is dropped (4 < 5) but pushes the watermark to 9, so
        // segment three is accepted at exactly 9.
        let segments = [
            seg(0.0, 5.0, "one"),
            seg(4.0, 9.0, "two"),
            seg(9.0, 14.0, "three"),
        ];
        assert_eq!(reassemble(&segments).unwrap(), "one three ");
    }

    #[test]
    fn malformed_segment_fails_the_call() {
        let segments = [seg(0.0, 5.0, "one"), seg(6.0, 3.0, "bad")];
        assert_eq!(
            reassemble(&segments).unwrap_err(),
            SegmentError::InvertedSpan {
                start: 6.0,
                end: 3.0
            }
        );

        let segments = [seg(-1.0, 2.0, "bad")];
        assert!(matches!(
            reassemble(&segments).unwrap_err(),
            SegmentError::NegativeTime { .. }
        ));
    }

    #[test]
    fn reassembly_is_deterministic() {
        let segments = [
            seg(0.0, 30.0, "first chunk text"),
            seg(25.0, 33.0, "chunk text again"),
            seg(33.0, 55.0, "second chunk tail"),
        ];
        let first = reassemble(&segments).unwrap();
        let second = reassemble(&segments).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "first chunk text second chunk tail ");
    }
}
