//! Time-stamped transcript segments

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A time-stamped span of transcribed text produced by the speech
/// recognizer for one audio chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds from the beginning of the recording
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Transcribed text
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Check that the segment's timing is well-formed.
    ///
    /// The reassembly watermark relies on sensible per-segment timing, so
    /// malformed segments are rejected instead of silently processed.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SegmentError::NonFiniteTime {
                start: self.start,
                end: self.end,
            });
        }
        if self.start < 0.0 || self.end < 0.0 {
            return Err(SegmentError::NegativeTime {
                start: self.start,
                end: self.end,
            });
        }
        if self.end < self.start {
            return Err(SegmentError::InvertedSpan {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Validation error for a malformed segment
#[derive(Debug, Error, PartialEq)]
pub enum SegmentError {
    #[error("segment has a non-finite timestamp (start={start}, end={end})")]
    NonFiniteTime { start: f64, end: f64 },

    #[error("segment has a negative timestamp (start={start}, end={end})")]
    NegativeTime { start: f64, end: f64 },

    #[error("segment ends before it starts (start={start}, end={end})")]
    InvertedSpan { start: f64, end: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_segment_validates() {
        assert_eq!(Segment::new(0.0, 1.5, "hello").validate(), Ok(()));
    }

    #[test]
    fn zero_length_segment_is_allowed() {
        assert_eq!(Segment::new(2.0, 2.0, "hm").validate(), Ok(()));
    }

    #[test]
    fn negative_start_is_rejected() {
        let err = Segment::new(-0.5, 1.0, "x").validate().unwrap_err();
        assert_eq!(
            err,
            SegmentError::NegativeTime {
                start: -0.5,
                end: 1.0
            }
        );
    }

    #[test]
    fn inverted_span_is_rejected() {
        let err = Segment::new(5.0, 4.0, "x").validate().unwrap_err();
        assert_eq!(
            err,
            SegmentError::InvertedSpan {
                start: 5.0,
                end: 4.0
            }
        );
    }

    #[test]
    fn nan_timestamp_is_rejected() {
        let err = Segment::new(f64::NAN, 1.0, "x").validate().unwrap_err();
        assert!(matches!(err, SegmentError::NonFiniteTime { .. }));
    }
}
