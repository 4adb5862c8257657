use serde::{Deserialize, Serialize};

/// A transcribed span of speech.
///
/// Timestamps are seconds. Whether they are chunk-relative or recording-relative depends on
/// where the segment sits in the pipeline: the transcription backend returns chunk-relative
/// values, and [`shift_segments`] rebases them onto the whole recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// The full ordered segment sequence for a recording, concatenated in chunk-index order.
pub type Transcript = Vec<Segment>;

/// Shift every segment's timestamps by `offset_seconds`.
///
/// Applied exactly once per chunk, with the cumulative duration of all preceding chunks.
pub fn shift_segments(segments: &mut [Segment], offset_seconds: f64) {
    for seg in segments {
        seg.start += offset_seconds;
        seg.end += offset_seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rebases_both_endpoints() {
        let mut segments = vec![
            Segment {
                start: 0.0,
                end: 5.0,
                text: "hello".to_string(),
            },
            Segment {
                start: 5.0,
                end: 7.5,
                text: "world".to_string(),
            },
        ];

        shift_segments(&mut segments, 600.0);

        assert_eq!(segments[0].start, 600.0);
        assert_eq!(segments[0].end, 605.0);
        assert_eq!(segments[1].start, 605.0);
        assert_eq!(segments[1].end, 607.5);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        let mut segments = vec![Segment {
            start: 1.25,
            end: 2.5,
            text: "x".to_string(),
        }];
        let before = segments.clone();

        shift_segments(&mut segments, 0.0);

        assert_eq!(segments, before);
    }

    #[test]
    fn segment_serializes_with_stable_field_order() -> anyhow::Result<()> {
        let seg = Segment {
            start: 0.0,
            end: 1.5,
            text: "hi".to_string(),
        };

        let json = serde_json::to_string(&seg)?;
        assert_eq!(json, r#"{"start":0.0,"end":1.5,"text":"hi"}"#);
        Ok(())
    }
}
