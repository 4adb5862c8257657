//! Running time offset across chunks.
//!
//! Each chunk's segments come back with timestamps relative to the start of that chunk.
//! To place them on the recording's timeline we track the cumulative duration of every
//! chunk processed so far and use it as the base offset for the next one.

/// Cumulative duration of all chunks preceding the current one, in seconds.
///
/// This is a plain value, not shared state: the pipeline folds it through the chunk loop,
/// reading [`Offset::seconds`] before a chunk and calling [`Offset::advanced_by`] after.
/// Correctness depends on the caller visiting chunks in index order with no gaps or repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset(f64);

impl Offset {
    /// The offset at the start of a recording.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The current base offset in seconds.
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// The offset after one more chunk of `duration_seconds` has been consumed.
    ///
    /// Plain double-precision addition; no re-basing or drift correction.
    #[must_use]
    pub fn advanced_by(self, duration_seconds: f64) -> Self {
        Self(self.0 + duration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Offset::zero().seconds(), 0.0);
    }

    #[test]
    fn base_offset_equals_prefix_sum_of_durations() {
        // Includes zero-length and fractional durations.
        let durations = [600.0, 0.0, 45.3, 0.001, 599.999, 12.5];

        let mut offset = Offset::zero();
        let mut expected = 0.0f64;
        for dur in durations {
            // The base used for chunk k is the sum of durations 0..k, added in the same order.
            assert_eq!(offset.seconds(), expected);
            offset = offset.advanced_by(dur);
            expected += dur;
        }
        assert_eq!(offset.seconds(), expected);
    }

    #[test]
    fn advancing_does_not_mutate_the_source_value() {
        let base = Offset::zero().advanced_by(10.0);
        let _later = base.advanced_by(5.0);
        assert_eq!(base.seconds(), 10.0);
    }
}
