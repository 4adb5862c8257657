use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that writes human-readable timestamped lines.
///
/// One line per segment:
///
/// ```text
/// [00:10:00 - 00:10:03] world
/// ```
pub struct TimestampedEncoder<W: Write> {
    w: W,
    closed: bool,
}

impl<W: Write> TimestampedEncoder<W> {
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> SegmentEncoder for TimestampedEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        let start = format_timestamp(seg.start);
        let end = format_timestamp(seg.end);
        writeln!(&mut self.w, "[{start} - {end}] {}", seg.text)?;
        self.w.flush()?;

        Ok(())
    }

    /// Flush the underlying writer. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}

/// Format seconds as `HH:MM:SS`, zero-padded to two digits each.
///
/// Fractional seconds are truncated, not rounded: `59.999` formats as `00:00:59`.
pub fn format_timestamp(seconds: f64) -> String {
    let total_s = seconds as u64;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn format_timestamp_truncates_fractional_seconds() {
        assert_eq!(format_timestamp(3725.9), "01:02:05");
        assert_eq!(format_timestamp(0.0), "00:00:00");
        assert_eq!(format_timestamp(59.999), "00:00:59");
        assert_eq!(format_timestamp(600.0), "00:10:00");
        assert_eq!(format_timestamp(3600.0), "01:00:00");
    }

    #[test]
    fn timestamped_close_without_segments_emits_nothing() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimestampedEncoder::new(&mut out);
        enc.close()?;
        assert_eq!(std::str::from_utf8(&out)?, "");
        Ok(())
    }

    #[test]
    fn timestamped_formats_lines() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimestampedEncoder::new(&mut out);

        enc.write_segment(&seg(0.0, 5.0, "hello"))?;
        enc.write_segment(&seg(600.0, 603.0, "world"))?;
        enc.close()?;

        assert_eq!(
            std::str::from_utf8(&out)?,
            "[00:00:00 - 00:00:05] hello\n[00:10:00 - 00:10:03] world\n"
        );
        Ok(())
    }

    #[test]
    fn timestamped_write_after_close_errors() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimestampedEncoder::new(&mut out);
        enc.close()?;
        let err = enc.write_segment(&seg(0.0, 1.0, "nope")).unwrap_err();
        assert!(err.to_string().contains("already closed"));
        Ok(())
    }
}
