use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that writes each segment's text on its own line, no timestamps.
///
/// This is the "just give me the words" output: read top to bottom, it is the full
/// transcript in sequence order.
pub struct PlainTextEncoder<W: Write> {
    w: W,
    closed: bool,
}

impl<W: Write> PlainTextEncoder<W> {
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> SegmentEncoder for PlainTextEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        writeln!(&mut self.w, "{}", seg.text)?;
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
