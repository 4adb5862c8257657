//! Final transcript artifacts.
//!
//! Given the finalized segment sequence, write three files into the output directory,
//! all derived deterministically from the same data with no reordering or filtering:
//!
//! - `combined.json` — the full sequence as a pretty-printed JSON array
//! - `transcription.txt` — each segment's text, one per line
//! - `transcription_timestamps.txt` — `[HH:MM:SS - HH:MM:SS] text` per line
//!
//! Every run fully rewrites all three files; there are no append semantics.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::Result;
use crate::json_array_encoder::JsonArrayEncoder;
use crate::plain_text_encoder::PlainTextEncoder;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;
use crate::timestamped_encoder::TimestampedEncoder;

pub const COMBINED_JSON: &str = "combined.json";
pub const TRANSCRIPTION_TXT: &str = "transcription.txt";
pub const TIMESTAMPS_TXT: &str = "transcription_timestamps.txt";

/// Write all three transcript artifacts into `out_dir`.
///
/// Any write failure is fatal to the caller; files already completed in this pass are
/// left on disk.
pub fn write_outputs(out_dir: &Path, segments: &[Segment]) -> Result<()> {
    write_with(out_dir, COMBINED_JSON, segments, JsonArrayEncoder::new)?;
    write_with(out_dir, TRANSCRIPTION_TXT, segments, PlainTextEncoder::new)?;
    write_with(out_dir, TIMESTAMPS_TXT, segments, TimestampedEncoder::new)?;
    Ok(())
}

fn write_with<E, F>(out_dir: &Path, name: &str, segments: &[Segment], make: F) -> Result<()>
where
    E: SegmentEncoder,
    F: FnOnce(BufWriter<File>) -> E,
{
    let path = out_dir.join(name);
    let writer = BufWriter::new(File::create(&path)?);
    let mut encoder = make(writer);

    let run_res = segments
        .iter()
        .try_for_each(|seg| encoder.write_segment(seg));
    let res = merge_run_and_close(run_res, encoder.close());
    if res.is_ok() {
        info!(path = %path.display(), segments = segments.len(), "wrote transcript artifact");
    }
    res
}

/// Prefer the run error over the close error when both fail.
fn merge_run_and_close(run_res: Result<()>, close_res: Result<()>) -> Result<()> {
    match (run_res, close_res) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(err), _) => Err(err),
    }
}
