//! Audio splitting and duration probing via ffmpeg / ffprobe.
//!
//! The pipeline only depends on the [`MediaTools`] trait so tests can substitute fakes;
//! [`FfmpegMedia`] is the production implementation that shells out.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// File name of chunk `index` inside an output directory.
///
/// Matches the `chunk_%03d.m4a` pattern handed to ffmpeg's segment muxer: zero-padded
/// 3-digit index, contiguous from 0.
pub fn chunk_path(out_dir: &Path, index: usize) -> PathBuf {
    out_dir.join(format!("chunk_{index:03}.m4a"))
}

/// External media operations the pipeline needs.
pub trait MediaTools {
    /// Split `input` into fixed-duration chunks inside `out_dir`.
    ///
    /// Implementations must create `out_dir` if needed and name chunks per [`chunk_path`].
    fn split(&self, input: &Path, out_dir: &Path, segment_seconds: u32) -> Result<()>;

    /// Duration of an audio file in seconds.
    fn probe_duration(&self, path: &Path) -> Result<f64>;
}

/// [`MediaTools`] implementation backed by the `ffmpeg` and `ffprobe` binaries.
#[derive(Debug, Default)]
pub struct FfmpegMedia;

impl MediaTools for FfmpegMedia {
    fn split(&self, input: &Path, out_dir: &Path, segment_seconds: u32) -> Result<()> {
        std::fs::create_dir_all(out_dir)?;

        // `-c copy` extracts chunks without re-encoding; the segment muxer substitutes the
        // chunk index into the output pattern.
        let pattern = out_dir.join("chunk_%03d.m4a");
        let output = Command::new("ffmpeg")
            .arg("-i")
            .arg(input)
            .args(["-f", "segment", "-segment_time"])
            .arg(segment_seconds.to_string())
            .args(["-c", "copy"])
            .arg(&pattern)
            .output()
            .map_err(|err| Error::msg(format!("failed to run ffmpeg: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::msg(format!(
                "ffmpeg failed to split '{}': {}",
                input.display(),
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn probe_duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new("ffprobe")
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "csv=p=0"])
            .arg(path)
            .output()
            .map_err(|err| Error::msg(format!("failed to run ffprobe: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::msg(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                stderr.trim()
            )));
        }

        parse_duration(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse ffprobe's `format=duration` CSV output into seconds.
fn parse_duration(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::msg(format!("unparsable ffprobe duration: '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_path_zero_pads_to_three_digits() {
        let dir = Path::new("/tmp/out");
        assert_eq!(chunk_path(dir, 0), Path::new("/tmp/out/chunk_000.m4a"));
        assert_eq!(chunk_path(dir, 7), Path::new("/tmp/out/chunk_007.m4a"));
        assert_eq!(chunk_path(dir, 42), Path::new("/tmp/out/chunk_042.m4a"));
        assert_eq!(chunk_path(dir, 1000), Path::new("/tmp/out/chunk_1000.m4a"));
    }

    #[test]
    fn parse_duration_accepts_ffprobe_csv_output() -> Result<()> {
        assert_eq!(parse_duration("600.026667\n")?, 600.026667);
        assert_eq!(parse_duration("  45.3  ")?, 45.3);
        assert_eq!(parse_duration("0")?, 0.0);
        Ok(())
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("N/A").is_err());
    }
}
