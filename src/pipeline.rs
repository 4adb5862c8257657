//! The chunked transcription pipeline.
//!
//! A recording is split into fixed-duration chunks, each chunk is transcribed
//! independently, and the per-chunk segments are rebased onto the recording's timeline
//! and concatenated in chunk-index order. Per-chunk results are persisted so a restarted
//! run skips everything already transcribed.
//!
//! Processing is strictly sequential: one chunk at a time, in index order. That is what
//! makes the running offset correct without any synchronization.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::Result;
use crate::backend::TranscriptionBackend;
use crate::cache::ChunkCache;
use crate::media::{MediaTools, chunk_path};
use crate::offset::Offset;
use crate::opts::Opts;
use crate::segments::{Segment, Transcript, shift_segments};

/// Fixed chunk length handed to the media utility's segment muxer.
///
/// Chunks must stay under the transcription service's upload limit; ten minutes of
/// copied-codec audio does comfortably.
pub const SEGMENT_SECONDS: u32 = 600;

/// Directory that receives chunks and transcript artifacts for `input`:
/// a sibling directory named after the input's base name, extension stripped.
pub fn output_dir_for(input: &Path) -> PathBuf {
    let base = input.file_stem().unwrap_or(input.as_os_str());
    match input.parent() {
        Some(parent) => parent.join(base),
        None => PathBuf::from(base),
    }
}

/// One discovered slice of the source audio.
#[derive(Debug)]
struct Chunk {
    index: usize,
    path: PathBuf,
}

/// Orchestrates splitting, per-chunk transcription, offset tracking, and caching.
pub struct Pipeline<M, B> {
    media: M,
    backend: B,
    cache: ChunkCache,
}

impl<M: MediaTools, B: TranscriptionBackend> Pipeline<M, B> {
    pub fn new(media: M, backend: B) -> Self {
        Self {
            media,
            backend,
            cache: ChunkCache::new(),
        }
    }

    /// Split `input` into chunks and transcribe them all, returning the assembled
    /// transcript. Artifacts (chunks, per-chunk caches) land in [`output_dir_for`].
    ///
    /// Failure behavior:
    /// - a split failure is fatal
    /// - a duration-probe failure stops iteration early; what has been accumulated so
    ///   far is still returned
    /// - a transcription failure (with no valid cache hit) is fatal; earlier chunks'
    ///   cache artifacts remain on disk for a resumed run
    pub fn run(&self, input: &Path, opts: &Opts) -> Result<Transcript> {
        let out_dir = output_dir_for(input);

        info!(input = %input.display(), out_dir = %out_dir.display(), "splitting audio into chunks");
        self.media.split(input, &out_dir, SEGMENT_SECONDS)?;

        let mut transcript = Transcript::new();
        let mut offset = Offset::zero();

        // Chunk-count discovery: there is no prior knowledge of how many chunks the
        // split produced. We walk indices from 0 and stop at the first missing file.
        for chunk in discover_chunks(&out_dir) {
            let duration = match self.media.probe_duration(&chunk.path) {
                Ok(dur) => dur,
                Err(err) => {
                    // Soft stop: keep the partial transcript accumulated so far.
                    warn!(
                        chunk = %chunk.path.display(),
                        error = %err,
                        "duration probe failed; stopping at this chunk"
                    );
                    break;
                }
            };

            let segments = self.chunk_segments(&chunk, offset, opts)?;
            transcript.extend(segments);

            offset = offset.advanced_by(duration);
        }

        Ok(transcript)
    }

    /// Segments for one chunk: from the cache when possible, otherwise a live
    /// transcription call, shifted to recording time and persisted.
    ///
    /// Cached segments already carry the offset in effect when they were written, so no
    /// shift is re-applied on a hit.
    fn chunk_segments(&self, chunk: &Chunk, offset: Offset, opts: &Opts) -> Result<Vec<Segment>> {
        if let Some(cached) = self.cache.load(&chunk.path) {
            info!(index = chunk.index, chunk = %chunk.path.display(), "using cached transcription");
            return Ok(cached);
        }

        info!(index = chunk.index, chunk = %chunk.path.display(), "transcribing chunk");
        let mut segments = self.backend.transcribe(&chunk.path, &opts.language)?;
        shift_segments(&mut segments, offset.seconds());

        if let Err(err) = self.cache.store(&chunk.path, &segments) {
            // Non-fatal: the in-memory transcript is unaffected, the chunk just won't
            // be skipped on a resumed run.
            warn!(
                chunk = %chunk.path.display(),
                error = %err,
                "failed to persist chunk transcription"
            );
        }

        Ok(segments)
    }
}

/// Iterate chunks in index order, stopping at the first missing file.
fn discover_chunks(out_dir: &Path) -> impl Iterator<Item = Chunk> + '_ {
    (0..)
        .map(|index| Chunk {
            index,
            path: chunk_path(out_dir, index),
        })
        .take_while(|chunk| chunk.path.exists())
}
