//! Per-chunk persisted transcription results.
//!
//! Every chunk's segments are written next to the chunk file once transcription succeeds,
//! so an interrupted run can be restarted without repeating completed work. The effective
//! retry unit becomes "the chunks not yet cached", not "the whole recording".

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::segments::Segment;

/// On-disk key-value store of chunk transcription results.
///
/// Key: the chunk's path with its extension replaced by `json` (`chunk_000.m4a` →
/// `chunk_000.json`). Value: the chunk's segments serialized as a JSON array.
///
/// Cached segments are stored recording-relative, exactly as shifted at original write
/// time, and are returned as-is on a hit; no offset is re-applied. A cache written with a
/// different segment length will therefore misalign and must be deleted first.
#[derive(Debug, Default)]
pub struct ChunkCache;

impl ChunkCache {
    pub fn new() -> Self {
        Self
    }

    /// The cache artifact path for a chunk file.
    pub fn key_for(chunk: &Path) -> PathBuf {
        chunk.with_extension("json")
    }

    /// Load the cached segments for `chunk`, if a valid artifact exists.
    ///
    /// A missing artifact and an unparsable one are treated the same way: `None`, meaning
    /// the caller should transcribe live. An unparsable artifact is logged and left in
    /// place; the subsequent [`ChunkCache::store`] overwrites it.
    pub fn load(&self, chunk: &Path) -> Option<Vec<Segment>> {
        let key = Self::key_for(chunk);
        let raw = fs::read(&key).ok()?;

        match serde_json::from_slice(&raw) {
            Ok(segments) => Some(segments),
            Err(err) => {
                warn!(
                    cache = %key.display(),
                    error = %err,
                    "discarding unparsable chunk cache artifact"
                );
                None
            }
        }
    }

    /// Persist `segments` as the cached result for `chunk`.
    ///
    /// Callers treat a store failure as a warning, not a fatal error; the in-memory
    /// segments are unaffected either way.
    pub fn store(&self, chunk: &Path, segments: &[Segment]) -> Result<()> {
        let key = Self::key_for(chunk);
        let data = serde_json::to_vec_pretty(segments)?;
        fs::write(&key, data)?;
        Ok(())
    }
}
