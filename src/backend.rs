use std::path::Path;

use crate::Result;
use crate::segments::Segment;

/// Pluggable transcription service used by [`crate::pipeline::Pipeline`].
///
/// A backend turns one chunk file into an ordered sequence of [`Segment`]s whose
/// timestamps are relative to the start of the submitted file, not the overall
/// recording; the pipeline applies the recording-level offset afterwards.
///
/// The returned segments are trusted to be non-decreasing in `start`; the pipeline does
/// not re-sort them.
pub trait TranscriptionBackend {
    /// Transcribe the audio file at `path`, hinting the spoken language with an ISO 639-1
    /// code (e.g. `"ru"`, `"en"`).
    ///
    /// This is a blocking call; the pipeline suspends until it returns.
    fn transcribe(&self, path: &Path, language: &str) -> Result<Vec<Segment>>;
}
