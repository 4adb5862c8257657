//! Transcription backend for the OpenAI audio transcriptions API.
//!
//! Each chunk is uploaded as a multipart form and transcribed with `whisper-1`,
//! requesting `verbose_json` with segment-level timestamps. Calls are blocking and
//! sequential, matching the pipeline's single-threaded model.

use std::path::Path;
use std::time::Instant;

use reqwest::blocking::{Client, multipart::Form};
use serde::Deserialize;
use tracing::debug;

use crate::backend::TranscriptionBackend;
use crate::error::{Error, Result};
use crate::segments::Segment;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const MODEL: &str = "whisper-1";

/// [`TranscriptionBackend`] backed by the OpenAI `/audio/transcriptions` endpoint.
pub struct OpenAiBackend {
    client: Client,
    api_base: String,
    api_key: String,
}

impl OpenAiBackend {
    /// Create a backend authenticating with `api_key` (usually `$OPENAI_API_KEY`).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Create a backend pointed at a non-default API base (e.g. a compatible proxy).
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

impl TranscriptionBackend for OpenAiBackend {
    fn transcribe(&self, path: &Path, language: &str) -> Result<Vec<Segment>> {
        let form = Form::new()
            .file("file", path)
            .map_err(|err| Error::msg(format!("failed to attach '{}': {err}", path.display())))?
            .text("model", MODEL)
            .text("language", language.to_string())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "segment");

        let started = Instant::now();
        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.api_base))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| String::from("<failed to read response body>"));
            return Err(Error::msg(format!(
                "transcription request for '{}' failed with HTTP {status}: {body}",
                path.display()
            )));
        }

        let transcription: VerboseTranscription = response.json()?;
        debug!(
            chunk = %path.display(),
            segments = transcription.segments.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "chunk transcribed"
        );

        Ok(transcription
            .segments
            .into_iter()
            .map(ApiSegment::into_segment)
            .collect())
    }
}

/// The subset of the `verbose_json` response we consume.
#[derive(Debug, Deserialize)]
struct VerboseTranscription {
    #[serde(default)]
    segments: Vec<ApiSegment>,
}

#[derive(Debug, Deserialize)]
struct ApiSegment {
    start: f64,
    end: f64,
    text: String,
}

impl ApiSegment {
    fn into_segment(self) -> Segment {
        Segment {
            start: self.start,
            end: self.end,
            text: self.text,
        }
    }
}
