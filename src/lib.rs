//! `chunkscribe` — batch transcription of long audio recordings, one chunk at a time.
//!
//! This crate provides:
//! - Chunking of a source recording via ffmpeg, with duration probing
//! - Sequential per-chunk transcription through a pluggable backend (OpenAI Whisper API
//!   built in)
//! - Recording-relative timestamp alignment across chunks
//! - Per-chunk result caching so interrupted runs resume cheaply
//! - Pluggable output encoders (JSON, plain text, timestamped text)
//!
//! The library is designed to be used by the bundled CLI and by batch jobs,
//! with an emphasis on clarity, resumability, and minimal surprises.

// High-level API (most consumers should start here).
pub mod opts;
pub mod pipeline;

// Segment data structures and timeline bookkeeping.
pub mod offset;
pub mod segments;

// External collaborators: media tooling and transcription backends.
pub mod backend;
pub mod backends;
pub mod media;

// Per-chunk result persistence.
pub mod cache;

// Output encoder interfaces and rendering.
pub mod json_array_encoder;
pub mod plain_text_encoder;
pub mod renderer;
pub mod segment_encoder;
pub mod timestamped_encoder;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result};
