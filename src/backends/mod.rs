//! Transcription backend implementations.

pub mod openai;
