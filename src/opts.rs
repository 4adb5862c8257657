/// Default language hint handed to the transcription service.
pub const DEFAULT_LANGUAGE: &str = "ru";

/// Options that control how a recording is transcribed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone)]
pub struct Opts {
    /// ISO 639-1 language hint passed through to the transcription service (e.g. `"ru"`,
    /// `"en"`).
    pub language: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
