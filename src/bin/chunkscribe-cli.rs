use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

use chunkscribe::backends::openai::OpenAiBackend;
use chunkscribe::media::FfmpegMedia;
use chunkscribe::opts::{DEFAULT_LANGUAGE, Opts};
use chunkscribe::pipeline::{Pipeline, output_dir_for};
use chunkscribe::renderer::write_outputs;

fn main() -> Result<()> {
    chunkscribe::logging::init();
    let params = Params::parse();

    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY must be set to call the transcription service")?;

    let opts = Opts {
        language: params.language,
    };

    let pipeline = Pipeline::new(FfmpegMedia, OpenAiBackend::new(api_key));
    let transcript = pipeline.run(&params.input, &opts)?;

    let out_dir = output_dir_for(&params.input);
    write_outputs(&out_dir, &transcript)?;

    println!(
        "Transcribed {} segments into {}",
        transcript.len(),
        out_dir.display()
    );
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "chunkscribe")]
#[command(about = "Transcribe a long audio recording in fixed-duration chunks")]
struct Params {
    /// Path to the input audio file.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Language hint for transcription (ISO 639-1).
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}
