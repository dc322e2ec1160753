use crate::generator::GeneratorError;
use std::io;
use std::path::PathBuf;
use std::process::Output;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("unable to run analysis {}: {source}", .analysis.display())]
    Spawn {
        analysis: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    MissingTiming(#[from] MissingTimingError),
    #[error("malformed timing line {line:?}")]
    MalformedTiming { line: String },
    #[error("unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid sweep configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl RunnerError {
    pub fn kind(&self) -> &'static str {
        match self {
            RunnerError::Generator(_) => "generator_error",
            RunnerError::Spawn { .. } => "spawn_error",
            RunnerError::MissingTiming(_) => "missing_timing_error",
            RunnerError::MalformedTiming { .. } => "malformed_timing_error",
            RunnerError::Io { .. } => "io_error",
            RunnerError::Config { .. } => "config_error",
        }
    }
}

/// The analysis output had no line with the expected timer marker.
#[derive(Debug, Error)]
#[error(
    "no line containing {marker:?} in analysis output of {} (status code {status_code})\n{std_err}",
    .program.display()
)]
pub struct MissingTimingError {
    pub program: PathBuf,
    pub marker: String,
    pub status_code: i32,
    pub std_err: String,
}

impl MissingTimingError {
    pub fn new(program: PathBuf, marker: &str, output: &Output) -> MissingTimingError {
        MissingTimingError {
            program,
            marker: marker.to_string(),
            status_code: output.status.code().unwrap_or(-1),
            std_err: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
