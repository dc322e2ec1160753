use crate::generator::{run_generator, write_program, GeneratorOutput};
use crate::params::GeneratorParams;
use crate::runtime::error::{MissingTimingError, RunnerError};
use crate::statistics::generation::GenerationStatistics;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub params: GeneratorParams,
    pub program_path: PathBuf,
    /// Elapsed seconds reported by the analysis.
    pub elapsed: f64,
    pub num_lines: usize,
    pub statistics: GenerationStatistics,
}

impl RunOutput {
    /// Table row: parameters, time, and for networks the program's line count.
    pub fn row(&self) -> String {
        let mut columns = self.params.columns();
        columns.push(self.elapsed.to_string());
        if let GeneratorParams::Network(_) = self.params {
            columns.push(self.num_lines.to_string());
        }
        columns.join(" ")
    }
}

pub type RunResult = Result<RunOutput, RunnerError>;

/// Generates one program and times the analysis on it.
pub struct Runner {
    /// Analysis binary, invoked with the program path as its only argument.
    pub analysis: PathBuf,
    pub tmp_dir: PathBuf,
    pub file_name: String,
    pub marker: String,
}

impl Runner {
    pub fn run(&self, seed: Option<u64>, params: &GeneratorParams) -> RunResult {
        let output: GeneratorOutput = run_generator(seed, params)?;
        let program_path = self.tmp_dir.join(&self.file_name);
        write_program(&program_path, &output)?;

        debug!(
            analysis = %self.analysis.display(),
            program = %program_path.display(),
            "running analysis"
        );
        let analysis_output = Command::new(&self.analysis)
            .arg(&program_path)
            .output()
            .map_err(|source| RunnerError::Spawn {
                analysis: self.analysis.clone(),
                source,
            })?;
        let stdout = String::from_utf8_lossy(&analysis_output.stdout);
        let elapsed = match find_elapsed(&stdout, &self.marker) {
            Some(elapsed) => elapsed?,
            None => {
                return Err(MissingTimingError::new(
                    program_path,
                    &self.marker,
                    &analysis_output,
                )
                .into())
            }
        };
        info!(params = ?params, elapsed, "analysis finished");

        Ok(RunOutput {
            params: params.clone(),
            program_path,
            elapsed,
            num_lines: output.program.lines().count(),
            statistics: output.generation_statistics,
        })
    }
}

/// Seconds from the first line containing `marker`, formatted as `<marker>=<seconds>s`.
pub fn find_elapsed(stdout: &str, marker: &str) -> Option<Result<f64, RunnerError>> {
    stdout
        .lines()
        .find(|line| line.contains(marker))
        .map(parse_elapsed)
}

fn parse_elapsed(line: &str) -> Result<f64, RunnerError> {
    let malformed = || RunnerError::MalformedTiming {
        line: line.to_string(),
    };
    let (_, value) = line.split_once('=').ok_or_else(malformed)?;
    value
        .trim()
        .trim_end_matches('s')
        .parse::<f64>()
        .map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NestedIfParams, NetworkParams};

    #[test]
    fn finds_first_marker_line() {
        let stdout = "starting\nConstPropAnal Elapsed=0.25s\nConstPropAnal Elapsed=9s\n";
        let elapsed = find_elapsed(stdout, "ConstPropAnal Elapsed").unwrap().unwrap();
        assert_eq!(elapsed, 0.25);
    }

    #[test]
    fn missing_marker_is_none() {
        assert!(find_elapsed("TightComposer done\n", "TightComposer Elapsed").is_none());
    }

    #[test]
    fn malformed_timing_is_an_error() {
        let res = find_elapsed("TightComposer Elapsed: 3s", "TightComposer Elapsed").unwrap();
        assert!(matches!(res, Err(RunnerError::MalformedTiming { .. })));
        let res = find_elapsed("TightComposer Elapsed=fast", "TightComposer Elapsed").unwrap();
        assert!(matches!(res, Err(RunnerError::MalformedTiming { .. })));
    }

    #[test]
    fn rows_follow_driver_tables() {
        let nested_if = RunOutput {
            params: NestedIfParams::default().into(),
            program_path: PathBuf::from("nestedIf.C"),
            elapsed: 1.5,
            num_lines: 30,
            statistics: GenerationStatistics::default(),
        };
        assert_eq!(nested_if.row(), "1 2 0 1 1.5");
        let network = RunOutput {
            params: NetworkParams::default().into(),
            ..nested_if
        };
        assert_eq!(network.row(), "2 1 10 0 0 1.5 30");
    }

    #[cfg(unix)]
    #[test]
    fn runner_times_analysis_on_written_program() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tmp_dir =
            std::env::temp_dir().join(format!("fuse-gen-runner-{}", std::process::id()));
        fs::create_dir_all(&tmp_dir).unwrap();
        let analysis = tmp_dir.join("analysis.sh");
        let script = "#!/bin/sh\necho start\necho 'TightComposer Elapsed=0.5s'\n";
        fs::write(&analysis, script).unwrap();
        fs::set_permissions(&analysis, fs::Permissions::from_mode(0o755)).unwrap();

        let runner = Runner {
            analysis,
            tmp_dir: tmp_dir.clone(),
            file_name: "nestedIf.C".to_string(),
            marker: "TightComposer Elapsed".to_string(),
        };
        let output = runner
            .run(Some(1), &NestedIfParams::default().into())
            .unwrap();
        assert_eq!(output.program_path, tmp_dir.join("nestedIf.C"));
        assert!(output.program_path.exists());
        assert_eq!(output.statistics.assertions, 4);
        assert_eq!(output.row(), "1 2 0 1 0.5");

        let missing = Runner {
            marker: "ConstPropAnal Elapsed".to_string(),
            ..runner
        }
        .run(Some(1), &NestedIfParams::default().into())
        .unwrap_err();
        assert_eq!(missing.kind(), "missing_timing_error");
        fs::remove_dir_all(&tmp_dir).unwrap();
    }
}
