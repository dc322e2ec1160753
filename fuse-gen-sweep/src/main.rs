use clap::{Parser, Subcommand};
use fuse_gen::runtime::config::{load_sweep, NestedIfSweep, NetworkSweep, Sweep};
use fuse_gen::runtime::error::RunnerError;
use fuse_gen::runtime::run::Runner;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Times a fuse analysis over a grid of generated programs.")]
struct Args {
    #[clap(
        short,
        long,
        help = "Analysis binary, called with the program path.",
        default_value = "./fuse"
    )]
    analysis: PathBuf,
    #[clap(short, long, help = "RON file overriding the default grid.")]
    config: Option<PathBuf>,
    #[clap(
        short,
        long,
        help = "Seed shared by every configuration. Random per configuration when absent."
    )]
    seed: Option<u64>,
    #[clap(subcommand)]
    generator: SweepCommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum SweepCommand {
    /// Sweep the nested branch generator.
    NestedIf,
    /// Sweep the arithmetic network generator.
    Network,
}

fn load(args: &Args) -> Result<Sweep, RunnerError> {
    Ok(match (args.generator, &args.config) {
        (SweepCommand::NestedIf, Some(path)) => Sweep::NestedIf(load_sweep(path)?),
        (SweepCommand::NestedIf, None) => Sweep::NestedIf(NestedIfSweep::default()),
        (SweepCommand::Network, Some(path)) => Sweep::Network(load_sweep(path)?),
        (SweepCommand::Network, None) => Sweep::Network(NetworkSweep::default()),
    })
}

fn run(args: &Args) -> Result<(), RunnerError> {
    let sweep = load(args)?;
    let configurations = sweep.configurations();

    let tmp_dir = std::env::temp_dir().join(format!("fuse-gen-{}", Uuid::new_v4()));
    fs::create_dir(&tmp_dir).map_err(|source| RunnerError::Io {
        path: tmp_dir.clone(),
        source,
    })?;
    let runner = Runner {
        analysis: args.analysis.clone(),
        tmp_dir: tmp_dir.clone(),
        file_name: sweep.file_name().to_string(),
        marker: sweep.marker().to_string(),
    };
    info!(
        configurations = configurations.len(),
        tmp_dir = %tmp_dir.display(),
        "starting sweep"
    );

    let progress_bar = ProgressBar::new(configurations.len() as u64);
    progress_bar.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Config {pos:>5}/{len:5} (ETA {eta})")
        .progress_chars("#>-"));

    println!("{}", sweep.header());
    for params in &configurations {
        let seed = args.seed.unwrap_or_else(rand::random);
        match runner.run(Some(seed), params) {
            Ok(output) => {
                debug!(
                    program = %output.program_path.display(),
                    statistics = ?output.statistics,
                    "timed configuration"
                );
                println!("{}", output.row());
            }
            Err(err) => warn!(
                seed,
                params = ?params,
                kind = err.kind(),
                "{}",
                err
            ),
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    fs::remove_dir_all(&tmp_dir).map_err(|source| RunnerError::Io {
        path: tmp_dir.clone(),
        source,
    })
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_without_config() {
        let args = Args::try_parse_from(["sweep", "network"]).unwrap();
        assert_eq!(args.analysis, PathBuf::from("./fuse"));
        let sweep = load(&args).unwrap();
        assert_eq!(sweep, Sweep::Network(NetworkSweep::default()));
    }

    #[test]
    fn missing_config_is_io_error() {
        let args = Args::try_parse_from([
            "sweep",
            "--config",
            "/nonexistent/fuse-gen/sweep.ron",
            "nested-if",
        ])
        .unwrap();
        let err = load(&args).unwrap_err();
        assert_eq!(err.kind(), "io_error");
    }
}
