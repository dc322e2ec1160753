use clap::{Parser, Subcommand};
use fuse_gen::generator::{run_generator, write_program, GeneratorOutput};
use fuse_gen::params::{GeneratorParams, NestedIfParamsBuilder, NetworkParamsBuilder, Toggle};
use fuse_gen::utils::write_as_ron;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates C programs for stress testing the fuse analyses.")]
struct GeneratorArgs {
    #[clap(short, long, help = "Optional seed.")]
    seed: Option<u64>,
    #[clap(long, help = "Print generation statistics to stdout after writing the program.")]
    statistics: bool,
    #[clap(subcommand)]
    generator: GeneratorCommand,
}

#[derive(Subcommand, Debug)]
enum GeneratorCommand {
    /// Nested branches spread over a chain of functions.
    NestedIf {
        #[clap(help = "Output file.")]
        out: PathBuf,
        #[clap(help = "Number of nested function boundaries.")]
        func_depth: usize,
        #[clap(help = "Nested if levels per function.")]
        if_per_func_depth: usize,
        #[clap(help = "Declare condition variables globally (0 or 1).")]
        global_vars: Toggle,
        #[clap(help = "Initialize condition variables (0 or 1).")]
        const_init_vars: Toggle,
    },
    /// Layered network of integer sums.
    Network {
        #[clap(help = "Output file.")]
        out: PathBuf,
        num_layers: usize,
        num_dependencies: usize,
        vars_per_layer: usize,
        #[clap(help = "Fresh identity for every variable (0 or 1).")]
        fresh_vars: Toggle,
        #[clap(help = "Request the SSA analysis pipeline (0 or 1).")]
        use_ssa: Toggle,
    },
}

impl GeneratorCommand {
    fn into_parts(self) -> Result<(PathBuf, GeneratorParams), Box<dyn Error>> {
        Ok(match self {
            GeneratorCommand::NestedIf {
                out,
                func_depth,
                if_per_func_depth,
                global_vars,
                const_init_vars,
            } => {
                let params = NestedIfParamsBuilder::default()
                    .function_depth(func_depth)
                    .branches_per_function(if_per_func_depth)
                    .global_vars(global_vars.into())
                    .const_init_vars(const_init_vars.into())
                    .build()?;
                (out, params.into())
            }
            GeneratorCommand::Network {
                out,
                num_layers,
                num_dependencies,
                vars_per_layer,
                fresh_vars,
                use_ssa,
            } => {
                let params = NetworkParamsBuilder::default()
                    .num_layers(num_layers)
                    .num_dependencies(num_dependencies)
                    .vars_per_layer(vars_per_layer)
                    .fresh_vars(fresh_vars.into())
                    .use_ssa(use_ssa.into())
                    .build()?;
                (out, params.into())
            }
        })
    }
}

fn run(args: GeneratorArgs) -> Result<(), Box<dyn Error>> {
    let (out, params) = args.generator.into_parts()?;
    let output: GeneratorOutput = run_generator(args.seed, &params)?;
    write_program(&out, &output)?;
    info!(
        path = %out.display(),
        entry = ?output.entry_function,
        assertions = output.generation_statistics.assertions,
        "generated program"
    );
    if args.statistics {
        write_as_ron(std::io::stdout(), &output.generation_statistics)?;
        println!();
    }
    Ok(())
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = GeneratorArgs::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
