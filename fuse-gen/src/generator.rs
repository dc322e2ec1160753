use crate::ast::file::CFile;
use crate::context::Context;
use crate::generate::nested_if;
use crate::generate::network::Network;
use crate::params::{GeneratorParams, NestedIfParams, NetworkParams};
use crate::statistics::generation::GenerationStatistics;
use crate::statistics::program::ProgramStatistics;
use crate::visitor::base_visitor::Visitor;
use crate::visitor::emit_visitor::EmitVisitor;
use crate::visitor::statistics_visitor::StatisticsVisitor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::{panic, thread};
use thiserror::Error;
use tracing::debug;

pub struct GeneratorOutput {
    pub program: String,
    /// Function called from `main`, only set by the nested branch generator.
    pub entry_function: Option<String>,
    pub generation_statistics: GenerationStatistics,
    pub program_statistics: ProgramStatistics,
}

/// Deepest function nesting the nested branch generator accepts.
pub const MAX_FUNCTION_DEPTH: usize = 4096;

/// Stack of the nested branch generator thread. Every function level takes two
/// recursive frames, plus one per `if` level inside it.
const NESTED_IF_STACK_SIZE: usize = 256 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("function depth {depth} exceeds the maximum of {max}")]
    FunctionDepth { depth: usize, max: usize },
    #[error("unable to spawn generator thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("value of {name} in layer {layer} does not fit in a 64-bit integer")]
    ValueOverflow { layer: usize, name: String },
    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type GeneratorResult = Result<GeneratorOutput, GeneratorError>;

pub fn run_generator(seed: Option<u64>, params: &GeneratorParams) -> GeneratorResult {
    match params {
        GeneratorParams::NestedIf(params) => run_nested_if_generator(seed, params),
        GeneratorParams::Network(params) => run_network_generator(seed, params),
    }
}

pub fn run_nested_if_generator(seed: Option<u64>, params: &NestedIfParams) -> GeneratorResult {
    if params.function_depth > MAX_FUNCTION_DEPTH {
        return Err(GeneratorError::FunctionDepth {
            depth: params.function_depth,
            max: MAX_FUNCTION_DEPTH,
        });
    }
    let params = params.clone();
    let handle = thread::Builder::new()
        .name("nested-if".to_string())
        .stack_size(NESTED_IF_STACK_SIZE)
        .spawn(move || {
            let mut ctx = Context::new(seed);
            let (file, entry_function) = nested_if::generate_file(&mut ctx, &params);
            finish(file, entry_function, ctx)
        })
        .map_err(GeneratorError::Spawn)?;
    match handle.join() {
        Ok(output) => Ok(output),
        Err(payload) => panic::resume_unwind(payload),
    }
}

pub fn run_network_generator(seed: Option<u64>, params: &NetworkParams) -> GeneratorResult {
    let mut ctx = Context::new(seed);
    let file = Network::generate(&mut ctx, params)?.into_file(params);
    Ok(finish(file, None, ctx))
}

fn finish(file: CFile, entry_function: Option<String>, ctx: Context) -> GeneratorOutput {
    let mut statistics_visitor = StatisticsVisitor::default();
    statistics_visitor.visit_file(&file);
    let mut emit_visitor = EmitVisitor::default();
    emit_visitor.visit_file(&file);

    GeneratorOutput {
        program: emit_visitor.output(),
        entry_function,
        generation_statistics: ctx.statistics,
        program_statistics: statistics_visitor.statistics,
    }
}

/// Writes the program to `path` in a single call, so nothing is left behind
/// when generation fails.
pub fn write_program<P: AsRef<Path>>(
    path: P,
    output: &GeneratorOutput,
) -> Result<(), GeneratorError> {
    let path = path.as_ref();
    fs::write(path, &output.program).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        assertions = output.generation_statistics.assertions,
        "wrote program"
    );
    Ok(())
}
