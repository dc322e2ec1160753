use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Parameters of the nested branch generator.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
pub struct NestedIfParams {
    /// Number of nested function boundaries.
    pub function_depth: usize,
    /// Nested `if` levels inside each function before the next function call.
    pub branches_per_function: usize,
    /// Declare the condition variables at global scope instead of inside the functions.
    pub global_vars: bool,
    /// Initialize every condition variable to its own ordinal.
    pub const_init_vars: bool,
}

impl Default for NestedIfParams {
    fn default() -> Self {
        NestedIfParams {
            function_depth: 1,
            branches_per_function: 2,
            global_vars: false,
            const_init_vars: true,
        }
    }
}

/// Parameters of the staged arithmetic network generator.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
pub struct NetworkParams {
    /// Number of layers, the initial layer included.
    pub num_layers: usize,
    /// Operands summed by every variable past the first layer, sampled with replacement.
    pub num_dependencies: usize,
    pub vars_per_layer: usize,
    /// Draw a new identity for every variable instead of reusing the slot index.
    pub fresh_vars: bool,
    /// Only changes the pragma.
    pub use_ssa: bool,
}

impl Default for NetworkParams {
    fn default() -> Self {
        NetworkParams {
            num_layers: 2,
            num_dependencies: 1,
            vars_per_layer: 10,
            fresh_vars: false,
            use_ssa: false,
        }
    }
}

/// Parameters of either generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorParams {
    NestedIf(NestedIfParams),
    Network(NetworkParams),
}

impl From<NestedIfParams> for GeneratorParams {
    fn from(params: NestedIfParams) -> GeneratorParams {
        GeneratorParams::NestedIf(params)
    }
}

impl From<NetworkParams> for GeneratorParams {
    fn from(params: NetworkParams) -> GeneratorParams {
        GeneratorParams::Network(params)
    }
}

impl GeneratorParams {
    /// Parameter values in command line order, toggles as `0`/`1`.
    pub fn columns(&self) -> Vec<String> {
        match self {
            GeneratorParams::NestedIf(params) => vec![
                params.function_depth.to_string(),
                params.branches_per_function.to_string(),
                Toggle(params.global_vars).to_string(),
                Toggle(params.const_init_vars).to_string(),
            ],
            GeneratorParams::Network(params) => vec![
                params.num_layers.to_string(),
                params.num_dependencies.to_string(),
                params.vars_per_layer.to_string(),
                Toggle(params.fresh_vars).to_string(),
                Toggle(params.use_ssa).to_string(),
            ],
        }
    }
}

/// Boolean written as `0` or `1` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle(pub bool);

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Toggle(false)),
            "1" => Ok(Toggle(true)),
            _ => Err(format!("expected 0 or 1, found {:?}", s)),
        }
    }
}

impl Display for Toggle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 as u8)
    }
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        toggle.0
    }
}
