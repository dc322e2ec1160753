use crate::params::{GeneratorParams, NestedIfParams, NetworkParams};
use crate::runtime::error::RunnerError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Grid of nested branch configurations and the analysis timer reported for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedIfSweep {
    pub const_init_vars: Vec<bool>,
    pub function_depths: Vec<usize>,
    pub branches_per_function: Vec<usize>,
    pub global_vars: Vec<bool>,
    /// Marker of the stdout line holding the elapsed time.
    pub marker: String,
    /// File name of the generated program.
    pub file_name: String,
}

impl Default for NestedIfSweep {
    fn default() -> Self {
        NestedIfSweep {
            const_init_vars: vec![true, false],
            function_depths: (0..4).collect(),
            branches_per_function: (0..4).collect(),
            global_vars: vec![false, true],
            marker: "TightComposer Elapsed".to_string(),
            file_name: "nestedIf.C".to_string(),
        }
    }
}

impl NestedIfSweep {
    /// Configurations with the first grid dimension varying slowest.
    pub fn configurations(&self) -> Vec<NestedIfParams> {
        let mut res = vec![];
        for &const_init_vars in &self.const_init_vars {
            for &function_depth in &self.function_depths {
                for &branches_per_function in &self.branches_per_function {
                    for &global_vars in &self.global_vars {
                        res.push(NestedIfParams {
                            function_depth,
                            branches_per_function,
                            global_vars,
                            const_init_vars,
                        });
                    }
                }
            }
        }
        res
    }
}

/// Grid of network configurations and the analysis timer reported for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSweep {
    pub num_layers: Vec<usize>,
    pub num_dependencies: Vec<usize>,
    pub vars_per_layer: Vec<usize>,
    pub fresh_vars: Vec<bool>,
    pub use_ssa: Vec<bool>,
    pub marker: String,
    pub file_name: String,
}

impl Default for NetworkSweep {
    fn default() -> Self {
        NetworkSweep {
            num_layers: (2..10).collect(),
            num_dependencies: vec![1, 3, 10],
            vars_per_layer: vec![10, 30],
            fresh_vars: vec![false, true],
            use_ssa: vec![false],
            marker: "ConstPropAnal Elapsed".to_string(),
            file_name: "arithNetwork.C".to_string(),
        }
    }
}

impl NetworkSweep {
    pub fn configurations(&self) -> Vec<NetworkParams> {
        let mut res = vec![];
        for &num_layers in &self.num_layers {
            for &num_dependencies in &self.num_dependencies {
                for &vars_per_layer in &self.vars_per_layer {
                    for &fresh_vars in &self.fresh_vars {
                        for &use_ssa in &self.use_ssa {
                            res.push(NetworkParams {
                                num_layers,
                                num_dependencies,
                                vars_per_layer,
                                fresh_vars,
                                use_ssa,
                            });
                        }
                    }
                }
            }
        }
        res
    }
}

/// A sweep over either generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Sweep {
    NestedIf(NestedIfSweep),
    Network(NetworkSweep),
}

impl Sweep {
    pub fn configurations(&self) -> Vec<GeneratorParams> {
        match self {
            Sweep::NestedIf(sweep) => sweep.configurations().into_iter().map(From::from).collect(),
            Sweep::Network(sweep) => sweep.configurations().into_iter().map(From::from).collect(),
        }
    }

    pub fn marker(&self) -> &str {
        match self {
            Sweep::NestedIf(sweep) => &sweep.marker,
            Sweep::Network(sweep) => &sweep.marker,
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Sweep::NestedIf(sweep) => &sweep.file_name,
            Sweep::Network(sweep) => &sweep.file_name,
        }
    }

    /// Header of the result table.
    pub fn header(&self) -> &'static str {
        match self {
            Sweep::NestedIf(_) => "funcDepth ifPerFuncDepth globalVars constInitVars Time",
            Sweep::Network(_) => {
                "numLayers numDependencies varsPerLayer freshVars useSSA Time NumLines"
            }
        }
    }
}

/// Loads a sweep grid from a RON file. Missing fields take their default value.
pub fn load_sweep<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, RunnerError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| RunnerError::Config {
        path: path.to_path_buf(),
        source,
    })
}
