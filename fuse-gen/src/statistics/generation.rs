use serde::{Deserialize, Serialize};

/// Counters recorded by the generators while building a program.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationStatistics {
    /// Oracle assertions emitted.
    pub assertions: usize,
    /// Synthesized functions, `main` excluded.
    pub functions: usize,
    /// Branch condition variables declared.
    pub condition_vars: usize,
    /// Network layers generated, the initial layer included.
    pub layers: usize,
    /// Network variable slots over all layers.
    pub network_vars: usize,
    /// Distinct network variable identities.
    pub distinct_identities: usize,
}
