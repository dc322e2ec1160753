//! Parameter sweeps running an external analysis over generated programs.

pub mod config;
pub mod error;
pub mod run;
