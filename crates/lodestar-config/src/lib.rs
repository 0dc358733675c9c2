//! Configuration for the Lodestar tools.
//!
//! Settings persist to disk as RON files, can be overridden via clap CLI
//! flags, and deserialize with per-field defaults so old config files keep
//! working as fields are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, LodConfig, SweepConfig};
pub use error::ConfigError;
