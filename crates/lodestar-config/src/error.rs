//! Configuration error types.

/// Errors raised while loading or persisting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read `config.ron` from disk.
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// Could not write `config.ron` to disk.
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    /// The file exists but is not valid RON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config could not be serialized to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
