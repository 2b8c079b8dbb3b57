use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasError {
    /// The alias file exists but could not be read or parsed
    #[error("Failed to load aliases from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, AliasError>;
