//! Version error types

use thiserror::Error;

/// Errors produced while parsing or relating versions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Text does not have the `major.minor.patch` shape
    #[error("Malformed version {input:?}: {reason}")]
    MalformedVersion { input: String, reason: &'static str },

    /// Text does not have the `name/major.minor.patch` shape
    #[error("Malformed application version {input:?}: {reason}")]
    MalformedApplication { input: String, reason: &'static str },

    /// Two application versions with different client names were compared
    #[error("Cannot compare versions of different clients: {left} vs {right}")]
    NameMismatch { left: String, right: String },

    /// Compatibility floors are not ordered `prev <= min <= current`
    #[error(
        "Invalid compatibility order: expected {prev_min_compatible} <= {min_compatible} <= {current}"
    )]
    InvalidCompatibilityOrder {
        current: String,
        min_compatible: String,
        prev_min_compatible: String,
    },
}

/// Errors produced while loading the protocol compatibility table
#[derive(Debug, Error)]
pub enum CompatibilityTableError {
    /// The source is not a JSON object of string arrays
    #[error("Invalid compatibility table: {0}")]
    Json(#[from] serde_json::Error),

    /// A key is not a decimal unsigned integer
    #[error("Invalid protocol revision {key:?} in compatibility table")]
    InvalidRevision { key: String },

    /// A version string under a revision failed to parse
    #[error("Invalid version for protocol revision {revision}: {source}")]
    InvalidVersion {
        revision: u32,
        #[source]
        source: VersionError,
    },
}

/// Errors that stop a node from building its version context
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Table(#[from] CompatibilityTableError),
}

/// Type alias for version results
pub type Result<T> = std::result::Result<T, VersionError>;
