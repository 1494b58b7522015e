//! Process-wide version context
//!
//! Built once at startup and handed by reference to whatever performs peer
//! handshakes.

use crate::application::Application;
use crate::compatibility::CompatibilityChecker;
use crate::constants::{
    BuildIdentity, CURRENT_DATABASE, PREV_DATABASE, RPC_CHAIN_VM_PROTOCOL, min_compatible_version,
    prev_min_compatible_version,
};
use crate::error::{Result, StartupError};
use crate::semantic::Semantic;
use crate::table::ProtocolCompatibility;
use chrono::{DateTime, Utc};
use tracing::info;

/// Checker for `current` using the release floors
pub fn release_compatibility(
    current: Application,
    min_compatible_time: DateTime<Utc>,
) -> Result<CompatibilityChecker> {
    CompatibilityChecker::try_new(
        current,
        min_compatible_version(),
        min_compatible_time,
        prev_min_compatible_version(),
    )
}

/// Immutable version state of a running node
#[derive(Debug, Clone)]
pub struct NodeVersions {
    current: Semantic,
    current_app: Application,
    compatibility: CompatibilityChecker,
    protocol_table: ProtocolCompatibility,
}

impl NodeVersions {
    /// Build the context from a resolved identity, loading the bundled
    /// protocol table
    ///
    /// Fails if the release floors are out of order for this identity or the
    /// bundled table is invalid; the caller decides whether that is fatal.
    pub fn new(
        identity: BuildIdentity,
        min_compatible_time: DateTime<Utc>,
    ) -> std::result::Result<Self, StartupError> {
        let protocol_table = ProtocolCompatibility::embedded()?;
        Self::with_table(identity, min_compatible_time, protocol_table)
    }

    /// Same as [`NodeVersions::new`] with an explicit protocol table
    pub fn with_table(
        identity: BuildIdentity,
        min_compatible_time: DateTime<Utc>,
        protocol_table: ProtocolCompatibility,
    ) -> std::result::Result<Self, StartupError> {
        let current = identity.semantic();
        let current_app = identity.application();
        let compatibility = release_compatibility(current_app.clone(), min_compatible_time)?;

        info!(
            "Node version {} (minimum compatible {} from {}, previously {})",
            current_app,
            compatibility.min_compatible(),
            min_compatible_time,
            compatibility.prev_min_compatible()
        );

        Ok(Self {
            current,
            current_app,
            compatibility,
            protocol_table,
        })
    }

    pub fn current(&self) -> Semantic {
        self.current
    }

    pub fn current_app(&self) -> &Application {
        &self.current_app
    }

    pub fn compatibility(&self) -> &CompatibilityChecker {
        &self.compatibility
    }

    pub fn protocol_table(&self) -> &ProtocolCompatibility {
        &self.protocol_table
    }

    pub fn rpc_chain_vm_protocol(&self) -> u32 {
        RPC_CHAIN_VM_PROTOCOL
    }

    pub fn current_database(&self) -> Semantic {
        CURRENT_DATABASE
    }

    pub fn prev_database(&self) -> Semantic {
        PREV_DATABASE
    }
}
