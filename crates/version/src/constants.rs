//! Release constants for the `luxd` client

use crate::application::Application;
use crate::semantic::Semantic;

/// Client name reported in every application version
pub const CLIENT: &str = "luxd";

/// RPC chain VM protocol revision
///
/// Bumped whenever a plugin VM has to upgrade along with the node to stay
/// compatible.
pub const RPC_CHAIN_VM_PROTOCOL: u32 = 42;

/// Peers at or above this version are accepted after the cutover
pub const MIN_COMPATIBLE: Semantic = Semantic::new(1, 13, 0);

/// Peers at or above this version are accepted before the cutover
pub const PREV_MIN_COMPATIBLE: Semantic = Semantic::new(1, 12, 0);

pub const DATABASE_VERSION_1_4_5: Semantic = Semantic::new(1, 4, 5);
pub const DATABASE_VERSION_1_0_0: Semantic = Semantic::new(1, 0, 0);

/// On-disk database format written by this release
pub const CURRENT_DATABASE: Semantic = DATABASE_VERSION_1_4_5;

/// Database format of the previous release, still readable for migration
pub const PREV_DATABASE: Semantic = DATABASE_VERSION_1_0_0;

/// Version identity of the node binary
///
/// Holds already-resolved integers. Resolving them from build metadata or
/// the environment happens before this value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildIdentity {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl BuildIdentity {
    /// Identity used when nothing was injected at build time
    pub const DEFAULT: BuildIdentity = BuildIdentity {
        major: 1,
        minor: 22,
        patch: 75,
    };

    pub fn semantic(&self) -> Semantic {
        Semantic::new(self.major, self.minor, self.patch)
    }

    pub fn application(&self) -> Application {
        Application::new(CLIENT, self.semantic())
    }
}

impl Default for BuildIdentity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn min_compatible_version() -> Application {
    Application::new(CLIENT, MIN_COMPATIBLE)
}

pub fn prev_min_compatible_version() -> Application {
    Application::new(CLIENT, PREV_MIN_COMPATIBLE)
}
