//! Version library for luxd
//!
//! This crate defines the version identity of a node, the rule that decides
//! whether a peer's version is compatible, and the table mapping RPC chain VM
//! protocol revisions to the releases that implemented them.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use version::{Application, BuildIdentity, NodeVersions};
//!
//! let cutover = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let versions = NodeVersions::new(BuildIdentity::default(), cutover).unwrap();
//!
//! let peer: Application = "luxd/1.12.5".parse().unwrap();
//! let before = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
//! let after = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
//!
//! assert!(versions.compatibility().check_compatible(&peer, before).is_compatible());
//! assert!(!versions.compatibility().check_compatible(&peer, after).is_compatible());
//! ```
//!
//! # Protocol Table
//!
//! ```
//! use version::{ProtocolCompatibility, RPC_CHAIN_VM_PROTOCOL};
//!
//! let table = ProtocolCompatibility::embedded().unwrap();
//! for release in table.versions(RPC_CHAIN_VM_PROTOCOL).unwrap() {
//!     assert_eq!(table.revision_of(release), Some(RPC_CHAIN_VM_PROTOCOL));
//! }
//! ```

pub mod application;
pub mod compatibility;
pub mod constants;
pub mod context;
pub mod error;
pub mod semantic;
pub mod table;

pub use application::Application;
pub use compatibility::{CompatibilityChecker, IncompatiblePeer, Verdict};
pub use constants::{
    BuildIdentity, CLIENT, CURRENT_DATABASE, MIN_COMPATIBLE, PREV_DATABASE, PREV_MIN_COMPATIBLE,
    RPC_CHAIN_VM_PROTOCOL, min_compatible_version, prev_min_compatible_version,
};
pub use context::{NodeVersions, release_compatibility};
pub use error::{CompatibilityTableError, Result, StartupError, VersionError};
pub use semantic::Semantic;
pub use table::{EMBEDDED_COMPATIBILITY_JSON, ProtocolCompatibility};
