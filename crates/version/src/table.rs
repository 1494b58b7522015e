//! Protocol revision to release mapping
//!
//! Maps each RPC chain VM protocol revision to the node releases that spoke
//! it. Not consulted by the compatibility check; kept for downstream tooling.

use crate::error::CompatibilityTableError;
use crate::semantic::Semantic;
use std::collections::BTreeMap;
use tracing::debug;

/// Bundled table, keyed by decimal revision strings
pub const EMBEDDED_COMPATIBILITY_JSON: &str = include_str!("../compatibility.json");

/// Read-only protocol compatibility table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolCompatibility {
    entries: BTreeMap<u32, Vec<Semantic>>,
}

impl ProtocolCompatibility {
    /// Load a table from `{"<revision>": ["x.y.z", ...], ...}`
    ///
    /// Fails on the first bad key or version string; a partial table is
    /// never returned.
    ///
    /// # Example
    /// ```
    /// use version::{ProtocolCompatibility, Semantic};
    ///
    /// let table = ProtocolCompatibility::from_json(r#"{"42": ["1.22.0", "1.22.1"]}"#).unwrap();
    /// assert_eq!(
    ///     table.versions(42),
    ///     Some(&[Semantic::new(1, 22, 0), Semantic::new(1, 22, 1)][..])
    /// );
    /// assert!(ProtocolCompatibility::from_json(r#"{"42": ["1.22"]}"#).is_err());
    /// ```
    pub fn from_json(source: &str) -> Result<Self, CompatibilityTableError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(source)?;

        let mut entries = BTreeMap::new();
        for (key, version_strings) in raw {
            let revision = parse_revision(&key)?;
            let versions = version_strings
                .iter()
                .map(|text| Semantic::parse(text))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| CompatibilityTableError::InvalidVersion { revision, source })?;
            entries.insert(revision, versions);
        }

        debug!("Loaded protocol compatibility table with {} revisions", entries.len());
        Ok(Self { entries })
    }

    /// Load the table bundled with this crate
    pub fn embedded() -> Result<Self, CompatibilityTableError> {
        Self::from_json(EMBEDDED_COMPATIBILITY_JSON)
    }

    /// Releases that implemented `revision`, in declared order
    pub fn versions(&self, revision: u32) -> Option<&[Semantic]> {
        self.entries.get(&revision).map(Vec::as_slice)
    }

    /// Known revisions in ascending order
    pub fn revisions(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Protocol revision spoken by a given release
    pub fn revision_of(&self, version: &Semantic) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, versions)| versions.contains(version))
            .map(|(revision, _)| *revision)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Semantic])> + '_ {
        self.entries
            .iter()
            .map(|(revision, versions)| (*revision, versions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_revision(key: &str) -> Result<u32, CompatibilityTableError> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CompatibilityTableError::InvalidRevision {
            key: key.to_string(),
        });
    }
    key.parse()
        .map_err(|_| CompatibilityTableError::InvalidRevision {
            key: key.to_string(),
        })
}
