//! Peer version compatibility
//!
//! A peer is accepted when it runs the same client as this node and its
//! version is at or above the *effective floor*. The floor moves from
//! `prev_min_compatible` to `min_compatible` once the wall clock reaches
//! `min_compatible_time`, which gives peers on the previous floor a grace
//! window to upgrade. There is no upper bound: newer peers are always
//! accepted.

use crate::application::Application;
use crate::error::{Result, VersionError};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

/// Why a peer version was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncompatiblePeer {
    /// The peer runs a different application entirely
    #[error("Different client identity: peer {peer}, expected client {expected}")]
    DifferentClient { peer: Application, expected: String },

    /// The peer runs this client but is older than the effective floor
    #[error("Version below minimum compatible floor: peer {peer}, minimum {floor}")]
    BelowMinimum { peer: Application, floor: Application },
}

/// Outcome of a compatibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Compatible,
    Incompatible(IncompatiblePeer),
}

impl Verdict {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible)
    }

    /// Convert into a `Result` for callers that propagate rejections with `?`
    pub fn into_result(self) -> std::result::Result<(), IncompatiblePeer> {
        match self {
            Verdict::Compatible => Ok(()),
            Verdict::Incompatible(reason) => Err(reason),
        }
    }
}

/// Decides whether peer versions are compatible with this node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityChecker {
    current: Application,
    min_compatible: Application,
    min_compatible_time: DateTime<Utc>,
    prev_min_compatible: Application,
}

impl CompatibilityChecker {
    /// Build a checker without validating its inputs
    ///
    /// Callers are expected to supply `prev_min_compatible <= min_compatible
    /// <= current` for one client name. Use [`CompatibilityChecker::try_new`]
    /// to have that checked.
    pub fn new(
        current: Application,
        min_compatible: Application,
        min_compatible_time: DateTime<Utc>,
        prev_min_compatible: Application,
    ) -> Self {
        Self {
            current,
            min_compatible,
            min_compatible_time,
            prev_min_compatible,
        }
    }

    /// Build a checker, rejecting floors that are out of order or name
    /// another client
    pub fn try_new(
        current: Application,
        min_compatible: Application,
        min_compatible_time: DateTime<Utc>,
        prev_min_compatible: Application,
    ) -> Result<Self> {
        let prev_to_min = prev_min_compatible.compare(&min_compatible)?;
        let min_to_current = min_compatible.compare(&current)?;

        if prev_to_min == Ordering::Greater || min_to_current == Ordering::Greater {
            return Err(VersionError::InvalidCompatibilityOrder {
                current: current.to_string(),
                min_compatible: min_compatible.to_string(),
                prev_min_compatible: prev_min_compatible.to_string(),
            });
        }

        Ok(Self::new(
            current,
            min_compatible,
            min_compatible_time,
            prev_min_compatible,
        ))
    }

    /// Version this node reports to peers
    pub fn version(&self) -> &Application {
        &self.current
    }

    pub fn min_compatible(&self) -> &Application {
        &self.min_compatible
    }

    pub fn min_compatible_time(&self) -> DateTime<Utc> {
        self.min_compatible_time
    }

    pub fn prev_min_compatible(&self) -> &Application {
        &self.prev_min_compatible
    }

    /// Floor in force at `now`; the cutover instant itself uses the new floor
    pub fn effective_floor(&self, now: DateTime<Utc>) -> &Application {
        if now < self.min_compatible_time {
            &self.prev_min_compatible
        } else {
            &self.min_compatible
        }
    }

    /// Check a peer version as of `now`
    ///
    /// # Example
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use version::{Application, CompatibilityChecker, Semantic};
    ///
    /// let luxd = |minor, patch| Application::new("luxd", Semantic::new(1, minor, patch));
    /// let cutover = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let checker = CompatibilityChecker::new(luxd(22, 75), luxd(13, 0), cutover, luxd(12, 0));
    ///
    /// let before = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
    /// let after = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    /// assert!(checker.check_compatible(&luxd(12, 5), before).is_compatible());
    /// assert!(!checker.check_compatible(&luxd(12, 5), after).is_compatible());
    /// ```
    pub fn check_compatible(&self, peer: &Application, now: DateTime<Utc>) -> Verdict {
        if !peer.same_client(&self.current) {
            debug!(
                "Rejecting peer {}: expected client {}",
                peer,
                self.current.name()
            );
            return Verdict::Incompatible(IncompatiblePeer::DifferentClient {
                peer: peer.clone(),
                expected: self.current.name().to_string(),
            });
        }

        let floor = self.effective_floor(now);
        if peer.semantic() < floor.semantic() {
            debug!("Rejecting peer {}: below minimum {}", peer, floor);
            return Verdict::Incompatible(IncompatiblePeer::BelowMinimum {
                peer: peer.clone(),
                floor: floor.clone(),
            });
        }

        Verdict::Compatible
    }

    /// Check a peer version against the current wall clock
    pub fn check_compatible_now(&self, peer: &Application) -> Verdict {
        self.check_compatible(peer, Utc::now())
    }
}
