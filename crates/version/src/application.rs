//! Application versions (`name/major.minor.patch`)

use crate::error::{Result, VersionError};
use crate::semantic::Semantic;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A semantic version scoped to a named client
///
/// Versions of different clients have no ordering: `partial_cmp` returns
/// `None` for them and [`Application::compare`] reports a
/// [`VersionError::NameMismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Application {
    name: String,
    version: Semantic,
}

impl Application {
    pub fn new(name: impl Into<String>, version: Semantic) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semantic(&self) -> Semantic {
        self.version
    }

    /// Whether both versions belong to the same client
    pub fn same_client(&self, other: &Application) -> bool {
        self.name == other.name
    }

    /// Order two versions of the same client
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    /// use version::{Application, Semantic};
    ///
    /// let old = Application::new("luxd", Semantic::new(1, 12, 0));
    /// let new = Application::new("luxd", Semantic::new(1, 13, 0));
    /// assert_eq!(old.compare(&new).unwrap(), Ordering::Less);
    ///
    /// let other = Application::new("otherclient", Semantic::new(1, 12, 0));
    /// assert!(old.compare(&other).is_err());
    /// ```
    pub fn compare(&self, other: &Application) -> Result<Ordering> {
        if !self.same_client(other) {
            return Err(VersionError::NameMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(self.version.cmp(&other.version))
    }

    /// Parse `"name/major.minor.patch"`
    pub fn parse(text: &str) -> Result<Self> {
        let (name, version) = text
            .rsplit_once('/')
            .ok_or_else(|| VersionError::MalformedApplication {
                input: text.to_string(),
                reason: "expected name/major.minor.patch",
            })?;
        if name.is_empty() {
            return Err(VersionError::MalformedApplication {
                input: text.to_string(),
                reason: "empty client name",
            });
        }
        let version = Semantic::parse(version).map_err(|_| VersionError::MalformedApplication {
            input: text.to_string(),
            reason: "version is not major.minor.patch",
        })?;
        Ok(Self::new(name, version))
    }
}

impl PartialOrd for Application {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl FromStr for Application {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Application {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Application> for String {
    fn from(value: Application) -> Self {
        value.to_string()
    }
}
