//! Build identity resolution
//!
//! The release pipeline injects `LUXD_VERSION_MAJOR`, `LUXD_VERSION_MINOR`
//! and `LUXD_VERSION_PATCH` at compile time (usually from the git tag).
//! Missing or empty values fall back to the defaults baked into the version
//! crate. The result is plain integers handed to the version context.

use crate::config::IdentityOverride;
use anyhow::{Result, anyhow};
use version::BuildIdentity;

const BUILD_MAJOR: Option<&str> = option_env!("LUXD_VERSION_MAJOR");
const BUILD_MINOR: Option<&str> = option_env!("LUXD_VERSION_MINOR");
const BUILD_PATCH: Option<&str> = option_env!("LUXD_VERSION_PATCH");

/// Identity injected into this binary at compile time
pub fn from_build_env() -> Result<BuildIdentity> {
    resolve(BUILD_MAJOR, BUILD_MINOR, BUILD_PATCH)
}

/// Resolve three optional injected strings into an identity
pub fn resolve(
    major: Option<&str>,
    minor: Option<&str>,
    patch: Option<&str>,
) -> Result<BuildIdentity> {
    let defaults = BuildIdentity::DEFAULT;
    Ok(BuildIdentity {
        major: component("LUXD_VERSION_MAJOR", major, defaults.major)?,
        minor: component("LUXD_VERSION_MINOR", minor, defaults.minor)?,
        patch: component("LUXD_VERSION_PATCH", patch, defaults.patch)?,
    })
}

fn component(name: &str, value: Option<&str>, default: u32) -> Result<u32> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| anyhow!("Invalid {}: {:?}", name, text)),
    }
}

/// Apply configuration overrides on top of a resolved identity
pub fn apply_overrides(identity: BuildIdentity, overrides: &IdentityOverride) -> BuildIdentity {
    BuildIdentity {
        major: overrides.major.unwrap_or(identity.major),
        minor: overrides.minor.unwrap_or(identity.minor),
        patch: overrides.patch.unwrap_or(identity.patch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_use_defaults() {
        assert_eq!(resolve(None, None, None).unwrap(), BuildIdentity::DEFAULT);
        assert_eq!(
            resolve(Some(""), Some(""), Some("")).unwrap(),
            BuildIdentity::DEFAULT
        );
    }

    #[test]
    fn test_injected_values() {
        let identity = resolve(Some("2"), None, Some("7")).unwrap();
        assert_eq!(
            identity,
            BuildIdentity {
                major: 2,
                minor: BuildIdentity::DEFAULT.minor,
                patch: 7,
            }
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = resolve(Some("one"), None, None).unwrap_err();
        assert!(err.to_string().contains("LUXD_VERSION_MAJOR"));
        assert!(resolve(None, Some("-1"), None).is_err());
        assert!(resolve(None, None, Some("1.5")).is_err());
    }

    #[test]
    fn test_overrides() {
        let overrides = IdentityOverride {
            major: None,
            minor: Some(30),
            patch: Some(0),
        };
        let identity = apply_overrides(BuildIdentity::DEFAULT, &overrides);
        assert_eq!(identity.major, BuildIdentity::DEFAULT.major);
        assert_eq!(identity.minor, 30);
        assert_eq!(identity.patch, 0);
    }
}
