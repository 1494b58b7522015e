//! CLI command implementations
//!
//! Each command renders a plain-text report from the version context; `main`
//! prints it.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;
use version::{Application, NodeVersions, ProtocolCompatibility, Semantic, Verdict};

/// Parse a query time given as RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC)
pub fn parse_time(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Ok(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("Invalid time {:?}, expected RFC 3339 or YYYY-MM-DD", text))
}

/// Describe this node's version identity
pub fn show(versions: &NodeVersions) -> String {
    let checker = versions.compatibility();
    let mut out = String::new();
    let _ = writeln!(out, "Version:                  {}", versions.current_app());
    let _ = writeln!(out, "Database:                 {}", versions.current_database());
    let _ = writeln!(out, "Previous database:        {}", versions.prev_database());
    let _ = writeln!(
        out,
        "RPC chain VM protocol:    {}",
        versions.rpc_chain_vm_protocol()
    );
    let _ = writeln!(out, "Minimum compatible:       {}", checker.min_compatible());
    let _ = writeln!(
        out,
        "  effective from:         {}",
        checker.min_compatible_time().to_rfc3339()
    );
    let _ = writeln!(
        out,
        "Previous minimum:         {}",
        checker.prev_min_compatible()
    );
    out
}

/// Check a peer version string at `now`
pub fn check(
    versions: &NodeVersions,
    peer: &str,
    now: DateTime<Utc>,
) -> Result<(Verdict, String)> {
    let peer = Application::parse(peer)?;
    let checker = versions.compatibility();
    let verdict = checker.check_compatible(&peer, now);

    let report = match &verdict {
        Verdict::Compatible => format!(
            "{} is compatible with {} (minimum {} at {})",
            peer,
            checker.version(),
            checker.effective_floor(now),
            now.to_rfc3339()
        ),
        Verdict::Incompatible(reason) => format!("{} is incompatible: {}", peer, reason),
    };
    Ok((verdict, report))
}

/// Query the protocol compatibility table
///
/// With neither argument the whole table is listed.
pub fn protocol(
    table: &ProtocolCompatibility,
    revision: Option<u32>,
    release: Option<&str>,
) -> Result<String> {
    let mut out = String::new();

    if let Some(release) = release {
        let release = Semantic::parse(release)?;
        match table.revision_of(&release) {
            Some(revision) => {
                let _ = writeln!(out, "{} speaks protocol revision {}", release, revision);
            }
            None => return Err(anyhow!("No protocol revision known for release {}", release)),
        }
        return Ok(out);
    }

    if let Some(revision) = revision {
        let releases = table
            .versions(revision)
            .ok_or_else(|| anyhow!("Unknown protocol revision {}", revision))?;
        let _ = writeln!(out, "{}: {}", revision, join(releases));
        return Ok(out);
    }

    for (revision, releases) in table.iter() {
        let _ = writeln!(out, "{}: {}", revision, join(releases));
    }
    Ok(out)
}

fn join(releases: &[Semantic]) -> String {
    releases
        .iter()
        .map(Semantic::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
