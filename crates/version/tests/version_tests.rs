//! Integration tests for version parsing, ordering and peer compatibility
//!
//! Covers the public API of the version crate, including the release
//! scenario of a `luxd/1.22.75` node with a 2024-01-01 cutover.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cmp::Ordering;
use version::{
    Application, BuildIdentity, CompatibilityChecker, CompatibilityTableError, IncompatiblePeer,
    NodeVersions, ProtocolCompatibility, RPC_CHAIN_VM_PROTOCOL, Semantic, Verdict, VersionError,
};

fn luxd(major: u32, minor: u32, patch: u32) -> Application {
    Application::new("luxd", Semantic::new(major, minor, patch))
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn release_checker() -> CompatibilityChecker {
    CompatibilityChecker::new(
        luxd(1, 22, 75),
        luxd(1, 13, 0),
        date(2024, 1, 1),
        luxd(1, 12, 0),
    )
}

mod semantic {
    use super::*;

    #[test]
    fn test_malformed_input_rejected() {
        for input in ["1.2", "1.2.x", "-1.2.3"] {
            assert!(matches!(
                Semantic::parse(input),
                Err(VersionError::MalformedVersion { .. })
            ));
        }
    }

    #[test]
    fn test_total_order_over_sample() {
        let sample: Vec<Semantic> = [0, 1, 2]
            .into_iter()
            .flat_map(|major| {
                [0, 1, 10].into_iter().flat_map(move |minor| {
                    [0, 3, 9]
                        .into_iter()
                        .map(move |patch| Semantic::new(major, minor, patch))
                })
            })
            .collect();

        for a in &sample {
            assert_eq!(a.cmp(a), Ordering::Equal);
            for b in &sample {
                // Antisymmetry
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                if a.cmp(b) == Ordering::Equal {
                    assert_eq!(a, b);
                }
                for c in &sample {
                    if a <= b && b <= c {
                        assert!(a <= c, "{} <= {} <= {} but not transitive", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let v = Semantic::new(7, 0, 42);
        assert_eq!(v.to_string(), "7.0.42");
        assert_eq!(v.to_string().parse::<Semantic>().unwrap(), v);
    }
}

mod compatibility {
    use super::*;

    #[test]
    fn test_release_scenario() {
        let checker = release_checker();
        let peer = luxd(1, 12, 5);

        assert_eq!(
            checker.check_compatible(&peer, date(2023, 12, 1)),
            Verdict::Compatible
        );
        assert_eq!(
            checker.check_compatible(&peer, date(2024, 2, 1)),
            Verdict::Incompatible(IncompatiblePeer::BelowMinimum {
                peer: peer.clone(),
                floor: luxd(1, 13, 0),
            })
        );

        let other = Application::new("otherclient", Semantic::new(1, 99, 0));
        for now in [date(2023, 12, 1), date(2024, 1, 1), date(2024, 2, 1)] {
            assert!(matches!(
                checker.check_compatible(&other, now),
                Verdict::Incompatible(IncompatiblePeer::DifferentClient { .. })
            ));
        }
    }

    #[test]
    fn test_time_gating_window() {
        let checker = release_checker();
        let cutover = date(2024, 1, 1);

        // Peers in [prev, min) are only accepted before the cutover.
        for peer in [luxd(1, 12, 0), luxd(1, 12, 99)] {
            assert!(
                checker
                    .check_compatible(&peer, cutover - Duration::seconds(1))
                    .is_compatible()
            );
            assert!(!checker.check_compatible(&peer, cutover).is_compatible());
            assert!(
                !checker
                    .check_compatible(&peer, cutover + Duration::seconds(1))
                    .is_compatible()
            );
        }

        // Below the previous floor is rejected on both sides.
        let stale = luxd(1, 11, 0);
        assert!(!checker.check_compatible(&stale, date(2023, 1, 1)).is_compatible());
        assert!(!checker.check_compatible(&stale, date(2025, 1, 1)).is_compatible());
    }

    #[test]
    fn test_boundary_inclusive() {
        let checker = release_checker();
        for now in [date(2023, 6, 1), date(2024, 1, 1), date(2024, 6, 1)] {
            let floor = checker.effective_floor(now).clone();
            assert!(checker.check_compatible(&floor, now).is_compatible());
        }
    }

    #[test]
    fn test_no_upper_bound() {
        let checker = release_checker();
        assert!(
            checker
                .check_compatible(&luxd(9, 0, 0), date(2024, 2, 1))
                .is_compatible()
        );
        assert!(
            checker
                .check_compatible(&luxd(u32::MAX, u32::MAX, u32::MAX), date(2024, 2, 1))
                .is_compatible()
        );
    }

    #[test]
    fn test_verdict_into_result() {
        let checker = release_checker();
        assert!(
            checker
                .check_compatible(&luxd(1, 22, 75), date(2024, 2, 1))
                .into_result()
                .is_ok()
        );
        let err = checker
            .check_compatible(&luxd(1, 0, 0), date(2024, 2, 1))
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("minimum"));
    }
}

mod protocol_table {
    use super::*;

    #[test]
    fn test_embedded_table_contains_current_revision() {
        let table = ProtocolCompatibility::embedded().unwrap();
        let releases = table.versions(RPC_CHAIN_VM_PROTOCOL).unwrap();
        assert!(releases.contains(&BuildIdentity::default().semantic()));
    }

    #[test]
    fn test_source_shape() {
        let table = ProtocolCompatibility::from_json(r#"{"42": ["1.22.0", "1.22.1"]}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(42, &[Semantic::new(1, 22, 0), Semantic::new(1, 22, 1)][..])]
        );
    }

    #[test]
    fn test_any_bad_entry_fails_load() {
        let result = ProtocolCompatibility::from_json(r#"{"40": ["1.20.0"], "41": ["1.21.x"]}"#);
        assert!(matches!(
            result,
            Err(CompatibilityTableError::InvalidVersion { revision: 41, .. })
        ));
    }
}

mod node_versions {
    use super::*;

    #[test]
    fn test_context_from_identity() {
        let identity = BuildIdentity {
            major: 1,
            minor: 23,
            patch: 0,
        };
        let versions = NodeVersions::new(identity, date(2024, 1, 1)).unwrap();
        assert_eq!(versions.current_app(), &luxd(1, 23, 0));
        assert_eq!(versions.current_database(), Semantic::new(1, 4, 5));
        assert_eq!(versions.prev_database(), Semantic::new(1, 0, 0));
        assert!(
            versions
                .compatibility()
                .check_compatible(&luxd(1, 13, 0), date(2024, 1, 1))
                .is_compatible()
        );
    }
}
