//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains are null-terminated
//! 4. All domains follow the `WAYPOINT::*::V1\0` naming convention
//! 5. Equal payloads hashed under different domains never collide

use std::collections::BTreeSet;
use waypoint_kernel::proof::hash::{canonical_hash, HashDomain};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain:?}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain:?} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        let text = std::str::from_utf8(&bytes[..bytes.len() - 1]).expect("domain is ASCII");
        assert!(text.starts_with("WAYPOINT::"), "{domain:?}: {text}");
        assert!(text.ends_with("::V1"), "{domain:?}: {text}");
        assert!(
            !text.contains('\0'),
            "{domain:?} has an interior null byte"
        );
    }
}

#[test]
fn same_payload_distinct_digests() {
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|&d| canonical_hash(d, b"{}").as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}
