//! Property-based tests for the in-memory release store

use proptest::prelude::*;
use release_proxy::{Chart, FakeProxy, ReleaseProxy};
use std::collections::BTreeSet;

/// Strategy for a set of distinct releases spread over a few namespaces
fn releases_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(
        "[a-z][a-z0-9-]{0,12}",
        prop_oneof![Just("ns1"), Just("ns2"), Just("ns3")],
        0..40,
    )
    .prop_map(|map| {
        map.into_iter()
            .map(|(name, ns)| (name, ns.to_string()))
            .collect()
    })
}

fn seeded(releases: &[(String, String)]) -> FakeProxy {
    let mut proxy = FakeProxy::new();
    for (name, namespace) in releases {
        proxy
            .create_release(name, namespace, "", &Chart::default())
            .unwrap();
    }
    proxy
}

/// Property: listing with a large enough limit returns exactly the created releases.
#[test]
fn prop_list_returns_all_created_releases() {
    proptest!(|(releases in releases_strategy())| {
        let proxy = seeded(&releases);

        let listed: BTreeSet<String> = proxy
            .list_releases("", releases.len())
            .unwrap()
            .into_iter()
            .map(|o| o.release_name)
            .collect();
        let expected: BTreeSet<String> = releases.iter().map(|(n, _)| n.clone()).collect();
        prop_assert_eq!(listed, expected);

        let in_ns1: BTreeSet<String> = proxy
            .list_releases("ns1", releases.len())
            .unwrap()
            .into_iter()
            .map(|o| o.release_name)
            .collect();
        let expected_ns1: BTreeSet<String> = releases
            .iter()
            .filter(|(_, ns)| ns == "ns1")
            .map(|(n, _)| n.clone())
            .collect();
        prop_assert_eq!(in_ns1, expected_ns1);
    });
}

/// Property: a listing never returns more than `limit + 1` entries.
#[test]
fn prop_list_bounded_by_limit_plus_one() {
    proptest!(|(releases in releases_strategy(), limit in 0usize..50)| {
        let proxy = seeded(&releases);
        let listed = proxy.list_releases("", limit).unwrap();
        prop_assert_eq!(listed.len(), releases.len().min(limit + 1));
    });
}

/// Property: deleting an existing release shrinks the store by one and removes only that name.
#[test]
fn prop_delete_removes_exactly_one() {
    proptest!(|(releases in releases_strategy(), pick in any::<prop::sample::Index>())| {
        prop_assume!(!releases.is_empty());
        let mut proxy = seeded(&releases);
        let (name, namespace) = &releases[pick.index(releases.len())];

        proxy.delete_release(name, namespace).unwrap();

        prop_assert_eq!(proxy.len(), releases.len() - 1);
        prop_assert!(proxy.get_release(name, namespace).is_err());
        for (other, _) in releases.iter().filter(|(n, _)| n != name) {
            prop_assert!(proxy.get_release(other, "").is_ok());
        }
    });
}

/// Property: failed creates and updates never change the store.
#[test]
fn prop_duplicate_create_and_update_are_inert() {
    proptest!(|(releases in releases_strategy(), pick in any::<prop::sample::Index>())| {
        prop_assume!(!releases.is_empty());
        let mut proxy = seeded(&releases);
        let before = proxy.releases().to_vec();
        let (name, _) = &releases[pick.index(releases.len())];

        prop_assert!(proxy.create_release(name, "elsewhere", "", &Chart::default()).is_err());
        prop_assert!(proxy.update_release(name, "elsewhere", "a: b", &Chart::default()).is_ok());
        prop_assert_eq!(proxy.releases(), before.as_slice());
    });
}
