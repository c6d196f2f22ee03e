#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::{BTreeMap, BTreeSet};

use common::{os_pack, snapshot};
use proptest::prelude::*;
use resdex_core::diff::{diff, render_human_summary, summarize, DiffClassification};
use resdex_core::model::{Resource, Snapshot};

fn build(version: &str, shape: &BTreeMap<String, BTreeSet<String>>) -> Snapshot {
    Snapshot::new(
        version,
        shape
            .iter()
            .map(|(id, fields)| {
                fields
                    .iter()
                    .fold(Resource::new(id.as_str()), |r, f| {
                        r.with_field(common::string_field(f))
                    })
            })
            .collect(),
    )
}

fn shape() -> impl Strategy<Value = BTreeMap<String, BTreeSet<String>>> {
    prop::collection::btree_map(
        "[a-e]",
        prop::collection::btree_set("[p-u]", 0..4),
        0..5,
    )
}

proptest! {
    #[test]
    fn prop_no_predecessor_marks_everything_new(s in shape()) {
        let annotated = diff(&build("v1", &s), None);
        for r in &annotated.resources {
            prop_assert!(r.is_new);
            prop_assert!(r.fields.iter().all(|f| f.is_new));
        }
    }

    #[test]
    fn prop_self_diff_marks_nothing_new(s in shape()) {
        let snap = build("v1", &s);
        let annotated = diff(&snap, Some(&snap));
        for r in &annotated.resources {
            prop_assert!(!r.is_new);
            prop_assert!(r.fields.iter().all(|f| !f.is_new));
        }
    }

    #[test]
    fn prop_flags_match_set_difference(cur in shape(), prev in shape()) {
        let annotated = diff(&build("v2", &cur), Some(&build("v1", &prev)));
        for r in &annotated.resources {
            match prev.get(&r.id) {
                None => {
                    prop_assert!(r.is_new);
                    prop_assert!(r.fields.iter().all(|f| f.is_new));
                }
                Some(prev_fields) => {
                    prop_assert!(!r.is_new);
                    for f in &r.fields {
                        prop_assert_eq!(f.is_new, !prev_fields.contains(&f.id));
                    }
                }
            }
        }
        // Only current resources appear; removals are not surfaced
        let ids: BTreeSet<&str> = annotated.resources.iter().map(|r| r.id.as_str()).collect();
        let expected: BTreeSet<&str> = cur.keys().map(String::as_str).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_diff_is_repeatable_and_pure(cur in shape(), prev in shape()) {
        let current = build("v2", &cur);
        let previous = build("v1", &prev);
        let before = current.clone();

        let first = diff(&current, Some(&previous));
        let second = diff(&current, Some(&previous));

        prop_assert_eq!(&first, &second);
        let first_flags: Vec<bool> = first.resources.iter().map(|r| r.is_new).collect();
        let second_flags: Vec<bool> = second.resources.iter().map(|r| r.is_new).collect();
        prop_assert_eq!(first_flags, second_flags);
        prop_assert!(current.resources.iter().all(|r| !r.is_new));
        prop_assert_eq!(current, before);
    }
}

#[test]
fn test_new_field_on_existing_resource() {
    let v1 = snapshot("v1", &[("file", &["path"])]);
    let v2 = snapshot("v2", &[("file", &["path", "mode"])]);

    let annotated = diff(&v2, Some(&v1));
    let file = annotated.resource("file").unwrap();
    assert!(!file.is_new);
    assert!(!file.field("path").unwrap().is_new);
    assert!(file.field("mode").unwrap().is_new);
}

#[test]
fn test_deleted_resource_is_not_reported() {
    let v1 = snapshot("v1", &[("file", &["path"]), ("group", &["gid"])]);
    let v2 = snapshot("v2", &[("file", &["path"])]);

    let annotated = diff(&v2, Some(&v1));
    assert!(annotated.resource("group").is_none());
    let summary = summarize(&annotated, Some("v1"));
    assert_eq!(summary.classification, DiffClassification::Unchanged);
}

#[test]
fn test_stored_snapshot_untouched_across_repeated_diffs() {
    let repo = os_pack();
    let current = repo.get("v3").unwrap();
    let previous = repo.predecessor("v3").unwrap();

    for _ in 0..3 {
        let annotated = diff(current, previous);
        assert!(annotated.resource("users").unwrap().is_new);
    }
    let stored = repo.get("v3").unwrap();
    assert!(stored.resources.iter().all(|r| !r.is_new));
    assert!(stored
        .resources
        .iter()
        .flat_map(|r| r.fields.iter())
        .all(|f| !f.is_new));
}

#[test]
fn test_summary_of_os_pack() {
    let repo = os_pack();
    let annotated = diff(repo.get("v3").unwrap(), repo.predecessor("v3").unwrap());
    let summary = summarize(&annotated, Some("v2"));

    assert_eq!(summary.classification, DiffClassification::Changed);
    assert_eq!(summary.new_resources, vec!["users".to_string()]);
    assert_eq!(
        summary.new_fields.get("user"),
        Some(&vec!["uid".to_string()])
    );
    assert_eq!(summary.resource_count, 3);

    let text = render_human_summary(&summary);
    assert!(text.contains("## Changes in v3 (since v2)"));
    assert!(text.contains("- `users`"));
    assert!(text.contains("- `user`: `uid`"));
}
